use std::time::Duration;

use crate::board::{Move, SearchReport};

#[must_use]
pub fn format_info(report: &SearchReport) -> String {
    let score = match report.mate_in {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {}", report.score_cp),
    };
    format!(
        "info depth {} nodes {} nps {} score {} time {} pv {}",
        report.depth, report.nodes, report.nps, score, report.time_ms, report.best_move
    )
}

#[must_use]
pub fn format_bestmove(best_move: Option<Move>) -> String {
    match best_move {
        Some(mv) => format!("bestmove {mv}"),
        None => "bestmove 0000".to_string(),
    }
}

pub fn print_id() {
    println!("id name rotachess {}", env!("CARGO_PKG_VERSION"));
    println!("id author the rotachess developers");
    println!("uciok");
}

pub fn print_ready() {
    println!("readyok");
}

pub fn print_info(report: &SearchReport) {
    println!("{}", format_info(report));
}

pub fn print_bestmove(best_move: Option<Move>) {
    println!("{}", format_bestmove(best_move));
}

pub fn print_eval(score: i32, score_cp: i32) {
    println!("info string eval {score} cp {score_cp}");
}

pub fn print_perft_info(depth: u32, nodes: u64, elapsed: Duration) {
    println!(
        "info string perft depth {} nodes {} time {}",
        depth,
        nodes,
        elapsed.as_millis()
    );
}
