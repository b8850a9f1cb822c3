//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Reads commands line by line, keeps the current position, and drives an
//! [`EngineController`]. Progress and best moves go to stdout; rejected input
//! is logged and the loop keeps running.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::board::{
    centipawns, FenError, MoveParseError, Position, SearchParams, SearchReporter,
};
use crate::engine::{compute_deadline, BestMoveSink, EngineController, EngineError};

pub mod command;
pub mod print;

pub use command::{parse_uci_command, PositionCommand, UciCommand};

/// Errors raised while handling UCI input.
#[derive(Debug, Error)]
pub enum UciError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),
    #[error("invalid move '{move_str}': {error}")]
    InvalidMove {
        move_str: String,
        #[source]
        error: MoveParseError,
    },
    #[error("missing required parts in command")]
    MissingParts,
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl PositionCommand {
    /// Build the position this command describes.
    pub fn load(&self) -> Result<Position, UciError> {
        let start = match &self.fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::new(),
        };
        self.moves.iter().try_fold(start, |pos, &input| {
            pos.apply_input(input).map_err(|error| UciError::InvalidMove {
                move_str: input.to_string(),
                error,
            })
        })
    }
}

/// Parse and load a full `position …` line.
pub fn try_parse_position_command(line: &str) -> Result<Position, UciError> {
    match parse_uci_command(line)? {
        Some(UciCommand::Position(cmd)) => cmd.load(),
        _ => Err(UciError::MissingParts),
    }
}

/// State of one UCI session.
pub struct UciSession {
    engine: EngineController,
    position: Position,
    params: SearchParams,
}

impl UciSession {
    #[must_use]
    pub fn new(params: SearchParams, sink: BestMoveSink, reporter: Option<SearchReporter>) -> Self {
        let mut engine = EngineController::new(params.clone(), sink);
        engine.set_reporter(reporter);
        UciSession {
            engine,
            position: Position::new(),
            params,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Handle one command. Returns `Ok(false)` when the session should end.
    pub fn handle(&mut self, command: UciCommand) -> Result<bool, UciError> {
        match command {
            UciCommand::Uci => print::print_id(),
            UciCommand::IsReady => print::print_ready(),
            UciCommand::UciNewGame => {
                self.engine.new_game();
                self.position = Position::new();
            }
            UciCommand::Position(cmd) => self.position = cmd.load()?,
            UciCommand::Go(go) => {
                let side = self.position.side_to_move();
                let deadline = compute_deadline(&go, side, &self.params, Instant::now());
                self.engine
                    .start_search(self.position, go.max_depth(&self.params), deadline)?;
            }
            UciCommand::Stop => self.engine.stop_search(),
            UciCommand::Eval => {
                let score = self.position.evaluate(0);
                print::print_eval(score, centipawns(score, self.position.pawn_value()));
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.position.perft(depth);
                print::print_perft_info(depth, nodes, start.elapsed());
            }
            UciCommand::Quit => {
                self.engine.stop_search();
                return Ok(false);
            }
            UciCommand::Unknown(text) => log::warn!("unknown command: {text}"),
        }
        Ok(true)
    }

    /// Stop any running search before the session is dropped.
    pub fn shutdown(&mut self) {
        self.engine.stop_search();
    }
}

/// Run the UCI loop over `input` until `quit` or end of input.
pub fn run<R: BufRead>(input: R) -> Result<(), UciError> {
    let sink: BestMoveSink = Arc::new(print::print_bestmove);
    let reporter: SearchReporter = Arc::new(print::print_info);
    let mut session = UciSession::new(SearchParams::default(), sink, Some(reporter));

    for line in input.lines() {
        let line = line?;
        let outcome = parse_uci_command(&line).and_then(|command| match command {
            Some(command) => session.handle(command),
            None => Ok(true),
        });
        match outcome {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) => log::warn!("{e}"),
        }
    }
    session.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_line_loads_moves() {
        let pos = try_parse_position_command("position startpos moves e2e4 e7e5 g1f3").expect("ok");
        assert_eq!(pos.en_passant(), 0);
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 1"
        );
    }

    #[test]
    fn position_line_errors() {
        assert!(matches!(
            try_parse_position_command("position fen 8/8/8 w - -"),
            Err(UciError::InvalidFen(_))
        ));
        assert!(matches!(
            try_parse_position_command("position startpos moves e3e4"),
            Err(UciError::InvalidMove { .. })
        ));
        assert!(matches!(try_parse_position_command("go"), Err(UciError::MissingParts)));
    }

    #[test]
    fn session_keeps_position_and_survives_bad_input() {
        let sink: BestMoveSink = Arc::new(|_| {});
        let mut session = UciSession::new(SearchParams::default(), sink, None);
        let cmd = parse_uci_command("position startpos moves e2e4").expect("ok").expect("cmd");
        assert!(session.handle(cmd).expect("handled"));
        assert_eq!(session.position().side_to_move(), crate::board::Color::Black);

        let bad = parse_uci_command("position startpos moves e2e4 e2e4").expect("ok").expect("cmd");
        assert!(session.handle(bad).is_err());
        assert_eq!(session.position().side_to_move(), crate::board::Color::Black);

        assert!(!session.handle(UciCommand::Quit).expect("quit"));
    }

    #[test]
    fn run_stops_at_quit() {
        let input = b"uci\nisready\nposition startpos\nbogus\nquit\nisready\n";
        run(&input[..]).expect("loop");
    }
}
