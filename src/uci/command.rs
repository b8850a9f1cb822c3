use crate::board::MoveInput;
use crate::engine::GoParams;

use super::UciError;

/// Arguments of a `position` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCommand {
    /// FEN text, `None` for `startpos`.
    pub fen: Option<String>,
    pub moves: Vec<MoveInput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(PositionCommand),
    Go(GoParams),
    Stop,
    Quit,
    /// Print the static evaluation of the current position.
    Eval,
    Perft(u32),
    Unknown(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_uci_command(line: &str) -> Result<Option<UciCommand>, UciError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = parts.first() else {
        return Ok(None);
    };

    let cmd = match name {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(parse_position_args(&parts[1..])?),
        "go" => UciCommand::Go(parse_go_args(&parts[1..])?),
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        "eval" => UciCommand::Eval,
        "perft" => {
            let depth = match parts.get(1) {
                Some(text) => parse_value("perft", text)?,
                None => 1,
            };
            UciCommand::Perft(depth)
        }
        _ => UciCommand::Unknown(line.trim().to_string()),
    };
    Ok(Some(cmd))
}

fn parse_value<T: std::str::FromStr>(name: &str, text: &str) -> Result<T, UciError> {
    text.parse().map_err(|_| UciError::InvalidValue {
        name: name.to_string(),
        value: text.to_string(),
    })
}

/// Parse `startpos|fen <fields…> [moves <m1> <m2> …]`.
pub fn parse_position_args(args: &[&str]) -> Result<PositionCommand, UciError> {
    let moves_at = args.iter().position(|&t| t == "moves").unwrap_or(args.len());
    let (setup, rest) = args.split_at(moves_at);

    let fen = match setup.split_first() {
        Some((&"startpos", [])) => None,
        Some((&"fen", fields)) if !fields.is_empty() => Some(fields.join(" ")),
        _ => return Err(UciError::MissingParts),
    };

    let moves = rest
        .iter()
        .skip(1)
        .map(|&text| {
            text.parse::<MoveInput>()
                .map_err(|error| UciError::InvalidMove {
                    move_str: text.to_string(),
                    error,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PositionCommand { fen, moves })
}

/// Parse the limits of a `go` command. Unknown tokens are ignored.
pub fn parse_go_args(args: &[&str]) -> Result<GoParams, UciError> {
    let mut go = GoParams::default();
    let mut tokens = args.iter().copied();
    while let Some(token) = tokens.next() {
        let slot = match token {
            "wtime" => &mut go.wtime,
            "btime" => &mut go.btime,
            "winc" => &mut go.winc,
            "binc" => &mut go.binc,
            "movestogo" => &mut go.movestogo,
            "movetime" => &mut go.movetime,
            "depth" => {
                let text = tokens.next().ok_or(UciError::MissingParts)?;
                go.depth = Some(parse_value(token, text)?);
                continue;
            }
            "infinite" => {
                go.infinite = true;
                continue;
            }
            _ => continue,
        };
        let text = tokens.next().ok_or(UciError::MissingParts)?;
        // Clocks can go negative when a GUI is late
        let value: i64 = parse_value(token, text)?;
        *slot = Some(value.max(0) as u64);
    }
    Ok(go)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_commands() {
        assert_eq!(parse_uci_command("uci").expect("ok"), Some(UciCommand::Uci));
        assert_eq!(parse_uci_command("  isready ").expect("ok"), Some(UciCommand::IsReady));
        assert_eq!(parse_uci_command("").expect("ok"), None);
        assert_eq!(parse_uci_command("perft 3").expect("ok"), Some(UciCommand::Perft(3)));
        assert_eq!(
            parse_uci_command("xyzzy 1").expect("ok"),
            Some(UciCommand::Unknown("xyzzy 1".to_string()))
        );
        assert!(matches!(
            parse_uci_command("perft deep"),
            Err(UciError::InvalidValue { .. })
        ));
    }

    #[test]
    fn position_startpos_with_moves() {
        let cmd = parse_position_args(&["startpos", "moves", "e2e4", "e7e5"]).expect("ok");
        assert_eq!(cmd.fen, None);
        assert_eq!(cmd.moves.len(), 2);
        assert_eq!(cmd.moves[1].to_string(), "e7e5");
    }

    #[test]
    fn position_fen_with_and_without_counters() {
        let cmd = parse_position_args(&["fen", "4k3/8/8/8/8/8/8/4K3", "w", "-", "-"]).expect("ok");
        assert_eq!(cmd.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - -"));
        let cmd = parse_position_args(&[
            "fen", "4k3/1P6/8/8/8/8/8/4K3", "w", "-", "-", "0", "1", "moves", "b7b8n",
        ])
        .expect("ok");
        assert_eq!(cmd.fen.as_deref(), Some("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1"));
        assert_eq!(cmd.moves[0].to_string(), "b7b8n");
    }

    #[test]
    fn position_errors() {
        assert!(matches!(parse_position_args(&[]), Err(UciError::MissingParts)));
        assert!(matches!(parse_position_args(&["fen"]), Err(UciError::MissingParts)));
        assert!(matches!(
            parse_position_args(&["startpos", "moves", "e2e9"]),
            Err(UciError::InvalidMove { .. })
        ));
    }

    #[test]
    fn go_limits() {
        let go = parse_go_args(&["wtime", "1000", "btime", "-20", "winc", "10", "depth", "7"])
            .expect("ok");
        assert_eq!(go.wtime, Some(1000));
        assert_eq!(go.btime, Some(0));
        assert_eq!(go.winc, Some(10));
        assert_eq!(go.depth, Some(7));
        assert!(!go.infinite);

        let go = parse_go_args(&["infinite", "ponder"]).expect("ok");
        assert!(go.infinite);
        assert!(matches!(parse_go_args(&["movetime"]), Err(UciError::MissingParts)));
        assert!(matches!(
            parse_go_args(&["movetime", "soon"]),
            Err(UciError::InvalidValue { .. })
        ));
    }
}
