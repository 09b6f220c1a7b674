//! Decoding of move commands such as `B D4` or `W pass`.
//!
//! Game records may also write White as `P` and a pass as `PASSA`, as in
//! `B|D4//P|Q16//B|PASSA//P|F3//`.
//!
//! Columns use the letters A-Z without `I`; rows are 1-based, so `A1` is
//! `(0, 0)`. Board bounds are not checked here: a vertex off the board
//! decodes fine and is rejected by the engine.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{column_label, Cell, Point};
use crate::constants::COLUMN_LABELS;
use crate::game::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty command")]
    Empty,
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("missing vertex in '{0}'")]
    MissingVertex(String),
    #[error("invalid vertex '{0}'")]
    InvalidVertex(String),
    #[error("unexpected text after command '{0}'")]
    TrailingInput(String),
}

/// Parse `black`/`white`, their initials, or `P` for White.
pub fn parse_color(s: &str) -> Result<Cell, NotationError> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Ok(Cell::Black),
        "w" | "white" | "p" => Ok(Cell::White),
        _ => Err(NotationError::UnknownColor(s.to_string())),
    }
}

/// Parse a vertex like `D4`. Returns `None` for `pass` or `passa`.
pub fn parse_vertex(s: &str) -> Result<Option<Point>, NotationError> {
    if s.eq_ignore_ascii_case("pass") || s.eq_ignore_ascii_case("passa") {
        return Ok(None);
    }
    let invalid = || NotationError::InvalidVertex(s.to_string());

    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let x = COLUMN_LABELS
        .iter()
        .position(|&c| c as char == col_char)
        .ok_or_else(invalid)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }
    Ok(Some((x, row - 1)))
}

/// Format a point as a vertex string, e.g. `(3, 3)` as `D4`.
///
/// Returns `None` for columns past the last label.
pub fn format_point((x, y): Point) -> Option<String> {
    column_label(x).map(|label| format!("{label}{}", y + 1))
}

impl FromStr for Command {
    type Err = NotationError;

    /// Parse `<color> <vertex>`, with `|` or whitespace between the two.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == '|' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let player = parse_color(parts.next().ok_or(NotationError::Empty)?)?;
        let vertex = parts
            .next()
            .ok_or_else(|| NotationError::MissingVertex(s.trim().to_string()))?;
        if parts.next().is_some() {
            return Err(NotationError::TrailingInput(s.trim().to_string()));
        }
        Ok(match parse_vertex(vertex)? {
            Some((x, y)) => Command::Place { player, x, y },
            None => Command::Pass { player },
        })
    }
}

/// Split text into commands separated by newlines, `;` or `//`.
///
/// Blank entries and lines starting with `#` are skipped.
pub fn parse_commands(text: &str) -> Result<Vec<Command>, NotationError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split("//"))
        .flat_map(|chunk| chunk.split(';'))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("D4"), Ok(Some((3, 3))));
        assert_eq!(parse_vertex("q16"), Ok(Some((15, 15))));
        assert_eq!(parse_vertex("F3"), Ok(Some((5, 2))));
        assert_eq!(parse_vertex("A1"), Ok(Some((0, 0))));
        assert_eq!(parse_vertex("Pass"), Ok(None));
        assert_eq!(parse_vertex("PASSA"), Ok(None));
    }

    #[test]
    fn test_parse_vertex_skips_i() {
        let h5 = parse_vertex("H5").unwrap().unwrap();
        let j5 = parse_vertex("J5").unwrap().unwrap();
        assert_eq!(j5.0 - h5.0, 1, "J should be one column after H (skipping I)");
        assert!(parse_vertex("I5").is_err());
    }

    #[test]
    fn test_parse_vertex_errors() {
        for bad in ["", "D", "D0", "4D", "D4x", "%3"] {
            assert_eq!(
                parse_vertex(bad),
                Err(NotationError::InvalidVertex(bad.to_string())),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_format_point_roundtrip() {
        for coord in ["A1", "D4", "H8", "J9", "T19"] {
            let pt = parse_vertex(coord).unwrap().unwrap();
            assert_eq!(format_point(pt).as_deref(), Some(coord));
        }
        assert_eq!(format_point((24, 0)).as_deref(), Some("Z1"));
        assert_eq!(format_point((25, 0)), None);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            "B D4".parse::<Command>(),
            Ok(Command::Place { player: Cell::Black, x: 3, y: 3 })
        );
        assert_eq!(
            "white|pass".parse::<Command>(),
            Ok(Command::Pass { player: Cell::White })
        );
        assert_eq!(
            "p|passa".parse::<Command>(),
            Ok(Command::Pass { player: Cell::White })
        );
        assert_eq!(
            "X D4".parse::<Command>(),
            Err(NotationError::UnknownColor("X".to_string()))
        );
        assert_eq!(
            "B".parse::<Command>(),
            Err(NotationError::MissingVertex("B".to_string()))
        );
        assert_eq!(
            "B D4 E5".parse::<Command>(),
            Err(NotationError::TrailingInput("B D4 E5".to_string()))
        );
    }

    #[test]
    fn test_parse_commands_separators() {
        let commands = parse_commands("B|D4//W|Q16//B|pass//W|F3//").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Place { player: Cell::Black, x: 3, y: 3 },
                Command::Place { player: Cell::White, x: 15, y: 15 },
                Command::Pass { player: Cell::Black },
                Command::Place { player: Cell::White, x: 5, y: 2 },
            ]
        );

        let text = "# opening\nB D4; W Q16\n\nB pass\n";
        assert_eq!(parse_commands(text).unwrap().len(), 3);
    }

    #[test]
    fn test_parse_commands_game_record_aliases() {
        let commands = parse_commands("B|D4//P|Q16//B|PASSA//P|F3//").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Place { player: Cell::Black, x: 3, y: 3 },
                Command::Place { player: Cell::White, x: 15, y: 15 },
                Command::Pass { player: Cell::Black },
                Command::Place { player: Cell::White, x: 5, y: 2 },
            ],
            "P is White and PASSA is a pass"
        );
    }
}
