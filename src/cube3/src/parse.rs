use crate::{Face, Turn, TurnAngle};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a face turn")]
pub struct ParseTurnError(String);

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Face::U => "U",
            Face::R => "R",
            Face::F => "F",
            Face::D => "D",
            Face::L => "L",
            Face::B => "B",
        })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match self.angle {
            TurnAngle::Clockwise => Ok(()),
            TurnAngle::Half => f.write_str("2"),
            TurnAngle::Counterclockwise => f.write_str("'"),
        }
    }
}

impl FromStr for Turn {
    type Err = ParseTurnError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let face = match chars.next() {
            Some('U') => Face::U,
            Some('R') => Face::R,
            Some('F') => Face::F,
            Some('D') => Face::D,
            Some('L') => Face::L,
            Some('B') => Face::B,
            _ => return Err(ParseTurnError(token.to_owned())),
        };
        let angle = match chars.next() {
            None => TurnAngle::Clockwise,
            Some('2') => TurnAngle::Half,
            Some('\'') => TurnAngle::Counterclockwise,
            Some(_) => return Err(ParseTurnError(token.to_owned())),
        };
        if chars.next().is_some() {
            return Err(ParseTurnError(token.to_owned()));
        }
        Ok(Turn { face, angle })
    }
}

/// Parse a whitespace-separated move sequence like `"R U2 F' D"`.
///
/// # Errors
///
/// Fails on the first token that is not a face turn.
pub fn parse_move_sequence(sequence: &str) -> Result<Vec<Turn>, ParseTurnError> {
    sequence.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn notation_round_trips() {
        for turn in Turn::ALL {
            assert_eq!(turn.to_string().parse::<Turn>(), Ok(turn));
        }
    }

    #[test]
    fn parses_a_scramble() {
        let turns = parse_move_sequence("R U2  F'\tD L2 B").unwrap();
        assert_eq!(
            turns.iter().map(|turn| turn.to_string()).join(" "),
            "R U2 F' D L2 B"
        );
    }

    #[test]
    fn parses_the_empty_sequence() {
        assert_eq!(parse_move_sequence(""), Ok(vec![]));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!("M".parse::<Turn>().is_err());
        assert!("U3".parse::<Turn>().is_err());
        assert!("R2'".parse::<Turn>().is_err());
        assert!(parse_move_sequence("R U X").is_err());
    }
}
