//! Coordinate notation for squares and moves
//!
//! Squares are a file letter followed by a rank digit (`"e2"`). Moves are two
//! squares back to back with an optional promotion letter (`"e2e4"`,
//! `"e7e8q"`). This is what a console client types and what log lines print.
//!
//! Parsing is case-insensitive and ignores surrounding whitespace. Output is
//! always lower case.

use std::fmt;
use std::str::FromStr;

use crate::error::ChessEngineError;
use crate::types::{Move, PieceType, Position};

impl Position {
    /// File letter `'a'..='h'` of an on-board position
    pub fn file_char(self) -> Option<char> {
        self.is_valid().then(|| (b'a' + (self.col - 1) as u8) as char)
    }

    /// Parse a file letter and rank digit, e.g. `('e', '2')`
    pub fn from_chars(file: char, rank: char) -> Option<Self> {
        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => (c as u8 - b'a') as i8 + 1,
            _ => return None,
        };
        let row = match rank {
            r @ '1'..='8' => (r as u8 - b'0') as i8,
            _ => return None,
        };
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_char() {
            Some(file) => write!(f, "{file}{}", self.row),
            // Off-board positions only come from external input; show them raw
            None => write!(f, "({},{})", self.row, self.col),
        }
    }
}

impl FromStr for Position {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidNotation {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Position::from_chars(file, rank).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ChessEngineError;

    /// Parse `"e2e4"` or `"e7e8q"`
    ///
    /// Only the shape is checked here. A promotion letter of `k` or `p`
    /// parses, and is then rejected by [`Game::make_move`](crate::api::Game::make_move)
    /// as an illegal move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidNotation {
            input: s.to_string(),
        };
        let chars: Vec<char> = s.trim().chars().collect();
        let (squares, promotion) = match chars.len() {
            4 => (&chars[..], None),
            5 => (
                &chars[..4],
                Some(PieceType::from_letter(chars[4]).ok_or_else(invalid)?),
            ),
            _ => return Err(invalid()),
        };

        let start = Position::from_chars(squares[0], squares[1]).ok_or_else(invalid)?;
        let end = Position::from_chars(squares[2], squares[3]).ok_or_else(invalid)?;
        Ok(Move {
            start,
            end,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_notation() {
        let e2: Position = "e2".parse().unwrap();
        assert_eq!(e2, Position::new(2, 5));
        assert_eq!(e2.to_string(), "e2");
        assert_eq!(" H8 ".parse::<Position>().unwrap(), Position::new(8, 8));
        assert_eq!(Position::new(1, 1).to_string(), "a1");
    }

    #[test]
    fn test_position_notation_rejects_garbage() {
        for input in ["", "e", "e9", "i1", "e22", "22"] {
            assert!(
                input.parse::<Position>().is_err(),
                "{input:?} should not parse"
            );
        }
        assert_eq!(Position::new(0, 9).to_string(), "(0,9)");
    }

    #[test]
    fn test_move_notation() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(Position::new(2, 5), Position::new(4, 5)));
        assert_eq!(mv.to_string(), "e2e4");

        let promo: Move = "b7b8Q".parse().unwrap();
        assert_eq!(
            promo,
            Move::with_promotion(Position::new(7, 2), Position::new(8, 2), PieceType::Queen)
        );
        assert_eq!(promo.to_string(), "b7b8q");
    }

    #[test]
    fn test_move_notation_rejects_garbage() {
        for input in ["e2", "e2e", "e2e4x", "e2-e4", "z2e4"] {
            assert!(input.parse::<Move>().is_err(), "{input:?} should not parse");
        }
    }
}
