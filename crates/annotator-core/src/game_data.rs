use serde::{Deserialize, Serialize};
use shakmaty::Square;
use std::collections::BTreeMap;

use crate::error::AnnotatorError;

/// Comment text keyed by move pointer (0 = starting position).
pub type Comments = BTreeMap<usize, String>;

/// Quality mark a user can attach to a played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Excellent,
    Blunder,
}

impl Mark {
    pub fn suffix(self) -> &'static str {
        match self {
            Mark::Excellent => "!!",
            Mark::Blunder => "?",
        }
    }
}

/// One ply of the loaded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireMove", into = "WireMove")]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// SAN as printed by the rules engine, check suffix included, never a mark.
    pub san: String,
    pub mark: Option<Mark>,
}

impl Move {
    pub fn new(from: Square, to: Square, san: impl Into<String>) -> Self {
        Self {
            from,
            to,
            san: san.into(),
            mark: None,
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    /// SAN with the mark suffix appended, as shown to users and sent over the wire.
    pub fn display_san(&self) -> String {
        match self.mark {
            Some(mark) => format!("{}{}", self.san, mark.suffix()),
            None => self.san.clone(),
        }
    }
}

/// Transport shape of a move: `{"from": "e2", "to": "e4", "san": "e4!!"}`.
/// Extra fields written by other editors are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireMove {
    from: String,
    to: String,
    san: String,
}

impl From<Move> for WireMove {
    fn from(mv: Move) -> Self {
        Self {
            from: mv.from.to_string(),
            to: mv.to.to_string(),
            san: mv.display_san(),
        }
    }
}

impl TryFrom<WireMove> for Move {
    type Error = AnnotatorError;

    fn try_from(wire: WireMove) -> Result<Self, Self::Error> {
        let from = parse_square(&wire.from)?;
        let to = parse_square(&wire.to)?;

        // Older links can carry both markers on one move; excellent wins.
        let mark = if wire.san.contains("!!") {
            Some(Mark::Excellent)
        } else if wire.san.contains('?') {
            Some(Mark::Blunder)
        } else {
            None
        };
        let san = wire.san.replace("!!", "").replace('?', "");

        Ok(Move { from, to, san, mark })
    }
}

pub fn parse_square(s: &str) -> Result<Square, AnnotatorError> {
    s.parse::<Square>()
        .map_err(|_| AnnotatorError::InvalidSquare(s.to_string()))
}

/// Everything a share link carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedGame {
    pub pgn: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(default)]
    pub moves: Vec<Move>,
}

/// Display headers of a PGN game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameHeaders {
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    pub event: Option<String>,
    pub date: Option<String>,
}
