//! Game navigation state: a move pointer over a fixed move list.
//!
//! The board at pointer `p` is always the start position with `moves[..p]`
//! applied. Every position is replayed once when the navigator is built, so
//! stepping back is a lookup into that history rather than a fallible undo.

use serde::Serialize;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, EnPassantMode, Position, Square};

use crate::error::AnnotatorError;
use crate::game_data::{Comments, Mark, Move};
use crate::pgn::{self, move_squares};

/// Which program drives the state. Only the editor accepts annotations;
/// only the viewer colours marked moves and checked kings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Editor,
    Viewer,
}

/// How the highlighted move squares are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Plain,
    Excellent,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Plain => "#fff59d",
            Tone::Excellent => "#90caf9",
        }
    }
}

/// Background colour of a king standing in check.
pub const CHECK_COLOR: &str = "#ef9a9a";

/// The single highlighted move transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    #[serde(serialize_with = "serialize_square")]
    pub from: Square,
    #[serde(serialize_with = "serialize_square")]
    pub to: Square,
    pub tone: Tone,
    /// King of the side to move, when it is in check.
    #[serde(serialize_with = "serialize_opt_square")]
    pub check: Option<Square>,
}

fn serialize_square<S: serde::Serializer>(sq: &Square, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(sq)
}

fn serialize_opt_square<S: serde::Serializer>(
    sq: &Option<Square>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match sq {
        Some(sq) => s.collect_str(sq),
        None => s.serialize_none(),
    }
}

/// Everything a UI needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub pointer: usize,
    pub total: usize,
    pub fen: String,
    pub move_text: String,
    pub comment: String,
    pub highlight: Option<Highlight>,
    /// Background of the highlighted move squares.
    pub highlight_color: Option<&'static str>,
    /// Background of the checked king's square.
    pub check_color: Option<&'static str>,
}

pub struct GameNavigator {
    pub(crate) mode: Mode,
    pub(crate) moves: Vec<Move>,
    pub(crate) comments: Comments,
    positions: Vec<Chess>,
    pub(crate) pointer: usize,
    highlight: Option<Highlight>,
}

impl GameNavigator {
    /// Build a navigator over `moves`, checking each one against the rules engine.
    pub fn new(moves: Vec<Move>, comments: Comments, mode: Mode) -> Result<Self, AnnotatorError> {
        let positions = replay(&moves)?;
        Ok(Self {
            mode,
            moves,
            comments,
            positions,
            pointer: 0,
            highlight: None,
        })
    }

    /// No moves loaded, board at the start position.
    pub fn empty(mode: Mode) -> Self {
        Self {
            mode,
            moves: Vec::new(),
            comments: Comments::new(),
            positions: vec![Chess::default()],
            pointer: 0,
            highlight: None,
        }
    }

    /// Editor entry point: parse pasted PGN text and start from the first position.
    /// Comments from a previously loaded game are discarded.
    pub fn from_pgn(text: &str) -> Result<Self, AnnotatorError> {
        let moves = pgn::load_pgn(text)?;
        Self::new(moves, Comments::new(), Mode::Editor)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Position after `pointer` moves.
    pub fn position(&self) -> &Chess {
        &self.positions[self.pointer]
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.position(), EnPassantMode::Legal).to_string()
    }

    /// Apply the next move. Returns false at the end of the list.
    pub fn advance(&mut self) -> bool {
        if self.pointer >= self.moves.len() {
            return false;
        }
        self.pointer += 1;
        self.refresh_highlight();
        tracing::debug!(pointer = self.pointer, "advance");
        true
    }

    /// Take back the last applied move. Returns false at the start.
    pub fn retreat(&mut self) -> bool {
        if self.pointer == 0 {
            return false;
        }
        self.pointer -= 1;
        self.refresh_highlight();
        tracing::debug!(pointer = self.pointer, "retreat");
        true
    }

    pub fn jump_to_start(&mut self) -> bool {
        let moved = self.pointer > 0;
        while self.retreat() {}
        self.highlight = None;
        moved
    }

    pub fn jump_to_end(&mut self) -> bool {
        let moved = self.pointer < self.moves.len();
        while self.advance() {}
        moved
    }

    /// Recompute the highlight for the current pointer. The old value is
    /// replaced wholesale, so at most one transition is ever marked.
    pub(crate) fn refresh_highlight(&mut self) {
        self.highlight = match self.pointer.checked_sub(1).map(|i| &self.moves[i]) {
            None => None,
            Some(mv) => {
                let viewer = self.mode == Mode::Viewer;
                let tone = if viewer && mv.mark == Some(Mark::Excellent) {
                    Tone::Excellent
                } else {
                    Tone::Plain
                };
                let check = if viewer { checked_king(self.position()) } else { None };
                Some(Highlight {
                    from: mv.from,
                    to: mv.to,
                    tone,
                    check,
                })
            }
        };
    }

    pub fn frame(&self) -> Frame {
        Frame {
            pointer: self.pointer,
            total: self.moves.len(),
            fen: self.fen(),
            move_text: self.move_text(),
            comment: self.comment_at(self.pointer).to_string(),
            highlight: self.highlight,
            highlight_color: self.highlight.map(|hl| hl.tone.color()),
            check_color: self.highlight.and_then(|hl| hl.check).map(|_| CHECK_COLOR),
        }
    }
}

/// Square of the side-to-move's king when that side is in check.
fn checked_king(pos: &Chess) -> Option<Square> {
    if !pos.is_check() {
        return None;
    }
    pos.board().king_of(pos.turn())
}

/// Replay `moves` from the start position, returning every position along the way.
fn replay(moves: &[Move]) -> Result<Vec<Chess>, AnnotatorError> {
    let mut positions = Vec::with_capacity(moves.len() + 1);
    let mut pos = Chess::default();
    positions.push(pos.clone());

    for (i, mv) in moves.iter().enumerate() {
        let ply = i + 1;
        let illegal = || AnnotatorError::IllegalMove {
            ply,
            san: mv.san.clone(),
        };

        let san: SanPlus = mv.san.parse().map_err(|_| illegal())?;
        let engine_move = san.san.to_move(&pos).map_err(|_| illegal())?;

        if move_squares(&engine_move) != Some((mv.from, mv.to)) {
            return Err(AnnotatorError::SquareMismatch {
                ply,
                san: mv.san.clone(),
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            });
        }

        pos = pos.play(engine_move).map_err(|_| illegal())?;
        positions.push(pos.clone());
    }

    Ok(positions)
}
