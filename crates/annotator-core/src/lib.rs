//! Annotated chess game state: PGN loading, move navigation, annotations
//! and compressed share links.

pub mod annotation;
pub mod error;
pub mod game_data;
pub mod keys;
pub mod navigation;
pub mod pgn;
pub mod share;

pub use error::{AnnotatorError, ShareError};
pub use game_data::{Comments, GameHeaders, Mark, Move, SharedGame};
pub use keys::Command;
pub use navigation::{Frame, GameNavigator, Highlight, Mode, Tone};
