//! PGN loading: pgn-reader walks the movetext, shakmaty validates each ply.

use std::io;
use std::ops::ControlFlow;

use pgn_reader::{Reader, SanPlus, Skip, Visitor};
use regex::Regex;
use shakmaty::{Chess, File, Move as EngineMove, Position, Square};

use crate::error::AnnotatorError;
use crate::game_data::{GameHeaders, Move};

/// Mainline being replayed while the reader walks the movetext.
struct Mainline {
    board: Chess,
    moves: Vec<Move>,
}

/// Visitor that replays the first game's mainline into a move list.
struct MoveListBuilder;

impl Visitor for MoveListBuilder {
    type Tags = ();
    type Movetext = Mainline;
    type Output = Result<Vec<Move>, AnnotatorError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(Mainline {
            board: Chess::default(),
            moves: Vec::new(),
        })
    }

    fn san(&mut self, state: &mut Mainline, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        let ply = state.moves.len() + 1;
        let san_str = san_plus.to_string();

        let mv = match san_plus.san.to_move(&state.board) {
            Ok(mv) => mv,
            Err(_) => {
                return ControlFlow::Break(Err(AnnotatorError::IllegalMove { ply, san: san_str }));
            }
        };

        let Some((from, to)) = move_squares(&mv) else {
            return ControlFlow::Break(Err(AnnotatorError::IllegalMove { ply, san: san_str }));
        };

        state.board = match state.board.clone().play(mv) {
            Ok(next) => next,
            Err(_) => {
                return ControlFlow::Break(Err(AnnotatorError::IllegalMove { ply, san: san_str }));
            }
        };
        state.moves.push(Move::new(from, to, san_str));

        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _state: &mut Mainline) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, state: Mainline) -> Self::Output {
        Ok(state.moves)
    }
}

/// Parse the first game of `pgn` into its mainline moves.
/// Text without any movetext yields an empty list.
pub fn load_pgn(pgn: &str) -> Result<Vec<Move>, AnnotatorError> {
    let mut reader = Reader::new(io::Cursor::new(pgn.as_bytes()));

    let moves = match reader.read_game(&mut MoveListBuilder) {
        Ok(Some(result)) => result?,
        Ok(None) => Vec::new(),
        Err(e) => return Err(AnnotatorError::Pgn(e.to_string())),
    };

    tracing::debug!(plies = moves.len(), "Loaded PGN");
    Ok(moves)
}

/// Source and destination squares as the board widget animates them.
/// Castling goes king square to king destination, not onto the rook.
pub fn move_squares(mv: &EngineMove) -> Option<(Square, Square)> {
    match mv {
        EngineMove::Normal { from, to, .. } => Some((*from, *to)),
        EngineMove::EnPassant { from, to } => Some((*from, *to)),
        EngineMove::Castle { king, rook } => {
            let to_file = if rook.file() > king.file() { File::G } else { File::C };
            Some((*king, Square::from_coords(to_file, king.rank())))
        }
        _ => None,
    }
}

/// Extract a string value from a PGN header (e.g. White, Event).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}

impl GameHeaders {
    pub fn from_pgn(pgn: &str) -> Self {
        Self {
            white: extract_header(pgn, "White"),
            black: extract_header(pgn, "Black"),
            result: extract_header(pgn, "Result"),
            event: extract_header(pgn, "Event"),
            date: extract_header(pgn, "Date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_pgn_basic() {
        let pgn = r#"[White "Player1"]
[Black "Player2"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 1-0"#;

        let moves = load_pgn(pgn).unwrap();
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[0], Move::new(Square::E2, Square::E4, "e4"));
        assert_eq!(moves[3], Move::new(Square::B8, Square::C6, "Nc6"));
    }

    #[test]
    fn test_load_pgn_skips_comments_and_variations() {
        let pgn = "1. e4 {best by test} e5 (1... c5 2. Nf3) 2. Nf3 $1 *";
        let sans: Vec<String> = load_pgn(pgn).unwrap().into_iter().map(|m| m.san).collect();
        assert_eq!(sans, vec!["e4", "e5", "Nf3"]);
    }

    #[test]
    fn test_load_pgn_castling_squares() {
        let pgn = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O *";
        let moves = load_pgn(pgn).unwrap();
        let castle = moves.last().unwrap();
        assert_eq!(castle.san, "O-O");
        assert_eq!((castle.from, castle.to), (Square::E1, Square::G1));
    }

    #[test]
    fn test_load_pgn_keeps_check_suffix() {
        let pgn = "1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0";
        let moves = load_pgn(pgn).unwrap();
        assert_eq!(moves.last().unwrap().san, "Qxf7#");
    }

    #[test]
    fn test_load_pgn_illegal_move() {
        let err = load_pgn("1. e4 e5 2. Nf6 *").unwrap_err();
        assert_eq!(
            err,
            AnnotatorError::IllegalMove { ply: 3, san: "Nf6".to_string() }
        );
    }

    #[test]
    fn test_load_pgn_empty() {
        assert!(load_pgn("").unwrap().is_empty());
    }

    #[test]
    fn test_game_headers() {
        let pgn = r#"[Event "Casual"]
[White "Anna"]
[Date ""]

1. d4 *"#;

        let headers = GameHeaders::from_pgn(pgn);
        assert_eq!(headers.event.as_deref(), Some("Casual"));
        assert_eq!(headers.white.as_deref(), Some("Anna"));
        assert_eq!(headers.black, None);
        assert_eq!(headers.date, None);
    }
}
