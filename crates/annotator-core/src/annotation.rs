//! Editor annotations: quality marks, comments and the move caption.

use crate::game_data::{Mark, Move};
use crate::navigation::{GameNavigator, Mode};

/// Caption for the position after `pointer` moves, e.g. `"1. e4"` or `"1... e5"`.
/// Empty at the starting position.
pub fn move_text(pointer: usize, moves: &[Move]) -> String {
    let Some(mv) = pointer.checked_sub(1).and_then(|i| moves.get(i)) else {
        return String::new();
    };
    let move_number = (pointer + 1) / 2;
    let separator = if pointer % 2 == 1 { "." } else { "..." };
    format!("{move_number}{separator} {}", mv.display_san())
}

impl GameNavigator {
    pub fn move_text(&self) -> String {
        move_text(self.pointer, &self.moves)
    }

    /// Comment stored at `pointer`, or an empty string.
    pub fn comment_at(&self, pointer: usize) -> &str {
        self.comments.get(&pointer).map(String::as_str).unwrap_or("")
    }

    /// Store a comment for `index`. Blank text is ignored.
    pub fn set_comment(&mut self, index: usize, text: &str) -> bool {
        if self.mode != Mode::Editor {
            return false;
        }
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(index, "Ignoring blank comment");
            return false;
        }
        self.comments.insert(index, text.to_string());
        true
    }

    pub fn clear_comment(&mut self, index: usize) -> bool {
        if self.mode != Mode::Editor {
            return false;
        }
        self.comments.remove(&index).is_some()
    }

    pub fn toggle_excellent(&mut self) -> bool {
        self.toggle_mark(Mark::Excellent)
    }

    pub fn toggle_blunder(&mut self) -> bool {
        self.toggle_mark(Mark::Blunder)
    }

    /// Toggle `mark` on the move just played. A move holds at most one mark:
    /// while it carries the other one, the toggle does nothing.
    fn toggle_mark(&mut self, mark: Mark) -> bool {
        if self.mode != Mode::Editor || self.pointer == 0 {
            return false;
        }
        let mv = &mut self.moves[self.pointer - 1];
        match mv.mark {
            Some(current) if current == mark => mv.mark = None,
            None => mv.mark = Some(mark),
            Some(current) => {
                tracing::debug!(?current, requested = ?mark, "Move already carries another mark");
                return false;
            }
        }
        self.refresh_highlight();
        true
    }
}
