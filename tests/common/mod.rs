use annotator_core::Move;
use shakmaty::Square;

pub const SCHOLARS_MATE: &str = r#"[Event "Casual"]
[White "Alice"]
[Black "Bob"]
[Result "1-0"]

1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0"#;

/// e4 e5 as the editor would record it.
pub fn open_game() -> Vec<Move> {
    vec![
        Move::new(Square::E2, Square::E4, "e4"),
        Move::new(Square::E7, Square::E5, "e5"),
    ]
}
