/// Navigation and annotation behaviour across a whole game.
mod common;

use annotator_core::pgn::load_pgn;
use annotator_core::{Command, Comments, GameNavigator, Mode};
use shakmaty::Square;

#[test]
fn test_two_advances_show_black_move() {
    let mut nav = GameNavigator::new(common::open_game(), Comments::new(), Mode::Editor).unwrap();
    nav.advance();
    nav.advance();

    assert_eq!(nav.pointer(), 2);
    assert_eq!(nav.move_text(), "1... e5");
    let hl = nav.highlight().unwrap();
    assert_eq!((hl.from, hl.to), (Square::E7, Square::E5));
}

#[test]
fn test_advance_then_retreat_is_identity_at_every_ply() {
    let moves = load_pgn(common::SCHOLARS_MATE).unwrap();
    let mut nav = GameNavigator::new(moves, Comments::new(), Mode::Viewer).unwrap();

    loop {
        let pointer = nav.pointer();
        let fen = nav.fen();
        let highlight = nav.highlight();

        if !nav.advance() {
            break;
        }
        nav.retreat();
        assert_eq!(nav.pointer(), pointer);
        assert_eq!(nav.fen(), fen);
        assert_eq!(nav.highlight(), highlight);

        nav.advance();
    }
    assert_eq!(nav.pointer(), 7);
}

#[test]
fn test_end_then_start_clears_highlight() {
    let moves = load_pgn(common::SCHOLARS_MATE).unwrap();
    let mut nav = GameNavigator::new(moves, Comments::new(), Mode::Viewer).unwrap();

    nav.apply(Command::JumpToEnd);
    let last = nav.highlight().unwrap();
    assert_eq!((last.from, last.to), (Square::H5, Square::F7));
    assert_eq!(last.check, Some(Square::E8));
    assert_eq!(nav.move_text(), "4. Qxf7#");

    nav.apply(Command::JumpToStart);
    assert_eq!(nav.pointer(), 0);
    assert_eq!(nav.highlight(), None);
    assert_eq!(nav.move_text(), "");
}

#[test]
fn test_comment_kept_across_navigation() {
    let mut nav = GameNavigator::new(common::open_game(), Comments::new(), Mode::Editor).unwrap();
    nav.advance();
    assert!(nav.set_comment(1, "Good opening"));

    nav.retreat();
    assert_eq!(nav.pointer(), 0);
    nav.advance();
    assert_eq!(nav.pointer(), 1);
    assert_eq!(nav.frame().comment, "Good opening");
}

#[test]
fn test_toggles_round_trip() {
    let moves = load_pgn(common::SCHOLARS_MATE).unwrap();
    let mut nav = GameNavigator::new(moves, Comments::new(), Mode::Editor).unwrap();
    nav.jump_to_end();

    let original = nav.moves()[6].display_san();
    nav.toggle_excellent();
    assert_eq!(nav.moves()[6].display_san(), "Qxf7#!!");
    nav.toggle_excellent();
    assert_eq!(nav.moves()[6].display_san(), original);

    nav.toggle_blunder();
    nav.toggle_excellent();
    nav.toggle_excellent();
    assert_eq!(nav.moves()[6].display_san(), "Qxf7#?");
}

#[test]
fn test_boundaries_are_noops() {
    let mut nav = GameNavigator::new(common::open_game(), Comments::new(), Mode::Editor).unwrap();
    assert!(!nav.retreat());
    assert!(!nav.jump_to_start());
    assert!(!nav.toggle_blunder());

    nav.jump_to_end();
    assert!(!nav.advance());
    assert!(!nav.jump_to_end());
    assert_eq!(nav.pointer(), 2);
}
