/// Share service handlers, called directly.
mod common;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use annotator_core::{share, Comments};
use server::config::Config;
use server::routes::games::{
    get_shared_game, parse_game, share_game, ParseRequest, ShareRequest, SharedQuery,
};

#[tokio::test]
async fn test_parse_game() {
    let req = ParseRequest {
        pgn: common::SCHOLARS_MATE.to_string(),
    };
    let Json(body) = parse_game(Json(req)).await.unwrap();

    assert_eq!(body["moves"].as_array().unwrap().len(), 7);
    assert_eq!(body["moves"][0]["from"], "e2");
    assert_eq!(body["headers"]["white"], "Alice");
}

#[tokio::test]
async fn test_parse_illegal_game_is_bad_request() {
    let req = ParseRequest {
        pgn: "1. e4 e5 2. Ke4 *".to_string(),
    };
    let err = parse_game(Json(req)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_share_then_view() {
    let mut comments = Comments::new();
    comments.insert(1, "  Good opening ".to_string());
    comments.insert(2, "   ".to_string());

    let req = ShareRequest {
        pgn: "1. e4 e5".to_string(),
        comments: Some(comments),
        moves: None,
    };
    let Json(shared) = share_game(Extension(Config::default()), Json(req)).await.unwrap();

    let token = shared["token"].as_str().unwrap().to_string();
    assert_eq!(
        shared["relativeUrl"].as_str().unwrap(),
        format!("viewer.html?data={token}")
    );
    assert!(shared["embed"]
        .as_str()
        .unwrap()
        .ends_with(r#"width="1000" height="650" frameborder="0"></iframe>"#));

    let game = share::unpack(&token).unwrap();
    assert_eq!(game.comments.len(), 1);
    assert_eq!(game.comments[&1], "Good opening");

    let q = SharedQuery {
        data: Some(token),
        ply: Some(99),
    };
    let Json(view) = get_shared_game(Query(q)).await.unwrap();
    assert_eq!(view["frame"]["pointer"], 2);
    assert_eq!(view["frame"]["moveText"], "1... e5");
    assert_eq!(view["frame"]["highlight"]["to"], "e5");
    assert_eq!(view["comments"]["1"], "Good opening");
}

#[tokio::test]
async fn test_share_with_annotated_moves() {
    let mut moves = common::open_game();
    moves[0].mark = Some(annotator_core::Mark::Blunder);

    let req = ShareRequest {
        pgn: "1. e4 e5".to_string(),
        comments: None,
        moves: Some(moves),
    };
    let Json(shared) = share_game(Extension(Config::default()), Json(req)).await.unwrap();
    let game = share::unpack(shared["token"].as_str().unwrap()).unwrap();
    assert_eq!(game.moves[0].display_san(), "e4?");
}

#[tokio::test]
async fn test_shared_game_rejects_bad_tokens() {
    let q = SharedQuery { data: None, ply: None };
    let err = get_shared_game(Query(q)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let q = SharedQuery {
        data: Some("garbage".to_string()),
        ply: None,
    };
    let err = get_shared_game(Query(q)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_share_requires_pgn_or_moves() {
    let req = ShareRequest {
        pgn: "  ".to_string(),
        comments: None,
        moves: None,
    };
    let err = share_game(Extension(Config::default()), Json(req)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}
