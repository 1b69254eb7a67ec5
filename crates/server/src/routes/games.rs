use axum::{extract::Query, Extension, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use annotator_core::pgn;
use annotator_core::share::{self, ShareLinks};
use annotator_core::{Comments, GameHeaders, GameNavigator, Mode, Move, ShareError};

use crate::config::Config;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub pgn: String,
}

#[derive(Deserialize)]
pub struct ShareRequest {
    pub pgn: String,
    pub comments: Option<Comments>,
    /// Annotated moves from the editor; parsed from `pgn` when absent.
    pub moves: Option<Vec<Move>>,
}

#[derive(Deserialize)]
pub struct SharedQuery {
    pub data: Option<String>,
    pub ply: Option<usize>,
}

/// POST /api/games/parse
pub async fn parse_game(Json(req): Json<ParseRequest>) -> Result<Json<JsonValue>, AppError> {
    let moves = pgn::load_pgn(&req.pgn)?;

    Ok(Json(serde_json::json!({
        "moves": moves,
        "headers": GameHeaders::from_pgn(&req.pgn),
    })))
}

/// POST /api/games/share
pub async fn share_game(
    Extension(config): Extension<Config>,
    Json(req): Json<ShareRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let moves = match req.moves {
        Some(moves) => moves,
        None if req.pgn.trim().is_empty() => {
            return Err(AppError::BadRequest("PGN is empty".into()));
        }
        None => pgn::load_pgn(&req.pgn)?,
    };

    // Same acceptance rule as typing a comment into the editor.
    let mut nav = GameNavigator::new(moves, Comments::new(), Mode::Editor)?;
    for (index, text) in req.comments.unwrap_or_default() {
        nav.set_comment(index, &text);
    }

    let ShareLinks {
        token,
        relative_url,
        absolute_url,
        embed,
    } = nav.share_links(&req.pgn, &config.viewer_target())?;

    tracing::info!(plies = nav.len(), token_len = token.len(), "Packed shared game");

    Ok(Json(serde_json::json!({
        "token": token,
        "relativeUrl": relative_url,
        "absoluteUrl": absolute_url,
        "embed": embed,
    })))
}

/// GET /api/games/shared?data=...&ply=N
/// Viewer frame at ply N (clamped to the game length).
pub async fn get_shared_game(Query(q): Query<SharedQuery>) -> Result<Json<JsonValue>, AppError> {
    let token = q.data.ok_or(ShareError::Missing)?;
    let game = share::unpack(&token)?;

    let mut nav = GameNavigator::new(game.moves, game.comments, Mode::Viewer)?;
    let target = q.ply.unwrap_or(0).min(nav.len());
    while nav.pointer() < target && nav.advance() {}

    Ok(Json(serde_json::json!({
        "pgn": game.pgn,
        "headers": GameHeaders::from_pgn(&game.pgn),
        "moves": nav.moves(),
        "comments": nav.comments(),
        "frame": nav.frame(),
    })))
}
