//! Share links: pack an annotated game into a URL-safe token and back.
//!
//! The token is the game's JSON compressed with lz-string's URI-component
//! alphabet (`A-Za-z0-9+-$`), so links made by the browser editor open here
//! and the other way round.

use std::collections::HashMap;

use crate::error::ShareError;
use crate::game_data::{Comments, Move, SharedGame};
use crate::navigation::{GameNavigator, Mode};

/// Where shared games are viewed.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://ohndal.github.io/chess-pgn-viewer/";
pub const VIEWER_PAGE: &str = "viewer.html";
pub const DEFAULT_EMBED_WIDTH: u32 = 1000;
pub const DEFAULT_EMBED_HEIGHT: u32 = 650;

/// Pack a game into a token that can go straight into a query parameter.
pub fn pack(pgn: &str, comments: &Comments, moves: &[Move]) -> Result<String, ShareError> {
    let game = SharedGame {
        pgn: pgn.to_string(),
        comments: comments.clone(),
        moves: moves.to_vec(),
    };
    pack_game(&game)
}

pub fn pack_game(game: &SharedGame) -> Result<String, ShareError> {
    let json = serde_json::to_string(game).map_err(ShareError::Encode)?;
    Ok(lz_str::compress_to_encoded_uri_component(json.as_str()))
}

/// Reverse of [`pack`].
pub fn unpack(token: &str) -> Result<SharedGame, ShareError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ShareError::Missing);
    }

    // Query decoders turn '+' into a space.
    let token = token.replace(' ', "+");

    let wide = lz_str::decompress_from_encoded_uri_component(token.as_str())
        .ok_or(ShareError::Decompress)?;
    let json = String::from_utf16(&wide).map_err(|_| ShareError::Decompress)?;
    if json.is_empty() {
        return Err(ShareError::Decompress);
    }

    Ok(serde_json::from_str(&json)?)
}

/// Pull the percent-decoded `data` parameter out of a raw query string
/// (`?data=...&x=1`).
pub fn token_from_query(query: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_urlencoded::from_str(query.trim_start_matches('?')).ok()?;
    params.get("data").filter(|value| !value.is_empty()).cloned()
}

/// Viewer startup: decode the shared game named by `query`.
/// Any failure is logged and leaves an empty board.
pub fn load_shared(query: &str) -> GameNavigator {
    let result = token_from_query(query)
        .ok_or(ShareError::Missing)
        .and_then(|token| unpack(&token))
        .and_then(|game| {
            GameNavigator::new(game.moves, game.comments, Mode::Viewer).map_err(ShareError::from)
        });

    match result {
        Ok(nav) => {
            tracing::info!(plies = nav.len(), "Loaded shared game");
            nav
        }
        Err(e) => {
            tracing::error!("Error loading game data: {e}");
            GameNavigator::empty(Mode::Viewer)
        }
    }
}

/// Deployment the absolute links and embed snippets point at.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerTarget {
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ViewerTarget {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VIEWER_BASE_URL.to_string(),
            width: DEFAULT_EMBED_WIDTH,
            height: DEFAULT_EMBED_HEIGHT,
        }
    }
}

/// The export paths for one packed game.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinks {
    pub token: String,
    pub relative_url: String,
    pub absolute_url: String,
    pub embed: String,
}

impl ShareLinks {
    pub fn new(token: String, target: &ViewerTarget) -> Self {
        let relative_url = format!("{VIEWER_PAGE}?data={token}");
        let base = target.base_url.trim_end_matches('/');
        let absolute_url = format!("{base}/{relative_url}");
        let embed = format!(
            r#"<iframe src="{absolute_url}" width="{}" height="{}" frameborder="0"></iframe>"#,
            target.width, target.height
        );
        Self {
            token,
            relative_url,
            absolute_url,
            embed,
        }
    }
}

impl GameNavigator {
    /// Snapshot of the loaded game for sharing.
    pub fn to_shared(&self, pgn: &str) -> SharedGame {
        SharedGame {
            pgn: pgn.to_string(),
            comments: self.comments.clone(),
            moves: self.moves.clone(),
        }
    }

    pub fn share_links(&self, pgn: &str, target: &ViewerTarget) -> Result<ShareLinks, ShareError> {
        Ok(ShareLinks::new(pack_game(&self.to_shared(pgn))?, target))
    }
}

/// Something that can receive text, e.g. the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Outcome of copying an embed snippet.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedExport {
    Copied,
    /// The clipboard refused; show the snippet so it can be copied by hand.
    Fallback { snippet: String, reason: String },
}

pub fn export_embed<C: Clipboard>(links: &ShareLinks, clipboard: &mut C) -> EmbedExport {
    match clipboard.write_text(&links.embed) {
        Ok(()) => EmbedExport::Copied,
        Err(e) => {
            tracing::warn!("Clipboard write failed: {e}");
            EmbedExport::Fallback {
                snippet: links.embed.clone(),
                reason: e.to_string(),
            }
        }
    }
}
