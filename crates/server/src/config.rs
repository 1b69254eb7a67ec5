use std::env;

use annotator_core::share::{
    ViewerTarget, DEFAULT_EMBED_HEIGHT, DEFAULT_EMBED_WIDTH, DEFAULT_VIEWER_BASE_URL,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Deployment that absolute viewer links and embeds point at.
    pub viewer_base_url: String,
    pub embed_width: u32,
    pub embed_height: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            viewer_base_url: env::var("VIEWER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_VIEWER_BASE_URL.to_string()),
            embed_width: env::var("EMBED_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EMBED_WIDTH),
            embed_height: env::var("EMBED_HEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EMBED_HEIGHT),
        }
    }

    pub fn viewer_target(&self) -> ViewerTarget {
        ViewerTarget {
            base_url: self.viewer_base_url.clone(),
            width: self.embed_width,
            height: self.embed_height,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let target = ViewerTarget::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            viewer_base_url: target.base_url,
            embed_width: target.width,
            embed_height: target.height,
        }
    }
}
