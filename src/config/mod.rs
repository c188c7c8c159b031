//! Startup configuration
//!
//! Uses RON (Rusty Object Notation) for the optional `chessit.ron` file.
//! Every field has a default, so a partial file only overrides what it names.

mod file;
mod settings;

pub use file::*;
pub use settings::*;

use std::sync::OnceLock;

/// Config file looked up in the working directory
pub const CONFIG_PATH: &str = "chessit.ron";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide config, loaded on first access.
///
/// Window creation and the app both read it, so they always agree.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        #[cfg(not(target_arch = "wasm32"))]
        {
            load_or_default(CONFIG_PATH)
        }
        #[cfg(target_arch = "wasm32")]
        {
            AppConfig::default()
        }
    })
}
