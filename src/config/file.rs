//! Config file loading

use std::fs;
use std::path::Path;
use macroquad::logging::{debug, warn};
use super::AppConfig;

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    /// Parsed fine but describes an unusable window, target or board
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load config from a RON string
pub fn load_config_from_str(s: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

/// Load config, falling back to defaults.
///
/// A missing file is normal; an unreadable, malformed or invalid one is logged.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> AppConfig {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return AppConfig::default();
    }

    match load_config(path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgba;
    use crate::render::StretchMode;

    #[test]
    fn test_omitted_fields_keep_defaults() {
        let config = load_config_from_str("(stretch_mode: ByHeight)").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = load_config_from_str(
            r#"(
                stretch_mode: Stretch,
                board: (cells: (10, 6)),
                theme: (dark_cell: (r: 118, g: 150, b: 86)),
            )"#,
        )
        .unwrap();

        assert_eq!(config.stretch_mode, StretchMode::Stretch);
        assert_eq!(config.board.cells, (10, 6));
        assert_eq!(config.board.cell_size, (22.0, 22.0));
        assert_eq!(config.board.padding.left, 2.0);
        assert_eq!(config.theme.dark_cell, Rgba { r: 118, g: 150, b: 86, a: 255 });
        assert_eq!(config.theme.light_cell, Rgba::WHITE);
        assert_eq!(config.window.title, "ChessIT");
    }

    #[test]
    fn test_default_serializes_and_reads_back() {
        let text = ron::ser::to_string_pretty(&AppConfig::default(), ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(load_config_from_str(&text).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let err = load_config_from_str("(stretch_mode: Sideways)").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config("definitely/not/here/chessit.ron").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        assert_eq!(load_or_default("definitely/not/here/chessit.ron"), AppConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = load_config_from_str("(render_target: (width: 512, height: 0), board: (cell_size: (-22.0, 22.0)))")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("chessit-{}-{}.ron", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let path = temp_config("malformed", "(stretch_mode: Sideways)");
        let config = load_or_default(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let path = temp_config("invalid", "(board: (cell_size: (0.0, 22.0)))");
        let config = load_or_default(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let path = temp_config("valid", "(window: (title: \"Board\", width: 640))");

        let config = load_or_default(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config.window.title, "Board");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 512);
    }
}
