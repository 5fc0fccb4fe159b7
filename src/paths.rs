use std::path::PathBuf;
use std::sync::OnceLock;

/// XDG-compliant directory layout for chessclock.
///
/// On Linux:
///   Config:  $XDG_CONFIG_HOME/chessclock  (~/.config/chessclock)
///   Data:    $XDG_DATA_HOME/chessclock    (~/.local/share/chessclock)
///
/// On macOS both live under ~/Library/Application Support/chessclock.
///
/// The `dirs` crate handles platform detection; resolved base paths are
/// cached in OnceLock cells.

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Root data directory: $XDG_DATA_HOME/chessclock
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chessclock")
    })
}

/// Root config directory: $XDG_CONFIG_HOME/chessclock
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chessclock")
    })
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Log file path: <data_dir>/chessclock.log
pub fn log_file() -> PathBuf {
    data_dir().join("chessclock.log")
}
