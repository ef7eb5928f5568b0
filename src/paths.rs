//! Centralized path definitions for tabsplit
//!
//! tabsplit keeps no state on disk. The only file it reads is the user's
//! configuration:
//!
//! ```text
//! ~/.config/tabsplit/
//! └── config.toml               # API endpoint, model, display preferences
//! ```
//!
//! On macOS and Windows the platform config directory is used instead.

use std::path::PathBuf;

/// Config directory name under the platform config dir
const CONFIG_DIR: &str = "tabsplit";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the tabsplit config directory.
///
/// Returns `~/.config/tabsplit/` on Linux.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(CONFIG_DIR)
}

/// Get the config file path.
///
/// Returns `~/.config/tabsplit/config.toml` on Linux.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
