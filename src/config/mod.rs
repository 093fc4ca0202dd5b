//! Configuration management for the admin TUI.
//!
//! Configuration is read from `~/.config/academy-admin/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::tui::app::Screen;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
    pub ui: UiConfig,
}

/// Behaviour of the screens themselves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays on screen, in milliseconds
    pub toast_duration_ms: u64,
    /// Screen shown when the TUI starts without `--screen`
    pub start_screen: Screen,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            start_screen: Screen::Courses,
        }
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file is created with commented defaults. Missing fields use
    /// default values; an unparseable file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/academy-admin/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("academy-admin").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

const DEFAULT_CONFIG: &str = r##"# Academy Admin Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[ui]
# Notification display time in milliseconds
toast_duration_ms = 3000
# "blog" or "courses"
start_screen = "courses"

[colors]
# Header and screen tabs
header_fg = "White"
header_bg = "#1F2937"
active_tab = "#14B8A6"

# Borders
active_border = "#14B8A6"
inactive_border = "DarkGray"

# Table selection
selection_bg = "#14B8A6"
selection_fg = "Black"

# Status badges
featured_badge = "Green"
regular_badge = "Gray"

# Destructive actions
danger = "Red"

# Notifications
toast_fg = "White"
toast_bg = "#111827"

# Footer
status_fg = "White"
status_bg = "DarkGray"
link = "Gray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_filter = ["Tab", "l", "Right"]
prev_filter = ["BackTab", "Shift+Tab", "h", "Left"]
blog_screen = ["1", "F1"]
courses_screen = ["2", "F2"]
add = ["a", "n"]
edit = ["e", "Enter"]
view = ["v"]
delete = ["d", "Delete"]
"##;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config =
            toml::from_str(DEFAULT_CONFIG).expect("Default config should be valid TOML");

        assert_eq!(config.colors.active_border, Color::Rgb(0x14, 0xB8, 0xA6));
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.ui.start_screen, Screen::Courses);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[colors]
danger = "#FF0000"

[ui]
start_screen = "blog"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.colors.danger, Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.inactive_border, Color::DarkGray);
        assert_eq!(config.ui.start_screen, Screen::Blog);
        assert_eq!(config.ui.toast_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.keybindings.delete, vec!["d", "Delete"]);
        assert_eq!(config.ui.start_screen, Screen::Courses);
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.ui.toast_duration_ms, 3000);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }

    #[test]
    fn test_load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntoast_duration_ms = \"soon\"\n").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let content = "[colors]\ndanger = \"not-a-color\"\n";
        assert!(toml::from_str::<Config>(content).is_err());
    }
}
