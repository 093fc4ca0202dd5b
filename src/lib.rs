//! # Academy Admin
//!
//! Terminal admin screens for a content site's blog posts and courses.
//!
//! Everything happens in memory: the session starts from static sample data,
//! course edits live until the process exits, and nothing is written back.
//!
//! ```text
//! Seed → AppContext → TuiApp (state) → layout (render)
//!                        ↑
//!                 key events / ticks
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI on the courses screen
//! academy-admin
//!
//! # Open the blog screen first
//! academy-admin tui --screen blog
//!
//! # Print featured courses
//! academy-admin courses --filter featured
//!
//! # Start from your own data
//! academy-admin --data ./seed.json
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) holds the session's blog posts and the
/// course working list.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui [--screen blog|courses]` - Launch the TUI (default)
/// - `posts [--filter all|featured|regular]` - Print blog posts
/// - `courses [--filter all|featured|regular]` - Print courses
pub mod cli;

/// Configuration management for the TUI.
///
/// Loads from `~/.config/academy-admin/config.toml`: colors, keybindings
/// and notification timing.
pub mod config;

/// Core domain models and the status filter.
///
/// - [`BlogPost`](domain::BlogPost)
/// - [`Course`](domain::Course) and [`Level`](domain::Level)
/// - [`StatusFilter`](domain::StatusFilter) and [`filter`](domain::filter)
pub mod domain;

/// Bundled sample data and `--data` JSON loading.
pub mod seed;

/// In-memory working lists with save/delete by id.
pub mod store;

/// Terminal user interface.
///
/// Blog and course screens with filter tabs, a course add/edit dialog,
/// delete confirmations and transient notifications.
pub mod tui;
