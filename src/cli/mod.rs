pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::StatusFilter;
use crate::tui::app::Screen;

#[derive(Parser)]
#[command(name = "academy-admin")]
#[command(about = "Terminal admin screens for blog posts and courses", long_about = None)]
pub struct Cli {
    /// JSON file to seed the session from instead of the bundled sample data
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (the default)
    Tui {
        /// Screen to open first
        #[arg(short, long, value_enum)]
        screen: Option<Screen>,
    },
    /// Print the blog post table
    Posts {
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
    },
    /// Print the course table
    Courses {
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
    },
}
