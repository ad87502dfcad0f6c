use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Contact grid: tap to dial, tap the number to copy")]
pub struct Cli {
    /// Print platform requests instead of performing them
    #[arg(long, env = "DRY_RUN")]
    pub dry_run: bool,

    /// Command that opens tel: links (xdg-open, open or cmd /C start by default)
    #[arg(long, env = "DIALER_COMMAND")]
    pub dialer: Option<String>,

    /// How long the "Copied to clipboard" notice stays up, in milliseconds
    #[arg(long, env = "NOTICE_DURATION_MS", default_value_t = 2000)]
    pub notice_ms: u64,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open the contact grid (default)
    Ui,

    /// List contacts with their grid position
    List,

    /// Tap a contact card: ask the host to dial its number
    Dial {
        /// Contact position as shown by `list`, starting at 1
        index: usize,
    },

    /// Tap a contact's number: copy it to the clipboard
    Copy {
        /// Contact position as shown by `list`, starting at 1
        index: usize,
    },

    /// Header action: dial the fixed home number
    Home,
}
