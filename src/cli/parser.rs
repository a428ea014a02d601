use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for convtab
/// CLI application to categorize and render a convention-schedule feed
#[derive(Parser)]
#[command(
    name = "convtab",
    version = env!("CARGO_PKG_VERSION"),
    about = "Categorize a conventions JSON feed and render the current / next / past tabs",
    long_about = None
)]
pub struct Cli {
    /// Override feed path (useful for tests or alternate feeds)
    #[arg(global = true, long = "feed")]
    pub feed: Option<String>,

    /// Pin the reference date (YYYY-MM-DD) instead of today's date
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and a starter feed
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// List conventions with their computed category
    List {
        #[arg(
            long = "category",
            default_value = "all",
            help = "Restrict to one bucket: current, upcoming or past"
        )]
        category: String,
    },

    /// Render one of the site tabs as text
    Show {
        #[arg(
            long = "tab",
            default_value = "current",
            help = "Tab to render: current, next or past"
        )]
        tab: String,
    },

    /// Export the categorized listing
    Export {
        #[arg(long = "format", value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long = "output", help = "Path of the file to write")]
        output: String,
    },
}
