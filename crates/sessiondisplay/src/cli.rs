use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sessiondisplay")]
#[command(version)]
#[command(about = "Render logged LLM sessions as display groups")]
pub struct Cli {
    /// Session data directory (defaults to $SESSIONDISPLAY_HOME or ~/.sessiondisplay)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and its empty files
    Init,

    /// Print the full display info of a session as JSON
    Show {
        session_id: Uuid,

        /// Project the session belongs to
        #[arg(short, long)]
        project: Uuid,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the display groups a session folds into
    Groups {
        session_id: Uuid,

        #[arg(short, long)]
        project: Uuid,
    },

    /// List the project test lists compatible with a session
    #[command(name = "test-lists")]
    TestLists {
        session_id: Uuid,

        #[arg(short, long)]
        project: Uuid,
    },

    /// Print version information
    Version,
}
