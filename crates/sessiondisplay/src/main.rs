mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = commands::resolve_paths(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Init => commands::init::run(&paths),
        Commands::Show {
            session_id,
            project,
            pretty,
        } => commands::show::run(&paths, session_id, project, pretty),
        Commands::Groups {
            session_id,
            project,
        } => commands::groups::run(&paths, session_id, project),
        Commands::TestLists {
            session_id,
            project,
        } => commands::test_lists::run(&paths, session_id, project),
        Commands::Version => commands::version::run(),
    }
}
