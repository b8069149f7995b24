//! Five-in-a-row in the terminal
//!
//! Play against the heuristic opponent, against another person, or watch
//! the opponent play itself.

use clap::Parser;
use gomoku::cli::Cli;
use gomoku::ui::TerminalApp;
use gomoku::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = GameSession::new(cli.game_config())?;
    info!(size = cli.size, mode = ?cli.mode, seed = ?cli.seed, "starting game");

    let stdin = std::io::stdin();
    let mut app = TerminalApp::new(session, cli.mode, stdin.lock(), std::io::stdout());
    let status = app.run()?;
    info!(?status, "session finished");
    Ok(())
}
