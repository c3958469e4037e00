//! Text-mode Reversi.

use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;
mod report;
mod session;

use config::{Cli, ReportFormat};
use report::FinalReport;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let players = cli.players();
    info!(?players, seed = ?cli.seed, "starting Reversi");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(players, cli.seed, stdin.lock(), stdout.lock())
        .with_delay(Duration::from_millis(cli.delay_ms))
        .run()?;

    let report = FinalReport::new(summary.score, summary.turns, summary.aborted);
    match cli.format {
        ReportFormat::Text => print!("{}", report.to_text()),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
