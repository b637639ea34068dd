// main.rs - Conway's Game of Life, terminal front end
// Console lines come from stdin; each frame is printed to stdout as text

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use life::{Console, LifeConfig, SimulationController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod sink;

use sink::TextSink;

#[derive(Parser, Debug)]
#[command(name = "life_term", about = "Conway's Game of Life driven from a text console")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of the startup grid
    #[arg(long)]
    width: Option<usize>,

    /// Height of the startup grid
    #[arg(long)]
    height: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only frames and replies
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("life=info,life_term=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };
    config.override_size(args.width, args.height)?;

    let mut controller = SimulationController::new(&config.simulation, TextSink::new(std::io::stdout()));
    let mut console = Console::new(config.console.history);
    tracing::info!("Type cmds for a list of commands, quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = controller.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == "quit" {
                    break;
                }
                if let Some(reply) = console.submit(&mut controller, &line) {
                    let out = controller.sink_mut().writer();
                    writeln!(out, "{reply}")?;
                    out.flush()?;
                }
            }
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(std::time::Instant::now).into()), if deadline.is_some() => {
                controller.poll(std::time::Instant::now());
            }
        }

        if let Some(err) = controller.sink_mut().take_error() {
            return Err(err.into());
        }
    }

    tracing::info!(generation = controller.generation(), "Exiting");
    Ok(())
}
