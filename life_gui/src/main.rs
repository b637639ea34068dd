// main.rs - Conway's Game of Life, egui front end
// Grid, rules and console live in the `life` crate; this binary paints them

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use life::{Console, LifeConfig, SimulationController};
use tracing_subscriber::EnvFilter;

mod canvas; // Render sink and hit-testing
mod ui;     // eframe::App impl

use canvas::{CanvasSink, Palette};

#[derive(Parser, Debug)]
#[command(name = "life_gui", about = "Conway's Game of Life with a command console")]
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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("life=info,life_gui=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };
    config.override_size(args.width, args.height)?;

    let app = GameOfLife::new(&config)?;
    let side = config.display.canvas_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 40.0, side + 330.0]),
        ..Default::default()
    };

    tracing::info!("Game of Life starting...");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("eframe failed: {err}"))
}

/// Window state: the controller (painting into a `CanvasSink`), the console
/// and the text currently typed into it.
pub struct GameOfLife {
    controller: SimulationController<CanvasSink>,
    console: Console,
    input: String,
    palette: Palette,
    canvas_size: f32,
    random_density: f64,
}

impl GameOfLife {
    pub fn new(config: &LifeConfig) -> anyhow::Result<Self> {
        Ok(Self {
            controller: SimulationController::new(&config.simulation, CanvasSink::default()),
            console: Console::new(config.console.history),
            input: String::new(),
            palette: Palette::from_config(&config.display)?,
            canvas_size: config.display.canvas_size,
            random_density: config.simulation.random_density,
        })
    }
}
