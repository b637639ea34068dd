//! Runtime configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! classic setup: a 20x20 grid stepped every 50 ms with an 8-entry console log.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::console::MAX_HISTORY;
use crate::error::{ConfigError, Result};
use crate::grid::{size_allowed, MAX_CELLS};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct LifeConfig {
    pub simulation: SimulationConfig,
    pub console: ConsoleConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width of the grid created at startup
    pub width: usize,
    /// Height of the grid created at startup
    pub height: usize,
    /// Delay between generations while running
    pub tick_interval_ms: u64,
    /// Threshold handed to `Grid::randomize`
    pub random_density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { width: 20, height: 20, tick_interval_ms: 50, random_density: 0.5 }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Number of command/response pairs kept in the log
    pub history: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { history: 8 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Edge length of the square canvas in points, shared evenly by the cells
    pub canvas_size: f32,
    pub alive_color: String,
    pub dead_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_size: 500.0,
            alive_color: "#F3F37B".into(),
            dead_color: "#212121".into(),
        }
    }
}

impl LifeConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies command-line size overrides, then re-validates.
    pub fn override_size(&mut self, width: Option<usize>, height: Option<usize>) -> Result<()> {
        if let Some(width) = width {
            self.simulation.width = width;
        }
        if let Some(height) = height {
            self.simulation.height = height;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !size_allowed(sim.width, sim.height) {
            return Err(ConfigError::invalid(format!(
                "grid size must be at least 1x1 and hold at most {MAX_CELLS} cells, got {}x{}",
                sim.width, sim.height
            )));
        }
        if sim.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick interval must be positive"));
        }
        if !(0.0..=1.0).contains(&sim.random_density) {
            return Err(ConfigError::invalid(format!(
                "random density must be within [0, 1], got {}",
                sim.random_density
            )));
        }
        if !(1..=MAX_HISTORY).contains(&self.console.history) {
            return Err(ConfigError::invalid(format!(
                "console history must keep between 1 and {MAX_HISTORY} entries, got {}",
                self.console.history
            )));
        }
        if !(self.display.canvas_size > 0.0) {
            return Err(ConfigError::invalid("canvas size must be positive"));
        }
        parse_hex_color(&self.display.alive_color)?;
        parse_hex_color(&self.display.dead_color)?;
        Ok(())
    }
}

/// Parses a `#RRGGBB` colour into its components.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let invalid = || ConfigError::invalid(format!("colour must look like #RRGGBB, got {value:?}"));
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(rgb)
}
