use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::error::{GanttError, GanttResult};
use crate::palette::{DEFAULT_PALETTE, Palette};

/// Presentation settings handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    /// Keep every n-th month tick; values below 1 mean every tick.
    pub tick_step: i64,
    /// Interactive display instead of writing a file.
    pub show: bool,
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Gantt Plot".to_string(),
            tick_step: 1,
            show: false,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartConfig {
    pub fn tick_step(&self) -> usize {
        self.tick_step.max(1) as usize
    }

    pub fn dpi(&self) -> u32 {
        if self.show { 100 } else { 300 }
    }

    pub fn palette(&self) -> GanttResult<Palette> {
        Palette::new(self.palette.clone())
    }

    pub fn validate(&self) -> GanttResult<()> {
        self.palette().map(|_| ())
    }
}

pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> GanttResult<ChartConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GanttError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let config: ChartConfig = serde_json::from_reader(file)?;
    config.validate()?;
    Ok(config)
}
