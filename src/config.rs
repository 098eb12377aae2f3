use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::grid::{CellCoord, Grid, GridError};
use crate::view::{GridView, Palette};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("Window scale must be greater than zero")]
    ZeroWindowScale,
    #[error("Initial selection ({col}, {row}) is outside the grid")]
    SelectionOutOfRange { col: u32, row: u32 },
}

/// Startup settings. Every field is optional in the JSON file; missing ones
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cell_size: u32,
    pub rows: u32,
    pub cols: u32,
    pub window_scale: u32, // Window pixels per canvas pixel
    pub palette: Palette,
    pub initial_selection: Option<CellCoord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 10,
            rows: 10,
            cols: 10,
            window_scale: 5,
            palette: Palette::default(),
            initial_selection: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        if config.window_scale == 0 {
            return Err(ConfigError::ZeroWindowScale);
        }
        Ok(config)
    }

    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.cell_size, self.rows, self.cols)
    }

    /// Window size in logical pixels for a grid built from this config.
    pub fn window_size(&self, grid: &Grid) -> (u32, u32) {
        let (width, height) = grid.canvas_size();
        (width.saturating_mul(self.window_scale), height.saturating_mul(self.window_scale))
    }

    pub fn build_view<C: Canvas>(&self, grid: Grid, canvas: C) -> Result<GridView<C>, ConfigError> {
        let view = GridView::new(grid, self.palette.clone(), canvas);
        match self.initial_selection {
            Some(cell) if !grid.contains(cell) => Err(ConfigError::SelectionOutOfRange {
                col: cell.col,
                row: cell.row,
            }),
            Some(cell) => Ok(view.with_initial_selection(cell)),
            None => Ok(view),
        }
    }
}
