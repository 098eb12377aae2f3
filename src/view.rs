use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::grid::{CellCoord, Grid};

/// Fill and border color names for one kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    pub fill: String,
    pub border: String,
}

impl CellStyle {
    pub fn new(fill: &str, border: &str) -> Self {
        Self {
            fill: fill.to_string(),
            border: border.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub empty: CellStyle,
    pub selected: CellStyle,
    pub neighbor: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CellStyle::new("white", "black"),
            selected: CellStyle::new("black", "black"),
            neighbor: CellStyle::new("red", "black"),
        }
    }
}

/// The highlighted cell and its eight neighbors. Built in one piece and only
/// ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<CellCoord>,
    neighbors: Vec<CellCoord>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn around(grid: &Grid, cell: CellCoord) -> Self {
        Self {
            selected: Some(cell),
            neighbors: grid.neighbors_of(cell).to_vec(),
        }
    }

    pub fn selected(&self) -> Option<CellCoord> {
        self.selected
    }

    pub fn neighbors(&self) -> &[CellCoord] {
        &self.neighbors
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }
}

/// Receives clicks from the host, in canvas pixel coordinates.
pub trait ClickHandler {
    fn on_click(&mut self, pixel_x: i64, pixel_y: i64);
}

/// Called by the host scheduler once per frame.
pub trait FrameTick {
    fn on_frame_tick(&mut self);
}

/// Owns the selection and the canvas it is drawn on.
pub struct GridView<C: Canvas> {
    grid: Grid,
    palette: Palette,
    selection: Selection,
    canvas: C,
}

impl<C: Canvas> GridView<C> {
    pub fn new(grid: Grid, palette: Palette, canvas: C) -> Self {
        Self {
            grid,
            palette,
            selection: Selection::none(),
            canvas,
        }
    }

    /// Starts already showing `cell` as selected. A cell past the edge is
    /// wrapped onto the grid the same way clicks are.
    pub fn with_initial_selection(mut self, cell: CellCoord) -> Self {
        let cell = self.grid.wrap_cell(cell.col as i64, cell.row as i64);
        self.selection = Selection::around(&self.grid, cell);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Redraws everything: base cells, then the selected cell, then its
    /// neighbors on top.
    pub fn render(&mut self) {
        self.canvas.clear();

        for cell in self.grid.cells() {
            draw_cell(&mut self.canvas, &self.grid, cell, &self.palette.empty);
        }

        if let Some(selected) = self.selection.selected() {
            draw_cell(&mut self.canvas, &self.grid, selected, &self.palette.selected);
        }

        for &neighbor in self.selection.neighbors() {
            draw_cell(&mut self.canvas, &self.grid, neighbor, &self.palette.neighbor);
        }
    }
}

impl<C: Canvas> ClickHandler for GridView<C> {
    fn on_click(&mut self, pixel_x: i64, pixel_y: i64) {
        if !self.grid.contains_pixel(pixel_x, pixel_y) {
            log::debug!(
                "Click at ({}, {}) is outside the grid, wrapping",
                pixel_x,
                pixel_y
            );
        }

        let cell = self.grid.pixel_to_cell(pixel_x, pixel_y);
        self.selection = Selection::around(&self.grid, cell);
        log::info!("Selected cell ({}, {})", cell.col, cell.row);

        self.render();
    }
}

impl<C: Canvas> FrameTick for GridView<C> {
    fn on_frame_tick(&mut self) {
        self.render();
    }
}

fn draw_cell<C: Canvas>(canvas: &mut C, grid: &Grid, cell: CellCoord, style: &CellStyle) {
    let (x, y) = grid.cell_to_pixel(cell);
    let size = grid.cell_size();
    canvas.draw_rect(x, y, size, size, &style.fill, &style.border);
}
