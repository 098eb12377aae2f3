use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relative (column, row) offsets of the eight surrounding cells, in the order
/// they are reported by [`Grid::neighbors_of`].
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell size must be greater than zero")]
    ZeroCellSize,
    #[error("Grid must have at least one row")]
    ZeroRows,
    #[error("Grid must have at least one column")]
    ZeroColumns,
    #[error("Grid of {cols}x{rows} cells at {cell_size}px does not fit a pixel canvas")]
    CanvasTooLarge { cols: u32, rows: u32, cell_size: u32 },
}

/// A cell position as (column, row). Always inside the grid it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: u32,
    pub row: u32,
}

impl CellCoord {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Fixed grid configuration. Every operation is a pure function of the
/// dimensions and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: u32,
    num_rows: u32,
    num_cols: u32,
}

impl Grid {
    pub fn new(cell_size: u32, num_rows: u32, num_cols: u32) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        if num_rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if num_cols == 0 {
            return Err(GridError::ZeroColumns);
        }

        let too_large = GridError::CanvasTooLarge {
            cols: num_cols,
            rows: num_rows,
            cell_size,
        };
        num_cols.checked_mul(cell_size).ok_or_else(|| too_large.clone())?;
        num_rows.checked_mul(cell_size).ok_or(too_large)?;

        Ok(Self {
            cell_size,
            num_rows,
            num_cols,
        })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn num_cols(&self) -> u32 {
        self.num_cols
    }

    /// Pixel dimensions (width, height) of the whole drawn grid.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.num_cols * self.cell_size, self.num_rows * self.cell_size)
    }

    pub fn contains_pixel(&self, pixel_x: i64, pixel_y: i64) -> bool {
        let (width, height) = self.canvas_size();
        (0..width as i64).contains(&pixel_x) && (0..height as i64).contains(&pixel_y)
    }

    /// Maps a pixel to the cell under it. Pixels outside the drawn area are
    /// floor-divided and then wrapped around the torus, so the result is
    /// always a valid cell.
    pub fn pixel_to_cell(&self, pixel_x: i64, pixel_y: i64) -> CellCoord {
        let size = self.cell_size as i64;
        self.wrap_cell(pixel_x.div_euclid(size), pixel_y.div_euclid(size))
    }

    /// Folds any (column, row) pair onto the torus.
    pub fn wrap_cell(&self, col: i64, row: i64) -> CellCoord {
        CellCoord::new(wrap(col, self.num_cols), wrap(row, self.num_rows))
    }

    /// Top-left pixel of a cell.
    pub fn cell_to_pixel(&self, cell: CellCoord) -> (u32, u32) {
        (cell.col * self.cell_size, cell.row * self.cell_size)
    }

    /// The eight cells around `cell`, wrapping across every edge. On grids
    /// with two or fewer rows or columns the same cell can appear more than
    /// once; repeats are kept.
    pub fn neighbors_of(&self, cell: CellCoord) -> [CellCoord; 8] {
        NEIGHBOR_OFFSETS.map(|(d_col, d_row)| {
            self.wrap_cell(cell.col as i64 + d_col, cell.row as i64 + d_row)
        })
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.col < self.num_cols && cell.row < self.num_rows
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let num_rows = self.num_rows;
        (0..self.num_cols)
            .flat_map(move |col| (0..num_rows).map(move |row| CellCoord::new(col, row)))
    }
}

fn wrap(value: i64, len: u32) -> u32 {
    value.rem_euclid(len as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_by_ten() -> Grid {
        Grid::new(10, 10, 10).unwrap()
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(Grid::new(0, 10, 10), Err(GridError::ZeroCellSize));
        assert_eq!(Grid::new(10, 0, 10), Err(GridError::ZeroRows));
        assert_eq!(Grid::new(10, 10, 0), Err(GridError::ZeroColumns));
        assert!(matches!(
            Grid::new(u32::MAX, 1, 2),
            Err(GridError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn neighbors_are_in_bounds_and_ordered() {
        let grid = Grid::new(4, 3, 5).unwrap();
        for cell in grid.cells() {
            let neighbors = grid.neighbors_of(cell);
            assert_eq!(neighbors.len(), 8);
            for (neighbor, (d_col, d_row)) in neighbors.iter().zip(NEIGHBOR_OFFSETS) {
                assert!(grid.contains(*neighbor));
                assert_eq!(
                    neighbor.col as i64,
                    (cell.col as i64 + d_col).rem_euclid(5)
                );
                assert_eq!(
                    neighbor.row as i64,
                    (cell.row as i64 + d_row).rem_euclid(3)
                );
            }
        }
    }

    #[test]
    fn corner_wraps_to_opposite_edges() {
        let grid = ten_by_ten();
        let neighbors = grid.neighbors_of(CellCoord::new(0, 0));
        let expected = [
            CellCoord::new(9, 9),
            CellCoord::new(9, 0),
            CellCoord::new(9, 1),
            CellCoord::new(0, 9),
            CellCoord::new(0, 1),
            CellCoord::new(1, 9),
            CellCoord::new(1, 0),
            CellCoord::new(1, 1),
        ];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn interior_neighbors() {
        let grid = ten_by_ten();
        let neighbors = grid.neighbors_of(CellCoord::new(5, 5));
        let expected = [
            CellCoord::new(4, 4),
            CellCoord::new(4, 5),
            CellCoord::new(4, 6),
            CellCoord::new(5, 4),
            CellCoord::new(5, 6),
            CellCoord::new(6, 4),
            CellCoord::new(6, 5),
            CellCoord::new(6, 6),
        ];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn single_cell_grid_repeats_itself() {
        let grid = Grid::new(10, 1, 1).unwrap();
        let origin = CellCoord::new(0, 0);
        assert_eq!(grid.neighbors_of(origin), [origin; 8]);
    }

    #[test]
    fn two_column_grid_keeps_duplicates() {
        let grid = Grid::new(10, 5, 2).unwrap();
        let neighbors = grid.neighbors_of(CellCoord::new(0, 2));
        // Left and right both land on column 1.
        assert_eq!(neighbors[1], CellCoord::new(1, 2));
        assert_eq!(neighbors[6], CellCoord::new(1, 2));
    }

    #[test]
    fn pixel_cell_round_trip() {
        let grid = Grid::new(7, 4, 6).unwrap();
        for cell in grid.cells() {
            let (x, y) = grid.cell_to_pixel(cell);
            assert_eq!(grid.pixel_to_cell(x as i64, y as i64), cell);
        }
    }

    #[test]
    fn pixel_to_cell_floors() {
        let grid = ten_by_ten();
        assert_eq!(grid.pixel_to_cell(55, 55), CellCoord::new(5, 5));
        assert_eq!(grid.pixel_to_cell(9, 10), CellCoord::new(0, 1));
        assert_eq!(grid.pixel_to_cell(99, 0), CellCoord::new(9, 0));
    }

    #[test]
    fn out_of_canvas_pixels_wrap() {
        let grid = ten_by_ten();
        assert!(!grid.contains_pixel(-1, 50));
        assert_eq!(grid.pixel_to_cell(-1, -1), CellCoord::new(9, 9));
        assert_eq!(grid.pixel_to_cell(100, 105), CellCoord::new(0, 0));
        assert_eq!(grid.pixel_to_cell(-11, 250), CellCoord::new(8, 5));
    }

    #[test]
    fn wrap_cell_folds_any_pair() {
        let grid = Grid::new(10, 4, 6).unwrap();
        assert_eq!(grid.wrap_cell(2, 3), CellCoord::new(2, 3));
        assert_eq!(grid.wrap_cell(6, 4), CellCoord::new(0, 0));
        assert_eq!(grid.wrap_cell(-1, -5), CellCoord::new(5, 3));
        assert_eq!(grid.wrap_cell(u32::MAX as i64, 13), CellCoord::new(3, 1));
    }

    #[test]
    fn cells_walk_column_major() {
        let grid = Grid::new(10, 2, 3).unwrap();
        let cells: Vec<CellCoord> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], CellCoord::new(0, 0));
        assert_eq!(cells[1], CellCoord::new(0, 1));
        assert_eq!(cells[2], CellCoord::new(1, 0));
        assert_eq!(grid.canvas_size(), (30, 20));
    }
}
