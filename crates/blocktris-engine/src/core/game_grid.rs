use std::{fmt, ops::Index};

use super::{block::BlockKind, position::Position};

/// Cell value of an unoccupied grid cell.
pub const EMPTY_CELL: u8 = 0;

/// Fixed-size occupancy matrix.
///
/// Every cell holds [`EMPTY_CELL`] or the id of the [`BlockKind`] that
/// locked into it. Rows are numbered from the top (row 0) to the bottom
/// (`rows() - 1`).
///
/// # Example
///
/// ```
/// use blocktris_engine::GameGrid;
///
/// let mut grid = GameGrid::new(22, 10);
/// for column in 0..10 {
///     grid.set_cell(21, column, 3);
/// }
/// assert!(grid.is_row_full(21));
/// assert_eq!(grid.clear_full_rows(), 1);
/// assert!(grid.is_row_empty(21));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameGrid {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

impl GameGrid {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY_CELL; rows * columns],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn cell_index(&self, r: i32, c: i32) -> Option<usize> {
        let r = usize::try_from(r).ok().filter(|r| *r < self.rows)?;
        let c = usize::try_from(c).ok().filter(|c| *c < self.columns)?;
        Some(r * self.columns + c)
    }

    #[must_use]
    pub fn is_inside(&self, r: i32, c: i32) -> bool {
        self.cell_index(r, c).is_some()
    }

    /// Returns `true` if `(r, c)` is inside the grid and unoccupied.
    ///
    /// Cells outside the grid are never empty, so this doubles as the
    /// collision test for block tiles.
    #[must_use]
    pub fn is_empty(&self, r: i32, c: i32) -> bool {
        self.cell(r, c) == Some(EMPTY_CELL)
    }

    #[must_use]
    pub fn is_position_empty(&self, pos: Position) -> bool {
        self.is_empty(pos.row, pos.column)
    }

    /// Returns the cell value at `(r, c)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, r: i32, c: i32) -> Option<u8> {
        self.cell_index(r, c).map(|i| self.cells[i])
    }

    /// Writes `value` into `(r, c)`. Writes outside the grid are ignored.
    pub fn set_cell(&mut self, r: i32, c: i32, value: u8) {
        if let Some(i) = self.cell_index(r, c) {
            self.cells[i] = value;
        }
    }

    /// Returns the cells of row `r`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `r` is not less than [`rows()`](Self::rows).
    #[must_use]
    pub fn row(&self, r: usize) -> &[u8] {
        assert!(r < self.rows, "row {r} out of range (rows = {})", self.rows);
        &self.cells[r * self.columns..][..self.columns]
    }

    fn row_mut(&mut self, r: usize) -> &mut [u8] {
        &mut self.cells[r * self.columns..][..self.columns]
    }

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(|r| self.row(r))
    }

    #[must_use]
    pub fn is_row_full(&self, r: usize) -> bool {
        self.row(r).iter().all(|&cell| cell != EMPTY_CELL)
    }

    #[must_use]
    pub fn is_row_empty(&self, r: usize) -> bool {
        self.row(r).iter().all(|&cell| cell == EMPTY_CELL)
    }

    fn clear_row(&mut self, r: usize) {
        self.row_mut(r).fill(EMPTY_CELL);
    }

    fn move_row_down(&mut self, r: usize, num_rows: usize) {
        let start = r * self.columns;
        self.cells
            .copy_within(start..start + self.columns, (r + num_rows) * self.columns);
        self.clear_row(r);
    }

    /// Clears every full row and compacts the rows above it.
    ///
    /// Rows are scanned from the bottom up in a single pass. By the time a
    /// non-full row is visited, `cleared` equals the number of full rows
    /// below it, which is exactly how far it has to fall.
    ///
    /// Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for r in (0..self.rows).rev() {
            if self.is_row_full(r) {
                self.clear_row(r);
                cleared += 1;
            } else if cleared > 0 {
                self.move_row_down(r, cleared);
            }
        }
        cleared
    }
}

impl Index<(usize, usize)> for GameGrid {
    type Output = u8;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        &self.row(r)[c]
    }
}

impl fmt::Display for GameGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                let ch = BlockKind::from_id(cell).map_or('.', BlockKind::as_char);
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut GameGrid, r: usize, value: u8) {
        let r = i32::try_from(r).unwrap();
        for c in 0..i32::try_from(grid.columns()).unwrap() {
            grid.set_cell(r, c, value);
        }
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = GameGrid::new(22, 10);
        assert_eq!(grid.rows(), 22);
        assert_eq!(grid.columns(), 10);
        for r in 0..grid.rows() {
            assert!(grid.is_row_empty(r));
            assert!(!grid.is_row_full(r));
        }
    }

    #[test]
    fn test_is_inside_bounds() {
        let grid = GameGrid::new(22, 10);
        assert!(grid.is_inside(0, 0));
        assert!(grid.is_inside(21, 9));
        assert!(!grid.is_inside(-1, 0));
        assert!(!grid.is_inside(0, -1));
        assert!(!grid.is_inside(22, 0));
        assert!(!grid.is_inside(0, 10));
    }

    #[test]
    fn test_out_of_bounds_is_not_empty() {
        let grid = GameGrid::new(4, 4);
        assert!(grid.is_empty(0, 0));
        assert!(!grid.is_empty(-1, 0));
        assert!(!grid.is_empty(4, 0));
        assert!(!grid.is_empty(0, 4));
        assert!(!grid.is_position_empty(Position::new(2, -1)));
    }

    #[test]
    fn test_set_and_read_cell() {
        let mut grid = GameGrid::new(4, 4);
        grid.set_cell(2, 3, BlockKind::T.id());
        assert_eq!(grid.cell(2, 3), Some(6));
        assert_eq!(grid[(2, 3)], 6);
        assert!(!grid.is_empty(2, 3));
        assert_eq!(grid.cell(9, 9), None);
    }

    #[test]
    fn test_set_cell_outside_is_ignored() {
        let mut grid = GameGrid::new(2, 2);
        grid.set_cell(-1, 0, 1);
        grid.set_cell(0, 2, 1);
        assert_eq!(grid, GameGrid::new(2, 2));
    }

    #[test]
    fn test_row_with_one_gap_is_not_full() {
        let mut grid = GameGrid::new(22, 10);
        for c in 0..9 {
            grid.set_cell(21, c, 1);
        }
        assert!(!grid.is_row_full(21));
        assert!(!grid.is_row_empty(21));
        assert_eq!(grid.clear_full_rows(), 0);

        grid.set_cell(21, 9, 1);
        assert!(grid.is_row_full(21));
        assert_eq!(grid.clear_full_rows(), 1);
        assert!(grid.is_row_empty(21));
    }

    #[test]
    fn test_zero_column_rows_are_full_and_empty() {
        let grid = GameGrid::new(3, 0);
        assert!(grid.is_row_full(0));
        assert!(grid.is_row_empty(0));
    }

    #[test]
    fn test_clear_non_adjacent_full_rows() {
        // bottom to top: row 2 full, row 1 empty, row 0 full
        let mut grid = GameGrid::new(3, 4);
        fill_row(&mut grid, 0, 2);
        fill_row(&mut grid, 2, 5);

        assert_eq!(grid.clear_full_rows(), 2);
        for r in 0..3 {
            assert!(grid.is_row_empty(r), "row {r} should be empty");
        }
    }

    #[test]
    fn test_rows_fall_by_count_of_full_rows_below() {
        let mut grid = GameGrid::new(6, 3);
        // row 5: full, row 4: marker A, row 3: full, row 2: full, row 1: marker B
        fill_row(&mut grid, 5, 1);
        grid.set_cell(4, 0, 4);
        fill_row(&mut grid, 3, 1);
        fill_row(&mut grid, 2, 1);
        grid.set_cell(1, 2, 7);

        assert_eq!(grid.clear_full_rows(), 3);

        // A had one full row beneath it, B had three.
        assert_eq!(grid.row(5), &[4, 0, 0]);
        assert_eq!(grid.row(4), &[0, 0, 7]);
        for r in 0..4 {
            assert!(grid.is_row_empty(r), "row {r} should be empty");
        }
    }

    #[test]
    fn test_clear_preserves_rows_without_clears_below() {
        let mut grid = GameGrid::new(4, 2);
        grid.set_cell(3, 0, 1);
        fill_row(&mut grid, 1, 2);
        grid.set_cell(0, 1, 3);

        assert_eq!(grid.clear_full_rows(), 1);
        assert_eq!(grid.row(3), &[1, 0]);
        assert_eq!(grid.row(2), &[0, 0]);
        assert_eq!(grid.row(1), &[0, 3]);
        assert_eq!(grid.row(0), &[0, 0]);
    }

    #[test]
    fn test_clear_all_rows() {
        let mut grid = GameGrid::new(5, 3);
        for r in 0..5 {
            fill_row(&mut grid, r, 6);
        }
        assert_eq!(grid.clear_full_rows(), 5);
        assert_eq!(grid, GameGrid::new(5, 3));
    }

    #[test]
    fn test_display_renders_kind_letters() {
        let mut grid = GameGrid::new(2, 3);
        grid.set_cell(1, 0, BlockKind::I.id());
        grid.set_cell(1, 2, BlockKind::Z.id());
        assert_eq!(grid.to_string(), "...\nI.Z");
    }
}
