// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional grid
//!
//! An addressable two-dimensional field holding one value per pixel:
//! a color channel of a raster, the energy map, or the cumulative cost
//! map used to find seams.  Addresses are always `(row, column)`.

use std::fmt::Display;
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Define a new grid with every cell set to the content type's
    /// default, which for the integer grids used throughout is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "grid width must be positive");
        assert!(height > 0, "grid height must be positive");
        Grid {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height,
            "row {} out of bounds for grid of height {}",
            row,
            self.height
        );
        assert!(
            col < self.width,
            "column {} out of bounds for grid of width {}",
            col,
            self.width
        );
        row * self.width + col
    }

    /// The value at a single cell's address.
    pub fn at(&self, row: usize, col: usize) -> &P {
        &self.cells[self.get_index(row, col)]
    }

    /// A mutable reference to the value at a single cell's address.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut P {
        let index = self.get_index(row, col);
        &mut self.cells[index]
    }

    /// One row of the grid as a contiguous slice.
    pub fn row(&self, row: usize) -> &[P] {
        let start = self.get_index(row, 0);
        &self.cells[start..start + self.width]
    }

    pub fn fill(&mut self, value: P) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Set every cell in the first and last rows and the first and
    /// last columns.  The carver never calls this; it is for building
    /// masks and test fixtures.
    pub fn fill_border(&mut self, value: P) {
        let (mw, mh) = (self.width - 1, self.height - 1);
        for col in 0..self.width {
            self[(0, col)] = value;
            self[(mh, col)] = value;
        }
        for row in 0..self.height {
            self[(row, 0)] = value;
            self[(row, mw)] = value;
        }
    }
}

impl<P: Default + Copy + Ord> Grid<P> {
    /// The largest value in the grid.
    pub fn max(&self) -> P {
        self.cells
            .iter()
            .copied()
            .fold(self.cells[0], |acc, v| if v > acc { v } else { acc })
    }

    fn check_region(&self, row: usize, start: usize, end: usize) {
        assert!(
            start < end,
            "empty column region {}..{} in row {}",
            start,
            end,
            row
        );
        assert!(
            end <= self.width,
            "column region {}..{} exceeds grid width {}",
            start,
            end,
            self.width
        );
    }

    /// The column of the smallest value in `row` between `start`
    /// (inclusive) and `end` (exclusive).  When several cells tie, the
    /// leftmost one wins.
    pub fn column_of_min_value_in_row(&self, row: usize, start: usize, end: usize) -> usize {
        self.check_region(row, start, end);
        let cells = &self.row(row)[start..end];
        // A strict comparison keeps the first of any run of equal values.
        let offset = (1..cells.len()).fold(0, |best, i| if cells[i] < cells[best] { i } else { best });
        start + offset
    }

    /// The smallest value in `row` between `start` (inclusive) and
    /// `end` (exclusive).
    pub fn min_value_in_row(&self, row: usize, start: usize, end: usize) -> P {
        self[(row, self.column_of_min_value_in_row(row, start, end))]
    }
}

impl<P: Default + Copy + Display> Grid<P> {
    /// Dump the grid as text: the width and height on the first line,
    /// then one line per row with every value followed by a space.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {}", self.width, self.height)?;
        for row in 0..self.height {
            for value in self.row(row) {
                write!(out, "{} ", value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (row, col): (usize, usize)) -> &P {
        self.at(row, col)
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut P {
        self.at_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn from_rows(rows: &[&[i32]]) -> Grid<i32> {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                grid[(r, c)] = *v;
            }
        }
        grid
    }

    #[test]
    fn new_grid_is_zeroed() {
        let grid: Grid<i32> = Grid::new(3, 5);
        assert_eq!((grid.width(), grid.height()), (3, 5));
        assert!(iproduct!(0..5, 0..3).all(|(r, c)| grid[(r, c)] == 0));
    }

    #[test]
    fn fill_reaches_every_cell() {
        for &(w, h, v) in &[(3, 5, 7), (4, 4, -3), (1, 1, 0), (6, 2, 255)] {
            let mut grid = Grid::new(w, h);
            grid.fill(v);
            assert!(iproduct!(0..h, 0..w).all(|(r, c)| *grid.at(r, c) == v));
        }
    }

    #[test]
    fn at_mut_writes_one_cell() {
        let mut grid = Grid::new(3, 2);
        *grid.at_mut(1, 2) = 42;
        assert_eq!(grid[(1, 2)], 42);
        assert_eq!(grid[(0, 2)], 0);
        assert_eq!(grid.row(1), &[0, 0, 42]);
    }

    #[test]
    #[should_panic(expected = "column 3 out of bounds")]
    fn column_past_the_edge_panics() {
        let grid: Grid<i32> = Grid::new(3, 2);
        let _value: i32 = grid[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "row 2 out of bounds")]
    fn row_past_the_edge_panics() {
        let mut grid: Grid<i32> = Grid::new(3, 2);
        *grid.at_mut(2, 0) = 1;
    }

    #[test]
    #[should_panic(expected = "grid width must be positive")]
    fn zero_width_panics() {
        let _: Grid<i32> = Grid::new(0, 2);
    }

    #[test]
    fn print_matches_dimensions() {
        let mut grid = Grid::new(2, 3);
        grid.fill(4);
        *grid.at_mut(2, 1) = 9;
        let mut out = Vec::new();
        grid.print(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 3\n4 4 \n4 4 \n4 9 \n"
        );
    }

    #[test]
    fn border_fill_leaves_the_interior() {
        let mut grid = Grid::new(4, 3);
        grid.fill_border(1);
        assert_eq!(grid.row(0), &[1, 1, 1, 1]);
        assert_eq!(grid.row(1), &[1, 0, 0, 1]);
        assert_eq!(grid.row(2), &[1, 1, 1, 1]);
    }

    #[test]
    fn border_fill_of_a_single_column() {
        let mut grid = Grid::new(1, 3);
        grid.fill_border(5);
        assert!(iproduct!(0..3, 0..1).all(|(r, c)| grid[(r, c)] == 5));
    }

    #[test]
    fn max_finds_the_largest_value() {
        let grid = from_rows(&[&[-4, -2], &[-9, -3]]);
        assert_eq!(grid.max(), -2);
        let grid = from_rows(&[&[1, 8, 3], &[8, 2, 0]]);
        assert_eq!(grid.max(), 8);
    }

    #[test]
    fn row_minimum_prefers_the_leftmost() {
        let grid = from_rows(&[&[5, 2, 7, 2, 2], &[0, 0, 0, 0, 0]]);
        assert_eq!(grid.column_of_min_value_in_row(0, 0, 5), 1);
        assert_eq!(grid.column_of_min_value_in_row(0, 2, 5), 3);
        assert_eq!(grid.column_of_min_value_in_row(0, 2, 3), 2);
        assert_eq!(grid.column_of_min_value_in_row(1, 1, 4), 1);
        assert_eq!(grid.min_value_in_row(0, 0, 5), 2);
        assert_eq!(grid.min_value_in_row(0, 2, 3), 7);
    }

    #[test]
    #[should_panic(expected = "empty column region")]
    fn empty_region_panics() {
        let grid: Grid<i32> = Grid::new(3, 1);
        grid.column_of_min_value_in_row(0, 2, 2);
    }
}
