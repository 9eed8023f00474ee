// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cost Map -> Seam

use crate::cost::compute_vertical_cost;
use crate::cq;
use crate::energy::compute_energy;
use crate::grid::Grid;
use crate::raster::Raster;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a vertical seam: one column index
    /// per row, top to bottom.
    fn find_vertical_seam(&self) -> Vec<usize>;
}

/// Given a cost map, return the list of column indices that, when
/// mapped with the range (0..height), give the address of each pixel in
/// the cheapest seam.
///
/// The seam is traced from the bottom up.  Whenever two candidates
/// cost the same the leftmost one is taken, both in the bottom row and
/// among the three cells above the previous pick.
pub fn find_minimal_vertical_seam(cost: &Grid<i32>) -> Vec<usize> {
    let (width, height) = (cost.width(), cost.height());
    let maxwidth = width - 1;

    let mut seam = vec![0; height];
    seam[height - 1] = cost.column_of_min_value_in_row(height - 1, 0, width);
    for r in (0..height - 1).rev() {
        let prev = seam[r + 1];
        let (first, last) = (cq!(prev == 0, 0, prev - 1), cq!(prev == maxwidth, maxwidth, prev + 1));
        seam[r] = cost.column_of_min_value_in_row(r, first, last + 1);
    }
    seam
}

/// The basic seam engine: holds a raster and recomputes the energy and
/// cost maps every time it is asked for a seam.
pub struct GradientSeams<'a> {
    raster: &'a Raster,
}

impl<'a> GradientSeams<'a> {
    pub fn new(raster: &'a Raster) -> Self {
        GradientSeams { raster }
    }
}

impl<'a> SeamFinder for GradientSeams<'a> {
    fn find_vertical_seam(&self) -> Vec<usize> {
        find_minimal_vertical_seam(&compute_vertical_cost(&compute_energy(self.raster)))
    }
}
