// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy Map -> Cost Map
//!
//! The cost of a pixel is the least total energy of any connected path
//! from the top row down to it.

use crate::cq;
use crate::grid::Grid;
use itertools::iproduct;

/// Accumulate the vertical cost map for an energy map.
///
/// The first row costs exactly its own energy.  Every later cell adds
/// its energy to the cheapest of the (up to) three cells touching it
/// in the row above; at the left and right edges the missing diagonal
/// is simply not a candidate.  The returned map is always a new grid.
pub fn compute_vertical_cost(energy: &Grid<i32>) -> Grid<i32> {
    let (width, height) = (energy.width(), energy.height());
    let maxwidth = width - 1;

    let mut cost = Grid::new(width, height);
    for c in 0..width {
        cost[(0, c)] = energy[(0, c)];
    }

    for (r, c) in iproduct!(1..height, 0..width) {
        let (first, last) = (cq!(c == 0, 0, c - 1), cq!(c == maxwidth, maxwidth, c + 1));
        let parent = cost.min_value_in_row(r - 1, first, last + 1);
        cost[(r, c)] = energy[(r, c)] + parent;
    }
    cost
}
