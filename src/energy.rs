// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a raster, calculate the energy map: for every pixel, the
//! color distance between its left and right neighbors plus the
//! distance between its upper and lower neighbors.  This is the most
//! straightforward of the energy map algorithms, the one with no
//! forward energy calculation.

use crate::cq;
use crate::grid::Grid;
use crate::pixelpairs::energy_of_pair;
use crate::raster::Raster;
use itertools::iproduct;

// Raster -> Energy Map

/// Compute the energy of every pixel in a raster.
///
/// Pixels on the border have no neighbor on one side.  The missing
/// neighbor is replaced by the nearest pixel that does exist along the
/// same axis, which is always the pixel itself, so the energy of a
/// one-row or one-column raster is well defined and a single pixel
/// has no energy at all.
pub fn compute_energy(raster: &Raster) -> Grid<i32> {
    let (width, height) = raster.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = Grid::new(width, height);
    for (r, c) in iproduct!(0..height, 0..width) {
        let (left, right, up, down) = (
            raster.pixel(r, cq!(c == 0, c, c - 1)),
            raster.pixel(r, cq!(c >= mw, c, c + 1)),
            raster.pixel(cq!(r == 0, r, r - 1), c),
            raster.pixel(cq!(r >= mh, r, r + 1), c),
        );
        emap[(r, c)] = energy_of_pair(&left, &right) + energy_of_pair(&up, &down);
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    fn ramp(pixels: &[i32], width: usize, height: usize) -> Raster {
        let mut raster = Raster::new(width, height);
        for (i, (r, c)) in iproduct!(0..height, 0..width).enumerate() {
            raster.set_pixel(r, c, Pixel::new(pixels[i], 0, 0));
        }
        raster
    }

    #[test]
    fn single_row_uses_itself_at_the_edges() {
        let energy = compute_energy(&ramp(&[0, 100, 200], 3, 1));
        assert_eq!(energy.row(0), &[100, 400, 100]);
    }

    #[test]
    fn single_column_uses_itself_at_the_edges() {
        let energy = compute_energy(&ramp(&[0, 100, 200], 1, 3));
        assert_eq!(
            (energy[(0, 0)], energy[(1, 0)], energy[(2, 0)]),
            (100, 400, 100)
        );
    }

    #[test]
    fn single_pixel_has_no_energy() {
        let mut raster = Raster::new(1, 1);
        raster.set_pixel(0, 0, Pixel::new(255, 255, 255));
        assert_eq!(compute_energy(&raster)[(0, 0)], 0);
    }

    #[test]
    fn flat_raster_has_no_energy() {
        let mut raster = Raster::new(4, 3);
        raster.fill(Pixel::new(30, 60, 90));
        let energy = compute_energy(&raster);
        assert_eq!(energy.max(), 0);
    }

    #[test]
    fn both_gradients_contribute() {
        // 3x3 with a bright center pixel: its four neighbors each see
        // it on exactly one side, the center and the corners see
        // nothing change across them.
        let mut raster = Raster::new(3, 3);
        raster.set_pixel(1, 1, Pixel::new(100, 100, 100));
        let energy = compute_energy(&raster);
        assert_eq!(energy.row(0), &[0, 300, 0]);
        assert_eq!(energy.row(1), &[300, 0, 300]);
        assert_eq!(energy.row(2), &[0, 300, 0]);
    }

    #[test]
    fn energy_matches_dimensions() {
        let energy = compute_energy(&Raster::new(5, 2));
        assert_eq!((energy.width(), energy.height()), (5, 2));
    }
}
