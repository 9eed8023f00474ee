// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the relative distance
//! between the colors that make them up: the classic
//! d(R^2) + d(G^2) + d(B^2), scaled down.

use crate::raster::Pixel;

/// Squared channel distances are divided by this before they are
/// summed into an energy map, which keeps the cumulative seam costs of
/// tall images comfortably inside an `i32`.
pub const ENERGY_DIVISOR: i32 = 100;

/// (Pixel, Pixel) -> Energy
///
/// This is the rusty expression of:
///
/// ```text
/// |Δ|² = ((Δr)²+(Δg)²+(Δb)²) / 100
/// ```
#[inline]
pub fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> i32 {
    let (dr, dg, db) = (p2.r - p1.r, p2.g - p1.g, p2.b - p1.b);
    (dr * dr + dg * dg + db * db) / ENERGY_DIVISOR
}
