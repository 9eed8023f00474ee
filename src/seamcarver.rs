// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with helpers for the width and height
//! operations.  Only vertical seams are ever removed; reducing the
//! height turns the raster on its side, narrows it, and turns it back.

use crate::error::{CarveError, Result};
use crate::raster::Raster;
use crate::seamfinder::{GradientSeams, SeamFinder};
use tracing::{debug, info, instrument, trace};

/// Remove one pixel from every row: the one in the column named by the
/// seam.  Everything to the right of it moves one column left.
pub fn remove_vertical_seam(raster: &Raster, seam: &[usize]) -> Raster {
    let (width, height) = raster.dimensions();
    assert!(width >= 2, "cannot remove a seam from a raster {} wide", width);
    assert_eq!(
        seam.len(),
        height,
        "seam has {} entries for a raster {} high",
        seam.len(),
        height
    );

    let mut target = Raster::new(width - 1, height);
    for (y, &skip) in seam.iter().enumerate() {
        assert!(
            skip < width,
            "seam column {} in row {} is outside a raster {} wide",
            skip,
            y,
            width
        );
        for x in (0..width).filter(|&x| x != skip) {
            target.set_pixel(y, if x < skip { x } else { x - 1 }, raster.pixel(y, x));
        }
    }
    target
}

fn check_target(axis: &'static str, target: usize, current: usize) -> Result<()> {
    if target == 0 || target > current {
        return Err(CarveError::Dimension {
            axis,
            target,
            current,
        });
    }
    Ok(())
}

// This is absurdly inefficient, as the entire energy map and cost map
// are recalculated for every seam.  Only the columns near the last
// seam actually change.
fn narrow(raster: &Raster, newwidth: usize) -> Raster {
    let mut scratch = raster.clone();
    while scratch.width() > newwidth {
        let seam = GradientSeams::new(&scratch).find_vertical_seam();
        trace!(?seam, "removing seam");
        scratch = remove_vertical_seam(&scratch, &seam);
        debug!(width = scratch.width(), target = newwidth, "seam removed");
    }
    scratch
}

/// Reduce the width of a raster by repeatedly removing its cheapest
/// vertical seam.  The target must be between 1 and the current width;
/// asking for the current width changes nothing.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn seam_carve_width(raster: &mut Raster, newwidth: usize) -> Result<()> {
    check_target("width", newwidth, raster.width())?;
    *raster = narrow(raster, newwidth);
    Ok(())
}

/// Reduce the height of a raster.  This is the width reduction applied
/// to the raster rotated a quarter turn to the left, then rotated back.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn seam_carve_height(raster: &mut Raster, newheight: usize) -> Result<()> {
    check_target("height", newheight, raster.height())?;
    let mut scratch = raster.clone();
    scratch.rotate_left();
    scratch = narrow(&scratch, newheight);
    scratch.rotate_right();
    *raster = scratch;
    Ok(())
}

/// Given a raster and a desired new width and height, carve the width
/// first and then the height.  Both targets are checked before any
/// carving starts, so on error the raster is left exactly as it was.
pub fn seamcarve(raster: &mut Raster, newwidth: usize, newheight: usize) -> Result<()> {
    let (width, height) = raster.dimensions();
    check_target("width", newwidth, width)?;
    check_target("height", newheight, height)?;
    info!(width, height, newwidth, newheight, "carving");
    seam_carve_width(raster, newwidth)?;
    seam_carve_height(raster, newheight)?;
    info!(width = raster.width(), height = raster.height(), "carved");
    Ok(())
}
