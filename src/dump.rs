// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bridges to the `image` crate
//!
//! Renders energy maps as grayscale images, and converts rasters to
//! and from RGB buffers so that formats other than plain-text pixmaps
//! can be carved.

use crate::error::{CarveError, Result};
use crate::grid::Grid;
use crate::raster::{Pixel, Raster};
use image::{GrayImage, Luma, Pixel as _, Rgb, RgbImage};
use itertools::iproduct;

fn sample(value: i32) -> Result<u8> {
    <u8 as num_traits::NumCast>::from(value).ok_or(CarveError::ChannelRange(value))
}

/// Scale an energy map into a grayscale image, the brightest pixel
/// being the one with the most energy.  A map with no energy at all is
/// rendered black.
pub fn energy_to_image(energy: &Grid<i32>) -> GrayImage {
    let (width, height) = (energy.width(), energy.height());
    let factor = i64::from(energy.max().max(1));
    let mut out = GrayImage::new(width as u32, height as u32);
    for (r, c) in iproduct!(0..height, 0..width) {
        let scaled = (i64::from(energy[(r, c)].max(0)) * 255 / factor).min(255);
        let cs = [scaled as u8];
        out.put_pixel(c as u32, r as u32, *Luma::from_slice(&cs));
    }
    out
}

/// Copy an 8-bit RGB buffer into a raster.
pub fn raster_from_image(image: &RgbImage) -> Raster {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut raster = Raster::new(width, height);
    for (r, c) in iproduct!(0..height, 0..width) {
        let ch = image.get_pixel(c as u32, r as u32).channels();
        raster.set_pixel(
            r,
            c,
            Pixel::new(i32::from(ch[0]), i32::from(ch[1]), i32::from(ch[2])),
        );
    }
    raster
}

/// Copy a raster into an 8-bit RGB buffer.  Fails if any channel lies
/// outside `0..=255`, since the engine itself never clamps.
pub fn raster_to_image(raster: &Raster) -> Result<RgbImage> {
    let (width, height) = raster.dimensions();
    let mut out = RgbImage::new(width as u32, height as u32);
    for (r, c) in iproduct!(0..height, 0..width) {
        let p = raster.pixel(r, c);
        let cs = [sample(p.r)?, sample(p.g)?, sample(p.b)?];
        out.put_pixel(c as u32, r as u32, *Rgb::from_slice(&cs));
    }
    Ok(out)
}
