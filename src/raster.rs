// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! RGB rasters
//!
//! A raster is three grids, one per color channel, that always share
//! the raster's dimensions.  Rasters read and write the plain-text
//! ("P3") flavor of the portable pixmap format, and can be rotated a
//! quarter turn in either direction, which is how the carver reuses
//! its column-removal pass to remove rows.

use crate::error::{CarveError, Result};
use crate::grid::Grid;
use itertools::iproduct;
use std::io::{self, Read, Write};

/// The format tag for three-channel, plain-text pixmaps.
pub const PPM_MAGIC: &str = "P3";

/// The only maximum channel value we read or write.
pub const MAX_CHANNEL_VALUE: i32 = 255;

/// A single color.  Channels are expected to be in `0..=255`, but the
/// engine does no clamping of its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Pixel {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Pixel { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    red: Grid<i32>,
    green: Grid<i32>,
    blue: Grid<i32>,
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.ok_or_else(|| CarveError::Header(format!("missing {}", name)))?;
    match token.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(CarveError::Header(format!("invalid {} '{}'", name, token))),
    }
}

fn parse_channel(token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| CarveError::PixelData(format!("'{}' is not a channel value", token)))
}

impl Raster {
    /// A black raster of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            width,
            height,
            red: Grid::new(width, height),
            green: Grid::new(width, height),
            blue: Grid::new(width, height),
        }
    }

    /// Read a P3 pixmap.  Any whitespace may separate the tokens, but
    /// comments are not supported.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|err| CarveError::Header(format!("not a plain-text pixmap: {}", err)))?;
        let mut tokens = text.split_whitespace();

        let tag = tokens
            .next()
            .ok_or_else(|| CarveError::Header("empty input".to_string()))?;
        if tag != PPM_MAGIC {
            return Err(CarveError::FormatTag(tag.to_string(), PPM_MAGIC));
        }
        let width = parse_dimension(tokens.next(), "width")?;
        let height = parse_dimension(tokens.next(), "height")?;
        let maxval = tokens
            .next()
            .ok_or_else(|| CarveError::Header("missing maximum channel value".to_string()))?;
        if maxval.parse::<i32>().ok() != Some(MAX_CHANNEL_VALUE) {
            return Err(CarveError::MaxValue(maxval.to_string(), MAX_CHANNEL_VALUE));
        }

        // The header is only trusted once the data it promises is
        // actually present.
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| {
                CarveError::Header(format!("dimensions {}x{} are too large", width, height))
            })?;
        let values: Vec<&str> = tokens.take(expected).collect();
        if values.len() < expected {
            return Err(CarveError::PixelData(format!(
                "pixel data ended after {} of {} values",
                values.len(),
                expected
            )));
        }

        let mut raster = Raster::new(width, height);
        for ((row, col), rgb) in iproduct!(0..height, 0..width).zip(values.chunks(3)) {
            let pixel = Pixel::new(
                parse_channel(rgb[0])?,
                parse_channel(rgb[1])?,
                parse_channel(rgb[2])?,
            );
            raster.set_pixel(row, col, pixel);
        }
        Ok(raster)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        Pixel::new(
            self.red[(row, col)],
            self.green[(row, col)],
            self.blue[(row, col)],
        )
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        self.red[(row, col)] = pixel.r;
        self.green[(row, col)] = pixel.g;
        self.blue[(row, col)] = pixel.b;
    }

    pub fn fill(&mut self, pixel: Pixel) {
        self.red.fill(pixel.r);
        self.green.fill(pixel.g);
        self.blue.fill(pixel.b);
    }

    /// Write the raster as a P3 pixmap: a three line header, then one
    /// line per row in which every channel value is followed by a
    /// space.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", PPM_MAGIC)?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", MAX_CHANNEL_VALUE)?;
        for row in 0..self.height {
            for col in 0..self.width {
                let p = self.pixel(row, col);
                write!(out, "{} {} {} ", p.r, p.g, p.b)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Rotate the raster 90° counter-clockwise.  The rightmost column
    /// becomes the top row.
    pub fn rotate_left(&mut self) {
        let (width, height) = self.dimensions();
        let mut aux = Raster::new(height, width);
        for (row, col) in iproduct!(0..height, 0..width) {
            aux.set_pixel(width - 1 - col, row, self.pixel(row, col));
        }
        *self = aux;
    }

    /// Rotate the raster 90° clockwise.  The bottom row becomes the
    /// leftmost column.
    pub fn rotate_right(&mut self) {
        let (width, height) = self.dimensions();
        let mut aux = Raster::new(height, width);
        for (row, col) in iproduct!(0..height, 0..width) {
            aux.set_pixel(col, height - 1 - row, self.pixel(row, col));
        }
        *self = aux;
    }
}
