// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recoverable errors
//!
//! Only the failures a caller can reasonably report and survive live
//! here: bad files, bad headers, and carve targets outside the image.
//! Out-of-range indices and malformed seams are programming errors and
//! panic at the point of violation instead.

use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum CarveError {
    #[fail(display = "could not read image data: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "unsupported format tag '{}', expected '{}'", _0, _1)]
    FormatTag(String, &'static str),

    #[fail(display = "malformed header: {}", _0)]
    Header(String),

    #[fail(display = "unsupported maximum channel value {}, expected {}", _0, _1)]
    MaxValue(String, i32),

    #[fail(display = "bad pixel data: {}", _0)]
    PixelData(String),

    #[fail(
        display = "target {} {} is outside the legal range 1..={}",
        axis, target, current
    )]
    Dimension {
        axis: &'static str,
        target: usize,
        current: usize,
    },

    #[fail(display = "channel value {} does not fit in an 8-bit sample", _0)]
    ChannelRange(i32),

    #[fail(display = "image codec error: {}", _0)]
    Image(String),
}

impl From<io::Error> for CarveError {
    fn from(err: io::Error) -> Self {
        CarveError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CarveError>;
