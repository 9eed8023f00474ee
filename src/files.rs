// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing rasters on disk
//!
//! Files ending in `.ppm`, or with no extension at all, use the
//! plain-text pixmap codec.  Everything else goes through the `image`
//! crate.

use crate::dump::{energy_to_image, raster_from_image, raster_to_image};
use crate::error::{CarveError, Result};
use crate::grid::Grid;
use crate::raster::Raster;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub fn is_plain_pixmap(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        None => true,
        Some(ext) => ext.eq_ignore_ascii_case("ppm"),
    }
}

fn codec_error<E: ToString>(err: E) -> CarveError {
    CarveError::Image(err.to_string())
}

/// Load a raster.  Failing to open the file is reported as
/// `CarveError::Io`; anything wrong with its contents is not.
pub fn read_raster(path: &Path) -> Result<Raster> {
    let raster = if is_plain_pixmap(path) {
        Raster::from_reader(BufReader::new(File::open(path)?))?
    } else {
        let bytes = fs::read(path)?;
        let image = image::load_from_memory(&bytes).map_err(codec_error)?;
        raster_from_image(&image.to_rgb())
    };
    debug!(path = %path.display(), width = raster.width(), height = raster.height(), "read raster");
    Ok(raster)
}

/// Save a raster.  Plain pixmaps are rendered completely in memory
/// before the file is created.
pub fn write_raster(raster: &Raster, path: &Path) -> Result<()> {
    if is_plain_pixmap(path) {
        let mut buffer = Vec::new();
        raster.print(&mut buffer)?;
        fs::write(path, buffer)?;
    } else {
        raster_to_image(raster)?.save(path).map_err(codec_error)?;
    }
    debug!(path = %path.display(), "wrote raster");
    Ok(())
}

/// Save an energy map as a grayscale image in whatever format the
/// path's extension names.
pub fn write_energy(energy: &Grid<i32>, path: &Path) -> Result<()> {
    energy_to_image(energy).save(path).map_err(codec_error)?;
    debug!(path = %path.display(), "wrote energy map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;
    use image::Pixel as _;
    use tempfile::tempdir;

    fn sample() -> Raster {
        let mut raster = Raster::new(3, 2);
        raster.set_pixel(0, 0, Pixel::new(255, 0, 0));
        raster.set_pixel(1, 2, Pixel::new(10, 20, 30));
        raster
    }

    #[test]
    fn chooses_the_codec_by_extension() {
        assert!(is_plain_pixmap(Path::new("in.ppm")));
        assert!(is_plain_pixmap(Path::new("IN.PPM")));
        assert!(is_plain_pixmap(Path::new("in")));
        assert!(!is_plain_pixmap(Path::new("in.png")));
    }

    #[test]
    fn plain_pixmaps_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        write_raster(&sample(), &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "P3\n3 2\n255\n255 0 0 0 0 0 0 0 0 \n0 0 0 0 0 0 10 20 30 \n"
        );
        assert_eq!(read_raster(&path).unwrap(), sample());
    }

    #[test]
    fn png_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_raster(&sample(), &path).unwrap();
        assert_eq!(read_raster(&path).unwrap(), sample());
    }

    #[test]
    fn missing_files_are_io_errors() {
        let dir = tempdir().unwrap();
        for name in &["missing.ppm", "missing.png"] {
            match read_raster(&dir.path().join(name)) {
                Err(CarveError::Io(_)) => {}
                other => panic!("expected an I/O error, got {:?}", other),
            }
        }
    }

    #[test]
    fn binary_pixmaps_are_content_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.ppm");
        fs::write(&path, &b"P3\n1 1\n255\n\xff\xfe 0 0"[..]).unwrap();
        match read_raster(&path) {
            Err(CarveError::Header(_)) => {}
            other => panic!("expected a header error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_paths_are_io_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.ppm");
        match write_raster(&sample(), &path) {
            Err(CarveError::Io(_)) => {}
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn energy_maps_are_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("energy.png");
        let mut energy = Grid::new(2, 2);
        energy[(1, 1)] = 9;
        write_energy(&energy, &path).unwrap();
        let image = image::open(&path).unwrap().to_luma();
        assert_eq!(image.get_pixel(1, 1).channels()[0], 255);
        assert_eq!(image.get_pixel(0, 0).channels()[0], 0);
    }
}
