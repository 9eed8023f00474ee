// #![deny(missing_docs)]

//! Content-aware width and height reduction for RGB rasters.

pub mod ternary;

pub mod error;
pub use error::{CarveError, Result};

pub mod grid;
pub use grid::Grid;

pub mod raster;
pub use raster::{Pixel, Raster};

pub mod pixelpairs;

pub mod energy;
pub use energy::compute_energy;

pub mod cost;
pub use cost::compute_vertical_cost;

pub mod seamfinder;
pub use seamfinder::{find_minimal_vertical_seam, GradientSeams, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, seam_carve_height, seam_carve_width, seamcarve};

pub mod dump;
pub mod files;
