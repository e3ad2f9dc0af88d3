//! Report and image output.
//!
//! - [`terminal`] - text report on stdout
//! - [`png`] - PNG encoding of the pixel grid

mod png;
mod terminal;

pub use png::{grid_to_image, image_file_stem, write_png};
pub use terminal::{format_field, write_summary};
