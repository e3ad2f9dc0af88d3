//! Configuration constants and run settings.

use crate::processing::IpStatus;
use std::path::PathBuf;

/// Directory the images are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// log4rs configuration file looked up in the working directory.
pub const LOG4RS_CONFIG_FILE: &str = "log4rs.yml";
pub const IMAGE_EXTENSION: &str = "png";

pub const COLOR_UNALLOCATED: [u8; 4] = [0, 0, 0, 255];
pub const COLOR_ALLOCATED: [u8; 4] = [255, 255, 255, 255];
pub const COLOR_RESERVED: [u8; 4] = [255, 0, 0, 255];
pub const COLOR_IN_USE: [u8; 4] = [0, 0, 255, 255];

/// RGBA color for each address category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub unallocated: [u8; 4],
    pub allocated: [u8; 4],
    pub reserved: [u8; 4],
    pub in_use: [u8; 4],
}

impl Palette {
    pub fn color(&self, status: IpStatus) -> [u8; 4] {
        match status {
            IpStatus::Unallocated => self.unallocated,
            IpStatus::Allocated => self.allocated,
            IpStatus::Reserved => self.reserved,
            IpStatus::InUse => self.in_use,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            unallocated: COLOR_UNALLOCATED,
            allocated: COLOR_ALLOCATED,
            reserved: COLOR_RESERVED,
            in_use: COLOR_IN_USE,
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub palette: Palette,
}

impl Config {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Config {
        Config {
            output_dir: output_dir.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: Palette::default(),
        }
    }
}
