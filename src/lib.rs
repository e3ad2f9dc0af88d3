//! Map IP address usage of VPCs.
//!
//! Reads VPC records (a CIDR block plus its subnets and their used addresses),
//! prints a usage report per VPC and renders one PNG per VPC in which every
//! pixel is one address: black unallocated, white allocated to a subnet, red
//! reserved by the subnet, blue in use.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use error::MapError;
use input::VpcReader;
use models::Vpc;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Report and render a single VPC; returns the path of the written image.
pub fn process_vpc<W: Write>(
    vpc: &Vpc,
    out: &mut W,
    config: &Config,
) -> Result<PathBuf, MapError> {
    log::info!("Processing {vpc}");
    vpc.log_containment_warnings();

    let summary = processing::summarize(vpc);
    output::write_summary(out, &summary)?;
    out.flush()?;

    let grid = processing::render_grid(vpc);
    let stem = output::image_file_stem(&vpc.name, &vpc.vpc);
    let path = output::write_png(&grid, &config.palette, &config.output_dir, &stem)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Process every VPC record from `reader` in order, writing reports to `out`.
///
/// Stops at the first error; outputs of earlier records are kept. Returns the
/// number of VPCs processed.
pub fn process_stream<R: Read, W: Write>(
    reader: R,
    out: &mut W,
    config: &Config,
) -> Result<usize, MapError> {
    std::fs::create_dir_all(&config.output_dir)?;
    let mut count = 0;
    for vpc in VpcReader::new(reader) {
        process_vpc(&vpc?, out, config)?;
        count += 1;
    }
    log::info!("Processed {count} VPC record(s)");
    Ok(count)
}
