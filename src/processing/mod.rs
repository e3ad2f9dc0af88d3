//! Address classification, placement and aggregation.
//!
//! - [`classify`] - the [`CidrBlockInfo`] capability set for VPCs and subnets
//! - [`placement`] - recursive index to pixel mapping
//! - [`summary`] - per-category totals for the text report
//! - [`render`] - pixel grid for the image

mod classify;
mod placement;
mod render;
mod summary;

// Re-export public types and functions
pub use classify::{CidrBlockInfo, IpStatus, ReservedAddrs};
pub use placement::{canvas_dim, map_pos};
pub use render::{render_grid, PixelGrid};
pub use summary::{summarize, tally, StatusCounts, SubnetSummary, VpcSummary};
