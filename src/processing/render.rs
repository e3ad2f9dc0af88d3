//! Builds the per-address pixel grid for a VPC image.

use super::classify::{CidrBlockInfo, IpStatus};
use super::placement::{canvas_dim, map_pos};

/// Square grid of address categories, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    dim: u32,
    cells: Vec<IpStatus>,
}

impl PixelGrid {
    /// A `dim x dim` grid with every pixel unallocated.
    pub fn new(dim: u32) -> PixelGrid {
        let len = dim as usize * dim as usize;
        PixelGrid {
            dim,
            cells: vec![IpStatus::Unallocated; len],
        }
    }

    pub fn dim(&self) -> u32 {
        self.dim
    }

    pub fn get(&self, x: u32, y: u32) -> IpStatus {
        self.cells[self.offset(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, status: IpStatus) {
        let i = self.offset(x, y);
        self.cells[i] = status;
    }

    /// Pixels in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, IpStatus)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, s)| ((i as u32) % dim, (i as u32) / dim, *s))
    }

    /// How many pixels carry `status`.
    pub fn count(&self, status: IpStatus) -> usize {
        self.cells.iter().filter(|s| **s == status).count()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.dim as usize + x as usize
    }
}

/// Classify every address of `info`'s block onto a fresh grid.
///
/// Pixels past the end of the block (when the address count is not a perfect
/// square) stay unallocated.
pub fn render_grid(info: &dyn CidrBlockInfo) -> PixelGrid {
    let dim = canvas_dim(info.cidr().address_count());
    log::debug!("render_grid({}) canvas {dim}x{dim}", info.cidr());
    let mut grid = PixelGrid::new(dim);
    info.for_each_ip(&mut |i, ip| {
        let (x, y) = map_pos(i, dim);
        grid.set(x, y, info.classify(ip));
    });
    grid
}
