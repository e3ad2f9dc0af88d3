//! Space-filling placement of address indices on a square canvas.
//!
//! The canvas is split into four quadrants, each quadrant into four more, and
//! so on down to single pixels. Index `i` fills the quadrants in the order
//! top-left, top-right, bottom-left, bottom-right, so addresses that are close
//! in the block land close together on the image.

/// Side of the smallest power-of-two square holding `address_count` pixels.
///
/// ```
/// use vpc_ip_map::processing::canvas_dim;
/// assert_eq!(canvas_dim(256), 16);
/// assert_eq!(canvas_dim(512), 32);
/// ```
pub fn canvas_dim(address_count: u64) -> u32 {
    let mut dim: u64 = 1;
    while dim * dim < address_count {
        dim <<= 1;
    }
    dim as u32
}

/// Map index `i` (`0 <= i < dim * dim`) to pixel `(x, y)` on a `dim x dim`
/// canvas. `dim` must be a power of two.
pub fn map_pos(i: u64, dim: u32) -> (u32, u32) {
    if dim <= 1 {
        return (0, 0);
    }

    let sub_dim = dim / 2;
    let sub_block_size = u64::from(sub_dim) * u64::from(sub_dim);

    let (x, y) = map_pos(i % sub_block_size, sub_dim);

    match i / sub_block_size {
        0 => (x, y),
        1 => (x + sub_dim, y),
        2 => (x, y + sub_dim),
        _ => (x + sub_dim, y + sub_dim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_case() {
        assert_eq!(map_pos(0, 1), (0, 0));
        assert_eq!(map_pos(0, 0), (0, 0));
    }

    #[test]
    fn test_quadrant_anchors() {
        // Sub-index 0 of each quadrant on a 4x4 canvas (sub block size 4).
        assert_eq!(map_pos(0, 4), (0, 0));
        assert_eq!(map_pos(4, 4), (2, 0));
        assert_eq!(map_pos(8, 4), (0, 2));
        assert_eq!(map_pos(12, 4), (2, 2));
    }

    #[test]
    fn test_first_quadrant_is_filled_first() {
        assert_eq!(map_pos(1, 4), (1, 0));
        assert_eq!(map_pos(2, 4), (0, 1));
        assert_eq!(map_pos(3, 4), (1, 1));
        // Indices 0..16 of an 8x8 canvas stay inside the top-left 4x4 quadrant.
        for i in 0..16 {
            let (x, y) = map_pos(i, 8);
            assert!(x < 4 && y < 4, "index {i} escaped to ({x},{y})");
        }
        assert_eq!(map_pos(16, 8), (4, 0));
        assert_eq!(map_pos(63, 8), (7, 7));
    }

    #[test]
    fn test_bijection() {
        for dim in [1u32, 2, 4, 8, 16, 32] {
            let mut seen = HashSet::new();
            let cells = u64::from(dim) * u64::from(dim);
            for i in 0..cells {
                let (x, y) = map_pos(i, dim);
                assert!(x < dim && y < dim, "({x},{y}) outside {dim}x{dim}");
                assert!(seen.insert((x, y)), "pixel ({x},{y}) hit twice, dim={dim}");
            }
            assert_eq!(seen.len() as u64, cells);
        }
    }

    #[test]
    fn test_deterministic() {
        for i in 0..256 {
            assert_eq!(map_pos(i, 16), map_pos(i, 16));
        }
    }

    #[test]
    fn test_canvas_dim() {
        assert_eq!(canvas_dim(1), 1);
        assert_eq!(canvas_dim(2), 2);
        assert_eq!(canvas_dim(4), 2);
        assert_eq!(canvas_dim(8), 4);
        assert_eq!(canvas_dim(256), 16);
        assert_eq!(canvas_dim(65536), 256);
        assert_eq!(canvas_dim(1 << 17), 512);
        assert_eq!(canvas_dim(1 << 32), 65536);
    }
}
