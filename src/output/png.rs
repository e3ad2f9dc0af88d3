//! PNG encoding of a rendered pixel grid.

use crate::config::{Palette, IMAGE_EXTENSION};
use crate::error::MapError;
use crate::processing::PixelGrid;
use image::{Rgba, RgbaImage};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex =
        Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("Invalid Regex?");
}

/// File stem for a VPC image: its display name with characters that are not
/// allowed in file names replaced by `_`. Falls back to the VPC id, then to
/// `vpc`, when the name is blank.
pub fn image_file_stem(name: &str, vpc_id: &str) -> String {
    let raw = [name.trim(), vpc_id.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("vpc");
    let stem = UNSAFE_FILE_CHARS.replace_all(raw, "_").to_string();
    match stem.as_str() {
        "." | ".." => stem.replace('.', "_"),
        _ => stem,
    }
}

/// Paint `grid` with the palette's four colors.
pub fn grid_to_image(grid: &PixelGrid, palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(grid.dim(), grid.dim(), Rgba(palette.unallocated));
    for (x, y, status) in grid.iter() {
        img.put_pixel(x, y, Rgba(palette.color(status)));
    }
    img
}

/// Encode `grid` as `<dir>/<stem>.png` and return the written path.
pub fn write_png(
    grid: &PixelGrid,
    palette: &Palette,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, MapError> {
    let path = dir.join(format!("{stem}.{IMAGE_EXTENSION}"));
    log::debug!(
        "write_png({}) {}x{}",
        path.display(),
        grid.dim(),
        grid.dim()
    );
    grid_to_image(grid, palette)
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| MapError::Image {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::IpStatus;

    #[test]
    fn test_image_file_stem() {
        assert_eq!(image_file_stem("prod", "vpc-1"), "prod");
        assert_eq!(image_file_stem("team/prod: east", "vpc-1"), "team_prod_ east");
        assert_eq!(image_file_stem("  ", "vpc-1"), "vpc-1");
        assert_eq!(image_file_stem("", ""), "vpc");
        assert_eq!(image_file_stem("..", "vpc-1"), "__");
    }

    #[test]
    fn test_grid_to_image_colors() {
        let palette = Palette::default();
        let mut grid = PixelGrid::new(2);
        grid.set(1, 0, IpStatus::Allocated);
        grid.set(0, 1, IpStatus::Reserved);
        grid.set(1, 1, IpStatus::InUse);
        let img = grid_to_image(&grid, &palette);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_write_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut grid = PixelGrid::new(4);
        grid.set(3, 3, IpStatus::InUse);
        let path = write_png(&grid, &Palette::default(), dir.path(), "sample").unwrap();
        assert_eq!(path, dir.path().join("sample.png"));
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(3, 3).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        let err = write_png(&PixelGrid::new(1), &Palette::default(), &missing, "x").unwrap_err();
        assert!(err.is_io(), "{err}");
    }
}
