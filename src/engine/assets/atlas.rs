// Sprite sheet grid layout and cropping

use crate::core::math::{accumulated_offsets, cell_extent, truncate};
use glam::{UVec2, Vec2};
use image::{imageops, DynamicImage, GenericImageView, ImageBuffer, Pixel, Rgba, RgbaImage};

/// A single cell of a sprite sheet grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRegion {
    /// Top-left corner in the sheet (pixels, x = column, y = row)
    pub origin: UVec2,

    /// Size of the cell (pixels)
    pub size: UVec2,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl CellRegion {
    /// Create a new cell region with calculated UV coordinates
    pub fn new(origin: UVec2, size: UVec2, sheet_width: u32, sheet_height: u32) -> Self {
        let sheet = Vec2::new(sheet_width.max(1) as f32, sheet_height.max(1) as f32);
        let uv_min = origin.as_vec2() / sheet;
        let uv_max = (origin + size).as_vec2() / sheet;

        Self {
            origin,
            size,
            uv_min,
            uv_max,
        }
    }
}

/// A sheet image divided into `rows x cols` equally sized cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGrid {
    /// Width of the sheet image
    pub width: u32,

    /// Height of the sheet image
    pub height: u32,

    pub rows: u32,
    pub cols: u32,
}

impl SheetGrid {
    /// Create a new grid over a sheet of the given pixel size
    pub fn new(width: u32, height: u32, rows: u32, cols: u32) -> Self {
        Self {
            width,
            height,
            rows,
            cols,
        }
    }

    /// Real-valued cell size as `(width, height)`
    pub fn cell_size(&self) -> (f64, f64) {
        (
            cell_extent(self.width, self.cols),
            cell_extent(self.height, self.rows),
        )
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    /// Regions of the first `frame_count` cells in row-major order
    ///
    /// Stops at the end of the grid if `frame_count` exceeds the cell count.
    /// Only the rows and columns holding those cells are walked.
    pub fn regions(&self, frame_count: usize) -> Vec<CellRegion> {
        let wanted = frame_count.min(self.cell_count());
        if wanted == 0 {
            return Vec::new();
        }

        let (cell_width, cell_height) = self.cell_size();
        let size = UVec2::new(truncate(cell_width), truncate(cell_height));

        // Both fit in u32: wanted <= rows * cols and cols > 0 here
        let cols = (self.cols as usize).min(wanted) as u32;
        let rows = wanted.div_ceil(self.cols as usize) as u32;
        let col_offsets: Vec<u32> = accumulated_offsets(cell_width, cols).collect();

        let mut regions = Vec::with_capacity(wanted);
        'rows: for y in accumulated_offsets(cell_height, rows) {
            for &x in &col_offsets {
                if regions.len() == wanted {
                    break 'rows;
                }
                regions.push(CellRegion::new(
                    UVec2::new(x, y),
                    size,
                    self.width,
                    self.height,
                ));
            }
        }
        regions
    }
}

/// A decoded pixel grid that frames can be cropped out of
pub trait SheetImage: Sized {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy out the `width x height` sub-image at `(x, y)`
    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self;

    /// Copy out a grid cell
    fn crop_region(&self, region: &CellRegion) -> Self {
        self.crop(region.origin.x, region.origin.y, region.size.x, region.size.y)
    }
}

impl<P> SheetImage for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        imageops::crop_imm(self, x, y, width, height).to_image()
    }
}

impl SheetImage for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.crop_imm(x, y, width, height)
    }
}

/// Build a sheet where every cell is filled with its own solid colour
///
/// The red channel encodes the row and the green channel the column as
/// `index * 16`, so a cropped frame can be traced back to its cell. Cells
/// past index 15 saturate at 255 and are no longer distinguishable. Sheet
/// dimensions saturate at `u32::MAX` instead of overflowing.
pub fn placeholder_sheet(rows: u32, cols: u32, cell_width: u32, cell_height: u32) -> RgbaImage {
    let width = cols.saturating_mul(cell_width);
    let height = rows.saturating_mul(cell_height);
    RgbaImage::from_fn(width, height, |x, y| {
        let row = y / cell_height.max(1);
        let col = x / cell_width.max(1);
        Rgba([channel(row), channel(col), 0x80, 0xff])
    })
}

fn channel(index: u32) -> u8 {
    index.saturating_mul(16).min(u8::MAX as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cell_region_uv() {
        let region = CellRegion::new(UVec2::ZERO, UVec2::new(64, 64), 256, 256);

        assert_eq!(region.uv_min, Vec2::new(0.0, 0.0));
        assert_eq!(region.uv_max, Vec2::new(0.25, 0.25));
    }

    #[test]
    fn test_grid_cell_size() {
        let grid = SheetGrid::new(90, 60, 2, 3);
        let (w, h) = grid.cell_size();
        assert_relative_eq!(w, 30.0);
        assert_relative_eq!(h, 30.0);
        assert_eq!(grid.cell_count(), 6);
    }

    #[test]
    fn test_regions_row_major() {
        let grid = SheetGrid::new(90, 60, 2, 3);
        let origins: Vec<_> = grid.regions(5).iter().map(|r| r.origin).collect();

        assert_eq!(
            origins,
            vec![
                UVec2::new(0, 0),
                UVec2::new(30, 0),
                UVec2::new(60, 0),
                UVec2::new(0, 30),
                UVec2::new(30, 30),
            ]
        );
    }

    #[test]
    fn test_regions_capped_by_grid() {
        let grid = SheetGrid::new(64, 64, 2, 2);
        assert_eq!(grid.regions(9).len(), 4);
        assert!(grid.regions(0).is_empty());
    }

    #[test]
    fn test_regions_truncate_uneven_sheet() {
        let grid = SheetGrid::new(100, 50, 1, 3);
        let regions = grid.regions(3);

        assert_eq!(regions[1].origin, UVec2::new(33, 0));
        assert_eq!(regions[2].origin, UVec2::new(66, 0));
        assert!(regions.iter().all(|r| r.size == UVec2::new(33, 50)));
    }

    #[test]
    fn test_regions_accumulate_fractional_origins() {
        let grid = SheetGrid::new(101, 10, 1, 3);
        let origins: Vec<_> = grid.regions(3).iter().map(|r| r.origin.x).collect();

        assert_eq!(origins, vec![0, 33, 67]);
    }

    #[test]
    fn test_regions_huge_grid_small_request() {
        let wide = SheetGrid::new(4, 4, 1, u32::MAX);
        assert_eq!(wide.regions(1).len(), 1);

        let tall = SheetGrid::new(4, 4, u32::MAX, u32::MAX);
        let regions = tall.regions(2);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].origin, UVec2::new(0, 0));
    }

    #[test]
    fn test_regions_wrap_to_needed_rows() {
        let grid = SheetGrid::new(40, 400, 100, 2);
        let origins: Vec<_> = grid.regions(3).iter().map(|r| r.origin).collect();

        assert_eq!(
            origins,
            vec![UVec2::new(0, 0), UVec2::new(20, 0), UVec2::new(0, 4)]
        );
    }

    #[test]
    fn test_placeholder_channels_saturate() {
        let sheet = placeholder_sheet(1, 20, 1, 1);

        assert_eq!(sheet.get_pixel(15, 0)[1], 240);
        assert_eq!(sheet.get_pixel(16, 0)[1], 255);
        assert_eq!(sheet.get_pixel(19, 0)[1], 255);
    }

    #[test]
    fn test_regions_empty_grid() {
        let grid = SheetGrid::new(64, 64, 0, 4);
        assert!(grid.regions(4).is_empty());
    }

    #[test]
    fn test_crop_rgba() {
        let sheet = placeholder_sheet(2, 2, 8, 4);
        let grid = SheetGrid::new(sheet.width(), sheet.height(), 2, 2);
        let region = grid.regions(4)[3];

        let frame = sheet.crop_region(&region);
        assert_eq!((frame.width(), frame.height()), (8, 4));
        assert_eq!(frame.get_pixel(0, 0), &Rgba([16, 16, 0x80, 0xff]));
    }

    #[test]
    fn test_crop_dynamic_image() {
        let sheet = DynamicImage::ImageRgba8(placeholder_sheet(1, 3, 10, 10));
        let frame = SheetImage::crop(&sheet, 10, 0, 10, 10);

        assert_eq!(SheetImage::width(&frame), 10);
        assert_eq!(frame.to_rgba8().get_pixel(5, 5), &Rgba([0, 16, 0x80, 0xff]));
    }
}
