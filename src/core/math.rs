// Grid arithmetic shared by the sheet slicer

/// Real-valued size of one grid cell along an axis
///
/// Returns 0.0 for a zero cell count instead of dividing by zero.
pub fn cell_extent(total: u32, cells: u32) -> f64 {
    if cells == 0 {
        return 0.0;
    }
    total as f64 / cells as f64
}

/// Cell start positions along an axis, truncated to whole pixels
///
/// Positions are accumulated by repeated addition of `extent`, then each sum
/// is truncated. This is not the same as `(i as f64 * extent) as u32` for
/// every extent, and crop boundaries depend on the accumulated form.
///
/// Offsets are produced lazily, so taking a prefix of a huge axis is cheap.
pub fn accumulated_offsets(extent: f64, cells: u32) -> impl Iterator<Item = u32> {
    (0..cells).scan(0.0_f64, move |pos, _| {
        let offset = truncate(*pos);
        *pos += extent;
        Some(offset)
    })
}

/// Truncate toward zero into pixel space
pub fn truncate(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        value as u32
    }
}
