/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use image::RgbaImage;

/// Alpha values at or above this are drawn.
pub const OPAQUE_THRESHOLD: u8 = 128;

/// Returns the mask bit for a pixel: 1 if it is drawn, 0 if it is see-through.
pub fn is_opaque(alpha: u8) -> u8 {
    u8::from(alpha >= OPAQUE_THRESHOLD)
}

/// Whether the stream needs mask bytes at all.
///
/// This is decided once for the whole sheet: a single pixel that is not fully opaque, anywhere,
/// makes every frame carry a mask.
pub fn should_emit_mask(grid: &RgbaImage) -> bool {
    grid.pixels().any(|pixel| pixel.0[3] < u8::MAX)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn opacity_threshold_is_the_midpoint() {
        assert_eq!(is_opaque(0), 0);
        assert_eq!(is_opaque(127), 0);
        assert_eq!(is_opaque(128), 1);
        assert_eq!(is_opaque(254), 1);
        assert_eq!(is_opaque(255), 1);
    }

    #[test]
    fn opaque_sheet_has_no_mask() {
        let grid = RgbaImage::from_pixel(16, 8, Rgba([10, 10, 10, 255]));
        assert!(!should_emit_mask(&grid));
    }

    #[test]
    fn any_translucent_pixel_enables_the_mask() {
        let mut grid = RgbaImage::from_pixel(16, 8, Rgba([10, 10, 10, 255]));
        grid.put_pixel(15, 7, Rgba([10, 10, 10, 254]));
        assert!(should_emit_mask(&grid));
    }
}
