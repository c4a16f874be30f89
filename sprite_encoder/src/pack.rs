/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Packing frames into vertical bitplane bytes.
//!
//! Each byte covers one column of one 8-row page, with the topmost row in bit 0. A frame is laid
//! out plane by plane, each plane page by page, each page column by column. When the sheet has
//! any transparency, every brightness byte is followed by the matching mask byte.

use image::RgbaImage;

use crate::{
    frame::{FrameOrigin, FrameSpec, PAGE_HEIGHT},
    mask::is_opaque,
    shade::{quantize, Shades},
};

/// Packs up to 8 pixels of one column of a frame, returning the brightness and mask bytes.
///
/// Rows past `frame_height` are never read, and their bits are left clear.
pub fn pack_column(
    grid: &RgbaImage,
    origin: FrameOrigin,
    column: u32,
    frame_height: u32,
    page: u32,
    plane: u8,
    shades: Shades,
) -> (u8, u8) {
    let x = origin.x + column;
    let mut byte = 0;
    let mut mask = 0;
    for iy in 0..PAGE_HEIGHT {
        let y = page * PAGE_HEIGHT + iy;
        if y >= frame_height {
            break;
        }

        let [brightness, _, _, alpha] = grid.get_pixel(x, origin.y + y).0;
        byte |= quantize(brightness, shades, plane) << iy;
        mask |= is_opaque(alpha) << iy;
    }
    (byte, mask)
}

/// Appends the bytes of the frame at `origin` to `out`.
pub fn pack_frame(
    grid: &RgbaImage,
    origin: FrameOrigin,
    spec: &FrameSpec,
    shades: Shades,
    masked: bool,
    out: &mut Vec<u8>,
) {
    for plane in 0..shades.planes() {
        for page in 0..spec.pages() {
            for column in 0..spec.width {
                let (byte, mask) =
                    pack_column(grid, origin, column, spec.height, page, plane, shades);
                out.push(byte);
                if masked {
                    out.push(mask);
                }
            }
        }
    }
}
