/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Slicing a sprite sheet into frames.

use log::{debug, warn};

use crate::{error::EncodeError, shade::Shades};

/// Number of pixel rows packed into one byte.
pub const PAGE_HEIGHT: u32 = 8;

/// Size and number of the frames cut out of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpec {
    pub width: u32,
    pub height: u32,
    pub count: u32,
    /// How many frames fit side by side in the sheet.
    pub columns: u32,
}

/// Top-left corner of a frame within the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOrigin {
    pub x: u32,
    pub y: u32,
}

impl FrameSpec {
    /// Fills in the defaults (whole image, every frame) and checks that the frames fit.
    pub fn resolve(
        image_width: u32,
        image_height: u32,
        width: Option<u32>,
        height: Option<u32>,
        count: Option<u32>,
    ) -> Result<Self, EncodeError> {
        let width = width.unwrap_or(image_width);
        let height = height.unwrap_or(image_height);

        let (columns, rows) = match (
            image_width.checked_div(width),
            image_height.checked_div(height),
        ) {
            (Some(columns), Some(rows)) if columns != 0 && rows != 0 => (columns, rows),
            _ => {
                return Err(EncodeError::InvalidFrameGeometry {
                    image_width,
                    image_height,
                    frame_width: width,
                    frame_height: height,
                })
            }
        };

        if image_width % width != 0 || image_height % height != 0 {
            warn!(
                "{image_width}x{image_height} image is not a whole number of {width}x{height} frames, ignoring the {}x{} leftover",
                image_width % width,
                image_height % height,
            );
        }

        let available = columns * rows;
        let count = count.unwrap_or(available);
        if count > available {
            return Err(EncodeError::FrameCountOverrun {
                requested: count,
                available,
            });
        }
        debug!("Slicing {count} {width}x{height} frames ({columns} per row)");

        Ok(Self {
            width,
            height,
            count,
            columns,
        })
    }

    /// Number of 8-row pages per frame; the last one may be partial.
    pub fn pages(&self) -> u32 {
        self.height.div_ceil(PAGE_HEIGHT)
    }

    /// Origin of the `n`th frame, counting left to right, then top to bottom.
    pub fn origin(&self, n: u32) -> FrameOrigin {
        FrameOrigin {
            x: (n % self.columns) * self.width,
            y: (n / self.columns) * self.height,
        }
    }

    pub fn origins(&self) -> impl Iterator<Item = FrameOrigin> + '_ {
        (0..self.count).map(|n| self.origin(n))
    }

    /// Size of the data of a single frame, in bytes.
    pub fn frame_len(&self, shades: Shades, masked: bool) -> usize {
        let bytes_per_column = if masked { 2 } else { 1 };
        usize::from(shades.planes())
            * self.pages() as usize
            * self.width as usize
            * bytes_per_column
    }

    /// Size of the whole stream these frames encode to, header included.
    pub fn encoded_len(&self, shades: Shades, masked: bool) -> usize {
        2 + self.count as usize * self.frame_len(shades, masked)
    }
}

/// Lists the origins of the frames to encode, in stream order.
pub fn slice_frames(spec: &FrameSpec) -> Vec<FrameOrigin> {
    spec.origins().collect()
}
