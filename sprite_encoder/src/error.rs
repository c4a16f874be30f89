/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display};

use slicedisplay::SliceDisplay;

use crate::shade::Shades;

/// Everything that can prevent a sprite sheet from being encoded.
///
/// All of these are detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The requested number of shades is not one the display technique supports.
    InvalidShadeCount(u8),
    /// The frame size does not fit at least one whole frame into the image.
    InvalidFrameGeometry {
        image_width: u32,
        image_height: u32,
        frame_width: u32,
        frame_height: u32,
    },
    /// More frames were requested than the sheet contains.
    FrameCountOverrun { requested: u32, available: u32 },
    /// A frame dimension does not fit in its one-byte header field.
    HeaderOverflow { frame_width: u32, frame_height: u32 },
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShadeCount(shades) => write!(
                f,
                "invalid shade count {shades}, expected one of {}",
                Shades::SUPPORTED.display()
            ),
            Self::InvalidFrameGeometry {
                image_width,
                image_height,
                frame_width,
                frame_height,
            } => write!(
                f,
                "a {frame_width}x{frame_height} frame does not fit in a {image_width}x{image_height} image"
            ),
            Self::FrameCountOverrun {
                requested,
                available,
            } => write!(
                f,
                "{requested} frames were requested, but the image only contains {available}"
            ),
            Self::HeaderOverflow {
                frame_width,
                frame_height,
            } => write!(
                f,
                "frame size {frame_width}x{frame_height} does not fit the header (max 255x255)"
            ),
        }
    }
}

impl std::error::Error for EncodeError {}
