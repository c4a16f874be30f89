/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use image::RgbaImage;
use log::{debug, warn};

use crate::{
    error::EncodeError,
    frame::FrameSpec,
    mask::should_emit_mask,
    pack::pack_frame,
    shade::Shades,
};

/// An encoded sprite sheet: a `[width, height]` header followed by the data of every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedStream(Vec<u8>);

impl PackedStream {
    pub fn frame_width(&self) -> u8 {
        self.0[0]
    }

    pub fn frame_height(&self) -> u8 {
        self.0[1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: even a stream with no frames has its header.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for PackedStream {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// How to cut up and quantize a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub shades: u8,
    /// Defaults to the image's width.
    pub frame_width: Option<u32>,
    /// Defaults to the image's height.
    pub frame_height: Option<u32>,
    /// Defaults to every frame in the sheet.
    pub frame_count: Option<u32>,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            shades: 2,
            frame_width: None,
            frame_height: None,
            frame_count: None,
        }
    }
}

/// Prepends the header to the frames' data, in the order they are given.
pub fn assemble<I>(frames: I, frame_width: u32, frame_height: u32) -> Result<PackedStream, EncodeError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let overflow = || EncodeError::HeaderOverflow {
        frame_width,
        frame_height,
    };
    let width = u8::try_from(frame_width).map_err(|_| overflow())?;
    let height = u8::try_from(frame_height).map_err(|_| overflow())?;

    let mut bytes = vec![width, height];
    for frame in frames {
        bytes.extend_from_slice(frame.as_ref());
    }
    Ok(PackedStream(bytes))
}

/// Encodes a whole sprite sheet.
///
/// This is all-or-nothing: every parameter is validated before any frame is packed.
pub fn encode(grid: &RgbaImage, params: &EncodeParams) -> Result<PackedStream, EncodeError> {
    let shades = Shades::try_from(params.shades)?;
    let spec = FrameSpec::resolve(
        grid.width(),
        grid.height(),
        params.frame_width,
        params.frame_height,
        params.frame_count,
    )?;

    if let Some(pixel) = grid.pixels().find(|p| p.0[0] != p.0[1] || p.0[0] != p.0[2]) {
        warn!(
            "Image is not grayscale (e.g. {:?}), only the red channel is used as brightness",
            pixel.0
        );
    }

    let masked = should_emit_mask(grid);
    debug!(
        "Encoding {} frame(s) with {} shade(s), {}",
        spec.count,
        shades.count(),
        if masked { "masked" } else { "unmasked" },
    );

    let frame_len = spec.frame_len(shades, masked);
    // Lazy: `assemble` checks the header before pulling the first frame.
    let frames = spec.origins().map(|origin| {
        let mut frame = Vec::with_capacity(frame_len);
        pack_frame(grid, origin, &spec, shades, masked, &mut frame);
        frame
    });
    let stream = assemble(frames, spec.width, spec.height)?;

    debug_assert_eq!(stream.len(), spec.encoded_len(shades, masked));
    Ok(stream)
}
