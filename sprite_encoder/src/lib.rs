/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Encoder for grayscale sprites shown on monochrome displays through bitplane flicker.
//!
//! A sprite sheet is cut into frames, each frame is split into one binary plane per non-black
//! shade, and each plane is stored as columns of 8 vertical pixels per byte (optionally followed
//! by an opacity byte). See [`encode`] for the entry point.

pub mod emit;
pub mod error;
pub mod filename;
pub mod frame;
pub mod mask;
pub mod pack;
pub mod shade;
pub mod stream;

pub use error::EncodeError;
pub use shade::Shades;
pub use stream::{assemble, encode, EncodeParams, PackedStream};
