/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Brightness quantization into shade planes.
//!
//! A sprite with `n` shades is stored as `n - 1` binary planes. Plane `p` has a bit set wherever
//! the pixel is at least as bright as that plane's threshold; the display alternates between the
//! planes fast enough that the eye sees the intermediate grays. No plane exists for the darkest
//! shade, since all-zero bits across every plane already encode it.

use crate::error::EncodeError;

/// Number of gray levels a sprite is quantized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shades {
    Two,
    Three,
    Four,
}

impl Shades {
    /// The shade counts that can be requested, in order.
    pub const SUPPORTED: [u8; 3] = [2, 3, 4];

    pub fn count(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// How many bitplanes each frame carries.
    pub fn planes(self) -> u8 {
        self.count() - 1
    }

    /// Distance between two consecutive thresholds: `ceil(254 / shades)`.
    pub fn stride(self) -> u8 {
        254u8.div_ceil(self.count())
    }

    /// Minimum brightness for a pixel to be lit in `plane`.
    pub fn threshold(self, plane: u8) -> u16 {
        debug_assert!(plane < self.planes(), "plane {plane} out of range for {:?}", self);
        (u16::from(plane) + 1) * u16::from(self.stride())
    }
}

impl TryFrom<u8> for Shades {
    type Error = EncodeError;

    fn try_from(shades: u8) -> Result<Self, Self::Error> {
        match shades {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(EncodeError::InvalidShadeCount(shades)),
        }
    }
}

/// Returns the bit of `plane` for a pixel of the given brightness.
pub fn quantize(brightness: u8, shades: Shades, plane: u8) -> u8 {
    u8::from(u16::from(brightness) >= shades.threshold(plane))
}
