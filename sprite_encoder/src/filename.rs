/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// What a sprite sheet's file name says about it.
///
/// Sheets are named `<name>_<width>x<height>.<ext>`, where the dimensions are those of a single
/// frame, e.g. `player_16x24.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteName<'a> {
    pub name: &'a str,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl<'a> SpriteName<'a> {
    pub fn parse(file_name: &'a str) -> Option<Self> {
        let (stem, _ext) = file_name.rsplit_once('.')?;
        let (name, dimensions) = stem.rsplit_once('_')?;
        let (width, height) = dimensions.split_once('x')?;
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name,
            frame_width: width.parse().ok()?,
            frame_height: height.parse().ok()?,
        })
    }
}
