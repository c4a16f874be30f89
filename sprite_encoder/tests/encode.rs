/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use image::{Rgba, RgbaImage};
use sprite_encoder::{encode, EncodeError, EncodeParams, PackedStream};

fn gray(value: u8) -> Rgba<u8> {
    Rgba([value, value, value, 255])
}

/// A sheet whose brightness varies with position, so that frames and planes differ.
fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| gray(((x * 7 + y * 13) % 254) as u8))
}

fn params(shades: u8, frame_width: u32, frame_height: u32) -> EncodeParams {
    EncodeParams {
        shades,
        frame_width: Some(frame_width),
        frame_height: Some(frame_height),
        frame_count: None,
    }
}

fn expected_len(count: usize, shades: usize, width: usize, height: usize, masked: bool) -> usize {
    2 + count * (shades - 1) * height.div_ceil(8) * width * if masked { 2 } else { 1 }
}

#[test_log::test]
fn black_frame() {
    let grid = RgbaImage::from_pixel(8, 8, gray(0));
    let stream = encode(&grid, &EncodeParams::default()).unwrap();
    assert_eq!(stream.as_bytes(), [8, 8, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test_log::test]
fn one_transparent_pixel_masks_the_frame() {
    let mut grid = RgbaImage::from_pixel(8, 8, gray(0));
    grid.put_pixel(3, 5, Rgba([0, 0, 0, 0]));
    let stream = encode(&grid, &EncodeParams::default()).unwrap();

    assert_eq!(stream.len(), 2 + 8 * 2);
    let data = &stream.as_bytes()[2..];
    for (column, pair) in data.chunks(2).enumerate() {
        assert_eq!(pair[0], 0);
        let mask = if column == 3 { !(1 << 5) } else { 0xFF };
        assert_eq!(pair[1], mask, "column {column}");
    }
}

#[test_log::test]
fn transparency_anywhere_masks_every_frame() {
    let mut grid = RgbaImage::from_pixel(16, 8, gray(255));
    // Only the second frame has a translucent pixel, and it's still mostly opaque.
    grid.put_pixel(12, 0, Rgba([255, 255, 255, 200]));
    let stream = encode(&grid, &params(2, 8, 8)).unwrap();

    assert_eq!(stream.len(), expected_len(2, 2, 8, 8, true));
    // Fully white and fully opaque: every brightness byte and every mask byte is set.
    assert!(stream.as_bytes()[2..].iter().all(|&byte| byte == 0xFF));
}

#[test_log::test]
fn four_shades_make_three_planes() {
    let values = [0, 63, 64, 127, 128, 191, 192, 253];
    let grid = RgbaImage::from_fn(8, 8, |x, _| gray(values[x as usize]));
    let stream = encode(&grid, &params(4, 8, 8)).unwrap();

    let planes: Vec<_> = stream.as_bytes()[2..].chunks(8).collect();
    assert_eq!(planes.len(), 3);
    assert_eq!(planes[0], [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(planes[1], [0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(planes[2], [0, 0, 0, 0, 0, 0, 0xFF, 0xFF]);
}

#[test_log::test]
fn ten_rows_make_two_pages() {
    let grid = RgbaImage::from_pixel(4, 10, gray(255));
    let stream = encode(&grid, &EncodeParams::default()).unwrap();
    assert_eq!(
        stream.as_bytes(),
        [4, 10, 0xFF, 0xFF, 0xFF, 0xFF, 0b11, 0b11, 0b11, 0b11]
    );
}

#[test_log::test]
fn output_length_formula() {
    let grid = gradient(48, 30);
    for shades in 2..=4 {
        for (width, height) in [(8, 8), (16, 10), (12, 15), (48, 30), (6, 3)] {
            let stream = encode(&grid, &params(shades, width, height)).unwrap();
            let count = ((48 / width) * (30 / height)) as usize;
            assert_eq!(
                stream.len(),
                expected_len(count, shades.into(), width as usize, height as usize, false),
                "{shades} shades, {width}x{height}"
            );
        }
    }
}

#[test_log::test]
fn truncated_pages_are_zero_filled() {
    let grid = RgbaImage::from_pixel(24, 30, gray(255));
    let stream = encode(&grid, &params(3, 8, 10)).unwrap();
    let pages = 2;
    let last_page: Vec<u8> = stream.as_bytes()[2..]
        .chunks(8)
        .skip(pages - 1)
        .step_by(pages)
        .flatten()
        .copied()
        .collect();
    assert!(!last_page.is_empty());
    assert!(last_page.iter().all(|&byte| byte & !0b11 == 0));
}

#[test_log::test]
fn frames_come_in_reading_order() {
    // Each 8x8 frame is uniformly lit or not, following the pattern below.
    let lit = [[true, false, false], [false, true, true]];
    let grid = RgbaImage::from_fn(24, 16, |x, y| {
        gray(if lit[(y / 8) as usize][(x / 8) as usize] { 255 } else { 0 })
    });
    let stream = encode(&grid, &params(2, 8, 8)).unwrap();

    let frames: Vec<bool> = stream.as_bytes()[2..]
        .chunks(8)
        .map(|frame| frame.iter().all(|&byte| byte == 0xFF))
        .collect();
    assert_eq!(frames, [true, false, false, false, true, true]);
}

#[test_log::test]
fn count_limits_the_frames() {
    let grid = gradient(24, 16);
    let all = encode(&grid, &params(2, 8, 8)).unwrap();
    let some = encode(
        &grid,
        &EncodeParams {
            frame_count: Some(4),
            ..params(2, 8, 8)
        },
    )
    .unwrap();
    assert_eq!(some.len(), 2 + 4 * 8);
    assert_eq!(some.as_bytes(), &all.as_bytes()[..some.len()]);

    let none = encode(
        &grid,
        &EncodeParams {
            frame_count: Some(0),
            ..params(2, 8, 8)
        },
    )
    .unwrap();
    assert_eq!(none.as_bytes(), [8, 8]);
}

#[test_log::test]
fn encoding_is_deterministic() {
    let mut grid = gradient(32, 20);
    grid.put_pixel(1, 1, Rgba([9, 9, 9, 3]));
    let params = params(4, 16, 10);
    let first: PackedStream = encode(&grid, &params).unwrap();
    let second = encode(&grid, &params).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn invalid_parameters() {
    let grid = gradient(16, 16);
    assert_eq!(
        encode(&grid, &params(5, 8, 8)),
        Err(EncodeError::InvalidShadeCount(5))
    );
    assert_eq!(
        encode(&grid, &params(2, 32, 8)),
        Err(EncodeError::InvalidFrameGeometry {
            image_width: 16,
            image_height: 16,
            frame_width: 32,
            frame_height: 8,
        })
    );
    assert_eq!(
        encode(
            &grid,
            &EncodeParams {
                frame_count: Some(5),
                ..params(2, 8, 8)
            }
        ),
        Err(EncodeError::FrameCountOverrun {
            requested: 5,
            available: 4,
        })
    );

    let tall = RgbaImage::from_pixel(8, 300, gray(0));
    assert_eq!(
        encode(&tall, &EncodeParams::default()),
        Err(EncodeError::HeaderOverflow {
            frame_width: 8,
            frame_height: 300,
        })
    );
}
