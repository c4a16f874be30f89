/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{fs, path::PathBuf, process::ExitCode};

use log::info;
use sprite_encoder::{emit::ArrayLiteral, encode, filename::SpriteName, EncodeParams};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = xflags::parse_or_exit! {
        /// Sprite sheet image to convert
        required input_path: PathBuf
        /// Path to write the encoded sprite to
        required output_path: PathBuf
        /// Number of shades: 2, 3, or 4 (default 2)
        optional -s, --shades shades: u8
        /// Width of a single frame (default: from the file name, else the whole image)
        optional -w, --width width: u32
        /// Height of a single frame (default: from the file name, else the whole image)
        optional --height height: u32
        /// Number of frames to encode (default: all of them)
        optional -n, --count count: u32
        /// Name of the emitted array (default: from the file name)
        optional --symbol symbol: String
        /// Write the packed bytes as-is instead of a C array
        optional --raw
    };

    let file_name = args
        .input_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let sprite_name = SpriteName::parse(file_name);
    if sprite_name.is_none() && (args.width.is_none() || args.height.is_none()) {
        info!("\"{file_name}\" is not named <name>_<width>x<height>.<ext>, defaulting to the image's size");
    }

    let img = match image::open(&args.input_path) {
        Ok(img) => img.into_rgba8(),
        Err(err) => {
            eprintln!(
                "Error reading input image (\"{}\"): {err}",
                args.input_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let params = EncodeParams {
        shades: args.shades.unwrap_or(2),
        frame_width: args
            .width
            .or(sprite_name.as_ref().map(|sprite| sprite.frame_width)),
        frame_height: args
            .height
            .or(sprite_name.as_ref().map(|sprite| sprite.frame_height)),
        frame_count: args.count,
    };
    let stream = match encode(&img, &params) {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!(
                "Error encoding \"{}\": {err}",
                args.input_path.display()
            );
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Encoded \"{}\" into {} bytes",
        args.input_path.display(),
        stream.len()
    );

    let written = if args.raw {
        fs::write(&args.output_path, stream.as_bytes())
    } else {
        let symbol = args
            .symbol
            .as_deref()
            .or(sprite_name.as_ref().map(|sprite| sprite.name))
            .or_else(|| args.input_path.file_stem().and_then(|stem| stem.to_str()))
            .unwrap_or("sprite");
        let literal = ArrayLiteral {
            symbol,
            bytes: stream.as_bytes(),
        };
        fs::write(&args.output_path, literal.to_string())
    };
    if let Err(err) = written {
        eprintln!(
            "Error: failed to write to output file \"{}\": {err}",
            args.output_path.display()
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
