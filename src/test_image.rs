// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Auxiliary RGB test image for manual upload testing.
//!
//! Independent of the SAC container: a plain 8-bit RGB PNG at the same
//! resolution, with R ramping horizontally, G vertically, and B along the
//! diagonal. Only compiled with the `test-image` feature.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Builds the raw RGB raster: R = x ramp, G = y ramp, B = diagonal ramp,
/// each scaled to 0..=255. Row-major, 3 bytes per pixel.
pub fn gradient_rgb_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            pixels.extend_from_slice(&[r, g, b]);
        }
    }
    pixels
}

/// Writes the gradient raster to `path` as an 8-bit RGB PNG.
///
/// # Errors
///
/// Propagates file creation and PNG encoding failures.
pub fn write_test_image(path: &Path, width: u32, height: u32) -> std::io::Result<()> {
    let pixels = gradient_rgb_pixels(width, height);

    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;

    Ok(())
}
