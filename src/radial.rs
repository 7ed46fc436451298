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

//! Radial gradient mask pattern.
//!
//! Intensity peaks at the matrix center and falls off linearly with
//! Euclidean distance, reaching 0 at the corners:
//!
//! ```text
//! value(x, y) = (1 - dist(x, y) / max_dist) * intensity
//! ```
//!
//! where `dist` is measured from `(width/2, height/2)` and `max_dist` is
//! the center-to-corner distance. Both arrays of the pair carry the same
//! data.

use crate::{MaskPair, Pattern};

/// Default peak intensity at the center pixel.
pub const DEFAULT_INTENSITY: f64 = 1000.0;

/// Radial falloff pattern with a configurable peak intensity.
///
/// Out-of-range intensities are not validated; conversion to i16 saturates.
pub struct RadialPattern {
    pub intensity: f64,
}

impl Default for RadialPattern {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl Pattern for RadialPattern {
    fn generate(&self, width: u32, height: u32) -> MaskPair {
        let cx = f64::from(width) / 2.0;
        let cy = f64::from(height) / 2.0;
        let max_dist = (cx * cx + cy * cy).sqrt();

        let mut a = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let dx = f64::from(x) - cx;
                let dy = f64::from(y) - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                a.push(((1.0 - dist / max_dist) * self.intensity) as i16);
            }
        }

        MaskPair { b: a.clone(), a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_equals_intensity() {
        // 400x300 has an exact center pixel at (200, 150).
        let pair = RadialPattern::default().generate(400, 300);
        assert_eq!(pair.a[150 * 400 + 200], 1000);
    }

    #[test]
    fn test_corner_fades_to_zero() {
        // (0,0) sits exactly max_dist from the center: sqrt(200^2 + 150^2)
        // = 250, the same as the center-to-corner reference distance.
        let pair = RadialPattern::default().generate(400, 300);
        assert_eq!(pair.a[0], 0);
    }

    #[test]
    fn test_arrays_identical() {
        let pair = RadialPattern::default().generate(64, 48);
        assert_eq!(pair.a, pair.b);
    }

    #[test]
    fn test_custom_intensity() {
        let pattern = RadialPattern { intensity: 500.0 };
        let pair = pattern.generate(400, 300);
        assert_eq!(pair.a[150 * 400 + 200], 500);
    }

    #[test]
    fn test_values_decrease_from_center() {
        let pair = RadialPattern::default().generate(400, 300);
        let center = pair.a[150 * 400 + 200];
        let mid = pair.a[150 * 400 + 300];
        let corner = pair.a[0];
        assert!(center > mid && mid > corner);
    }
}
