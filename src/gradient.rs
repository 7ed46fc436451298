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

//! Linear ramp mask pattern.
//!
//! The only pattern whose two arrays differ: A ramps horizontally from
//! -1000 at the left edge toward +1000 at the right, B ramps vertically
//! from -1000 at the top toward +1000 at the bottom:
//!
//! ```text
//! a(x, y) = (x / width)  * 2000 - 1000
//! b(x, y) = (y / height) * 2000 - 1000
//! ```

use crate::{MaskPair, Pattern};

const RAMP_SPAN: f64 = 2000.0;
const RAMP_OFFSET: f64 = 1000.0;

/// Horizontal/vertical ramp pattern. Takes no parameters.
pub struct GradientPattern;

impl Pattern for GradientPattern {
    fn generate(&self, width: u32, height: u32) -> MaskPair {
        let capacity = width as usize * height as usize;
        let mut a = Vec::with_capacity(capacity);
        let mut b = Vec::with_capacity(capacity);

        for y in 0..height {
            let vertical =
                (f64::from(y) / f64::from(height) * RAMP_SPAN - RAMP_OFFSET) as i16;
            for x in 0..width {
                let horizontal =
                    (f64::from(x) / f64::from(width) * RAMP_SPAN - RAMP_OFFSET) as i16;
                a.push(horizontal);
                b.push(vertical);
            }
        }

        MaskPair { a, b }
    }
}
