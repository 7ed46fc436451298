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

//! Checkerboard mask pattern.
//!
//! Alternating square blocks of 0 and 1000, with the block containing
//! (0,0) always 0:
//!
//! ```text
//! value(x, y) = ((x / square_size + y / square_size) % 2) * 1000
//! ```

use crate::{MaskPair, Pattern};

/// Default edge length of one checkerboard square, in pixels.
pub const DEFAULT_SQUARE_SIZE: u32 = 50;

const BLOCK_VALUE: i16 = 1000;

/// Checkerboard pattern with a configurable square size.
pub struct CheckerboardPattern {
    pub square_size: u32,
}

impl Default for CheckerboardPattern {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

impl Pattern for CheckerboardPattern {
    fn generate(&self, width: u32, height: u32) -> MaskPair {
        let mut a = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let parity = (x / self.square_size + y / self.square_size) % 2;
                a.push(parity as i16 * BLOCK_VALUE);
            }
        }

        MaskPair { b: a.clone(), a }
    }
}
