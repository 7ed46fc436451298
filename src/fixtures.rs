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

//! Fixture file orchestration.
//!
//! Generates every pattern at one resolution, encodes each into a SAC
//! container, and writes the results as `test_mask_<pattern>.sac` into an
//! output directory created on demand. Runs are idempotent: existing files
//! are overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::sac::build_sac;
use crate::{get_pattern, Pattern, PATTERN_NAMES};

/// Default output directory of the fixture binary.
pub const DEFAULT_OUTPUT_DIR: &str = "test_data";

/// Resolution of the reference fixture run.
pub const FIXTURE_WIDTH: u32 = 400;
pub const FIXTURE_HEIGHT: u32 = 300;

/// One fixture file produced by [`write_mask_fixtures`].
#[derive(Debug, Clone)]
pub struct WrittenFixture {
    pub pattern: &'static str,
    pub path: PathBuf,
    pub len: usize,
}

/// Generates and writes all mask fixtures into `output_dir`, creating the
/// directory if it is absent. Files are written in [`PATTERN_NAMES`] order.
///
/// # Errors
///
/// Propagates directory creation and file write failures, and the encoder's
/// length-mismatch error.
pub fn write_mask_fixtures(
    output_dir: &Path,
    width: u32,
    height: u32,
) -> std::io::Result<Vec<WrittenFixture>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(PATTERN_NAMES.len());
    for name in PATTERN_NAMES {
        // Every name in PATTERN_NAMES is registered.
        let Some(pattern) = get_pattern(name) else {
            continue;
        };
        let pair = pattern.generate(width, height);
        let sac = build_sac(&pair.a, &pair.b, width, height)?;

        let path = output_dir.join(format!("test_mask_{}.sac", name));
        fs::write(&path, &sac)?;

        #[cfg(feature = "debug-logging")]
        log::info!("wrote {} ({} bytes)", path.display(), sac.len());

        written.push(WrittenFixture {
            pattern: name,
            path,
            len: sac.len(),
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_cover_all_patterns() {
        let dir = std::env::temp_dir().join(format!("sac-fixtures-unit-{}", std::process::id()));
        let written = write_mask_fixtures(&dir, 16, 8).unwrap();
        let names: Vec<_> = written.iter().map(|f| f.pattern).collect();
        assert_eq!(names, PATTERN_NAMES);
        fs::remove_dir_all(&dir).unwrap();
    }
}
