//! SAC Test Fixture Generator
//!
//! Generates deterministic SAC mask containers used as upload fixtures for
//! the CDN test suite. Output is identical on every platform (no
//! randomness, no compression).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures
//! ```
//!
//! # Generated Files
//!
//! - `test_data/test_mask_radial.sac` (480,024 bytes)
//!   - 400x300 radial falloff, brightest at the center (tests smooth masks)
//! - `test_data/test_mask_checkerboard.sac` (480,024 bytes)
//!   - 50px alternating blocks of 0 and 1000 (tests hard mask edges)
//! - `test_data/test_mask_gradient.sac` (480,024 bytes)
//!   - horizontal ramp in array A, vertical ramp in array B (the one
//!     fixture whose two arrays differ)
//! - `test_data/test_image.png` (with the `test-image` feature, default)
//!   - 400x300 RGB gradient image for manual upload testing

use std::path::Path;

use sac_fixtures::fixtures::{
    write_mask_fixtures, DEFAULT_OUTPUT_DIR, FIXTURE_HEIGHT, FIXTURE_WIDTH,
};

fn main() -> std::io::Result<()> {
    let output_dir = Path::new(DEFAULT_OUTPUT_DIR);

    println!("Generating test SAC files...");
    let written = write_mask_fixtures(output_dir, FIXTURE_WIDTH, FIXTURE_HEIGHT)?;
    for fixture in &written {
        println!(
            "Generated {} ({} bytes, {}x{})",
            fixture.path.display(),
            fixture.len,
            FIXTURE_WIDTH,
            FIXTURE_HEIGHT
        );
    }

    println!();
    println!("Generating test image...");
    #[cfg(feature = "test-image")]
    {
        let image_path = output_dir.join("test_image.png");
        sac_fixtures::test_image::write_test_image(&image_path, FIXTURE_WIDTH, FIXTURE_HEIGHT)?;
        println!(
            "Generated {} ({}x{})",
            image_path.display(),
            FIXTURE_WIDTH,
            FIXTURE_HEIGHT
        );
    }
    #[cfg(not(feature = "test-image"))]
    {
        println!("test-image feature disabled, skipping test image generation");
        println!("  Enable with: cargo run --bin generate_fixtures --features test-image");
    }

    println!();
    println!("Test files ready in ./{}/", DEFAULT_OUTPUT_DIR);
    println!("Upload test_image.png and any test_mask_*.sac to the test page!");

    Ok(())
}
