//! End-to-end tests for the fixture orchestration: the files a consumer of
//! the generated test data would actually pick up from disk.

use std::fs;
use std::path::PathBuf;

use sac_fixtures::fixtures::{write_mask_fixtures, FIXTURE_HEIGHT, FIXTURE_WIDTH};
use sac_fixtures::{SAC_HEADER_LEN, SAC_MAGIC};

/// Unique scratch directory per test; removed on success.
fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sac-fixtures-{}-{}", tag, std::process::id()))
}

#[test]
fn writes_all_three_mask_files() {
    let dir = scratch_dir("masks");
    let written = write_mask_fixtures(&dir, FIXTURE_WIDTH, FIXTURE_HEIGHT).unwrap();

    assert_eq!(written.len(), 3);
    for (fixture, expected_name) in written.iter().zip([
        "test_mask_radial.sac",
        "test_mask_checkerboard.sac",
        "test_mask_gradient.sac",
    ]) {
        assert_eq!(fixture.path.file_name().unwrap(), expected_name);

        let bytes = fs::read(&fixture.path).unwrap();
        assert_eq!(bytes.len(), fixture.len);
        assert_eq!(
            bytes.len(),
            SAC_HEADER_LEN + 2 * 2 * (FIXTURE_WIDTH * FIXTURE_HEIGHT) as usize
        );
        assert_eq!(&bytes[0..4], SAC_MAGIC);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rerun_overwrites_idempotently() {
    let dir = scratch_dir("rerun");
    write_mask_fixtures(&dir, 32, 32).unwrap();
    let first = fs::read(dir.join("test_mask_radial.sac")).unwrap();

    write_mask_fixtures(&dir, 32, 32).unwrap();
    let second = fs::read(dir.join("test_mask_radial.sac")).unwrap();

    assert_eq!(first, second);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn creates_nested_output_directory() {
    let dir = scratch_dir("nested").join("deeper").join("still");
    write_mask_fixtures(&dir, 16, 16).unwrap();
    assert!(dir.join("test_mask_gradient.sac").exists());
    fs::remove_dir_all(scratch_dir("nested")).unwrap();
}

#[cfg(feature = "test-image")]
#[test]
fn test_image_has_png_signature() {
    use sac_fixtures::test_image::write_test_image;

    let dir = scratch_dir("image");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("test_image.png");
    write_test_image(&path, FIXTURE_WIDTH, FIXTURE_HEIGHT).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");

    fs::remove_dir_all(&dir).unwrap();
}
