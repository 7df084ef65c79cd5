//! Tests for the masked image equivalence check

use shot_core::{Error, MaskConfig, compare_images, equivalent};
use shot_test_utils::{Side, TestTrees, screenshot, with_clock, with_content_change};

#[test]
fn test_identical_files_are_equivalent() {
    let trees = TestTrees::new();
    let img = screenshot(200, 400, 7);
    let a = trees.write_png(Side::Old, "de", "home.png", &img);
    let b = trees.write_png(Side::New, "de", "home.png", &img);

    assert!(equivalent(&a, &b, &MaskConfig::default()).unwrap());
}

#[test]
fn test_clock_difference_inside_mask_is_ignored() {
    let trees = TestTrees::new();
    let base = screenshot(200, 400, 7);
    let a = trees.write_png(Side::Old, "de", "home.png", &with_clock(&base, 41));
    let b = trees.write_png(Side::New, "de", "home.png", &with_clock(&base, 42));

    let comparison = compare_images(&a, &b, &MaskConfig::default()).unwrap();

    assert!(comparison.equivalent);
    assert_eq!(comparison.distance(), Some(0));
}

#[test]
fn test_content_difference_outside_mask_is_detected() {
    let trees = TestTrees::new();
    let base = with_clock(&screenshot(200, 400, 7), 5);
    let a = trees.write_png(Side::Old, "de", "home.png", &base);
    let b = trees.write_png(Side::New, "de", "home.png", &with_content_change(&base));

    let comparison = compare_images(&a, &b, &MaskConfig::default()).unwrap();

    assert!(!comparison.equivalent);
    assert!(comparison.distance().unwrap() > 0);
}

#[test]
fn test_different_dimensions_are_never_equivalent() {
    let trees = TestTrees::new();
    let a = trees.write_png(Side::Old, "de", "home.png", &screenshot(200, 400, 3));
    let b = trees.write_png(Side::New, "de", "home.png", &screenshot(200, 402, 3));

    let comparison = compare_images(&a, &b, &MaskConfig::default()).unwrap();

    assert!(!comparison.equivalent);
    assert_eq!(comparison.old_dimensions, (200, 400));
    assert_eq!(comparison.new_dimensions, (200, 402));
    assert!(comparison.hashes.is_none(), "no hashing on size mismatch");
}

#[test]
fn test_corrupt_image_is_decode_error() {
    let trees = TestTrees::new();
    let a = trees.write_png(Side::Old, "de", "home.png", &screenshot(200, 400, 3));
    let b = trees.write_file(Side::New, "de", "home.png", b"\x89PNG\r\n\x1a\nnot really");

    let err = equivalent(&a, &b, &MaskConfig::default()).unwrap_err();

    match err {
        Error::Decode { path, .. } => assert_eq!(path, b),
        other => panic!("expected decode error, got {other}"),
    }
}

#[test]
fn test_missing_image_is_decode_error() {
    let trees = TestTrees::new();
    let a = trees.write_png(Side::Old, "de", "home.png", &screenshot(200, 400, 3));
    let missing = trees.locale_dir(Side::New, "de").join("absent.png");

    assert!(matches!(
        equivalent(&a, &missing, &MaskConfig::default()),
        Err(Error::Decode { .. })
    ));
}
