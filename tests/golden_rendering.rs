#![cfg(feature = "raster")]

use std::fs;
use std::path::PathBuf;

use iconforge::{IconConfig, IconRenderer, IconSpec, RasterGraphics};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Digest of the decoded RGB pixels, independent of PNG encoder details.
fn pixel_digest(path: &std::path::Path) -> String {
    let img = image::open(path).expect("decode").to_rgb8();
    let mut hasher = Sha256::new();
    hasher.update(img.width().to_le_bytes());
    hasher.update(img.as_raw());
    hex::encode(hasher.finalize())
}

/// Bitmap fallback only, so the output does not depend on installed fonts.
fn portable_config() -> IconConfig {
    IconConfig {
        font_paths: Vec::new(),
        ..Default::default()
    }
}

#[test]
fn rerender_samples_identical_pixels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(RasterGraphics::new(), IconConfig::default());
    let spec = IconSpec::new(128, dir.path().join("icon128.png"));

    assert!(renderer.render(&spec).succeeded());
    let first = image::open(&spec.output_path).expect("decode").to_rgb8();
    assert!(renderer.render(&spec).succeeded());
    let second = image::open(&spec.output_path).expect("decode").to_rgb8();

    for (x, y) in [(0, 0), (127, 127), (16, 64), (111, 64), (64, 17), (64, 64)] {
        assert_eq!(first.get_pixel(x, y), second.get_pixel(x, y), "pixel ({}, {})", x, y);
    }
}

#[test]
fn golden_icon48_matches_fixture() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(RasterGraphics::new(), portable_config());
    let spec = IconSpec::new(48, dir.path().join("icon48.png"));
    assert!(renderer.render(&spec).succeeded());
    let digest = pixel_digest(&spec.output_path);

    // same inputs, same pixels
    assert!(renderer.render(&spec).succeeded());
    assert_eq!(digest, pixel_digest(&spec.output_path));

    let expected_path = golden_path("icon48.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}
