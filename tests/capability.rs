//! Behaviour when the graphics capability is missing or the letter cannot
//! be drawn

use iconforge::{
    Error, Graphics, IconConfig, IconRenderer, IconSpec, RenderOutcome, Result, Unavailable,
};

struct Broken;

impl Graphics for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn probe(&self) -> Result<()> {
        Err(Error::CapabilityUnavailable("imaging library failed to load".into()))
    }

    fn render(&self, _spec: &IconSpec, _config: &IconConfig) -> Result<RenderOutcome> {
        panic!("render must not be reached when probe fails");
    }
}

#[test]
fn unavailable_capability_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(Unavailable::new("no imaging"), IconConfig::default());
    assert!(!renderer.is_available());
    assert_eq!(
        renderer.unavailable_reason(),
        Some("Graphics capability unavailable: no imaging")
    );

    let specs = IconSpec::defaults_in(dir.path());
    let results = renderer.render_all(&specs);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| !r.succeeded()));
    for spec in &specs {
        assert!(!spec.output_path.exists());
    }
}

#[test]
fn failed_probe_never_reaches_backend() {
    let renderer = IconRenderer::new(Box::new(Broken) as Box<dyn Graphics>, IconConfig::default());
    let result = renderer.render(&IconSpec::new(16, "icon16.png"));
    assert!(result
        .reason()
        .unwrap_or_default()
        .contains("imaging library failed to load"));
}

#[cfg(feature = "raster")]
#[test]
fn letter_failure_still_saves_icon() {
    use image::Rgb;
    use iconforge::{RasterGraphics, UCLA_BLUE, UCLA_GOLD};

    let dir = tempfile::tempdir().expect("tempdir");
    // no glyph for a snowman in the bitmap font, and no outline fonts to try
    let config = IconConfig {
        glyph: '\u{2603}',
        font_paths: Vec::new(),
        ..Default::default()
    };
    let renderer = IconRenderer::new(RasterGraphics::new(), config.clone());
    let spec = IconSpec::new(48, dir.path().join("icon48.png"));

    let outcome = RasterGraphics::new()
        .render(&spec, &config)
        .expect("render without letter");
    assert!(!outcome.glyph_drawn);
    assert!(outcome.glyph_error.is_some());

    assert!(renderer.render(&spec).succeeded());
    let img = image::open(&spec.output_path).expect("decode").to_rgb8();
    assert_eq!(img.dimensions(), (48, 48));
    assert_eq!(*img.get_pixel(0, 0), Rgb(UCLA_BLUE.to_array()));
    assert_eq!(*img.get_pixel(24, 24), Rgb(UCLA_GOLD.to_array()));
}
