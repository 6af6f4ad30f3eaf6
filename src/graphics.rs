//! Graphics capability backends

use crate::{Error, Graphics, IconConfig, IconSpec, RenderOutcome, Result};

/// Backend standing in for a missing imaging library.
///
/// Every call fails with [`Error::CapabilityUnavailable`].
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Graphics for Unavailable {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn probe(&self) -> Result<()> {
        Err(Error::CapabilityUnavailable(self.reason.clone()))
    }

    fn render(&self, _spec: &IconSpec, _config: &IconConfig) -> Result<RenderOutcome> {
        Err(Error::CapabilityUnavailable(self.reason.clone()))
    }
}

#[cfg(feature = "raster")]
pub use raster_backend::RasterGraphics;

#[cfg(feature = "raster")]
mod raster_backend {
    use log::debug;

    use crate::rendering::paint::icon_commands;
    use crate::rendering::raster::{rasterize, Canvas};
    use crate::{Error, Graphics, IconConfig, IconSpec, RenderOutcome, Result};

    /// Draws icons with `image` canvases, `ttf-parser` outlines and
    /// `tiny-skia` coverage masks.
    #[derive(Debug, Clone, Default)]
    pub struct RasterGraphics;

    impl RasterGraphics {
        pub fn new() -> Self {
            Self
        }
    }

    impl Graphics for RasterGraphics {
        fn name(&self) -> &'static str {
            "raster"
        }

        fn probe(&self) -> Result<()> {
            let png = Canvas::blank(1)
                .encode_png()
                .map_err(|e| Error::CapabilityUnavailable(e.to_string()))?;
            debug!("PNG encoder self-test produced {} bytes", png.len());
            Ok(())
        }

        fn render(&self, spec: &IconSpec, config: &IconConfig) -> Result<RenderOutcome> {
            if spec.size == 0 {
                return Err(Error::InvalidSize(spec.size));
            }
            let commands = icon_commands(spec.size, config);
            let (canvas, outcome) = rasterize(spec.size, &commands, &config.font_paths);
            canvas.save_png(&spec.output_path)?;
            Ok(outcome)
        }
    }
}
