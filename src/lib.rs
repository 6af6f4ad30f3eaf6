//! MSBA icon generator
//!
//! Draws the browser extension's toolbar icons: a solid blue square, an
//! inset yellow disc and a centred letter, written as RGB PNG files at
//! 16, 48 and 128 pixels.
//!
//! Rendering goes through a [`Graphics`] capability. The default build uses
//! the raster backend (feature `raster`); without it the capability is
//! reported as unavailable and nothing is written.
//!
//! # Example
//!
//! ```no_run
//! use iconforge::{IconConfig, IconRenderer, IconSpec};
//!
//! let renderer = IconRenderer::new(iconforge::default_graphics(), IconConfig::default());
//! for spec in IconSpec::defaults() {
//!     let result = renderer.render(&spec);
//!     println!("{}: {}", spec.output_path.display(), result.succeeded());
//! }
//! ```

use std::path::{Path, PathBuf};

use log::debug;

pub mod error;
pub use error::{Error, Result};

pub mod graphics;
pub use graphics::Unavailable;

#[cfg(feature = "raster")]
pub use graphics::RasterGraphics;

// Geometry, display list, fonts and rasterizer
#[cfg(feature = "raster")]
pub mod rendering;

/// Icon sizes produced by a default run, paired with their file names.
pub const DEFAULT_ICONS: [(u32, &str); 3] = [
    (16, "icon16.png"),
    (48, "icon48.png"),
    (128, "icon128.png"),
];

/// Shown when icons cannot be drawn locally.
pub const BROWSER_TOOL_HINT: &str =
    "Alternative: Open create-icons.html in your browser to generate icons";

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// UCLA blue, `#003DA5`
pub const UCLA_BLUE: Color = Color::rgb(0, 61, 165);
/// UCLA gold, `#FFD100`
pub const UCLA_GOLD: Color = Color::rgb(255, 209, 0);

/// Drawing parameters shared by every icon
///
/// The defaults reproduce the extension's branding. There is no file or
/// environment layer; callers override fields with struct update syntax.
///
/// ```
/// let cfg = iconforge::IconConfig::default();
/// assert_eq!(cfg.glyph, 'M');
/// assert_eq!(cfg.margin_divisor, 8);
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Canvas fill
    pub background: Color,
    /// Disc fill
    pub accent: Color,
    /// Letter drawn in the middle of the icon
    pub glyph: char,
    /// Letter colour
    pub glyph_color: Color,
    /// The disc is inset by `size / margin_divisor` on every side
    pub margin_divisor: u32,
    /// Requested font size as a fraction of the icon size
    pub font_scale: f32,
    /// Font files tried in order before falling back to the built-in bitmap font
    pub font_paths: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            background: UCLA_BLUE,
            accent: UCLA_GOLD,
            glyph: 'M',
            glyph_color: UCLA_BLUE,
            margin_divisor: 8,
            font_scale: 0.5,
            font_paths: default_font_paths(),
        }
    }
}

/// Candidate system fonts, most preferred first.
pub fn default_font_paths() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// One icon to draw: a square of `size` pixels written to `output_path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub output_path: PathBuf,
}

impl IconSpec {
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            output_path: output_path.into(),
        }
    }

    /// The three icons of a default run, relative to the working directory.
    pub fn defaults() -> Vec<IconSpec> {
        DEFAULT_ICONS
            .iter()
            .map(|&(size, name)| IconSpec::new(size, name))
            .collect()
    }

    /// The three default icons placed under `dir`.
    pub fn defaults_in(dir: &Path) -> Vec<IconSpec> {
        DEFAULT_ICONS
            .iter()
            .map(|&(size, name)| IconSpec::new(size, dir.join(name)))
            .collect()
    }
}

/// Outcome of a single render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// The icon was written
    Created(PathBuf),
    /// Nothing was written
    Failed { path: PathBuf, reason: String },
}

impl RenderResult {
    pub fn succeeded(&self) -> bool {
        matches!(self, RenderResult::Created(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            RenderResult::Created(path) => path,
            RenderResult::Failed { path, .. } => path,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            RenderResult::Created(_) => None,
            RenderResult::Failed { reason, .. } => Some(reason),
        }
    }
}

/// What a backend did while drawing an icon that was saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    /// The letter made it onto the canvas
    pub glyph_drawn: bool,
    /// Why the letter is missing, if it is
    pub glyph_error: Option<String>,
    /// Description of the font the letter was drawn with
    pub font: Option<String>,
}

/// The raster graphics capability
///
/// Implementations draw and persist one icon per call. A backend that
/// cannot draw at all reports it from `probe`.
pub trait Graphics {
    /// Short backend name for log lines
    fn name(&self) -> &'static str;

    /// Check that the backend can draw and encode images
    fn probe(&self) -> Result<()>;

    /// Draw the icon described by `spec` and write it as PNG, replacing any
    /// existing file. Glyph problems are absorbed into the outcome; only
    /// failures that leave no usable file are returned as errors.
    fn render(&self, spec: &IconSpec, config: &IconConfig) -> Result<RenderOutcome>;
}

impl<G: Graphics + ?Sized> Graphics for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn probe(&self) -> Result<()> {
        (**self).probe()
    }

    fn render(&self, spec: &IconSpec, config: &IconConfig) -> Result<RenderOutcome> {
        (**self).render(spec, config)
    }
}

/// Renders icons through a [`Graphics`] backend probed once at construction
pub struct IconRenderer<G: Graphics> {
    graphics: G,
    config: IconConfig,
    unavailable: Option<String>,
}

impl<G: Graphics> IconRenderer<G> {
    pub fn new(graphics: G, config: IconConfig) -> Self {
        let unavailable = match graphics.probe() {
            Ok(()) => None,
            Err(e) => {
                debug!("{} backend failed its probe: {}", graphics.name(), e);
                Some(e.to_string())
            }
        };
        Self {
            graphics,
            config,
            unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }

    /// Why the backend failed its probe, if it did
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable.as_deref()
    }

    pub fn render(&self, spec: &IconSpec) -> RenderResult {
        let path = spec.output_path.clone();

        if let Some(reason) = &self.unavailable {
            debug!("Skipping {}: backend unavailable", path.display());
            return RenderResult::Failed {
                path,
                reason: reason.clone(),
            };
        }

        if spec.size == 0 {
            let reason = Error::InvalidSize(spec.size).to_string();
            return RenderResult::Failed { path, reason };
        }

        match self.graphics.render(spec, &self.config) {
            Ok(outcome) => {
                debug!(
                    "Wrote {} ({}x{}, font: {})",
                    path.display(),
                    spec.size,
                    spec.size,
                    outcome.font.as_deref().unwrap_or("none")
                );
                RenderResult::Created(path)
            }
            Err(e) => {
                debug!("{} backend failed on {}: {}", self.graphics.name(), path.display(), e);
                RenderResult::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Render every spec in order, one result per spec.
    pub fn render_all(&self, specs: &[IconSpec]) -> Vec<RenderResult> {
        specs.iter().map(|spec| self.render(spec)).collect()
    }
}

/// The graphics backend compiled into this build.
#[cfg(feature = "raster")]
pub fn default_graphics() -> impl Graphics {
    graphics::RasterGraphics::new()
}

/// Without the `raster` feature there is nothing to draw with.
#[cfg(not(feature = "raster"))]
pub fn default_graphics() -> impl Graphics {
    graphics::Unavailable::new("built without the `raster` feature")
}
