/// Rasterizer: executes a paint command list onto an RGB canvas and encodes
/// it as PNG.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use log::warn;
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

use crate::rendering::font::{self, bitmap_glyph, Font, BITMAP_CELL};
use crate::rendering::layout::Bounds;
use crate::rendering::paint::PaintCommand;
use crate::{Color, Error, RenderOutcome, Result};

/// Square in-memory RGB raster
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// All-black canvas of `size` x `size`.
    pub fn blank(size: u32) -> Self {
        Self {
            image: RgbImage::new(size, size),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *self.image.get_pixel(x, y);
        Color::rgb(r, g, b)
    }

    pub fn fill(&mut self, color: Color) {
        let px = Rgb(color.to_array());
        for pixel in self.image.pixels_mut() {
            *pixel = px;
        }
    }

    /// Fill the ellipse inscribed in the inclusive box `bounds`. A pixel is
    /// inside when its centre is.
    pub fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        let size = self.size();
        if size == 0 || bounds.right < bounds.left || bounds.bottom < bounds.top {
            return;
        }
        let cx = (bounds.left + bounds.right + 1) as f32 / 2.0;
        let cy = (bounds.top + bounds.bottom + 1) as f32 / 2.0;
        let rx = (bounds.right - bounds.left + 1) as f32 / 2.0;
        let ry = (bounds.bottom - bounds.top + 1) as f32 / 2.0;
        let px = Rgb(color.to_array());

        for y in bounds.top..=bounds.bottom.min(size - 1) {
            for x in bounds.left..=bounds.right.min(size - 1) {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }

    /// Draw `ch` so its visual middle lands on `centre`.
    pub fn draw_glyph(&mut self, font: &Font, ch: char, centre: (f32, f32), color: Color) -> Result<()> {
        match font {
            Font::Outline { data, px, .. } => self.draw_outline_glyph(data, *px, ch, centre, color),
            Font::Bitmap => self.draw_bitmap_glyph(ch, centre, color),
        }
    }

    fn draw_outline_glyph(
        &mut self,
        data: &[u8],
        px: u32,
        ch: char,
        (cx, cy): (f32, f32),
        color: Color,
    ) -> Result<()> {
        let face = ttf_parser::Face::parse(data, 0).map_err(|e| Error::GlyphRender(e.to_string()))?;
        let glyph = face
            .glyph_index(ch)
            .ok_or_else(|| Error::GlyphRender(format!("font has no glyph for {:?}", ch)))?;

        let scale = px as f32 / face.units_per_em() as f32;
        let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        let middle = (face.ascender() as f32 + face.descender() as f32) / 2.0 * scale;
        let origin_x = cx - advance / 2.0;
        let baseline = cy + middle;

        let mut sink = OutlineSink(PathBuilder::new());
        if face.outline_glyph(glyph, &mut sink).is_none() {
            // blank glyph, e.g. a space
            return Ok(());
        }
        let Some(path) = sink.0.finish() else {
            return Ok(());
        };

        let size = self.size();
        let mut mask = Mask::new(size, size)
            .ok_or_else(|| Error::GlyphRender(format!("cannot allocate {}x{} mask", size, size)))?;
        // font units are y-up
        let transform = Transform::from_row(scale, 0.0, 0.0, -scale, origin_x, baseline);
        mask.fill_path(&path, FillRule::Winding, true, transform);

        for (i, &coverage) in mask.data().iter().enumerate() {
            if coverage > 0 {
                let i = i as u32;
                self.blend(i % size, i / size, color, coverage);
            }
        }
        Ok(())
    }

    fn draw_bitmap_glyph(&mut self, ch: char, (cx, cy): (f32, f32), color: Color) -> Result<()> {
        let rows = bitmap_glyph(ch)
            .ok_or_else(|| Error::GlyphRender(format!("bitmap font has no glyph for {:?}", ch)))?;
        let half = (BITMAP_CELL / 2) as f32;
        let left = (cx - half).round() as i64;
        let top = (cy - half).round() as i64;
        let size = self.size() as i64;

        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..BITMAP_CELL {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                let x = left + col as i64;
                let y = top + row as i64;
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    self.image.put_pixel(x as u32, y as u32, Rgb(color.to_array()));
                }
            }
        }
        Ok(())
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: u8) {
        let a = coverage as u32;
        let dst = self.image.get_pixel_mut(x, y);
        for (channel, src) in dst.0.iter_mut().zip(color.to_array()) {
            *channel = ((*channel as u32 * (255 - a) + src as u32 * a + 127) / 255) as u8;
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Write as PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

struct OutlineSink(PathBuilder);

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// Run `commands` on a fresh canvas. Glyph failures are logged and recorded
/// in the outcome; the canvas is returned either way.
pub fn rasterize(size: u32, commands: &[PaintCommand], font_paths: &[PathBuf]) -> (Canvas, RenderOutcome) {
    let mut canvas = Canvas::blank(size);
    let mut outcome = RenderOutcome::default();

    for cmd in commands {
        match cmd {
            PaintCommand::Fill { color } => canvas.fill(*color),
            PaintCommand::Ellipse { bounds, color } => canvas.fill_ellipse(*bounds, *color),
            PaintCommand::Glyph { ch, centre, px, color } => {
                let font = font::resolve_font(font_paths, *px);
                outcome.font = Some(font.describe());
                match canvas.draw_glyph(&font, *ch, *centre, *color) {
                    Ok(()) => outcome.glyph_drawn = true,
                    Err(e) => {
                        warn!("Could not add text: {}", e);
                        outcome.glyph_error = Some(e.to_string());
                    }
                }
            }
        }
    }

    (canvas, outcome)
}
