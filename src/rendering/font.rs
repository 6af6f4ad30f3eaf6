/// Font resolution: a system outline font when one loads, else the built-in
/// 8x8 bitmap font.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Error, Result};

/// Width and height of a bitmap glyph cell.
pub const BITMAP_CELL: u32 = 8;

/// A resolved font
#[derive(Clone)]
pub enum Font {
    /// TrueType/OpenType outlines (or the first face of a collection)
    Outline {
        path: PathBuf,
        data: Vec<u8>,
        px: u32,
    },
    /// Built-in bitmap font. Always drawn at its native 8px cell; the
    /// requested size is not honoured.
    Bitmap,
}

impl Font {
    pub fn is_bitmap(&self) -> bool {
        matches!(self, Font::Bitmap)
    }

    pub fn describe(&self) -> String {
        match self {
            Font::Outline { path, px, .. } => format!("{} @ {}px", path.display(), px),
            Font::Bitmap => format!("built-in bitmap {}x{}", BITMAP_CELL, BITMAP_CELL),
        }
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Load an outline font at `px` pixels per em.
pub fn load_outline(path: &Path, px: u32) -> Result<Font> {
    if px == 0 {
        return Err(Error::FontLoad(format!(
            "{}: font size must be greater than 0",
            path.display()
        )));
    }
    let data = fs::read(path).map_err(|e| Error::FontLoad(format!("{}: {}", path.display(), e)))?;
    if let Some(faces) = ttf_parser::fonts_in_collection(&data) {
        debug!("{} is a collection of {} faces, using the first", path.display(), faces);
    }
    ttf_parser::Face::parse(&data, 0)
        .map_err(|e| Error::FontLoad(format!("{}: {}", path.display(), e)))?;
    Ok(Font::Outline {
        path: path.to_path_buf(),
        data,
        px,
    })
}

/// Try each candidate in order; the first that loads wins. Never fails.
pub fn resolve_font(candidates: &[PathBuf], px: u32) -> Font {
    for path in candidates {
        match load_outline(path, px) {
            Ok(font) => {
                debug!("Using font {}", font.describe());
                return font;
            }
            Err(e) => debug!("{}", e),
        }
    }
    debug!("No system font usable, falling back to the built-in bitmap font");
    Font::Bitmap
}

/// Rows of the bitmap glyph for `ch`, top row first, least significant bit
/// leftmost.
pub fn bitmap_glyph(ch: char) -> Option<[u8; 8]> {
    let rows = match ch {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00],
        'B' => [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00],
        'C' => [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00],
        'D' => [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00],
        'E' => [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00],
        'F' => [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00],
        'G' => [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00],
        'H' => [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00],
        'I' => [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
        'J' => [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00],
        'K' => [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00],
        'L' => [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00],
        'M' => [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00],
        'N' => [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00],
        'O' => [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00],
        'P' => [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00],
        'Q' => [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00],
        'R' => [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00],
        'S' => [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00],
        'T' => [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
        'U' => [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00],
        'V' => [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00],
        'W' => [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
        'X' => [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00],
        'Y' => [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00],
        'Z' => [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_files_fall_back_to_bitmap() {
        let paths = vec![PathBuf::from("/definitely/not/here.ttf")];
        let font = resolve_font(&paths, 24);
        assert!(font.is_bitmap());
        assert_eq!(font.describe(), "built-in bitmap 8x8");
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"not a font at all").expect("write");
        let err = load_outline(file.path(), 24).unwrap_err();
        assert!(matches!(err, Error::FontLoad(_)));
        assert!(resolve_font(&[file.path().to_path_buf()], 24).is_bitmap());
    }

    #[test]
    fn zero_px_never_loads_outline() {
        let err = load_outline(Path::new("/whatever.ttf"), 0).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn bitmap_covers_uppercase_only() {
        assert!(bitmap_glyph('M').is_some());
        assert!(bitmap_glyph(' ').is_some());
        assert!(bitmap_glyph('m').is_none());
        let m = bitmap_glyph('M').unwrap();
        // both outer columns of the first row are lit
        assert_eq!(m[0] & 0b0100_0001, 0b0100_0001);
        assert_eq!(m[7], 0);
    }
}
