/// Display list for one icon

use crate::rendering::layout::{self, Bounds};
use crate::{Color, IconConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Flood the whole canvas
    Fill { color: Color },
    /// Filled ellipse inscribed in `bounds`
    Ellipse { bounds: Bounds, color: Color },
    /// Single character whose visual middle sits on `centre`
    Glyph {
        ch: char,
        centre: (f32, f32),
        px: u32,
        color: Color,
    },
}

/// Background, disc, then letter.
pub fn icon_commands(size: u32, config: &IconConfig) -> Vec<PaintCommand> {
    vec![
        PaintCommand::Fill {
            color: config.background,
        },
        PaintCommand::Ellipse {
            bounds: layout::circle_bounds(size, config.margin_divisor),
            color: config.accent,
        },
        PaintCommand::Glyph {
            ch: config.glyph,
            centre: layout::centre(size),
            px: layout::font_px(size, config.font_scale),
            color: config.glyph_color,
        },
    ]
}
