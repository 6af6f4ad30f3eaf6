/// Icon geometry: margins, disc bounds and letter placement

/// Inclusive pixel box, in the `[left, top, right, bottom]` convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Inset of the disc from every edge.
pub fn margin(size: u32, divisor: u32) -> u32 {
    size.checked_div(divisor).unwrap_or(0)
}

/// Box the disc is inscribed in: `[m, m, size - m, size - m]`.
pub fn circle_bounds(size: u32, divisor: u32) -> Bounds {
    let m = margin(size, divisor);
    Bounds {
        left: m,
        top: m,
        right: size - m,
        bottom: size - m,
    }
}

/// Requested font size in pixels; fractional sizes truncate.
pub fn font_px(size: u32, scale: f32) -> u32 {
    (size as f32 * scale).max(0.0) as u32
}

/// Anchor point for the letter, `(size / 2, size / 2)`.
pub fn centre(size: u32) -> (f32, f32) {
    let c = (size / 2) as f32;
    (c, c)
}
