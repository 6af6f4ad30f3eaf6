//! Rendering pipeline: geometry, display list, font resolution, rasterizer

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;
