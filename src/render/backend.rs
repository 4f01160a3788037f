use crate::foundation::core::PixelRect;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rasterizer settings shared by all surfaces.
pub struct RenderSettings {
    /// Background fill as straight-alpha RGBA8; `None` leaves the surface
    /// transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rasterized widget frame.
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data, row-major.
    pub data: Vec<u8>,
    /// `true` when `data` carries premultiplied alpha.
    pub premultiplied: bool,
}

/// Paint surface abstraction the widget draws onto.
///
/// The paint routine ([`crate::paint_widget`]) issues fills through this
/// trait so the drawing logic stays independent of any rasterizer; tests
/// substitute a recording implementation, production code uses
/// [`crate::CpuSurface`]. Colors are straight-alpha RGBA8.
pub trait PaintSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: PixelRect, color_rgba8: [u8; 4]);

    /// Fill an arbitrary path.
    fn fill_path(&mut self, path: &kurbo::BezPath, color_rgba8: [u8; 4]);
}
