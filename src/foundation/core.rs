#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// An integer rectangle in the widget's local device-pixel space.
///
/// Edges are half-open in the raster sense: a rectangle covers pixels from
/// `x0` (inclusive) to `x1` (exclusive). Extents may be zero or negative;
/// such rectangles are valid degenerate geometry and simply cover nothing.
pub struct PixelRect {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl PixelRect {
    /// Build a rectangle from its edges.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal extent (`x1 - x0`); may be non-positive.
    pub fn width(self) -> i32 {
        self.x1 - self.x0
    }

    /// Vertical extent (`y1 - y0`); may be non-positive.
    pub fn height(self) -> i32 {
        self.y1 - self.y0
    }

    /// Horizontal center, truncating toward zero.
    pub fn center_x(self) -> i32 {
        (self.x0 + self.x1) / 2
    }

    /// Vertical center, truncating toward zero.
    pub fn center_y(self) -> i32 {
        (self.y0 + self.y1) / 2
    }

    /// `true` when either extent is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Convert to a float rectangle for the paint seam.
    pub fn to_rect(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Widget padding in device pixels.
pub struct EdgeInsets {
    /// Left padding.
    #[serde(default)]
    pub left: i32,
    /// Top padding.
    #[serde(default)]
    pub top: i32,
    /// Right padding.
    #[serde(default)]
    pub right: i32,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: i32,
}

impl EdgeInsets {
    /// Identical padding on all four edges.
    pub fn uniform(px: i32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
