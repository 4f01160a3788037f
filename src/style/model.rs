use crate::foundation::error::{TimelineError, TimelineResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Axis along which the timeline and its connector lines run.
pub enum Orientation {
    /// Connector lines run left to right.
    Horizontal,
    /// Connector lines run top to bottom.
    #[default]
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The marker drawable rendered at a row's anchor point.
pub enum Marker {
    /// A solid disc inscribed in the marker bounds.
    Circle(CircleMarker),
    /// An SVG path drawable scaled from its own bounding box to the marker bounds.
    Path(PathMarker),
}

impl Marker {
    /// Retint the marker, keeping its shape.
    pub fn set_color(&mut self, color_rgba8: [u8; 4]) {
        match self {
            Self::Circle(m) => m.color_rgba8 = color_rgba8,
            Self::Path(m) => m.color_rgba8 = color_rgba8,
        }
    }

    /// Current marker fill color as straight-alpha RGBA8.
    pub fn color(&self) -> [u8; 4] {
        match self {
            Self::Circle(m) => m.color_rgba8,
            Self::Path(m) => m.color_rgba8,
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::Circle(CircleMarker::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Disc marker configuration.
pub struct CircleMarker {
    /// Fill color as straight-alpha RGBA8.
    #[serde(default = "default_marker_color")]
    pub color_rgba8: [u8; 4],
}

impl Default for CircleMarker {
    fn default() -> Self {
        Self {
            color_rgba8: default_marker_color(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Vector path marker configuration.
pub struct PathMarker {
    /// SVG path `d` attribute string.
    pub svg_path_d: String,
    /// Fill color as straight-alpha RGBA8.
    #[serde(default = "default_marker_color")]
    pub color_rgba8: [u8; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Paint for one connector line segment.
pub struct LineStyle {
    /// Fill color as straight-alpha RGBA8.
    #[serde(default = "default_line_color")]
    pub color_rgba8: [u8; 4],
}

impl LineStyle {
    /// A line segment with the given color.
    pub fn colored(color_rgba8: [u8; 4]) -> Self {
        Self { color_rgba8 }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color_rgba8: default_line_color(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete styling for one timeline row.
///
/// A style is a pure data model supplied by the host (deserialized from
/// JSON or built programmatically) and consumed by the layout solver and
/// the paint routine. Field defaults mirror a conventional timeline theme:
/// a 20 px centered marker with 2 px darker-gray connector lines running
/// vertically. All sizes are device pixels; hosts working in
/// density-independent units convert via [`crate::Density`].
pub struct TimelineStyle {
    /// Marker edge length in pixels (clamped to the content box at layout).
    #[serde(default = "default_marker_size")]
    pub marker_size: i32,
    /// Connector line thickness in pixels.
    #[serde(default = "default_line_size")]
    pub line_size: i32,
    /// Gap in pixels between the marker bounds and each line end.
    #[serde(default)]
    pub line_padding: i32,
    /// Axis the connector lines run along.
    #[serde(default)]
    pub orientation: Orientation,
    /// Center the marker in the widget box instead of anchoring it at the
    /// padded top-left corner.
    #[serde(default = "default_true")]
    pub marker_in_center: bool,
    /// Marker drawable.
    #[serde(default)]
    pub marker: Marker,
    /// Line segment before the marker; `None` suppresses it.
    #[serde(default = "default_line")]
    pub start_line: Option<LineStyle>,
    /// Line segment after the marker; `None` suppresses it.
    #[serde(default = "default_line")]
    pub end_line: Option<LineStyle>,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            marker_size: default_marker_size(),
            line_size: default_line_size(),
            line_padding: 0,
            orientation: Orientation::default(),
            marker_in_center: true,
            marker: Marker::default(),
            start_line: default_line(),
            end_line: default_line(),
        }
    }
}

impl TimelineStyle {
    /// Validate style invariants.
    ///
    /// Sizes are deliberately not range-checked: zero or negative sizes are
    /// valid degenerate geometry, not errors. Only genuinely unusable data
    /// is rejected.
    pub fn validate(&self) -> TimelineResult<()> {
        if let Marker::Path(m) = &self.marker
            && m.svg_path_d.trim().is_empty()
        {
            return Err(TimelineError::validation(
                "marker svg_path_d must be non-empty",
            ));
        }
        Ok(())
    }
}

fn default_marker_size() -> i32 {
    20
}

fn default_line_size() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_line() -> Option<LineStyle> {
    Some(LineStyle::default())
}

fn default_marker_color() -> [u8; 4] {
    [97, 97, 97, 255]
}

fn default_line_color() -> [u8; 4] {
    [170, 170, 170, 255]
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
