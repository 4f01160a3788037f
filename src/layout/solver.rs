use crate::{
    foundation::core::{EdgeInsets, PixelRect},
    style::model::Orientation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Inputs to one layout pass over a widget box.
///
/// All values are device pixels in the widget's local coordinate space.
/// Degenerate inputs (zero or negative sizes, padding larger than the box)
/// are valid and produce degenerate geometry rather than errors.
pub struct LayoutParams {
    /// Widget box width.
    pub width: i32,
    /// Widget box height.
    pub height: i32,
    /// Widget padding; the marker is confined to the padded content box.
    pub padding: EdgeInsets,
    /// Configured marker edge length.
    pub marker_size: i32,
    /// Connector line thickness.
    pub line_size: i32,
    /// Gap between the marker bounds and each line end.
    pub line_padding: i32,
    /// Axis the connector lines run along.
    pub orientation: Orientation,
    /// Center the marker in the box instead of anchoring at the padded
    /// top-left corner.
    pub marker_in_center: bool,
    /// Compute bounds for the segment before the marker.
    pub start_line: bool,
    /// Compute bounds for the segment after the marker.
    pub end_line: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rectangles computed by one layout pass.
///
/// Replaced wholesale whenever the widget box or any style input changes;
/// there is no partial update.
pub struct TimelineLayout {
    /// Marker bounds.
    pub marker: PixelRect,
    /// Bounds of the segment before the marker, when present.
    pub start_line: Option<PixelRect>,
    /// Bounds of the segment after the marker, when present.
    pub end_line: Option<PixelRect>,
}

/// Compute marker and connector-line bounds for one widget box.
///
/// Pure and deterministic. The marker edge is clamped to the padded content
/// box. Line rectangles span from the box edge to the marker bounds minus
/// [`LayoutParams::line_padding`], centered on the marker's perpendicular
/// axis; spans that invert under excessive padding are emitted as-is and
/// left to the paint layer to skip.
pub fn resolve_layout(params: &LayoutParams) -> TimelineLayout {
    let LayoutParams {
        width,
        height,
        padding,
        line_size,
        line_padding,
        ..
    } = *params;

    let content_w = width - padding.left - padding.right;
    let content_h = height - padding.top - padding.bottom;
    let marker_edge = params.marker_size.min(content_w.min(content_h));

    let marker = if params.marker_in_center {
        let half = marker_edge / 2;
        PixelRect::new(
            width / 2 - half,
            height / 2 - half,
            width / 2 + half,
            height / 2 + half,
        )
    } else {
        PixelRect::new(
            padding.left,
            padding.top,
            padding.left + marker_edge,
            padding.top + marker_edge,
        )
    };

    let (start_line, end_line) = match params.orientation {
        Orientation::Vertical => {
            let line_x0 = marker.center_x() - line_size / 2;
            (
                PixelRect::new(line_x0, 0, line_x0 + line_size, marker.y0 - line_padding),
                PixelRect::new(line_x0, marker.y1 + line_padding, line_x0 + line_size, height),
            )
        }
        Orientation::Horizontal => {
            let line_y0 = marker.center_y() - line_size / 2;
            (
                PixelRect::new(0, line_y0, marker.x0 - line_padding, line_y0 + line_size),
                PixelRect::new(marker.x1 + line_padding, line_y0, width, line_y0 + line_size),
            )
        }
    };

    TimelineLayout {
        marker,
        start_line: params.start_line.then_some(start_line),
        end_line: params.end_line.then_some(end_line),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Position of a row within its list, deciding which connector segments it
/// keeps.
pub enum RowPosition {
    /// The list has exactly one row; no connectors at all.
    OnlyOne,
    /// First row; no segment before the marker.
    Begin,
    /// Last row; no segment after the marker.
    End,
    /// Interior row; both segments.
    Normal,
}

impl RowPosition {
    /// Classify a row by its index within a list of `total` rows.
    pub fn classify(position: usize, total: usize) -> Self {
        if total == 1 {
            Self::OnlyOne
        } else if position == 0 {
            Self::Begin
        } else if position + 1 == total {
            Self::End
        } else {
            Self::Normal
        }
    }

    /// Whether a row at this position keeps the segment before the marker.
    pub fn has_start_line(self) -> bool {
        matches!(self, Self::End | Self::Normal)
    }

    /// Whether a row at this position keeps the segment after the marker.
    pub fn has_end_line(self) -> bool {
        matches!(self, Self::Begin | Self::Normal)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
