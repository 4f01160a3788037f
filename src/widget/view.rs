use crate::{
    foundation::core::{EdgeInsets, PixelRect},
    layout::solver::{LayoutParams, RowPosition, TimelineLayout, resolve_layout},
    style::model::{LineStyle, Marker, Orientation, TimelineStyle},
};

#[derive(Clone, Debug)]
/// One timeline row: style plus box geometry plus the last computed layout.
///
/// The view is the single writer of its layout. Every mutation recomputes
/// and replaces the layout wholesale before returning, so the rectangles
/// read back via [`TimelineView::layout`] are always current for the next
/// paint. All methods are synchronous and run on whatever thread the host
/// toolkit drives layout and paint from.
pub struct TimelineView {
    style: TimelineStyle,
    width: i32,
    height: i32,
    padding: EdgeInsets,
    layout: TimelineLayout,
}

impl TimelineView {
    /// Build a view with the given style and a zero-sized box.
    ///
    /// The host reports the real box via [`TimelineView::on_size_changed`].
    pub fn new(style: TimelineStyle) -> Self {
        let mut view = Self {
            style,
            width: 0,
            height: 0,
            padding: EdgeInsets::default(),
            layout: TimelineLayout {
                marker: PixelRect::new(0, 0, 0, 0),
                start_line: None,
                end_line: None,
            },
        };
        view.relayout();
        view
    }

    /// Current widget box as `(width, height)` in device pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Current style.
    pub fn style(&self) -> &TimelineStyle {
        &self.style
    }

    /// Last computed layout.
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// Content size this row asks for: marker plus padding on each axis.
    ///
    /// Hosts feed this into their own measurement negotiation; the view
    /// accepts whatever box the host settles on.
    pub fn desired_size(&self) -> (i32, i32) {
        (
            self.style.marker_size + self.padding.left + self.padding.right,
            self.style.marker_size + self.padding.top + self.padding.bottom,
        )
    }

    /// Adopt a new widget box reported by the host.
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    /// Replace the widget padding.
    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
        self.relayout();
    }

    /// Replace the marker drawable.
    pub fn set_marker(&mut self, marker: Marker) {
        self.style.marker = marker;
        self.relayout();
    }

    /// Retint the current marker drawable.
    pub fn set_marker_color(&mut self, color_rgba8: [u8; 4]) {
        self.style.marker.set_color(color_rgba8);
        self.relayout();
    }

    /// Replace the configured marker edge length.
    pub fn set_marker_size(&mut self, px: i32) {
        self.style.marker_size = px;
        self.relayout();
    }

    /// Switch between centered and padded top-left marker placement.
    pub fn set_marker_in_center(&mut self, centered: bool) {
        self.style.marker_in_center = centered;
        self.relayout();
    }

    /// Replace the connector line thickness.
    pub fn set_line_size(&mut self, px: i32) {
        self.style.line_size = px;
        self.relayout();
    }

    /// Replace the gap between the marker bounds and each line end.
    pub fn set_line_padding(&mut self, px: i32) {
        self.style.line_padding = px;
        self.relayout();
    }

    /// Replace the timeline axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.style.orientation = orientation;
        self.relayout();
    }

    /// Install a colored segment before the marker, then apply the row
    /// position (which may immediately suppress it again).
    pub fn set_start_line(&mut self, color_rgba8: [u8; 4], row: RowPosition) {
        self.style.start_line = Some(LineStyle::colored(color_rgba8));
        self.apply_row_position(row);
    }

    /// Install a colored segment after the marker, then apply the row
    /// position (which may immediately suppress it again).
    pub fn set_end_line(&mut self, color_rgba8: [u8; 4], row: RowPosition) {
        self.style.end_line = Some(LineStyle::colored(color_rgba8));
        self.apply_row_position(row);
    }

    /// Suppress connector segments according to the row's list position.
    ///
    /// Suppression only: `Normal` leaves whatever segments are currently
    /// configured, it does not restore removed ones. Use
    /// [`TimelineView::set_start_line`] / [`TimelineView::set_end_line`] to
    /// bring a segment back.
    pub fn apply_row_position(&mut self, row: RowPosition) {
        if !row.has_start_line() {
            self.style.start_line = None;
        }
        if !row.has_end_line() {
            self.style.end_line = None;
        }
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = resolve_layout(&LayoutParams {
            width: self.width,
            height: self.height,
            padding: self.padding,
            marker_size: self.style.marker_size,
            line_size: self.style.line_size,
            line_padding: self.style.line_padding,
            orientation: self.style.orientation,
            marker_in_center: self.style.marker_in_center,
            start_line: self.style.start_line.is_some(),
            end_line: self.style.end_line.is_some(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/view.rs"]
mod tests;
