use super::*;
use crate::{EdgeInsets, Orientation, PixelRect};

fn base_params() -> LayoutParams {
    LayoutParams {
        width: 100,
        height: 100,
        padding: EdgeInsets::default(),
        marker_size: 20,
        line_size: 2,
        line_padding: 0,
        orientation: Orientation::Vertical,
        marker_in_center: true,
        start_line: true,
        end_line: true,
    }
}

#[test]
fn centered_marker_sits_on_box_center() {
    let layout = resolve_layout(&base_params());
    assert_eq!(layout.marker, PixelRect::new(40, 40, 60, 60));
    assert_eq!(layout.marker.center_x(), 50);
    assert_eq!(layout.marker.center_y(), 50);
}

#[test]
fn odd_marker_size_drops_one_pixel() {
    let layout = resolve_layout(&LayoutParams {
        marker_size: 21,
        ..base_params()
    });
    assert_eq!(layout.marker, PixelRect::new(40, 40, 60, 60));
}

#[test]
fn top_left_marker_anchors_at_padding() {
    let layout = resolve_layout(&LayoutParams {
        marker_in_center: false,
        padding: EdgeInsets {
            left: 7,
            top: 5,
            right: 3,
            bottom: 9,
        },
        ..base_params()
    });
    assert_eq!(layout.marker, PixelRect::new(7, 5, 27, 25));
}

#[test]
fn marker_never_exceeds_content_box() {
    let layout = resolve_layout(&LayoutParams {
        width: 30,
        marker_size: 50,
        ..base_params()
    });
    assert_eq!(layout.marker.width(), 30);
    assert_eq!(layout.marker, PixelRect::new(0, 35, 30, 65));

    let padded = resolve_layout(&LayoutParams {
        padding: EdgeInsets::uniform(45),
        marker_size: 50,
        ..base_params()
    });
    assert_eq!(padded.marker.width(), 10);
}

#[test]
fn vertical_lines_run_from_box_edges_to_padded_marker() {
    let layout = resolve_layout(&LayoutParams {
        line_padding: 4,
        ..base_params()
    });
    let start = layout.start_line.unwrap();
    let end = layout.end_line.unwrap();

    assert_eq!(start, PixelRect::new(49, 0, 51, 36));
    assert_eq!(end, PixelRect::new(49, 64, 51, 100));
    assert_eq!(start.y1, layout.marker.y0 - 4);
    assert_eq!(end.y0, layout.marker.y1 + 4);
    assert_eq!(start.center_x(), layout.marker.center_x());
    assert_eq!(end.center_x(), layout.marker.center_x());
}

#[test]
fn horizontal_lines_are_the_axis_swapped_mirror() {
    let layout = resolve_layout(&LayoutParams {
        orientation: Orientation::Horizontal,
        line_padding: 4,
        ..base_params()
    });
    let start = layout.start_line.unwrap();
    let end = layout.end_line.unwrap();

    assert_eq!(start, PixelRect::new(0, 49, 36, 51));
    assert_eq!(end, PixelRect::new(64, 49, 100, 51));
    assert_eq!(start.x1, layout.marker.x0 - 4);
    assert_eq!(end.x0, layout.marker.x1 + 4);
    assert_eq!(start.center_y(), layout.marker.center_y());
}

#[test]
fn absent_lines_compute_no_bounds() {
    let layout = resolve_layout(&LayoutParams {
        start_line: false,
        end_line: false,
        ..base_params()
    });
    assert_eq!(layout.start_line, None);
    assert_eq!(layout.end_line, None);

    let begin = resolve_layout(&LayoutParams {
        start_line: false,
        ..base_params()
    });
    assert_eq!(begin.start_line, None);
    assert!(begin.end_line.is_some());
}

#[test]
fn excessive_padding_inverts_spans_without_clamping() {
    let layout = resolve_layout(&LayoutParams {
        line_padding: 60,
        ..base_params()
    });
    let start = layout.start_line.unwrap();
    let end = layout.end_line.unwrap();

    assert_eq!(start.y1, -20);
    assert!(start.is_empty());
    assert_eq!(end.y0, 120);
    assert!(end.is_empty());
}

#[test]
fn layout_is_deterministic() {
    let params = LayoutParams {
        width: 73,
        height: 41,
        padding: EdgeInsets::uniform(3),
        marker_size: 17,
        line_size: 5,
        line_padding: 2,
        orientation: Orientation::Horizontal,
        marker_in_center: false,
        ..base_params()
    };
    assert_eq!(resolve_layout(&params), resolve_layout(&params));
}

#[test]
fn row_classification() {
    assert_eq!(RowPosition::classify(0, 1), RowPosition::OnlyOne);
    assert_eq!(RowPosition::classify(0, 5), RowPosition::Begin);
    assert_eq!(RowPosition::classify(4, 5), RowPosition::End);
    assert_eq!(RowPosition::classify(2, 5), RowPosition::Normal);
}

#[test]
fn row_positions_keep_the_expected_segments() {
    assert!(!RowPosition::OnlyOne.has_start_line());
    assert!(!RowPosition::OnlyOne.has_end_line());
    assert!(!RowPosition::Begin.has_start_line());
    assert!(RowPosition::Begin.has_end_line());
    assert!(RowPosition::End.has_start_line());
    assert!(!RowPosition::End.has_end_line());
    assert!(RowPosition::Normal.has_start_line());
    assert!(RowPosition::Normal.has_end_line());
}
