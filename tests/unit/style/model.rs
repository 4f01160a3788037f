use super::*;

#[test]
fn empty_json_yields_attribute_defaults() {
    let style: TimelineStyle = serde_json::from_str("{}").unwrap();
    assert_eq!(style, TimelineStyle::default());
    assert_eq!(style.marker_size, 20);
    assert_eq!(style.line_size, 2);
    assert_eq!(style.line_padding, 0);
    assert_eq!(style.orientation, Orientation::Vertical);
    assert!(style.marker_in_center);
    assert_eq!(style.marker, Marker::Circle(CircleMarker::default()));
    assert_eq!(style.start_line, Some(LineStyle::default()));
    assert_eq!(style.end_line, Some(LineStyle::default()));
}

#[test]
fn style_json_roundtrip() {
    let style = TimelineStyle {
        marker_size: 32,
        line_size: 3,
        line_padding: 6,
        orientation: Orientation::Horizontal,
        marker_in_center: false,
        marker: Marker::Path(PathMarker {
            svg_path_d: "M0,0 L10,0 L5,10 Z".to_string(),
            color_rgba8: [10, 20, 30, 255],
        }),
        start_line: None,
        end_line: Some(LineStyle::colored([1, 2, 3, 4])),
    };

    let json = serde_json::to_string(&style).unwrap();
    let back: TimelineStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, style);
}

#[test]
fn validate_rejects_blank_marker_path() {
    let style = TimelineStyle {
        marker: Marker::Path(PathMarker {
            svg_path_d: "   ".to_string(),
            color_rgba8: [0, 0, 0, 255],
        }),
        ..TimelineStyle::default()
    };
    let err = style.validate().unwrap_err();
    assert!(err.to_string().contains("svg_path_d"));

    assert!(TimelineStyle::default().validate().is_ok());
}

#[test]
fn degenerate_sizes_are_not_validation_errors() {
    let style = TimelineStyle {
        marker_size: -5,
        line_size: 0,
        line_padding: -3,
        ..TimelineStyle::default()
    };
    assert!(style.validate().is_ok());
}

#[test]
fn set_color_retints_any_marker_shape() {
    let mut marker = Marker::default();
    marker.set_color([9, 8, 7, 255]);
    assert_eq!(marker.color(), [9, 8, 7, 255]);

    let mut marker = Marker::Path(PathMarker {
        svg_path_d: "M0,0 L1,1".to_string(),
        color_rgba8: [0, 0, 0, 255],
    });
    marker.set_color([9, 8, 7, 255]);
    assert_eq!(marker.color(), [9, 8, 7, 255]);
}
