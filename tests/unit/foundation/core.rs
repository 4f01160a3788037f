use super::*;

#[test]
fn rect_extents_and_centers() {
    let r = PixelRect::new(40, 40, 60, 60);
    assert_eq!(r.width(), 20);
    assert_eq!(r.height(), 20);
    assert_eq!(r.center_x(), 50);
    assert_eq!(r.center_y(), 50);
    assert!(!r.is_empty());
}

#[test]
fn inverted_and_zero_rects_are_empty() {
    assert!(PixelRect::new(10, 0, 10, 5).is_empty());
    assert!(PixelRect::new(10, 0, 4, 5).is_empty());
    assert_eq!(PixelRect::new(10, 0, 4, 5).width(), -6);
}

#[test]
fn to_rect_preserves_edges() {
    let r = PixelRect::new(-2, 0, 7, 3).to_rect();
    assert_eq!(r, kurbo::Rect::new(-2.0, 0.0, 7.0, 3.0));
}

#[test]
fn uniform_insets() {
    let p = EdgeInsets::uniform(4);
    assert_eq!(p.left, 4);
    assert_eq!(p.top, 4);
    assert_eq!(p.right, 4);
    assert_eq!(p.bottom, 4);
    assert_eq!(EdgeInsets::default(), EdgeInsets::uniform(0));
}
