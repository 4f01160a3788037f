use kurbo::Shape as _;

use crate::{
    foundation::core::PixelRect,
    foundation::error::{TimelineError, TimelineResult},
    layout::solver::TimelineLayout,
    render::backend::PaintSurface,
    style::model::{Marker, TimelineStyle},
};

/// Flattening tolerance for the disc marker outline.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Paint one timeline row onto a surface.
///
/// Draw order is fixed: marker first, then the segment before it, then the
/// segment after it. Absent segments and rectangles whose span inverted
/// under excessive line padding are skipped rather than drawn.
pub fn paint_widget<S: PaintSurface + ?Sized>(
    style: &TimelineStyle,
    layout: &TimelineLayout,
    surface: &mut S,
) -> TimelineResult<()> {
    if !layout.marker.is_empty() {
        let path = marker_fill_path(&style.marker, layout.marker)?;
        surface.fill_path(&path, style.marker.color());
    }

    if let (Some(rect), Some(line)) = (layout.start_line, &style.start_line)
        && !rect.is_empty()
    {
        surface.fill_rect(rect, line.color_rgba8);
    }

    if let (Some(rect), Some(line)) = (layout.end_line, &style.end_line)
        && !rect.is_empty()
    {
        surface.fill_rect(rect, line.color_rgba8);
    }

    Ok(())
}

fn marker_fill_path(marker: &Marker, bounds: PixelRect) -> TimelineResult<kurbo::BezPath> {
    match marker {
        Marker::Circle(_) => {
            let rect = bounds.to_rect();
            let radius = rect.width().min(rect.height()) / 2.0;
            Ok(kurbo::Circle::new(rect.center(), radius).to_path(CIRCLE_TOLERANCE))
        }
        Marker::Path(m) => {
            let mut path = kurbo::BezPath::from_svg(&m.svg_path_d).map_err(|e| {
                TimelineError::validation(format!("marker svg_path_d parse failed: {e}"))
            })?;
            let bbox = path.bounding_box();
            let target = bounds.to_rect();
            let sx = if bbox.width() > 0.0 {
                target.width() / bbox.width()
            } else {
                1.0
            };
            let sy = if bbox.height() > 0.0 {
                target.height() / bbox.height()
            } else {
                1.0
            };
            let fit = kurbo::Affine::translate((target.x0, target.y0))
                * kurbo::Affine::scale_non_uniform(sx, sy)
                * kurbo::Affine::translate((-bbox.x0, -bbox.y0));
            path.apply_affine(fit);
            Ok(path)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
