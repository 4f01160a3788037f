use crate::{
    foundation::core::PixelRect,
    foundation::error::{TimelineError, TimelineResult},
    render::backend::{FrameRGBA, PaintSurface, RenderSettings},
    render::paint::paint_widget,
    widget::view::TimelineView,
};

/// CPU paint surface backed by `vello_cpu`.
///
/// Fills are buffered into a render context; [`CpuSurface::into_frame`]
/// flushes them over the cleared background and reads back premultiplied
/// RGBA8 pixels.
pub struct CpuSurface {
    width: u16,
    height: u16,
    clear_rgba: Option<[u8; 4]>,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clear_rgba", &self.clear_rgba)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Build a surface for one widget box.
    ///
    /// The box must be drawable: non-positive dimensions and dimensions
    /// exceeding `u16` are render errors.
    pub fn new(width: i32, height: i32, settings: &RenderSettings) -> TimelineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TimelineError::render("surface dimensions must be > 0"));
        }
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| TimelineError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| TimelineError::render("surface height exceeds u16"))?;

        Ok(Self {
            width: width_u16,
            height: height_u16,
            clear_rgba: settings.clear_rgba,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
        })
    }

    /// Flush buffered fills and read back the finished frame.
    pub fn into_frame(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        if let Some([r, g, b, a]) = self.clear_rgba {
            clear_pixmap(&mut pixmap, premul_rgba8(r, g, b, a));
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl PaintSurface for CpuSurface {
    fn fill_rect(&mut self, rect: PixelRect, color_rgba8: [u8; 4]) {
        let [r, g, b, a] = color_rgba8;
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn fill_path(&mut self, path: &kurbo::BezPath, color_rgba8: [u8; 4]) {
        let [r, g, b, a] = color_rgba8;
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

/// Rasterize one timeline row into a frame sized to its widget box.
#[tracing::instrument(skip(view, settings))]
pub fn rasterize(view: &TimelineView, settings: &RenderSettings) -> TimelineResult<FrameRGBA> {
    let (width, height) = view.size();
    let mut surface = CpuSurface::new(width, height, settings)?;
    paint_widget(view.style(), view.layout(), &mut surface)?;
    Ok(surface.into_frame())
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn rect_to_cpu(rect: PixelRect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(
        f64::from(rect.x0),
        f64::from(rect.y0),
        f64::from(rect.x1),
        f64::from(rect.y1),
    )
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
