//! Timeline-view is the toolkit-independent core of a timeline
//! marker-and-connector widget.
//!
//! A timeline row is a marker (a disc or an arbitrary vector drawable) with
//! a connector line segment before and/or after it, used for order-tracking
//! and step-progress UIs. The crate turns a style plus a widget box into
//! painted pixels in three stages:
//!
//! 1. **Style**: [`TimelineStyle`] is a pure serde data model supplied by
//!    the host (JSON or programmatic setters on [`TimelineView`]).
//! 2. **Layout**: [`resolve_layout`] maps the box and style to marker and
//!    line rectangles ([`TimelineLayout`]) with pure integer arithmetic.
//! 3. **Paint**: [`paint_widget`] draws the rectangles in a fixed order
//!    through the [`PaintSurface`] seam; [`CpuSurface`] rasterizes them via
//!    `vello_cpu` into a [`FrameRGBA`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout and paint are pure and stable for
//!   a given input.
//! - **Degenerate geometry is data, not an error**: zero or negative sizes
//!   and inverted line spans flow through layout untouched; the paint layer
//!   skips what cannot be drawn.
//! - **Single writer**: [`TimelineView`] recomputes its layout wholesale on
//!   every mutation, so there is never a partially updated layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod render;
mod style;
mod widget;

pub use foundation::core::{EdgeInsets, PixelRect};
pub use foundation::error::{TimelineError, TimelineResult};
pub use foundation::units::Density;
pub use layout::solver::{LayoutParams, RowPosition, TimelineLayout, resolve_layout};
pub use render::backend::{FrameRGBA, PaintSurface, RenderSettings};
pub use render::cpu::{CpuSurface, rasterize};
pub use render::paint::paint_widget;
pub use style::model::{CircleMarker, LineStyle, Marker, Orientation, PathMarker, TimelineStyle};
pub use widget::view::TimelineView;
