mod null_renderer;
mod primitives;
mod recording_surface;
pub mod text_metrics;

pub use null_renderer::NullSurface;
pub use primitives::{
    Bounds, CirclePrimitive, Color, EllipsePrimitive, LinePrimitive, LineStrokeStyle, PathStyle,
    PolygonPrimitive, RectPrimitive, Shape, TextHAlign, TextPrimitive,
};
pub use recording_surface::{RecordedGroup, RecordedPath, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::core::BoxSize;

/// Opaque handle to a drawing group owned by a [`DrawSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupHandle(usize);

impl GroupHandle {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Contract implemented by the host drawing backend.
///
/// The layout engine only creates groups, appends shapes and path data to
/// them, positions them and asks for their measured size. Groups are
/// translated relative to their parent; a group's measured size covers its own
/// shapes and every child group.
pub trait DrawSurface {
    fn create_group(&mut self, parent: Option<GroupHandle>, class: &str) -> GroupHandle;

    fn measure(&self, group: GroupHandle) -> BoxSize;

    fn append_shape(&mut self, group: GroupHandle, shape: Shape);

    /// Appends path data in the `"M{x},{y} {x},{y} ..."` wire format.
    fn append_path(&mut self, group: GroupHandle, data: String, style: PathStyle);

    fn set_transform(&mut self, group: GroupHandle, dx: f64, dy: f64);

    /// Drops every shape and child group while keeping the group itself.
    fn clear(&mut self, group: GroupHandle);

    fn remove(&mut self, group: GroupHandle);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoPaintStats, CairoPainter};
