use crate::core::BoxSize;
use crate::render::{DrawSurface, GroupHandle, PathStyle, Shape};

/// Surface that discards everything it receives.
///
/// It measures every group as empty, which is enough for headless runs that
/// only need axis domains, ticks and path data. Shape and path counters let
/// tests check how much a pass emitted.
#[derive(Debug, Default)]
pub struct NullSurface {
    next_group: usize,
    pub shapes_appended: usize,
    pub paths_appended: usize,
    pub groups_removed: usize,
}

impl DrawSurface for NullSurface {
    fn create_group(&mut self, _parent: Option<GroupHandle>, _class: &str) -> GroupHandle {
        let handle = GroupHandle::new(self.next_group);
        self.next_group += 1;
        handle
    }

    fn measure(&self, _group: GroupHandle) -> BoxSize {
        BoxSize::default()
    }

    fn append_shape(&mut self, _group: GroupHandle, _shape: Shape) {
        self.shapes_appended += 1;
    }

    fn append_path(&mut self, _group: GroupHandle, _data: String, _style: PathStyle) {
        self.paths_appended += 1;
    }

    fn set_transform(&mut self, _group: GroupHandle, _dx: f64, _dy: f64) {}

    fn clear(&mut self, _group: GroupHandle) {}

    fn remove(&mut self, _group: GroupHandle) {
        self.groups_removed += 1;
    }
}
