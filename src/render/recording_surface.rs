use crate::core::{BoxSize, parse_path_data};
use crate::render::{Bounds, DrawSurface, GroupHandle, PathStyle, Shape};

/// Path data appended to a recorded group.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub data: String,
    pub style: PathStyle,
    pub points: Vec<(f64, f64)>,
}

/// One group of the recorded scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGroup {
    pub parent: Option<GroupHandle>,
    pub class: String,
    pub translate: (f64, f64),
    pub shapes: Vec<Shape>,
    pub paths: Vec<RecordedPath>,
    pub children: Vec<GroupHandle>,
    pub removed: bool,
}

impl RecordedGroup {
    fn new(parent: Option<GroupHandle>, class: &str) -> Self {
        Self {
            parent,
            class: class.to_owned(),
            translate: (0.0, 0.0),
            shapes: Vec::new(),
            paths: Vec::new(),
            children: Vec::new(),
            removed: false,
        }
    }
}

/// Headless surface keeping the full group tree in memory.
///
/// Bounding boxes are computed from the recorded geometry, with text measured
/// by the deterministic width estimate, so layout passes are reproducible in
/// tests and can be painted later by a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    groups: Vec<RecordedGroup>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn group(&self, handle: GroupHandle) -> Option<&RecordedGroup> {
        self.groups
            .get(handle.index())
            .filter(|group| !group.removed)
    }

    /// Live top-level groups in creation order.
    pub fn roots(&self) -> impl Iterator<Item = GroupHandle> + '_ {
        self.live_groups()
            .filter(|(_, group)| group.parent.is_none())
            .map(|(handle, _)| handle)
    }

    /// Live groups carrying `class`, in creation order.
    #[must_use]
    pub fn groups_with_class(&self, class: &str) -> Vec<GroupHandle> {
        self.live_groups()
            .filter(|(_, group)| group.class == class)
            .map(|(handle, _)| handle)
            .collect()
    }

    #[must_use]
    pub fn live_group_count(&self) -> usize {
        self.live_groups().count()
    }

    /// Translation of `handle` accumulated through its ancestors.
    #[must_use]
    pub fn absolute_translate(&self, handle: GroupHandle) -> (f64, f64) {
        let mut offset = (0.0, 0.0);
        let mut cursor = Some(handle);
        while let Some(current) = cursor {
            let Some(group) = self.groups.get(current.index()) else {
                break;
            };
            offset.0 += group.translate.0;
            offset.1 += group.translate.1;
            cursor = group.parent;
        }
        offset
    }

    fn live_groups(&self) -> impl Iterator<Item = (GroupHandle, &RecordedGroup)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| !group.removed)
            .map(|(index, group)| (GroupHandle::new(index), group))
    }

    fn local_bounds(&self, handle: GroupHandle) -> Option<Bounds> {
        let group = self.group(handle)?;

        let shape_bounds = group.shapes.iter().filter_map(Shape::bounds);
        let path_bounds = group
            .paths
            .iter()
            .filter_map(|path| Bounds::from_points(&path.points));
        let child_bounds = group.children.iter().filter_map(|child| {
            let child_group = self.group(*child)?;
            let (dx, dy) = child_group.translate;
            self.local_bounds(*child)
                .map(|bounds| bounds.translate(dx, dy))
        });

        shape_bounds
            .chain(path_bounds)
            .chain(child_bounds)
            .reduce(Bounds::union)
    }

    fn group_mut(&mut self, handle: GroupHandle) -> Option<&mut RecordedGroup> {
        self.groups
            .get_mut(handle.index())
            .filter(|group| !group.removed)
    }

    fn mark_removed(&mut self, handle: GroupHandle) {
        let children = match self.groups.get_mut(handle.index()) {
            Some(group) => {
                group.removed = true;
                std::mem::take(&mut group.children)
            }
            None => return,
        };
        for child in children {
            self.mark_removed(child);
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn create_group(&mut self, parent: Option<GroupHandle>, class: &str) -> GroupHandle {
        let handle = GroupHandle::new(self.groups.len());
        let parent = parent.filter(|candidate| self.group(*candidate).is_some());
        self.groups.push(RecordedGroup::new(parent, class));
        if let Some(parent_group) = parent.and_then(|candidate| self.group_mut(candidate)) {
            parent_group.children.push(handle);
        }
        handle
    }

    fn measure(&self, group: GroupHandle) -> BoxSize {
        self.local_bounds(group)
            .map(|bounds| BoxSize::new(bounds.width(), bounds.height()))
            .unwrap_or_default()
    }

    fn append_shape(&mut self, group: GroupHandle, shape: Shape) {
        if let Some(target) = self.group_mut(group) {
            target.shapes.push(shape);
        }
    }

    fn append_path(&mut self, group: GroupHandle, data: String, style: PathStyle) {
        if let Some(target) = self.group_mut(group) {
            let points = parse_path_data(&data);
            target.paths.push(RecordedPath {
                data,
                style,
                points,
            });
        }
    }

    fn set_transform(&mut self, group: GroupHandle, dx: f64, dy: f64) {
        if let Some(target) = self.group_mut(group) {
            target.translate = (dx, dy);
        }
    }

    fn clear(&mut self, group: GroupHandle) {
        let children = match self.group_mut(group) {
            Some(target) => {
                target.shapes.clear();
                target.paths.clear();
                std::mem::take(&mut target.children)
            }
            None => return,
        };
        for child in children {
            self.mark_removed(child);
        }
    }

    fn remove(&mut self, group: GroupHandle) {
        let parent = self.group(group).and_then(|target| target.parent);
        if let Some(parent_group) = parent.and_then(|handle| self.group_mut(handle)) {
            parent_group.children.retain(|child| *child != group);
        }
        self.mark_removed(group);
    }
}
