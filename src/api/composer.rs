use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, AxisOrientation, SeriesPath};
use crate::error::ChartResult;
use crate::render::{DrawSurface, GroupHandle};

use super::series_input::PendingSeries;
use super::{
    ComposerConfig, LayoutContext, LegendLayout, LegendShape, LegendStyle, SeriesId,
    SeriesSnapshot,
};

/// Drawable parts of a chart, each backed by one surface group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneElement {
    Title,
    Legend,
    Axis(AxisOrientation),
    Series(SeriesId),
}

impl SceneElement {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Legend => "legend",
            Self::Axis(orientation) => orientation.class(),
            Self::Series(_) => "line",
        }
    }

    /// Title and legend groups live for the whole mount and are only cleared;
    /// axis and series groups are recreated on every pass.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Self::Title | Self::Legend)
    }

    pub(super) fn tear_down<S: DrawSurface>(self, surface: &mut S, group: GroupHandle) {
        if self.is_persistent() {
            surface.clear(group);
        } else {
            surface.remove(group);
        }
    }
}

/// Groups created when the composer is mounted on its surface.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SceneGroups {
    pub(super) root: GroupHandle,
    pub(super) plot: GroupHandle,
    pub(super) elements: IndexMap<SceneElement, GroupHandle>,
}

impl SceneGroups {
    pub(super) fn group(&self, element: SceneElement) -> Option<GroupHandle> {
        self.elements.get(&element).copied()
    }
}

/// Results of the latest rebuild pass, kept for snapshots.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PassRecord {
    pub(super) context: LayoutContext,
    pub(super) legend_anchor: Option<(f64, f64)>,
    pub(super) series: Vec<SeriesSnapshot>,
}

/// Root owner of axes, series and legend; runs the rebuild pass against a
/// host [`DrawSurface`].
pub struct ChartComposer<S: DrawSurface> {
    pub(super) surface: S,
    pub(super) config: ComposerConfig,
    pub(super) legend: LegendLayout,
    pub(super) x_axis: Option<Axis>,
    pub(super) y_axis: Option<Axis>,
    pub(super) series: IndexMap<SeriesId, SeriesPath>,
    pub(super) next_series_id: u64,
    pub(super) pending: Vec<PendingSeries>,
    pub(super) scene: Option<SceneGroups>,
    pub(super) last_pass: Option<PassRecord>,
    pub(super) rebuild_count: u64,
}

impl<S: DrawSurface> ChartComposer<S> {
    pub fn new(surface: S, config: ComposerConfig) -> ChartResult<Self> {
        config.validate()?;
        let legend = config.legend_layout();

        Ok(Self {
            surface,
            config,
            legend,
            x_axis: None,
            y_axis: None,
            series: IndexMap::new(),
            next_series_id: 0,
            pending: Vec::new(),
            scene: None,
            last_pass: None,
            rebuild_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Creates the persistent groups on the surface and runs a first pass.
    ///
    /// Mounting twice only rebuilds.
    pub fn mount(&mut self) {
        if self.scene.is_none() {
            let surface = &mut self.surface;
            let root = surface.create_group(None, "chart");
            let plot = surface.create_group(Some(root), "plot");
            let mut elements = IndexMap::new();
            for element in [SceneElement::Legend, SceneElement::Title] {
                elements.insert(element, surface.create_group(Some(root), element.class()));
            }
            debug!(root = root.index(), "mounted chart composer");
            self.scene = Some(SceneGroups {
                root,
                plot,
                elements,
            });
        }
        self.rebuild();
    }

    /// Removes every group from the surface. Series and axes are kept.
    pub fn unmount(&mut self) {
        if let Some(scene) = self.scene.take() {
            self.surface.remove(scene.root);
            self.last_pass = None;
            debug!("unmounted chart composer");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    /// Number of completed rebuild passes.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Layout negotiated by the latest pass.
    #[must_use]
    pub fn layout(&self) -> Option<&LayoutContext> {
        self.last_pass.as_ref().map(|pass| &pass.context)
    }

    #[must_use]
    pub fn legend(&self) -> &LegendLayout {
        &self.legend
    }

    pub fn set_legend_style(&mut self, style: LegendStyle) {
        self.config.legend_style = style;
        self.legend = self.config.legend_layout();
        self.refresh();
    }

    pub fn set_legend_shape(&mut self, shape: LegendShape) {
        self.config.legend_shape = shape;
        self.legend = self.config.legend_layout();
        self.refresh();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
        self.refresh();
    }

    pub fn set_margin(&mut self, margin: crate::core::Margin) {
        self.config.margin = margin;
        self.refresh();
    }

    #[must_use]
    pub fn x_axis(&self) -> Option<&Axis> {
        self.x_axis.as_ref()
    }

    #[must_use]
    pub fn y_axis(&self) -> Option<&Axis> {
        self.y_axis.as_ref()
    }

    /// Installs a host-built X axis; its orientation is forced to X.
    pub fn set_x_axis(&mut self, mut axis: Axis) {
        axis.set_orientation(AxisOrientation::X);
        self.x_axis = Some(axis);
        self.refresh();
    }

    /// Installs a host-built Y axis; its orientation is forced to Y.
    pub fn set_y_axis(&mut self, mut axis: Axis) {
        axis.set_orientation(AxisOrientation::Y);
        self.y_axis = Some(axis);
        self.refresh();
    }

    /// Takes an axis out of the composer, creating it from the configured
    /// options when the host never set one. Pair with [`Self::put_axis`].
    pub(super) fn take_axis(&mut self, orientation: AxisOrientation) -> Axis {
        let (slot, options) = match orientation {
            AxisOrientation::X => (&mut self.x_axis, self.config.x_axis),
            AxisOrientation::Y => (&mut self.y_axis, self.config.y_axis),
        };
        slot.take().unwrap_or_else(|| options.build_axis(orientation))
    }

    pub(super) fn put_axis(&mut self, axis: Axis) {
        match axis.orientation() {
            AxisOrientation::X => self.x_axis = Some(axis),
            AxisOrientation::Y => self.y_axis = Some(axis),
        }
    }

    /// Series in insertion order, which is also legend and draw order.
    pub fn series(&self) -> impl Iterator<Item = (SeriesId, &SeriesPath)> + '_ {
        self.series.iter().map(|(id, series)| (*id, series))
    }

    #[must_use]
    pub fn series_by_id(&self, id: SeriesId) -> Option<&SeriesPath> {
        self.series.get(&id)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Removes a series, keeping the order of the others.
    pub fn remove_series(&mut self, id: SeriesId) -> Option<SeriesPath> {
        let removed = self.series.shift_remove(&id);
        if removed.is_some() {
            debug!(series = id.value(), "removed series");
            self.refresh();
        }
        removed
    }

    /// Rebuilds when mounted; structural changes call this.
    pub(super) fn refresh(&mut self) {
        if self.is_mounted() {
            self.rebuild();
        }
    }
}
