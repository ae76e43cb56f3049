use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Axis, AxisOrientation, BoxSize, Margin, SeriesPath};
use crate::render::{DrawSurface, GroupHandle, Shape, TextPrimitive};

use super::axis_scene_builder::{axis_origin, axis_shapes};
use super::composer::{PassRecord, SceneGroups};
use super::legend_layout::LEGEND_LABEL_FONT_PX;
use super::series_scene_builder::marker_shape;
use super::{ChartComposer, DEFAULT_CHART_MARGIN, LegendLayout, SceneElement, SeriesSnapshot};

pub const TITLE_FONT_PX: f64 = 18.0;

/// Sizes threaded through one rebuild pass.
///
/// Every step returns a new context; nothing is carried over between passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub full_size: BoxSize,
    pub title_size: BoxSize,
    pub legend_size: BoxSize,
    pub margin: Margin,
    pub plot_size: BoxSize,
}

impl LayoutContext {
    #[must_use]
    pub fn new(full_size: BoxSize) -> Self {
        Self {
            full_size,
            title_size: BoxSize::default(),
            legend_size: BoxSize::default(),
            margin: DEFAULT_CHART_MARGIN,
            plot_size: plot_size(full_size, DEFAULT_CHART_MARGIN),
        }
    }

    #[must_use]
    pub fn with_title_size(self, title_size: BoxSize) -> Self {
        Self { title_size, ..self }
    }

    #[must_use]
    pub fn with_legend_size(self, legend_size: BoxSize) -> Self {
        Self {
            legend_size,
            ..self
        }
    }

    /// Default margin, plus the user margin as adjusted by the legend, plus
    /// the title height on top. The plot area gets what remains.
    #[must_use]
    pub fn negotiate_margin(self, user_margin: Margin, legend: Option<&LegendLayout>) -> Self {
        let requested = legend.map_or(user_margin, |legend| legend.margin_for(user_margin));
        let mut margin = DEFAULT_CHART_MARGIN.add(requested);
        margin.top += self.title_size.height;
        Self {
            margin,
            plot_size: plot_size(self.full_size, margin),
            ..self
        }
    }

    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.plot_size.width)
    }

    /// Inverted so larger values sit higher.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot_size.height, 0.0)
    }

    /// Title centred over the plot area, baseline one title-height down.
    #[must_use]
    pub fn title_origin(&self) -> (f64, f64) {
        (
            self.margin.left + (self.plot_size.width - self.title_size.width) / 2.0,
            self.title_size.height,
        )
    }

    /// Assigns the range for the axis orientation, resets the domain and
    /// widens it with every series.
    #[must_use]
    pub fn fit_axis<'a>(
        &self,
        mut axis: Axis,
        series: impl IntoIterator<Item = &'a SeriesPath>,
    ) -> Axis {
        let (start, end) = match axis.orientation() {
            AxisOrientation::X => self.x_range(),
            AxisOrientation::Y => self.y_range(),
        };
        axis.set_range(start, end);
        axis.reset_domain();
        for path in series {
            axis.widen_with_series(path);
        }
        axis
    }
}

fn plot_size(full_size: BoxSize, margin: Margin) -> BoxSize {
    BoxSize::new(
        (full_size.width - margin.horizontal()).max(0.0),
        (full_size.height - margin.vertical()).max(0.0),
    )
}

impl<S: DrawSurface> ChartComposer<S> {
    /// Re-runs the whole layout and rebuilds every drawn group.
    ///
    /// Order: title, legend items, margins, plot size, axis ranges, axis
    /// domains, axis shapes, series shapes, then title and legend placement.
    /// Does nothing before [`ChartComposer::mount`].
    pub fn rebuild(&mut self) {
        let Some(scene) = self.begin_pass() else {
            debug!("rebuild requested before mount, skipped");
            return;
        };
        let Some((title_group, legend_group)) = scene
            .group(SceneElement::Title)
            .zip(scene.group(SceneElement::Legend))
        else {
            warn!("title or legend group missing, rebuild skipped");
            return;
        };

        let mut context = LayoutContext::new(self.config.size);

        if self.config.has_title {
            let title = TextPrimitive::new(self.config.title.clone(), 0.0, 0.0, TITLE_FONT_PX);
            self.surface.append_shape(title_group, Shape::Text(title));
            context = context.with_title_size(self.surface.measure(title_group));
        }

        let legend = if self.config.has_legend {
            let legend_size = self.build_legend_items(legend_group);
            self.legend = self.legend.with_measured_size(legend_size);
            context = context.with_legend_size(legend_size);
            Some(self.legend)
        } else {
            None
        };

        context = context.negotiate_margin(self.config.margin, legend.as_ref());
        if !context.plot_size.is_valid() {
            warn!(
                width = context.plot_size.width,
                height = context.plot_size.height,
                "margins leave no plot area"
            );
        }
        self.surface.set_transform(scene.plot, context.margin.left, context.margin.top);

        let x_axis = context.fit_axis(self.take_axis(AxisOrientation::X), self.series.values());
        let y_axis = context.fit_axis(self.take_axis(AxisOrientation::Y), self.series.values());

        for axis in [&x_axis, &y_axis] {
            self.build_axis_group(scene.plot, axis, context.plot_size);
        }
        let series = self.build_series_groups(scene.plot, &x_axis, &y_axis);
        self.put_axis(x_axis);
        self.put_axis(y_axis);

        let (title_x, title_y) = context.title_origin();
        self.surface.set_transform(title_group, title_x, title_y);
        let legend_anchor = legend.map(|legend| {
            let (x, y) = legend.anchor(context.plot_size, context.full_size, context.title_size);
            self.surface.set_transform(legend_group, x, y);
            (x, y)
        });

        self.rebuild_count += 1;
        debug!(
            pass = self.rebuild_count,
            plot_width = context.plot_size.width,
            plot_height = context.plot_size.height,
            series = series.len(),
            "rebuild pass complete"
        );
        self.last_pass = Some(PassRecord {
            context,
            legend_anchor,
            series,
        });
    }

    /// Tears down the previous pass and returns the groups to draw into.
    fn begin_pass(&mut self) -> Option<SceneGroups> {
        let scene = self.scene.as_mut()?;
        let previous: Vec<(SceneElement, GroupHandle)> = scene
            .elements
            .iter()
            .map(|(element, group)| (*element, *group))
            .collect();
        scene.elements.retain(|element, _| element.is_persistent());
        let scene = scene.clone();

        for (element, group) in previous {
            element.tear_down(&mut self.surface, group);
        }
        Some(scene)
    }

    fn register(&mut self, element: SceneElement, group: GroupHandle) {
        if let Some(scene) = self.scene.as_mut() {
            scene.elements.insert(element, group);
        }
    }

    /// Appends one item per series and returns the measured legend size.
    fn build_legend_items(&mut self, legend_group: GroupHandle) -> BoxSize {
        let mut offset = 0.0;
        for (index, series) in self.series.values().enumerate() {
            let item = self.surface.create_group(Some(legend_group), "legend-item");
            self.surface.append_shape(item, self.legend.item_figure(series.color));
            let figure = self.surface.measure(item);

            let (label_x, label_y) = self.legend.label_position(figure);
            let label =
                TextPrimitive::new(series.name.clone(), label_x, label_y, LEGEND_LABEL_FONT_PX);
            self.surface.append_shape(item, Shape::Text(label));

            let (x, y) = self.legend.item_offset(index, offset);
            self.surface.set_transform(item, x, y);
            offset += self.surface.measure(item).width;
        }
        self.surface.measure(legend_group)
    }

    fn build_axis_group(&mut self, plot: GroupHandle, axis: &Axis, plot_size: BoxSize) {
        let element = SceneElement::Axis(axis.orientation());
        let group = self.surface.create_group(Some(plot), element.class());
        let (dx, dy) = axis_origin(axis.orientation(), plot_size);
        self.surface.set_transform(group, dx, dy);
        for shape in axis_shapes(axis, plot_size) {
            self.surface.append_shape(group, shape);
        }
        self.register(element, group);
    }

    /// Draws every series in insertion order; failing series are skipped.
    fn build_series_groups(
        &mut self,
        plot: GroupHandle,
        x_axis: &Axis,
        y_axis: &Axis,
    ) -> Vec<SeriesSnapshot> {
        if self.series.is_empty() {
            return Vec::new();
        }

        let scales = x_axis
            .linear_scale()
            .and_then(|x_scale| Ok((x_scale, y_axis.linear_scale()?)));
        let (x_scale, y_scale) = match scales {
            Ok(scales) => scales,
            Err(err) => {
                warn!(
                    error = %err,
                    series = self.series.len(),
                    "axis domain has no span, series skipped"
                );
                return Vec::new();
            }
        };

        let mut drawn = Vec::with_capacity(self.series.len());
        let mut groups = Vec::with_capacity(self.series.len());
        for (id, series) in &self.series {
            let geometry = match series.build_geometry(x_scale, y_scale) {
                Ok(geometry) => geometry,
                Err(err) => {
                    warn!(
                        series = id.value(),
                        name = %series.name,
                        error = %err,
                        "series skipped"
                    );
                    continue;
                }
            };

            let element = SceneElement::Series(*id);
            let group = self.surface.create_group(Some(plot), element.class());
            let path_data = geometry.path_data();
            self.surface.append_path(group, path_data.clone(), series.path_style());
            for marker in &geometry.markers {
                self.surface.append_shape(group, marker_shape(marker));
            }
            trace!(series = id.value(), markers = geometry.markers.len(), "series drawn");

            groups.push((element, group));
            drawn.push(SeriesSnapshot {
                id: *id,
                name: series.name.clone(),
                path_data,
                marker_count: geometry.markers.len(),
            });
        }

        for (element, group) in groups {
            self.register(element, group);
        }
        drawn
    }
}
