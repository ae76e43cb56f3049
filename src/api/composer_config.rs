use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisDisplay, AxisOrientation, BoxSize, Margin};
use crate::error::{ChartError, ChartResult};

use super::{LegendLayout, LegendShape, LegendStyle};

/// Margin always kept around the plot area, before legend and title.
pub const DEFAULT_CHART_MARGIN: Margin = Margin::new(5.0, 15.0, 20.0, 30.0);

/// Tick and display options applied to lazily created axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    /// Spacing of explicit ticks; `0` lets the axis pick round-number ticks.
    #[serde(default)]
    pub tick_interval: f64,
    /// Padding added to the data maximum before rounding.
    #[serde(default)]
    pub extra_space: f64,
    /// Domain every rebuild starts widening from.
    #[serde(default)]
    pub initial_domain: (f64, f64),
    #[serde(default)]
    pub display: AxisDisplay,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            tick_interval: 0.0,
            extra_space: 0.0,
            initial_domain: (0.0, 0.0),
            display: AxisDisplay::default(),
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: f64) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[must_use]
    pub fn with_extra_space(mut self, extra_space: f64) -> Self {
        self.extra_space = extra_space;
        self
    }

    #[must_use]
    pub fn with_initial_domain(mut self, min: f64, max: f64) -> Self {
        self.initial_domain = (min, max);
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: AxisDisplay) -> Self {
        self.display = display;
        self
    }

    /// Unnamed axis carrying these options.
    #[must_use]
    pub fn build_axis(self, orientation: AxisOrientation) -> Axis {
        Axis::new(orientation, "", "")
            .with_domain(self.initial_domain.0, self.initial_domain.1)
            .with_tick_interval(self.tick_interval)
            .with_extra_space(self.extra_space)
            .with_display(self.display)
    }

    fn validate(self, axis: &str) -> ChartResult<()> {
        for (name, value) in [
            ("tick_interval", self.tick_interval),
            ("extra_space", self.extra_space),
            ("initial_domain.min", self.initial_domain.0),
            ("initial_domain.max", self.initial_domain.1),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{axis} axis option `{name}` must be finite"
                )));
            }
        }
        if self.tick_interval < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{axis} axis option `tick_interval` must be >= 0"
            )));
        }
        Ok(())
    }
}

/// Named presets for the chart chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CanvasStyle {
    /// Title, legend and full axes.
    #[default]
    Coordinate,
    /// Bare drawing board: no title or legend, gridlines only.
    Board,
}

impl CanvasStyle {
    #[must_use]
    pub const fn has_title(self) -> bool {
        matches!(self, Self::Coordinate)
    }

    #[must_use]
    pub const fn has_legend(self) -> bool {
        matches!(self, Self::Coordinate)
    }

    #[must_use]
    pub const fn axis_display(self) -> AxisDisplay {
        match self {
            Self::Coordinate => AxisDisplay {
                hide_title: false,
                hide_axis_line: false,
                hide_tick_line: false,
                hide_tick_mark: false,
                hide_tick_label: false,
            },
            Self::Board => AxisDisplay {
                hide_title: true,
                hide_axis_line: true,
                hide_tick_line: false,
                hide_tick_mark: true,
                hide_tick_label: true,
            },
        }
    }
}

/// Composer bootstrap configuration.
///
/// Serializable so hosts can persist chart setups as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    pub size: BoxSize,
    #[serde(default)]
    pub title: String,
    /// Extra margin requested by the host, added to the default margin.
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_true")]
    pub has_title: bool,
    #[serde(default = "default_true")]
    pub has_legend: bool,
    #[serde(default)]
    pub legend_style: LegendStyle,
    #[serde(default)]
    pub legend_shape: LegendShape,
    #[serde(default)]
    pub x_axis: AxisOptions,
    #[serde(default)]
    pub y_axis: AxisOptions,
}

impl ComposerConfig {
    /// Coordinate-style config for a chart of `size` pixels.
    #[must_use]
    pub fn new(size: BoxSize) -> Self {
        Self {
            size,
            title: String::new(),
            margin: Margin::default(),
            has_title: true,
            has_legend: true,
            legend_style: LegendStyle::default(),
            legend_shape: LegendShape::default(),
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
        }
    }

    /// Applies a preset's title/legend switches and axis display flags.
    #[must_use]
    pub fn with_canvas_style(mut self, style: CanvasStyle) -> Self {
        self.has_title = style.has_title();
        self.has_legend = style.has_legend();
        self.x_axis.display = style.axis_display();
        self.y_axis.display = style.axis_display();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_has_title(mut self, has_title: bool) -> Self {
        self.has_title = has_title;
        self
    }

    #[must_use]
    pub fn with_has_legend(mut self, has_legend: bool) -> Self {
        self.has_legend = has_legend;
        self
    }

    #[must_use]
    pub fn with_legend_style(mut self, legend_style: LegendStyle) -> Self {
        self.legend_style = legend_style;
        self
    }

    #[must_use]
    pub fn with_legend_shape(mut self, legend_shape: LegendShape) -> Self {
        self.legend_shape = legend_shape;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, options: AxisOptions) -> Self {
        self.x_axis = options;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, options: AxisOptions) -> Self {
        self.y_axis = options;
        self
    }

    #[must_use]
    pub fn legend_layout(&self) -> LegendLayout {
        self.legend_style.layout().with_shape(self.legend_shape)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_valid() {
            return Err(ChartError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        for (edge, value) in [
            ("top", self.margin.top),
            ("right", self.margin.right),
            ("bottom", self.margin.bottom),
            ("left", self.margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{edge}` must be finite and >= 0"
                )));
            }
        }
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}
