use serde::{Deserialize, Serialize};

use crate::core::{BoxSize, Margin};
use crate::render::{
    CirclePrimitive, Color, EllipsePrimitive, LinePrimitive, RectPrimitive, Shape,
};

/// Distance between consecutive legend items.
pub const LEGEND_ITEM_SPACING_PX: f64 = 15.0;
/// Room kept for the y-axis labels when anchoring on the left.
pub const Y_AXIS_GUTTER_PX: f64 = 20.0;
/// Margin reserved on the top or bottom edge by an outside legend.
pub const OUTSIDE_LEGEND_MARGIN_PX: f64 = 30.0;
/// Gap below a bottom outside legend.
pub const OUTSIDE_LEGEND_BOTTOM_GAP_PX: f64 = 10.0;
pub const LEGEND_LABEL_FONT_PX: f64 = 10.0;
pub const DEFAULT_LEGEND_INSIDE_MARGIN: Margin = Margin::new(30.0, 25.0, 20.0, 30.0);

/// How items follow each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendFlow {
    /// Vertical stack.
    Block,
    /// Left-to-right row.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendCorner {
    UpLeft,
    UpRight,
    BottomLeft,
    BottomRight,
    UpCenter,
    BottomCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Up,
    Bottom,
}

impl LegendCorner {
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAnchor {
        match self {
            Self::UpLeft | Self::BottomLeft => HorizontalAnchor::Left,
            Self::UpRight | Self::BottomRight => HorizontalAnchor::Right,
            Self::UpCenter | Self::BottomCenter => HorizontalAnchor::Center,
        }
    }

    #[must_use]
    pub const fn vertical(self) -> VerticalAnchor {
        match self {
            Self::UpLeft | Self::UpRight | Self::UpCenter => VerticalAnchor::Up,
            Self::BottomLeft | Self::BottomRight | Self::BottomCenter => VerticalAnchor::Bottom,
        }
    }
}

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPlacement {
    /// Floats over the plot area.
    Inside,
    /// Above or below the plot, reserving top/bottom margin.
    Outside,
    /// Beside the plot, reserving left/right margin.
    Side,
}

/// Figure drawn in front of each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendShape {
    #[default]
    Line,
    Circle,
    Rectangle,
    Ellipse,
}

/// Legend placement rules plus the size measured during the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub flow: LegendFlow,
    pub corner: LegendCorner,
    pub placement: LegendPlacement,
    pub shape: LegendShape,
    pub inside_margin: Margin,
    measured_size: BoxSize,
}

impl LegendLayout {
    #[must_use]
    pub const fn new(flow: LegendFlow, corner: LegendCorner, placement: LegendPlacement) -> Self {
        Self {
            flow,
            corner,
            placement,
            shape: LegendShape::Line,
            inside_margin: DEFAULT_LEGEND_INSIDE_MARGIN,
            measured_size: BoxSize::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn with_shape(mut self, shape: LegendShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub const fn with_inside_margin(mut self, inside_margin: Margin) -> Self {
        self.inside_margin = inside_margin;
        self
    }

    #[must_use]
    pub const fn with_measured_size(mut self, measured_size: BoxSize) -> Self {
        self.measured_size = measured_size;
        self
    }

    #[must_use]
    pub const fn measured_size(&self) -> BoxSize {
        self.measured_size
    }

    /// Local offset of item `index`; `offset` is the summed width of the
    /// items placed before it.
    #[must_use]
    pub fn item_offset(&self, index: usize, offset: f64) -> (f64, f64) {
        let step = LEGEND_ITEM_SPACING_PX * index as f64;
        match self.flow {
            LegendFlow::Line => (step + offset, 0.0),
            LegendFlow::Block => (0.0, step),
        }
    }

    /// Position of the whole legend in chart coordinates.
    #[must_use]
    pub fn anchor(&self, plot: BoxSize, full: BoxSize, title: BoxSize) -> (f64, f64) {
        (self.anchor_x(plot, full), self.anchor_y(plot, full, title))
    }

    fn anchor_x(&self, plot: BoxSize, full: BoxSize) -> f64 {
        let legend = self.measured_size;
        let inside = self.inside_margin;
        match (self.placement, self.corner.horizontal()) {
            (LegendPlacement::Inside | LegendPlacement::Outside, HorizontalAnchor::Right) => {
                full.width - legend.width - inside.right
            }
            (LegendPlacement::Inside | LegendPlacement::Outside, HorizontalAnchor::Center) => {
                (plot.width - legend.width) / 2.0 + inside.left + Y_AXIS_GUTTER_PX
            }
            (LegendPlacement::Inside | LegendPlacement::Outside, HorizontalAnchor::Left) => {
                inside.left + Y_AXIS_GUTTER_PX
            }
            (LegendPlacement::Side, HorizontalAnchor::Right) => plot.width + legend.width / 2.0,
            (LegendPlacement::Side, _) => Y_AXIS_GUTTER_PX,
        }
    }

    fn anchor_y(&self, plot: BoxSize, full: BoxSize, title: BoxSize) -> f64 {
        let legend = self.measured_size;
        let inside = self.inside_margin;
        match (self.placement, self.corner.vertical()) {
            (LegendPlacement::Outside, VerticalAnchor::Bottom) => {
                full.height - legend.height - OUTSIDE_LEGEND_BOTTOM_GAP_PX
            }
            (LegendPlacement::Outside, VerticalAnchor::Up) => title.height + inside.top / 2.0,
            (_, VerticalAnchor::Bottom) => plot.height - legend.height,
            (_, VerticalAnchor::Up) => inside.top + title.height,
        }
    }

    /// Margin the legend needs on top of `base`.
    ///
    /// Outside legends claim `OUTSIDE_LEGEND_MARGIN_PX` on their edge unless
    /// that edge is already set; side legends add their width plus the inside
    /// margin of their edge; inside legends add nothing. `base` is never
    /// mutated, so repeated calls give the same result.
    #[must_use]
    pub fn margin_for(&self, base: Margin) -> Margin {
        let mut margin = base;
        match self.placement {
            LegendPlacement::Outside => match self.corner.vertical() {
                VerticalAnchor::Bottom if margin.bottom == 0.0 => {
                    margin.bottom = OUTSIDE_LEGEND_MARGIN_PX;
                }
                VerticalAnchor::Up if margin.top == 0.0 => {
                    margin.top = OUTSIDE_LEGEND_MARGIN_PX;
                }
                _ => {}
            },
            LegendPlacement::Side => match self.corner.horizontal() {
                HorizontalAnchor::Right => {
                    margin.right += self.measured_size.width + self.inside_margin.right;
                }
                HorizontalAnchor::Left | HorizontalAnchor::Center => {
                    margin.left += self.measured_size.width + self.inside_margin.left;
                }
            },
            LegendPlacement::Inside => {}
        }
        margin
    }

    /// Figure shape for one item, drawn in the series color.
    #[must_use]
    pub fn item_figure(&self, color: Color) -> Shape {
        match self.shape {
            LegendShape::Line => Shape::Line(LinePrimitive::new(0.0, 0.0, 10.0, 0.0, 1.0, color)),
            LegendShape::Circle => Shape::Circle(CirclePrimitive {
                cx: 0.0,
                cy: 1.0,
                radius: 4.0,
                fill_color: color,
            }),
            LegendShape::Rectangle => {
                Shape::Rect(RectPrimitive::new(0.0, -3.0, 10.0, 5.0, color))
            }
            LegendShape::Ellipse => Shape::Ellipse(EllipsePrimitive {
                cx: 0.0,
                cy: 0.0,
                rx: 8.0,
                ry: 4.0,
                fill_color: color,
            }),
        }
    }

    /// Label origin next to a figure of the given measured size.
    #[must_use]
    pub fn label_position(&self, figure: BoxSize) -> (f64, f64) {
        let x = match self.shape {
            LegendShape::Circle | LegendShape::Ellipse => figure.width / 2.0 + 3.0,
            LegendShape::Line | LegendShape::Rectangle => figure.width + 3.0,
        };
        let y = if figure.height == 0.0 {
            3.0
        } else {
            figure.height / 2.0
        };
        (x, y)
    }
}
