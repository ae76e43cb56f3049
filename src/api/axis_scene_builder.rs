use tracing::trace;

use crate::core::{Axis, AxisOrientation, BoxSize};
use crate::render::{Color, LinePrimitive, Shape, TextHAlign, TextPrimitive};

pub const AXIS_TICK_MARK_PX: f64 = 6.0;
/// Distance between the axis line and the tick labels.
pub const AXIS_TICK_LABEL_GAP_PX: f64 = 9.0;
pub const AXIS_LABEL_FONT_PX: f64 = 10.0;
pub const GRIDLINE_DASH_PX: f64 = 2.0;

fn gridline_color() -> Color {
    Color::from_rgb8(0x77, 0x77, 0x77)
}

/// Group offset of an axis inside the plot area.
#[must_use]
pub fn axis_origin(orientation: AxisOrientation, plot: BoxSize) -> (f64, f64) {
    match orientation {
        AxisOrientation::X => (0.0, plot.height),
        AxisOrientation::Y => (0.0, 0.0),
    }
}

/// Shapes of one axis in its group-local space.
///
/// Ticks come from [`Axis::display_ticks`]; every tick except the first also
/// gets a dashed gridline spanning the plot area. An axis whose domain has
/// no span draws its line and title only.
#[must_use]
pub fn axis_shapes(axis: &Axis, plot: BoxSize) -> Vec<Shape> {
    let display = axis.display();
    let orientation = axis.orientation();
    let mut shapes = Vec::new();

    match axis.linear_scale() {
        Ok(scale) => {
            for (index, value) in axis.display_ticks().into_iter().enumerate() {
                let position = scale.map(value);
                if !display.hide_tick_mark {
                    shapes.push(Shape::Line(tick_mark(orientation, position)));
                }
                if !display.hide_tick_label {
                    shapes.push(Shape::Text(tick_label(
                        orientation,
                        position,
                        axis.format_tick(value),
                    )));
                }
                if index > 0 && !display.hide_tick_line {
                    shapes.push(Shape::Line(gridline(orientation, position, plot)));
                }
            }
        }
        Err(err) => {
            trace!(orientation = ?orientation, error = %err, "axis without span, ticks skipped");
        }
    }

    if !display.hide_axis_line {
        let (start, end) = axis.range();
        let line = match orientation {
            AxisOrientation::X => LinePrimitive::new(start, 0.0, end, 0.0, 1.0, Color::BLACK),
            AxisOrientation::Y => LinePrimitive::new(0.0, start, 0.0, end, 1.0, Color::BLACK),
        };
        shapes.push(Shape::Line(line));
    }

    let title = axis.title();
    if !display.hide_title && !title.is_empty() {
        let text = match orientation {
            AxisOrientation::X => TextPrimitive::new(title, plot.width, -3.0, AXIS_LABEL_FONT_PX)
                .shifted(-0.35)
                .aligned(TextHAlign::Right),
            AxisOrientation::Y => {
                TextPrimitive::new(title, 8.0, 0.0, AXIS_LABEL_FONT_PX).shifted(0.8)
            }
        };
        shapes.push(Shape::Text(text));
    }

    shapes
}

fn tick_mark(orientation: AxisOrientation, position: f64) -> LinePrimitive {
    match orientation {
        AxisOrientation::X => {
            LinePrimitive::new(position, 0.0, position, AXIS_TICK_MARK_PX, 1.0, Color::BLACK)
        }
        AxisOrientation::Y => {
            LinePrimitive::new(-AXIS_TICK_MARK_PX, position, 0.0, position, 1.0, Color::BLACK)
        }
    }
}

fn tick_label(orientation: AxisOrientation, position: f64, text: String) -> TextPrimitive {
    match orientation {
        AxisOrientation::X => {
            TextPrimitive::new(text, position, AXIS_TICK_LABEL_GAP_PX, AXIS_LABEL_FONT_PX)
                .shifted(0.71)
                .aligned(TextHAlign::Center)
        }
        AxisOrientation::Y => {
            TextPrimitive::new(text, -AXIS_TICK_LABEL_GAP_PX, position, AXIS_LABEL_FONT_PX)
                .shifted(0.32)
                .aligned(TextHAlign::Right)
        }
    }
}

fn gridline(orientation: AxisOrientation, position: f64, plot: BoxSize) -> LinePrimitive {
    let line = match orientation {
        AxisOrientation::X => {
            LinePrimitive::new(position, 0.0, position, -plot.height, 1.0, gridline_color())
        }
        AxisOrientation::Y => {
            LinePrimitive::new(0.0, position, plot.width, position, 1.0, gridline_color())
        }
    };
    line.dashed(GRIDLINE_DASH_PX, GRIDLINE_DASH_PX)
}
