use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::text_metrics::{TEXT_LINE_HEIGHT_RATIO, estimate_text_width_px};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb` CSS hex notation.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must use #rgb or #rrggbb notation"
                )));
            }
        };

        let channel = |offset: usize| {
            u8::from_str_radix(&expanded[offset..offset + 2], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{input}` contains non-hex digits"))
            })
        };
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS hex form (`#rrggbb`), alpha is dropped.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_u8 = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Axis-aligned bounds in a group's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    #[must_use]
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_corners(first.0, first.1, first.0, first.1);
        for &(x, y) in rest {
            bounds = bounds.union(Self::from_corners(x, y, x, y));
        }
        Some(bounds)
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed { on_px: f64, off_px: f64 },
}

/// One straight segment in group-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn dashed(mut self, on_px: f64, off_px: f64) -> Self {
        self.stroke_style = LineStrokeStyle::Dashed { on_px, off_px };
        self
    }
}

/// Filled axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub fill_color: Color,
}

/// Closed filled polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<(f64, f64)>,
    pub fill_color: Color,
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One label. `y` is the baseline, shifted by `dy_em` font sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dy_em: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size_px: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            dy_em: 0.0,
            font_size_px,
            color: Color::BLACK,
            h_align: TextHAlign::Left,
        }
    }

    #[must_use]
    pub fn aligned(mut self, h_align: TextHAlign) -> Self {
        self.h_align = h_align;
        self
    }

    #[must_use]
    pub fn shifted(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    /// Baseline y after applying the em shift.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.y + self.dy_em * self.font_size_px
    }
}

/// Closed set of shapes a host surface must be able to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Ellipse(EllipsePrimitive),
    Polygon(PolygonPrimitive),
    Text(TextPrimitive),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Polygon(_) => "polygon",
            Self::Text(_) => "text",
        }
    }

    /// Local bounds; text uses the deterministic width estimate.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Line(line) => Some(Bounds::from_corners(line.x1, line.y1, line.x2, line.y2)),
            Self::Rect(rect) => Some(Bounds::from_corners(
                rect.x,
                rect.y,
                rect.x + rect.width,
                rect.y + rect.height,
            )),
            Self::Circle(circle) => Some(Bounds::from_corners(
                circle.cx - circle.radius,
                circle.cy - circle.radius,
                circle.cx + circle.radius,
                circle.cy + circle.radius,
            )),
            Self::Ellipse(ellipse) => Some(Bounds::from_corners(
                ellipse.cx - ellipse.rx,
                ellipse.cy - ellipse.ry,
                ellipse.cx + ellipse.rx,
                ellipse.cy + ellipse.ry,
            )),
            Self::Polygon(polygon) => Bounds::from_points(&polygon.points),
            Self::Text(text) => text_bounds(text),
        }
    }
}

fn text_bounds(text: &TextPrimitive) -> Option<Bounds> {
    if text.text.is_empty() {
        return None;
    }
    let width = estimate_text_width_px(&text.text, text.font_size_px);
    let height = text.font_size_px * TEXT_LINE_HEIGHT_RATIO;
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    // Ascent sits roughly at 0.9em above the baseline.
    let top = text.baseline_y() - 0.9 * text.font_size_px;
    Some(Bounds::from_corners(left, top, left + width, top + height))
}

/// Stroke settings for a series path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            stroke_width: 1.5,
        }
    }
}
