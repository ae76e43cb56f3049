use std::fmt::Write as _;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{LinearScale, Point, PointShape, SplineInterpolator};
use crate::error::ChartResult;
use crate::render::{Color, PathStyle};

/// Sampling distance of curved series, in device pixels.
pub const CURVE_SAMPLE_STEP_PX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveMode {
    #[default]
    Curved,
    Straight,
}

/// Marker the host draws at one data point, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub shape: PointShape,
    pub x: f64,
    pub y: f64,
    /// Radius for circles, side length otherwise.
    pub size: f64,
    pub color: Color,
}

/// Device-space output of one series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub coordinates: Vec<(f64, f64)>,
    pub markers: Vec<MarkerDescriptor>,
}

impl SeriesGeometry {
    /// Path data in the `"M{x0},{y0} {x1},{y1} ..."` form.
    #[must_use]
    pub fn path_data(&self) -> String {
        format_path_data(&self.coordinates)
    }
}

/// x-sorted points plus the style used to draw them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    points: Vec<Point>,
    pub name: String,
    pub color: Color,
    pub curve_mode: CurveMode,
    pub marker_shape: PointShape,
    pub show_markers: bool,
    pub stroke_width: f64,
}

impl SeriesPath {
    /// Builds a series; points are stably sorted by ascending x.
    #[must_use]
    pub fn new(points: Vec<Point>, name: impl Into<String>) -> Self {
        let mut series = Self {
            points: Vec::new(),
            name: name.into(),
            color: Color::BLACK,
            curve_mode: CurveMode::default(),
            marker_shape: PointShape::default(),
            show_markers: true,
            stroke_width: PathStyle::default().stroke_width,
        };
        series.set_points(points);
        series
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_curve_mode(mut self, curve_mode: CurveMode) -> Self {
        self.curve_mode = curve_mode;
        self
    }

    #[must_use]
    pub fn with_marker_shape(mut self, marker_shape: PointShape) -> Self {
        self.marker_shape = marker_shape;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, show_markers: bool) -> Self {
        self.show_markers = show_markers;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces every point at once and re-sorts.
    pub fn set_points(&mut self, mut points: Vec<Point>) {
        points.sort_by_key(|point| OrderedFloat(point.x));
        self.points = points;
    }

    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        PathStyle {
            stroke_color: self.color,
            stroke_width: self.stroke_width,
        }
    }

    /// First and last x of the sorted points.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.x, last.x))
    }

    /// Smallest and largest y across the points.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let min = self.points.iter().map(|point| OrderedFloat(point.y)).min()?;
        let max = self.points.iter().map(|point| OrderedFloat(point.y)).max()?;
        Some((min.0, max.0))
    }

    /// Maps the series into device space through the two axis scales.
    ///
    /// Curved series sample the spline every two device pixels from the first
    /// to the last knot; the first knot is always emitted, the last sample is
    /// the largest step not past the final knot. The step is two pixels
    /// divided by the x scale's pixels-per-unit slope, not by the pixel
    /// position of x = 1; the two agree only when the x domain starts at 0.
    /// Fewer than two points are drawn straight. Duplicate x values in a
    /// curved series are an error.
    pub fn build_geometry(
        &self,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> ChartResult<SeriesGeometry> {
        let coordinates = match self.curve_mode {
            CurveMode::Curved if self.points.len() >= 2 => {
                self.curved_coordinates(x_scale, y_scale)?
            }
            _ => self.straight_coordinates(x_scale, y_scale)?,
        };

        let markers = if self.show_markers {
            self.markers(x_scale, y_scale)?
        } else {
            Vec::new()
        };

        trace!(
            series = %self.name,
            coordinates = coordinates.len(),
            markers = markers.len(),
            "built series geometry"
        );
        Ok(SeriesGeometry {
            coordinates,
            markers,
        })
    }

    fn straight_coordinates(
        &self,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> ChartResult<Vec<(f64, f64)>> {
        self.points
            .iter()
            .map(|point| to_device(point.x, point.y, x_scale, y_scale))
            .collect()
    }

    fn curved_coordinates(
        &self,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> ChartResult<Vec<(f64, f64)>> {
        let spline =
            SplineInterpolator::from_knots(self.points.iter().map(|point| (point.x, point.y)))?;
        let (min_x, max_x) = spline.x_span();

        let step = CURVE_SAMPLE_STEP_PX / x_scale.pixels_per_unit();
        if !step.is_finite() || step <= 0.0 {
            trace!(series = %self.name, step, "unusable sample step, emitting knots only");
            return self.straight_coordinates(x_scale, y_scale);
        }

        let mut coordinates = Vec::with_capacity(((max_x - min_x) / step) as usize + 2);
        coordinates.push(to_device(min_x, spline.evaluate(min_x), x_scale, y_scale)?);
        let mut index = 1.0;
        loop {
            let x = min_x + step * index;
            if x > max_x {
                break;
            }
            coordinates.push(to_device(x, spline.evaluate(x), x_scale, y_scale)?);
            index += 1.0;
        }
        Ok(coordinates)
    }

    fn markers(
        &self,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> ChartResult<Vec<MarkerDescriptor>> {
        self.points
            .iter()
            .map(|point| {
                let (x, y) = to_device(point.x, point.y, x_scale, y_scale)?;
                let shape = point.shape.unwrap_or(self.marker_shape);
                Ok(MarkerDescriptor {
                    shape,
                    x,
                    y,
                    size: shape.size_px(),
                    color: point.color.unwrap_or(self.color),
                })
            })
            .collect()
    }
}

fn to_device(
    x: f64,
    y: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> ChartResult<(f64, f64)> {
    Ok((x_scale.domain_to_pixel(x)?, y_scale.domain_to_pixel(y)?))
}

/// Joins device coordinates into `"M{x0},{y0} {x1},{y1} ..."`.
///
/// Numbers use the shortest round-trip decimal form; negative zero prints as
/// `0`. An empty slice yields an empty string.
#[must_use]
pub fn format_path_data(coordinates: &[(f64, f64)]) -> String {
    if coordinates.is_empty() {
        return String::new();
    }

    let mut data = String::with_capacity(coordinates.len() * 16);
    data.push('M');
    for (index, &(x, y)) in coordinates.iter().enumerate() {
        if index > 0 {
            data.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(data, "{},{}", normalize_zero(x), normalize_zero(y));
    }
    data
}

/// Parses path data produced by [`format_path_data`]; malformed pairs are skipped.
#[must_use]
pub fn parse_path_data(data: &str) -> Vec<(f64, f64)> {
    let body = data.trim().strip_prefix('M').unwrap_or(data);
    body.split_whitespace()
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some((x.parse().ok()?, y.parse().ok()?))
        })
        .collect()
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
