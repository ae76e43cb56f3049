use crate::core::{MarkerDescriptor, PointShape};
use crate::render::{CirclePrimitive, PolygonPrimitive, RectPrimitive, Shape};

/// Vertices of an equilateral triangle of side `side` centred on `(cx, cy)`,
/// pointing up: top, bottom-left, bottom-right.
#[must_use]
pub fn equilateral_triangle(cx: f64, cy: f64, side: f64) -> [(f64, f64); 3] {
    let half = side / 2.0;
    let hypotenuse = half / 30f64.to_radians().cos();
    let opposite = half / 60f64.to_radians().tan();
    [
        (cx, cy - hypotenuse),
        (cx - half, cy + opposite),
        (cx + half, cy + opposite),
    ]
}

/// Shape drawn for one marker.
#[must_use]
pub fn marker_shape(marker: &MarkerDescriptor) -> Shape {
    match marker.shape {
        PointShape::Circle => Shape::Circle(CirclePrimitive {
            cx: marker.x,
            cy: marker.y,
            radius: marker.size,
            fill_color: marker.color,
        }),
        PointShape::Square => Shape::Rect(RectPrimitive::new(
            marker.x - marker.size / 2.0,
            marker.y - marker.size / 2.0,
            marker.size,
            marker.size,
            marker.color,
        )),
        PointShape::Triangle => Shape::Polygon(PolygonPrimitive {
            points: equilateral_triangle(marker.x, marker.y, marker.size).to_vec(),
            fill_color: marker.color,
        }),
    }
}
