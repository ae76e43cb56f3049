pub mod axis;
pub mod scale;
pub mod series;
pub mod spline;
pub mod types;

pub use axis::{
    AUTO_TICK_COUNT, Axis, AxisDisplay, AxisOrientation, MAX_TICK_COUNT, format_tick_label,
    nice_ticks, tick_increment,
};
pub use scale::LinearScale;
pub use series::{
    CURVE_SAMPLE_STEP_PX, CurveMode, MarkerDescriptor, SeriesGeometry, SeriesPath,
    format_path_data, parse_path_data,
};
pub use spline::SplineInterpolator;
pub use types::{BoxSize, Margin, Point, PointShape};
