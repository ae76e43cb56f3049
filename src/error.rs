use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: width={width}, height={height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate axis domain: min={min}, max={max}")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("spline knots must have strictly increasing x (violated at index {index})")]
    UnsortedKnots { index: usize },
}
