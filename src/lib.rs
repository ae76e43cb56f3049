//! chart-layout: numeric layout engine for 2D line/scatter charts.
//!
//! The crate computes axis domains and ticks, fits natural cubic splines
//! through series points, places the legend and negotiates the margins around
//! the plot area. It never draws pixels itself: every pass is emitted through
//! the [`render::DrawSurface`] contract implemented by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartComposer, ComposerConfig};
pub use error::{ChartError, ChartResult};
