use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, join_all};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisOrientation, Point, SeriesPath};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawSurface;

use super::ChartComposer;

/// Stable identifier of a series inside one composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// `{x, y}` record as delivered by JSON data sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyRecord {
    pub x: f64,
    pub y: f64,
}

/// Payload produced by an asynchronous series source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Pairs(Vec<[f64; 2]>),
    Records(Vec<XyRecord>),
}

impl SeriesData {
    /// Accepts either `[[x, y], ...]` or `[{"x": .., "y": ..}, ...]`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse series data: {e}")))
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        match self {
            Self::Pairs(pairs) => pairs.into_iter().map(Point::from).collect(),
            Self::Records(records) => records
                .into_iter()
                .map(|record| Point::new(record.x, record.y))
                .collect(),
        }
    }
}

/// Accepted shapes of a synchronous series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    Path(SeriesPath),
    Points(Vec<Point>),
    Pairs(Vec<[f64; 2]>),
}

impl SeriesInput {
    /// Resolves into a series; empty or non-finite input yields `None`.
    ///
    /// A ready-made path keeps its own name unless that name is empty.
    #[must_use]
    pub fn into_series(self, name: &str) -> Option<SeriesPath> {
        let series = match self {
            Self::Path(mut path) => {
                if path.name.is_empty() {
                    path.name = name.to_owned();
                }
                path
            }
            Self::Points(points) => SeriesPath::new(points, name),
            Self::Pairs(pairs) => {
                SeriesPath::new(pairs.into_iter().map(Point::from).collect(), name)
            }
        };

        if series.is_empty() || !series.points().iter().all(Point::is_finite) {
            return None;
        }
        Some(series)
    }
}

impl From<SeriesPath> for SeriesInput {
    fn from(path: SeriesPath) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<Point>> for SeriesInput {
    fn from(points: Vec<Point>) -> Self {
        Self::Points(points)
    }
}

impl From<Vec<[f64; 2]>> for SeriesInput {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Self::Pairs(pairs)
    }
}

impl From<SeriesData> for SeriesInput {
    fn from(data: SeriesData) -> Self {
        Self::Points(data.into_points())
    }
}

/// Future resolving to the data of an asynchronous series.
pub type SeriesSource = LocalBoxFuture<'static, Option<SeriesData>>;

pub(super) struct PendingSeries {
    id: SeriesId,
    name: String,
    source: SeriesSource,
}

impl<S: DrawSurface> ChartComposer<S> {
    /// Adds a series and widens both axes with it.
    ///
    /// Empty or malformed input is ignored and returns `None`. Triggers a
    /// rebuild when mounted.
    pub fn add_series(&mut self, name: &str, input: impl Into<SeriesInput>) -> Option<SeriesId> {
        let Some(series) = input.into().into_series(name) else {
            warn!(series = name, "ignoring empty or malformed series input");
            return None;
        };

        let id = self.allocate_series_id();
        self.insert_series(id, series);
        self.refresh();
        Some(id)
    }

    /// Registers a series whose data arrives later.
    ///
    /// Nothing is drawn for it until [`ChartComposer::resolve_pending`] runs.
    /// The returned id is reserved even if the source yields no data.
    pub fn add_series_async<F>(&mut self, name: impl Into<String>, source: F) -> SeriesId
    where
        F: Future<Output = Option<SeriesData>> + 'static,
    {
        let id = self.allocate_series_id();
        let name = name.into();
        debug!(series = id.value(), name = %name, "registered pending series");
        self.pending.push(PendingSeries {
            id,
            name,
            source: source.boxed_local(),
        });
        id
    }

    /// Number of registered sources not yet resolved.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Awaits every pending source, then adds the arrived series in
    /// registration order and rebuilds exactly once.
    ///
    /// Sources yielding `None` or empty data contribute no series. Returns
    /// the number of series added.
    pub async fn resolve_pending(&mut self) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let pending = std::mem::take(&mut self.pending);
        let (labels, sources): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .map(|entry| ((entry.id, entry.name), entry.source))
            .unzip();
        let arrived = join_all(sources).await;

        let mut added = 0;
        for ((id, name), data) in labels.into_iter().zip(arrived) {
            let series = data.and_then(|data| SeriesInput::from(data).into_series(&name));
            match series {
                Some(series) => {
                    self.insert_series(id, series);
                    added += 1;
                }
                None => warn!(series = id.value(), name = %name, "async series yielded no data"),
            }
        }

        debug!(added, "resolved pending series");
        self.refresh();
        added
    }

    fn allocate_series_id(&mut self) -> SeriesId {
        let id = SeriesId(self.next_series_id);
        self.next_series_id += 1;
        id
    }

    fn insert_series(&mut self, id: SeriesId, series: SeriesPath) {
        for orientation in [AxisOrientation::X, AxisOrientation::Y] {
            let mut axis = self.take_axis(orientation);
            axis.widen_with_series(&series);
            self.put_axis(axis);
        }
        debug!(
            series = id.value(),
            name = %series.name,
            points = series.points().len(),
            "added series"
        );
        self.series.insert(id, series);
    }
}
