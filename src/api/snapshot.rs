use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisOrientation, BoxSize, Margin};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawSurface;

use super::{ChartComposer, SeriesId};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub orientation: AxisOrientation,
    pub title: String,
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<f64>,
}

impl From<&Axis> for AxisSnapshot {
    fn from(axis: &Axis) -> Self {
        Self {
            orientation: axis.orientation(),
            title: axis.title(),
            domain: axis.domain(),
            range: axis.range(),
            ticks: axis.display_ticks(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSnapshot {
    pub anchor: (f64, f64),
    pub size: BoxSize,
}

/// Series as drawn by the latest pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: SeriesId,
    pub name: String,
    pub path_data: String,
    pub marker_count: usize,
}

/// Serializable result of the latest rebuild pass, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub full_size: BoxSize,
    pub title_size: BoxSize,
    pub margin: Margin,
    pub plot_size: BoxSize,
    pub rebuild_count: u64,
    pub x_axis: AxisSnapshot,
    pub y_axis: AxisSnapshot,
    pub legend: Option<LegendSnapshot>,
    pub series: Vec<SeriesSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl LayoutSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<S: DrawSurface> ChartComposer<S> {
    /// Snapshot of the latest pass; fails before the first rebuild.
    pub fn snapshot(&self) -> ChartResult<LayoutSnapshot> {
        let pass = self.last_pass.as_ref().ok_or_else(|| {
            ChartError::InvalidData("no layout pass has run; mount the composer first".to_owned())
        })?;
        let (Some(x_axis), Some(y_axis)) = (self.x_axis.as_ref(), self.y_axis.as_ref()) else {
            return Err(ChartError::InvalidData(
                "axes are missing after a layout pass".to_owned(),
            ));
        };

        Ok(LayoutSnapshot {
            full_size: pass.context.full_size,
            title_size: pass.context.title_size,
            margin: pass.context.margin,
            plot_size: pass.context.plot_size,
            rebuild_count: self.rebuild_count,
            x_axis: AxisSnapshot::from(x_axis),
            y_axis: AxisSnapshot::from(y_axis),
            legend: pass.legend_anchor.map(|anchor| LegendSnapshot {
                anchor,
                size: pass.context.legend_size,
            }),
            series: pass.series.clone(),
        })
    }

    /// Serializes the snapshot as a versioned JSON contract.
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
