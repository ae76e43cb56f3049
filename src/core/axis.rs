use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{LinearScale, SeriesPath};
use crate::error::ChartResult;

/// Upper bound on generated ticks; protects against tiny intervals on wide domains.
pub const MAX_TICK_COUNT: usize = 10_000;

/// Tick count targeted when the axis has no explicit interval.
pub const AUTO_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    X,
    Y,
}

impl AxisOrientation {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::X => "axis axis--x",
            Self::Y => "axis axis--y",
        }
    }
}

/// Parts of the axis a host may hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisDisplay {
    #[serde(default)]
    pub hide_title: bool,
    #[serde(default)]
    pub hide_axis_line: bool,
    /// Gridlines drawn across the plot area.
    #[serde(default)]
    pub hide_tick_line: bool,
    /// Short marks on the axis line.
    #[serde(default)]
    pub hide_tick_mark: bool,
    #[serde(default)]
    pub hide_tick_label: bool,
}

/// One chart axis: data domain, pixel range and tick values.
///
/// The domain is kept ordered (`min <= max`) and only widens between
/// [`Axis::reset_domain`] calls. Ticks are recomputed on every domain change.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orientation: AxisOrientation,
    name: String,
    unit: String,
    title: Option<String>,
    initial_domain: (f64, f64),
    domain: (f64, f64),
    range: (f64, f64),
    tick_interval: f64,
    extra_space: f64,
    display: AxisDisplay,
    ticks: SmallVec<[f64; 16]>,
}

impl Axis {
    #[must_use]
    pub fn new(
        orientation: AxisOrientation,
        name: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            orientation,
            name: name.into(),
            unit: unit.into(),
            title: None,
            initial_domain: (0.0, 0.0),
            domain: (0.0, 0.0),
            range: (0.0, 0.0),
            tick_interval: 0.0,
            extra_space: 0.0,
            display: AxisDisplay::default(),
            ticks: SmallVec::new(),
        }
        .with_ticks_recomputed()
    }

    #[must_use]
    pub fn x(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::new(AxisOrientation::X, name, unit)
    }

    #[must_use]
    pub fn y(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::new(AxisOrientation::Y, name, unit)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: f64) -> Self {
        self.tick_interval = tick_interval;
        self.with_ticks_recomputed()
    }

    /// Padding added to the candidate maximum before it is rounded.
    #[must_use]
    pub fn with_extra_space(mut self, extra_space: f64) -> Self {
        self.extra_space = extra_space;
        self
    }

    /// Sets the domain every rebuild starts widening from.
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.initial_domain = ordered(min, max);
        self.domain = self.initial_domain;
        self.with_ticks_recomputed()
    }

    #[must_use]
    pub fn with_display(mut self, display: AxisDisplay) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    pub(crate) fn set_orientation(&mut self, orientation: AxisOrientation) {
        self.orientation = orientation;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Explicit title, else `"name (unit)"`, `"name"` or empty.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(title) = self.title.as_ref().filter(|title| !title.is_empty()) {
            return title.clone();
        }
        match (self.name.is_empty(), self.unit.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.name.clone(),
            (true, false) => format!("({})", self.unit),
            (false, false) => format!("{} ({})", self.name, self.unit),
        }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn initial_domain(&self) -> (f64, f64) {
        self.initial_domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    #[must_use]
    pub fn extra_space(&self) -> f64 {
        self.extra_space
    }

    #[must_use]
    pub fn display(&self) -> AxisDisplay {
        self.display
    }

    pub fn set_display(&mut self, display: AxisDisplay) {
        self.display = display;
    }

    pub fn set_tick_interval(&mut self, tick_interval: f64) {
        self.tick_interval = tick_interval;
        self.compute_ticks();
    }

    pub fn set_extra_space(&mut self, extra_space: f64) {
        self.extra_space = extra_space;
    }

    /// Replaces the domain outright, swapping an inverted pair. The new pair
    /// is also the domain that rebuilds reset to before widening.
    pub fn set_domain(&mut self, min: f64, max: f64) {
        self.initial_domain = ordered(min, max);
        self.domain = self.initial_domain;
        self.compute_ticks();
    }

    pub fn set_range(&mut self, range_start: f64, range_end: f64) {
        self.range = (range_start, range_end);
    }

    /// Restores the configured starting domain.
    pub fn reset_domain(&mut self) {
        self.domain = self.initial_domain;
        self.compute_ticks();
    }

    /// Grows the domain to cover the candidates.
    ///
    /// The maximum is padded by `extra_space` then rounded half-up to an
    /// integer: `floor(max + extra_space + 0.5)`. The minimum is used as is.
    pub fn widen_domain(&mut self, min_candidate: f64, max_candidate: f64) {
        if !min_candidate.is_finite() || !max_candidate.is_finite() {
            warn!(
                min_candidate,
                max_candidate, "ignoring non-finite axis domain candidate"
            );
            return;
        }

        let padded_max = (max_candidate + self.extra_space + 0.5).floor();
        let (min, max) = self.domain;
        self.domain = ordered(min.min(min_candidate), max.max(padded_max));
        trace!(
            orientation = ?self.orientation,
            min = self.domain.0,
            max = self.domain.1,
            "widen axis domain"
        );
        self.compute_ticks();
    }

    /// Widens with a series' x extremes (X axis) or y extremes (Y axis).
    pub fn widen_with_series(&mut self, series: &SeriesPath) {
        let extent = match self.orientation {
            AxisOrientation::X => series.x_extent(),
            AxisOrientation::Y => series.y_extent(),
        };
        if let Some((min, max)) = extent {
            self.widen_domain(min, max);
        }
    }

    /// Linear domain → range map; NaN or infinite for a zero-span domain.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        let (min, max) = self.domain;
        let (range_lo, range_hi) = self.range;
        range_lo + (value - min) / (max - min) * (range_hi - range_lo)
    }

    /// Checked form of [`Axis::scale`]; fails on a zero-span domain.
    pub fn linear_scale(&self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain, self.range)
    }

    /// Values to draw: the explicit ticks, else round-number ticks over the domain.
    #[must_use]
    pub fn display_ticks(&self) -> Vec<f64> {
        if !self.ticks.is_empty() {
            return self.ticks.to_vec();
        }
        nice_ticks(self.domain.0, self.domain.1, AUTO_TICK_COUNT)
    }

    /// Formats a tick value with the precision of the domain's round-number step.
    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        let step = tick_increment(self.domain.0, self.domain.1, AUTO_TICK_COUNT);
        format_tick_label(value, step)
    }

    fn with_ticks_recomputed(mut self) -> Self {
        self.compute_ticks();
        self
    }

    fn compute_ticks(&mut self) {
        self.ticks.clear();
        let interval = self.tick_interval;
        if !interval.is_finite() || interval <= 0.0 {
            return;
        }

        let (min, max) = self.domain;
        for index in 0..MAX_TICK_COUNT {
            let tick = min + interval * index as f64;
            if tick > max {
                break;
            }
            self.ticks.push(tick);
        }
        if self.ticks.len() == MAX_TICK_COUNT {
            warn!(
                interval,
                min,
                max,
                limit = MAX_TICK_COUNT,
                "tick interval too small for domain, ticks truncated"
            );
        }

        if matches!(self.ticks.last(), Some(&last) if last < max) {
            self.ticks.push(max);
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

/// Round-number step (1, 2 or 5 times a power of ten) splitting the span into
/// roughly `count` parts.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if !span.is_finite() || span == 0.0 || count == 0 {
        return 1.0;
    }

    let raw = span / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Round-number ticks inside `[start, stop]`.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (start, stop) = ordered(start, stop);
    let step = tick_increment(start, stop, count);
    // Integer multiples keep ticks free of accumulated drift.
    let ticks: Vec<f64> = if step >= 1.0 {
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|index| index as f64 * step).collect()
    } else {
        let inverse = (1.0 / step).round();
        let first = (start * inverse).ceil() as i64;
        let last = (stop * inverse).floor() as i64;
        (first..=last).map(|index| index as f64 / inverse).collect()
    };
    ticks.into_iter().take(MAX_TICK_COUNT).collect()
}

/// Fixed-point label with as many decimals as `step` needs.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        0
    };
    let label = format!("{value:.decimals$}");
    if label.starts_with('-') && label[1..].chars().all(|ch| ch == '0' || ch == '.') {
        label[1..].to_owned()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_increment_picks_round_steps() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_increment(0.0, 18.0, 10), 2.0);
        assert_eq!(tick_increment(0.0, 45.0, 10), 5.0);
    }

    #[test]
    fn nice_ticks_cover_domain_on_round_values() {
        assert_eq!(
            nice_ticks(0.0, 18.0, 10),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]
        );
        assert_eq!(nice_ticks(0.0, 0.5, 5), vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(nice_ticks(3.0, 3.0, 10), vec![3.0]);
    }

    #[test]
    fn tick_labels_follow_step_precision() {
        assert_eq!(format_tick_label(6.0, 1.0), "6");
        assert_eq!(format_tick_label(0.25, 0.05), "0.25");
        assert_eq!(format_tick_label(-0.0, 1.0), "0");
        assert_eq!(format_tick_label(-3.0, 1.0), "-3");
    }
}
