use crate::error::{ChartError, ChartResult};

/// Natural cubic spline through a strictly increasing knot set.
///
/// Knot slopes come from a dense `(n+1) x (n+1)` system solved by Gaussian
/// elimination with partial pivoting. Evaluation reproduces every knot exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl SplineInterpolator {
    /// Fits the spline. Needs at least two finite knots with strictly
    /// increasing x; duplicate x values are rejected, never merged.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> ChartResult<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::InvalidData(format!(
                "spline needs as many y values as x values ({} != {})",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(ChartError::InvalidData(
                "spline needs at least two knots".to_owned(),
            ));
        }
        if xs.iter().chain(ys.iter()).any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "spline knots must be finite".to_owned(),
            ));
        }
        if let Some(index) = xs.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::UnsortedKnots { index: index + 1 });
        }

        let slopes = natural_slopes(&xs, &ys)?;
        Ok(Self { xs, ys, slopes })
    }

    /// Fits through `(x, y)` pairs.
    pub fn from_knots(knots: impl IntoIterator<Item = (f64, f64)>) -> ChartResult<Self> {
        let (xs, ys) = knots.into_iter().unzip();
        Self::new(xs, ys)
    }

    #[must_use]
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    #[must_use]
    pub fn knot_count(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn x_span(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluates the spline at `x`.
    ///
    /// The bracketing interval is found by a linear scan from the first knot;
    /// values outside the knot span extrapolate the outermost cubic piece.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        let mut i = 1;
        while i < last && self.xs[i] < x {
            i += 1;
        }

        let dx = self.xs[i] - self.xs[i - 1];
        let dy = self.ys[i] - self.ys[i - 1];
        let t = (x - self.xs[i - 1]) / dx;
        let a = self.slopes[i - 1] * dx - dy;
        let b = -self.slopes[i] * dx + dy;

        (1.0 - t) * self.ys[i - 1] + t * self.ys[i] + t * (1.0 - t) * (a * (1.0 - t) + b * t)
    }
}

/// Builds the augmented natural-spline system and solves it for knot slopes.
fn natural_slopes(xs: &[f64], ys: &[f64]) -> ChartResult<Vec<f64>> {
    let n = xs.len() - 1;
    let mut system = AugmentedMatrix::zeros(n + 1);

    for i in 1..n {
        let inv_left = 1.0 / (xs[i] - xs[i - 1]);
        let inv_right = 1.0 / (xs[i + 1] - xs[i]);
        system.set(i, i - 1, inv_left);
        system.set(i, i, 2.0 * (inv_left + inv_right));
        system.set(i, i + 1, inv_right);
        system.set_rhs(
            i,
            3.0 * ((ys[i] - ys[i - 1]) * inv_left * inv_left
                + (ys[i + 1] - ys[i]) * inv_right * inv_right),
        );
    }

    let inv_first = 1.0 / (xs[1] - xs[0]);
    system.set(0, 0, 2.0 * inv_first);
    system.set(0, 1, inv_first);
    system.set_rhs(0, 3.0 * (ys[1] - ys[0]) * inv_first * inv_first);

    let inv_last = 1.0 / (xs[n] - xs[n - 1]);
    system.set(n, n - 1, inv_last);
    system.set(n, n, 2.0 * inv_last);
    system.set_rhs(n, 3.0 * (ys[n] - ys[n - 1]) * inv_last * inv_last);

    system.solve()
}

/// Row-major `m x (m + 1)` matrix: coefficients plus right-hand side column.
struct AugmentedMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl AugmentedMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * (size + 1)],
        }
    }

    fn stride(&self) -> usize {
        self.size + 1
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        self.cells[row * self.stride() + column]
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        let stride = self.stride();
        self.cells[row * stride + column] = value;
    }

    fn set_rhs(&mut self, row: usize, value: f64) {
        let column = self.size;
        self.set(row, column, value);
    }

    fn swap_rows(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        let stride = self.stride();
        let (low, high) = (first.min(second), first.max(second));
        let (head, tail) = self.cells.split_at_mut(high * stride);
        head[low * stride..(low + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }

    /// Forward elimination with partial pivoting, then back substitution.
    fn solve(mut self) -> ChartResult<Vec<f64>> {
        let m = self.size;

        for k in 0..m {
            let mut pivot_row = k;
            let mut pivot_abs = f64::NEG_INFINITY;
            for row in k..m {
                let candidate = self.get(row, k).abs();
                if candidate > pivot_abs {
                    pivot_row = row;
                    pivot_abs = candidate;
                }
            }
            if !pivot_abs.is_finite() || pivot_abs == 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "spline system is singular at column {k}"
                )));
            }
            self.swap_rows(k, pivot_row);

            let pivot = self.get(k, k);
            for row in k + 1..m {
                let factor = self.get(row, k) / pivot;
                if factor == 0.0 {
                    continue;
                }
                for column in k..=m {
                    let value = self.get(row, column) - self.get(k, column) * factor;
                    self.set(row, column, value);
                }
            }
        }

        let mut solution = vec![0.0; m];
        for i in (0..m).rev() {
            let value = self.get(i, m) / self.get(i, i);
            solution[i] = value;
            for row in 0..i {
                let rhs = self.get(row, m) - self.get(row, i) * value;
                self.set(row, m, rhs);
                self.set(row, i, 0.0);
            }
        }

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_handles_pivot_swap() {
        // [[0, 1 | 2], [1, 0 | 3]] needs a row swap on the first column.
        let mut system = AugmentedMatrix::zeros(2);
        system.set(0, 1, 1.0);
        system.set_rhs(0, 2.0);
        system.set(1, 0, 1.0);
        system.set_rhs(1, 3.0);

        let solution = system.solve().expect("solvable system");
        assert_eq!(solution, vec![3.0, 2.0]);
    }

    #[test]
    fn singular_system_is_reported() {
        let system = AugmentedMatrix::zeros(2);
        assert!(system.solve().is_err());
    }

    #[test]
    fn two_knots_yield_constant_slope() {
        let spline = SplineInterpolator::new(vec![0.0, 4.0], vec![1.0, 9.0]).expect("fit");
        for slope in spline.slopes() {
            assert!((slope - 2.0).abs() <= 1e-12);
        }
        assert!((spline.evaluate(1.0) - 3.0).abs() <= 1e-12);
    }
}
