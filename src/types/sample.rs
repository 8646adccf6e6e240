//! Simulated path matrix.

use crate::types::error::PricingError;

/// A matrix of simulated GBM paths, n_sim rows by n_steps + 1 columns.
///
/// Stored row-major in a single buffer. Column 0 holds the initial price
/// for every row; columns 1..=n_steps hold the simulated prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSample {
    values: Vec<f64>,
    n_cols: usize,
}

impl PathSample {
    /// Allocate `n_sim` paths of `n_steps + 1` points, each starting at `spot`.
    pub(crate) fn with_initial(spot: f64, n_steps: usize, n_sim: usize) -> Self {
        let n_cols = n_steps + 1;
        let mut values = vec![0.0; n_sim * n_cols];
        for row in values.chunks_exact_mut(n_cols) {
            row[0] = spot;
        }
        Self { values, n_cols }
    }

    /// Rebuild a sample from nested rows.
    ///
    /// Every row must have the same length, and that length must cover the
    /// initial price plus at least one step.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, PricingError> {
        let first = rows.first().ok_or(PricingError::EmptyPaths)?;
        let n_cols = first.len();
        if n_cols < 2 {
            return Err(PricingError::ShortPath { len: n_cols });
        }

        let mut values = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(PricingError::RaggedPaths {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Self { values, n_cols })
    }

    #[inline]
    pub fn n_sim(&self) -> usize {
        self.values.len() / self.n_cols
    }

    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_cols - 1
    }

    /// Single path, including its initial price.
    ///
    /// # Panics
    /// If `i >= n_sim()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.n_cols)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        self.values.chunks_exact_mut(self.n_cols)
    }

    /// Values at one time index across all paths.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows().map(|row| row[j]).collect()
    }

    /// Prices at maturity (last column).
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.column(self.n_steps())
    }

    /// Observation times 0, dt, ..., T matching the columns.
    pub fn time_grid(&self, maturity: f64) -> Vec<f64> {
        let n_steps = self.n_steps();
        (0..=n_steps)
            .map(|j| maturity * j as f64 / n_steps as f64)
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}
