use rand::{seq::SliceRandom, Rng};

use crate::{grid::PercolationGrid, stats, Error, Result};

////////////////////////////////////////////////////////////////////////////////

const CONFIDENCE_95: f64 = 1.96;

/// Percolation thresholds measured over a series of independent Monte Carlo
/// trials.
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on fresh `n`-by-`n` grids, drawing
    /// randomness from the thread-local generator.
    pub fn run(n: usize, trials: usize) -> Result<Self> {
        Self::run_with(n, trials, &mut rand::thread_rng())
    }

    /// Runs `trials` independent trials on fresh `n`-by-`n` grids.
    ///
    /// Every trial opens the sites of its grid in a freshly shuffled random
    /// order until the grid percolates, then records the fraction of sites
    /// open at that moment. Shuffling the full index list once keeps every
    /// still-blocked site equally likely at each step, with no redrawing of
    /// already-open sites.
    pub fn run_with<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("grid side"));
        }
        if trials == 0 {
            return Err(Error::InvalidArgument("trial count"));
        }
        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            thresholds.push(Self::trial(n, rng)?);
        }
        Ok(Self { thresholds })
    }

    fn trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
        let mut grid = PercolationGrid::new(n)?;
        let mut order: Vec<usize> = (0..n * n).collect();
        order.shuffle(rng);

        for site in order {
            grid.open(site / n, site % n)?;
            if grid.percolates() {
                break;
            }
        }
        Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds)
    }

    /// Sample standard deviation of the recorded thresholds; NaN for a
    /// single-trial run.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval around the mean.
    pub fn confidence_low(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval around the mean.
    pub fn confidence_high(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    /// The recorded thresholds, one per completed trial.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}
