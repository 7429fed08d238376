#![forbid(unsafe_code)]

use thiserror::Error;

mod dsu;
mod estimator;
mod grid;
mod stats;

pub use dsu::DisjointSet;
pub use estimator::PercolationStats;
pub use grid::PercolationGrid;
pub use stats::{mean, stddev};

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{0} must be greater than zero")]
    InvalidArgument(&'static str),
    #[error("site ({row}, {col}) is out of bounds for a {side}x{side} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        side: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
