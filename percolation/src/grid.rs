use std::fmt::Display;

use crate::{dsu::DisjointSet, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// An n-by-n lattice of initially blocked sites.
///
/// Connectivity between open sites is tracked by a disjoint-set over
/// `n*n + 2` elements: one per site plus two virtual sentinels standing for
/// the top and bottom boundary rows. Opening a top-row site joins it with the
/// top sentinel and a bottom-row site with the bottom one, so `percolates` is
/// a single connectivity query instead of a scan over the boundary rows.
pub struct PercolationGrid {
    side: usize,
    open: Vec<bool>,
    open_sites: usize,
    components: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl PercolationGrid {
    /// Creates an `n`-by-`n` grid with every site blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("grid side"));
        }
        Ok(Self {
            side: n,
            open: vec![false; n * n],
            open_sites: 0,
            components: DisjointSet::new(n * n + 2)?,
            virtual_top: n * n,
            virtual_bottom: n * n + 1,
        })
    }

    /// Returns the side length of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.side || col >= self.side {
            return Err(Error::OutOfRange {
                row,
                col,
                side: self.side,
            });
        }
        Ok(())
    }

    /// Opens the site at (`row`, `col`), joining it with every already-open
    /// orthogonal neighbour and with the boundary sentinels when the site
    /// lies on the top or bottom row. Opening an already-open site changes
    /// nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        let site = self.index(row, col);
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_sites += 1;

        if row > 0 && self.open[self.index(row - 1, col)] {
            self.components.union(site, self.index(row - 1, col));
        }
        if row + 1 < self.side && self.open[self.index(row + 1, col)] {
            self.components.union(site, self.index(row + 1, col));
        }
        if col > 0 && self.open[self.index(row, col - 1)] {
            self.components.union(site, self.index(row, col - 1));
        }
        if col + 1 < self.side && self.open[self.index(row, col + 1)] {
            self.components.union(site, self.index(row, col + 1));
        }

        if row == 0 {
            self.components.union(site, self.virtual_top);
        }
        if row == self.side - 1 {
            self.components.union(site, self.virtual_bottom);
        }
        Ok(())
    }

    /// Returns whether the site at (`row`, `col`) is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.open[self.index(row, col)])
    }

    /// Returns whether the site at (`row`, `col`) is connected to the top
    /// boundary through open sites.
    ///
    /// Once the system percolates, the two sentinels share a component, so a
    /// bottom-row site reachable only from the bottom boundary also reports
    /// full. `percolates` is unaffected.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        let site = self.index(row, col);
        Ok(self.components.connected(site, self.virtual_top))
    }

    /// Returns the number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Returns whether a path of open sites connects the top row to the
    /// bottom row.
    pub fn percolates(&mut self) -> bool {
        self.components
            .connected(self.virtual_top, self.virtual_bottom)
    }
}

impl Display for PercolationGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                if self.open[self.index(row, col)] {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}
