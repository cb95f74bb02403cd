use super::{Grid, GridLike};
use crate::cell::Cell;
use crate::coord::{Coord, Dims, Norm, RealCoord};
use num_traits::Float;

/// A [`Grid`] with toroidal (wraparound) boundary conditions on a chosen subset of axes.
///
/// Non-periodic axes behave exactly as in a plain [`Grid`]: out-of-range coordinates are
/// simply out of bounds.
pub struct PeriodicGrid<const N: usize, C: Float> {
    inner: Grid<N, C>,
    periodic: [bool; N],
}

impl<const N: usize, C: Float> PeriodicGrid<N, C> {
    #[must_use]
    pub fn new(dims: Dims<N>, periodic: [bool; N]) -> Self {
        Self {
            inner: Grid::new(dims),
            periodic,
        }
    }

    #[must_use]
    pub fn periodic_axes(&self) -> &[bool; N] {
        &self.periodic
    }

    /// Reduce each periodic axis of `coord` into `[0, dims[i])`.
    #[must_use]
    pub fn normalize(&self, coord: &Coord<N>) -> Coord<N> {
        let dims = self.inner.dims();
        let mut out = *coord;
        for i in 0..N {
            if self.periodic[i] {
                out[i] = coord[i].rem_euclid(dims[i] as i64);
            }
        }
        out
    }

    fn normalize_real(&self, q: &RealCoord<N>) -> RealCoord<N> {
        let dims = self.inner.dims();
        let mut out = *q;
        for i in 0..N {
            if self.periodic[i] {
                let d = dims[i] as f64;
                out[i] = q[i].rem_euclid(d);
            }
        }
        out
    }

    pub fn set_obstacle(&mut self, coord: &Coord<N>, obstacle: bool) -> crate::error::Result<()> {
        let n = self.normalize(coord);
        self.inner.set_obstacle(&n, obstacle)
    }

    pub fn get(&self, coord: &Coord<N>) -> crate::error::Result<&Cell<N, C>> {
        self.inner.get(&self.normalize(coord))
    }

    #[must_use]
    pub fn has(&self, coord: &Coord<N>) -> bool {
        self.inner.has(&self.normalize(coord))
    }
}

impl<const N: usize, C: Float> GridLike<N, C> for PeriodicGrid<N, C> {
    fn dims(&self) -> &Dims<N> {
        self.inner.dims()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn cell(&self, index: usize) -> &Cell<N, C> {
        self.inner.cell(index)
    }

    fn cell_mut(&mut self, index: usize) -> &mut Cell<N, C> {
        self.inner.cell_mut(index)
    }

    fn index_of(&self, coord: &Coord<N>) -> Option<usize> {
        self.inner.index_of(&self.normalize(coord))
    }

    /// A periodic axis is always in bounds; a non-periodic axis is checked as usual.
    fn in_bounds(&self, coord: &Coord<N>) -> bool {
        let dims = self.inner.dims();
        (0..N).all(|i| {
            self.periodic[i] || (coord[i] >= 0 && (coord[i] as usize) < dims[i])
        })
    }

    /// Both sides of every axis always resolve after wraparound on periodic axes, so no
    /// special-casing against the duplicate-neighbor bug is needed here.
    fn neighbors(&self, index: usize) -> Vec<usize> {
        let coord = *self.inner.cell(index).coords();
        let mut out = Vec::with_capacity(2 * N);
        for i in 0..N {
            let mut minus = coord;
            minus[i] -= 1;
            if let Some(idx) = self.index_of(&minus) {
                out.push(idx);
            }
            let mut plus = coord;
            plus[i] += 1;
            if let Some(idx) = self.index_of(&plus) {
                out.push(idx);
            }
        }
        out
    }

    fn distance(&self, a: &Coord<N>, b: &Coord<N>, norm: Norm) -> f64 {
        let dims = self.inner.dims();
        norm.combine((0..N).map(|i| {
            let d = (a[i] - b[i]).unsigned_abs() as f64;
            if self.periodic[i] {
                d.min(dims[i] as f64 - d)
            } else {
                d
            }
        }))
    }

    fn hypercube_corners_with_weights(&self, q: &RealCoord<N>) -> Vec<(usize, f64)> {
        let q = self.normalize_real(q);
        let dims = self.inner.dims();
        let mut base = [0i64; N];
        let mut frac = [0.0f64; N];
        for i in 0..N {
            let max_base = if self.periodic[i] {
                dims[i] as i64 - 1
            } else {
                (dims[i] as i64 - 2).max(0)
            };
            let b = q[i].floor() as i64;
            let b = b.clamp(0, max_base);
            base[i] = b;
            frac[i] = (q[i] - b as f64).clamp(0.0, 1.0);
        }
        let corner_count = 1usize << N;
        let mut out = Vec::with_capacity(corner_count);
        for k in 0..corner_count {
            let mut coord = [0i64; N];
            let mut weight = 1.0f64;
            for i in 0..N {
                let bit = (k >> i) & 1;
                coord[i] = base[i] + bit as i64;
                weight *= if bit == 1 { frac[i] } else { 1.0 - frac[i] };
            }
            let normalized = self.normalize(&coord);
            if let Some(idx) = self.inner.index_of(&normalized) {
                out.push((idx, weight));
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn periodic_distance_matches_minimum_wraparound_shift() {
        let grid: PeriodicGrid<2, f64> = PeriodicGrid::new([10, 8], [true, true]);
        assert_eq!(grid.distance(&[1, 1], &[9, 7], Norm::L1), 4.0);
        assert_eq!(grid.distance(&[1, 1], &[9, 7], Norm::L2), 8.0f64.sqrt());
    }

    #[test]
    fn periodic_in_bounds_always_true_on_periodic_axis() {
        let grid: PeriodicGrid<2, f64> = PeriodicGrid::new([10, 8], [true, false]);
        assert!(grid.in_bounds(&[-3, 2]));
        assert!(!grid.in_bounds(&[3, -2]));
        assert!(!grid.in_bounds(&[3, 8]));
    }

    #[test]
    fn periodic_neighbors_both_sides_always_resolve() {
        let grid: PeriodicGrid<2, f64> = PeriodicGrid::new([10, 8], [true, true]);
        let idx = grid.index_of(&[0, 0]).unwrap();
        assert_eq!(grid.neighbors(idx).len(), 4);
    }
}
