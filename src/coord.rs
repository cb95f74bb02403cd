#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An integer coordinate addressing a single cell in an N-dimensional grid.
pub type Coord<const N: usize> = [i64; N];

/// A fractional coordinate, accepted by interpolation and by source/goal registration.
pub type RealCoord<const N: usize> = [f64; N];

/// The size, in cells, of each axis of a grid.
pub type Dims<const N: usize> = [usize; N];

/// The row-major dense index of `coord` within a grid of the given `dims`.
///
/// Panics in debug builds if any axis of `coord` falls outside `[0, dims[i])`; callers
/// are expected to bounds-check first (see [`crate::grid::Grid::in_bounds`]).
#[must_use]
pub fn dense_index<const N: usize>(coord: &Coord<N>, dims: &Dims<N>) -> usize {
    let mut index = 0usize;
    for i in 0..N {
        debug_assert!(coord[i] >= 0 && (coord[i] as usize) < dims[i]);
        index = index * dims[i] + coord[i] as usize;
    }
    index
}

/// The total number of addressable cells for the given `dims`.
#[must_use]
pub fn volume<const N: usize>(dims: &Dims<N>) -> usize {
    dims.iter().product()
}

/// Round a real coordinate to its nearest integer coordinate, component-wise.
#[must_use]
pub fn round<const N: usize>(coord: &RealCoord<N>) -> Coord<N> {
    let mut out = [0i64; N];
    for i in 0..N {
        out[i] = coord[i].round() as i64;
    }
    out
}

/// Widen an integer coordinate to a real one.
#[must_use]
pub fn to_real<const N: usize>(coord: &Coord<N>) -> RealCoord<N> {
    let mut out = [0.0f64; N];
    for i in 0..N {
        out[i] = coord[i] as f64;
    }
    out
}

/// A vector norm used for grid distance queries.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
    /// Manhattan / taxicab distance.
    L1,
    /// Euclidean distance.
    L2,
    /// Chebyshev / chessboard distance.
    LInf,
}

impl Norm {
    /// Combine per-axis absolute differences according to this norm.
    #[must_use]
    pub fn combine(&self, per_axis: impl Iterator<Item = f64>) -> f64 {
        match self {
            Norm::L1 => per_axis.sum(),
            Norm::L2 => per_axis.map(|d| d * d).sum::<f64>().sqrt(),
            Norm::LInf => per_axis.fold(0.0, f64::max),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dense_index_row_major() {
        let dims: Dims<2> = [3, 4];
        assert_eq!(dense_index(&[0, 0], &dims), 0);
        assert_eq!(dense_index(&[0, 1], &dims), 1);
        assert_eq!(dense_index(&[1, 0], &dims), 4);
        assert_eq!(dense_index(&[2, 3], &dims), 11);
    }

    #[test]
    fn norm_combine() {
        let d = [3.0, 4.0];
        assert_eq!(Norm::L1.combine(d.iter().copied()), 7.0);
        assert_eq!(Norm::L2.combine(d.iter().copied()), 5.0);
        assert_eq!(Norm::LInf.combine(d.iter().copied()), 4.0);
    }
}
