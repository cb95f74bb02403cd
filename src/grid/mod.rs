mod periodic;

pub use periodic::PeriodicGrid;

use crate::cell::Cell;
use crate::coord::{dense_index, volume, Coord, Dims, Norm, RealCoord};
use crate::error::{Error, Result};
use fxhash::FxHasher;
use indexmap::IndexMap;
use num_traits::Float;
use std::hash::BuildHasherDefault;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Behavior shared by [`Grid`] and [`PeriodicGrid`], so that [`crate::engine::SearchEngine`]
/// can be written once and driven by either topology.
pub trait GridLike<const N: usize, C: Float> {
    fn dims(&self) -> &Dims<N>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn cell(&self, index: usize) -> &Cell<N, C>;
    fn cell_mut(&mut self, index: usize) -> &mut Cell<N, C>;
    fn index_of(&self, coord: &Coord<N>) -> Option<usize>;
    fn in_bounds(&self, coord: &Coord<N>) -> bool;
    /// Dense indices of the navigable axis-neighbors of `index`.
    fn neighbors(&self, index: usize) -> Vec<usize>;
    fn distance(&self, a: &Coord<N>, b: &Coord<N>, norm: Norm) -> f64;
    /// `(dense index, weight)` pairs for the corners of the hypercube enclosing `q`.
    fn hypercube_corners_with_weights(&self, q: &RealCoord<N>) -> Vec<(usize, f64)>;

    /// Restore every non-obstacle cell to its initial (Far, +inf, None) state.
    fn reset(&mut self) {
        for i in 0..self.len() {
            self.cell_mut(i).reset();
        }
    }

    /// Weighted-average interpolation of `cost` at a fractional coordinate, renormalized
    /// over whichever hypercube corners are present and non-obstacle.
    fn interpolate(&self, q: &RealCoord<N>) -> C {
        let corners = self.hypercube_corners_with_weights(q);
        let mut weight_sum = 0.0f64;
        let mut value_sum = 0.0f64;
        for (index, w) in corners {
            let cell = self.cell(index);
            if cell.is_obstacle() {
                continue;
            }
            weight_sum += w;
            value_sum += w * cell.cost().to_f64().unwrap_or(f64::INFINITY);
        }
        if weight_sum <= 0.0 {
            C::infinity()
        } else {
            C::from(value_sum / weight_sum).unwrap_or_else(C::infinity)
        }
    }

    /// True iff every present, non-obstacle corner of the hypercube enclosing `q` is Frozen.
    fn all_corners_frozen(&self, q: &RealCoord<N>) -> bool {
        use crate::cell::CellState;
        self.hypercube_corners_with_weights(q).iter().all(|(i, _)| {
            let cell = self.cell(*i);
            cell.is_obstacle() || cell.state() == CellState::Frozen
        })
    }
}

/// Storage for a [`Grid`]'s cells: a fully populated row-major array for common rectangular
/// use, or a sparse map for grids with a large nominal volume but few populated cells.
enum CellStore<const N: usize, C: Float> {
    Dense,
    Sparse(FxIndexMap<Coord<N>, usize>),
}

/// An N-dimensional regular grid of cells, with rectangular (non-wrapping) boundaries.
///
/// Use [`PeriodicGrid`] for toroidal boundary conditions on any subset of axes.
pub struct Grid<const N: usize, C: Float> {
    dims: Dims<N>,
    cells: Vec<Cell<N, C>>,
    store: CellStore<N, C>,
}

impl<const N: usize, C: Float> Grid<N, C> {
    /// A dense grid with every cell present and free (non-obstacle).
    #[must_use]
    pub fn new(dims: Dims<N>) -> Self {
        let n = volume(&dims);
        let mut cells = Vec::with_capacity(n);
        let mut coord = [0i64; N];
        for idx in 0..n {
            let mut rem = idx;
            for i in (0..N).rev() {
                coord[i] = (rem % dims[i]) as i64;
                rem /= dims[i];
            }
            cells.push(Cell::new(coord, false));
        }
        Self {
            dims,
            cells,
            store: CellStore::Dense,
        }
    }

    /// An initially-empty grid backed by a sparse coordinate index, for use when only a
    /// small fraction of the nominal volume will ever be populated via [`Grid::add_cell`].
    #[must_use]
    pub fn new_sparse(dims: Dims<N>) -> Self {
        Self {
            dims,
            cells: Vec::new(),
            store: CellStore::Sparse(FxIndexMap::default()),
        }
    }

    /// Insert or replace the cell at `cell.coords()`. Only meaningful for sparse grids;
    /// dense grids are fully populated at construction (use [`Grid::set_obstacle`] instead).
    pub fn add_cell(&mut self, cell: Cell<N, C>) -> Result<()> {
        if !self.in_bounds(cell.coords()) {
            return Err(Error::OutOfBounds {
                coord: cell.coords().to_vec(),
            });
        }
        match &mut self.store {
            CellStore::Dense => {
                let idx = dense_index(cell.coords(), &self.dims);
                self.cells[idx] = cell;
            }
            CellStore::Sparse(map) => {
                let coords = *cell.coords();
                if let Some(&idx) = map.get(&coords) {
                    self.cells[idx] = cell;
                } else {
                    let idx = self.cells.len();
                    self.cells.push(cell);
                    map.insert(coords, idx);
                }
            }
        }
        Ok(())
    }

    /// Mark the cell at `coord` as an obstacle (or not). Fails with [`Error::NotFound`] for
    /// a sparse grid that has no cell at `coord` yet.
    pub fn set_obstacle(&mut self, coord: &Coord<N>, obstacle: bool) -> Result<()> {
        let idx = self.index_of(coord).ok_or_else(|| Error::NotFound {
            coord: coord.to_vec(),
        })?;
        self.cells[idx].obstacle = obstacle;
        Ok(())
    }

    /// Look up the cell at `coord`.
    pub fn get(&self, coord: &Coord<N>) -> Result<&Cell<N, C>> {
        self.index_of(coord)
            .map(|i| &self.cells[i])
            .ok_or_else(|| Error::NotFound {
                coord: coord.to_vec(),
            })
    }

    #[must_use]
    pub fn has(&self, coord: &Coord<N>) -> bool {
        self.index_of(coord).is_some()
    }
}

impl<const N: usize, C: Float> GridLike<N, C> for Grid<N, C> {
    fn dims(&self) -> &Dims<N> {
        &self.dims
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, index: usize) -> &Cell<N, C> {
        &self.cells[index]
    }

    fn cell_mut(&mut self, index: usize) -> &mut Cell<N, C> {
        &mut self.cells[index]
    }

    fn index_of(&self, coord: &Coord<N>) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        match &self.store {
            CellStore::Dense => Some(dense_index(coord, &self.dims)),
            CellStore::Sparse(map) => map.get(coord).copied(),
        }
    }

    fn in_bounds(&self, coord: &Coord<N>) -> bool {
        (0..N).all(|i| coord[i] >= 0 && (coord[i] as usize) < self.dims[i])
    }

    /// Each axis contributes at most one entry per side: an axis with neither side in
    /// bounds contributes nothing, rather than duplicating the sole in-bounds side.
    fn neighbors(&self, index: usize) -> Vec<usize> {
        let coord = *self.cells[index].coords();
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
        norm.combine((0..N).map(|i| (a[i] - b[i]).abs() as f64))
    }

    fn hypercube_corners_with_weights(&self, q: &RealCoord<N>) -> Vec<(usize, f64)> {
        let mut base = [0i64; N];
        let mut frac = [0.0f64; N];
        for i in 0..N {
            let max_base = self.dims[i] as i64 - 2;
            let b = q[i].floor() as i64;
            let b = b.clamp(0, max_base.max(0));
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
            if let Some(idx) = self.index_of(&coord) {
                out.push((idx, weight));
            }
        }
        out
    }
}
