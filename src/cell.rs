#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use num_traits::Float;

/// The propagation state of a single cell, as tracked by a [`crate::engine::SearchEngine`] run.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not yet visited by the current run.
    Far,
    /// Tentative cost assigned; present in the frontier.
    Front,
    /// Cost finalized for the current run.
    Frozen,
}

/// A single addressable point of a [`crate::grid::Grid`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Cell<const N: usize, C: Float> {
    pub(crate) coords: Coord<N>,
    pub(crate) state: CellState,
    pub(crate) cost: C,
    pub(crate) parent: Option<usize>,
    pub(crate) obstacle: bool,
}

impl<const N: usize, C: Float> Cell<N, C> {
    /// Create a new, unvisited cell at `coords`.
    #[must_use]
    pub fn new(coords: Coord<N>, obstacle: bool) -> Self {
        Self {
            coords,
            state: CellState::Far,
            cost: C::infinity(),
            parent: None,
            obstacle,
        }
    }

    #[inline]
    #[must_use]
    pub fn coords(&self) -> &Coord<N> {
        &self.coords
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn cost(&self) -> C {
        self.cost
    }

    /// The dense index of the cell this one was reached from, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    pub(crate) fn reset(&mut self) {
        if !self.obstacle {
            self.state = CellState::Far;
            self.cost = C::infinity();
            self.parent = None;
        }
    }
}
