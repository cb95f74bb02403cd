mod astar;
mod dijkstra;
mod fmm;

pub use astar::{AStarEngine, AStarRule};
pub use dijkstra::{DijkstraEngine, DijkstraRule};
pub use fmm::{FMMEngine, FMMRule};

use crate::cell::CellState;
use crate::coord::{round, Coord, RealCoord};
use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::GridLike;
use num_traits::Float;

/// The per-algorithm part of a search: how to compute a neighbor's tentative cost, and
/// when (if ever) to stop early. Shared bookkeeping — seeding, the frontier, the
/// Far/Front/Frozen state machine — lives in [`SearchEngine`] itself.
pub trait RelaxRule<const N: usize, C: Float, G: GridLike<N, C>> {
    /// The tentative cost of reaching `neighbor` via `current`.
    fn relax(&self, grid: &G, current: usize, neighbor: usize, goals: &[Coord<N>]) -> C;

    /// Whether the engine should stop after having just frozen `frozen`, given the
    /// registered `goals`. The default never stops early.
    fn should_stop(&self, grid: &G, frozen: usize, goals: &[Coord<N>]) -> bool {
        let _ = (grid, frozen, goals);
        false
    }
}

/// Drives a wavefront of cell relaxations outward from one or more sources, delegating the
/// per-step cost rule to a [`RelaxRule`]. Shared by [`DijkstraEngine`], [`AStarEngine`], and
/// [`FMMEngine`].
pub struct SearchEngine<const N: usize, C: Float, G: GridLike<N, C>, R: RelaxRule<N, C, G>> {
    sources: Vec<Coord<N>>,
    goals: Vec<Coord<N>>,
    rule: R,
    frontier: Frontier<C>,
    processed: usize,
    _marker: std::marker::PhantomData<G>,
}

impl<const N: usize, C: Float, G: GridLike<N, C>, R: RelaxRule<N, C, G>> SearchEngine<N, C, G, R> {
    #[must_use]
    pub fn new(rule: R) -> Self {
        Self {
            sources: Vec::new(),
            goals: Vec::new(),
            rule,
            frontier: Frontier::new(),
            processed: 0,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn add_source(&mut self, coord: Coord<N>) {
        self.sources.push(coord);
    }

    pub fn add_goal(&mut self, coord: Coord<N>) {
        self.goals.push(coord);
    }

    /// As [`SearchEngine::add_source`], but for a fractional coordinate, rounded to the
    /// nearest cell.
    pub fn add_source_real(&mut self, coord: RealCoord<N>) {
        self.add_source(round(&coord));
    }

    /// As [`SearchEngine::add_goal`], but for a fractional coordinate, rounded to the
    /// nearest cell.
    pub fn add_goal_real(&mut self, coord: RealCoord<N>) {
        self.add_goal(round(&coord));
    }

    pub fn clear_sources(&mut self) {
        self.sources.clear();
    }

    pub fn clear_goals(&mut self) {
        self.goals.clear();
    }

    #[must_use]
    pub fn goals(&self) -> &[Coord<N>] {
        &self.goals
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Reset the grid, seed the registered sources, and propagate until the frontier is
    /// exhausted or [`RelaxRule::should_stop`] returns `true`.
    pub fn run(&mut self, grid: &mut G) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one source must be registered before running a search".into(),
            ));
        }

        grid.reset();
        self.frontier.clear();
        self.processed = 0;

        let mut seeded = 0usize;
        for source in &self.sources {
            let Some(idx) = grid.index_of(source) else {
                continue;
            };
            if grid.cell(idx).is_obstacle() {
                continue;
            }
            let cell = grid.cell_mut(idx);
            cell.cost = C::zero();
            cell.state = CellState::Front;
            cell.parent = None;
            self.frontier.push(idx, C::zero());
            seeded += 1;
            log::debug!("seeded source at {:?} (index {})", source, idx);
        }

        if seeded == 0 {
            log::warn!("search run with no valid (in-bounds, non-obstacle) source; no cells will be reached");
            return Ok(());
        }

        while let Some((index, cost)) = self.frontier.pop() {
            if grid.cell(index).state() == CellState::Frozen {
                continue; // stale entry
            }
            if grid.cell(index).cost() < cost {
                continue; // stale entry, superseded by a cheaper push
            }

            grid.cell_mut(index).state = CellState::Frozen;
            self.processed += 1;

            if self.rule.should_stop(grid, index, &self.goals) {
                break;
            }

            let neighbors = grid.neighbors(index);
            for neighbor in neighbors {
                if grid.cell(neighbor).is_obstacle() || grid.cell(neighbor).state() == CellState::Frozen {
                    continue;
                }
                let v = self.rule.relax(grid, index, neighbor, &self.goals);
                if !v.is_finite() {
                    continue;
                }
                let improves = match grid.cell(neighbor).state() {
                    CellState::Far => true,
                    _ => v < grid.cell(neighbor).cost(),
                };
                if improves {
                    let ncell = grid.cell_mut(neighbor);
                    ncell.cost = v;
                    ncell.parent = Some(index);
                    ncell.state = CellState::Front;
                    self.frontier.push(neighbor, v);
                    log::trace!("relaxed {} from {} to cost {:?}", neighbor, index, v.to_f64());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::DijkstraRule;
    use crate::grid::Grid;

    #[test]
    fn real_coord_sources_and_goals_round_to_nearest_cell() {
        let mut grid: Grid<2, f64> = Grid::new([5, 5]);
        let mut engine: SearchEngine<2, f64, Grid<2, f64>, DijkstraRule<f64>> =
            SearchEngine::new(DijkstraRule::new(1.0).unwrap());
        engine.add_source_real([0.4, 0.0]);
        engine.add_goal_real([3.6, 0.0]);
        engine.run(&mut grid).unwrap();

        assert_eq!(grid.get(&[0, 0]).unwrap().cost(), 0.0);
        assert_eq!(engine.goals(), &[[4, 0]]);
    }
}
