use super::{RelaxRule, SearchEngine};
use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::grid::GridLike;
use crate::heuristic::HeuristicStrategy;
use num_traits::Float;

/// `f = g + h` relaxation with a pluggable [`HeuristicStrategy`]. With no goals registered,
/// this degenerates to Dijkstra (`h` is never consulted).
pub struct AStarRule<const N: usize, C: Float> {
    edge_cost: C,
    heuristic: Box<dyn HeuristicStrategy<N>>,
}

impl<const N: usize, C: Float> AStarRule<N, C> {
    pub fn new(edge_cost: C, heuristic: Box<dyn HeuristicStrategy<N>>) -> Result<Self> {
        if edge_cost <= C::zero() {
            return Err(Error::InvalidConfiguration(
                "edge_cost must be positive".into(),
            ));
        }
        Ok(Self {
            edge_cost,
            heuristic,
        })
    }

    /// The registered goal closest to `from` by squared Euclidean distance, ties broken by
    /// earliest registration.
    fn closest_goal<'a>(&self, from: &Coord<N>, goals: &'a [Coord<N>]) -> Option<&'a Coord<N>> {
        let sq_dist = |g: &Coord<N>| -> i64 { (0..N).map(|i| (from[i] - g[i]).pow(2)).sum() };
        let mut best: Option<(&Coord<N>, i64)> = None;
        for goal in goals {
            let d = sq_dist(goal);
            let better = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if better {
                best = Some((goal, d));
            }
        }
        best.map(|(g, _)| g)
    }
}

impl<const N: usize, C: Float, G: GridLike<N, C>> RelaxRule<N, C, G> for AStarRule<N, C> {
    fn relax(&self, grid: &G, current: usize, neighbor: usize, goals: &[Coord<N>]) -> C {
        let g = grid.cell(current).cost() + self.edge_cost;
        let Some(goal) = self.closest_goal(grid.cell(neighbor).coords(), goals) else {
            return g;
        };
        let h = self.heuristic.estimate(grid.cell(neighbor).coords(), goal);
        g + C::from(h).unwrap_or_else(C::zero)
    }

    /// Stop as soon as the just-frozen cell's own coordinates match a registered goal.
    fn should_stop(&self, grid: &G, frozen: usize, goals: &[Coord<N>]) -> bool {
        if goals.is_empty() {
            return false;
        }
        let coords = grid.cell(frozen).coords();
        goals.iter().any(|g| g == coords)
    }
}

/// Goal-directed shortest-path search, terminating as soon as a registered goal is frozen,
/// provided the configured heuristic is admissible.
pub type AStarEngine<const N: usize, C, G> = SearchEngine<N, C, G, AStarRule<N, C>>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::DijkstraRule;
    use crate::grid::Grid;
    use crate::heuristic::Manhattan;

    #[test]
    fn reaches_goal_with_optimal_cost() {
        let mut grid: Grid<2, f64> = Grid::new([5, 5]);
        let mut engine: AStarEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(AStarRule::new(1.0, Box::new(Manhattan::new(1.0).unwrap())).unwrap());
        engine.add_source([0, 0]);
        engine.add_goal([4, 4]);
        engine.run(&mut grid).unwrap();
        assert_eq!(grid.get(&[4, 4]).unwrap().cost(), 8.0);
    }

    #[test]
    fn explores_no_more_cells_than_dijkstra() {
        let mut grid_a: Grid<2, f64> = Grid::new([5, 5]);
        let mut astar: AStarEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(AStarRule::new(1.0, Box::new(Manhattan::new(1.0).unwrap())).unwrap());
        astar.add_source([0, 0]);
        astar.add_goal([4, 4]);
        astar.run(&mut grid_a).unwrap();

        let mut grid_b: Grid<2, f64> = Grid::new([5, 5]);
        let mut dijkstra: SearchEngine<2, f64, Grid<2, f64>, DijkstraRule<f64>> =
            SearchEngine::new(DijkstraRule::new(1.0).unwrap());
        dijkstra.add_source([0, 0]);
        dijkstra.run(&mut grid_b).unwrap();

        assert!(astar.processed() <= dijkstra.processed());
    }
}
