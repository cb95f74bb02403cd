use super::{RelaxRule, SearchEngine};
use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::grid::GridLike;
use num_traits::Float;

/// Uniform edge-cost relaxation: `cost(neighbor) = cost(current) + edge_cost`.
pub struct DijkstraRule<C> {
    edge_cost: C,
}

impl<C: Float> DijkstraRule<C> {
    pub fn new(edge_cost: C) -> Result<Self> {
        if edge_cost <= C::zero() {
            return Err(Error::InvalidConfiguration(
                "edge_cost must be positive".into(),
            ));
        }
        Ok(Self { edge_cost })
    }
}

impl<const N: usize, C: Float, G: GridLike<N, C>> RelaxRule<N, C, G> for DijkstraRule<C> {
    fn relax(&self, grid: &G, current: usize, _neighbor: usize, _goals: &[Coord<N>]) -> C {
        grid.cell(current).cost() + self.edge_cost
    }
}

/// Shortest-path propagation to every reachable cell from one or more sources, using a
/// constant per-edge cost.
pub type DijkstraEngine<const N: usize, C, G> = SearchEngine<N, C, G, DijkstraRule<C>>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn trivial_3x3_uniform_cost() {
        let mut grid: Grid<2, f64> = Grid::new([3, 3]);
        let mut engine: DijkstraEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(DijkstraRule::new(1.0).unwrap());
        engine.add_source([0, 0]);
        engine.run(&mut grid).unwrap();

        let expect = |c: [i64; 2]| grid.get(&c).unwrap().cost();
        assert_eq!(expect([0, 0]), 0.0);
        assert_eq!(expect([1, 0]), 1.0);
        assert_eq!(expect([0, 1]), 1.0);
        assert_eq!(expect([1, 1]), 2.0);
        assert_eq!(expect([2, 0]), 2.0);
        assert_eq!(expect([0, 2]), 2.0);
        assert_eq!(expect([2, 1]), 3.0);
        assert_eq!(expect([1, 2]), 3.0);
        assert_eq!(expect([2, 2]), 4.0);
    }

    #[test]
    fn routes_around_obstacles() {
        let mut grid: Grid<2, f64> = Grid::new([3, 3]);
        grid.set_obstacle(&[1, 0], true).unwrap();
        grid.set_obstacle(&[1, 1], true).unwrap();
        let mut engine: DijkstraEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(DijkstraRule::new(1.0).unwrap());
        engine.add_source([0, 0]);
        engine.run(&mut grid).unwrap();
        assert_eq!(grid.get(&[2, 0]).unwrap().cost(), 6.0);
    }

    #[test]
    fn rejects_nonpositive_edge_cost() {
        assert!(DijkstraRule::new(0.0f64).is_err());
        assert!(DijkstraRule::new(-1.0f64).is_err());
    }
}
