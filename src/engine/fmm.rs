use super::{RelaxRule, SearchEngine};
use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::grid::GridLike;
use num_traits::Float;

/// The smaller of a neighbor's two axis-aligned sides, per axis, used as the causal input
/// to the Eikonal update. An axis with neither side resolvable contributes `+inf` and is
/// excluded from the update.
fn axis_min_costs<const N: usize, C: Float, G: GridLike<N, C>>(
    grid: &G,
    coords: &Coord<N>,
) -> [C; N] {
    let mut out = [C::infinity(); N];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut minus = *coords;
        minus[i] -= 1;
        let mut plus = *coords;
        plus[i] += 1;
        let mut best = C::infinity();
        for candidate in [minus, plus] {
            if let Some(idx) = grid.index_of(&candidate) {
                let cell = grid.cell(idx);
                if !cell.is_obstacle() && cell.cost() < best {
                    best = cell.cost();
                }
            }
        }
        *slot = best;
    }
    out
}

/// Quadratic Eikonal update: `current` is unused, since the update is a function only of
/// `neighbor`'s own axis neighbors.
pub struct FMMRule<C> {
    tau: C,
}

impl<C: Float> FMMRule<C> {
    pub fn new(tau: C) -> Result<Self> {
        if tau <= C::zero() {
            return Err(Error::InvalidConfiguration("tau must be positive".into()));
        }
        Ok(Self { tau })
    }
}

impl<const N: usize, C: Float, G: GridLike<N, C>> RelaxRule<N, C, G> for FMMRule<C> {
    fn relax(&self, grid: &G, _current: usize, neighbor: usize, _goals: &[Coord<N>]) -> C {
        let coords = *grid.cell(neighbor).coords();
        let axis_costs = axis_min_costs(grid, &coords);
        let finite: Vec<C> = axis_costs.into_iter().filter(|c| c.is_finite()).collect();
        if finite.is_empty() {
            return C::infinity();
        }

        let a = C::from(finite.len()).unwrap();
        let sum = finite.iter().fold(C::zero(), |acc, &x| acc + x);
        let sum_sq = finite.iter().fold(C::zero(), |acc, &x| acc + x * x);
        let b = -(sum + sum);
        let c = sum_sq - self.tau * self.tau;
        let four = C::from(4.0).unwrap();
        let delta = b * b - four * a * c;

        if delta >= C::zero() && delta.is_finite() {
            let two_a = a + a;
            (-b + delta.sqrt()) / two_a
        } else {
            let min_u = finite
                .iter()
                .fold(C::infinity(), |acc, &x| if x < acc { x } else { acc });
            min_u + self.tau
        }
    }
}

/// Fast Marching Method propagation approximating the continuous Eikonal equation
/// `|∇T| = 1/F` with `tau = 1/F` constant over the grid.
pub type FMMEngine<const N: usize, C, G> = SearchEngine<N, C, G, FMMRule<C>>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn single_axis_reduces_to_linear_distance() {
        let mut grid: Grid<2, f64> = Grid::new([10, 1]);
        let mut engine: FMMEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(FMMRule::new(1.0).unwrap());
        engine.add_source([0, 0]);
        engine.run(&mut grid).unwrap();
        for k in 0..10 {
            let cost = grid.get(&[k, 0]).unwrap().cost();
            assert!((cost - k as f64).abs() < 1e-9, "k={k} cost={cost}");
        }
    }

    #[test]
    fn rejects_nonpositive_tau() {
        assert!(FMMRule::new(0.0f64).is_err());
    }

    #[test]
    fn approximates_euclidean_distance_on_open_grid() {
        let mut grid: Grid<2, f64> = Grid::new([30, 30]);
        let mut engine: FMMEngine<2, f64, Grid<2, f64>> =
            SearchEngine::new(FMMRule::new(1.0).unwrap());
        engine.add_source([0, 0]);
        engine.run(&mut grid).unwrap();

        let cost = grid.get(&[20, 20]).unwrap().cost();
        let euclidean = ((20.0f64).powi(2) + (20.0f64).powi(2)).sqrt();
        let relative_error = (cost - euclidean).abs() / euclidean;
        assert!(relative_error < 0.12, "relative_error={relative_error}");
    }
}
