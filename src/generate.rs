use crate::coord::{Coord, Dims};
use crate::grid::{Grid, GridLike, PeriodicGrid};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for [`random_grid`] / [`random_periodic_grid`].
pub struct RandomGridConfig {
    /// A fixed seed for reproducible generation, or `0` to seed from the OS entropy source.
    pub seed: u64,
    /// Independent per-cell probability of being an obstacle, in `[0, 1]`.
    pub obstacle_probability: f64,
}

fn rng_for_seed(seed: u64) -> StdRng {
    if seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed)
    }
}

/// A rectangular grid with each cell independently marked an obstacle with probability
/// `config.obstacle_probability`.
#[must_use]
pub fn random_grid<const N: usize, C: Float>(
    dims: Dims<N>,
    config: &RandomGridConfig,
) -> Grid<N, C> {
    let mut grid = Grid::new(dims);
    let mut rng = rng_for_seed(config.seed);
    for i in 0..grid.len() {
        let coord = *grid.cell(i).coords();
        if rng.gen::<f64>() < config.obstacle_probability {
            grid.set_obstacle(&coord, true).unwrap();
        }
    }
    grid
}

/// As [`random_grid`], but over a [`PeriodicGrid`].
#[must_use]
pub fn random_periodic_grid<const N: usize, C: Float>(
    dims: Dims<N>,
    periodic: [bool; N],
    config: &RandomGridConfig,
) -> PeriodicGrid<N, C> {
    let mut grid = PeriodicGrid::new(dims, periodic);
    let mut rng = rng_for_seed(config.seed);
    for i in 0..grid.len() {
        let coord = *grid.cell(i).coords();
        if rng.gen::<f64>() < config.obstacle_probability {
            grid.set_obstacle(&coord, true).unwrap();
        }
    }
    grid
}

fn is_at_border_on_nonperiodic_axis<const N: usize>(
    coord: &Coord<N>,
    dims: &Dims<N>,
    periodic: &[bool; N],
) -> bool {
    (0..N).any(|i| !periodic[i] && (coord[i] == 0 || coord[i] as usize == dims[i] - 1))
}

fn unit_directions<const N: usize>() -> Vec<Coord<N>> {
    let mut out = Vec::with_capacity(2 * N);
    for i in 0..N {
        let mut minus = [0i64; N];
        minus[i] = -1;
        out.push(minus);
        let mut plus = [0i64; N];
        plus[i] = 1;
        out.push(plus);
    }
    out
}

/// Carve a maze of free-space corridors into an otherwise fully-obstructed grid: borders
/// are left free on non-periodic axes, and `volume / 10` corridors of random length 5-14
/// are walked out from random interior cells, changing direction with probability 1/5.
#[must_use]
pub fn maze_grid<const N: usize, C: Float>(
    dims: Dims<N>,
    periodic: [bool; N],
    seed: u64,
) -> PeriodicGrid<N, C> {
    let mut grid = PeriodicGrid::new(dims, periodic);
    let mut rng = rng_for_seed(seed);

    for i in 0..grid.len() {
        grid.cell_mut(i).obstacle = true;
    }
    // Borders are free on non-periodic axes (a periodic axis has no border to free).
    for i in 0..grid.len() {
        let coord = *grid.cell(i).coords();
        if is_at_border_on_nonperiodic_axis(&coord, &dims, &periodic) {
            grid.cell_mut(i).obstacle = false;
        }
    }

    let volume: usize = dims.iter().product();
    let num_paths = (volume / 10).max(1);
    let directions = unit_directions::<N>();

    for _ in 0..num_paths {
        let mut coord = {
            let mut c = [0i64; N];
            for (ax, slot) in c.iter_mut().enumerate() {
                let extent = dims[ax] as i64;
                *slot = if !periodic[ax] && extent > 2 {
                    rng.gen_range(1..extent - 1)
                } else {
                    rng.gen_range(0..extent)
                };
            }
            c
        };
        let mut direction = directions[rng.gen_range(0..directions.len())];
        let length = 5 + rng.gen_range(0..10);
        for _ in 0..length {
            if rng.gen::<f64>() < 0.2 {
                direction = directions[rng.gen_range(0..directions.len())];
            }
            let normalized = grid.normalize(&coord);
            if let Some(idx) = grid.index_of(&normalized) {
                grid.cell_mut(idx).obstacle = false;
            }
            let mut next = coord;
            for ax in 0..N {
                next[ax] += direction[ax];
            }
            coord = grid.normalize(&next);
            if !grid.in_bounds(&coord) {
                break;
            }
        }
    }

    grid
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_grid_is_reproducible_for_fixed_seed() {
        let config = RandomGridConfig {
            seed: 42,
            obstacle_probability: 0.3,
        };
        let a: Grid<2, f64> = random_grid([20, 20], &config);
        let b: Grid<2, f64> = random_grid([20, 20], &config);
        for i in 0..a.len() {
            assert_eq!(a.cell(i).is_obstacle(), b.cell(i).is_obstacle());
        }
    }

    #[test]
    fn maze_leaves_borders_free_on_nonperiodic_axes() {
        let grid: PeriodicGrid<2, f64> = maze_grid([20, 20], [false, false], 7);
        for x in 0..20 {
            assert!(!grid.get(&[x, 0]).unwrap().is_obstacle());
            assert!(!grid.get(&[x, 19]).unwrap().is_obstacle());
        }
    }
}
