use crate::coord::Coord;
use crate::grid::GridLike;
use num_traits::Float;

/// Walk `parent` back-references from `goal` to a source, returning coordinates in
/// source-to-goal order. Empty if `goal` was never reached by the run.
#[must_use]
pub fn extract_path<const N: usize, C: Float, G: GridLike<N, C>>(
    grid: &G,
    goal: &Coord<N>,
) -> Vec<Coord<N>> {
    let Some(mut index) = grid.index_of(goal) else {
        return Vec::new();
    };
    if grid.cell(index).parent().is_none() && grid.cell(index).cost().is_infinite() {
        return Vec::new();
    }

    let mut path = vec![*grid.cell(index).coords()];
    while let Some(parent) = grid.cell(index).parent() {
        path.push(*grid.cell(parent).coords());
        index = parent;
    }
    path.reverse();
    path
}

/// Whether `path` is non-empty. Left as a placeholder, matching the source's own
/// unfinished validation routine: the original never specifies what "valid" should
/// additionally check (no obstacle crossing? monotone cost?) beyond non-emptiness.
#[must_use]
pub fn is_valid_path<const N: usize>(path: &[Coord<N>]) -> bool {
    !path.is_empty()
}

/// Identity placeholder, matching the source's own unfinished smoothing routine: no
/// smoothing algorithm is specified anywhere in the source this crate is grounded on.
#[must_use]
pub fn smooth_path<const N: usize>(path: Vec<Coord<N>>) -> Vec<Coord<N>> {
    path
}
