//! wavefield
//! =========
//!
//! Propagates scalar fields outward from source cells over N-dimensional regular grids.
//! Three propagation strategies share one [`grid::GridLike`]/[`engine::SearchEngine`]
//! infrastructure: uniform-cost shortest path ([`engine::DijkstraEngine`]), goal-directed
//! shortest path with an admissible heuristic ([`engine::AStarEngine`]), and a Fast
//! Marching Method Eikonal solver ([`engine::FMMEngine`]). Grids may additionally be
//! periodic ([`grid::PeriodicGrid`]) on any subset of axes, and fields support sub-cell
//! queries via multilinear interpolation over the enclosing hypercube.

mod cell;
mod coord;
mod error;
mod frontier;
pub mod generate;
pub mod grid;
pub mod heuristic;
pub mod io;
pub mod path;
pub mod render;

pub mod engine;

pub use cell::{Cell, CellState};
pub use coord::{Coord, Dims, Norm, RealCoord};
pub use error::{Error, Result};
