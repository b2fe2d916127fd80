//! The B3/S23 rule of Conway's Game of Life.

use crate::cells::{neighbors_of, Coord, Generation};

/// Number of living cells among the eight neighbors of `cell`.
pub fn living_neighbor_count(cell: Coord, generation: &Generation) -> usize {
    neighbors_of(cell)
        .iter()
        .filter(|&&neighbor| generation.contains(neighbor))
        .count()
}

/// Whether `cell` is alive in the generation after `generation`.
///
/// A dead cell is born with exactly 3 living neighbors.
/// A living cell survives with 2 or 3.
/// A cell outside [`Coord::RANGE`] is never alive.
pub fn will_be_alive(cell: Coord, generation: &Generation) -> bool {
    cell.in_range()
        && matches!(
            (generation.contains(cell), living_neighbor_count(cell, generation)),
            (true, 2) | (true, 3) | (false, 3)
        )
}
