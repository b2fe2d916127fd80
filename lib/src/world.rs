//! Stepping a generation forward.

use crate::{bounds::bounding_box, cells::Generation, rule::will_be_alive};
use log::trace;

/// The generation after `generation`.
///
/// Every newborn cell is a neighbor of some living cell, so only cells
/// within one step of the bounding box need to be checked. Births outside
/// [`Coord::RANGE`](crate::Coord::RANGE) are discarded.
pub fn next_generation(generation: &Generation) -> Generation {
    let region = bounding_box(generation).expand(1);
    trace!("checking {} candidate cells in {}", region.area(), region);
    region
        .coords()
        .filter(|&cell| will_be_alive(cell, generation))
        .collect()
}
