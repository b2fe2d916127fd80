//! Conway's Game of Life on an unbounded grid.
//!
//! A [`Generation`] only records its living cells, so patterns can grow
//! in every direction without a fixed-size board.
//!
//! ```
//! use sparselife_lib::{next_generation, Generation};
//!
//! let blinker = Generation::new(vec![(0, 0), (1, 0), (2, 0)]);
//! assert_eq!(
//!     next_generation(&blinker),
//!     Generation::new(vec![(1, -1), (1, 0), (1, 1)])
//! );
//! ```

mod bounds;
mod cells;
mod config;
mod error;
mod patterns;
mod render;
mod rule;
mod trace;
mod world;

pub use bounds::{bounding_box, BoundingBox};
pub use cells::{contains, living_neighbors, neighbors_of, Coord, Generation, Iter};
pub use config::Config;
pub use error::Error;
pub use patterns::Pattern;
pub use render::{render, render_cell, render_with, Format, Glyphs};
pub use rule::{living_neighbor_count, will_be_alive};
pub use trace::{iterate, parse_iterations, Trace};
pub use world::next_generation;
