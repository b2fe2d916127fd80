//! Run configuration.

use crate::{
    cells::{Coord, Generation},
    patterns::Pattern,
    render::Format,
    trace::Trace,
};
use educe::Educe;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of one run.
///
/// The trace will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The starting pattern from the catalog.
    pub pattern: Pattern,

    /// Explicit starting cells.
    ///
    /// When this is `Some`, it is used instead of [`pattern`](#structfield.pattern).
    pub cells: Option<Vec<Coord>>,

    /// Number of generations to compute after the initial one.
    #[educe(Default = 10)]
    pub iterations: u64,

    /// How to render the generations.
    pub format: Format,
}

impl Config {
    /// Sets up a new configuration with given pattern and iteration count.
    pub fn new(pattern: Pattern, iterations: u64) -> Self {
        Config {
            pattern,
            iterations,
            ..Config::default()
        }
    }

    /// Sets the pattern.
    pub fn set_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the explicit starting cells.
    pub fn set_cells<T: Into<Option<Vec<Coord>>>>(mut self, cells: T) -> Self {
        self.cells = cells.into();
        self
    }

    /// Sets the number of iterations.
    pub fn set_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the render format.
    pub fn set_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// The starting generation.
    pub fn initial(&self) -> Generation {
        match &self.cells {
            Some(cells) => cells.iter().copied().collect(),
            None => self.pattern.generation(),
        }
    }

    /// Runs the simulation.
    pub fn trace(&self) -> Trace {
        let initial = self.initial();
        debug!(
            "starting from {} with {} cells, {} iterations",
            self.cells.as_ref().map_or(self.pattern.name(), |_| "explicit cells"),
            initial.len(),
            self.iterations
        );
        Trace::new(initial, self.iterations)
    }
}
