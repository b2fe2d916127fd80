//! Running the simulation.

use crate::{cells::Generation, error::Error, world::next_generation};
use log::{debug, info, log_enabled, Level};
use std::{ops::Index, slice, vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The generations of one run, in order.
///
/// Index 0 is the initial generation, index `i` is the result of
/// stepping it `i` times. It is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Generation>", into = "Vec<Generation>")
)]
pub struct Trace {
    generations: Vec<Generation>,
}

impl Trace {
    /// Steps `initial` forward `iterations` times,
    /// keeping every generation on the way.
    pub fn new(initial: Generation, iterations: u64) -> Self {
        let mut generations = vec![initial];
        for i in 1..=iterations {
            let last = &generations[generations.len() - 1];
            let next = next_generation(last);
            if log_enabled!(Level::Debug) {
                debug!(
                    "generation {}: {} cells, box {}",
                    i,
                    next.len(),
                    next.bounding_box()
                );
            }
            generations.push(next);
        }
        info!("computed {} generations", generations.len());
        Trace { generations }
    }

    /// Number of generations, i.e., the number of iterations plus one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Number of steps taken from the initial generation.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.generations.len() - 1
    }

    #[inline]
    pub fn initial(&self) -> &Generation {
        &self.generations[0]
    }

    #[inline]
    pub fn last(&self) -> &Generation {
        &self.generations[self.generations.len() - 1]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Generation> {
        self.generations.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Generation> {
        self.generations.iter()
    }

    pub fn into_inner(self) -> Vec<Generation> {
        self.generations
    }
}

impl TryFrom<Vec<Generation>> for Trace {
    type Error = Error;

    fn try_from(generations: Vec<Generation>) -> Result<Self, Self::Error> {
        if generations.is_empty() {
            return Err(Error::EmptyTrace);
        }
        Ok(Trace { generations })
    }
}

impl From<Trace> for Vec<Generation> {
    fn from(trace: Trace) -> Self {
        trace.generations
    }
}

impl Index<usize> for Trace {
    type Output = Generation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.generations[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Generation;
    type IntoIter = slice::Iter<'a, Generation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Generation;
    type IntoIter = vec::IntoIter<Generation>;

    fn into_iter(self) -> Self::IntoIter {
        self.generations.into_iter()
    }
}

/// Steps `initial` forward `iterations` times.
///
/// Returns [`Error::InvalidIterationCount`] if `iterations` is negative.
pub fn iterate(initial: Generation, iterations: i64) -> Result<Trace, Error> {
    let iterations = u64::try_from(iterations)
        .map_err(|_| Error::InvalidIterationCount(iterations.to_string()))?;
    Ok(Trace::new(initial, iterations))
}

/// Parses an iteration count.
///
/// Surrounding whitespace and a leading `+` are accepted.
/// Negative numbers, fractions and anything else that is not
/// a plain integer are rejected with [`Error::InvalidIterationCount`].
pub fn parse_iterations(s: &str) -> Result<u64, Error> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidIterationCount(s.to_string()));
    }
    digits
        .parse()
        .map_err(|_| Error::InvalidIterationCount(s.to_string()))
}
