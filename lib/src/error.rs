//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// The engine itself never fails; these only reject malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unknown pattern {0:?}. Available patterns: rpentomino, glider, square.
    UnknownPattern(String),
    /// Invalid iteration count {0:?}. It should be a non-negative integer.
    InvalidIterationCount(String),
    /// A trace must contain at least the initial generation.
    EmptyTrace,
}
