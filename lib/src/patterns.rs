//! Built-in starting patterns.

use crate::{cells::Generation, error::Error};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pattern from the built-in catalog.
///
/// Parsed from and displayed as its catalog name.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// `rpentomino`.
    ///
    /// ```plaintext
    /// .oo
    /// oo.
    /// .o.
    /// ```
    #[educe(Default)]
    RPentomino,

    /// `glider`.
    ///
    /// A block at the lower left and a glider heading away from it
    /// to the lower right.
    ///
    /// ```plaintext
    /// ....o.
    /// .....o
    /// ...ooo
    /// ......
    /// oo....
    /// oo....
    /// ```
    Glider,

    /// `square`.
    ///
    /// A 2×2 block, which is a still life.
    Square,
}

impl Pattern {
    /// All patterns in the catalog.
    pub const ALL: [Pattern; 3] = [Pattern::RPentomino, Pattern::Glider, Pattern::Square];

    /// The catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::RPentomino => "rpentomino",
            Pattern::Glider => "glider",
            Pattern::Square => "square",
        }
    }

    /// The living cells, as `(x, y)` pairs.
    pub fn cells(self) -> &'static [(i32, i32)] {
        match self {
            Pattern::RPentomino => &[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
            Pattern::Glider => &[
                (-2, -2),
                (-1, -2),
                (-2, -1),
                (-1, -1),
                (1, 1),
                (2, 1),
                (3, 1),
                (3, 2),
                (2, 3),
            ],
            Pattern::Square => &[(1, 1), (2, 1), (1, 2), (2, 2)],
        }
    }

    /// The pattern as a starting generation.
    pub fn generation(self) -> Generation {
        Generation::from(self.cells())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())?;
        Ok(())
    }
}
