//! Cells and generations.

use crate::bounds::{bounding_box, BoundingBox};
use log::warn;
use std::{
    cmp::Ordering,
    collections::{btree_set, BTreeSet},
    fmt::{self, Display, Formatter},
    ops::RangeInclusive,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell on the unbounded grid.
///
/// `x` grows to the right, `y` grows upwards.
///
/// Coordinates are ordered row-major in display order: rows from top to
/// bottom (larger `y` first), then cells from left to right. This is the
/// order in which a [`Generation`] iterates over its cells.
///
/// A living cell must have both coordinates in [`Coord::RANGE`], so that
/// all of its neighbors are representable. Cells outside that range are
/// always dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// The coordinates a living cell may have.
    pub const RANGE: RangeInclusive<i32> = (i32::MIN + 1)..=(i32::MAX - 1);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Whether a cell at these coordinates can be alive.
    #[inline]
    pub fn in_range(self) -> bool {
        Self::RANGE.contains(&self.x) && Self::RANGE.contains(&self.y)
    }

    /// The coordinates translated by `(dx, dy)`.
    ///
    /// Wraps around at the limits of `i32`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Coord {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The coordinates translated by `(dx, dy)`,
    /// or `None` if they would overflow.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Coord {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        other.y.cmp(&self.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight cells at Chebyshev distance 1 from `cell`.
///
/// The order is fixed: the row above from left to right, then the left and
/// right sides, then the row below from left to right.
///
/// For a cell outside [`Coord::RANGE`] some neighbors wrap around to the
/// other end of `i32`; those are never alive.
pub fn neighbors_of(cell: Coord) -> [Coord; 8] {
    [
        cell.offset(-1, 1),
        cell.offset(0, 1),
        cell.offset(1, 1),
        cell.offset(-1, 0),
        cell.offset(1, 0),
        cell.offset(-1, -1),
        cell.offset(0, -1),
        cell.offset(1, -1),
    ]
}

/// The neighbors of `cell` which are alive in `generation`,
/// in the order of [`neighbors_of`].
pub fn living_neighbors(cell: Coord, generation: &Generation) -> Vec<Coord> {
    neighbors_of(cell)
        .iter()
        .copied()
        .filter(|&neighbor| generation.contains(neighbor))
        .collect()
}

/// Whether `cell` is alive in `generation`.
#[inline]
pub fn contains(generation: &Generation, cell: Coord) -> bool {
    generation.contains(cell)
}

/// The set of living cells at one step of the simulation.
///
/// A generation is never modified after it is built. Stepping produces
/// a new one. Every cell in it lies within [`Coord::RANGE`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Generation {
    cells: BTreeSet<Coord>,
}

impl Generation {
    /// Builds a generation from some living cells.
    ///
    /// Repeated cells are only counted once.
    /// Cells outside [`Coord::RANGE`] are dropped.
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        cells.into_iter().map(Into::into).collect()
    }

    /// The empty generation.
    pub fn empty() -> Self {
        Generation::default()
    }

    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of living cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Living cells in row-major display order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cells.iter(),
        }
    }

    /// The minimal rectangle enclosing every living cell.
    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(self)
    }

    /// A copy of this generation with every cell moved by `(dx, dy)`.
    ///
    /// Cells moved out of [`Coord::RANGE`] are dropped.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        self.iter()
            .filter_map(|cell| cell.checked_offset(dx, dy))
            .collect()
    }
}

impl FromIterator<Coord> for Generation {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let cells = iter
            .into_iter()
            .filter(|cell| {
                let in_range = cell.in_range();
                if !in_range {
                    warn!("dropping cell {} outside the supported range", cell);
                }
                in_range
            })
            .collect();
        Generation { cells }
    }
}

impl From<&[(i32, i32)]> for Generation {
    fn from(cells: &[(i32, i32)]) -> Self {
        Generation::new(cells.iter().copied())
    }
}

impl From<Vec<Coord>> for Generation {
    fn from(cells: Vec<Coord>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<Generation> for Vec<Coord> {
    fn from(generation: Generation) -> Self {
        generation.cells.into_iter().collect()
    }
}

/// An iterator over the living cells of a [`Generation`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: btree_set::Iter<'a, Coord>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a Generation {
    type Item = Coord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
