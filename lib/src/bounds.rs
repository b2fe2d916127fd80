//! Bounding boxes of generations.

use crate::cells::{Coord, Generation};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its two extreme corners.
///
/// Both corners are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub bottom_left: Coord,
    pub top_right: Coord,
}

/// The minimal rectangle enclosing every living cell of `generation`.
///
/// An empty generation gives the single-point box at the origin.
pub fn bounding_box(generation: &Generation) -> BoundingBox {
    let mut cells = generation.iter();
    let first = match cells.next() {
        Some(cell) => cell,
        None => return BoundingBox::default(),
    };
    cells.fold(
        BoundingBox {
            bottom_left: first,
            top_right: first,
        },
        |bbox, cell| BoundingBox {
            bottom_left: Coord::new(bbox.bottom_left.x.min(cell.x), bbox.bottom_left.y.min(cell.y)),
            top_right: Coord::new(bbox.top_right.x.max(cell.x), bbox.top_right.y.max(cell.y)),
        },
    )
}

impl BoundingBox {
    pub fn new(bottom_left: Coord, top_right: Coord) -> Self {
        BoundingBox {
            bottom_left,
            top_right,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u64 {
        (i64::from(self.top_right.x) - i64::from(self.bottom_left.x) + 1) as u64
    }

    /// Number of rows.
    pub fn height(&self) -> u64 {
        (i64::from(self.top_right.y) - i64::from(self.bottom_left.y) + 1) as u64
    }

    /// Number of cells inside the box.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Whether `cell` lies inside the box, borders included.
    pub fn contains(&self, cell: Coord) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&cell.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&cell.y)
    }

    /// The box grown by `by` cells in every direction,
    /// clipped to [`Coord::RANGE`].
    pub fn expand(&self, by: i32) -> Self {
        let clip = |v: i64| {
            v.clamp(i64::from(*Coord::RANGE.start()), i64::from(*Coord::RANGE.end())) as i32
        };
        let by = i64::from(by);
        let BoundingBox {
            bottom_left,
            top_right,
        } = *self;
        BoundingBox {
            bottom_left: Coord::new(
                clip(i64::from(bottom_left.x) - by),
                clip(i64::from(bottom_left.y) - by),
            ),
            top_right: Coord::new(
                clip(i64::from(top_right.x) + by),
                clip(i64::from(top_right.y) + by),
            ),
        }
    }

    /// Every cell inside the box, rows from top to bottom,
    /// each row from left to right.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let BoundingBox {
            bottom_left,
            top_right,
        } = *self;
        (bottom_left.y..=top_right.y)
            .rev()
            .flat_map(move |y| (bottom_left.x..=top_right.x).map(move |x| Coord::new(x, y)))
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.bottom_left, self.top_right)
    }
}
