//! Text rendering of generations.

use crate::{
    bounds::bounding_box,
    cells::{Coord, Generation},
};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The strings used for living and dead cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyphs {
    pub alive: &'static str,
    pub dead: &'static str,
}

impl Glyphs {
    /// `▣` for living cells, `▢` for dead cells.
    pub const SQUARES: Glyphs = Glyphs {
        alive: "\u{25A3}",
        dead: "\u{25A2}",
    };

    /// `o` for living cells, `.` for dead cells,
    /// as in [Plaintext](https://conwaylife.com/wiki/Plaintext).
    pub const PLAINTEXT: Glyphs = Glyphs {
        alive: "o",
        dead: ".",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::SQUARES
    }
}

/// Named choices of [`Glyphs`].
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// [`Glyphs::SQUARES`].
    #[educe(Default)]
    Glyph,
    /// [`Glyphs::PLAINTEXT`].
    Plaintext,
}

impl Format {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Format::Glyph => Glyphs::SQUARES,
            Format::Plaintext => Glyphs::PLAINTEXT,
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glyph" => Ok(Format::Glyph),
            "plaintext" => Ok(Format::Plaintext),
            _ => Err(String::from("invalid format, expected `glyph` or `plaintext`")),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Format::Glyph => "glyph",
            Format::Plaintext => "plaintext",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// The glyph of a single cell.
#[inline]
pub fn render_cell(cell: Coord, generation: &Generation, glyphs: Glyphs) -> &'static str {
    if generation.contains(cell) {
        glyphs.alive
    } else {
        glyphs.dead
    }
}

/// Renders `generation` with the default glyphs.
///
/// See [`render_with`].
pub fn render(generation: &Generation) -> String {
    render_with(generation, Glyphs::default())
}

/// Renders the bounding box of `generation` as a grid of glyphs.
///
/// Rows go from top to bottom, cells in a row from left to right,
/// separated by single spaces. Every row ends with `\n`.
/// An empty generation renders as one dead cell.
pub fn render_with(generation: &Generation, glyphs: Glyphs) -> String {
    let bbox = bounding_box(generation);
    let mut str = String::new();
    for y in (bbox.bottom_left.y..=bbox.top_right.y).rev() {
        for x in bbox.bottom_left.x..=bbox.top_right.x {
            if x != bbox.bottom_left.x {
                str.push(' ');
            }
            str.push_str(render_cell(Coord::new(x, y), generation, glyphs));
        }
        str.push('\n');
    }
    str
}

/// Renders with the default glyphs.
impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
