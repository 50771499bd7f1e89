//! Building a [`TileMap`] from ASCII art.
//!
//! Each line of the layout is a row (`y` = line index) and each character a
//! column (`x` = char index). A [`Legend`] decides which tile each character
//! stands for. Blank lines before the first row and after the last are
//! ignored; every row in between must have the same width.
//!
//! ```text
//! ..#..
//! .3#..
//! .....
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::geom::Point;
use crate::tile::{Tile, TileMap};

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A row is wider or narrower than the first one.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A row or column index does not fit in a board coordinate.
    #[error("layout position (column {column}, line {line}) is out of coordinate range")]
    OutOfRange { line: usize, column: usize },
    /// The legend has no entry for a character.
    #[error("layout contains unknown character \u{201c}{ch}\u{201d} at {pos}")]
    UnknownChar { ch: char, pos: Point },
}

/// Character-to-tile table used by [`TileMap::from_layout`].
///
/// An entry mapping to `None` marks a hole: no tile is created there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: HashMap<char, Option<Tile>>,
}

impl Default for Legend {
    /// `.` is open ground (cost 1), `#` is impassable, `0`..=`9` is ground
    /// with that cost, and a space is a hole.
    fn default() -> Self {
        let mut legend = Self::empty()
            .with('.', Some(Tile::new(1)))
            .with('#', Some(Tile::impassable()))
            .with(' ', None);
        for cost in 0..=9u32 {
            if let Some(ch) = char::from_digit(cost, 10) {
                legend = legend.with(ch, Some(Tile::new(cost)));
            }
        }
        legend
    }
}

impl Legend {
    /// A legend with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the legend with `ch` mapped to `tile`, replacing any existing
    /// entry.
    pub fn with(mut self, ch: char, tile: Option<Tile>) -> Self {
        self.entries.insert(ch, tile);
        self
    }

    /// Look up a character. The outer `None` means the character is unknown.
    pub fn get(&self, ch: char) -> Option<Option<Tile>> {
        self.entries.get(&ch).copied()
    }
}

impl TileMap {
    /// Parse a text layout into a map using `legend`.
    pub fn from_layout(s: &str, legend: &Legend) -> Result<Self, LayoutError> {
        let s = s.trim_matches(|c: char| c == '\n' || c == '\r');
        let mut map = TileMap::new();
        let mut width: Option<usize> = None;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = layout_pos(x, y)?;
                match legend.get(ch) {
                    Some(Some(tile)) => {
                        map.insert(pos, tile);
                    }
                    Some(None) => {}
                    None => return Err(LayoutError::UnknownChar { ch, pos }),
                }
            }
        }
        Ok(map)
    }
}

fn layout_pos(column: usize, line: usize) -> Result<Point, LayoutError> {
    match (i32::try_from(column), i32::try_from(line)) {
        (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
        _ => Err(LayoutError::OutOfRange { line, column }),
    }
}
