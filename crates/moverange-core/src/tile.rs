//! Tile attributes and the coordinate-keyed tile store.
//!
//! [`Tile`] is a plain data record; [`TileMap`] associates each board
//! [`Point`] with one. Coordinates with no tile are off the playable area:
//! lookups return `None` for them and never panic.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::geom::{Point, Range};

/// Per-coordinate terrain attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Budget consumed when a unit enters this tile.
    pub movement_cost: u32,
    /// Impassable tiles are never entered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub impassable: bool,
    /// Transient highlight flag. Not read by the search.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub visited: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Tile {
    /// A passable tile with the given entry cost.
    pub const fn new(movement_cost: u32) -> Self {
        Self {
            movement_cost,
            impassable: false,
            visited: false,
        }
    }

    /// An impassable tile (wall, water, ...).
    pub const fn impassable() -> Self {
        Self {
            movement_cost: 0,
            impassable: true,
            visited: false,
        }
    }

    /// Return a copy with a different entry cost.
    pub const fn with_cost(self, movement_cost: u32) -> Self {
        Self {
            movement_cost,
            ..self
        }
    }

    /// Whether a unit may enter this tile at all.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.impassable
    }
}

/// Mapping from board coordinate to [`Tile`].
///
/// Keys are unique; iteration order is unspecified. The map tracks the
/// bounding [`Range`] of every coordinate ever inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    tiles: HashMap<Point, Tile>,
    bounds: Range,
}

impl TileMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with `tile` at every point of `rng`.
    pub fn filled(rng: Range, tile: Tile) -> Self {
        rng.iter().map(|p| (p, tile)).collect()
    }

    /// Insert or replace the tile at `p`, returning the previous one.
    pub fn insert(&mut self, p: Point, tile: Tile) -> Option<Tile> {
        self.bounds = self.bounds.union(Range::unit(p));
        self.tiles.insert(p, tile)
    }

    /// Look up the tile at `p`. `None` means `p` is off the map.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.tiles.get(&p)
    }

    /// Mutable lookup.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.tiles.get_mut(&p)
    }

    /// Whether the map has a tile at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.tiles.contains_key(&p)
    }

    /// Clear the `visited` flag on every tile. Safe to call any number of
    /// times.
    pub fn reset_visited(&mut self) {
        for tile in self.tiles.values_mut() {
            tile.visited = false;
        }
    }

    /// Coordinates whose `visited` flag is set, in row-major order.
    pub fn visited(&self) -> Vec<Point> {
        let mut pts: Vec<Point> = self
            .tiles
            .iter()
            .filter(|(_, t)| t.visited)
            .map(|(p, _)| *p)
            .collect();
        pts.sort_unstable();
        pts
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Smallest range covering every inserted coordinate.
    ///
    /// The range is half-open, so tiles on the `i32::MAX` row or column are
    /// stored and found by [`get`](Self::get) but fall outside it.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Iterate over all (coordinate, tile) pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Point, Tile> {
        self.tiles.iter()
    }
}

impl FromIterator<(Point, Tile)> for TileMap {
    fn from_iter<I: IntoIterator<Item = (Point, Tile)>>(iter: I) -> Self {
        let mut map = TileMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<(Point, Tile)> for TileMap {
    fn extend<I: IntoIterator<Item = (Point, Tile)>>(&mut self, iter: I) {
        for (p, tile) in iter {
            self.insert(p, tile);
        }
    }
}

impl<'a> IntoIterator for &'a TileMap {
    type Item = (&'a Point, &'a Tile);
    type IntoIter = hash_map::Iter<'a, Point, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

// Serialized as a sequence of `(point, tile)` pairs since most formats only
// allow string map keys. The bounds are rebuilt on load.
#[cfg(feature = "serde")]
impl serde::Serialize for TileMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&Point, &Tile)> = self.tiles.iter().collect();
        entries.sort_unstable_by_key(|(p, _)| **p);
        serializer.collect_seq(entries)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TileMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(Point, Tile)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
