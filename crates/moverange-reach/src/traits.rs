use std::collections::HashMap;
use std::hash::BuildHasher;

use moverange_core::{Point, Tile, TileMap};

/// Read-only map interface consumed by the reachability search.
///
/// Returning `None` means `p` is off the playable area; the search skips it.
pub trait TileSource {
    /// The tile at `p`, if any.
    fn tile(&self, p: Point) -> Option<Tile>;
}

impl TileSource for TileMap {
    #[inline]
    fn tile(&self, p: Point) -> Option<Tile> {
        self.get(p).copied()
    }
}

impl<S: BuildHasher> TileSource for HashMap<Point, Tile, S> {
    #[inline]
    fn tile(&self, p: Point) -> Option<Tile> {
        self.get(&p).copied()
    }
}

impl<T: TileSource + ?Sized> TileSource for &T {
    #[inline]
    fn tile(&self, p: Point) -> Option<Tile> {
        (**self).tile(p)
    }
}
