//! Movement-range search for grid-based games.
//!
//! Given a map of tiles with entry costs and impassable terrain, a start
//! position and a movement budget, this crate finds every position a unit
//! could move to this turn: the highlighted squares of a turn-based strategy
//! game.
//!
//! - [`reachable`] runs a one-off query and returns an owned list.
//! - [`MoveRange`] keeps its buffers between queries and also exposes the
//!   remaining budget and cheapest cost per reached cell.
//!
//! Maps are read through the [`TileSource`] trait, implemented for
//! [`TileMap`](moverange_core::TileMap) and plain `HashMap<Point, Tile>`.
//! Per-query state lives in the `MoveRange`, never in the tiles, so any
//! number of queries may read one map at the same time.
//!
//! ```
//! use moverange_core::{Legend, Point, TileMap};
//!
//! let map = TileMap::from_layout(".#.\n...", &Legend::default()).unwrap();
//! let pts = moverange_reach::reachable(&map, Point::new(0, 0), 1).unwrap();
//! assert_eq!(pts, vec![Point::new(0, 0), Point::new(0, 1)]);
//! ```

mod error;
mod flood;
mod moverange;
mod traits;

pub use error::ReachError;
pub use moverange::{MoveRange, ReachNode};
pub use traits::TileSource;

use moverange_core::Point;

/// One-off movement-range query.
///
/// Equivalent to [`MoveRange::reachable`] on a fresh `MoveRange`, returning
/// the positions as an owned vector.
pub fn reachable<M: TileSource + ?Sized>(
    map: &M,
    start: Point,
    budget: i32,
) -> Result<Vec<Point>, ReachError> {
    let mut mr = MoveRange::new();
    mr.reachable(map, start, budget)?;
    Ok(std::mem::take(&mut mr.points))
}
