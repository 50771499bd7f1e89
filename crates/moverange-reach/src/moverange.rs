use std::collections::{HashMap, HashSet};

use moverange_core::{Point, TileMap};

/// A reached position with the best movement budget left on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachNode {
    pub pos: Point,
    pub remaining: u32,
}

/// Depth-first frame: a cell being expanded and the next direction to try.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) pos: Point,
    pub(crate) remaining: u32,
    pub(crate) next_dir: usize,
}

/// Reusable coordinator for movement-range queries.
///
/// `MoveRange` owns every piece of per-query state (visited cells, the
/// frame stack, the result list), so the map itself is only ever read. A
/// query borrows the `MoveRange` mutably; run concurrent queries with one
/// `MoveRange` each. Buffers are kept between queries, so repeated queries
/// stop allocating once they have warmed up.
///
/// The results of the last successful query stay available through
/// [`points`](Self::points), [`nodes`](Self::nodes) and friends until the
/// next query.
#[derive(Debug, Clone, Default)]
pub struct MoveRange {
    pub(crate) start: Option<Point>,
    pub(crate) budget: u32,
    // discovery-ordered output
    pub(crate) points: Vec<Point>,
    pub(crate) nodes: Vec<ReachNode>,
    // position -> index into `nodes`
    pub(crate) index: HashMap<Point, usize>,
    // every map cell looked at, passable or not
    pub(crate) examined: HashSet<Point>,
    pub(crate) stack: Vec<Frame>,
}

impl MoveRange {
    /// Create an empty `MoveRange`.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.start = None;
        self.budget = 0;
        self.points.clear();
        self.nodes.clear();
        self.index.clear();
        self.examined.clear();
        self.stack.clear();
    }

    /// Start of the last query, or `None` before the first successful one.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Budget of the last query.
    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Reachable positions of the last query in discovery order, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Like [`points`](Self::points) but with the best remaining budget for
    /// each position.
    #[inline]
    pub fn nodes(&self) -> &[ReachNode] {
        &self.nodes
    }

    /// Whether `p` was reached by the last query.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Best remaining budget on arrival at `p`, or `None` if unreached.
    pub fn remaining_at(&self, p: Point) -> Option<u32> {
        self.index.get(&p).map(|&i| self.nodes[i].remaining)
    }

    /// Cheapest total entry cost from the start to `p`, or `None` if
    /// unreached. Always 0 for the start.
    pub fn cost_to(&self, p: Point) -> Option<u32> {
        self.remaining_at(p).map(|r| self.budget - r)
    }

    /// Every map cell the last query looked at, in unspecified order.
    ///
    /// This includes the reached cells plus impassable and too-expensive
    /// neighbours of reached cells. Off-map coordinates are never included.
    pub fn examined(&self) -> impl Iterator<Item = Point> + '_ {
        self.examined.iter().copied()
    }

    /// Copy the last query's examined cells into the tiles' `visited` flags.
    ///
    /// Every flag in `map` is cleared first, so tiles outside the last query
    /// end up unvisited.
    pub fn mark_visited(&self, map: &mut TileMap) {
        map.reset_visited();
        for &p in &self.examined {
            if let Some(tile) = map.get_mut(p) {
                tile.visited = true;
            }
        }
    }
}
