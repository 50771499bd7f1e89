//! Budget-bounded flood fill.

use moverange_core::{Direction, Point};

use crate::error::ReachError;
use crate::moverange::{Frame, MoveRange, ReachNode};
use crate::traits::TileSource;

impl MoveRange {
    /// Compute every position reachable from `start` with `budget` movement
    /// points.
    ///
    /// Entering a tile costs its `movement_cost`; impassable tiles and
    /// coordinates missing from `map` are never entered. The start is always
    /// the first element, whatever its own cost or passability. The rest
    /// follow in depth-first discovery order, trying north, east, south and
    /// west at each cell.
    ///
    /// A cell reached with no budget left is not expanded, not even into
    /// zero-cost neighbours. A cell that was already reached is expanded
    /// again only if the new route leaves strictly more budget than any
    /// earlier one. The result is therefore exactly the set of cells with a
    /// path costing at most `budget` on which every cell before the last
    /// still has budget left over, and zero-cost tiles cannot make the
    /// search loop.
    pub fn reachable<M: TileSource + ?Sized>(
        &mut self,
        map: &M,
        start: Point,
        budget: i32,
    ) -> Result<&[Point], ReachError> {
        let budget = u32::try_from(budget).map_err(|_| ReachError::NegativeBudget(budget))?;
        if map.tile(start).is_none() {
            return Err(ReachError::StartNotFound(start));
        }

        self.clear();
        self.start = Some(start);
        self.budget = budget;
        self.enter(start, budget);
        self.examined.insert(start);
        self.stack.push(Frame {
            pos: start,
            remaining: budget,
            next_dir: 0,
        });

        let mut pushes: usize = 1;
        while let Some(frame) = self.stack.last_mut() {
            if frame.remaining == 0 || frame.next_dir >= Direction::ALL.len() {
                self.stack.pop();
                continue;
            }
            let dir = Direction::ALL[frame.next_dir];
            frame.next_dir += 1;
            let from_remaining = frame.remaining;
            let Some(np) = frame.pos.step(dir) else {
                continue;
            };
            let Some(tile) = map.tile(np) else {
                continue;
            };
            self.examined.insert(np);
            if tile.impassable {
                continue;
            }
            let Some(remaining) = from_remaining.checked_sub(tile.movement_cost) else {
                continue;
            };

            match self.index.get(&np) {
                Some(&i) => {
                    if remaining <= self.nodes[i].remaining {
                        continue;
                    }
                    log::trace!(
                        "re-entering {} with {} left (was {})",
                        np,
                        remaining,
                        self.nodes[i].remaining
                    );
                    self.nodes[i].remaining = remaining;
                }
                None => {
                    log::trace!("entering {} with {} left", np, remaining);
                    self.enter(np, remaining);
                }
            }
            self.stack.push(Frame {
                pos: np,
                remaining,
                next_dir: 0,
            });
            pushes += 1;
        }

        log::debug!(
            "move range from {} with budget {}: {} reached, {} examined, {} expansions",
            start,
            budget,
            self.points.len(),
            self.examined.len(),
            pushes
        );
        Ok(&self.points)
    }

    fn enter(&mut self, p: Point, remaining: u32) {
        self.index.insert(p, self.nodes.len());
        self.nodes.push(ReachNode { pos: p, remaining });
        self.points.push(p);
    }
}
