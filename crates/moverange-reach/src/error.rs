use moverange_core::Point;
use thiserror::Error;

/// Invalid arguments to a reachability query.
///
/// Both variants are caller mistakes. No partial result is produced and the
/// map is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReachError {
    /// The start coordinate has no tile in the map.
    #[error("start {0} is not on the map")]
    StartNotFound(Point),
    /// The movement budget was below zero.
    #[error("movement budget must be non-negative, got {0}")]
    NegativeBudget(i32),
}
