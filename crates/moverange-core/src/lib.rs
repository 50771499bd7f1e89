//! **moverange-core**: board geometry and tile storage for tactical movement
//! ranges.
//!
//! This crate holds the data side of the *moverange* workspace: integer
//! [`Point`]s and [`Range`]s, per-coordinate [`Tile`] attributes, the
//! [`TileMap`] store, and a small text [`layout`] format for building maps.
//! The search itself lives in `moverange-reach`.

pub mod geom;
pub mod layout;
pub mod tile;

pub use geom::{Direction, Point, Range};
pub use layout::{Legend, LayoutError};
pub use tile::{Tile, TileMap};
