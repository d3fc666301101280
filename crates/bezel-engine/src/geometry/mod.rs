//! Outline construction.
//!
//! Turns a rectangle plus a [`CornerModel`](crate::coords::CornerModel) into
//! a [`ClosedPath`] of line and arc [`Segment`]s, used both for filling the
//! interior and as the full-visibility border stroke.

mod corner;
mod outline;
mod segment;

pub use corner::CornerFrame;
pub use outline::build_outline;
pub use segment::{ClosedPath, Segment};
