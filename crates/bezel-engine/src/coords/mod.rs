//! Coordinate and geometry types shared by the path builder, the border
//! renderer and the style model.
//!
//! Canonical space:
//! - Surface units (whatever the caller's render surface uses)
//! - Origin top-left
//! - +X right, +Y down
//! - Angles in degrees, clockwise from +X

mod corners;
mod rect;
mod sides;
mod vec2;
mod viewport;

pub use corners::{Corner, CornerModel, CornerType};
pub use rect::Rect;
pub use sides::{Side, Sides};
pub use vec2::Vec2;
pub use viewport::Viewport;
