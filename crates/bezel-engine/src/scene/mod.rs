//! Scene: the render surface seam and the bundled recording surface.
//!
//! Responsibilities:
//! - define [`Surface`], the interface borders, fills and text are drawn through
//! - scope surface resources ([`ScopedPen`], [`ScopedExclusion`])
//! - record renderer-agnostic draw commands in a [`DrawList`] with
//!   deterministic ordering (layer + recording order)

mod cmd;
mod key;
mod list;
mod surface;
mod shapes;
mod z_index;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::fill::{FillCmd, FillShape};
pub use shapes::stroke::{StrokeCmd, StrokeShape};
pub use shapes::text::{TextCmd, TextRun};
pub use surface::{PenId, ScopedExclusion, ScopedPen, Surface, SurfaceError};
pub use z_index::ZIndex;
