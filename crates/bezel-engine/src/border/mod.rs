//! Border, background, gradient and text rendering onto a [`Surface`](crate::scene::Surface).
//!
//! [`plan_border`] is the pure part: it decides which segments are visible.
//! The `draw_*`/`fill_*`/`paint_*` functions feed plans and outlines to a
//! surface with scoped pens and exclusion regions.

mod draw;
mod fill;
mod plan;
mod text;

pub use draw::{draw_border, fill_background};
pub use fill::{paint_frame, paint_gradient};
pub use plan::{plan_border, BorderPart, BorderPlan};
pub use text::draw_embossed_text;
