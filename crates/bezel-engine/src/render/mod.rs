//! CPU tessellation of recorded draw lists.
//!
//! Output is GPU-ready: `#[repr(C)]` [`Vertex`] values that cast to bytes
//! with `bytemuck`, positions already in NDC, colors premultiplied.
//!
//! Convention:
//! - input geometry is in surface units (top-left origin, +Y down)
//! - strokes become line lists, fills become triangle lists

mod dash;
mod tessellate;
mod vertex;

pub use tessellate::tessellate;
pub use vertex::{Mesh, Vertex};
