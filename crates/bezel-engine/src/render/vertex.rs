use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Viewport};
use crate::paint::Paint;

/// Position in NDC plus premultiplied color. Shared by line and triangle lists.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Vertex for surface point `p`, colored by `paint` at that point.
    #[inline]
    pub(super) fn at(p: Vec2, paint: &Paint, viewport: Viewport) -> Self {
        Self { pos: viewport.to_ndc(p), color: paint.color_at(p).to_premul_f32() }
    }
}

/// Tessellated draw list, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Line list: every two vertices form one line.
    pub lines: Vec<Vertex>,
    /// Triangle list: every three vertices form one triangle.
    pub triangles: Vec<Vertex>,
    /// Text runs the mesh does not cover; glyph rendering is left to the host.
    pub skipped_text: usize,
}

impl Mesh {
    #[inline]
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    #[inline]
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }
}
