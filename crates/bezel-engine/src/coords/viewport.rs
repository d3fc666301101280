use super::Vec2;

/// Surface size in logical pixels.
///
/// Tessellation uses this as the basis for converting positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a top-left-origin position to normalized device coordinates
    /// (`[-1, 1]`, +Y up).
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> [f32; 2] {
        [p.x / self.width * 2.0 - 1.0, 1.0 - p.y / self.height * 2.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_ndc_extremes() {
        let v = Viewport::new(200.0, 100.0);
        assert_eq!(v.to_ndc(Vec2::new(0.0, 0.0)), [-1.0, 1.0]);
        assert_eq!(v.to_ndc(Vec2::new(200.0, 100.0)), [1.0, -1.0]);
        assert_eq!(v.to_ndc(Vec2::new(100.0, 50.0)), [0.0, 0.0]);
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
