use super::Vec2;

/// Axis-aligned rectangle in surface units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self::from_origin_size(self.origin + offset, self.size)
    }

    /// Point containment; the right and bottom edges are inclusive.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.x() && p.x <= self.right() && p.y >= self.y() && p.y <= self.bottom()
    }

    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains(other.min()) && self.contains(other.max())
    }

    /// Clamps width and height to at least one unit.
    ///
    /// Every drawing entry point runs its rectangle through this first, so
    /// zero or negative sizes never reach path construction.
    #[inline]
    pub fn at_least_one(self) -> Self {
        Rect::new(self.origin.x, self.origin.y, self.size.x.max(1.0), self.size.y.max(1.0))
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── at_least_one ──────────────────────────────────────────────────────

    #[test]
    fn at_least_one_keeps_valid_sizes() {
        let rect = r(3.0, 4.0, 10.0, 20.0);
        assert_eq!(rect.at_least_one(), rect);
    }

    #[test]
    fn at_least_one_clamps_zero_and_negative() {
        assert_eq!(r(3.0, 4.0, 0.0, -7.0).at_least_one(), r(3.0, 4.0, 1.0, 1.0));
        assert_eq!(r(0.0, 0.0, 0.5, 30.0).at_least_one(), r(0.0, 0.0, 1.0, 30.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn edges_and_center() {
        let rect = r(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 45.0));
        assert_eq!(rect.translated(Vec2::new(1.0, -1.0)), r(11.0, 19.0, 100.0, 50.0));
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.5, 5.0)));
        assert!(rect.contains_rect(r(2.0, 2.0, 8.0, 8.0)));
        assert!(!rect.contains_rect(r(2.0, 2.0, 9.0, 8.0)));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
