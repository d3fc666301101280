use core::f32::consts::PI;

use crate::coords::Vec2;

/// One piece of an outline: a straight line or a circular arc.
///
/// Arc angles are degrees clockwise from +X (Y-down), so a positive sweep
/// turns clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line { from: Vec2, to: Vec2 },
    Arc { center: Vec2, radius: f32, start_deg: f32, sweep_deg: f32 },
}

impl Segment {
    #[inline]
    pub const fn line(from: Vec2, to: Vec2) -> Self {
        Segment::Line { from, to }
    }

    #[inline]
    pub const fn arc(center: Vec2, radius: f32, start_deg: f32, sweep_deg: f32) -> Self {
        Segment::Arc { center, radius, start_deg, sweep_deg }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        match *self {
            Segment::Line { from, .. } => from,
            Segment::Arc { center, radius, start_deg, .. } => {
                center + Vec2::from_angle_deg(start_deg) * radius
            }
        }
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        match *self {
            Segment::Line { to, .. } => to,
            Segment::Arc { center, radius, start_deg, sweep_deg } => {
                center + Vec2::from_angle_deg(start_deg + sweep_deg) * radius
            }
        }
    }

    pub fn length(&self) -> f32 {
        match *self {
            Segment::Line { from, to } => from.distance(to),
            Segment::Arc { radius, sweep_deg, .. } => radius.abs() * sweep_deg.abs() * PI / 180.0,
        }
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, Segment::Arc { .. })
    }

    /// True when the segment collapses to a point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() <= f32::EPSILON
    }

    /// Appends points approximating the segment, excluding its start point.
    ///
    /// Arcs are split so that no chord deviates from the curve by more than
    /// `tolerance`.
    pub fn flatten_into(&self, tolerance: f32, out: &mut Vec<Vec2>) {
        match *self {
            Segment::Line { to, .. } => out.push(to),
            Segment::Arc { center, radius, start_deg, sweep_deg } => {
                let r = radius.abs();
                let steps = if r <= tolerance {
                    1
                } else {
                    // chord sagitta r(1 - cos(θ/2)) <= tolerance
                    let max_step = 2.0 * (1.0 - tolerance / r).clamp(-1.0, 1.0).acos();
                    let sweep = sweep_deg.abs().to_radians();
                    ((sweep / max_step.max(1e-3)).ceil() as usize).clamp(1, 256)
                };
                for i in 1..=steps {
                    let a = start_deg + sweep_deg * i as f32 / steps as f32;
                    out.push(center + Vec2::from_angle_deg(a) * radius);
                }
            }
        }
    }
}

/// A closed outline: segments connected end to end, the last ending where
/// the first starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedPath {
    segments: Vec<Segment>,
}

impl ClosedPath {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn start(&self) -> Option<Vec2> {
        self.segments.first().map(Segment::start)
    }

    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    pub fn arc_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_arc()).count()
    }

    /// Every segment starts where the previous one ended, and the last ends
    /// at the first one's start.
    pub fn is_closed(&self, tolerance: f32) -> bool {
        let Some(first) = self.segments.first() else {
            return false;
        };
        let connected = self
            .segments
            .windows(2)
            .all(|w| w[0].end().approx_eq(w[1].start(), tolerance));
        let last = self.segments[self.segments.len() - 1];
        connected && last.end().approx_eq(first.start(), tolerance)
    }

    /// Polygon approximation of the outline, without a repeated closing point.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec2> {
        let mut points = Vec::new();
        if let Some(start) = self.start() {
            points.push(start);
        }
        for seg in &self.segments {
            seg.flatten_into(tolerance, &mut points);
        }
        if points.len() > 1 {
            points.pop();
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_endpoints_follow_screen_angles() {
        let arc = Segment::arc(Vec2::new(10.0, 10.0), 10.0, 180.0, 90.0);
        assert!(arc.start().approx_eq(Vec2::new(0.0, 10.0), 1e-4));
        assert!(arc.end().approx_eq(Vec2::new(10.0, 0.0), 1e-4));
    }

    #[test]
    fn quarter_arc_length() {
        let arc = Segment::arc(Vec2::zero(), 2.0, 0.0, 90.0);
        assert!((arc.length() - PI).abs() < 1e-5);
    }

    #[test]
    fn zero_length_line_is_degenerate() {
        let p = Vec2::new(3.0, 3.0);
        assert!(Segment::line(p, p).is_degenerate());
        assert!(!Segment::line(p, Vec2::new(3.0, 4.0)).is_degenerate());
    }

    #[test]
    fn flattened_arc_stays_within_tolerance() {
        let arc = Segment::arc(Vec2::zero(), 50.0, 0.0, 90.0);
        let mut pts = Vec::new();
        arc.flatten_into(0.25, &mut pts);
        assert!(pts.len() > 2);
        assert!(pts.last().unwrap().approx_eq(arc.end(), 1e-4));
        for p in &pts {
            assert!((p.length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn empty_path_is_not_closed() {
        assert!(!ClosedPath::default().is_closed(1e-3));
    }
}
