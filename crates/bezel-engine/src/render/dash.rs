use crate::coords::Vec2;

/// Upper bound on pieces per polyline; past it the remainder is drawn solid.
const MAX_PIECES: usize = 1 << 16;

/// Splits a polyline into drawn pieces following an on/off `pattern`.
///
/// Pattern lengths are in surface units; an empty pattern draws every
/// segment. The pattern phase carries across polyline vertices. Positions
/// along a segment are tracked in `f64` so very long segments still advance.
pub(super) fn dash_polyline(points: &[Vec2], pattern: &[f32]) -> Vec<(Vec2, Vec2)> {
    let mut out = Vec::new();
    if pattern.is_empty() || pattern.iter().sum::<f32>() <= f32::EPSILON {
        out.extend(points.windows(2).map(|w| (w[0], w[1])));
        return out;
    }

    let mut idx = 0;
    let mut left = f64::from(pattern[0]);
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let len = f64::from(a.distance(b));
        if len <= f64::from(f32::EPSILON) {
            continue;
        }
        let dir = (b - a) / len as f32;
        let at = |t: f64| if t >= len { b } else { a + dir * t as f32 };

        let mut pos = 0.0;
        while pos < len {
            if out.len() >= MAX_PIECES {
                log::debug!("dash pattern exceeded {MAX_PIECES} pieces, drawing the rest solid");
                out.push((at(pos), b));
                break;
            }
            let run = left.min(len - pos);
            if idx % 2 == 0 && run > 0.0 {
                out.push((at(pos), at(pos + run)));
            }
            let next = pos + run;
            if run > 0.0 && next <= pos {
                break;
            }
            pos = next;
            left -= run;
            if left <= f64::from(f32::EPSILON) {
                idx = (idx + 1) % pattern.len();
                left = f64::from(pattern[idx]);
            }
        }
    }
    out
}
