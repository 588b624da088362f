use crate::geometry::{round_units, Segment, Vec2};
use crate::outline::Outline;

/// Determinant magnitude below which two segments are treated as parallel
/// and skipped.
const PARALLEL_EPS: f64 = 1e-6;

/// All distinct points where `seg` crosses an edge of the closed outline.
///
/// Classic two-segment intersection solved in parametric form; a crossing
/// counts only when both parameters lie in `[0, 1]` inclusive. Points are
/// rounded half-up to board units, and exact duplicates (a segment passing
/// through a shared vertex of two edges) are reported once.
pub fn intersections(outline: &Outline, seg: Segment) -> Vec<Vec2> {
    let (a, b) = (seg.a, seg.b);
    let mut points: Vec<Vec2> = Vec::new();

    for (c, d) in outline.edges() {
        let denom = (d.y - c.y) as f64 * (b.x - a.x) as f64
            - (d.x - c.x) as f64 * (b.y - a.y) as f64;
        if denom.abs() <= PARALLEL_EPS {
            continue;
        }
        let ab_pos = ((d.x - c.x) as f64 * (a.y - c.y) as f64
            - (d.y - c.y) as f64 * (a.x - c.x) as f64)
            / denom;
        let cd_pos = ((b.x - a.x) as f64 * (a.y - c.y) as f64
            - (b.y - a.y) as f64 * (a.x - c.x) as f64)
            / denom;
        if (0.0..=1.0).contains(&ab_pos) && (0.0..=1.0).contains(&cd_pos) {
            let p = Vec2::new(
                round_units(a.x as f64 + (b.x - a.x) as f64 * ab_pos),
                round_units(a.y as f64 + (b.y - a.y) as f64 * ab_pos),
            );
            if !points.contains(&p) {
                points.push(p);
            }
        }
    }
    points
}
