use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::geometry::{round_units, Vec2};

/// Corner approximation resolution: a full turn is subdivided into this
/// many segments when rounding inflated corners and when synthesizing
/// circular outlines.
const CORNER_SEGMENTS: u32 = 32;

/// A single simple closed contour (no self-intersections, no repeated
/// consecutive vertices). The edge from the last vertex back to the first
/// is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Vec2>,
}

impl Outline {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Counterclockwise polygon approximation of a circle.
    pub fn circle(center: Vec2, radius: i64) -> Self {
        let points = (0..CORNER_SEGMENTS)
            .map(|k| {
                let ang = TAU * f64::from(k) / f64::from(CORNER_SEGMENTS);
                Vec2::new(
                    round_units(center.x as f64 + radius as f64 * ang.cos()),
                    round_units(center.y as f64 + radius as f64 * ang.sin()),
                )
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Edges in order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Even-odd containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let t = (p.y - a.y) as f64 / (b.y - a.y) as f64;
                let x = a.x as f64 + t * (b.x - a.x) as f64;
                if (p.x as f64) < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Closest point on the boundary to `p`, clamped per edge.
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let mut best = [self.points[0].x as f64, self.points[0].y as f64];
        let mut best_d2 = f64::INFINITY;
        for (a, b) in self.edges() {
            let dx = (b.x - a.x) as f64;
            let dy = (b.y - a.y) as f64;
            let len2 = dx * dx + dy * dy;
            let t = if len2 == 0.0 {
                0.0
            } else {
                (((p.x - a.x) as f64) * dx + ((p.y - a.y) as f64) * dy) / len2
            }
            .clamp(0.0, 1.0);
            let cx = a.x as f64 + dx * t;
            let cy = a.y as f64 + dy * t;
            let d2 = (p.x as f64 - cx).powi(2) + (p.y as f64 - cy).powi(2);
            if d2 < best_d2 {
                best_d2 = d2;
                best = [cx, cy];
            }
        }
        Vec2::new(round_units(best[0]), round_units(best[1]))
    }

    /// Outline offset outward by `amount` (inward for negative amounts).
    ///
    /// Outward offsets join convex corners with arcs subdivided at
    /// [`CORNER_SEGMENTS`] per full turn; inward offsets and reflex corners
    /// use miter joins. Works for either winding direction.
    pub fn inflate(&self, amount: i64) -> Outline {
        if amount == 0 {
            return self.clone();
        }
        let n = self.points.len();
        let ccw = self.signed_area() > 0.0;
        let amt = amount as f64;
        let mut raw: Vec<[f64; 2]> = Vec::with_capacity(n * 2);

        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let cur = self.points[i];
            let next = self.points[(i + 1) % n];
            let d0 = [(cur.x - prev.x) as f64, (cur.y - prev.y) as f64];
            let d1 = [(next.x - cur.x) as f64, (next.y - cur.y) as f64];
            let n0 = outward_normal(d0, ccw);
            let n1 = outward_normal(d1, ccw);
            // This vertex offset along each of its two adjacent edges.
            let p0 = [cur.x as f64 + n0[0] * amt, cur.y as f64 + n0[1] * amt];
            let p1 = [cur.x as f64 + n1[0] * amt, cur.y as f64 + n1[1] * amt];
            let cross = d0[0] * d1[1] - d0[1] * d1[0];
            let convex = (cross > 0.0) == ccw;

            if amount > 0 && convex {
                raw.push(p0);
                push_corner_arc(&mut raw, cur, p0, p1, amt, ccw);
                raw.push(p1);
            } else {
                match line_intersection(p0, d0, p1, d1) {
                    Some(m) => raw.push(m),
                    // Near-collinear edges: keep both offset points.
                    None => {
                        raw.push(p0);
                        raw.push(p1);
                    }
                }
            }
        }

        let mut points: Vec<Vec2> = Vec::with_capacity(raw.len());
        for p in raw {
            let v = Vec2::new(round_units(p[0]), round_units(p[1]));
            if points.last() != Some(&v) {
                points.push(v);
            }
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Outline::new(points)
    }

    /// Shoelace area; positive for counterclockwise winding.
    fn signed_area(&self) -> f64 {
        let mut sum = 0.0;
        for (a, b) in self.edges() {
            sum += (a.x as f64) * (b.y as f64) - (b.x as f64) * (a.y as f64);
        }
        sum / 2.0
    }
}

/// Unit normal of edge direction `d` pointing out of the polygon.
fn outward_normal(d: [f64; 2], ccw: bool) -> [f64; 2] {
    let len = d[0].hypot(d[1]);
    if ccw {
        [d[1] / len, -d[0] / len]
    } else {
        [-d[1] / len, d[0] / len]
    }
}

/// Arc about `center` from `p0` to `p1`, sweeping in the polygon's winding
/// direction, endpoints excluded.
fn push_corner_arc(
    out: &mut Vec<[f64; 2]>,
    center: Vec2,
    p0: [f64; 2],
    p1: [f64; 2],
    radius: f64,
    ccw: bool,
) {
    let a0 = (p0[1] - center.y as f64).atan2(p0[0] - center.x as f64);
    let a1 = (p1[1] - center.y as f64).atan2(p1[0] - center.x as f64);
    let mut sweep = a1 - a0;
    if ccw {
        if sweep < -1e-9 {
            sweep += TAU;
        }
    } else if sweep > 1e-9 {
        sweep -= TAU;
    }
    let steps = (sweep.abs() / (TAU / f64::from(CORNER_SEGMENTS))).ceil() as u32;
    for k in 1..steps {
        let ang = a0 + sweep * f64::from(k) / f64::from(steps);
        out.push([
            center.x as f64 + radius * ang.cos(),
            center.y as f64 + radius * ang.sin(),
        ]);
    }
}

/// Intersection of the infinite lines through `p0` along `d0` and `p1`
/// along `d1`. None when near-parallel.
fn line_intersection(
    p0: [f64; 2],
    d0: [f64; 2],
    p1: [f64; 2],
    d1: [f64; 2],
) -> Option<[f64; 2]> {
    let denom = d0[0] * d1[1] - d0[1] * d1[0];
    if denom.abs() < 1e-9 * d0[0].hypot(d0[1]) * d1[0].hypot(d1[1]) {
        return None;
    }
    let t = ((p1[0] - p0[0]) * d1[1] - (p1[1] - p0[1]) * d1[0]) / denom;
    Some([p0[0] + d0[0] * t, p0[1] + d0[1] * t])
}
