//! Bowyer–Watson Delaunay triangulation

use hashbrown::{HashMap, HashSet};
use log::warn;

use crate::consts::SUPER_TRIANGLE_SCALE;
use crate::geometry::{Edge, Triangle, Vec2f};

/// Triangle strictly enclosing every point in `points`
///
/// Built from the bounding box: with `m` its larger side, the corners are
/// `(mid_x - 20m, mid_y - m)`, `(mid_x, mid_y + 20m)` and
/// `(mid_x + 20m, mid_y - m)`. Returns `None` for an empty slice.
pub fn super_triangle(points: &[Vec2f]) -> Option<Triangle> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let m = (max_x - min_x).max(max_y - min_y).max(1.0);
    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;
    let scale = SUPER_TRIANGLE_SCALE * m;

    Triangle::new(
        Vec2f::new(mid_x - scale, mid_y - m),
        Vec2f::new(mid_x, mid_y + scale),
        Vec2f::new(mid_x + scale, mid_y - m),
    )
    .ok()
}

/// Delaunay triangulation of `points`
///
/// Points are inserted in input order; exact duplicates are ignored. Fewer
/// than three distinct points yields no triangles. A point whose insertion
/// would create a degenerate triangle is skipped and the triangulation is
/// left as it was before that point. No returned triangle touches the
/// super-triangle.
pub fn triangulate(points: &[Vec2f]) -> Vec<Triangle> {
    triangulate_unique(&dedup_points(points))
}

/// `points` with exact duplicates removed, first occurrence kept
pub(crate) fn dedup_points(points: &[Vec2f]) -> Vec<Vec2f> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// [`triangulate`] over points already known to be distinct
pub(crate) fn triangulate_unique(unique: &[Vec2f]) -> Vec<Triangle> {
    if unique.len() < 3 {
        return Vec::new();
    }

    let Some(seed) = super_triangle(unique) else {
        return Vec::new();
    };

    let mut triangles = vec![seed];
    for &p in unique {
        if !insert_point(&mut triangles, p) {
            warn!("Skipping triangulation point {p}: insertion would be degenerate");
        }
    }

    triangles.retain(|t| !t.shares_vertex(&seed));
    triangles
}

/// Insert one point, re-triangulating the cavity it opens
///
/// Returns false (and leaves `triangles` untouched) if the point cannot be
/// inserted without a degenerate triangle.
fn insert_point(triangles: &mut Vec<Triangle>, p: Vec2f) -> bool {
    let bad: Vec<bool> = triangles.iter().map(|t| t.circumcircle_contains(p)).collect();
    if !bad.contains(&true) {
        return false;
    }

    // Cavity boundary: edges owned by exactly one bad triangle
    let mut counts: HashMap<Edge, u32> = HashMap::new();
    let mut cavity_edges = Vec::new();
    for (t, _) in triangles.iter().zip(&bad).filter(|(_, is_bad)| **is_bad) {
        for edge in t.edges() {
            let count = counts.entry(edge).or_insert(0);
            if *count == 0 {
                cavity_edges.push(edge);
            }
            *count += 1;
        }
    }

    let mut fresh = Vec::with_capacity(cavity_edges.len());
    for edge in cavity_edges.into_iter().filter(|e| counts[e] == 1) {
        match Triangle::new(edge.a, edge.b, p) {
            Ok(t) => fresh.push(t),
            Err(_) => return false,
        }
    }

    let mut flags = bad.into_iter();
    triangles.retain(|_| !flags.next().unwrap_or(false));
    triangles.extend(fresh);
    true
}
