//! Triangle with a precomputed circumcircle

use core::hash::{Hash, Hasher};

use super::{Edge, Vec2f};
use crate::error::{GenerationError, Result};

/// Three vertices plus their circumcircle
///
/// The circumcenter is computed once, in f64, when the triangle is built.
/// Collinear vertices are rejected rather than producing a NaN center.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    vertices: [Vec2f; 3],
    center: (f64, f64),
    radius_sq: f64,
}

impl Triangle {
    /// Build a triangle, failing with `DegenerateTriangle` on collinear input
    pub fn new(a: Vec2f, b: Vec2f, c: Vec2f) -> Result<Self> {
        let (ax, ay) = (a.x as f64, a.y as f64);
        let (bx, by) = (b.x as f64, b.y as f64);
        let (cx, cy) = (c.x as f64, c.y as f64);

        // Twice the signed area
        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d == 0.0 {
            return Err(GenerationError::DegenerateTriangle { a, b, c });
        }

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;
        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;
        if !(ux.is_finite() && uy.is_finite()) {
            return Err(GenerationError::DegenerateTriangle { a, b, c });
        }

        let radius_sq = (ax - ux) * (ax - ux) + (ay - uy) * (ay - uy);
        Ok(Self {
            vertices: [a, b, c],
            center: (ux, uy),
            radius_sq,
        })
    }

    pub fn vertices(&self) -> [Vec2f; 3] {
        self.vertices
    }

    /// Edges in vertex order: ab, bc, ca
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Index into `edges()` of the longest edge
    ///
    /// Ties go to the first edge encountered.
    pub fn longest_edge_index(&self) -> usize {
        let edges = self.edges();
        let mut best = 0;
        for i in 1..3 {
            if edges[i].length() > edges[best].length() {
                best = i;
            }
        }
        best
    }

    pub fn circumcenter(&self) -> Vec2f {
        Vec2f::new(self.center.0 as f32, self.center.1 as f32)
    }

    pub fn circumradius(&self) -> f32 {
        self.radius_sq.sqrt() as f32
    }

    /// Check if `p` lies inside or on the circumcircle
    pub fn circumcircle_contains(&self, p: Vec2f) -> bool {
        let dx = p.x as f64 - self.center.0;
        let dy = p.y as f64 - self.center.1;
        dx * dx + dy * dy <= self.radius_sq
    }

    pub fn has_vertex(&self, p: Vec2f) -> bool {
        self.vertices.contains(&p)
    }

    /// Check if any vertex is shared with `other`
    pub fn shares_vertex(&self, other: &Triangle) -> bool {
        self.vertices.iter().any(|&v| other.has_vertex(v))
    }

    fn sorted_keys(&self) -> [(u32, u32); 3] {
        let mut keys = self.vertices.map(Vec2f::key);
        keys.sort_unstable();
        keys
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_keys() == other.sorted_keys()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_keys().hash(state);
    }
}
