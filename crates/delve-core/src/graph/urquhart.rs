//! Urquhart reduction of a Delaunay triangulation

use hashbrown::HashSet;

use crate::geometry::{Edge, Triangle};

/// Reduce a triangulation to its Urquhart edges
///
/// Each triangle contributes its two shorter edges (the longest edge is
/// the first maximum in `Triangle::edges` order). An edge shared by two
/// triangles therefore survives unless it is the longest edge of both.
/// The result is deduplicated and ordered by first contribution.
pub fn urquhart(triangles: &[Triangle]) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for t in triangles {
        let longest = t.longest_edge_index();
        for (i, edge) in t.edges().into_iter().enumerate() {
            if i != longest && seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    edges
}
