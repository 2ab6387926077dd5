//! Room connectivity graph
//!
//! Room centers are triangulated with Bowyer–Watson and reduced to an
//! Urquhart graph. The triangulation is kept alongside the edges for
//! diagnostics; only the edges drive corridor carving.

mod delaunay;
mod urquhart;

pub use delaunay::{super_triangle, triangulate};
pub use urquhart::urquhart;

use delaunay::{dedup_points, triangulate_unique};

use hashbrown::HashSet;
use log::debug;

use crate::geometry::{Edge, Triangle, Vec2f};

/// Triangulation plus the reduced edge set connecting room centers
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    pub triangles: Vec<Triangle>,
    pub edges: Vec<Edge>,
}

impl RoomGraph {
    /// Build the connectivity graph over `points`
    ///
    /// When no triangle survives (fewer than three distinct points, or all
    /// of them collinear) the points are chained in lexicographic order.
    /// Otherwise any point left out of the triangulation is joined to its
    /// nearest neighbour.
    pub fn build(points: &[Vec2f]) -> Self {
        let unique = dedup_points(points);

        let triangles = triangulate_unique(&unique);
        let mut edges = urquhart(&triangles);

        if triangles.is_empty() {
            edges = chain(&unique);
            debug!("No triangles over {} points, chained {} edges", unique.len(), edges.len());
        } else {
            attach_isolated(&unique, &mut edges);
        }

        Self { triangles, edges }
    }
}

/// Connect points in lexicographic (x, then y) order
fn chain(points: &[Vec2f]) -> Vec<Edge> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.windows(2).map(|w| Edge::new(w[0], w[1])).collect()
}

/// Join every point with no incident edge to its nearest neighbour
fn attach_isolated(points: &[Vec2f], edges: &mut Vec<Edge>) {
    let mut present: HashSet<Edge> = edges.iter().copied().collect();
    for &p in points {
        if edges.iter().any(|e| e.has_endpoint(p)) {
            continue;
        }
        let nearest = points
            .iter()
            .copied()
            .filter(|&q| q != p)
            .min_by(|&a, &b| p.distance(a).total_cmp(&p.distance(b)));
        if let Some(q) = nearest {
            let edge = Edge::new(p, q);
            if present.insert(edge) {
                debug!("Attaching isolated point {p} to {q}");
                edges.push(edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2f {
        Vec2f::new(x, y)
    }

    #[test]
    fn test_two_points_single_edge() {
        let graph = RoomGraph::build(&[v(50.0, 10.0), v(5.0, 20.0)]);
        assert!(graph.triangles.is_empty());
        assert_eq!(graph.edges, vec![Edge::new(v(5.0, 20.0), v(50.0, 10.0))]);
    }

    #[test]
    fn test_single_point_no_edges() {
        let graph = RoomGraph::build(&[v(1.0, 1.0), v(1.0, 1.0)]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_collinear_chain() {
        let pts = [v(30.0, 30.0), v(10.0, 10.0), v(20.0, 20.0), v(0.0, 0.0)];
        let graph = RoomGraph::build(&pts);
        assert!(graph.triangles.is_empty());
        assert_eq!(
            graph.edges,
            vec![
                Edge::new(v(0.0, 0.0), v(10.0, 10.0)),
                Edge::new(v(10.0, 10.0), v(20.0, 20.0)),
                Edge::new(v(20.0, 20.0), v(30.0, 30.0)),
            ]
        );
    }

    #[test]
    fn test_every_point_has_an_edge() {
        let pts: Vec<Vec2f> = (0..15)
            .map(|i| v((i * 41 % 150) as f32, (i * 29 % 110) as f32))
            .collect();
        let graph = RoomGraph::build(&pts);
        assert!(!graph.triangles.is_empty());
        for p in &pts {
            assert!(graph.edges.iter().any(|e| e.has_endpoint(*p)), "{p} is isolated");
        }
    }

    #[test]
    fn test_attach_isolated_picks_nearest() {
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0), v(11.0, 1.0)];
        let mut edges = vec![Edge::new(pts[0], pts[1]), Edge::new(pts[0], pts[2])];
        attach_isolated(&pts, &mut edges);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Edge::new(v(11.0, 1.0), v(10.0, 0.0)));
    }

    #[test]
    fn test_duplicate_centers_match_distinct_build() {
        let distinct = [v(0.0, 0.0), v(40.0, 5.0), v(15.0, 30.0), v(50.0, 40.0)];
        let repeated = [
            distinct[0], distinct[1], distinct[0], distinct[2], distinct[1], distinct[3],
            distinct[3],
        ];
        let a = RoomGraph::build(&distinct);
        let b = RoomGraph::build(&repeated);
        assert_eq!(a.triangles, b.triangles);
        assert_eq!(a.edges, b.edges);
        assert!(b.edges.iter().all(|e| e.length() > 0.0));
    }
}
