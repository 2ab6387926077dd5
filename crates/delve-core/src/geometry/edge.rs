//! Undirected edge between two points

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Vec2f;

/// An unordered pair of endpoints
///
/// `Edge::new(a, b) == Edge::new(b, a)` and both hash identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub a: Vec2f,
    pub b: Vec2f,
}

impl Edge {
    pub const fn new(a: Vec2f, b: Vec2f) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    /// Check if `p` is one of the endpoints
    pub fn has_endpoint(&self, p: Vec2f) -> bool {
        self.a == p || self.b == p
    }

    /// Endpoint keys in canonical order
    fn canonical(&self) -> [(u32, u32); 2] {
        let (ka, kb) = (self.a.key(), self.b.key());
        if ka <= kb { [ka, kb] } else { [kb, ka] }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use proptest::prelude::*;
    use std::hash::BuildHasher;

    #[test]
    fn test_order_independent_equality() {
        let a = Vec2f::new(1.0, 2.0);
        let b = Vec2f::new(5.0, -3.0);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_ne!(Edge::new(a, b), Edge::new(a, Vec2f::new(5.0, 3.0)));
    }

    #[test]
    fn test_set_dedup() {
        let a = Vec2f::new(0.0, 0.0);
        let b = Vec2f::new(3.0, 4.0);
        let mut set = HashSet::new();
        set.insert(Edge::new(a, b));
        set.insert(Edge::new(b, a));
        assert_eq!(set.len(), 1);
        assert_eq!(Edge::new(a, b).length(), 5.0);
        assert!(Edge::new(a, b).has_endpoint(b));
    }

    proptest! {
        #[test]
        fn test_edge_hash_symmetry(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let a = Vec2f::new(ax, ay);
            let b = Vec2f::new(bx, by);
            let ab = Edge::new(a, b);
            let ba = Edge::new(b, a);
            prop_assert_eq!(ab, ba);
            let state = hashbrown::DefaultHashBuilder::default();
            prop_assert_eq!(state.hash_one(ab), state.hash_one(ba));
        }
    }
}
