//! Adjacency index over the undirected spot/connection network.

use crate::core::types::{Connection, NodeKey, Spot};
use std::collections::HashMap;

/// Neighbor lists keyed by spot. Symmetric by construction.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: HashMap<NodeKey, Vec<NodeKey>>,
}

impl Adjacency {
    /// Build the neighbor lists from a flat connection list.
    ///
    /// Each connection appends the opposite endpoint to both sides, in
    /// connection order. Parallel connections are kept, so a neighbor can
    /// appear more than once; self-loops add the spot to its own list.
    pub fn build(spots: &[Spot], connections: &[Connection]) -> Self {
        let mut neighbors: HashMap<NodeKey, Vec<NodeKey>> = HashMap::new();

        for spot in spots {
            neighbors.entry(spot.key.clone()).or_default();
        }

        for conn in connections {
            neighbors
                .entry(conn.source.clone())
                .or_default()
                .push(conn.target.clone());
            neighbors
                .entry(conn.target.clone())
                .or_default()
                .push(conn.source.clone());
        }

        Self { neighbors }
    }

    /// Neighbors of `key` in insertion order; empty for unknown keys.
    pub fn neighbors(&self, key: &str) -> &[NodeKey] {
        self.neighbors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.neighbors.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &NodeKey> {
        self.neighbors.keys()
    }
}
