//! Depth-first enumeration of every simple path between two spots.

use super::graph_index::Adjacency;
use crate::core::types::NodeKey;
use std::collections::HashSet;

/// Ordered sequence of distinct spots.
pub type Path = Vec<NodeKey>;

/// Per-query search state: the spots on the current branch and the branch itself.
struct Search<'a> {
    graph: &'a Adjacency,
    end: &'a NodeKey,
    visited: HashSet<&'a NodeKey>,
    current: Vec<&'a NodeKey>,
    found: Vec<Path>,
}

impl<'a> Search<'a> {
    fn visit(&mut self, node: &'a NodeKey) {
        self.visited.insert(node);
        self.current.push(node);

        if node == self.end {
            self.found
                .push(self.current.iter().map(|&k| k.clone()).collect());
        } else {
            let graph = self.graph;
            for next in graph.neighbors(node.as_str()) {
                if !self.visited.contains(next) {
                    self.visit(next);
                }
            }
        }

        // Backtrack so the spot can be reused on another branch.
        self.visited.remove(node);
        self.current.pop();
    }
}

/// All simple paths from `start` to `end`, in depth-first adjacency order.
///
/// Brute force: the number of paths grows combinatorially on dense or
/// cyclic networks and the search always runs to completion. Callers check
/// that both spots exist; an unknown `start` simply yields no neighbors.
pub fn enumerate_simple_paths(graph: &Adjacency, start: &NodeKey, end: &NodeKey) -> Vec<Path> {
    let mut search = Search {
        graph,
        end,
        visited: HashSet::new(),
        current: Vec::new(),
        found: Vec::new(),
    };
    search.visit(start);
    log::debug!(
        "enumerated {} path(s) from {} to {}",
        search.found.len(),
        start,
        end
    );
    search.found
}
