//! Route weighting and minimum-distance selection.

use super::path_enumerator::Path;
use crate::core::types::{Network, NodeKey};

/// One hop of a route. `distance` is `None` when no connection joins the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: NodeKey,
    pub to: NodeKey,
    pub distance: Option<f64>,
}

impl Segment {
    pub fn is_resolved(&self) -> bool {
        self.distance.is_some()
    }
}

/// A path together with its per-hop distances and total.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    pub segments: Vec<Segment>,
    pub total_distance: f64,
}

impl Route {
    /// Weigh `path` against the network's connections. Each hop resolves to
    /// the first connection joining the pair; unresolved hops add nothing.
    pub fn weigh(path: Path, network: &Network) -> Self {
        let segments: Vec<Segment> = path
            .windows(2)
            .map(|pair| Segment {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance: network
                    .find_connection(&pair[0], &pair[1])
                    .map(|c| c.distance),
            })
            .collect();

        let total_distance: f64 = segments.iter().filter_map(|s| s.distance).sum();

        Self {
            path,
            segments,
            total_distance,
        }
    }

    pub fn has_unresolved(&self) -> bool {
        self.segments.iter().any(|s| !s.is_resolved())
    }
}

/// The route with strictly minimal total distance; the first one wins ties.
/// `None` means no route was found.
pub fn select_best(routes: Vec<Route>) -> Option<Route> {
    let mut best: Option<Route> = None;
    for route in routes {
        let better = best
            .as_ref()
            .map_or(true, |b| route.total_distance < b.total_distance);
        if better {
            best = Some(route);
        }
    }
    best
}

/// Weigh every path, keeping enumeration order.
pub fn weigh_all(paths: Vec<Path>, network: &Network) -> Vec<Route> {
    paths
        .into_iter()
        .map(|p| Route::weigh(p, network))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Connection, Spot};

    fn network() -> Network {
        Network::new(
            vec![
                Spot::new("A", 30.0, 78.0),
                Spot::new("B", 30.1, 78.1),
                Spot::new("C", 30.2, 78.2),
            ],
            vec![
                Connection::new("A", "B", 10.0),
                Connection::new("B", "C", 15.0),
                Connection::new("A", "C", 30.0),
            ],
        )
    }

    fn path(names: &[&str]) -> Path {
        names.iter().map(|&n| NodeKey::from(n)).collect()
    }

    #[test]
    fn test_weigh_sums_segments() {
        let route = Route::weigh(path(&["A", "B", "C"]), &network());
        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.segments[0].distance, Some(10.0));
        assert_eq!(route.segments[1].distance, Some(15.0));
        assert_eq!(route.total_distance, 25.0);
    }

    #[test]
    fn test_single_spot_route_has_zero_weight() {
        let route = Route::weigh(path(&["B"]), &network());
        assert!(route.segments.is_empty());
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn test_unresolved_segment_is_skipped_not_fatal() {
        let mut net = network();
        net.spots.push(Spot::new("Z", 31.0, 79.0));
        let route = Route::weigh(path(&["A", "Z", "C"]), &net);
        assert!(route.has_unresolved());
        assert_eq!(route.segments[0].distance, None);
        assert_eq!(route.total_distance, 0.0);

        let route = Route::weigh(path(&["A", "B", "Z"]), &net);
        assert_eq!(route.total_distance, 10.0);
    }

    #[test]
    fn test_first_parallel_connection_wins() {
        let mut net = network();
        net.connections.push(Connection::new("B", "A", 1.0));
        let route = Route::weigh(path(&["B", "A"]), &net);
        assert_eq!(route.total_distance, 10.0);
    }

    #[test]
    fn test_select_best_picks_minimum() {
        let net = network();
        let routes = weigh_all(vec![path(&["A", "C"]), path(&["A", "B", "C"])], &net);
        let best = select_best(routes).unwrap();
        assert_eq!(best.path, path(&["A", "B", "C"]));
        assert_eq!(best.total_distance, 25.0);
    }

    #[test]
    fn test_select_best_ties_keep_first() {
        let net = Network::new(
            vec![],
            vec![
                Connection::new("A", "B", 5.0),
                Connection::new("B", "D", 5.0),
                Connection::new("A", "C", 5.0),
                Connection::new("C", "D", 5.0),
            ],
        );
        let routes = weigh_all(
            vec![path(&["A", "C", "D"]), path(&["A", "B", "D"])],
            &net,
        );
        let best = select_best(routes).unwrap();
        assert_eq!(best.path, path(&["A", "C", "D"]));
    }

    #[test]
    fn test_select_best_empty_is_none() {
        assert!(select_best(Vec::new()).is_none());
    }
}
