//! Route planner: validates selections, enumerates paths and picks the best one.

use super::command_parser::QueryMode;
use super::error::{PlannerError, Result};
use super::types::*;
use crate::route::graph_index::Adjacency;
use crate::route::path_enumerator::{enumerate_simple_paths, Path};
use crate::route::path_selector::{select_best, weigh_all, Route};
use crate::route::report;

/// Result of one query
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAnswer {
    /// `None` when the spots are not connected.
    Best(Option<Route>),
    /// Empty when the spots are not connected.
    All(Vec<Route>),
}

impl RouteAnswer {
    pub fn describe(&self) -> String {
        match self {
            RouteAnswer::Best(route) => report::describe_best(route.as_ref()),
            RouteAnswer::All(routes) => report::describe_all(routes),
        }
    }
}

pub struct RoutePlanner {
    network: Network,
    graph: Adjacency,
    current_path: Path,
}

impl RoutePlanner {
    pub fn new(network: Network) -> Self {
        let graph = Adjacency::build(&network.spots, &network.connections);
        Self {
            network,
            graph,
            current_path: Vec::new(),
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Path of the last best-route query, for highlighting on the map.
    pub fn current_path(&self) -> &[NodeKey] {
        &self.current_path
    }

    pub fn query(&mut self, mode: QueryMode, start: &str, end: &str) -> Result<RouteAnswer> {
        match mode {
            QueryMode::Best => self.best_route(start, end).map(RouteAnswer::Best),
            QueryMode::All => self.all_routes(start, end).map(RouteAnswer::All),
        }
    }

    /// Minimum-distance route, or `None` if the spots are not connected.
    pub fn best_route(&mut self, start: &str, end: &str) -> Result<Option<Route>> {
        let routes = self.all_routes(start, end)?;
        let best = select_best(routes);

        match &best {
            Some(route) => {
                log::info!(
                    "best route {} -> {}: {} hop(s), {:.2} km",
                    start,
                    end,
                    route.segments.len(),
                    route.total_distance
                );
                self.current_path = route.path.clone();
            }
            None => {
                log::info!("no route found from {} to {}", start, end);
                self.current_path.clear();
            }
        }

        Ok(best)
    }

    /// Every simple route between the two spots, in enumeration order.
    pub fn all_routes(&self, start: &str, end: &str) -> Result<Vec<Route>> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;

        let paths = enumerate_simple_paths(&self.graph, start, end);
        let routes = weigh_all(paths, &self.network);
        for route in routes.iter().filter(|r| r.has_unresolved()) {
            log::warn!("route {:?} has segment(s) with no known distance", route.path);
        }
        Ok(routes)
    }

    fn resolve(&self, name: &str) -> Result<&NodeKey> {
        self.network
            .find_spot(name)
            .map(|s| &s.key)
            .ok_or_else(|| PlannerError::InvalidSelection {
                name: name.to_string(),
            })
    }
}
