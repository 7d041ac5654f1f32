//! Plain-text route descriptions.

use super::path_selector::Route;
use std::fmt::Write;

pub const NO_ROUTE: &str = "No route found.";

/// Hop-by-hop description of the best route.
pub fn describe_best(route: Option<&Route>) -> String {
    let route = match route {
        Some(r) if !r.path.is_empty() => r,
        _ => return NO_ROUTE.to_string(),
    };

    let mut out = String::from("Best Route Details:\n\n");
    for (i, seg) in route.segments.iter().enumerate() {
        match seg.distance {
            Some(d) => {
                let _ = writeln!(out, "{}. {} → {} ({:.2} km)", i + 1, seg.from, seg.to, d);
            }
            None => {
                let _ = writeln!(out, "{}. {} → {} (Distance not found)", i + 1, seg.from, seg.to);
            }
        }
    }
    let _ = write!(out, "\nTotal Route Distance: {:.2} km", route.total_distance);
    out
}

/// One line per enumerated route, in enumeration order.
pub fn describe_all(routes: &[Route]) -> String {
    if routes.is_empty() {
        return NO_ROUTE.to_string();
    }

    let mut out = String::from("All Routes:\n\n");
    for route in routes {
        let names: Vec<&str> = route.path.iter().map(|k| k.as_str()).collect();
        let _ = write!(
            out,
            "Route: {} (Total Distance: {:.2} km)",
            names.join(" → "),
            route.total_distance
        );
        for seg in route.segments.iter().filter(|s| !s.is_resolved()) {
            let _ = write!(out, " [distance not found: {} → {}]", seg.from, seg.to);
        }
        out.push('\n');
    }
    out
}
