//! Map drawing: connections, spots with labels, and the highlighted route.

use super::viewport::Viewport;
use crate::core::config;
use crate::core::types::*;
use crate::platform::renderer::Renderer;

pub struct MapView;

impl MapView {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame of `network` through `viewport`.
    ///
    /// Paint order: background, connections, spots and labels, then the
    /// highlighted route on top.
    pub fn render(
        &self,
        renderer: &mut dyn Renderer,
        network: &Network,
        viewport: &Viewport,
        highlighted: &[NodeKey],
        width: i32,
        height: i32,
    ) {
        let (w, h) = (width as f64, height as f64);
        renderer.begin_frame(width, height);
        renderer.fill_rect(0.0, 0.0, w, h, Color::from_hex(config::BG_COLOR, 1.0));

        let connection_color = Color::from_hex(config::CONNECTION_COLOR, 1.0);
        for conn in &network.connections {
            let (source, target) = match (
                network.find_spot(conn.source.as_str()),
                network.find_spot(conn.target.as_str()),
            ) {
                (Some(s), Some(t)) => (s, t),
                _ => continue,
            };
            renderer.draw_line(
                viewport.project(source, w, h),
                viewport.project(target, w, h),
                connection_color,
                config::CONNECTION_WIDTH,
            );
        }

        let spot_color = Color::from_hex(config::SPOT_COLOR, 1.0);
        let label_color = Color::from_hex(config::LABEL_COLOR, 1.0);
        for spot in &network.spots {
            let p = viewport.project(spot, w, h);
            renderer.fill_circle(p.x, p.y, config::SPOT_RADIUS, spot_color);
            renderer.draw_text(
                p.x + config::LABEL_OFFSET,
                p.y,
                spot.name(),
                config::LABEL_SIZE,
                label_color,
            );
        }

        self.render_route(renderer, network, viewport, highlighted, w, h);

        renderer.end_frame();
    }

    fn render_route(
        &self,
        renderer: &dyn Renderer,
        network: &Network,
        viewport: &Viewport,
        route: &[NodeKey],
        w: f64,
        h: f64,
    ) {
        let color = Color::from_hex(config::ROUTE_COLOR, 1.0);
        for pair in route.windows(2) {
            if let (Some(a), Some(b)) = (
                network.find_spot(pair[0].as_str()),
                network.find_spot(pair[1].as_str()),
            ) {
                renderer.draw_line(
                    viewport.project(a, w, h),
                    viewport.project(b, w, h),
                    color,
                    config::ROUTE_WIDTH,
                );
            }
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}
