//! Geographic projection plus the zoom/pan camera driven by pointer input.

use crate::core::config;
use crate::core::types::*;

/// Latitude/longitude extent of the loaded spots. Fixed after load.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Extent of `spots`; all zero when there are none.
    pub fn from_spots(spots: &[Spot]) -> Self {
        if spots.is_empty() {
            return Self::default();
        }

        let mut b = Self {
            min_lat: f64::MAX,
            max_lat: f64::MIN,
            min_lon: f64::MAX,
            max_lon: f64::MIN,
        };
        for spot in spots {
            b.min_lat = b.min_lat.min(spot.latitude);
            b.max_lat = b.max_lat.max(spot.latitude);
            b.min_lon = b.min_lon.min(spot.longitude);
            b.max_lon = b.max_lon.max(spot.longitude);
        }
        b
    }

    fn lat_span(&self) -> f64 {
        non_zero(self.max_lat - self.min_lat)
    }

    fn lon_span(&self) -> f64 {
        non_zero(self.max_lon - self.min_lon)
    }
}

// A single distinct coordinate collapses to the pan anchor instead of dividing by zero.
fn non_zero(span: f64) -> f64 {
    if span == 0.0 {
        1.0
    } else {
        span
    }
}

/// Zoom factor and pan offset. Transitions are pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::default(),
        }
    }
}

impl ViewState {
    /// Scale by `scale` around `cursor`, clamped to the zoom bounds.
    ///
    /// The point under the cursor stays put. Changes below the zoom epsilon
    /// return the state unchanged.
    pub fn zoomed_at(self, scale: f64, cursor: Vec2) -> Self {
        let new_zoom = (self.zoom * scale).clamp(config::ZOOM_MIN, config::ZOOM_MAX);
        if (new_zoom - self.zoom).abs() <= config::ZOOM_EPSILON {
            return self;
        }

        let ratio = new_zoom / self.zoom;
        Self {
            zoom: new_zoom,
            pan: cursor - (cursor - self.pan) * ratio,
        }
    }

    pub fn panned(self, delta: Vec2) -> Self {
        Self {
            zoom: self.zoom,
            pan: self.pan + delta,
        }
    }
}

/// Camera over the map. Holds no rendering state.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    bounds: GeoBounds,
    state: ViewState,
    drag_anchor: Option<Vec2>,
}

impl Viewport {
    pub fn new(bounds: GeoBounds) -> Self {
        Self {
            bounds,
            state: ViewState::default(),
            drag_anchor: None,
        }
    }

    pub fn for_network(network: &Network) -> Self {
        Self::new(GeoBounds::from_spots(&network.spots))
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    /// Project a coordinate onto a `width` x `height` drawing surface, north up.
    pub fn geo_to_screen(&self, latitude: f64, longitude: f64, width: f64, height: f64) -> Vec2 {
        let b = &self.bounds;
        let s = &self.state;
        Vec2 {
            x: (longitude - b.min_lon) / b.lon_span() * width * s.zoom + s.pan.x,
            y: (b.max_lat - latitude) / b.lat_span() * height * s.zoom + s.pan.y,
        }
    }

    pub fn project(&self, spot: &Spot, width: f64, height: f64) -> Vec2 {
        self.geo_to_screen(spot.latitude, spot.longitude, width, height)
    }

    /// Apply one pointer event. Returns true if the view changed and needs a redraw.
    pub fn handle_pointer(&mut self, e: &PointerEvent) -> bool {
        let before = self.state;

        match *e {
            PointerEvent::Wheel { x, y, direction } => {
                let scale = match direction {
                    WheelDirection::In => config::ZOOM_IN_STEP,
                    WheelDirection::Out => config::ZOOM_OUT_STEP,
                };
                self.state = self.state.zoomed_at(scale, Vec2::new(x, y));
                log::debug!("wheel at ({x}, {y}): zoom {} -> {}", before.zoom, self.state.zoom);
            }
            PointerEvent::Press { x, y } => {
                self.drag_anchor = Some(Vec2::new(x, y));
            }
            PointerEvent::Drag { x, y } => {
                let pointer = Vec2::new(x, y);
                match self.drag_anchor {
                    Some(anchor) => {
                        self.state = self.state.panned(pointer - anchor);
                        self.drag_anchor = Some(pointer);
                    }
                    None => log::trace!("drag without press at ({x}, {y}) ignored"),
                }
            }
            PointerEvent::Release => {
                self.drag_anchor = None;
            }
        }

        self.state != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn viewport() -> Viewport {
        let net = Network::new(
            vec![
                Spot::new("A", 30.0, 78.0),
                Spot::new("B", 30.1, 78.1),
                Spot::new("C", 30.2, 78.2),
            ],
            vec![],
        );
        Viewport::for_network(&net)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn test_bounds() {
        let b = viewport().bounds();
        assert_eq!(b.min_lat, 30.0);
        assert_eq!(b.max_lat, 30.2);
        assert_eq!(b.min_lon, 78.0);
        assert_eq!(b.max_lon, 78.2);
        assert_eq!(GeoBounds::from_spots(&[]), GeoBounds::default());
    }

    #[test]
    fn test_projection_corners_north_up() {
        let vp = viewport();
        let nw = vp.geo_to_screen(30.2, 78.0, 1000.0, 800.0);
        let se = vp.geo_to_screen(30.0, 78.2, 1000.0, 800.0);
        assert!(close(nw, Vec2::new(0.0, 0.0)));
        assert!(close(se, Vec2::new(1000.0, 800.0)));
    }

    #[test]
    fn test_degenerate_bounds_project_to_anchor() {
        let vp = Viewport::for_network(&Network::new(vec![Spot::new("Solo", 30.5, 79.0)], vec![]));
        let p = vp.geo_to_screen(30.5, 79.0, 1000.0, 800.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(close(p, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut vp = viewport();
        // (30.18, 78.02) sits at (100, 100) on a 1000x1000 surface at zoom 1.
        let before = vp.geo_to_screen(30.18, 78.02, 1000.0, 1000.0);
        assert!(close(before, Vec2::new(100.0, 100.0)));

        let changed = vp.handle_pointer(&PointerEvent::Wheel {
            x: 100.0,
            y: 100.0,
            direction: WheelDirection::In,
        });
        assert!(changed);
        assert!((vp.zoom() - 1.1).abs() < EPS);

        let after = vp.geo_to_screen(30.18, 78.02, 1000.0, 1000.0);
        assert!(close(after, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_zoom_clamped_and_epsilon_ignored() {
        let mut vp = viewport();
        for _ in 0..40 {
            vp.handle_pointer(&PointerEvent::Wheel { x: 0.0, y: 0.0, direction: WheelDirection::In });
        }
        assert_eq!(vp.zoom(), config::ZOOM_MAX);
        let pan = vp.pan();
        let changed = vp.handle_pointer(&PointerEvent::Wheel {
            x: 50.0,
            y: 50.0,
            direction: WheelDirection::In,
        });
        assert!(!changed);
        assert_eq!(vp.pan(), pan);

        for _ in 0..40 {
            vp.handle_pointer(&PointerEvent::Wheel { x: 0.0, y: 0.0, direction: WheelDirection::Out });
        }
        assert_eq!(vp.zoom(), config::ZOOM_MIN);
    }

    #[test]
    fn test_drag_pans_incrementally() {
        let mut vp = viewport();
        vp.handle_pointer(&PointerEvent::Press { x: 10.0, y: 10.0 });
        assert!(vp.handle_pointer(&PointerEvent::Drag { x: 15.0, y: 12.0 }));
        assert!(vp.handle_pointer(&PointerEvent::Drag { x: 20.0, y: 20.0 }));
        assert_eq!(vp.pan(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut vp = viewport();
        assert!(!vp.handle_pointer(&PointerEvent::Drag { x: 15.0, y: 12.0 }));
        vp.handle_pointer(&PointerEvent::Press { x: 0.0, y: 0.0 });
        vp.handle_pointer(&PointerEvent::Release);
        assert!(!vp.handle_pointer(&PointerEvent::Drag { x: 5.0, y: 5.0 }));
        assert_eq!(vp.pan(), Vec2::default());
    }

    proptest! {
        #[test]
        fn prop_zoom_round_trip_restores_pan(
            zoom in 0.6f64..4.0,
            px in -500.0f64..500.0,
            py in -500.0f64..500.0,
            mx in 0.0f64..1200.0,
            my in 0.0f64..800.0,
            scale in 1.05f64..1.2,
        ) {
            let start = ViewState { zoom, pan: Vec2::new(px, py) };
            let cursor = Vec2::new(mx, my);
            let there = start.zoomed_at(scale, cursor);
            prop_assume!(there.zoom != start.zoom);
            let back = there.zoomed_at(start.zoom / there.zoom, cursor);
            prop_assert!((back.zoom - start.zoom).abs() < 1e-9);
            prop_assert!((back.pan.x - start.pan.x).abs() < 1e-6);
            prop_assert!((back.pan.y - start.pan.y).abs() < 1e-6);
        }
    }
}
