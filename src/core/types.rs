//! Common type definitions shared by the route engine, the map view and the loader.

use std::borrow::Borrow;
use std::fmt;

/// Identity of a spot. Two spots are the same spot iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A named point of interest
#[derive(Debug, Clone)]
pub struct Spot {
    pub key: NodeKey,
    pub latitude: f64,
    pub longitude: f64,
}

impl Spot {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            key: NodeKey::from(name),
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        self.key.as_str()
    }
}

impl PartialEq for Spot {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Spot {}

/// An undirected, weighted connection between two spots
#[derive(Debug, Clone)]
pub struct Connection {
    pub source: NodeKey,
    pub target: NodeKey,
    pub distance: f64,
}

impl Connection {
    pub fn new(source: &str, target: &str, distance: f64) -> Self {
        Self {
            source: NodeKey::from(source),
            target: NodeKey::from(target),
            distance,
        }
    }

    /// True if this connection joins `a` and `b`, in either direction.
    pub fn joins(&self, a: &NodeKey, b: &NodeKey) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }
}

/// The loaded spot/connection set. Immutable once handed to the planner.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub spots: Vec<Spot>,
    pub connections: Vec<Connection>,
}

impl Network {
    pub fn new(spots: Vec<Spot>, connections: Vec<Connection>) -> Self {
        Self { spots, connections }
    }

    pub fn find_spot(&self, name: &str) -> Option<&Spot> {
        self.spots.iter().find(|s| s.name() == name)
    }

    /// First connection between `a` and `b` in insertion order.
    pub fn find_connection(&self, a: &NodeKey, b: &NodeKey) -> Option<&Connection> {
        self.connections.iter().find(|c| c.joins(a, b))
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }
}

/// Wheel direction, as reported by the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

/// Pointer input, independent of any windowing system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Release,
    Wheel { x: f64, y: f64, direction: WheelDirection },
}
