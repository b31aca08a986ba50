//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Width and height of an axis-aligned box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Packed RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Simulation time tracking.
///
/// `now_ms` is the host's monotonic clock as passed into the last tick;
/// every deadline in the world is compared against it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed.
    pub tick: u64,
    /// Host clock at the last tick (milliseconds).
    pub now_ms: f64,
    /// Clamped delta applied by the last tick (milliseconds).
    pub dt_ms: f32,
    /// Accumulated simulated time while a run was active (milliseconds).
    pub active_ms: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Move by `velocity` over `dt_secs`.
    pub fn advance(&mut self, velocity: &Velocity, dt_secs: f32) {
        self.x += velocity.x * dt_secs;
        self.y += velocity.y * dt_secs;
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f32 {
        self.as_vec2().length()
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(pos: &Position, size: &Size) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict point containment (edges excluded).
    pub fn contains(&self, p: &Position) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    /// Strict overlap test between two rectangles.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }

    /// Grow the rectangle by `dx` on the left and right and `dy` on top only.
    pub fn padded(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x - dx, self.y - dy, self.w + 2.0 * dx, self.h + dy)
    }
}

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl SimTime {
    /// Seconds applied by the last tick.
    pub fn dt_secs(&self) -> f32 {
        self.dt_ms / 1000.0
    }
}
