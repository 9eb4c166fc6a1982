//! Fundamental identity, geometric, and timing types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable network identity the engine assigns to every game object.
///
/// Identities survive for the whole session and are never reused, which makes
/// them safe as map keys across uncorrelated event feeds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 3D position in world space (game units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Range to another position (3D distance, game units).
    pub fn range_to(&self, other: &Position) -> f64 {
        self.range_squared_to(other).sqrt()
    }

    /// Squared range to another position. Cheaper than `range_to` for
    /// threshold comparisons.
    pub fn range_squared_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// Monotonic session clock in milliseconds.
///
/// The host advances it between event deliveries; every attack timestamp
/// is read from `now`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameClock {
    /// Elapsed milliseconds since session start.
    pub now_ms: u64,
}

impl GameClock {
    /// Current tick in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}
