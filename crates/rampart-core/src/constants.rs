//! Shared constants for turret tracking and inventory handling.

// --- Turret attack correlation ---

/// Substring present in the display name of turret attack particle emitters.
pub const TURRET_BOLT_MARKER: &str = "Turret";

/// Milliseconds per second, for converting cast delays and travel times.
pub const MS_PER_SEC: f64 = 1000.0;

// --- Inventory ---

/// Number of usable inventory slots (six items plus the trinket).
pub const ITEM_SLOT_COUNT: usize = 7;
