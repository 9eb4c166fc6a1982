//! Components attached to hecs entities in the game-object store.
//!
//! Components are plain data structs with no methods.
//! Lookup and correlation logic lives in the consumer crates.

use serde::{Deserialize, Serialize};

use crate::enums::{ObjectCategory, SpellSlot, SpellState, Team};
use crate::types::ObjectId;

/// Identity and classification of a game object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Stable network identity.
    pub id: ObjectId,
    /// Display name as reported by the engine.
    pub name: String,
    pub category: ObjectCategory,
    pub team: Team,
}

/// Mutable combat state of a unit (turret, hero, minion).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitState {
    /// Whether the unit is still alive and targetable.
    pub valid: bool,
    /// Whether the unit is in its pre-attack animation.
    pub winding_up: bool,
    /// Current attack target, if any.
    pub target: Option<ObjectId>,
}

/// Static ranged-attack parameters of a turret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackStats {
    /// Time between attack initiation and projectile release (seconds).
    pub cast_delay_secs: f64,
    /// Projectile travel speed (game units per second).
    pub projectile_speed: f64,
}

/// One occupied inventory slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InventorySlot {
    /// Inventory slot index (0-5 items, 6 trinket).
    pub slot: usize,
    /// Shop id of the held item.
    pub item_id: u32,
}

/// Items a hero is carrying.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub slots: Vec<InventorySlot>,
}

/// One castable spellbook entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpellEntry {
    pub slot: SpellSlot,
    pub state: SpellState,
}

/// A hero's spellbook, covering abilities, summoners, and item slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spellbook {
    pub entries: Vec<SpellEntry>,
}

/// Marks the hero controlled by the local player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocalPlayer;
