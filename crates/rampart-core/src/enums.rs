//! Enumeration types used throughout the toolkit.

use serde::{Deserialize, Serialize};

use crate::constants::ITEM_SLOT_COUNT;

/// Engine-level object classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    #[default]
    Unknown,
    /// Stationary defensive structure with periodic ranged attacks.
    Turret,
    /// Player-controlled champion.
    Hero,
    /// AI-controlled lane unit.
    Minion,
    /// Visual particle effect emitter.
    ParticleEmitter,
}

/// Side a game object fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Unknown,
    /// Blue side.
    Order,
    /// Red side.
    Chaos,
    /// Jungle camps and other unaligned units.
    Neutral,
}

/// Spellbook slot layout.
///
/// Inventory slots 0-5 back `Item1`..`Item6`; slot 6 backs `Trinket`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSlot {
    #[default]
    Unknown,
    Q,
    W,
    E,
    R,
    Summoner1,
    Summoner2,
    Item1,
    Item2,
    Item3,
    Item4,
    Item5,
    Item6,
    Trinket,
}

impl SpellSlot {
    /// Item-backed slots in inventory order.
    pub const ITEM_SLOTS: [SpellSlot; ITEM_SLOT_COUNT] = [
        SpellSlot::Item1,
        SpellSlot::Item2,
        SpellSlot::Item3,
        SpellSlot::Item4,
        SpellSlot::Item5,
        SpellSlot::Item6,
        SpellSlot::Trinket,
    ];

    /// Spellbook slot backing inventory slot `index`, if in range.
    pub fn for_item_slot(index: usize) -> Option<SpellSlot> {
        Self::ITEM_SLOTS.get(index).copied()
    }
}

/// Castability state of a spellbook entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellState {
    /// Ready to cast.
    #[default]
    Ready,
    /// Recharging after a recent cast.
    Cooldown,
    /// Not enough mana or charges.
    NoMana,
    /// Slot cannot be cast at all (empty or consumed).
    Disabled,
}
