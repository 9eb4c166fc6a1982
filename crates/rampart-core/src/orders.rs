//! Orders issued back to the engine on behalf of the local player.
//!
//! Orders are queued on the game-object store and drained by the host.

use serde::{Deserialize, Serialize};

use crate::enums::SpellSlot;
use crate::types::{ObjectId, Position};

/// All possible outbound player orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerOrder {
    /// Cast the spell in `slot`, optionally on a unit or at a ground position.
    CastSpell {
        slot: SpellSlot,
        target: Option<ObjectId>,
        position: Option<Position>,
    },
    /// Purchase an item from the shop.
    BuyItem { item_id: u32 },
}
