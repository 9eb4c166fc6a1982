//! Usability checks and item orders for the local player.

use rampart_core::enums::{SpellSlot, SpellState};
use rampart_core::orders::PlayerOrder;
use rampart_core::types::{ObjectId, Position};
use rampart_world::GameWorld;

use crate::catalog::{self, WARD_ITEM_IDS};

/// The spellbook slot the first inventory slot holding `item_id` maps to.
fn item_spell_slot(world: &GameWorld, unit: ObjectId, item_id: u32) -> Option<SpellSlot> {
    let inventory = world.inventory(unit)?;
    let slot = inventory
        .slots
        .iter()
        .find(|slot| slot.item_id == item_id)?;
    SpellSlot::for_item_slot(slot.slot)
}

fn spell_state(world: &GameWorld, unit: ObjectId, slot: SpellSlot) -> Option<SpellState> {
    let spellbook = world.spellbook(unit)?;
    spellbook
        .entries
        .iter()
        .find(|entry| entry.slot == slot)
        .map(|entry| entry.state)
}

/// Whether the local player owns `item_id` and its spell slot is ready.
pub fn can_use_item(world: &GameWorld, item_id: u32) -> bool {
    let player = match world.local_player() {
        Some(player) => player,
        None => return false,
    };
    let slot = match item_spell_slot(world, player, item_id) {
        Some(slot) => slot,
        None => return false,
    };
    spell_state(world, player, slot) == Some(SpellState::Ready)
}

/// [`can_use_item`] by catalog display name.
pub fn can_use_item_named(world: &GameWorld, name: &str) -> bool {
    match catalog::item_id_by_name(name) {
        Some(id) => can_use_item(world, id),
        None => false,
    }
}

/// Whether `unit` (the local player when `None`) carries `item_id`.
pub fn has_item(world: &GameWorld, item_id: u32, unit: Option<ObjectId>) -> bool {
    let unit = match unit.or_else(|| world.local_player()) {
        Some(unit) => unit,
        None => return false,
    };
    match world.inventory(unit) {
        Some(inventory) => inventory.slots.iter().any(|slot| slot.item_id == item_id),
        None => false,
    }
}

/// [`has_item`] by catalog display name.
pub fn has_item_named(world: &GameWorld, name: &str, unit: Option<ObjectId>) -> bool {
    match catalog::item_id_by_name(name) {
        Some(id) => has_item(world, id, unit),
        None => false,
    }
}

/// Queue a cast of the player's `item_id`, optionally on a target unit.
///
/// Readiness is not checked here; an unready cast is the host's to reject.
pub fn use_item(world: &mut GameWorld, item_id: u32, target: Option<ObjectId>) -> bool {
    let player = match world.local_player() {
        Some(player) => player,
        None => return false,
    };
    let slot = match item_spell_slot(world, player, item_id) {
        Some(slot) => slot,
        None => return false,
    };
    world.issue_order(PlayerOrder::CastSpell {
        slot,
        target,
        position: None,
    });
    true
}

/// [`use_item`] by catalog display name.
pub fn use_item_named(world: &mut GameWorld, name: &str, target: Option<ObjectId>) -> bool {
    match catalog::item_id_by_name(name) {
        Some(id) => use_item(world, id, target),
        None => false,
    }
}

/// Queue a cast of the player's `item_id` at a ground position.
///
/// The origin is rejected; hosts pass it as a placeholder for a missing
/// position.
pub fn use_item_at(world: &mut GameWorld, item_id: u32, position: Position) -> bool {
    if position == Position::default() {
        tracing::debug!(item = item_id, "refusing item cast at the origin placeholder");
        return false;
    }
    let player = match world.local_player() {
        Some(player) => player,
        None => return false,
    };
    let slot = match item_spell_slot(world, player, item_id) {
        Some(slot) => slot,
        None => return false,
    };
    world.issue_order(PlayerOrder::CastSpell {
        slot,
        target: None,
        position: Some(position),
    });
    true
}

/// The spell slot of the first usable ward item, scanning ward ids in
/// preference order.
pub fn ward_slot(world: &GameWorld) -> Option<SpellSlot> {
    let player = world.local_player()?;
    for id in WARD_ITEM_IDS {
        if can_use_item(world, id) {
            return item_spell_slot(world, player, id);
        }
    }
    None
}
