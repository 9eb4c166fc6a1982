//! Item usability checks and item orders for the local player.
//!
//! Readiness is resolved by walking the player's inventory to the spellbook
//! slot an item is bound to. Item use never executes anything directly; it
//! queues a [`PlayerOrder`](rampart_core::orders::PlayerOrder) on the world
//! for the host to carry out.

pub mod catalog;
pub mod item;
pub mod usage;

pub use item::Item;
pub use usage::{
    can_use_item, can_use_item_named, has_item, has_item_named, use_item, use_item_at,
    use_item_named, ward_slot,
};
