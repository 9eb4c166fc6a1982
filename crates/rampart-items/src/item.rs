//! A reusable handle for one item id and its cast range.

use rampart_core::enums::SpellSlot;
use rampart_core::orders::PlayerOrder;
use rampart_core::types::{ObjectId, Position};
use rampart_world::GameWorld;

use crate::catalog;
use crate::usage;

/// One item, with the cast range scripts should respect when using it.
#[derive(Debug, Clone)]
pub struct Item {
    id: u32,
    name: Option<&'static str>,
    range: f64,
    range_sq: f64,
}

impl Item {
    pub fn new(id: u32, range: f64) -> Self {
        Self {
            id,
            name: catalog::item_name(id),
            range,
            range_sq: range * range,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Catalog display name, when the id is known.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn range_squared(&self) -> f64 {
        self.range_sq
    }

    /// Change the cast range, keeping the squared range in sync.
    pub fn set_range(&mut self, range: f64) {
        self.range = range;
        self.range_sq = range * range;
    }

    /// Whether the local player can cast this item right now.
    pub fn is_ready(&self, world: &GameWorld) -> bool {
        usage::can_use_item(world, self.id)
    }

    /// Whether `unit` (the local player when `None`) owns this item.
    pub fn is_owned(&self, world: &GameWorld, unit: Option<ObjectId>) -> bool {
        usage::has_item(world, self.id, unit)
    }

    /// Every spell slot of the player currently holding this item.
    pub fn slots(&self, world: &GameWorld) -> Vec<SpellSlot> {
        let player = match world.local_player() {
            Some(player) => player,
            None => return Vec::new(),
        };
        let inventory = match world.inventory(player) {
            Some(inventory) => inventory,
            None => return Vec::new(),
        };
        inventory
            .slots
            .iter()
            .filter(|slot| slot.item_id == self.id)
            .filter_map(|slot| SpellSlot::for_item_slot(slot.slot))
            .collect()
    }

    /// Queue a cast with no target.
    pub fn cast(&self, world: &mut GameWorld) -> bool {
        usage::use_item(world, self.id, None)
    }

    /// Queue a cast on a target unit.
    pub fn cast_on(&self, world: &mut GameWorld, target: ObjectId) -> bool {
        usage::use_item(world, self.id, Some(target))
    }

    /// Queue a cast at a ground position.
    pub fn cast_at(&self, world: &mut GameWorld, position: Position) -> bool {
        usage::use_item_at(world, self.id, position)
    }

    /// Whether `target` is inside this item's cast range from the player.
    pub fn in_range(&self, world: &GameWorld, target: ObjectId) -> bool {
        let position = match world.position(target) {
            Some(position) => position,
            None => return false,
        };
        self.in_range_of(world, &position)
    }

    /// Whether `position` is strictly inside this item's cast range from the
    /// player.
    pub fn in_range_of(&self, world: &GameWorld, position: &Position) -> bool {
        let player = match world.local_player() {
            Some(player) => player,
            None => return false,
        };
        match world.position(player) {
            Some(origin) => origin.range_squared_to(position) < self.range_sq,
            None => false,
        }
    }

    /// Queue a purchase order.
    pub fn buy(&self, world: &mut GameWorld) {
        world.issue_order(PlayerOrder::BuyItem { item_id: self.id });
    }
}
