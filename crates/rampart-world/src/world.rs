//! The game-object store: hecs world plus stable-id index, clock, and orders.

use std::collections::HashMap;

use hecs::World;
use thiserror::Error;

use rampart_core::components::{
    AttackStats, Inventory, LocalPlayer, ObjectInfo, Spellbook, UnitState,
};
use rampart_core::enums::ObjectCategory;
use rampart_core::orders::PlayerOrder;
use rampart_core::types::{GameClock, ObjectId, Position};

/// Errors from host-side store mutations.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("object id {0} already present")]
    DuplicateId(ObjectId),
}

/// All live game objects, addressable by stable identity.
///
/// Entities are spawned through the factories in [`crate::spawn`] and looked
/// up by `ObjectId`; hecs entity handles never leave this type.
pub struct GameWorld {
    world: World,
    by_id: HashMap<ObjectId, hecs::Entity>,
    clock: GameClock,
    orders: Vec<PlayerOrder>,
}

impl GameWorld {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            by_id: HashMap::new(),
            clock: GameClock::default(),
            orders: Vec::new(),
        }
    }

    /// Spawn an entity bundle under a stable id. Used by the spawn factories.
    pub(crate) fn spawn_object(
        &mut self,
        id: ObjectId,
        bundle: impl hecs::DynamicBundle,
    ) -> Result<(), WorldError> {
        if self.by_id.contains_key(&id) {
            return Err(WorldError::DuplicateId(id));
        }
        let entity = self.world.spawn(bundle);
        self.by_id.insert(id, entity);
        Ok(())
    }

    /// Remove an object from the store. Returns whether it existed.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        match self.by_id.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.by_id.len()
    }

    // --- Read surface ---

    /// Identity, name, and category of an object.
    pub fn object_info(&self, id: ObjectId) -> Option<ObjectInfo> {
        let entity = *self.by_id.get(&id)?;
        self.world
            .get::<&ObjectInfo>(entity)
            .ok()
            .map(|i| (*i).clone())
    }

    pub fn category(&self, id: ObjectId) -> Option<ObjectCategory> {
        let entity = *self.by_id.get(&id)?;
        self.world.get::<&ObjectInfo>(entity).ok().map(|i| i.category)
    }

    pub fn is_turret(&self, id: ObjectId) -> bool {
        self.category(id) == Some(ObjectCategory::Turret)
    }

    pub fn position(&self, id: ObjectId) -> Option<Position> {
        let entity = *self.by_id.get(&id)?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    pub fn attack_stats(&self, id: ObjectId) -> Option<AttackStats> {
        let entity = *self.by_id.get(&id)?;
        self.world.get::<&AttackStats>(entity).ok().map(|s| *s)
    }

    /// Current attack target of a unit, if it has one.
    pub fn unit_target(&self, id: ObjectId) -> Option<ObjectId> {
        let entity = *self.by_id.get(&id)?;
        self.world
            .get::<&UnitState>(entity)
            .ok()
            .and_then(|s| s.target)
    }

    /// Whether the object is a live, targetable unit.
    /// False for despawned ids and for objects without unit state.
    pub fn is_valid_unit(&self, id: ObjectId) -> bool {
        match self.by_id.get(&id) {
            Some(entity) => self
                .world
                .get::<&UnitState>(*entity)
                .map(|s| s.valid)
                .unwrap_or(false),
            None => false,
        }
    }

    pub fn is_winding_up(&self, id: ObjectId) -> bool {
        match self.by_id.get(&id) {
            Some(entity) => self
                .world
                .get::<&UnitState>(*entity)
                .map(|s| s.winding_up)
                .unwrap_or(false),
            None => false,
        }
    }

    /// All turrets with their positions, in stable enumeration order
    /// (ascending id).
    pub fn turrets(&self) -> Vec<(ObjectId, Position)> {
        let mut out: Vec<(ObjectId, Position)> = Vec::new();
        {
            let mut query = self.world.query::<(&ObjectInfo, &Position)>();
            for (_entity, (info, position)) in query.iter() {
                if info.category == ObjectCategory::Turret {
                    out.push((info.id, *position));
                }
            }
        }
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// The hero controlled by the local player, if spawned.
    pub fn local_player(&self) -> Option<ObjectId> {
        let mut query = self.world.query::<(&LocalPlayer, &ObjectInfo)>();
        query.iter().next().map(|(_, (_, info))| info.id)
    }

    pub fn inventory(&self, id: ObjectId) -> Option<Inventory> {
        let entity = *self.by_id.get(&id)?;
        self.world
            .get::<&Inventory>(entity)
            .ok()
            .map(|i| (*i).clone())
    }

    pub fn spellbook(&self, id: ObjectId) -> Option<Spellbook> {
        let entity = *self.by_id.get(&id)?;
        self.world
            .get::<&Spellbook>(entity)
            .ok()
            .map(|s| (*s).clone())
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut GameClock {
        &mut self.clock
    }

    // --- Host-side mutation ---

    /// Set or clear a unit's attack target. Returns whether the unit exists
    /// and carries unit state.
    pub fn set_target(&mut self, unit: ObjectId, target: Option<ObjectId>) -> bool {
        let entity = match self.by_id.get(&unit) {
            Some(e) => *e,
            None => return false,
        };
        match self.world.get::<&mut UnitState>(entity) {
            Ok(mut state) => {
                state.target = target;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_winding_up(&mut self, unit: ObjectId, winding_up: bool) -> bool {
        let entity = match self.by_id.get(&unit) {
            Some(e) => *e,
            None => return false,
        };
        match self.world.get::<&mut UnitState>(entity) {
            Ok(mut state) => {
                state.winding_up = winding_up;
                true
            }
            Err(_) => false,
        }
    }

    /// Mark a unit as no longer targetable without despawning it
    /// (death animation, untargetable window).
    pub fn invalidate(&mut self, unit: ObjectId) -> bool {
        let entity = match self.by_id.get(&unit) {
            Some(e) => *e,
            None => return false,
        };
        match self.world.get::<&mut UnitState>(entity) {
            Ok(mut state) => {
                state.valid = false;
                true
            }
            Err(_) => false,
        }
    }

    // --- Player orders ---

    /// Queue an order for the host to execute.
    pub fn issue_order(&mut self, order: PlayerOrder) {
        self.orders.push(order);
    }

    /// Drain all queued orders.
    pub fn take_orders(&mut self) -> Vec<PlayerOrder> {
        std::mem::take(&mut self.orders)
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
