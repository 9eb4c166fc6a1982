//! Session-scoped registry of tracked turrets.

use std::collections::HashMap;

use rampart_core::types::{ObjectId, Position};
use rampart_world::GameWorld;

/// Tracked attack state for one turret.
///
/// Timing fields keep their last computed values when a cast arrives without
/// a usable target: `attack_start` always moves to the cast tick, while
/// `attack_delay` and `attack_end` refresh only when a prediction could be
/// made. Readers comparing `attack_end` against the clock must treat both
/// prediction fields as potentially stale.
#[derive(Debug, Clone)]
pub struct TurretState {
    /// Stable id of the turret.
    pub turret: ObjectId,
    /// Position captured at registration. Turrets do not move.
    pub position: Position,
    /// Tick of the most recent cast, in milliseconds.
    pub attack_start: u64,
    /// Wind-up plus travel time of the last predicted attack, in milliseconds.
    pub attack_delay: f64,
    /// Landing tick of the last predicted attack, in milliseconds.
    pub attack_end: f64,
    /// Most recent bolt particle correlated to this turret.
    pub bolt_object: Option<ObjectId>,
}

impl TurretState {
    fn new(turret: ObjectId, position: Position) -> Self {
        Self {
            turret,
            position,
            attack_start: 0,
            attack_delay: 0.0,
            attack_end: 0.0,
            bolt_object: None,
        }
    }

    /// Whether the turret is mid wind-up right now, read live from the world.
    pub fn winding_up(&self, world: &GameWorld) -> bool {
        world.is_winding_up(self.turret)
    }

    /// The turret's current attack target, read live from the world.
    pub fn target(&self, world: &GameWorld) -> Option<ObjectId> {
        world.unit_target(self.turret)
    }
}

/// All turrets known this session, keyed by stable id.
///
/// Populated from the world exactly once, either eagerly at game load or
/// lazily on the first cast lookup. Turrets that spawn after population are
/// not picked up.
#[derive(Debug, Default)]
pub struct TurretRegistry {
    entries: Vec<TurretState>,
    by_id: HashMap<ObjectId, usize>,
}

impl TurretRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tracked turrets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TurretState> {
        self.entries.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&TurretState> {
        let index = *self.by_id.get(&id)?;
        Some(&self.entries[index])
    }

    /// Populate from the world's turrets if the registry is still empty.
    pub fn ensure_loaded(&mut self, world: &GameWorld) {
        if !self.is_empty() {
            return;
        }
        for (id, position) in world.turrets() {
            self.insert(id, position);
        }
        tracing::debug!(count = self.len(), "turret registry populated");
    }

    fn insert(&mut self, id: ObjectId, position: Position) {
        if self.by_id.contains_key(&id) {
            return;
        }
        let index = self.entries.len();
        self.entries.push(TurretState::new(id, position));
        self.by_id.insert(id, index);
    }

    /// Look up a turret's tracked state, populating the registry first if
    /// this is the session's first lookup.
    pub fn resolve(&mut self, world: &GameWorld, id: ObjectId) -> Option<&mut TurretState> {
        self.ensure_loaded(world);
        let index = *self.by_id.get(&id)?;
        Some(&mut self.entries[index])
    }

    /// The tracked turret closest to `position`.
    ///
    /// Ties keep the earlier registration. Empty registries yield nothing,
    /// this lookup never triggers population.
    pub fn nearest_to(&mut self, position: &Position) -> Option<&mut TurretState> {
        let mut best: Option<usize> = None;
        let mut best_range = f64::INFINITY;
        for (index, state) in self.entries.iter().enumerate() {
            let range = state.position.range_squared_to(position);
            if range < best_range {
                best_range = range;
                best = Some(index);
            }
        }
        let index = best?;
        Some(&mut self.entries[index])
    }
}
