//! The tracker facade wiring feed dispatch to correlation and notification.

use rampart_core::events::{EngineEvent, TurretAttack};
use rampart_core::types::ObjectId;
use rampart_world::GameWorld;

use crate::notify::AttackNotifier;
use crate::registry::TurretRegistry;
use crate::{attack, bolt};

/// Tracker behavior switches.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Populate the registry as soon as the game-load event arrives. When
    /// off, population waits for the first turret cast.
    pub eager_load: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { eager_load: true }
    }
}

/// Correlates the engine's object and cast feeds into turret attack
/// notifications.
///
/// Hosts forward every [`EngineEvent`] through [`TurretTracker::handle`];
/// events the tracker has no use for fall through silently.
pub struct TurretTracker {
    config: TrackerConfig,
    registry: TurretRegistry,
    notifier: AttackNotifier,
}

impl TurretTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            registry: TurretRegistry::new(),
            notifier: AttackNotifier::new(),
        }
    }

    /// Register an attack subscriber.
    pub fn subscribe(&mut self, handler: impl FnMut(&TurretAttack) + 'static) {
        self.notifier.subscribe(handler);
    }

    /// Read access to the tracked turret states.
    pub fn registry(&self) -> &TurretRegistry {
        &self.registry
    }

    /// Feed one engine event through the tracker.
    pub fn handle(&mut self, world: &GameWorld, event: &EngineEvent) {
        match event {
            EngineEvent::GameLoad => self.on_game_load(world),
            EngineEvent::ObjectCreated { object } => self.on_object_created(world, *object),
            EngineEvent::CastBegin { caster } => self.on_cast_begin(world, *caster),
        }
    }

    fn on_game_load(&mut self, world: &GameWorld) {
        if self.config.eager_load {
            self.registry.ensure_loaded(world);
        }
    }

    fn on_object_created(&mut self, world: &GameWorld, object: ObjectId) {
        bolt::correlate(&mut self.registry, world, object);
    }

    fn on_cast_begin(&mut self, world: &GameWorld, caster: ObjectId) {
        if let Some(attack) = attack::process(&mut self.registry, world, caster) {
            self.notifier.emit(&attack);
        }
    }
}
