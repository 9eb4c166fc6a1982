//! Correlates bolt particles to the turrets that fired them.
//!
//! The engine reports bolt particles through plain object creation, with no
//! reference to the firing turret. A created object counts as a turret bolt
//! when it is a particle emitter and its name contains the turret marker;
//! it is then attributed to the nearest tracked turret.

use rampart_core::constants::TURRET_BOLT_MARKER;
use rampart_core::enums::ObjectCategory;
use rampart_core::types::ObjectId;
use rampart_world::GameWorld;

use crate::registry::TurretRegistry;

/// Record `object` as the latest bolt of the nearest tracked turret, if it
/// qualifies as a turret bolt. Anything else is ignored.
pub fn correlate(registry: &mut TurretRegistry, world: &GameWorld, object: ObjectId) {
    let info = match world.object_info(object) {
        Some(info) => info,
        None => return,
    };
    if info.category != ObjectCategory::ParticleEmitter
        || !info.name.contains(TURRET_BOLT_MARKER)
    {
        return;
    }
    let position = match world.position(object) {
        Some(position) => position,
        None => return,
    };

    match registry.nearest_to(&position) {
        Some(state) => {
            state.bolt_object = Some(object);
            tracing::debug!(turret = %state.turret, bolt = %object, "turret bolt correlated");
        }
        None => {
            tracing::debug!(bolt = %object, "turret bolt seen before any turret was tracked");
        }
    }
}
