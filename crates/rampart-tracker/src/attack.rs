//! Attack timing prediction from turret cast reports.

use rampart_core::constants::MS_PER_SEC;
use rampart_core::events::TurretAttack;
use rampart_core::types::ObjectId;
use rampart_world::GameWorld;

use crate::registry::TurretRegistry;

/// Process a cast-begin report. Returns the notification to publish when the
/// caster is a tracked turret, `None` otherwise.
///
/// `attack_start` is stamped with the current tick on every turret cast.
/// `attack_delay` and `attack_end` refresh only when the turret has a valid
/// target with usable attack stats; otherwise they keep their previous
/// values, and the notification carries those stale values unchanged.
pub fn process(
    registry: &mut TurretRegistry,
    world: &GameWorld,
    caster: ObjectId,
) -> Option<TurretAttack> {
    if !world.is_turret(caster) {
        return None;
    }
    let now = world.clock().now();

    let state = match registry.resolve(world, caster) {
        Some(state) => state,
        None => {
            tracing::warn!(turret = %caster, "cast from a turret unknown to the registry");
            return None;
        }
    };

    state.attack_start = now;

    let target = world.unit_target(caster);
    if let Some(target_id) = target {
        if world.is_valid_unit(target_id) {
            if let (Some(stats), Some(target_position)) =
                (world.attack_stats(caster), world.position(target_id))
            {
                if stats.projectile_speed > 0.0 {
                    state.attack_delay = stats.cast_delay_secs * MS_PER_SEC
                        + state.position.range_to(&target_position) / stats.projectile_speed
                            * MS_PER_SEC;
                    state.attack_end = state.attack_start as f64 + state.attack_delay;
                }
            }
        }
    }

    Some(TurretAttack {
        turret: state.turret,
        attack_start: state.attack_start,
        attack_delay: state.attack_delay,
        attack_end: state.attack_end,
        bolt: state.bolt_object,
        target,
        winding_up: world.is_winding_up(caster),
    })
}
