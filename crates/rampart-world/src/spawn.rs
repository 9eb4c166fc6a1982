//! Spawn factories for the object kinds the toolkit cares about.
//!
//! Each factory assembles the component bundle for one object category and
//! registers it under a stable id. Hosts call these when the engine reports
//! object creation.

use rampart_core::components::*;
use rampart_core::enums::{ObjectCategory, Team};
use rampart_core::types::{ObjectId, Position};

use crate::world::{GameWorld, WorldError};

/// Spawn a turret with its attack timing stats.
pub fn spawn_turret(
    world: &mut GameWorld,
    id: ObjectId,
    name: &str,
    team: Team,
    position: Position,
    stats: AttackStats,
) -> Result<(), WorldError> {
    world.spawn_object(
        id,
        (
            ObjectInfo {
                id,
                name: name.to_string(),
                category: ObjectCategory::Turret,
                team,
            },
            position,
            stats,
            UnitState {
                valid: true,
                winding_up: false,
                target: None,
            },
        ),
    )
}

/// Spawn a hero controlled by some player.
pub fn spawn_hero(
    world: &mut GameWorld,
    id: ObjectId,
    name: &str,
    team: Team,
    position: Position,
    inventory: Inventory,
) -> Result<(), WorldError> {
    world.spawn_object(
        id,
        (
            ObjectInfo {
                id,
                name: name.to_string(),
                category: ObjectCategory::Hero,
                team,
            },
            position,
            inventory,
            UnitState {
                valid: true,
                winding_up: false,
                target: None,
            },
        ),
    )
}

/// Spawn the hero controlled by the local player, with an inventory and a
/// spellbook for item usability checks.
pub fn spawn_local_player(
    world: &mut GameWorld,
    id: ObjectId,
    name: &str,
    team: Team,
    position: Position,
    inventory: Inventory,
    spellbook: Spellbook,
) -> Result<(), WorldError> {
    world.spawn_object(
        id,
        (
            ObjectInfo {
                id,
                name: name.to_string(),
                category: ObjectCategory::Hero,
                team,
            },
            position,
            inventory,
            spellbook,
            UnitState {
                valid: true,
                winding_up: false,
                target: None,
            },
            LocalPlayer,
        ),
    )
}

/// Spawn a minion.
pub fn spawn_minion(
    world: &mut GameWorld,
    id: ObjectId,
    name: &str,
    team: Team,
    position: Position,
) -> Result<(), WorldError> {
    world.spawn_object(
        id,
        (
            ObjectInfo {
                id,
                name: name.to_string(),
                category: ObjectCategory::Minion,
                team,
            },
            position,
            UnitState {
                valid: true,
                winding_up: false,
                target: None,
            },
        ),
    )
}

/// Spawn a particle emitter. Emitters carry no unit state and no team
/// affiliation.
pub fn spawn_particle(
    world: &mut GameWorld,
    id: ObjectId,
    name: &str,
    position: Position,
) -> Result<(), WorldError> {
    world.spawn_object(
        id,
        (
            ObjectInfo {
                id,
                name: name.to_string(),
                category: ObjectCategory::ParticleEmitter,
                team: Team::Unknown,
            },
            position,
        ),
    )
}
