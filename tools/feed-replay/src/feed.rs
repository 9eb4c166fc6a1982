//! Feed file format and replay application.
//!
//! A feed is a JSONL file: one entry per line, each either a world mutation
//! (spawns, targeting, clock) or an engine event to forward to the tracker.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rampart_core::components::AttackStats;
use rampart_core::enums::Team;
use rampart_core::events::EngineEvent;
use rampart_core::types::{ObjectId, Position};
use rampart_tracker::TurretTracker;
use rampart_world::spawn::{spawn_minion, spawn_particle, spawn_turret};
use rampart_world::{GameWorld, WorldError};

/// One line of a feed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedEntry {
    GameLoad,
    AdvanceClock {
        ms: u64,
    },
    SpawnTurret {
        id: ObjectId,
        name: String,
        #[serde(default)]
        team: Team,
        position: Position,
        cast_delay_secs: f64,
        projectile_speed: f64,
    },
    SpawnMinion {
        id: ObjectId,
        name: String,
        #[serde(default)]
        team: Team,
        position: Position,
    },
    SpawnParticle {
        id: ObjectId,
        name: String,
        position: Position,
    },
    SetTarget {
        unit: ObjectId,
        target: Option<ObjectId>,
    },
    SetWindingUp {
        unit: ObjectId,
        winding_up: bool,
    },
    Despawn {
        unit: ObjectId,
    },
    CastBegin {
        caster: ObjectId,
    },
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid feed entry")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode feed entry")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Load a feed file. Blank lines are skipped.
pub fn load_feed(path: &Path) -> Result<Vec<FeedEntry>, FeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = serde_json::from_str(line).map_err(|source| FeedError::Parse {
            line: index + 1,
            source,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Write a feed file, one JSON entry per line.
pub fn write_feed(path: &Path, entries: &[FeedEntry]) -> Result<(), FeedError> {
    let mut text = String::new();
    for entry in entries {
        let line =
            serde_json::to_string(entry).map_err(|source| FeedError::Encode { source })?;
        text.push_str(&line);
        text.push('\n');
    }
    std::fs::write(path, text).map_err(|source| FeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply one feed entry: mutate the world and forward engine events.
///
/// Every spawn is also reported to the tracker as an object-creation event,
/// the way a live engine reports all creations; the tracker ignores the ones
/// it has no use for.
pub fn apply_entry(
    world: &mut GameWorld,
    tracker: &mut TurretTracker,
    entry: &FeedEntry,
) -> Result<(), WorldError> {
    match entry {
        FeedEntry::GameLoad => tracker.handle(world, &EngineEvent::GameLoad),
        FeedEntry::AdvanceClock { ms } => world.clock_mut().advance(*ms),
        FeedEntry::SpawnTurret {
            id,
            name,
            team,
            position,
            cast_delay_secs,
            projectile_speed,
        } => {
            spawn_turret(
                world,
                *id,
                name,
                *team,
                *position,
                AttackStats {
                    cast_delay_secs: *cast_delay_secs,
                    projectile_speed: *projectile_speed,
                },
            )?;
            tracker.handle(world, &EngineEvent::ObjectCreated { object: *id });
        }
        FeedEntry::SpawnMinion {
            id,
            name,
            team,
            position,
        } => {
            spawn_minion(world, *id, name, *team, *position)?;
            tracker.handle(world, &EngineEvent::ObjectCreated { object: *id });
        }
        FeedEntry::SpawnParticle { id, name, position } => {
            spawn_particle(world, *id, name, *position)?;
            tracker.handle(world, &EngineEvent::ObjectCreated { object: *id });
        }
        FeedEntry::SetTarget { unit, target } => {
            world.set_target(*unit, *target);
        }
        FeedEntry::SetWindingUp { unit, winding_up } => {
            world.set_winding_up(*unit, *winding_up);
        }
        FeedEntry::Despawn { unit } => {
            world.despawn(*unit);
        }
        FeedEntry::CastBegin { caster } => {
            tracker.handle(world, &EngineEvent::CastBegin { caster: *caster })
        }
    }
    Ok(())
}
