//! Synthetic feed generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rampart_core::enums::Team;
use rampart_core::types::{ObjectId, Position};

use crate::feed::FeedEntry;

/// Generate a deterministic synthetic feed: turret and minion spawns, then a
/// cast sequence with targeting churn, bolt particles, and the occasional
/// minion death to exercise the stale-prediction path.
pub fn generate(seed: u64, turret_count: usize, cast_count: usize) -> Vec<FeedEntry> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut entries = Vec::new();

    let mut turrets: Vec<(ObjectId, Position)> = Vec::new();
    for i in 0..turret_count {
        let id = ObjectId(100 + i as u32);
        let position = Position::new(
            rng.gen_range(-5000.0..5000.0),
            0.0,
            rng.gen_range(-5000.0..5000.0),
        );
        turrets.push((id, position));
        // Sides alternate, matching the T1/T2 name parity.
        entries.push(FeedEntry::SpawnTurret {
            id,
            name: format!("Turret_T{}_C_{:02}_A", 1 + i % 2, 1 + i / 2),
            team: if i % 2 == 0 { Team::Order } else { Team::Chaos },
            position,
            cast_delay_secs: rng.gen_range(0.2..0.5),
            projectile_speed: rng.gen_range(1000.0..1500.0),
        });
    }

    let mut minions: Vec<ObjectId> = Vec::new();
    for i in 0..turret_count * 3 {
        let id = ObjectId(500 + i as u32);
        minions.push(id);
        entries.push(FeedEntry::SpawnMinion {
            id,
            name: "CasterMinion".to_string(),
            team: if i % 2 == 0 { Team::Chaos } else { Team::Order },
            position: Position::new(
                rng.gen_range(-5000.0..5000.0),
                0.0,
                rng.gen_range(-5000.0..5000.0),
            ),
        });
    }

    entries.push(FeedEntry::GameLoad);
    if turrets.is_empty() {
        return entries;
    }

    let mut next_particle = 1000u32;
    for _ in 0..cast_count {
        entries.push(FeedEntry::AdvanceClock {
            ms: rng.gen_range(300..1500),
        });

        let (turret, turret_position) = turrets[rng.gen_range(0..turrets.len())];
        let target = if !minions.is_empty() && rng.gen_bool(0.8) {
            Some(minions[rng.gen_range(0..minions.len())])
        } else {
            None
        };
        entries.push(FeedEntry::SetTarget {
            unit: turret,
            target,
        });
        entries.push(FeedEntry::SetWindingUp {
            unit: turret,
            winding_up: true,
        });
        entries.push(FeedEntry::CastBegin { caster: turret });

        if rng.gen_bool(0.6) {
            let id = ObjectId(next_particle);
            next_particle += 1;
            entries.push(FeedEntry::SpawnParticle {
                id,
                name: "TurretBasicAttack_mis".to_string(),
                position: Position::new(
                    turret_position.x + rng.gen_range(-50.0..50.0),
                    0.0,
                    turret_position.z + rng.gen_range(-50.0..50.0),
                ),
            });
        }
        entries.push(FeedEntry::SetWindingUp {
            unit: turret,
            winding_up: false,
        });

        // Kill off a minion now and then; a turret still targeting it takes
        // the stale-prediction path on its next cast.
        if !minions.is_empty() && rng.gen_bool(0.05) {
            let victim = minions.swap_remove(rng.gen_range(0..minions.len()));
            entries.push(FeedEntry::Despawn { unit: victim });
        }
    }

    entries
}
