use rampart_core::components::{AttackStats, Inventory, InventorySlot, Spellbook};
use rampart_core::enums::{ObjectCategory, SpellSlot, Team};
use rampart_core::orders::PlayerOrder;
use rampart_core::types::{ObjectId, Position};

use crate::spawn::{spawn_hero, spawn_local_player, spawn_minion, spawn_turret};
use crate::world::{GameWorld, WorldError};

fn turret_stats() -> AttackStats {
    AttackStats {
        cast_delay_secs: 0.5,
        projectile_speed: 1200.0,
    }
}

// ---- Spawning and identity ----

#[test]
fn test_spawn_registers_object() {
    let mut world = GameWorld::new();
    spawn_turret(
        &mut world,
        ObjectId(1),
        "Turret_T1_C_01_A",
        Team::Order,
        Position::new(0.0, 0.0, 0.0),
        turret_stats(),
    )
    .unwrap();

    assert!(world.contains(ObjectId(1)));
    assert_eq!(world.object_count(), 1);
    assert_eq!(world.category(ObjectId(1)), Some(ObjectCategory::Turret));
    assert!(world.is_turret(ObjectId(1)));

    let info = world.object_info(ObjectId(1)).unwrap();
    assert_eq!(info.name, "Turret_T1_C_01_A");
    assert_eq!(info.team, Team::Order);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut world = GameWorld::new();
    spawn_minion(
        &mut world,
        ObjectId(7),
        "CasterMinion",
        Team::Chaos,
        Position::default(),
    )
    .unwrap();

    let result = spawn_minion(
        &mut world,
        ObjectId(7),
        "MeleeMinion",
        Team::Chaos,
        Position::default(),
    );
    assert!(
        matches!(result, Err(WorldError::DuplicateId(ObjectId(7)))),
        "second spawn under the same id must fail, got {result:?}"
    );
    assert_eq!(world.object_count(), 1, "failed spawn must not add an object");
}

#[test]
fn test_despawn_removes_object() {
    let mut world = GameWorld::new();
    spawn_minion(
        &mut world,
        ObjectId(3),
        "CasterMinion",
        Team::Chaos,
        Position::default(),
    )
    .unwrap();

    assert!(world.despawn(ObjectId(3)));
    assert!(!world.contains(ObjectId(3)));
    assert!(!world.is_valid_unit(ObjectId(3)));
    assert_eq!(world.object_count(), 0);

    // A second despawn of the same id is a no-op.
    assert!(!world.despawn(ObjectId(3)));
}

// ---- Component reads ----

#[test]
fn test_position_and_attack_stats() {
    let mut world = GameWorld::new();
    spawn_turret(
        &mut world,
        ObjectId(4),
        "Turret_T2_C_01_A",
        Team::Chaos,
        Position::new(100.0, 0.0, 50.0),
        turret_stats(),
    )
    .unwrap();

    let position = world.position(ObjectId(4)).unwrap();
    assert_eq!(position, Position::new(100.0, 0.0, 50.0));

    let stats = world.attack_stats(ObjectId(4)).unwrap();
    assert!((stats.cast_delay_secs - 0.5).abs() < 1e-10);
    assert!((stats.projectile_speed - 1200.0).abs() < 1e-10);

    // Unknown ids read as nothing.
    assert_eq!(world.position(ObjectId(99)), None);
    assert_eq!(world.attack_stats(ObjectId(99)), None);
}

#[test]
fn test_turret_enumeration_is_ordered_by_id() {
    let mut world = GameWorld::new();
    spawn_turret(
        &mut world,
        ObjectId(30),
        "Turret_T2_L_03_A",
        Team::Chaos,
        Position::new(3.0, 0.0, 0.0),
        turret_stats(),
    )
    .unwrap();
    spawn_turret(
        &mut world,
        ObjectId(10),
        "Turret_T1_L_03_A",
        Team::Order,
        Position::new(1.0, 0.0, 0.0),
        turret_stats(),
    )
    .unwrap();
    spawn_minion(
        &mut world,
        ObjectId(20),
        "CasterMinion",
        Team::Chaos,
        Position::default(),
    )
    .unwrap();

    let turrets = world.turrets();
    let ids: Vec<ObjectId> = turrets.iter().map(|(id, _)| *id).collect();
    assert_eq!(
        ids,
        vec![ObjectId(10), ObjectId(30)],
        "turret listing must be ascending by id and exclude other categories"
    );
}

// ---- Unit state ----

#[test]
fn test_target_roundtrip() {
    let mut world = GameWorld::new();
    spawn_turret(
        &mut world,
        ObjectId(1),
        "Turret_T1_C_01_A",
        Team::Order,
        Position::default(),
        turret_stats(),
    )
    .unwrap();
    spawn_minion(
        &mut world,
        ObjectId(2),
        "CasterMinion",
        Team::Chaos,
        Position::default(),
    )
    .unwrap();

    assert_eq!(world.unit_target(ObjectId(1)), None);
    assert!(world.set_target(ObjectId(1), Some(ObjectId(2))));
    assert_eq!(world.unit_target(ObjectId(1)), Some(ObjectId(2)));
    assert!(world.set_target(ObjectId(1), None));
    assert_eq!(world.unit_target(ObjectId(1)), None);

    // Unknown unit: mutation reports failure.
    assert!(!world.set_target(ObjectId(99), Some(ObjectId(2))));
}

#[test]
fn test_winding_up_flag() {
    let mut world = GameWorld::new();
    spawn_turret(
        &mut world,
        ObjectId(1),
        "Turret_T1_C_01_A",
        Team::Order,
        Position::default(),
        turret_stats(),
    )
    .unwrap();

    assert!(!world.is_winding_up(ObjectId(1)));
    assert!(world.set_winding_up(ObjectId(1), true));
    assert!(world.is_winding_up(ObjectId(1)));
    assert!(world.set_winding_up(ObjectId(1), false));
    assert!(!world.is_winding_up(ObjectId(1)));
}

#[test]
fn test_invalidate_clears_validity() {
    let mut world = GameWorld::new();
    spawn_minion(
        &mut world,
        ObjectId(5),
        "CasterMinion",
        Team::Chaos,
        Position::default(),
    )
    .unwrap();

    assert!(world.is_valid_unit(ObjectId(5)));
    assert!(world.invalidate(ObjectId(5)));
    assert!(!world.is_valid_unit(ObjectId(5)));
    assert!(
        world.contains(ObjectId(5)),
        "invalidation must not remove the object"
    );
}

// ---- Local player and inventory ----

#[test]
fn test_local_player_lookup() {
    let mut world = GameWorld::new();
    assert_eq!(world.local_player(), None);

    spawn_hero(
        &mut world,
        ObjectId(11),
        "Renekton",
        Team::Chaos,
        Position::default(),
        Inventory::default(),
    )
    .unwrap();
    assert_eq!(world.local_player(), None, "other heroes are not the player");

    let inventory = Inventory {
        slots: vec![InventorySlot {
            slot: 0,
            item_id: 3153,
        }],
    };
    spawn_local_player(
        &mut world,
        ObjectId(12),
        "Ezreal",
        Team::Order,
        Position::default(),
        inventory,
        Spellbook::default(),
    )
    .unwrap();

    assert_eq!(world.local_player(), Some(ObjectId(12)));
    let inventory = world.inventory(ObjectId(12)).unwrap();
    assert_eq!(inventory.slots.len(), 1);
    assert_eq!(inventory.slots[0].item_id, 3153);
    assert!(world.spellbook(ObjectId(12)).is_some());
    assert!(world.spellbook(ObjectId(11)).is_none());
}

// ---- Clock and orders ----

#[test]
fn test_clock_advances() {
    let mut world = GameWorld::new();
    assert_eq!(world.clock().now(), 0);
    world.clock_mut().advance(1500);
    world.clock_mut().advance(250);
    assert_eq!(world.clock().now(), 1750);
}

#[test]
fn test_take_orders_drains_queue() {
    let mut world = GameWorld::new();
    world.issue_order(PlayerOrder::BuyItem { item_id: 2049 });
    world.issue_order(PlayerOrder::CastSpell {
        slot: SpellSlot::Trinket,
        target: None,
        position: Some(Position::new(400.0, 0.0, 200.0)),
    });

    let orders = world.take_orders();
    assert_eq!(orders.len(), 2);
    assert!(matches!(orders[0], PlayerOrder::BuyItem { item_id: 2049 }));

    assert!(
        world.take_orders().is_empty(),
        "drain must leave the queue empty"
    );
}
