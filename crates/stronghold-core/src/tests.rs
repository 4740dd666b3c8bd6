//! Tests for the shared vocabulary: geometry, serde round-trips, stat tables.

use glam::IVec2;

use crate::catalog::{structure_spec, troop_spec};
use crate::commands::{CommandOutcome, PlaceError, PlayerCommand};
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{manhattan, within_attack_range, BoundingBox, GridPos};

// ---- Geometry ----

#[test]
fn test_bounding_boxes_overlap_when_intersecting() {
    let a = BoundingBox::new(GridPos::new(10, 10), IVec2::new(7, 3));
    let b = BoundingBox::new(GridPos::new(12, 11), IVec2::new(1, 1));
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    // b starts exactly where a ends on the x axis.
    let a = BoundingBox::new(GridPos::new(10, 10), IVec2::new(7, 3));
    let b = BoundingBox::new(GridPos::new(17, 10), IVec2::new(7, 3));
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));

    // Same on the y axis.
    let c = BoundingBox::new(GridPos::new(10, 13), IVec2::new(7, 3));
    assert!(!a.overlaps(&c));
}

#[test]
fn test_disjoint_boxes_do_not_overlap() {
    let a = BoundingBox::new(GridPos::new(10, 10), IVec2::new(1, 1));
    let b = BoundingBox::new(GridPos::new(40, 25), IVec2::new(9, 5));
    assert!(!a.overlaps(&b));
}

#[test]
fn test_contains_is_half_open() {
    let b = BoundingBox::new(GridPos::new(10, 10), IVec2::new(7, 3));
    assert!(b.contains(GridPos::new(10, 10)));
    assert!(b.contains(GridPos::new(16, 12)));
    assert!(!b.contains(GridPos::new(17, 12)));
    assert!(!b.contains(GridPos::new(16, 13)));
    assert!(!b.contains(GridPos::new(9, 10)));
}

#[test]
fn test_attack_range_threshold() {
    let origin = GridPos::new(50, 20);
    // Distance 1 and sqrt(2) qualify.
    assert!(within_attack_range(origin, GridPos::new(51, 20)));
    assert!(within_attack_range(origin, GridPos::new(49, 21)));
    assert!(within_attack_range(origin, origin));
    // Distance exactly 2 does not (strict <2).
    assert!(!within_attack_range(origin, GridPos::new(52, 20)));
    // Distance sqrt(5) does not.
    assert!(!within_attack_range(origin, GridPos::new(52, 21)));
}

#[test]
fn test_manhattan_distance() {
    assert_eq!(manhattan(GridPos::new(3, 4), GridPos::new(3, 4)), 0);
    assert_eq!(manhattan(GridPos::new(0, 0), GridPos::new(2, 2)), 4);
    assert_eq!(manhattan(GridPos::new(5, 1), GridPos::new(1, 2)), 5);
}

// ---- Serde ----

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::Move {
            direction: Direction::Left,
        },
        PlayerCommand::Place {
            kind: StructureKind::Wall,
        },
        PlayerCommand::Collect {
            kind: GeneratorKind::ElixirCollector,
        },
        PlayerCommand::Train {
            kind: TroopKind::Archer,
        },
    ];
    for c in commands {
        let json = serde_json::to_string(&c).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

#[test]
fn test_command_outcome_serde() {
    let outcomes = vec![
        CommandOutcome::Moved,
        CommandOutcome::PlaceRejected {
            kind: StructureKind::GoldMine,
            reason: PlaceError::InsufficientResources,
        },
        CommandOutcome::Collected {
            kind: GeneratorKind::GoldMine,
            amount: 100,
        },
        CommandOutcome::Ignored,
    ];
    for o in outcomes {
        let json = serde_json::to_string(&o).unwrap();
        let back: CommandOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}

#[test]
fn test_game_event_serde() {
    let events = vec![
        GameEvent::HostileSpawned {
            kind: HostileKind::Bomberman,
            position: GridPos::new(145, 7),
        },
        GameEvent::StructureDestroyed {
            kind: StructureKind::Wall,
            position: GridPos::new(70, 12),
        },
        GameEvent::GeneratorFull {
            kind: GeneratorKind::GoldMine,
            position: GridPos::new(60, 20),
        },
        GameEvent::TownHallDestroyed,
    ];
    for e in events {
        let json = serde_json::to_string(&e).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}

// ---- Catalog ----

#[test]
fn test_generators_carry_tanks() {
    for kind in [StructureKind::GoldMine, StructureKind::ElixirCollector] {
        let spec = structure_spec(kind);
        assert!(spec.tank_capacity.is_some());
        assert!(spec.full_glyph.is_some());
        assert_eq!(spec.max_instances, 3);
    }
    assert!(structure_spec(StructureKind::Wall).tank_capacity.is_none());
    assert!(structure_spec(StructureKind::TownHall)
        .tank_capacity
        .is_none());
}

#[test]
fn test_wall_costs_gold_only() {
    let spec = structure_spec(StructureKind::Wall);
    assert_eq!(spec.cost_gold, 30);
    assert_eq!(spec.cost_elixir, 0);
    assert_eq!(spec.size, IVec2::ONE);
}

#[test]
fn test_town_hall_is_unique() {
    assert_eq!(structure_spec(StructureKind::TownHall).max_instances, 1);
}

#[test]
fn test_troop_ranges() {
    assert!(troop_spec(TroopKind::Archer).range > 1);
    assert_eq!(troop_spec(TroopKind::Barbarian).range, 1);
}
