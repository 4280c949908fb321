//! Tests for the simulation engine, commands, scenarios, and the unit pipeline end to end.

use std::collections::HashMap;

use skirmish_ai::index::IndexKind;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::events::SimEvent;
use skirmish_core::state::{UnitView, WorldSnapshot};
use skirmish_core::types::{UnitId, Vector2};
use skirmish_geometry::{Obstacle, Polygon};

use crate::engine::{SimConfig, SimulationEngine};
use crate::error::ScenarioError;
use crate::scenario::{Scenario, UnitSpawn};

const EAST: Vector2 = Vector2::new(1.0, 0.0);
const WEST: Vector2 = Vector2::new(-1.0, 0.0);

fn unit(x: f64, y: f64, team: u8, heading: Vector2) -> UnitSpawn {
    UnitSpawn {
        heading: Some(heading),
        ..UnitSpawn::new((x, y), team)
    }
}

fn engine_with(spawns: &[UnitSpawn]) -> (SimulationEngine, Vec<UnitId>) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let ids = spawns.iter().map(|s| engine.spawn_unit(s)).collect();
    (engine, ids)
}

fn building(name: &str, min: (f64, f64), max: (f64, f64)) -> Obstacle {
    let polygon = Polygon::rectangle(Vector2::new(min.0, min.1), Vector2::new(max.0, max.1)).unwrap();
    Obstacle::from_polygon(name, ObstacleKind::Building, polygon)
}

fn view(snapshot: &WorldSnapshot, id: UnitId) -> Option<&UnitView> {
    snapshot.units.iter().find(|u| u.id == id)
}

fn skirmish_engine(config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::from_scenario(config, &Scenario::skirmish()).unwrap();
    engine.queue_commands([
        PlayerCommand::SelectInRect {
            from: Vector2::new(-10.0, -10.0),
            to: Vector2::new(90.0, 70.0),
        },
        PlayerCommand::OrderSelected {
            target: Vector2::new(100.0, -20.0),
            assault: true,
            mode: PathMode::Replace,
        },
    ]);
    engine
}

fn assert_snapshot_invariants(snapshot: &WorldSnapshot) {
    let teams: HashMap<UnitId, u8> = snapshot.units.iter().map(|u| (u.id, u.team)).collect();
    for unit in &snapshot.units {
        assert!(
            unit.health > 0.0 && unit.health <= MAX_HEALTH,
            "{} health {} out of bounds",
            unit.id,
            unit.health
        );
        if let Some(target) = unit.target {
            assert_ne!(target, unit.id, "{} targets itself", unit.id);
            let team = teams.get(&target).copied();
            assert!(team.is_some(), "{} holds dead target {target}", unit.id);
            assert_ne!(team, Some(unit.team), "{} targets a teammate", unit.id);
        }
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = skirmish_engine(config.clone());
    let mut engine_b = skirmish_engine(config);

    for _ in 0..400 {
        let snap_a = engine_a.tick(0.05);
        let snap_b = engine_b.tick(0.05);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let spawns = [unit(0.0, 0.0, 0, EAST), unit(50.0, 0.0, 1, WEST)];
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    for spawn in &spawns {
        engine_a.spawn_unit(spawn);
        engine_b.spawn_unit(spawn);
    }

    let mut diverged = false;
    for _ in 0..20 {
        let json_a = serde_json::to_string(&engine_a.tick(0.1)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(0.1)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce different damage rolls");
}

#[test]
fn test_grid_index_matches_linear_scan() {
    let mut linear = skirmish_engine(SimConfig::default());
    let mut grid = skirmish_engine(SimConfig {
        spatial_index: IndexKind::grid(),
        ..Default::default()
    });

    for _ in 0..300 {
        let a = serde_json::to_string(&linear.tick(0.05)).unwrap();
        let b = serde_json::to_string(&grid.tick(0.05)).unwrap();
        assert_eq!(a, b, "spatial index changed the outcome");
    }
}

#[test]
fn test_update_order_does_not_change_outcome() {
    // Moves, targets and spotting must not depend on which unit updates first
    let spawns = vec![
        unit(0.0, 0.0, 0, EAST),
        unit(3.0, 40.0, 0, EAST),
        unit(-30.0, 10.0, 0, EAST),
        unit(65.0, 2.0, 1, WEST),
        unit(70.0, 45.0, 1, WEST),
    ];
    let reversed: Vec<UnitSpawn> = spawns.iter().rev().cloned().collect();

    let (mut forward, forward_ids) = engine_with(&spawns);
    let (mut backward, mut backward_ids) = engine_with(&reversed);
    backward_ids.reverse();

    // Same order to the same physical unit in both worlds
    forward.queue_command(PlayerCommand::IssuePath {
        units: vec![forward_ids[2]],
        target: Vector2::new(10.0, 10.0),
        assault: false,
        mode: PathMode::Replace,
    });
    backward.queue_command(PlayerCommand::IssuePath {
        units: vec![backward_ids[2]],
        target: Vector2::new(10.0, 10.0),
        assault: false,
        mode: PathMode::Replace,
    });

    let label_f: HashMap<UnitId, usize> = forward_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let label_b: HashMap<UnitId, usize> = backward_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    for _ in 0..30 {
        let snap_f = forward.tick(0.05);
        let snap_b = backward.tick(0.05);
        for (i, (&id_f, &id_b)) in forward_ids.iter().zip(&backward_ids).enumerate() {
            let f = view(&snap_f, id_f).unwrap();
            let b = view(&snap_b, id_b).unwrap();
            assert_eq!(f.position, b.position, "unit {i} position");
            assert_eq!(f.direction, b.direction, "unit {i} direction");
            assert_eq!(f.spotted, b.spotted, "unit {i} spotted");
            assert_eq!(
                f.target.map(|t| label_f[&t]),
                b.target.map(|t| label_b[&t]),
                "unit {i} target"
            );
        }
    }
}

// ---- End to end ----

#[test]
fn test_facing_units_trade_fire() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(50.0, 0.0, 1, WEST)]);

    // First tick: nobody is spotted yet, so nobody can be targeted
    let first = engine.tick(0.1);
    assert!(first.events.is_empty());
    assert!(first.units.iter().all(|u| u.spotted && u.target.is_none()));

    let second = engine.tick(0.1);
    let shots: Vec<(UnitId, UnitId, f64)> = second
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::ShotFired {
                shooter,
                target,
                damage,
                ..
            } => Some((*shooter, *target, *damage)),
            _ => None,
        })
        .collect();
    assert_eq!(shots.len(), 2, "both units should fire: {:?}", second.events);

    for (shooter, target, damage) in shots {
        assert_ne!(shooter, target);
        assert!(damage >= UNIT_DAMAGE * DAMAGE_VARIANCE_MIN);
        assert!(damage <= UNIT_DAMAGE * CRITICAL_HIT_MULTIPLIER);
        let health = view(&second, target).unwrap().health;
        assert!((health - (MAX_HEALTH - damage)).abs() < 1e-9);
    }
    assert_eq!(view(&second, ids[0]).unwrap().target, Some(ids[1]));
    assert_eq!(view(&second, ids[1]).unwrap().target, Some(ids[0]));
    assert_eq!(view(&second, ids[1]).unwrap().target_position, Some(Vector2::ZERO));
}

#[test]
fn test_path_consumed_in_order() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    let waypoints = [
        Vector2::new(30.0, 0.0),
        Vector2::new(30.0, 30.0),
        Vector2::new(0.0, 30.0),
    ];
    engine.queue_command(PlayerCommand::IssuePath {
        units: ids.clone(),
        target: waypoints[0],
        assault: false,
        mode: PathMode::Replace,
    });
    for point in &waypoints[1..] {
        engine.queue_command(PlayerCommand::IssuePath {
            units: ids.clone(),
            target: *point,
            assault: false,
            mode: PathMode::Append,
        });
    }

    let mut fronts: Vec<Vector2> = Vec::new();
    let mut last_len = usize::MAX;
    for _ in 0..300 {
        let snapshot = engine.tick(0.05);
        let me = view(&snapshot, ids[0]).unwrap();
        if last_len != usize::MAX {
            assert!(me.path.len() <= last_len, "path grew");
            assert!(last_len - me.path.len() <= 1, "popped more than one waypoint");
        }
        last_len = me.path.len();
        if let Some(&front) = me.path.first() {
            if fronts.last() != Some(&front) {
                fronts.push(front);
            }
        }
    }

    assert_eq!(fronts, waypoints.to_vec());
    assert_eq!(last_len, 0);
    let body = engine.unit_body(ids[0]).unwrap();
    assert!(body.position.distance(waypoints[2]) < UNIT_RADIUS);
}

#[test]
fn test_unit_inside_obstacle_pushed_out_in_one_tick() {
    let (mut engine, ids) = engine_with(&[unit(2.0, 1.0, 0, EAST)]);
    engine.add_obstacle(building("bunker", (-10.0, -10.0), (10.0, 10.0)));

    engine.tick(0.05);
    let position = engine.unit_body(ids[0]).unwrap().position;
    assert!(engine.obstacles().containing(position).is_none(), "still inside at {position:?}");
}

#[test]
fn test_hidden_unit_never_spotted() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(60.0, 0.0, 1, WEST)]);
    engine.add_obstacle(building("wall", (20.0, -40.0), (30.0, 40.0)));

    for _ in 0..60 {
        let snapshot = engine.tick(0.1);
        for id in &ids {
            let unit = view(&snapshot, *id).unwrap();
            assert!(!unit.spotted);
            assert!(unit.last_spotted_time.is_none());
            assert!(unit.target.is_none());
        }
    }
}

#[test]
fn test_unit_beyond_spotting_distance_never_spotted() {
    // Open ground, facing each other, 100 apart: inside weapon range but
    // beyond the stationary spotting distance
    let gap = SPOT_DISTANCE_STATIONARY + 25.0;
    assert!(gap < UNIT_RANGE);
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(gap, 0.0, 1, WEST)]);

    for _ in 0..60 {
        let snapshot = engine.tick(0.1);
        for id in &ids {
            let unit = view(&snapshot, *id).unwrap();
            assert!(!unit.spotted);
            assert!(unit.last_spotted_time.is_none());
            assert!(unit.target.is_none());
            assert_eq!(unit.health, MAX_HEALTH);
        }
    }
}

#[test]
fn test_unit_inside_pond_pushed_out() {
    // The pond octagon has a node straight below its center
    let mut engine = SimulationEngine::from_scenario(SimConfig::default(), &Scenario::skirmish()).unwrap();
    let id = engine.spawn_unit(&UnitSpawn::new((-70.0, 45.0), FRIENDLY_TEAM));
    assert!(engine.obstacles().containing(Vector2::new(-70.0, 45.0)).is_some());

    engine.tick(0.05);
    let position = engine.unit_body(id).unwrap().position;
    assert!(engine.obstacles().containing(position).is_none(), "still inside at {position:?}");
}

#[test]
fn test_killed_unit_removed_with_references() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(50.0, 0.0, 1, WEST)]);
    engine.tick(0.1);
    engine.tick(0.1);
    assert_eq!(engine.unit_target(ids[0]), Some(ids[1]));

    // Leave the hostile one shot from death
    engine.set_unit_health(ids[1], 1.0);

    let mut killed = None;
    for _ in 0..40 {
        let snapshot = engine.tick(0.1);
        assert_snapshot_invariants(&snapshot);
        if view(&snapshot, ids[1]).is_none() {
            killed = Some(snapshot);
            break;
        }
    }

    let snapshot = killed.expect("hostile should die from the next shot");
    assert!(snapshot.events.contains(&SimEvent::UnitDestroyed {
        unit: ids[1],
        team: 1,
        position: Vector2::new(50.0, 0.0),
    }));
    assert!(snapshot.events.iter().any(|e| matches!(
        e,
        SimEvent::TargetLost {
            unit,
            target,
            reason: TargetLossReason::Dead,
        } if *unit == ids[0] && *target == ids[1]
    )));
    assert_eq!(engine.unit_target(ids[0]), None);
    assert_eq!(engine.unit_health(ids[1]), None);
}

#[test]
fn test_scripted_death_purged_next_tick() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(50.0, 0.0, 1, WEST)]);
    engine.tick(0.1);
    engine.tick(0.1);

    engine.set_unit_health(ids[1], 0.0);
    let snapshot = engine.tick(0.1);
    assert!(view(&snapshot, ids[1]).is_none());
    assert!(view(&snapshot, ids[0]).unwrap().target.is_none());
}

/// Health after each tick of `ticks` ticks of `dt`, paired with the sim time.
fn regeneration_trajectory(dt: f64, ticks: usize) -> Vec<(f64, f64)> {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    engine.set_unit_health(ids[0], 40.0);
    (0..ticks)
        .map(|_| {
            engine.tick(dt);
            let health = engine.unit_health(ids[0]).unwrap();
            (engine.time().elapsed_secs, health)
        })
        .collect()
}

#[test]
fn test_regeneration_converges_for_any_step() {
    // 2.0s ticks are clamped to MAX_TICK_DT; both runs cover 65s of sim time
    let coarse = regeneration_trajectory(2.0, 130);
    let fine = regeneration_trajectory(0.05, 1300);

    for (i, &(time, health)) in coarse.iter().enumerate() {
        assert!((time - MAX_TICK_DT * (i + 1) as f64).abs() < 1e-12);
        let (fine_time, fine_health) = fine[(i + 1) * 10 - 1];
        assert!((time - fine_time).abs() < 1e-6, "t={time} vs {fine_time}");
        assert!(
            (health - fine_health).abs() < 1e-6,
            "at t={time}: {health} vs {fine_health}"
        );
    }

    for trajectory in [&coarse, &fine] {
        assert!(trajectory.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(trajectory.iter().all(|&(_, h)| h <= MAX_HEALTH));
        assert_eq!(trajectory.last().map(|&(_, h)| h), Some(MAX_HEALTH));
    }
    // Full at 60s, not before
    assert!(coarse[118].1 < MAX_HEALTH);
    assert_eq!(coarse[119].1, MAX_HEALTH);
}

#[test]
fn test_skirmish_invariants_hold() {
    let mut engine = skirmish_engine(SimConfig::default());
    for _ in 0..1200 {
        let snapshot = engine.tick(0.05);
        assert_snapshot_invariants(&snapshot);
    }
}

// ---- Commands ----

#[test]
fn test_order_without_selection_is_noop() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    engine.queue_command(PlayerCommand::OrderSelected {
        target: Vector2::new(100.0, 0.0),
        assault: true,
        mode: PathMode::Replace,
    });
    let snapshot = engine.tick(0.0);
    let me = view(&snapshot, ids[0]).unwrap();
    assert!(me.path.is_empty());
    assert!(!me.assaulting);

    engine.queue_command(PlayerCommand::IssuePath {
        units: vec![],
        target: Vector2::new(100.0, 0.0),
        assault: false,
        mode: PathMode::Replace,
    });
    assert!(view(&engine.tick(0.0), ids[0]).unwrap().path.is_empty());
}

#[test]
fn test_rect_selection_keeps_friendlies_only() {
    let (mut engine, ids) = engine_with(&[
        unit(0.0, 0.0, 0, EAST),
        unit(10.0, 0.0, 0, EAST),
        unit(5.0, 2.0, 1, EAST),
        unit(40.0, 0.0, 0, EAST),
    ]);
    engine.queue_command(PlayerCommand::SelectInRect {
        from: Vector2::new(15.0, 5.0),
        to: Vector2::new(-5.0, -5.0),
    });
    engine.tick(0.0);
    assert_eq!(engine.selected_units(), vec![ids[0], ids[1]]);

    // Empty rectangle falls back to the unit under the release point
    engine.queue_command(PlayerCommand::SelectInRect {
        from: Vector2::new(36.0, 30.0),
        to: Vector2::new(41.0, 1.0),
    });
    engine.tick(0.0);
    assert_eq!(engine.selected_units(), vec![ids[3]]);

    engine.queue_command(PlayerCommand::SelectAt {
        point: Vector2::new(5.0, 2.0),
    });
    engine.tick(0.0);
    assert!(engine.selected_units().is_empty(), "hostiles are not selectable");

    engine.queue_commands([
        PlayerCommand::SelectAt {
            point: Vector2::new(1.0, 1.0),
        },
        PlayerCommand::ClearSelection,
    ]);
    engine.tick(0.0);
    assert!(engine.selected_units().is_empty());
}

#[test]
fn test_group_order_keeps_formation() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST), unit(10.0, 0.0, 0, EAST)]);
    engine.queue_commands([
        PlayerCommand::SelectInRect {
            from: Vector2::new(-5.0, -5.0),
            to: Vector2::new(15.0, 5.0),
        },
        PlayerCommand::OrderSelected {
            target: Vector2::new(100.0, 50.0),
            assault: true,
            mode: PathMode::Replace,
        },
    ]);
    let snapshot = engine.tick(0.0);

    let a = view(&snapshot, ids[0]).unwrap();
    let b = view(&snapshot, ids[1]).unwrap();
    assert_eq!(a.path, vec![Vector2::new(95.0, 50.0)]);
    assert_eq!(b.path, vec![Vector2::new(105.0, 50.0)]);
    assert!(a.assaulting && b.assaulting);
}

#[test]
fn test_append_respects_drag_spacing() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    let order = |x: f64, mode| PlayerCommand::IssuePath {
        units: vec![UnitId(0)],
        target: Vector2::new(x, 0.0),
        assault: false,
        mode,
    };
    engine.queue_commands([
        order(50.0, PathMode::Replace),
        order(60.0, PathMode::Append),
        order(75.0, PathMode::Append),
        order(90.0, PathMode::Append),
    ]);
    let snapshot = engine.tick(0.0);
    assert_eq!(
        view(&snapshot, ids[0]).unwrap().path,
        vec![Vector2::new(50.0, 0.0), Vector2::new(75.0, 0.0)]
    );

    // A new move order replaces the whole path
    engine.queue_command(order(-40.0, PathMode::Replace));
    let snapshot = engine.tick(0.0);
    assert_eq!(view(&snapshot, ids[0]).unwrap().path, vec![Vector2::new(-40.0, 0.0)]);
}

#[test]
fn test_blocked_path_rejected() {
    let (mut engine, ids) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    engine.add_obstacle(building("wall", (20.0, -40.0), (30.0, 40.0)));
    let pond = Polygon::regular(Vector2::new(0.0, 60.0), 15.0, 6).unwrap();
    engine.add_obstacle(Obstacle::from_polygon("pond", ObstacleKind::Water, pond));

    assert!(!engine.is_valid_path_target(ids[0], Vector2::new(60.0, 0.0), true));
    assert!(!engine.is_valid_path_target(ids[0], Vector2::new(0.0, 100.0), true));
    assert!(engine.is_valid_path_target(ids[0], Vector2::new(-50.0, 0.0), true));
    assert!(!engine.is_valid_path_target(UnitId(99), Vector2::new(-50.0, 0.0), true));

    engine.queue_command(PlayerCommand::IssuePath {
        units: ids.clone(),
        target: Vector2::new(60.0, 0.0),
        assault: false,
        mode: PathMode::Replace,
    });
    let snapshot = engine.tick(0.0);
    assert!(view(&snapshot, ids[0]).unwrap().path.is_empty());
}

// ---- Time control ----

#[test]
fn test_pause_and_resume() {
    let (mut engine, _) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);
    engine.queue_command(PlayerCommand::Pause);
    let snapshot = engine.tick(0.1);
    assert_eq!(snapshot.phase, GamePhase::Paused);
    assert_eq!(snapshot.time.tick, 0);

    engine.queue_command(PlayerCommand::Resume);
    let snapshot = engine.tick(0.1);
    assert_eq!(snapshot.phase, GamePhase::Active);
    assert_eq!(snapshot.time.tick, 1);
}

#[test]
fn test_time_scale_and_dt_clamp() {
    let (mut engine, _) = engine_with(&[unit(0.0, 0.0, 0, EAST)]);

    engine.tick(5.0);
    assert!((engine.time().elapsed_secs - MAX_TICK_DT).abs() < 1e-12);

    engine.queue_command(PlayerCommand::SetTimeScale { scale: 2.0 });
    engine.tick(0.1);
    assert!((engine.time().elapsed_secs - (MAX_TICK_DT + 0.2)).abs() < 1e-12);

    engine.queue_command(PlayerCommand::SetTimeScale { scale: 100.0 });
    engine.tick(0.0);
    assert_eq!(engine.time_scale(), MAX_TIME_SCALE);

    engine.queue_command(PlayerCommand::SetTimeScale { scale: 0.0 });
    let before = engine.time();
    engine.tick(0.1);
    assert_eq!(engine.time().tick, before.tick);
}

// ---- Scenarios ----

#[test]
fn test_skirmish_scenario_layout() {
    let engine = SimulationEngine::from_scenario(SimConfig::default(), &Scenario::skirmish()).unwrap();
    assert_eq!(engine.obstacles().len(), 2);

    let mut engine = engine;
    let snapshot = engine.tick(0.0);
    assert_eq!(snapshot.units.len(), 6);
    assert_eq!(snapshot.units.iter().filter(|u| u.team == FRIENDLY_TEAM).count(), 5);
    assert_eq!(snapshot.obstacles.len(), 2);
    for unit in &snapshot.units {
        assert!(engine.obstacles().containing(unit.position).is_none());
        assert_eq!(unit.direction, EAST);
    }
}

#[test]
fn test_scenario_from_json_fills_defaults() {
    let json = r#"{
        "units": [
            { "position": { "x": 0.0, "y": 0.0 } },
            { "position": { "x": 40.0, "y": 0.0 }, "team": 1, "stats": { "range": 300.0 } }
        ],
        "obstacles": [
            { "name": "shed", "nodes": [ {"x": 10, "y": 10}, {"x": 20, "y": 10}, {"x": 20, "y": 20} ] }
        ]
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    assert_eq!(scenario.units[0].team.0, 0);
    assert_eq!(scenario.units[1].stats.range, 300.0);
    assert_eq!(scenario.units[1].stats.speed, UNIT_SPEED);
    assert_eq!(scenario.obstacles[0].kind, ObstacleKind::Building);
}

#[test]
fn test_scenario_rejects_bad_input() {
    let degenerate = r#"{ "obstacles": [ { "name": "line", "nodes": [ {"x": 0, "y": 0}, {"x": 1, "y": 1} ] } ] }"#;
    assert!(matches!(
        Scenario::from_json(degenerate),
        Err(ScenarioError::Obstacle { ref name, .. }) if name == "line"
    ));

    let bad_radius = r#"{ "units": [ { "position": { "x": 0, "y": 0 }, "stats": { "radius": -1 } } ] }"#;
    assert!(matches!(
        Scenario::from_json(bad_radius),
        Err(ScenarioError::InvalidUnit { index: 0, .. })
    ));

    assert!(matches!(Scenario::from_json("{ units: "), Err(ScenarioError::Json(_))));
}
