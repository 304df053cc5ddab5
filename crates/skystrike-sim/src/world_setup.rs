//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the aircraft, strike targets, and ordnance entities with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::TargetArchetype;
use skystrike_core::types::{Position, Velocity};

/// Aircraft start altitude (meters).
const AIRCRAFT_START_ALTITUDE: f64 = 60.0;

/// Aircraft initial forward speed (m/s).
const AIRCRAFT_START_SPEED: f64 = 12.0;

/// Spawn range band for mission targets (meters from the origin).
const TARGET_MIN_RANGE: f64 = 60.0;
const TARGET_MAX_RANGE: f64 = 250.0;

/// Set up the initial mission world: aircraft plus a jittered target wave.
/// Returns the number of targets spawned.
pub fn setup_mission(world: &mut World, rng: &mut ChaCha8Rng, next_target_id: &mut u32) -> u32 {
    spawn_aircraft(world);

    let loadout = [
        TargetArchetype::Emplacement,
        TargetArchetype::Emplacement,
        TargetArchetype::LightVehicle,
        TargetArchetype::LightVehicle,
        TargetArchetype::FastBoat,
        TargetArchetype::FastBoat,
    ];
    for archetype in loadout {
        spawn_target(world, rng, next_target_id, archetype);
    }
    loadout.len() as u32
}

/// Spawn the player's aircraft in level forward flight.
pub fn spawn_aircraft(world: &mut World) -> hecs::Entity {
    world.spawn((
        OwnAircraft,
        Position::new(0.0, 0.0, AIRCRAFT_START_ALTITUDE),
        Velocity::new(0.0, AIRCRAFT_START_SPEED, 0.0),
        BombSight::default(),
    ))
}

/// Spawn a single target at a random bearing and range, heading randomly.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    archetype: TargetArchetype,
) -> hecs::Entity {
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let range: f64 = rng.gen_range(TARGET_MIN_RANGE..TARGET_MAX_RANGE);

    // Bearing is measured from North (y-axis) clockwise to East (x-axis).
    let position = Position::new(range * bearing.sin(), range * bearing.cos(), 0.0);

    let speed = archetype_speed(archetype);
    let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let velocity = Velocity::new(speed * heading.sin(), speed * heading.cos(), 0.0);

    let target_id = *next_target_id;
    *next_target_id += 1;

    world.spawn((
        Target,
        TargetProfile {
            target_id,
            archetype,
            last_drift_tick: 0,
        },
        position,
        velocity,
        PositionHistory::default(),
    ))
}

/// Spawn a rocket in flight toward its target.
pub fn spawn_rocket(
    world: &mut World,
    rocket_id: u32,
    position: Position,
    velocity: Velocity,
    target_id: u32,
) -> hecs::Entity {
    world.spawn((
        Rocket {
            rocket_id,
            target_id: Some(target_id),
            age_secs: 0.0,
            standard_prediction: position,
            deviated_prediction: position,
        },
        GuidanceTuning::default(),
        position,
        velocity,
        PositionHistory::default(),
    ))
}

/// Ground speed for a target archetype (m/s).
pub fn archetype_speed(archetype: TargetArchetype) -> f64 {
    match archetype {
        TargetArchetype::Emplacement => 0.0,
        TargetArchetype::LightVehicle => VEHICLE_SPEED,
        TargetArchetype::FastBoat => BOAT_SPEED,
    }
}
