//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skystrike_core::components::*;
use skystrike_core::enums::GamePhase;
use skystrike_core::events::SimEvent;
use skystrike_core::state::*;
use skystrike_core::types::{Position, SimTime, Velocity};

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        aircraft: build_aircraft(world),
        targets: build_targets(world),
        rockets: build_rockets(world),
        bombs: build_bombs(world),
        events,
    }
}

/// Build the aircraft view from the OwnAircraft entity.
fn build_aircraft(world: &World) -> AircraftView {
    world
        .query::<(&OwnAircraft, &Position, &Velocity, &BombSight)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, sight))| AircraftView {
            position: *pos,
            velocity: *vel,
            bomb_indicator: sight.indicator,
        })
        .unwrap_or_default()
}

/// Build TargetView list from all target entities.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&TargetProfile, &Position, &Velocity, &PositionHistory)>()
        .iter()
        .map(|(_, (profile, pos, vel, history))| TargetView {
            target_id: profile.target_id,
            archetype: profile.archetype,
            position: *pos,
            speed: vel.speed(),
            heading: vel.heading(),
            history: history.positions.clone(),
        })
        .collect();

    targets.sort_by_key(|t| t.target_id);
    targets
}

/// Build RocketView list from in-flight rockets.
fn build_rockets(world: &World) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = world
        .query::<(&Rocket, &Position, &Velocity)>()
        .iter()
        .map(|(_, (rocket, pos, vel))| RocketView {
            rocket_id: rocket.rocket_id,
            target_id: rocket.target_id,
            position: *pos,
            heading: vel.heading(),
            age_secs: rocket.age_secs,
            standard_prediction: rocket.standard_prediction,
            deviated_prediction: rocket.deviated_prediction,
        })
        .collect();

    rockets.sort_by_key(|r| r.rocket_id);
    rockets
}

/// Build BombView list from falling bombs.
fn build_bombs(world: &World) -> Vec<BombView> {
    let mut bombs: Vec<BombView> = world
        .query::<(&Bomb, &Position, &Velocity)>()
        .iter()
        .map(|(_, (bomb, pos, vel))| BombView {
            bomb_id: bomb.bomb_id,
            position: *pos,
            velocity: *vel,
        })
        .collect();

    bombs.sort_by_key(|b| b.bomb_id);
    bombs
}
