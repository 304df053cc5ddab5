//! Bombing system — keeps the impact indicator current and releases bombs.
//!
//! The bomb sight re-runs the ballistic impact predictor every tick with the
//! aircraft's fresh kinematics; the indicator clears when no ground hit is
//! found within the step budget.

use hecs::World;

use skystrike_core::components::{Ballistic, Bomb, BombSight, OwnAircraft};
use skystrike_core::constants::{
    GRAVITY, INDICATOR_MAX_SCALE, TRAJECTORY_MAX_STEPS, TRAJECTORY_STEP_SECS,
};
use skystrike_core::events::SimEvent;
use skystrike_core::types::{KinematicSample, Position, Velocity};
use skystrike_terrain::GroundQuery;

use crate::prediction;

/// Update the aircraft's bomb sight from its current kinematics.
pub fn update_sight(world: &mut World, ground: &dyn GroundQuery) {
    for (_entity, (_own, pos, vel, sight)) in
        world.query_mut::<(&OwnAircraft, &Position, &Velocity, &mut BombSight)>()
    {
        let launch = KinematicSample::new(*pos, *vel);
        sight.indicator = prediction::predict_impact(
            &launch,
            GRAVITY,
            TRAJECTORY_STEP_SECS,
            TRAJECTORY_MAX_STEPS,
            INDICATOR_MAX_SCALE,
            ground,
        )
        .map(|hit| hit.position);
    }
}

/// Release a bomb from the aircraft: spawned at the aircraft position with
/// the horizontal components of its velocity, falling under gravity.
pub fn release(world: &mut World, next_bomb_id: &mut u32, events: &mut Vec<SimEvent>) {
    let sample = world
        .query::<(&OwnAircraft, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel))| KinematicSample::new(*pos, *vel));

    let Some(sample) = sample else {
        return; // no aircraft in the world
    };

    let bomb_id = *next_bomb_id;
    *next_bomb_id += 1;

    world.spawn((
        Bomb { bomb_id },
        sample.position,
        sample.velocity.horizontal(),
        Ballistic,
    ));
    events.push(SimEvent::BombReleased { bomb_id });
}
