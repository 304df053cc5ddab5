//! Rocket guidance system — steers each rocket toward its predicted aim point.
//!
//! Every tick the prediction kernel computes the deviated lead point for the
//! rocket's target; the rocket's heading rotates toward it, clamped by the
//! turn rate, while its speed stays constant.

use std::collections::HashMap;

use hecs::World;

use skystrike_core::components::{GuidanceTuning, Rocket, Target, TargetProfile};
use skystrike_core::constants::{DT, ROCKET_SPEED, ROCKET_TURN_RATE};
use skystrike_core::types::{KinematicSample, Position, Velocity};

use crate::prediction;

/// Run rocket guidance for one tick.
pub fn run(world: &mut World, elapsed_secs: f64) {
    // Sample all live targets first so the rocket query holds the only borrow.
    let targets: HashMap<u32, KinematicSample> = world
        .query::<(&Target, &TargetProfile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, profile, pos, vel))| (profile.target_id, KinematicSample::new(*pos, *vel)))
        .collect();

    for (_entity, (rocket, tuning, pos, vel)) in
        world.query_mut::<(&mut Rocket, &GuidanceTuning, &Position, &mut Velocity)>()
    {
        let Some(target_id) = rocket.target_id else {
            continue; // no target: fly straight until expiry
        };

        let Some(target) = targets.get(&target_id) else {
            // Target destroyed mid-flight; keep the last heading.
            rocket.target_id = None;
            continue;
        };

        let pred = prediction::predict(pos, vel, target, tuning, elapsed_secs);
        rocket.standard_prediction = pred.standard;
        rocket.deviated_prediction = pred.deviated;

        *vel = steer_toward(pos, vel, &pred.deviated, ROCKET_SPEED, ROCKET_TURN_RATE * DT);
    }
}

/// Rotate the current velocity toward an aim point, limited to `max_angle`
/// radians of heading change, holding the given speed.
fn steer_toward(
    pos: &Position,
    current: &Velocity,
    aim: &Position,
    speed: f64,
    max_angle: f64,
) -> Velocity {
    let dx = aim.x - pos.x;
    let dy = aim.y - pos.y;
    let dz = aim.z - pos.z;
    let dist = (dx * dx + dy * dy + dz * dz).sqrt();
    if dist < 1e-6 {
        return *current;
    }

    let desired = Velocity::new(speed * dx / dist, speed * dy / dist, speed * dz / dist);

    let current_speed = current.speed();
    if current_speed < 1e-6 {
        return desired;
    }

    // Angle between current and desired heading.
    let dot = (current.x * desired.x + current.y * desired.y + current.z * desired.z)
        / (current_speed * speed);
    let angle = dot.clamp(-1.0, 1.0).acos();

    if angle > max_angle && angle > 1e-6 {
        // Limit turn: interpolate between old and new direction, renormalize.
        let t = max_angle / angle;
        let lim_x = current.x + (desired.x - current.x) * t;
        let lim_y = current.y + (desired.y - current.y) * t;
        let lim_z = current.z + (desired.z - current.z) * t;
        let lim_speed = (lim_x * lim_x + lim_y * lim_y + lim_z * lim_z).sqrt();
        let s = speed / lim_speed;
        Velocity::new(lim_x * s, lim_y * s, lim_z * s)
    } else {
        desired
    }
}
