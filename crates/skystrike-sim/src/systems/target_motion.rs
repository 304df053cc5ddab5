//! Target motion system — mobile targets drift heading under the seeded RNG.
//!
//! Keeps the homing kernel honest: targets present changing velocity samples
//! rather than straight-line motion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::TargetProfile;
use skystrike_core::constants::{TARGET_DRIFT_INTERVAL_TICKS, TARGET_DRIFT_MAX_TURN};
use skystrike_core::enums::TargetArchetype;
use skystrike_core::types::Velocity;

/// Apply periodic heading drift to mobile targets.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, current_tick: u64) {
    for (_entity, (profile, vel)) in world.query_mut::<(&mut TargetProfile, &mut Velocity)>() {
        if profile.archetype == TargetArchetype::Emplacement {
            continue;
        }
        if current_tick.saturating_sub(profile.last_drift_tick) < TARGET_DRIFT_INTERVAL_TICKS {
            continue;
        }
        profile.last_drift_tick = current_tick;

        let speed = vel.horizontal_speed();
        if speed < 1e-6 {
            continue;
        }

        let turn: f64 = rng.gen_range(-TARGET_DRIFT_MAX_TURN..=TARGET_DRIFT_MAX_TURN);
        let heading = vel.heading() + turn;
        vel.x = speed * heading.sin();
        vel.y = speed * heading.cos();
    }
}
