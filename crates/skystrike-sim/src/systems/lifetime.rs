//! Rocket lifetime system — ages rockets each tick and expires the old ones.

use hecs::{Entity, World};

use skystrike_core::components::Rocket;
use skystrike_core::constants::{DT, ROCKET_MAX_LIFETIME};
use skystrike_core::enums::ImpactKind;
use skystrike_core::events::SimEvent;

/// Age all rockets and despawn those past their lifetime.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, rocket) in world.query_mut::<&mut Rocket>() {
        rocket.age_secs += DT;
        if rocket.age_secs >= ROCKET_MAX_LIFETIME {
            events.push(SimEvent::RocketGone {
                rocket_id: rocket.rocket_id,
                kind: ImpactKind::Expired,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
