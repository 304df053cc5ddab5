//! Cleanup system: removes ordnance that left the play area.
//!
//! Targets and the aircraft are never culled here; only rockets and bombs
//! that escaped the world radius or fell through the datum floor.

use hecs::{Entity, World};

use skystrike_core::components::{Bomb, Rocket};
use skystrike_core::constants::{FLOOR_MARGIN, WORLD_RADIUS};
use skystrike_core::types::Position;

/// Despawn out-of-bounds ordnance. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;

    for (entity, (pos, _rocket)) in world.query_mut::<(&Position, &Rocket)>() {
        if out_of_bounds(pos, radius_sq) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _bomb)) in world.query_mut::<(&Position, &Bomb)>() {
        if out_of_bounds(pos, radius_sq) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn out_of_bounds(pos: &Position, radius_sq: f64) -> bool {
    pos.x * pos.x + pos.y * pos.y > radius_sq || pos.z < -FLOOR_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oob_bomb_despawned() {
        let mut world = World::new();
        world.spawn((Bomb { bomb_id: 0 }, Position::new(0.0, 0.0, -FLOOR_MARGIN - 1.0)));
        world.spawn((Bomb { bomb_id: 1 }, Position::new(0.0, 0.0, 10.0)));

        let mut buffer = Vec::new();
        run(&mut world, &mut buffer);

        let survivors: Vec<u32> = world
            .query_mut::<&Bomb>()
            .into_iter()
            .map(|(_, b)| b.bomb_id)
            .collect();
        assert_eq!(survivors, vec![1]);
    }

    #[test]
    fn test_beyond_world_radius_despawned() {
        let mut world = World::new();
        world.spawn((
            Rocket {
                rocket_id: 2,
                target_id: None,
                age_secs: 0.0,
                standard_prediction: Position::default(),
                deviated_prediction: Position::default(),
            },
            Position::new(WORLD_RADIUS + 10.0, 0.0, 50.0),
        ));

        let mut buffer = Vec::new();
        run(&mut world, &mut buffer);

        assert_eq!(world.query_mut::<&Rocket>().into_iter().count(), 0);
    }
}
