//! Detonation system — rocket proximity kills and bomb ground impacts.
//!
//! Runs before movement so ordnance segments are tested against the path the
//! entity is about to fly, not the one it already flew.

use std::collections::HashSet;

use hecs::{Entity, World};

use skystrike_core::components::{Bomb, Rocket, Target, TargetProfile};
use skystrike_core::constants::{BOMB_LETHAL_RADIUS, DT, ROCKET_LETHAL_RADIUS};
use skystrike_core::enums::ImpactKind;
use skystrike_core::events::SimEvent;
use skystrike_core::types::{Position, Velocity};
use skystrike_terrain::GroundQuery;

/// Run detonation checks for one tick.
pub fn run(
    world: &mut World,
    ground: &dyn GroundQuery,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let targets: Vec<(u32, Entity, Position)> = world
        .query::<(&Target, &TargetProfile, &Position)>()
        .iter()
        .map(|(entity, (_, profile, pos))| (profile.target_id, entity, *pos))
        .collect();

    let mut destroyed: HashSet<u32> = HashSet::new();

    // Rockets: proximity against their own target, then ground strike.
    for (entity, (rocket, pos, vel)) in world
        .query::<(&Rocket, &Position, &Velocity)>()
        .iter()
    {
        let hit_target = rocket.target_id.and_then(|tid| {
            targets
                .iter()
                .find(|(id, _, tpos)| *id == tid && pos.range_to(tpos) <= ROCKET_LETHAL_RADIUS)
        });

        if let Some((tid, _, _)) = hit_target {
            events.push(SimEvent::RocketGone {
                rocket_id: rocket.rocket_id,
                kind: ImpactKind::TargetHit,
            });
            if destroyed.insert(*tid) {
                events.push(SimEvent::TargetDestroyed { target_id: *tid });
            }
            despawn_buffer.push(entity);
            continue;
        }

        let next = pos.advanced_by(vel, DT);
        if ground.segment_hit(pos, &next).is_some() {
            events.push(SimEvent::RocketGone {
                rocket_id: rocket.rocket_id,
                kind: ImpactKind::GroundImpact,
            });
            despawn_buffer.push(entity);
        }
    }

    // Bombs: segment test against the ground, blast radius against targets.
    for (entity, (bomb, pos, vel)) in world
        .query::<(&Bomb, &Position, &Velocity)>()
        .iter()
    {
        let next = pos.advanced_by(vel, DT);
        let Some(hit) = ground.segment_hit(pos, &next) else {
            continue;
        };

        let mut kind = ImpactKind::GroundImpact;
        for (tid, _, tpos) in &targets {
            if hit.range_to(tpos) <= BOMB_LETHAL_RADIUS && destroyed.insert(*tid) {
                kind = ImpactKind::TargetHit;
                events.push(SimEvent::TargetDestroyed { target_id: *tid });
            }
        }

        events.push(SimEvent::BombImpact {
            bomb_id: bomb.bomb_id,
            kind,
        });
        despawn_buffer.push(entity);
    }

    // Despawn destroyed targets, then spent ordnance.
    for (tid, entity, _) in &targets {
        if destroyed.contains(tid) {
            let _ = world.despawn(*entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skystrike_core::components::GuidanceTuning;
    use skystrike_core::enums::TargetArchetype;
    use skystrike_core::types::Velocity;
    use skystrike_terrain::FlatGround;

    fn spawn_target(world: &mut World, id: u32, pos: Position) -> Entity {
        world.spawn((
            Target,
            TargetProfile {
                target_id: id,
                archetype: TargetArchetype::Emplacement,
                last_drift_tick: 0,
            },
            pos,
            Velocity::default(),
        ))
    }

    fn spawn_rocket(world: &mut World, id: u32, target_id: Option<u32>, pos: Position) -> Entity {
        world.spawn((
            Rocket {
                rocket_id: id,
                target_id,
                age_secs: 0.0,
                standard_prediction: Position::default(),
                deviated_prediction: Position::default(),
            },
            GuidanceTuning::default(),
            pos,
            Velocity::new(0.0, 15.0, 5.0),
        ))
    }

    #[test]
    fn test_rocket_proximity_kill() {
        let mut world = World::new();
        let ground = FlatGround::new(-100.0);
        spawn_target(&mut world, 3, Position::new(0.0, 10.0, 5.0));
        spawn_rocket(&mut world, 0, Some(3), Position::new(0.0, 9.0, 5.0));

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &ground, &mut events, &mut buffer);

        assert!(events.contains(&SimEvent::RocketGone {
            rocket_id: 0,
            kind: ImpactKind::TargetHit
        }));
        assert!(events.contains(&SimEvent::TargetDestroyed { target_id: 3 }));
        assert_eq!(world.query_mut::<&Rocket>().into_iter().count(), 0);
        assert_eq!(world.query_mut::<&Target>().into_iter().count(), 0);
    }

    #[test]
    fn test_rocket_out_of_radius_keeps_flying() {
        let mut world = World::new();
        let ground = FlatGround::new(-100.0);
        spawn_target(&mut world, 3, Position::new(0.0, 50.0, 5.0));
        spawn_rocket(&mut world, 0, Some(3), Position::new(0.0, 0.0, 5.0));

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &ground, &mut events, &mut buffer);

        assert!(events.is_empty());
        assert_eq!(world.query_mut::<&Rocket>().into_iter().count(), 1);
    }

    #[test]
    fn test_rocket_ground_strike() {
        let mut world = World::new();
        let ground = FlatGround::new(0.0);
        let entity = spawn_rocket(&mut world, 7, None, Position::new(0.0, 0.0, 0.05));
        // Point it down so the next movement segment crosses the plane.
        *world.get::<&mut Velocity>(entity).unwrap() = Velocity::new(0.0, 0.0, -15.0);

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &ground, &mut events, &mut buffer);

        assert_eq!(
            events,
            vec![SimEvent::RocketGone {
                rocket_id: 7,
                kind: ImpactKind::GroundImpact
            }]
        );
        assert_eq!(world.query_mut::<&Rocket>().into_iter().count(), 0);
    }

    #[test]
    fn test_bomb_impact_destroys_nearby_target() {
        let mut world = World::new();
        let ground = FlatGround::new(0.0);
        spawn_target(&mut world, 9, Position::new(2.0, 0.0, 0.0));
        world.spawn((
            Bomb { bomb_id: 1 },
            Position::new(0.0, 0.0, 0.1),
            Velocity::new(0.0, 0.0, -20.0),
        ));

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &ground, &mut events, &mut buffer);

        assert!(events.contains(&SimEvent::TargetDestroyed { target_id: 9 }));
        assert!(events.contains(&SimEvent::BombImpact {
            bomb_id: 1,
            kind: ImpactKind::TargetHit
        }));
        assert_eq!(world.query_mut::<&Bomb>().into_iter().count(), 0);
        assert_eq!(world.query_mut::<&Target>().into_iter().count(), 0);
    }

    #[test]
    fn test_bomb_impact_away_from_targets() {
        let mut world = World::new();
        let ground = FlatGround::new(0.0);
        spawn_target(&mut world, 9, Position::new(100.0, 0.0, 0.0));
        world.spawn((
            Bomb { bomb_id: 1 },
            Position::new(0.0, 0.0, 0.1),
            Velocity::new(0.0, 0.0, -20.0),
        ));

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &ground, &mut events, &mut buffer);

        assert_eq!(
            events,
            vec![SimEvent::BombImpact {
                bomb_id: 1,
                kind: ImpactKind::GroundImpact
            }]
        );
        assert_eq!(world.query_mut::<&Target>().into_iter().count(), 1);
    }
}
