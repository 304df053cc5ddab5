//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `SimSnapshot`s. Completely headless,
//! enabling deterministic testing. The ground-collision capability is
//! injected at construction so the engine runs against a flat plane, a
//! heightfield, or a test stub without code changes.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{OwnAircraft, Target, TargetProfile};
use skystrike_core::constants::ROCKET_SPEED;
use skystrike_core::enums::GamePhase;
use skystrike_core::events::SimEvent;
use skystrike_core::state::SimSnapshot;
use skystrike_core::types::{Position, SimTime, Velocity};
use skystrike_terrain::{FlatGround, GroundQuery};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    ground: Box<dyn GroundQuery>,
    next_target_id: u32,
    next_rocket_id: u32,
    next_bomb_id: u32,
    targets_total: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine over a flat ground plane at the datum.
    pub fn new(config: SimConfig) -> Self {
        Self::with_ground(config, FlatGround::new(0.0))
    }

    /// Create a new simulation engine with an injected ground query.
    pub fn with_ground(config: SimConfig, ground: impl GroundQuery + 'static) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ground: Box::new(ground),
            next_target_id: 0,
            next_rocket_id: 0,
            next_bomb_id: 0,
            targets_total: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            self.check_mission_complete();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Start an Active mission with only the aircraft (for tests that
    /// spawn their own targets).
    #[cfg(test)]
    pub fn begin_empty_mission(&mut self) {
        self.world = World::new();
        world_setup::spawn_aircraft(&mut self.world);
        self.time = SimTime::default();
        self.targets_total = 0;
        self.phase = GamePhase::Active;
    }

    /// Spawn a target with explicit kinematics (for tests).
    #[cfg(test)]
    pub fn spawn_test_target(
        &mut self,
        position: Position,
        velocity: Velocity,
        archetype: skystrike_core::enums::TargetArchetype,
    ) -> u32 {
        use skystrike_core::components::PositionHistory;

        let target_id = self.next_target_id;
        self.next_target_id += 1;
        self.targets_total += 1;
        self.world.spawn((
            Target,
            TargetProfile {
                target_id,
                archetype,
                last_drift_tick: 0,
            },
            position,
            velocity,
            PositionHistory::default(),
        ));
        target_id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::Complete) {
                    self.world = World::new();
                    self.next_target_id = 0;
                    self.next_rocket_id = 0;
                    self.next_bomb_id = 0;
                    self.targets_total =
                        world_setup::setup_mission(&mut self.world, &mut self.rng, &mut self.next_target_id);
                    self.time = SimTime::default();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetAircraftVelocity { x, y, z } => {
                for (_entity, (_own, vel)) in
                    self.world.query_mut::<(&OwnAircraft, &mut Velocity)>()
                {
                    *vel = Velocity::new(x, y, z);
                }
            }
            PlayerCommand::LaunchRocket { target_id } => {
                if self.phase == GamePhase::Active {
                    self.launch_rocket(target_id);
                }
            }
            PlayerCommand::ReleaseBomb => {
                if self.phase == GamePhase::Active {
                    systems::bombing::release(
                        &mut self.world,
                        &mut self.next_bomb_id,
                        &mut self.events,
                    );
                }
            }
        }
    }

    /// Spawn a rocket from the aircraft toward a live target.
    /// Unknown target ids are ignored.
    fn launch_rocket(&mut self, target_id: u32) {
        let aircraft_pos = self
            .world
            .query::<(&OwnAircraft, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, pos))| *pos);
        let target_pos = self
            .world
            .query::<(&TargetProfile, &Position)>()
            .iter()
            .find(|(_, (profile, _))| profile.target_id == target_id)
            .map(|(_, (_, pos))| *pos);

        let (Some(from), Some(to)) = (aircraft_pos, target_pos) else {
            return;
        };

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dz = to.z - from.z;
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        let velocity = if dist > 1.0 {
            Velocity::new(
                ROCKET_SPEED * dx / dist,
                ROCKET_SPEED * dy / dist,
                ROCKET_SPEED * dz / dist,
            )
        } else {
            Velocity::new(0.0, ROCKET_SPEED, 0.0) // fallback
        };

        let rocket_id = self.next_rocket_id;
        self.next_rocket_id += 1;
        world_setup::spawn_rocket(&mut self.world, rocket_id, from, velocity, target_id);
        self.events.push(SimEvent::RocketAway {
            rocket_id,
            target_id,
        });
    }

    /// Run all systems in order. Predictions are computed before the
    /// steering and sight updates that consume them.
    fn run_systems(&mut self) {
        // 1. Target heading drift
        systems::target_motion::run(&mut self.world, &mut self.rng, self.time.tick);
        // 2. Rocket guidance (lead prediction + deviation + steering)
        systems::homing::run(&mut self.world, self.time.elapsed_secs);
        // 3. Bomb sight (ballistic impact prediction)
        systems::bombing::update_sight(&mut self.world, self.ground.as_ref());
        // 4. Detonation (proximity kills, ground impacts)
        systems::detonation::run(
            &mut self.world,
            self.ground.as_ref(),
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Movement integration (gravity + position)
        systems::movement::run(&mut self.world);
        // 6. Position history
        systems::movement::update_history(&mut self.world, self.time.tick);
        // 7. Rocket lifetime
        systems::lifetime::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 8. Cleanup (OOB ordnance)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Flip to Complete once every mission target is gone.
    fn check_mission_complete(&mut self) {
        if self.targets_total == 0 {
            return;
        }
        let remaining = {
            let mut query = self.world.query::<&Target>();
            query.iter().count()
        };
        if remaining == 0 {
            self.phase = GamePhase::Complete;
            self.events.push(SimEvent::MissionComplete);
        }
    }
}
