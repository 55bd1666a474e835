//! Game engine: owns the world, processes commands, runs systems.
//!
//! `GameEngine` is completely headless. Given the same config and the
//! same command sequence it produces the same snapshots, which makes
//! whole sessions testable tick by tick.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::components::PlayerShip;
use starfall_core::constants::{STARTING_LIVES, WIN_SCORE};
use starfall_core::enums::{GamePhase, Heading};
use starfall_core::events::GameEvent;
use starfall_core::state::GameSnapshot;
use starfall_core::types::{Playfield, Rect, SimTime};

use crate::systems;
use crate::systems::spawner::SpawnSchedule;
use crate::world_setup;

/// Configuration for a new game engine.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed. Same seed and same commands give the same session.
    pub seed: u64,
    /// Initial playfield dimensions.
    pub playfield: Playfield,
    /// Whether spawned enemies fire back. Off gives a shooting-gallery
    /// session, which some embedders and most scenario tests want.
    pub enemy_fire: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
            enemy_fire: true,
        }
    }
}

/// Score and lives for the current session. The snapshot carries both
/// as plain fields, so this never crosses the wire itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
}

/// The game engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    playfield: Playfield,
    enemy_fire: bool,
    rng: ChaCha8Rng,
    /// Next id handed to a spawned enemy or projectile. Never reused.
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    /// Reusable buffer for entities to despawn, to avoid allocating every tick.
    despawn_buffer: Vec<hecs::Entity>,
    /// Events accumulated during the current tick, drained into the snapshot.
    events: Vec<GameEvent>,
    spawn_schedule: SpawnSchedule,
    scoreboard: Scoreboard,
}

impl GameEngine {
    /// Create a new game engine with the given config.
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            playfield: config.playfield,
            enemy_fire: config.enemy_fire,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawn_schedule: SpawnSchedule::default(),
            scoreboard: Scoreboard {
                score: 0,
                lives: STARTING_LIVES,
            },
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands at once.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.scoreboard,
            self.playfield,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current playfield dimensions.
    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an explicit position and speed (for tests).
    /// Returns the assigned enemy id.
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, x: f32, y: f32, speed: f32) -> u32 {
        let id = self.next_entity_id;
        world_setup::spawn_enemy_at(&mut self.world, &mut self.next_entity_id, x, y, speed, None);
        id
    }

    /// Spawn an enemy with an armed fire cycle (for tests).
    /// Returns the assigned enemy id.
    #[cfg(test)]
    pub fn spawn_armed_enemy_at(&mut self, x: f32, y: f32, speed: f32, interval_ticks: u64) -> u32 {
        let cycle = starfall_core::components::FireCycle {
            interval_ticks,
            next_fire_tick: self.time.tick + interval_ticks,
        };
        let id = self.next_entity_id;
        world_setup::spawn_enemy_at(
            &mut self.world,
            &mut self.next_entity_id,
            x,
            y,
            speed,
            Some(cycle),
        );
        id
    }

    /// Spawn a projectile at an explicit position (for tests).
    /// Returns the assigned projectile id.
    #[cfg(test)]
    pub fn spawn_shot_at(&mut self, x: f32, y: f32, heading: Heading) -> u32 {
        let id = self.next_entity_id;
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_entity_id,
            glam::Vec2::new(x, y),
            heading,
        );
        id
    }

    /// Cancel enemy spawning (for tests that need a quiet field).
    #[cfg(test)]
    pub fn halt_spawning(&mut self) {
        self.spawn_schedule.cancel();
    }

    /// Whether an enemy spawn is pending (for tests).
    #[cfg(test)]
    pub fn spawn_pending(&self) -> bool {
        self.spawn_schedule.is_armed()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that do not apply to the
    /// current phase are silently dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Idle {
                    self.enter_running();
                }
            }
            PlayerCommand::ResetGame => {
                if self.phase.is_terminal() {
                    self.enter_running();
                }
            }
            PlayerCommand::MoveUp => {
                if self.phase == GamePhase::Running {
                    for (_entity, (ship, rect)) in
                        self.world.query_mut::<(&PlayerShip, &mut Rect)>()
                    {
                        // The bound gates the nudge, not the result: the ship
                        // may overshoot the edge by less than one step.
                        if rect.pos.y > 0.0 {
                            rect.pos.y -= ship.step;
                        }
                    }
                }
            }
            PlayerCommand::MoveDown => {
                if self.phase == GamePhase::Running {
                    let field_height = self.playfield.height;
                    for (_entity, (ship, rect)) in
                        self.world.query_mut::<(&PlayerShip, &mut Rect)>()
                    {
                        if rect.bottom() < field_height {
                            rect.pos.y += ship.step;
                        }
                    }
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Running {
                    let muzzle = {
                        let mut query = self.world.query::<(&PlayerShip, &Rect)>();
                        query.iter().next().map(|(_, (_, rect))| rect.right_mid())
                    };
                    if let Some(muzzle) = muzzle {
                        world_setup::spawn_projectile(
                            &mut self.world,
                            &mut self.next_entity_id,
                            muzzle,
                            Heading::TowardEnemies,
                        );
                        self.events.push(GameEvent::ShotFired {
                            heading: Heading::TowardEnemies,
                        });
                    }
                }
            }
            PlayerCommand::Resize { width, height } => {
                // Accepted in every phase so the field is right before the
                // first session starts.
                self.playfield = Playfield::new(width, height);
                let field = self.playfield;
                for (_entity, (_ship, rect)) in
                    self.world.query_mut::<(&PlayerShip, &mut Rect)>()
                {
                    *rect = world_setup::player_rect(field);
                }
            }
        }
    }

    /// Reset all session state and enter the Running phase.
    fn enter_running(&mut self) {
        // Cancel the pending spawn before touching the world so no stale
        // spawn lands in the new session.
        self.spawn_schedule.cancel();
        self.world.clear();
        self.scoreboard = Scoreboard {
            score: 0,
            lives: STARTING_LIVES,
        };
        self.time = SimTime::default();
        world_setup::spawn_player(&mut self.world, self.playfield);
        // First enemy is due on the first running tick.
        self.spawn_schedule.start(self.time.tick);
        self.phase = GamePhase::Running;
    }

    /// End the session. Entity lists stay intact for the final frame;
    /// the phase gate in `tick` stops all further updates.
    fn enter_terminal(&mut self, phase: GamePhase) {
        self.spawn_schedule.cancel();
        self.phase = phase;
        let score = self.scoreboard.score;
        self.events.push(match phase {
            GamePhase::Won => GameEvent::GameWon { score },
            _ => GameEvent::GameLost { score },
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Enemy spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            &mut self.next_entity_id,
            self.playfield,
            self.enemy_fire,
            self.time.tick,
        );

        // 2. Enemy fire cycles
        systems::enemy_fire::run(
            &mut self.world,
            &mut self.next_entity_id,
            self.playfield,
            self.time.tick,
            &mut self.events,
        );

        // 3. Movement
        systems::movement::run(&mut self.world);

        // 4. Collisions, scoring, lives
        systems::collision::run(
            &mut self.world,
            &mut self.scoreboard,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 5. Off-field cleanup
        systems::cleanup::run(&mut self.world, self.playfield, &mut self.despawn_buffer);

        // Terminal checks. A loss beats a win in the same tick.
        if self.scoreboard.lives == 0 {
            self.enter_terminal(GamePhase::Lost);
        } else if self.scoreboard.score >= WIN_SCORE {
            self.enter_terminal(GamePhase::Won);
        }
    }
}
