//! Snapshot building: queries the world into a complete GameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use starfall_core::components::{Enemy, PlayerShip, Projectile};
use starfall_core::enums::GamePhase;
use starfall_core::events::GameEvent;
use starfall_core::state::{EnemyView, GameSnapshot, PlayerView, ProjectileView};
use starfall_core::types::{Playfield, Rect, SimTime};

use crate::engine::Scoreboard;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scoreboard: &Scoreboard,
    playfield: Playfield,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        score: scoreboard.score,
        lives: scoreboard.lives,
        playfield,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Build the player view. Defaults to a zero rect before any session
/// has spawned a ship.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&PlayerShip, &Rect)>()
        .iter()
        .next()
        .map(|(_, (_, rect))| PlayerView { rect: *rect })
        .unwrap_or_default()
}

/// Build the enemy list, sorted by creation id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Rect)>()
        .iter()
        .map(|(_, (enemy, rect))| EnemyView {
            id: enemy.id,
            rect: *rect,
            speed: enemy.speed,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build the projectile list, sorted by creation id.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Rect)>()
        .iter()
        .map(|(_, (projectile, rect))| ProjectileView {
            id: projectile.id,
            rect: *rect,
            heading: projectile.heading,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
