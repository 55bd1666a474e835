//! Entity spawn factories for populating the game world.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Enemy, FireCycle, PlayerShip, Projectile};
use starfall_core::constants::{
    ENEMY_SHOT_SPEED, ENEMY_SIZE, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN, FIRE_INTERVAL_MAX_TICKS,
    FIRE_INTERVAL_MIN_TICKS, PLAYER_ASPECT, PLAYER_SHOT_SPEED, PLAYER_STEP, PLAYER_WIDTH_RATIO,
    PLAYER_X, PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use starfall_core::enums::Heading;
use starfall_core::types::{Playfield, Rect};

/// The player ship rect for a given playfield: fixed x, top edge at the
/// vertical center, width as a fraction of the field width, height from
/// the sprite aspect ratio.
pub fn player_rect(field: Playfield) -> Rect {
    let width = field.width * PLAYER_WIDTH_RATIO;
    let height = width * PLAYER_ASPECT;
    Rect::new(PLAYER_X, field.height / 2.0, width, height)
}

/// Spawn the player ship.
pub fn spawn_player(world: &mut World, field: Playfield) -> hecs::Entity {
    world.spawn((PlayerShip { step: PLAYER_STEP }, player_rect(field)))
}

/// Spawn one enemy at the right edge with randomized vertical position
/// and drift speed, arming a fire cycle when `arm_fire` is set.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    field: Playfield,
    arm_fire: bool,
    current_tick: u64,
) -> hecs::Entity {
    let speed = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
    // Keep the whole sprite inside the field vertically. Fields shorter
    // than one sprite pin the enemy to the top.
    let max_y = (field.height - ENEMY_SIZE).max(0.0);
    let y = if max_y > 0.0 {
        rng.gen_range(0.0..max_y)
    } else {
        0.0
    };

    let id = *next_id;
    *next_id += 1;

    let enemy = Enemy { id, speed };
    let rect = Rect::new(field.width, y, ENEMY_SIZE, ENEMY_SIZE);

    if arm_fire {
        let interval_ticks = rng.gen_range(FIRE_INTERVAL_MIN_TICKS..=FIRE_INTERVAL_MAX_TICKS);
        let cycle = FireCycle {
            interval_ticks,
            next_fire_tick: current_tick + interval_ticks,
        };
        world.spawn((enemy, rect, cycle))
    } else {
        world.spawn((enemy, rect))
    }
}

/// Spawn a projectile with its top-left corner at `origin` (the firing
/// edge midpoint). Speed is fixed per heading: player shots outrun
/// enemy shots.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    origin: Vec2,
    heading: Heading,
) -> hecs::Entity {
    let speed = match heading {
        Heading::TowardEnemies => PLAYER_SHOT_SPEED,
        Heading::TowardPlayer => ENEMY_SHOT_SPEED,
    };

    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Projectile { id, heading, speed },
        Rect::new(origin.x, origin.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
    ))
}

/// Spawn an enemy at an explicit position with explicit speed, for tests
/// that need controlled placement.
#[cfg(test)]
pub fn spawn_enemy_at(
    world: &mut World,
    next_id: &mut u32,
    x: f32,
    y: f32,
    speed: f32,
    cycle: Option<FireCycle>,
) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;

    let enemy = Enemy { id, speed };
    let rect = Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE);

    match cycle {
        Some(cycle) => world.spawn((enemy, rect, cycle)),
        None => world.spawn((enemy, rect)),
    }
}
