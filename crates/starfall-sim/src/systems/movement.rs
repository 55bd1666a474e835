//! Entity movement.
//!
//! Enemies drift left at their per-instance speed; projectiles travel
//! horizontally with the sign of their heading. Fixed pixel steps per
//! tick, no acceleration.

use hecs::World;

use starfall_core::components::{Enemy, Projectile};
use starfall_core::types::Rect;

/// Advance all enemies and projectiles by one tick.
pub fn run(world: &mut World) {
    for (_entity, (enemy, rect)) in world.query_mut::<(&Enemy, &mut Rect)>() {
        rect.pos.x -= enemy.speed;
    }

    for (_entity, (projectile, rect)) in world.query_mut::<(&Projectile, &mut Rect)>() {
        rect.pos.x += projectile.heading.sign() * projectile.speed;
    }
}
