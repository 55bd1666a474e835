//! Removal of entities that have left the playfield.

use hecs::{Entity, World};

use starfall_core::components::{Enemy, Projectile};
use starfall_core::types::{Playfield, Rect};

/// Remove projectiles past either horizontal bound and enemies fully
/// past the left edge. Runs after the collision pass, so a projectile
/// still overlapping something on its way out scores first.
pub fn run(world: &mut World, field: Playfield, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_projectile, rect)) in world.query_mut::<(&Projectile, &Rect)>() {
        if rect.pos.x > field.width || rect.pos.x < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_enemy, rect)) in world.query_mut::<(&Enemy, &Rect)>() {
        if rect.right() < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
