//! Enemy fire cycles: armed enemies shoot toward the player.

use glam::Vec2;
use hecs::World;

use starfall_core::components::{Enemy, FireCycle};
use starfall_core::enums::Heading;
use starfall_core::events::GameEvent;
use starfall_core::types::{Playfield, Rect};

/// Fire every due cycle. The cycle reschedules whether or not the shot
/// is suppressed; shots only appear while the enemy is horizontally on
/// the visible field.
pub fn run(
    world: &mut World,
    next_id: &mut u32,
    field: Playfield,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    // Collect muzzle points first; spawning while the query holds the
    // world borrow is not possible.
    let mut muzzles: Vec<Vec2> = Vec::new();

    for (_entity, (_enemy, rect, cycle)) in world.query_mut::<(&Enemy, &Rect, &mut FireCycle)>() {
        if current_tick < cycle.next_fire_tick {
            continue;
        }
        cycle.next_fire_tick = current_tick + cycle.interval_ticks;

        let on_field = rect.pos.x < field.width && rect.right() > 0.0;
        if on_field {
            muzzles.push(rect.left_mid());
        }
    }

    for muzzle in muzzles {
        crate::world_setup::spawn_projectile(world, next_id, muzzle, Heading::TowardPlayer);
        events.push(GameEvent::ShotFired {
            heading: Heading::TowardPlayer,
        });
    }
}
