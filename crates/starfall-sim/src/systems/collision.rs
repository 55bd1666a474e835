//! Collision pass: projectile overlap checks, scoring, lives.

use hecs::{Entity, World};

use starfall_core::components::{Enemy, PlayerShip, Projectile};
use starfall_core::constants::SCORE_PER_KILL;
use starfall_core::enums::Heading;
use starfall_core::events::GameEvent;
use starfall_core::types::Rect;

use crate::engine::Scoreboard;

/// Check every projectile against its opposing side.
///
/// Projectiles and enemies are both processed in creation (id) order,
/// so the outcome does not depend on ECS iteration order. A player shot
/// stops at its first match, and an enemy already claimed this pass
/// cannot be claimed by a second shot. Matches are collected during the
/// scan and despawned afterwards in one batch.
pub fn run(
    world: &mut World,
    scoreboard: &mut Scoreboard,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let player = {
        let mut query = world.query::<(&PlayerShip, &Rect)>();
        query.iter().next().map(|(_, (_, rect))| *rect)
    };

    let mut shots: Vec<(u32, Entity, Rect, Heading)> = {
        let mut query = world.query::<(&Projectile, &Rect)>();
        query
            .iter()
            .map(|(entity, (projectile, rect))| (projectile.id, entity, *rect, projectile.heading))
            .collect()
    };
    shots.sort_by_key(|&(id, ..)| id);

    let mut enemies: Vec<(u32, Entity, Rect)> = {
        let mut query = world.query::<(&Enemy, &Rect)>();
        query
            .iter()
            .map(|(entity, (enemy, rect))| (enemy.id, entity, *rect))
            .collect()
    };
    enemies.sort_by_key(|&(id, ..)| id);

    let mut claimed: Vec<Entity> = Vec::new();

    for (_, shot_entity, shot_rect, heading) in &shots {
        match heading {
            Heading::TowardEnemies => {
                for (enemy_id, enemy_entity, enemy_rect) in &enemies {
                    if claimed.contains(enemy_entity) {
                        continue;
                    }
                    if shot_rect.overlaps(enemy_rect) {
                        claimed.push(*enemy_entity);
                        despawn_buffer.push(*shot_entity);
                        despawn_buffer.push(*enemy_entity);
                        scoreboard.score += SCORE_PER_KILL;
                        events.push(GameEvent::EnemyDestroyed {
                            enemy_id: *enemy_id,
                        });
                        // One kill per shot.
                        break;
                    }
                }
            }
            Heading::TowardPlayer => {
                if let Some(player_rect) = player {
                    if shot_rect.overlaps(&player_rect) {
                        despawn_buffer.push(*shot_entity);
                        if scoreboard.lives > 0 {
                            scoreboard.lives -= 1;
                            events.push(GameEvent::PlayerHit {
                                lives_remaining: scoreboard.lives,
                            });
                        }
                    }
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
