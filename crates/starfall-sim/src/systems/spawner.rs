//! Enemy spawning on a self-rescheduling timer.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::{SPAWN_DELAY_MAX_TICKS, SPAWN_DELAY_MIN_TICKS};
use starfall_core::types::Playfield;

/// Cancelable schedule for the next enemy spawn.
///
/// `None` means no spawn is pending: either no session is running or
/// the session has ended. A canceled schedule stays quiet until
/// `start` arms it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnSchedule {
    next_spawn_tick: Option<u64>,
}

impl SpawnSchedule {
    /// Arm the schedule: the next spawn is due at `tick`.
    pub fn start(&mut self, tick: u64) {
        self.next_spawn_tick = Some(tick);
    }

    /// Cancel any pending spawn.
    pub fn cancel(&mut self) {
        self.next_spawn_tick = None;
    }

    /// Whether a spawn is pending.
    pub fn is_armed(&self) -> bool {
        self.next_spawn_tick.is_some()
    }
}

/// Spawn an enemy if one is due, then reschedule after a random delay.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    next_id: &mut u32,
    field: Playfield,
    arm_fire: bool,
    current_tick: u64,
) {
    let due_tick = match schedule.next_spawn_tick {
        Some(tick) => tick,
        None => return,
    };
    if current_tick < due_tick {
        return;
    }

    crate::world_setup::spawn_enemy(world, rng, next_id, field, arm_fire, current_tick);

    let delay = rng.gen_range(SPAWN_DELAY_MIN_TICKS..=SPAWN_DELAY_MAX_TICKS);
    schedule.next_spawn_tick = Some(current_tick + delay);
}
