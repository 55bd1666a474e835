//! Game loop thread: runs the engine at a fixed rate and publishes
//! snapshots.
//!
//! The engine lives entirely inside the thread; the outside world talks
//! to it through channels. Commands come in on an `mpsc` channel, and
//! every tick's snapshot goes out on another channel and into the shared
//! latest-snapshot cell for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use starfall_core::constants::TICK_RATE;
use starfall_core::state::GameSnapshot;
use starfall_sim::engine::{GameConfig, GameEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the snapshot receiver. The loop runs
/// until it receives `Shutdown` or the command sender is dropped.
pub fn spawn_game_loop(
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, mpsc::Receiver<GameSnapshot>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<GameSnapshot>();

    std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, snap_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, snap_rx)
}

/// The game loop. Runs until shutdown or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    log::info!("game loop starting at {TICK_RATE}Hz");
    let mut engine = GameEngine::new(GameConfig::default());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => {
                    engine.queue_command(command);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::warn!("command channel disconnected, stopping game loop");
                    return;
                }
            }
        }

        // 2. Advance one tick (the engine gates non-running phases internally)
        let snapshot = engine.tick();

        // 3. Push the snapshot to consumers (a gone consumer is not an error)
        let _ = snap_tx.send(snapshot.clone());

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick deadline
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset the deadline instead of spiraling
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::commands::PlayerCommand;
    use starfall_core::enums::GamePhase;

    #[test]
    fn test_tick_duration() {
        // 60Hz is about 16.67ms per tick
        assert_eq!(TICK_DURATION.as_millis(), 16);
        assert!(TICK_DURATION.as_micros() > 16_000);
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(rx.recv().unwrap(), GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        // The loop serializes nothing itself, but consumers do every
        // tick; keep one full snapshot comfortably under a tick.
        let mut engine = GameEngine::new(GameConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        let mut snapshot = engine.tick();
        for _ in 0..100 {
            snapshot = engine.tick();
        }

        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(!json.is_empty());
        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}",
            elapsed
        );
    }

    #[test]
    fn test_loop_reaches_running_and_shuts_down() {
        let latest: Arc<Mutex<Option<GameSnapshot>>> = Arc::new(Mutex::new(None));
        let (cmd_tx, snap_rx) = spawn_game_loop(latest.clone());

        let first = snap_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("Loop should publish snapshots");
        assert_eq!(first.phase, GamePhase::Idle);

        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let mut running = false;
        for _ in 0..300 {
            let snap = snap_rx
                .recv_timeout(Duration::from_secs(2))
                .expect("Loop should keep publishing");
            if snap.phase == GamePhase::Running {
                running = true;
                break;
            }
        }
        assert!(running, "Loop should reach Running after StartGame");
        assert!(
            latest.lock().unwrap().is_some(),
            "Latest snapshot cell should be filled"
        );

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
