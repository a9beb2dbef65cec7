//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel; the latest snapshot is stored in shared
//! state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use saucer_core::constants::TICK_RATE;
use saucer_core::state::SceneSnapshot;
use saucer_sim::{SimConfig, SimulationEngine};

use crate::state::{LoopCommand, SharedSnapshot};
use crate::tally::ShapeTally;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side to use, and the thread
/// handle to join once `Shutdown` has been sent.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("saucer-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            info!("game loop stopped at tick {}", engine.time().tick);
            return;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Once a second, render a frame into the tally
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            let mut tally = ShapeTally::default();
            engine.draw(&mut tally);
            debug!(
                "tick {}: {} cows, {} abducted, {} shapes",
                snapshot.time.tick,
                snapshot.live_cows,
                snapshot.abducted_total,
                tally.total()
            );
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Queue everything waiting on the channel. Returns false when the loop should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<LoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(LoopCommand::Input(cmd)) => engine.queue_command(cmd),
            Ok(LoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saucer_core::commands::InputCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Input(InputCommand::MoveRight)).unwrap();
        tx.send(LoopCommand::Input(InputCommand::ToggleBeam)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Input(InputCommand::MoveRight)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Input(InputCommand::ToggleBeam)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_queues_inputs_and_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Input(InputCommand::MoveUp)).unwrap();
        assert!(drain_commands(&rx, &mut engine));
        let snap = engine.tick();
        assert_eq!(snap.saucer.velocity.y, 5.0);

        tx.send(LoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut engine));

        drop(tx);
        assert!(!drain_commands(&rx, &mut engine));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_stops_when_joined() {
        let shared = SharedSnapshot::default();
        let (tx, handle) = spawn_game_loop(SimConfig::default(), shared.clone()).unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while shared.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        let snap = shared.lock().unwrap().clone().expect("no snapshot published");
        assert!(snap.time.tick >= 1);
        assert_eq!(snap.live_cows, 10);

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        // Nothing writes the snapshot once the thread has been joined.
        let settled = shared.lock().unwrap().clone().unwrap().time.tick;
        std::thread::sleep(TICK_DURATION * 3);
        assert_eq!(shared.lock().unwrap().as_ref().unwrap().time.tick, settled);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
