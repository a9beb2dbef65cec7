use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};

use saucer_app::game_loop::spawn_game_loop;
use saucer_app::state::{LoopCommand, SharedSnapshot};
use saucer_sim::SimConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SimConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    info!(
        "field {}x{}, {} cows, seed {}",
        config.world.width, config.world.height, config.world.target_cows, config.seed
    );

    let latest = SharedSnapshot::default();
    let (tx, game_loop) =
        spawn_game_loop(config, latest.clone()).context("spawning game loop thread")?;

    info!("keys: left, right, up, down, space toggles the beam, empty line for status, quit");
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.is_empty() {
            report(&latest);
            continue;
        }
        let Some(command) = LoopCommand::from_line(&line) else {
            warn!("unbound key {line:?}");
            continue;
        };
        let shutdown = matches!(command, LoopCommand::Shutdown);
        if tx.send(command).is_err() || shutdown {
            break;
        }
    }

    // Disconnect stops the loop too.
    let _ = tx.send(LoopCommand::Shutdown);
    game_loop
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    report(&latest);
    Ok(())
}

fn report(latest: &SharedSnapshot) {
    let Ok(lock) = latest.lock() else {
        return;
    };
    if let Some(snap) = lock.as_ref() {
        info!(
            "tick {} saucer ({:.0}, {:.0}) beam {} cows {} abducted {}",
            snap.time.tick,
            snap.saucer.position.x,
            snap.saucer.position.y,
            if snap.saucer.beam_active { "on" } else { "off" },
            snap.live_cows,
            snap.abducted_total
        );
    }
}
