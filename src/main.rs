//! Star Catcher headless runner
//!
//! Loads a session config (first argument, JSON) and lets the autopilot play
//! through a fixed-timestep loop. Prints the final snapshot as JSON.

use star_catcher::autopilot;
use star_catcher::consts::*;
use star_catcher::sim::{GameSession, SessionSnapshot, tick};
use star_catcher::SessionConfig;

/// Simulated wall-clock frame length (a 30 Hz host)
const FRAME_DT: f32 = 1.0 / 30.0;
/// Give up after this many host frames
const MAX_FRAMES: u32 = 30 * 120;

/// Session plus the fixed-step accumulator driving it
struct Game {
    session: GameSession,
    accumulator: f32,
    last: Option<SessionSnapshot>,
}

impl Game {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            accumulator: 0.0,
            last: None,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot::drive(&self.session);
            let snapshot = tick(&mut self.session, &input, SIM_DT);
            for event in &snapshot.events {
                log::debug!("tick {}: {:?}", snapshot.tick, event);
            }
            self.last = Some(snapshot);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path),
        None => SessionConfig::default(),
    };

    let session = match GameSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(2);
        }
    };

    log::info!("Star Catcher (headless) starting...");
    let mut game = Game::new(session);
    let mut frames = 0;
    while frames < MAX_FRAMES && !game.session.is_finished() {
        game.update(FRAME_DT);
        frames += 1;
    }

    let snapshot = game
        .last
        .take()
        .unwrap_or_else(|| SessionSnapshot::capture(&game.session, Vec::new()));
    log::info!(
        "Finished after {} ticks: {} ({}/{} pickups, {})",
        snapshot.tick,
        snapshot.outcome.as_str(),
        snapshot.collected,
        snapshot.total_pickups,
        snapshot.score_label()
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
