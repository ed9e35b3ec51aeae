//! Pong entry point
//!
//! Initializes logging, loads settings, seeds the RNG, and hands control
//! to the fixed-rate frame loop with the terminal frontend.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use pong::app;
use pong::render::term::TermFrontend;
use pong::settings::Settings;
use pong::sim::GameState;

const SETTINGS_PATH: &str = "pong_settings.json";

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load(SETTINGS_PATH);
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("starting (seed {seed}, {} fps cap)", settings.target_fps);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(&mut rng);
    let mut frontend = TermFrontend::new()?;

    app::run(&mut frontend, &mut state, &mut rng, settings.target_fps)
}
