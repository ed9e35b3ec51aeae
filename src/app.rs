//! Fixed-rate frame loop
//!
//! One thread polls input, ticks the simulation once, presents the frame,
//! then sleeps out the remainder of the frame budget. The loop exits as
//! soon as the frontend reports a close request; there is no in-flight
//! work to unwind.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::sim::{GameState, TickInput, tick};

/// One frame's worth of input from the frontend
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub tick: TickInput,
    /// Window close / quit requested
    pub close: bool,
}

/// Rendering and input collaborator driven by the frame loop
pub trait Frontend {
    /// Snapshot this frame's input state
    fn poll_input(&mut self) -> io::Result<FrameInput>;
    /// Draw the current state
    fn present(&mut self, state: &GameState) -> io::Result<()>;
}

/// Run the game until the frontend reports a close request.
///
/// `target_fps` caps the frame rate; the simulation expects to run exactly
/// once per frame at that rate.
pub fn run(
    frontend: &mut impl Frontend,
    state: &mut GameState,
    rng: &mut impl Rng,
    target_fps: u32,
) -> io::Result<()> {
    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));

    loop {
        let frame_start = Instant::now();

        let input = frontend.poll_input()?;
        if input.close {
            break;
        }

        let scores = (state.player_score, state.ai_score);
        tick(state, &input.tick, rng);
        if (state.player_score, state.ai_score) != scores {
            log::info!("score: player {} / ai {}", state.player_score, state.ai_score);
        }

        frontend.present(state)?;

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    Ok(())
}
