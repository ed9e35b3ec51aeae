//! Per-frame simulation update
//!
//! Advances the match by exactly one frame. Velocities are pixels per
//! frame, so the caller must hold the capped frame rate rather than pass
//! a delta time.

use glam::Vec2;
use rand::Rng;

use super::collision::{circle_overlaps_rect, circle_overlaps_segment};
use super::state::GameState;
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pause toggle fired this frame
    pub pause: bool,
    /// Move-up key held
    pub up: bool,
    /// Move-down key held
    pub down: bool,
    /// Confirm/restart fired this frame
    pub confirm: bool,
}

/// Advance the game state by one frame.
///
/// Order per frame: pause toggle, ball integration, top/bottom wall
/// reflection, goal checks, paddle reflection, player control, AI control.
/// A goal resets the round and ends the frame early so no later check
/// runs against the just-served ball.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) {
    if state.game_over {
        if input.confirm {
            state.restart(rng);
            state.game_over = false;
        }
        return;
    }

    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return;
    }

    state.ball.pos += state.ball.vel;

    let top_left = Vec2::ZERO;
    let top_right = Vec2::new(SCREEN_WIDTH, 0.0);
    let bottom_left = Vec2::new(0.0, SCREEN_HEIGHT);
    let bottom_right = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    // Top and bottom edges reflect. The checks are independent; a frame in
    // a corner can compose both flips.
    if circle_overlaps_segment(state.ball.pos, CIRCLE_RADIUS, top_left, top_right) {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if circle_overlaps_segment(state.ball.pos, CIRCLE_RADIUS, bottom_left, bottom_right) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Side edges are goals
    if circle_overlaps_segment(state.ball.pos, CIRCLE_RADIUS, top_left, bottom_left) {
        state.ai_score += 1;
        log::debug!("ai goal ({} - {})", state.player_score, state.ai_score);
        state.reset_round(rng);
        return;
    }
    if circle_overlaps_segment(state.ball.pos, CIRCLE_RADIUS, top_right, bottom_right) {
        state.player_score += 1;
        log::debug!("player goal ({} - {})", state.player_score, state.ai_score);
        state.reset_round(rng);
        return;
    }

    // Flat reflection off either paddle: horizontal sign flip only, no
    // de-penetration, no angle shaping from the hit position.
    for paddle in &state.paddles {
        if circle_overlaps_rect(state.ball.pos, CIRCLE_RADIUS, &paddle.rect()) {
            state.ball.vel.x = -state.ball.vel.x;
        }
    }

    update_player_paddle(state, input);
    update_ai_paddle(state);
}

/// Direct keyboard control; both keys held cancel out. No bounds clamp,
/// so a held key can drive the paddle off-screen.
fn update_player_paddle(state: &mut GameState, input: &TickInput) {
    if input.up {
        state.paddles[PLAYER].pos.y -= PADDLE_SPEED;
    }
    if input.down {
        state.paddles[PLAYER].pos.y += PADDLE_SPEED;
    }
}

/// Track-the-ball steering: aim the paddle center at the ball's height.
/// An exactly-centered ball leaves last frame's velocity in place.
fn update_ai_paddle(state: &mut GameState) {
    let center = state.paddles[AI].rect().center();

    if state.ball.pos.y > center.y {
        state.paddles[AI].vel.y = PADDLE_SPEED;
    }
    if state.ball.pos.y < center.y {
        state.paddles[AI].vel.y = -PADDLE_SPEED;
    }

    state.paddles[AI].pos.y += state.paddles[AI].vel.y;
}
