//! Game state and core simulation types
//!
//! The whole match lives in one `GameState` value owned by the frame loop
//! and mutated in place each frame. No ambient globals.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::*;

/// The ball: a circle of radius `CIRCLE_RADIUS`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A paddle: a `PADDLE_SIZE / 4` by `PADDLE_SIZE` rectangle anchored at `pos`
///
/// The player paddle (`PLAYER`) is moved directly from input and its `vel`
/// stays zero; the AI paddle (`AI`) steers through `vel`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paddle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    /// Bounding rectangle used for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PADDLE_SIZE / 4.0, PADDLE_SIZE))
    }
}

/// Complete state of one match
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    /// Index `PLAYER` = left/human, `AI` = right/computer
    pub paddles: [Paddle; 2],
    pub player_score: u32,
    pub ai_score: u32,
    /// Freezes all motion, collision, scoring, and paddle control
    pub paused: bool,
    /// Never set by the current rules; kept for the restart path
    pub game_over: bool,
}

impl GameState {
    /// Fresh match: zeroed scores and a served ball
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            paddles: [Paddle::default(); 2],
            player_score: 0,
            ai_score: 0,
            paused: false,
            game_over: false,
        };
        state.reset_round(rng);
        state
    }

    /// Re-center both paddles and serve the ball from screen center.
    ///
    /// Each serve velocity axis is an independent integer draw from
    /// `[SERVE_SPEED_MIN, SERVE_SPEED_MAX]`; a (0, 0) serve parks the ball
    /// until the next goal or restart. Runs at match start and after every
    /// goal; scores are untouched.
    pub fn reset_round(&mut self, rng: &mut impl Rng) {
        let slot_y = SCREEN_HEIGHT / 2.0 - PADDLE_SIZE / 2.0;
        self.paddles[PLAYER] = Paddle {
            pos: Vec2::new(50.0, slot_y),
            vel: Vec2::ZERO,
        };
        self.paddles[AI] = Paddle {
            pos: Vec2::new(SCREEN_WIDTH - 100.0, slot_y),
            vel: Vec2::ZERO,
        };

        self.ball = Ball {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::new(
                rng.random_range(SERVE_SPEED_MIN..=SERVE_SPEED_MAX) as f32,
                rng.random_range(SERVE_SPEED_MIN..=SERVE_SPEED_MAX) as f32,
            ),
        };
    }

    /// Full restart: round reset plus zeroed scores
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.reset_round(rng);
        self.player_score = 0;
        self.ai_score = 0;
    }
}
