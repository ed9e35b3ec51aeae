//! Draw-call layer
//!
//! `draw` is a stateless read of `GameState` into canvas primitives, run
//! once per frame after the simulation update. The canvas itself is a
//! backend concern (see `term`); nothing here mutates game state.

pub mod term;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(245, 245, 245);
    pub const GRAY: Color = Color::rgb(130, 130, 130);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Drawing surface the frame is rendered onto
///
/// Coordinates are playfield pixels (`SCREEN_WIDTH` x `SCREEN_HEIGHT`);
/// the backend owns any mapping to its real resolution.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color);
    /// Rendered width of `text` at `font_size`, for centering
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Margin for the score readouts
const SCORE_MARGIN: f32 = 25.0;
const SCORE_FONT: f32 = 28.0;
const PAUSE_FONT: f32 = 40.0;
const RESTART_FONT: f32 = 20.0;

const PAUSE_BANNER: &str = "GAME PAUSED";
const RESTART_PROMPT: &str = "PRESS [ENTER] TO PLAY AGAIN";

/// Render one frame of `state` onto `canvas`
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(Color::BLACK);

    if state.game_over {
        let x = SCREEN_WIDTH / 2.0 - canvas.text_width(RESTART_PROMPT, RESTART_FONT) / 2.0;
        canvas.draw_text(
            RESTART_PROMPT,
            Vec2::new(x, SCREEN_HEIGHT / 2.0 - 50.0),
            RESTART_FONT,
            Color::GRAY,
        );
        return;
    }

    for paddle in &state.paddles {
        let rect = paddle.rect();
        canvas.fill_rect(rect.pos, rect.size, Color::WHITE);
    }
    canvas.fill_circle(state.ball.pos, CIRCLE_RADIUS, Color::WHITE);

    canvas.draw_text(
        &state.player_score.to_string(),
        Vec2::new(SCORE_MARGIN, SCORE_MARGIN),
        SCORE_FONT,
        Color::GRAY,
    );
    canvas.draw_text(
        &state.ai_score.to_string(),
        Vec2::new(SCREEN_WIDTH - SCORE_MARGIN, SCORE_MARGIN),
        SCORE_FONT,
        Color::GRAY,
    );

    if state.paused {
        let x = SCREEN_WIDTH / 2.0 - canvas.text_width(PAUSE_BANNER, PAUSE_FONT) / 2.0;
        canvas.draw_text(
            PAUSE_BANNER,
            Vec2::new(x, SCREEN_HEIGHT / 2.0 - PAUSE_FONT),
            PAUSE_FONT,
            Color::GRAY,
        );
    }
}
