//! Classic Pong - player vs. reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle control, scoring)
//! - `render`: Stateless draw of the game state onto a backend-agnostic canvas
//! - `app`: Fixed-rate frame loop driving update and draw
//! - `settings`: Runtime preferences loaded from disk

pub mod app;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (pixels), fixed for the session
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Window/terminal title
    pub const WINDOW_TITLE: &str = "PONG!";

    /// Frame rate cap. Velocities are expressed in pixels per frame at
    /// this rate, so the loop must hold it rather than scale by delta time.
    pub const TARGET_FPS: u32 = 120;

    /// Paddle height; paddle width is `PADDLE_SIZE / 4`
    pub const PADDLE_SIZE: f32 = 250.0;
    /// Ball radius
    pub const CIRCLE_RADIUS: f32 = 25.0;
    /// Paddle movement per frame, player and AI alike
    pub const PADDLE_SPEED: f32 = 1.0;

    /// Serve velocity sample range per axis, inclusive. Zero is a legal
    /// draw, so a stationary serve can happen.
    pub const SERVE_SPEED_MIN: i32 = -8;
    pub const SERVE_SPEED_MAX: i32 = 8;

    /// Paddle indices: left/human and right/computer
    pub const PLAYER: usize = 0;
    pub const AI: usize = 1;
}
