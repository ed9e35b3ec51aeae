//! Terminal canvas and frontend
//!
//! Maps the fixed 1200x720 playfield onto a character grid and blits it
//! with cursor escapes once per frame. Input comes from the non-blocking
//! stdin reader; "held" keys are approximated from terminal auto-repeat,
//! since raw mode delivers repeats rather than key-up events.

use std::io::{self, Stdout, Write, stdout};

use glam::Vec2;
use termion::cursor::HideCursor;
use termion::event::Key;
use termion::input::{Keys, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};
use termion::{AsyncReader, async_stdin, clear, cursor};

use crate::app::{FrameInput, Frontend};
use crate::consts::*;
use crate::render::{Canvas, Color, draw};
use crate::sim::GameState;

/// Character grid dimensions
const COLS: usize = 120;
const ROWS: usize = 36;

/// Playfield pixels per character cell
const CELL_W: f32 = SCREEN_WIDTH / COLS as f32;
const CELL_H: f32 = SCREEN_HEIGHT / ROWS as f32;

/// Frames a key press keeps its "held" state alive. Terminal auto-repeat
/// arrives well below the frame rate, so one key event stands in for
/// roughly this many frames of holding the key down.
const HOLD_FRAMES: u8 = 12;

/// Character-cell canvas addressed in playfield pixel coordinates
pub struct TermCanvas {
    cells: Vec<char>,
}

impl TermCanvas {
    pub fn new() -> Self {
        Self {
            cells: vec![' '; COLS * ROWS],
        }
    }

    fn put(&mut self, col: isize, row: isize, ch: char) {
        if (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
            self.cells[row as usize * COLS + col as usize] = ch;
        }
    }

    fn shade(color: Color) -> char {
        match color {
            Color::BLACK => ' ',
            Color::GRAY => '░',
            _ => '█',
        }
    }

    fn row_text(&self, row: usize) -> String {
        self.cells[row * COLS..(row + 1) * COLS].iter().collect()
    }
}

impl Default for TermCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for TermCanvas {
    fn clear(&mut self, color: Color) {
        let ch = Self::shade(color);
        self.cells.fill(ch);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let ch = Self::shade(color);
        let col0 = (pos.x / CELL_W).floor() as isize;
        let row0 = (pos.y / CELL_H).floor() as isize;
        let col1 = ((pos.x + size.x) / CELL_W).ceil() as isize;
        let row1 = ((pos.y + size.y) / CELL_H).ceil() as isize;
        for row in row0..row1 {
            for col in col0..col1 {
                self.put(col, row, ch);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let ch = Self::shade(color);
        let col0 = ((center.x - radius) / CELL_W).floor() as isize;
        let row0 = ((center.y - radius) / CELL_H).floor() as isize;
        let col1 = ((center.x + radius) / CELL_W).ceil() as isize;
        let row1 = ((center.y + radius) / CELL_H).ceil() as isize;
        for row in row0..=row1 {
            for col in col0..=col1 {
                // Test against the cell's center point in pixel space
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) * CELL_W,
                    (row as f32 + 0.5) * CELL_H,
                );
                if center.distance_squared(cell_center) <= radius * radius {
                    self.put(col, row, ch);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _font_size: f32, _color: Color) {
        let col = (pos.x / CELL_W).floor() as isize;
        let row = (pos.y / CELL_H).floor() as isize;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as isize, row, ch);
        }
    }

    fn text_width(&self, text: &str, _font_size: f32) -> f32 {
        // One cell per character
        text.chars().count() as f32 * CELL_W
    }
}

/// Raw-mode terminal frontend: canvas presentation plus key polling
pub struct TermFrontend {
    out: RawTerminal<HideCursor<Stdout>>,
    keys: Keys<AsyncReader>,
    canvas: TermCanvas,
    up_hold: u8,
    down_hold: u8,
}

impl TermFrontend {
    pub fn new() -> io::Result<Self> {
        let mut out = HideCursor::from(stdout()).into_raw_mode()?;
        // OSC title escape, then a clean screen
        write!(out, "\x1b]0;{WINDOW_TITLE}\x07")?;
        write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;
        out.flush()?;

        Ok(Self {
            out,
            keys: async_stdin().keys(),
            canvas: TermCanvas::new(),
            up_hold: 0,
            down_hold: 0,
        })
    }
}

impl Frontend for TermFrontend {
    fn poll_input(&mut self) -> io::Result<FrameInput> {
        let mut input = FrameInput::default();
        self.up_hold = self.up_hold.saturating_sub(1);
        self.down_hold = self.down_hold.saturating_sub(1);

        while let Some(key) = self.keys.next() {
            let Ok(key) = key else { break };
            match key {
                Key::Up => self.up_hold = HOLD_FRAMES,
                Key::Down => self.down_hold = HOLD_FRAMES,
                Key::Char('p') | Key::Char('P') => input.tick.pause = true,
                Key::Char('\n') => input.tick.confirm = true,
                Key::Char('q') | Key::Esc | Key::Ctrl('c') => input.close = true,
                _ => {}
            }
        }

        input.tick.up = self.up_hold > 0;
        input.tick.down = self.down_hold > 0;
        Ok(input)
    }

    fn present(&mut self, state: &GameState) -> io::Result<()> {
        draw(state, &mut self.canvas);
        for row in 0..ROWS {
            let line = self.canvas.row_text(row);
            write!(self.out, "{}{}", cursor::Goto(1, row as u16 + 1), line)?;
        }
        self.out.flush()
    }
}

impl Drop for TermFrontend {
    fn drop(&mut self) {
        // Raw mode and cursor visibility are restored by the wrapped
        // terminal guards; just leave a clean screen behind.
        let _ = write!(self.out, "{}{}", clear::All, cursor::Goto(1, 1));
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_marks_cells() {
        let mut canvas = TermCanvas::new();
        // One paddle: 62.5 x 250 px at (50, 235) -> cols 5..12, rows 11..25
        canvas.fill_rect(Vec2::new(50.0, 235.0), Vec2::new(62.5, 250.0), Color::WHITE);

        assert_eq!(canvas.cells[12 * COLS + 5], '█');
        assert_eq!(canvas.cells[12 * COLS + 4], ' ');
        assert_eq!(canvas.cells[10 * COLS + 5], ' ');
    }

    #[test]
    fn test_fill_circle_marks_center() {
        let mut canvas = TermCanvas::new();
        canvas.fill_circle(Vec2::new(600.0, 360.0), 25.0, Color::WHITE);

        // Center pixel (600, 360) lives in cell (60, 18)
        assert_eq!(canvas.cells[18 * COLS + 60], '█');
        // Far corner untouched
        assert_eq!(canvas.cells[0], ' ');
    }

    #[test]
    fn test_draw_text_and_width() {
        let mut canvas = TermCanvas::new();
        canvas.draw_text("42", Vec2::new(25.0, 25.0), 28.0, Color::GRAY);

        assert_eq!(canvas.cells[COLS + 2], '4');
        assert_eq!(canvas.cells[COLS + 3], '2');
        assert_eq!(canvas.text_width("42", 28.0), 2.0 * CELL_W);
    }

    #[test]
    fn test_off_screen_draws_are_clipped() {
        let mut canvas = TermCanvas::new();
        canvas.draw_text("X", Vec2::new(-50.0, 25.0), 28.0, Color::GRAY);
        canvas.fill_rect(
            Vec2::new(1190.0, 700.0),
            Vec2::new(100.0, 100.0),
            Color::WHITE,
        );

        // Nothing panicked and in-bounds cells got their share
        assert_eq!(canvas.cells[35 * COLS + 119], '█');
    }

    #[test]
    fn test_clear_resets_grid() {
        let mut canvas = TermCanvas::new();
        canvas.fill_rect(Vec2::ZERO, Vec2::new(1200.0, 720.0), Color::WHITE);
        canvas.clear(Color::BLACK);
        assert!(canvas.cells.iter().all(|&ch| ch == ' '));
    }
}
