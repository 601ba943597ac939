//! Input mapping
//!
//! Collects winit input between ticks into a [`TickInput`].

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Pending input for the next tick
#[derive(Debug, Default)]
pub struct InputState {
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to logical x within the window
    pub fn pointer_moved(&mut self, x: f64) {
        self.pending.pointer_x = Some(x.round() as i32);
    }

    pub fn mouse_pressed(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.pending.launch = true;
        }
    }

    pub fn key_pressed(&mut self, code: KeyCode) {
        match code {
            KeyCode::Escape => self.pending.quit = true,
            KeyCode::Space | KeyCode::Enter => self.pending.launch = true,
            _ => {}
        }
    }

    pub fn close_requested(&mut self) {
        self.pending.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.pending.quit
    }

    pub fn current(&self) -> &TickInput {
        &self.pending
    }

    /// Clear per-tick input after it has been consumed. Quit is sticky.
    pub fn clear_one_shots(&mut self) {
        self.pending.pointer_x = None;
        self.pending.launch = false;
    }
}
