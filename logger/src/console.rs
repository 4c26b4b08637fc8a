use std::io::stdout;

use crossterm::{
    execute,
    style::{Color, Print, SetForegroundColor},
};

/// Console capability the sink writes through.
///
/// The foreground color is process-wide terminal state. Nothing restores it
/// after a call, so the last color set stays in effect until the next one.
pub trait Console {
    fn set_foreground_color(&mut self, color: Color);
    fn write_line(&mut self, text: &str);
}

/// [`Console`] backed by the real terminal via crossterm.
#[derive(Default)]
pub struct Term {}

impl Term {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Console for Term {
    fn set_foreground_color(&mut self, color: Color) {
        let _ = execute!(stdout(), SetForegroundColor(color));
    }

    fn write_line(&mut self, text: &str) {
        let _ = execute!(stdout(), Print(text), Print("\n"));
    }
}
