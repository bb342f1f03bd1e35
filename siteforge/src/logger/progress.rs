use crate::logger::{LogLevel, LOGGER};

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// A progress bar, advanced by iterating over it.
pub struct Progress {
    name: String,
    total: usize,
    current: usize,
}

impl Progress {
    pub fn new(name: impl AsRef<str>, total: usize) -> Self {
        Self {
            name: name.as_ref().to_string(),
            total,
            current: 0,
        }
    }

    fn visible(&self) -> bool {
        LOGGER
            .get()
            .map(|logger| logger.accepts(LogLevel::Normal))
            .unwrap_or(false)
    }

    pub fn print(&self) {
        if !self.visible() {
            return;
        }

        let writer = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = writer.buffer();

        buffer
            .set_color(
                ColorSpec::new()
                    .set_fg(Some(Color::Green))
                    .set_intense(true),
            )
            .ok();
        write!(buffer, "\r{:>12} ", self.name).ok();
        buffer.reset().ok();

        let scaled_length = ((self.current as f64 / self.total as f64) * 50.0).ceil() as usize;

        write!(
            buffer,
            "[{:<50}] {}/{}",
            "=".repeat(scaled_length),
            self.current,
            self.total
        )
        .ok();

        if self.current == self.total {
            writeln!(buffer).ok();
        }

        writer.print(&buffer).ok();
    }
}

impl Iterator for Progress {
    type Item = ();

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.total {
            return None;
        }

        self.current += 1;
        self.print();

        Some(())
    }
}
