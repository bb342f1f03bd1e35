//! Provides logging functionality.

mod progress;

pub use progress::Progress;

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// The global logger.
pub static LOGGER: OnceCell<Logger> = OnceCell::new();

/// The core logger, encapsulating logging configuration and implementing methods for logging.
#[derive(Debug)]
pub struct Logger {
    /// The level of logging to perform.
    pub level: LogLevel,
    /// Whether the logger is enabled.
    pub enabled: AtomicBool,
    /// Whether the logger has logged anything.
    pub has_logged: AtomicBool,
}

/// The log level, which determines the verbosity of logging.
#[derive(Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Normal logging.
    Normal,
    /// Verbose logging.
    Verbose,
}

impl Logger {
    /// Creates a new logger at the given log level.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            enabled: AtomicBool::new(true),
            has_logged: AtomicBool::new(false),
        }
    }

    /// Registers the logger as the global logger.
    ///
    /// Only the first registration takes effect.
    pub fn register(self) {
        LOGGER.set(self).ok();
    }

    /// Returns `true` if the logger has logged anything.
    pub fn has_logged(&self) -> bool {
        self.has_logged.load(Ordering::SeqCst)
    }

    /// Returns `true` if messages at the given level should be printed.
    pub fn accepts(&self, level: LogLevel) -> bool {
        if !self.enabled.load(Ordering::Relaxed) {
            return false;
        }

        match level {
            LogLevel::Quiet => true,
            LogLevel::Normal => self.level != LogLevel::Quiet,
            LogLevel::Verbose => self.level == LogLevel::Verbose,
        }
    }
}

/// Logs a message.
///
/// The first argument is the verb, which appears in green text.
/// The rest of the arguments are the same as in the `format!` macro.
#[macro_export]
macro_rules! log {
    ($verb:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logger::LogLevel::Normal, $verb, $($arg)*)
    };
}

/// Logs a message only when verbose logging is enabled.
#[macro_export]
macro_rules! detail {
    ($verb:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logger::LogLevel::Verbose, $verb, $($arg)*)
    };
}

/// Logs a message at the given level.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verb:expr, $($arg:tt)*) => {
        if let Some(logger) = $crate::logger::LOGGER.get() {
            if logger.accepts($level) {
                use ::termcolor::*;
                use std::io::Write;

                let writer = BufferWriter::stderr(ColorChoice::Auto);
                let mut buffer = writer.buffer();

                buffer
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_intense(true))
                    .ok();
                write!(buffer, "{:>12} ", $verb).ok();
                buffer.reset().ok();

                writeln!(buffer, $($arg)*).ok();

                writer.print(&buffer).ok();

                logger.has_logged.store(true, ::std::sync::atomic::Ordering::SeqCst);
            }
        }
    };
}
