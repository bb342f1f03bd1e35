use crate::fs;

use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use std::fmt::{Debug, Display};
use std::io::Write;
use std::path::PathBuf;

pub trait SiteForgeError {
    fn display(&self, buf: &mut Buffer);

    fn print(&self) {
        let writer = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = writer.buffer();

        buffer
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_intense(true))
            .ok();
        write!(buffer, "error: ").ok();
        buffer.reset().ok();

        self.display(&mut buffer);
        writer.print(&buffer).ok();
    }
}

/// Encapsulates an error and the location in the manifest at which it occurred.
#[derive(Clone, Debug)]
pub struct TracebackError<T: Clone + Debug> {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
    pub kind: T,
}

impl<T: Clone + Debug + SiteForgeError> SiteForgeError for TracebackError<T> {
    fn display(&self, buf: &mut Buffer) {
        self.kind.display(buf);
        writeln!(
            buf,
            "  at {}:{}:{}",
            self.path.display(),
            self.line,
            self.column
        )
        .ok();
    }
}

impl SiteForgeError for fs::Error {
    fn display(&self, buf: &mut Buffer) {
        match self {
            fs::Error::NotFound(s) => format!("not found: {}", s).display(buf),
            fs::Error::Read => "could not read from filesystem".display(buf),
            fs::Error::Write => "could not write to filesystem".display(buf),
        }
    }
}

impl<T: Display> SiteForgeError for T {
    fn display(&self, buf: &mut Buffer) {
        writeln!(buf, "{}", self).ok();
    }
}

impl<T: SiteForgeError + 'static> From<T> for Box<dyn SiteForgeError> {
    fn from(t: T) -> Self {
        Box::new(t)
    }
}
