//! ANSI color palette and painter.

use std::io::{self, Write};

use colored::{Color, Colorize};

/// Semantic label for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress messages ("Checking... URL").
    Info,
    /// Passed checks.
    Success,
    /// Section titles and recoverable errors.
    Warning,
    /// Failed checks.
    Critical,
    /// Separators between targets.
    Data,
    /// Header names.
    Key,
    /// Header values.
    Value,
}

impl Tone {
    /// Terminal color bound to this tone.
    pub fn color(self) -> Color {
        match self {
            Tone::Info => Color::Blue,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Critical => Color::Red,
            Tone::Data => Color::Cyan,
            Tone::Key => Color::Magenta,
            Tone::Value => Color::White,
        }
    }
}

/// Wraps text in color escape codes.
///
/// An enabled painter forces `colored` on, bypassing its terminal and
/// `NO_COLOR` detection; a disabled one never calls into `colored`.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            colored::control::set_override(true);
        }
        Self { enabled }
    }

    /// Return `text` wrapped in the tone's escape codes, or unchanged when disabled.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            text.color(tone.color()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write painted text without a trailing newline.
    pub fn write<W: Write>(&self, out: &mut W, tone: Tone, text: &str) -> io::Result<()> {
        out.write_all(self.paint(tone, text).as_bytes())
    }

    /// Write painted text followed by a newline.
    pub fn writeln<W: Write>(&self, out: &mut W, tone: Tone, text: &str) -> io::Result<()> {
        self.write(out, tone, text)?;
        out.write_all(b"\n")
    }
}
