/// Line-oriented terminal output with optional colors
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl TerminalContext<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print a line
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.color {
            self.out.queue(SetForegroundColor(color.into()))?;
            write!(self.out, "{}", text)?;
            self.out.queue(ResetColor)?;
            Ok(())
        } else {
            write!(self.out, "{}", text)
        }
    }

    /// Print a colored line
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.print_colored(text, color)?;
        writeln!(self.out)
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print text without newline, used for prompts
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Flush all output at once. Prompts need this before blocking on input.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Blue => Color::Blue,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Magenta => Color::Magenta,
        }
    }
}
