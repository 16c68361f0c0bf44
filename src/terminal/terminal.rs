use crate::terminal::input_event::map_key_event;
use crate::terminal::terminal_event::TerminalEvent;
use crate::ui::span::SpanLine;
use crate::ui::style::{Color, Style};
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

/// Thin crossterm wrapper: raw mode plus inline block repaint.
///
/// Each frame is a list of styled span lines; the whole block is
/// redrawn in place, so the picker renders below the shell prompt
/// instead of taking over the screen.
pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    drawn_lines: usize,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            drawn_lines: 0,
        })
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, Hide)?;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        execute!(self.stdout, Show)?;
        terminal::disable_raw_mode()
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        return Ok(TerminalEvent::Key(map_key_event(key)));
                    }
                    Ok(TerminalEvent::Tick)
                }
                CrosstermEvent::Resize(width, height) => {
                    self.size = TerminalSize { width, height };
                    Ok(TerminalEvent::Resize(self.size))
                }
                _ => Ok(TerminalEvent::Tick),
            }
        } else {
            Ok(TerminalEvent::Tick)
        }
    }

    pub fn render(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        queue!(self.stdout, MoveToColumn(0))?;
        if self.drawn_lines > 0 {
            queue!(self.stdout, MoveUp(self.drawn_lines as u16))?;
        }
        queue!(self.stdout, Clear(ClearType::FromCursorDown))?;

        for line in lines {
            for span in line {
                self.queue_span(&span.text, span.style)?;
            }
            queue!(self.stdout, Print("\r\n"))?;
        }

        self.stdout.flush()?;
        self.drawn_lines = lines.len();
        Ok(())
    }

    /// Clear the rendered block, leaving the cursor where it started.
    pub fn clear_block(&mut self) -> io::Result<()> {
        self.render(&[])
    }

    fn queue_span(&mut self, text: &str, style: Style) -> io::Result<()> {
        if style.is_plain() {
            queue!(self.stdout, Print(text))?;
            return Ok(());
        }

        if let Some(color) = style.color {
            queue!(self.stdout, SetForegroundColor(map_color(color)))?;
        }
        if let Some(color) = style.background {
            queue!(self.stdout, SetBackgroundColor(map_color(color)))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.stdout, Print(text))?;
        queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::Yellow,
        Color::Blue => CrosstermColor::Blue,
        Color::Magenta => CrosstermColor::Magenta,
        Color::Cyan => CrosstermColor::Cyan,
        Color::White => CrosstermColor::White,
        Color::DarkGrey => CrosstermColor::DarkGrey,
    }
}
