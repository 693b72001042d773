//! TerminalRenderer: flushes a surface to a real terminal.
//!
//! The panel repaints all 512 LEDs every refresh tick anyway, so the renderer
//! keeps to full redraws instead of diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::surface::{Rgb, Surface, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a surface as a full redraw.
    pub fn draw(&mut self, surface: &Surface) -> Result<()> {
        self.buf.clear();
        encode_full_into(surface, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Escape sequences are emitted per tone run, not per cell: the palette is
/// applied only when the tone changes along the scan.
pub fn encode_full_into(surface: &Surface, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Tone> = None;
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let cell = surface.get(x, y).unwrap_or_default();
            if current != Some(cell.tone) {
                apply_tone_into(out, cell.tone)?;
                current = Some(cell.tone);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < surface.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    let (fg, bg, bold) = tone.palette();
    out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // We can't validate terminal I/O in unit tests, but encoding into a byte
    // buffer exercises the whole command pipeline.
    #[test]
    fn test_encode_full_emits_every_cell() {
        let mut surface = Surface::new(3, 2);
        surface.put(0, 0, 'A', Tone::Value);
        surface.put(2, 1, 'Z', Tone::Value);

        let mut out = Vec::new();
        encode_full_into(&surface, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('Z'));
        assert!(text.contains("\r\n"));
    }

    #[test]
    fn test_tone_runs_do_not_repeat_escapes() {
        let surface = Surface::new(8, 1);
        let mut out = Vec::new();
        encode_full_into(&surface, &mut out).unwrap();

        // One uniform blank row should set the foreground color exactly once.
        let text = String::from_utf8_lossy(&out);
        let sets = text.matches("38;2;220;220;220").count();
        assert_eq!(sets, 1);
    }
}
