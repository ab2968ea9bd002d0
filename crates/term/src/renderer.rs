//! TerminalRenderer: writes a framebuffer and narration to a terminal.
//!
//! The game is line-oriented, so there is no raw mode or alternate screen.
//! In colour mode each board draw clears the screen first; plain mode writes
//! bare text with no escape sequences at all.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::Event;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::narrate::describe;

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Draw the whole framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.color {
            encode_full_into(fb, &mut self.buf)?;
        } else {
            encode_plain_into(fb, &mut self.buf);
        }
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Print one line per event.
    pub fn narrate(&mut self, events: &[Event]) -> Result<()> {
        self.buf.clear();
        for event in events {
            self.buf.extend_from_slice(describe(event).as_bytes());
            self.buf.push(b'\n');
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-screen redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode the framebuffer as bare text, one line per row.
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut Vec<u8>) {
    out.extend_from_slice(fb.to_text().as_bytes());
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(rgb) => out.queue(SetForegroundColor(rgb_to_color(rgb)))?,
        None => out.queue(ResetColor)?,
    };
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
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
    use crate::fb::Cell;
    use crate::types::PersonKind;

    fn small() -> FrameBuffer {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::fg(Rgb::new(1, 2, 3));
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let mut r = TerminalRenderer::new(Vec::new(), false);
        r.draw(&small()).unwrap();
        assert_eq!(String::from_utf8(r.writer().clone()).unwrap(), "AB\nC\n");
    }

    #[test]
    fn colour_output_clears_and_styles() {
        let mut buf = Vec::new();
        encode_full_into(&small(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('\u{1b}'));
        assert!(text.contains("AB\r\nC"));
        assert_eq!(rgb_to_color(Rgb::new(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn narration_is_one_line_per_event() {
        let mut r = TerminalRenderer::new(Vec::new(), false);
        let player = PersonKind::Peacock;
        r.narrate(&[
            Event::TurnEnded { player },
            Event::CannotRefute { player },
        ])
        .unwrap();
        let out = String::from_utf8(r.writer().clone()).unwrap();
        assert_eq!(
            out,
            "Mrs. Peacock's turn is over.\nMrs. Peacock cannot dispute it.\n"
        );
    }
}
