//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is compared row by row with the previous one; only the span
//! between the first and last changed glyph of a dirty row is redrawn.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disabling raw mode")
    }

    /// Force the next draw to be a full redraw (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, redrawing only what changed since the previous call.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &mut self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_rows_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .context("writing to terminal")
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_glyphs(out, fb.row(y), &mut pen)?;
    }
    reset_into(out)
}

/// Encode the changed span of each dirty row into `out`.
///
/// Both frames must have the same dimensions.
pub fn encode_rows_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    let mut wrote = false;
    for y in 0..next.height() {
        let row = next.row(y);
        if let Some((start, end)) = dirty_span(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            write_glyphs(out, &row[start..end], &mut pen)?;
            wrote = true;
        }
    }
    if wrote {
        reset_into(out)?;
    }
    Ok(())
}

/// Half-open range from the first to the last differing glyph.
pub fn dirty_span(prev: &[Glyph], next: &[Glyph]) -> Option<(usize, usize)> {
    if prev.len() != next.len() {
        return (!next.is_empty()).then_some((0, next.len()));
    }
    let first = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let last = prev.iter().zip(next).rposition(|(a, b)| a != b)?;
    Some((first, last + 1))
}

fn write_glyphs(out: &mut Vec<u8>, glyphs: &[Glyph], pen: &mut Option<CellStyle>) -> Result<()> {
    for g in glyphs {
        if *pen != Some(g.style) {
            apply_style_into(out, g.style)?;
            *pen = Some(g.style);
        }
        out.queue(Print(g.ch))?;
    }
    Ok(())
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
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
