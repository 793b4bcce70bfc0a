//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! The renderer owns the output sink; the game core never sees it. The first
//! frame (and any frame after a resize or [`TerminalRenderer::invalidate`]) is
//! a full redraw, later frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything [`TerminalRenderer::enter`] did.
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

    /// Force the next draw to be a full redraw (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one when possible.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out` as terminal commands.
///
/// With no usable previous frame this clears the screen and writes every
/// cell; otherwise only changed runs are written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        for (start, len) in changed_runs(prev, next, y) {
            out.queue(cursor::MoveTo(start, y))?;
            for x in start..start + len {
                let cell = next.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    apply_style_into(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// `(start, len)` runs of cells on row `y` that differ from `prev`.
///
/// Without a previous frame the whole row is one run.
fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer, y: u16) -> Vec<(u16, u16)> {
    let w = next.width();
    let Some(prev) = prev else {
        return if w > 0 { vec![(0, w)] } else { Vec::new() };
    };

    let mut runs = Vec::new();
    let mut run_start: Option<u16> = None;
    for x in 0..w {
        let dirty = prev.get(x, y) != next.get(x, y);
        match (dirty, run_start) {
            (true, None) => run_start = Some(x),
            (false, Some(s)) => {
                runs.push((s, x - s));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = run_start {
        runs.push((s, w - s));
    }
    runs
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
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
    use crate::fb::CellStyle;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in 1..=2 {
            b.put_char(x, 0, 'X', CellStyle::default());
        }
        b.put_char(5, 0, 'Y', CellStyle::default());

        assert_eq!(changed_runs(Some(&a), &b, 0), vec![(1, 2), (5, 1)]);
        assert_eq!(changed_runs(None, &b, 0), vec![(0, 6)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());

        let mut out = Vec::new();
        encode_frame(Some(&fb.clone()), &fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("abc"));
    }

    #[test]
    fn draw_writes_to_injected_sink() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "2048", CellStyle::default());

        renderer.draw(&fb).unwrap();
        let first = renderer.writer().len();
        assert!(String::from_utf8_lossy(renderer.writer()).contains("2048"));

        // Same frame again: only style resets are written.
        renderer.draw(&fb).unwrap();
        let second = renderer.writer().len() - first;
        assert!(second < first);
    }
}
