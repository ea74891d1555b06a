//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is diffed against the one before it and only runs of changed
//! cells are emitted. A size change (or [`TerminalRenderer::invalidate`])
//! falls back to repainting every row.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Owns stdout while the game runs in the alternate screen.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a repaint.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        queue_reset(&mut self.out)?;
        self.out
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Repaint everything on the next draw, e.g. after a resize event.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown frame in its place.
    ///
    /// The caller redraws into the returned buffer next frame, so two
    /// framebuffers ping-pong without per-frame allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut spare = match self.shown.take() {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(&shown, fb, &mut self.out)?;
                shown
            }
            stale => {
                debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.out)?;
                let mut spare = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.flush()?;

        std::mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.out)
            .context("failed to write frame to terminal")?;
        self.stdout.flush().context("failed to flush terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes horizontal runs of cells, emitting style changes only when needed.
struct RunWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> RunWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in (x..x + len).filter_map(|cx| fb.get(cx, y)) {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue_reset(self.out)
    }
}

/// Clear the screen and paint every row of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = RunWriter::new(out);
    for y in 0..fb.height() {
        writer.run(fb, 0, y, fb.width())?;
    }
    writer.finish()
}

/// Paint only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut writer = RunWriter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        writer.run(next, x, y, len)?;
    }
    writer.finish()
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?
        .queue(SetBackgroundColor(rgb_to_color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn queue_reset(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of cells that differ. Mismatched sizes yield whole rows.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start: Option<u16> = None;
        for x in 0..=w {
            let differs = x < w && prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}
