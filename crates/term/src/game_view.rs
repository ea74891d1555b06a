//! GameView: maps the core's draw commands into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Continuous positions are projected onto a board of `grid * cell size`
//! terminal cells. Positions are rounded to the nearest terminal cell, so with
//! the default 2x1 cells a horizontally sliding segment moves in half-cell steps.

use std::f32::consts::FRAC_PI_2;

use crate::core::{GameConfig, GridGeometry};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DrawCommand, MenuItem, SpriteKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(20, 28, 40);
const FRAME: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const WALL: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150), BG);
const BODY: CellStyle = CellStyle::fg(Rgb::new(90, 200, 110), BG);
const HEAD: CellStyle = CellStyle::fg(Rgb::new(170, 240, 120), BG).bold();
const FOOD: CellStyle = CellStyle::fg(Rgb::new(230, 80, 80), BG).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200), BG);
const TEXT_SELECTED: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255), BG).bold();

/// Board origin (top-left interior terminal cell) for one frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: i32,
    y: i32,
    board_w: u16,
    board_h: u16,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    geometry: GridGeometry,
    settings: Vec<String>,
}

impl GameView {
    pub fn new(config: &GameConfig) -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            geometry: config.geometry(),
            settings: settings_lines(config),
        }
    }

    pub fn with_cell_size(mut self, cell_w: u16, cell_h: u16) -> Self {
        self.cell_w = cell_w.max(1);
        self.cell_h = cell_h.max(1);
        self
    }

    /// Board size in terminal cells, without the outer frame.
    ///
    /// Saturates at `u16::MAX` for grids larger than any terminal.
    pub fn board_size(&self) -> (u16, u16) {
        (
            cells_to_u16(self.geometry.width()).saturating_mul(self.cell_w),
            cells_to_u16(self.geometry.height()).saturating_mul(self.cell_h),
        )
    }

    /// Render a draw list into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, commands: &[DrawCommand], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = self.board_size();
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let layout = Layout {
            x: start_x as i32 + 1,
            y: start_y as i32 + 1,
            board_w,
            board_h,
        };

        fb.fill_rect(layout.x, layout.y, board_w, board_h, ' ', CellStyle::fg(BG, BG));
        draw_frame(fb, start_x as i32, start_y as i32, frame_w, frame_h);

        let mut has_menu = false;
        for cmd in commands {
            match cmd.sprite {
                SpriteKind::Border => self.draw_sprite(fb, layout, cmd, '▓', WALL),
                SpriteKind::Body => self.draw_sprite(fb, layout, cmd, '█', BODY),
                SpriteKind::Food => self.draw_sprite(fb, layout, cmd, '●', FOOD),
                SpriteKind::Head => self.draw_head(fb, layout, cmd),
                SpriteKind::MenuItem(item) => {
                    has_menu = true;
                    self.draw_menu_item(fb, layout, cmd, item);
                }
                SpriteKind::SettingsPanel => self.draw_settings(fb, layout, cmd),
            }
        }

        if has_menu {
            let cx = layout.x + board_w as i32 / 2;
            fb.put_str_centered(cx, layout.y + 2, "S N A K E", TEXT_SELECTED);
            fb.put_str_centered(
                cx,
                layout.y + board_h as i32 - 2,
                "arrows move  enter select  esc quit",
                TEXT.dim(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, commands: &[DrawCommand], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(commands, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the grid square centred at `pos`.
    fn sprite_origin(&self, layout: Layout, pos: (f32, f32)) -> (i32, i32) {
        let (cw, ch) = self.geometry.cell_size();
        let fx = (pos.0 + 1.0) / cw - 0.5;
        let fy = (pos.1 + 1.0) / ch - 0.5;
        let row = (self.geometry.height() as f32 - 1.0 - fy) * self.cell_h as f32;
        (
            layout.x + (fx * self.cell_w as f32).round() as i32,
            layout.y + row.round() as i32,
        )
    }

    /// Terminal cell under a free-floating point such as a menu row.
    fn point(&self, layout: Layout, pos: (f32, f32)) -> (i32, i32) {
        let x = (pos.0 + 1.0) / 2.0 * layout.board_w as f32;
        let y = (1.0 - pos.1) / 2.0 * layout.board_h as f32;
        (layout.x + x.round() as i32, layout.y + y.round() as i32)
    }

    fn draw_sprite(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cmd: &DrawCommand,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = self.sprite_origin(layout, cmd.position);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_head(&self, fb: &mut FrameBuffer, layout: Layout, cmd: &DrawCommand) {
        let (x, y) = self.sprite_origin(layout, cmd.position);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', HEAD);
        let eye = CellStyle::fg(BG, HEAD.fg).bold();
        fb.put_char(
            x + (self.cell_w / 2) as i32,
            y + (self.cell_h / 2) as i32,
            head_glyph(cmd.rotation),
            eye,
        );
    }

    fn draw_menu_item(&self, fb: &mut FrameBuffer, layout: Layout, cmd: &DrawCommand, item: MenuItem) {
        let (cx, y) = self.point(layout, cmd.position);
        if cmd.selected {
            let label = format!("> {} <", item.label());
            fb.put_str_centered(cx, y, &label, TEXT_SELECTED);
        } else {
            fb.put_str_centered(cx, y, item.label(), TEXT.dim());
        }
    }

    fn draw_settings(&self, fb: &mut FrameBuffer, layout: Layout, cmd: &DrawCommand) {
        let (cx, cy) = self.point(layout, cmd.position);
        let top = cy - self.settings.len() as i32 / 2;
        let left = cx - 12;
        for (i, line) in self.settings.iter().enumerate() {
            let style = if i == 0 { TEXT_SELECTED } else { TEXT };
            fb.put_str(left, top + i as i32, line, style);
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

fn cells_to_u16(n: i32) -> u16 {
    n.clamp(0, i32::from(u16::MAX)) as u16
}

fn draw_frame(fb: &mut FrameBuffer, x: i32, y: i32, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let (r, b) = (x + w as i32 - 1, y + h as i32 - 1);

    fb.put_char(x, y, '┌', FRAME);
    fb.put_char(r, y, '┐', FRAME);
    fb.put_char(x, b, '└', FRAME);
    fb.put_char(r, b, '┘', FRAME);
    let (cols, rows) = (i32::from(fb.width()), i32::from(fb.height()));
    for dx in (x + 1).max(0)..r.min(cols) {
        fb.put_char(dx, y, '─', FRAME);
        fb.put_char(dx, b, '─', FRAME);
    }
    for dy in (y + 1).max(0)..b.min(rows) {
        fb.put_char(x, dy, '│', FRAME);
        fb.put_char(r, dy, '│', FRAME);
    }
}

/// Arrow for the head, snapped to the nearest quarter turn.
pub fn head_glyph(rotation: f32) -> char {
    match ((rotation / FRAC_PI_2).round() as i32).rem_euclid(4) {
        0 => '▲',
        1 => '▶',
        2 => '▼',
        _ => '◀',
    }
}

fn settings_lines(config: &GameConfig) -> Vec<String> {
    let seed = config
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());
    vec![
        "SETTINGS".to_string(),
        String::new(),
        format!("grid       {} x {}", config.grid_width, config.grid_height),
        format!("walls      {}", if config.border { "border" } else { "edge" }),
        format!("tick       {} ms", config.base_tick_ms),
        format!(
            "speed-up   -{} ms / {} cells",
            config.ramp_step_ms, config.ramp_every
        ),
        format!("min tick   {} ms", config.min_tick_ms),
        format!("self hit   {}", config.self_collision.as_str()),
        format!("seed       {}", seed),
        String::new(),
        "backspace / esc: back".to_string(),
    ]
}
