//! Interpolation renderer - discrete snapshots to continuous draw commands
//!
//! Segment `i` slides from `previous[i]` to `current[i]` as the tick fraction goes
//! from 0 to 1. A segment with no previous counterpart (the tail that just grew)
//! stays put. The head angle snaps to the current heading.

use crate::geometry::GridGeometry;
use crate::snake::SnakeBody;
use crate::types::{Cell, Direction, DrawCommand, MenuItem, SpriteKind};

/// Vertical spacing between menu rows in continuous units.
const MENU_ROW_SPACING: f32 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct InterpolationRenderer {
    geometry: GridGeometry,
}

impl InterpolationRenderer {
    pub fn new(geometry: GridGeometry) -> Self {
        Self { geometry }
    }

    /// Continuous position of segment `index` at `fraction` of the way through the tick.
    pub fn segment_position(
        &self,
        previous: &SnakeBody,
        current: &SnakeBody,
        index: usize,
        fraction: f32,
    ) -> Option<(f32, f32)> {
        let to = current.get(index)?;
        let from = previous.get(index).unwrap_or(to);
        Some(self.geometry.lerp(from, to, fraction.clamp(0.0, 1.0)))
    }

    /// Append the snake, tail first so the head is drawn on top.
    pub fn snake_into(
        &self,
        previous: &SnakeBody,
        current: &SnakeBody,
        direction: Direction,
        fraction: f32,
        out: &mut Vec<DrawCommand>,
    ) {
        for index in (0..current.len()).rev() {
            let Some(pos) = self.segment_position(previous, current, index, fraction) else {
                continue;
            };
            let cmd = if index == 0 {
                DrawCommand::new(SpriteKind::Head, pos).with_rotation(direction.angle())
            } else {
                DrawCommand::new(SpriteKind::Body, pos)
            };
            out.push(cmd);
        }
    }

    pub fn food_into(&self, food: Cell, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::new(SpriteKind::Food, self.geometry.cell_center(food)));
    }

    pub fn border_into(&self, out: &mut Vec<DrawCommand>) {
        out.extend(
            self.geometry
                .border_cells()
                .map(|c| DrawCommand::new(SpriteKind::Border, self.geometry.cell_center(c))),
        );
    }

    /// Menu rows centred on the origin, first item on top.
    pub fn menu_into(&self, selected: MenuItem, out: &mut Vec<DrawCommand>) {
        let rows = MenuItem::ALL.len() as f32;
        for item in MenuItem::ALL {
            let y = ((rows - 1.0) / 2.0 - item.index() as f32) * MENU_ROW_SPACING;
            out.push(
                DrawCommand::new(SpriteKind::MenuItem(item), (0.0, y))
                    .with_selected(item == selected),
            );
        }
    }

    pub fn settings_into(&self, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::new(SpriteKind::SettingsPanel, (0.0, 0.0)));
    }
}
