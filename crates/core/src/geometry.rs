//! Grid geometry - integer cells to normalized continuous space
//!
//! Continuous space spans `[-1, 1]` on both axes with y pointing up. Each cell
//! maps to the centre of its `2/width x 2/height` square.

use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    width: i32,
    height: i32,
    border: bool,
}

impl GridGeometry {
    pub fn new(width: i32, height: i32, border: bool) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the outermost ring of cells is wall.
    pub fn border(&self) -> bool {
        self.border
    }

    /// Size of one cell in continuous units.
    pub fn cell_size(&self) -> (f32, f32) {
        (2.0 / self.width as f32, 2.0 / self.height as f32)
    }

    /// Inclusive-exclusive interior ranges `(x_min, x_max, y_min, y_max)`.
    pub fn interior(&self) -> (i32, i32, i32, i32) {
        let m = i32::from(self.border);
        (m, self.width - m, m, self.height - m)
    }

    /// True when the snake may occupy `cell`.
    pub fn in_interior(&self, cell: Cell) -> bool {
        let (x0, x1, y0, y1) = self.interior();
        cell.x >= x0 && cell.x < x1 && cell.y >= y0 && cell.y < y1
    }

    pub fn interior_len(&self) -> usize {
        let (x0, x1, y0, y1) = self.interior();
        ((x1 - x0).max(0) as usize) * ((y1 - y0).max(0) as usize)
    }

    /// Interior cells, row by row from the bottom.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (x0, x1, y0, y1) = self.interior();
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Cell::new(x, y)))
    }

    /// Wall cells of the border ring (empty without a border).
    pub fn border_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
            .filter(move |&c| self.border && !self.in_interior(c))
    }

    /// Map a (possibly fractional) cell coordinate to continuous space.
    pub fn to_continuous(&self, x: f32, y: f32) -> (f32, f32) {
        let (cw, ch) = self.cell_size();
        (-1.0 + x * cw + cw / 2.0, -1.0 + y * ch + ch / 2.0)
    }

    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        self.to_continuous(cell.x as f32, cell.y as f32)
    }

    /// Continuous position `t` of the way from `from` to `to`.
    pub fn lerp(&self, from: Cell, to: Cell, t: f32) -> (f32, f32) {
        let x = from.x as f32 + (to.x - from.x) as f32 * t;
        let y = from.y as f32 + (to.y - from.y) as f32 * t;
        self.to_continuous(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn corner_cells_map_to_half_cell_inset() {
        let g = GridGeometry::new(20, 20, true);
        assert!(close(g.cell_center(Cell::new(0, 0)), (-0.95, -0.95)));
        assert!(close(g.cell_center(Cell::new(19, 19)), (0.95, 0.95)));
    }

    #[test]
    fn non_square_grid_scales_axes_independently() {
        let g = GridGeometry::new(10, 4, false);
        assert!(close(g.cell_size(), (0.2, 0.5)));
        assert!(close(g.cell_center(Cell::new(0, 0)), (-0.9, -0.75)));
    }

    #[test]
    fn border_shrinks_interior_by_one_ring() {
        let g = GridGeometry::new(20, 20, true);
        assert_eq!(g.interior(), (1, 19, 1, 19));
        assert!(!g.in_interior(Cell::new(0, 5)));
        assert!(!g.in_interior(Cell::new(19, 5)));
        assert!(!g.in_interior(Cell::new(5, 0)));
        assert!(!g.in_interior(Cell::new(5, 19)));
        assert!(g.in_interior(Cell::new(1, 1)));
        assert!(g.in_interior(Cell::new(18, 18)));
        assert_eq!(g.interior_len(), 18 * 18);
        assert_eq!(g.interior_cells().count(), 18 * 18);
        assert_eq!(g.border_cells().count(), 20 * 20 - 18 * 18);
    }

    #[test]
    fn borderless_interior_is_whole_grid() {
        let g = GridGeometry::new(20, 20, false);
        assert!(g.in_interior(Cell::new(0, 0)));
        assert!(g.in_interior(Cell::new(19, 19)));
        assert!(!g.in_interior(Cell::new(20, 0)));
        assert!(!g.in_interior(Cell::new(-1, 0)));
        assert_eq!(g.border_cells().count(), 0);
    }

    #[test]
    fn lerp_endpoints_match_cell_centres() {
        let g = GridGeometry::new(20, 20, true);
        let a = Cell::new(4, 5);
        let b = Cell::new(5, 5);
        assert!(close(g.lerp(a, b, 0.0), g.cell_center(a)));
        assert!(close(g.lerp(a, b, 1.0), g.cell_center(b)));
        let mid = g.lerp(a, b, 0.5);
        assert!(close(mid, g.to_continuous(4.5, 5.0)));
    }
}
