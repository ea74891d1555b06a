//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Write one cell; coordinates outside the buffer (including negative ones
    /// from sprites sliding past the edge) are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= self.width as i32 {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write `s` horizontally centred on column `cx`.
    pub fn put_str_centered(&mut self, cx: i32, y: i32, s: &str, style: CellStyle) {
        let w = s.chars().count() as i32;
        self.put_str(cx - w / 2, y, s, style);
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, ch: char, style: CellStyle) {
        let (x0, y0) = (x.max(0), y.max(0));
        let x1 = (x + i32::from(w)).min(i32::from(self.width));
        let y1 = (y + i32::from(h)).min(i32::from(self.height));
        for cy in y0..y1 {
            for cx in x0..x1 {
                self.put_char(cx, cy, ch, style);
            }
        }
    }

    /// Text content of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_bounds_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.put_char(-1, 0, 'X', style);
        fb.put_char(3, 0, 'X', style);
        fb.put_char(0, 2, 'X', style);
        assert!(fb.row_text(0).chars().all(|c| c == ' '));
        assert!(fb.row_text(1).chars().all(|c| c == ' '));
    }

    #[test]
    fn centred_text_straddles_column() {
        let mut fb = FrameBuffer::new(9, 1);
        fb.put_str_centered(4, 0, "ABC", CellStyle::default());
        assert_eq!(fb.row_text(0), "   ABC   ");
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.fill_rect(-2, -1, u16::MAX, u16::MAX, '#', CellStyle::default());
        assert_eq!(fb.row_text(0), "####");
        assert_eq!(fb.row_text(1), "####");
    }

    #[test]
    fn resize_keeps_default_cells() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.get(3, 2), Some(Cell::default()));
        assert_eq!(fb.get(4, 0), None);
    }
}
