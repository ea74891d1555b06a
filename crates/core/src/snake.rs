//! Snake body - ordered occupied cells, head first

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

/// Ordered sequence of cells; front is the head, back is the tail.
///
/// Never empty: every constructor seeds at least one cell and `advance`
/// pushes the new head before it pops the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    cells: VecDeque<Cell>,
}

impl SnakeBody {
    /// A fresh one-cell snake.
    pub fn new(start: Cell) -> Self {
        let mut cells = VecDeque::with_capacity(32);
        cells.push_back(start);
        Self { cells }
    }

    /// Build a snake from head-first cells. Returns `None` for an empty iterator.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return None;
        }
        Some(Self { cells })
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Where the head lands after one step in `dir`.
    pub fn next_head(&self, dir: Direction) -> Cell {
        self.head() + dir
    }

    /// Move one step: push the new head, drop the tail unless the snake `grew`.
    pub fn advance(&mut self, dir: Direction, grew: bool) -> Cell {
        let new_head = self.next_head(dir);
        self.cells.push_front(new_head);
        if !grew {
            self.cells.pop_back();
        }
        new_head
    }

    /// True iff `new_head` hits a cell that is still occupied after the move.
    ///
    /// The tail leaves its cell on a non-growing step, so chasing the tail is legal.
    pub fn contains_self_collision(&self, new_head: Cell, grew: bool) -> bool {
        let keep = if grew { self.len() } else { self.len() - 1 };
        self.cells.iter().take(keep).any(|&c| c == new_head)
    }
}
