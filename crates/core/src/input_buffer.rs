//! Input buffering - edge-triggered keys and the pending direction queue
//!
//! [`KeyEdges`] turns raw per-frame held states into "pressed this frame" states,
//! so a key held across many frames fires once per press. [`InputBuffer`] keeps
//! the direction changes accepted between two logic ticks.

use arrayvec::ArrayVec;

use crate::types::{Direction, KeyStates, DIRECTION_QUEUE_CAPACITY};

/// Released-to-held edge detector over every key in [`KeyStates`].
#[derive(Debug, Clone, Default)]
pub struct KeyEdges {
    prev: KeyStates,
}

impl KeyEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's held states, get back the keys that went down this frame.
    pub fn update(&mut self, now: KeyStates) -> KeyStates {
        let prev = self.prev;
        self.prev = now;
        KeyStates {
            up: now.up && !prev.up,
            down: now.down && !prev.down,
            left: now.left && !prev.left,
            right: now.right && !prev.right,
            confirm: now.confirm && !prev.confirm,
            back: now.back && !prev.back,
            escape: now.escape && !prev.escape,
        }
    }

    /// Last held states seen.
    pub fn held(&self) -> KeyStates {
        self.prev
    }
}

/// FIFO of direction changes waiting for the next tick.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    queue: ArrayVec<Direction, DIRECTION_QUEUE_CAPACITY>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every directional edge that does not reverse `current`.
    ///
    /// Edges are scanned in `Direction::ALL` order. Returns how many were queued.
    pub fn accept(&mut self, edges: &KeyStates, current: Direction) -> usize {
        let mut accepted = 0;
        for dir in Direction::ALL {
            if edges.direction(dir) && self.push(dir, current) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Queue one request. Reversals of `current` and overflow are dropped.
    pub fn push(&mut self, dir: Direction, current: Direction) -> bool {
        if dir.is_opposite(current) {
            return false;
        }
        self.queue.try_push(dir).is_ok()
    }

    /// Take the oldest pending direction.
    pub fn pop(&mut self) -> Option<Direction> {
        if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        }
    }

    pub fn pending(&self) -> &[Direction] {
        self.queue.as_slice()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(f: impl FnOnce(&mut KeyStates)) -> KeyStates {
        let mut k = KeyStates::default();
        f(&mut k);
        k
    }

    #[test]
    fn test_held_key_fires_once_per_press() {
        let mut edges = KeyEdges::new();
        let down = keys(|k| k.down = true);

        assert!(edges.update(down).down);
        assert!(!edges.update(down).down, "still held: no repeat");
        assert!(!edges.update(KeyStates::default()).down);
        assert!(edges.update(down).down, "re-pressed: fires again");
    }

    #[test]
    fn test_edges_are_tracked_per_key() {
        let mut edges = KeyEdges::new();
        edges.update(keys(|k| k.up = true));
        let e = edges.update(keys(|k| {
            k.up = true;
            k.confirm = true;
        }));
        assert!(!e.up);
        assert!(e.confirm);
        assert!(edges.held().up);
    }

    #[test]
    fn test_reversal_is_discarded() {
        let mut buf = InputBuffer::new();
        let edges = keys(|k| k.left = true);
        assert_eq!(buf.accept(&edges, Direction::Right), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_turns_are_queued_in_order() {
        let mut buf = InputBuffer::new();
        // Heading up: both sideways turns are legal.
        assert!(buf.push(Direction::Left, Direction::Up));
        assert!(buf.push(Direction::Right, Direction::Up));
        assert_eq!(buf.pending(), &[Direction::Left, Direction::Right]);
        assert_eq!(buf.pop(), Some(Direction::Left));
        assert_eq!(buf.pop(), Some(Direction::Right));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_reversal_of_applied_heading_is_dropped_even_after_a_turn() {
        let mut buf = InputBuffer::new();
        assert!(buf.push(Direction::Up, Direction::Right));
        // Still heading right until the next tick, so left is a reversal.
        assert!(!buf.push(Direction::Left, Direction::Right));
        assert_eq!(buf.pending(), &[Direction::Up]);
    }

    #[test]
    fn test_simultaneous_opposite_edges_keep_only_legal_ones() {
        let mut buf = InputBuffer::new();
        let edges = keys(|k| {
            k.left = true;
            k.right = true;
        });
        // Heading right: left is a reversal, right is accepted.
        assert_eq!(buf.accept(&edges, Direction::Right), 1);
        assert_eq!(buf.pending(), &[Direction::Right]);
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut buf = InputBuffer::new();
        for _ in 0..DIRECTION_QUEUE_CAPACITY {
            assert!(buf.push(Direction::Up, Direction::Right));
        }
        assert!(!buf.push(Direction::Down, Direction::Right));
        assert_eq!(buf.len(), DIRECTION_QUEUE_CAPACITY);
        buf.clear();
        assert!(buf.is_empty());
    }
}
