//! Held-key tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::KeyEvent;

use crate::map::{map_key, Key};
use crate::types::{KeyStates, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    held: bool,
    /// Pressed since the last sample; survives a release in the same frame.
    latched: bool,
    /// Milliseconds since the last press or repeat.
    age_ms: u32,
}

/// Tracks which game keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    slots: [KeySlot; 7],
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            slots: [KeySlot::default(); 7],
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or terminal auto-repeat). Returns the key when it was not
    /// already held.
    pub fn press(&mut self, key: Key) -> Option<Key> {
        let slot = &mut self.slots[key.index()];
        slot.age_ms = 0;
        if slot.held {
            return None;
        }
        slot.held = true;
        slot.latched = true;
        Some(key)
    }

    pub fn release(&mut self, key: Key) {
        let slot = &mut self.slots[key.index()];
        slot.held = false;
        slot.age_ms = 0;
    }

    pub fn handle_key_press(&mut self, event: KeyEvent) -> Option<Key> {
        map_key(event).and_then(|key| self.press(key))
    }

    pub fn handle_key_release(&mut self, event: KeyEvent) {
        if let Some(key) = map_key(event) {
            self.release(key);
        }
    }

    /// Age held keys and auto-release the ones that went quiet.
    pub fn update(&mut self, elapsed_ms: u32) {
        let timeout = self.key_release_timeout_ms;
        for slot in self.slots.iter_mut().filter(|s| s.held) {
            slot.age_ms = slot.age_ms.saturating_add(elapsed_ms);
            if slot.age_ms > timeout {
                slot.held = false;
                slot.age_ms = 0;
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.slots[key.index()].held
    }

    /// Per-frame sample for the core. A key tapped and released between two
    /// samples still reads as held once.
    pub fn sample(&mut self) -> KeyStates {
        let mut read = |key: Key| {
            let slot = &mut self.slots[key.index()];
            let v = slot.held || slot.latched;
            slot.latched = false;
            v
        };
        KeyStates {
            up: read(Key::Up),
            down: read(Key::Down),
            left: read(Key::Left),
            right: read(Key::Right),
            confirm: read(Key::Confirm),
            back: read(Key::Back),
            escape: read(Key::Escape),
        }
    }

    pub fn reset(&mut self) {
        self.slots = [KeySlot::default(); 7];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
