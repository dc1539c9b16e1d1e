//! Input mapping and buffering
//!
//! Browser events arrive between frames. They are mapped to
//! [`InputEvent`]s here and queued until the next frame drains them, so the
//! simulation only ever changes inside the frame callback.

use std::collections::VecDeque;

use crate::sim::InputEvent;

/// Map a `KeyboardEvent.key` value to a game command
///
/// Enter and Space serve, the same as clicking the start button.
pub fn key_to_input(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowLeft" => Some(InputEvent::MoveLeft),
        "ArrowRight" => Some(InputEvent::MoveRight),
        "Enter" | " " => Some(InputEvent::Serve),
        _ => None,
    }
}

/// Commands waiting for the next frame, oldest first
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Queue the command for a key press, ignoring unmapped keys
    pub fn push_key(&mut self, key: &str) -> bool {
        match key_to_input(key) {
            Some(event) => {
                self.push(event);
                true
            }
            None => false,
        }
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_to_input("ArrowLeft"), Some(InputEvent::MoveLeft));
        assert_eq!(key_to_input("ArrowRight"), Some(InputEvent::MoveRight));
        assert_eq!(key_to_input("Enter"), Some(InputEvent::Serve));
        assert_eq!(key_to_input(" "), Some(InputEvent::Serve));
        assert_eq!(key_to_input("q"), None);
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = InputQueue::new();
        assert!(queue.push_key("ArrowLeft"));
        assert!(!queue.push_key("Shift"));
        queue.push(InputEvent::Serve);
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![InputEvent::MoveLeft, InputEvent::Serve]);
        assert!(queue.is_empty());
    }
}
