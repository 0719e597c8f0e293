//=========================================================================
// Input Buffer
//
// Transient per-frame store between the winit callbacks and the bridge
// channel.
//
// Responsibilities:
// - Keep key and focus events in arrival order
// - Drop immediate duplicates (e.g. a second identical KeyDown)
// - Hand the whole frame over via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    /// Appends an event unless it repeats the previous one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Returns this frame's events and clears the buffer, or `None` when
    /// nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyD));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::Space));
        buffer.push(key_up(KeyCode::Space));
        buffer.push(key_down(KeyCode::Space));

        assert_eq!(
            buffer.drain(),
            Some(vec![
                key_down(KeyCode::Space),
                key_up(KeyCode::Space),
                key_down(KeyCode::Space),
            ])
        );
    }

    #[test]
    fn focus_and_keys_share_order() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::FocusChanged { focused: true });
        buffer.push(key_down(KeyCode::ArrowRight));

        let events = buffer.drain().unwrap();
        assert_eq!(events[0], InputEvent::FocusChanged { focused: true });
    }

    #[test]
    fn drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyW));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }
}
