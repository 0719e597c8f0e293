//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → FrameUpdate list → TickControl
//
// Updates keep their arrival order, so a resize sent between two input
// batches is applied between them. Bounded polling prevents starvation.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== FrameUpdate =========================================================

/// One change to apply to the game view before the next tick.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FrameUpdate {
    Inputs(Vec<InputEvent>),
    Viewport(f64),
}

//=== EventCollector ======================================================

/// Collects platform events with bounded polling.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    updates: Vec<FrameUpdate>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            updates: Vec::with_capacity(4),
        }
    }

    /// Collects pending platform events (bounded to prevent starvation).
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_EVENTS_PER_FRAME: usize = 100;

        self.updates.clear();
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    info!(target: "core", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!(target: "core", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns collected updates for this frame.
    #[cfg(test)]
    pub(crate) fn updates(&self) -> &[FrameUpdate] {
        &self.updates
    }

    /// Takes ownership of collected updates, leaving an empty vec.
    pub(crate) fn take_updates(&mut self) -> Vec<FrameUpdate> {
        std::mem::take(&mut self.updates)
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs { events } => {
                if !events.is_empty() {
                    self.updates.push(FrameUpdate::Inputs(events));
                }
                TickControl::Continue
            }
            PlatformEvent::Resized { width } => {
                self.updates.push(FrameUpdate::Viewport(width));
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert!(collector.updates().is_empty());
    }

    #[test]
    fn collect_keeps_arrival_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs { events: vec![key_down(KeyCode::KeyA)] }).unwrap();
        tx.send(PlatformEvent::Resized { width: 1024.0 }).unwrap();
        tx.send(PlatformEvent::Inputs { events: vec![key_down(KeyCode::Space)] }).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.updates(),
            &[
                FrameUpdate::Inputs(vec![key_down(KeyCode::KeyA)]),
                FrameUpdate::Viewport(1024.0),
                FrameUpdate::Inputs(vec![key_down(KeyCode::Space)]),
            ]
        );
    }

    #[test]
    fn collect_skips_empty_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs { events: vec![] }).unwrap();

        collector.collect_frame();
        assert!(collector.updates().is_empty());
    }

    #[test]
    fn collect_clears_previous_updates() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs { events: vec![key_down(KeyCode::Space)] }).unwrap();
        collector.collect_frame();
        assert_eq!(collector.updates().len(), 1);

        collector.collect_frame();
        assert!(collector.updates().is_empty());
    }

    #[test]
    fn take_updates_empties_buffer() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Resized { width: 640.0 }).unwrap();
        collector.collect_frame();

        let taken = collector.take_updates();
        assert_eq!(taken, vec![FrameUpdate::Viewport(640.0)]);
        assert!(collector.updates().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for i in 0..150 {
            tx.send(PlatformEvent::Resized { width: 100.0 + i as f64 }).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.updates().len(), 100);

        collector.collect_frame();
        assert_eq!(collector.updates().len(), 50);
    }
}
