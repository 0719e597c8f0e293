//=========================================================================
// Core Systems Orchestrator
//
// Logic-thread coordinator for the side-scroller.
//
// Responsibilities:
// - Own the game view (held keys, state, focus, viewport)
// - Receive platform events through the EventCollector
// - Advance the view exactly once per tick at a fixed rate (TPS)
// - Present every tick's frame to the configured FrameSink
//
// Notes:
// The orchestrator runs independently from the platform layer. The view
// never leaves the core thread, so input application and stepping are
// serialized without locks. Communication with the platform occurs only
// through the bridge channel.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod config;
pub mod game;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod sim;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use game::GameView;
use platform_bridge::{EventCollector, FrameUpdate, PlatformEvent, TickControl};
use render::FrameSink;

//=== CoreSystemsOrchestrator =============================================

/// Drives one [`GameView`] on a dedicated thread.
pub(crate) struct CoreSystemsOrchestrator {
    view: GameView,
    sink: Box<dyn FrameSink>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(view: GameView, sink: Box<dyn FrameSink>) -> Self {
        Self { view, sink }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform events (exit on close or disconnect)
    //  2. Applies input batches and viewport changes in arrival order
    //  3. Advances the view once and presents the frame
    //  4. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let Self { mut view, mut sink } = self;
            let mut collector = EventCollector::new(receiver);

            info!(target: "core", "Core thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    break;
                }

                //--- Step 2: Apply in order --------------------------------
                Self::apply_updates(&mut view, collector.take_updates());

                //--- Step 3: Tick and present ------------------------------
                view.advance();
                sink.present(&view.frame());

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            info!(target: "core", "Core thread exiting after {} ticks", view.ticks());
        })
    }

    //--- apply_updates() -------------------------------------------------

    fn apply_updates(view: &mut GameView, updates: Vec<FrameUpdate>) {
        for update in updates {
            match update {
                FrameUpdate::Inputs(events) => view.handle_events(&events),
                FrameUpdate::Viewport(width) => view.set_viewport_width(width),
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::render::{ChannelSink, RenderFrame};
    use crossbeam_channel::{unbounded, Receiver as FrameReceiver};

    fn orchestrator() -> (CoreSystemsOrchestrator, FrameReceiver<RenderFrame>) {
        let (frame_tx, frame_rx) = unbounded();
        let view = GameView::new(&GameConfig::default());
        let core = CoreSystemsOrchestrator::new(view, Box::new(ChannelSink::new(frame_tx)));
        (core, frame_rx)
    }

    #[test]
    fn apply_updates_keeps_order() {
        let mut view = GameView::new(&GameConfig::default());

        CoreSystemsOrchestrator::apply_updates(
            &mut view,
            vec![
                FrameUpdate::Inputs(vec![InputEvent::FocusChanged { focused: true }]),
                FrameUpdate::Viewport(1000.0),
                FrameUpdate::Inputs(vec![InputEvent::KeyDown { key: KeyCode::ArrowRight }]),
            ],
        );

        assert!(view.has_focus());
        assert_eq!(view.viewport_width(), 1000.0);
        assert_eq!(view.held().len(), 1);
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (core, _frames) = orchestrator();
        let (tx, rx) = unbounded();

        let handle = core.spawn_core_thread(rx, 240.0);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let (core, _frames) = orchestrator();
        let (tx, rx) = unbounded::<PlatformEvent>();

        let handle = core.spawn_core_thread(rx, 240.0);
        drop(tx);

        assert!(handle.join().is_ok());
    }

    #[test]
    fn core_thread_steps_and_presents() {
        let (core, frames) = orchestrator();
        let (tx, rx) = unbounded();

        tx.send(PlatformEvent::Inputs {
            events: vec![
                InputEvent::FocusChanged { focused: true },
                InputEvent::KeyDown { key: KeyCode::ArrowRight },
            ],
        })
        .unwrap();

        let handle = core.spawn_core_thread(rx, 240.0);

        // First presented frame already includes one step to the right
        let first = frames.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first.player_x, 156.0);

        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert!(handle.join().is_ok());
    }
}
