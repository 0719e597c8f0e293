//=========================================================================
// Render Frame
//=========================================================================
//
// Per-frame output handed to the rendering collaborator.
//
// Architecture:
//   GameView::frame() → RenderFrame → FrameSink::present() → painter
//
// The core never paints. A sink receives a read-only frame after every
// tick and decides what to do with it.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{LandmarkPlacement, LayerPlacement};

//=== RenderFrame =========================================================

/// Everything a painter needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub camera_x: f64,
    pub player_x: f64,
    pub player_y: f64,
    pub facing_right: bool,
    pub is_jumping: bool,
    pub is_running: bool,

    /// Resolved viewport width used for this frame.
    pub viewport_width: f64,

    /// Layer placements, farthest first.
    pub layers: Vec<LayerPlacement>,

    /// Landmarks inside the cull window, in world order.
    pub landmarks: Vec<LandmarkPlacement>,
}

impl RenderFrame {
    /// Player position relative to the left viewport edge.
    pub fn player_screen_x(&self) -> f64 {
        self.player_x - self.camera_x
    }
}

//=== FrameSink ===========================================================

/// Receives frames on the core thread.
pub trait FrameSink: Send {
    fn present(&mut self, frame: &RenderFrame);
}

//=== LogSink =============================================================

/// Logs player state transitions. Default sink when nothing paints.
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<(bool, bool, bool)>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &RenderFrame) {
        let pose = (frame.is_jumping, frame.is_running, frame.facing_right);

        if self.last != Some(pose) {
            debug!(
                target: "render",
                "Player at ({:.1}, {:.1}) jumping={} running={} facing_right={} camera={:.1}",
                frame.player_x,
                frame.player_y,
                frame.is_jumping,
                frame.is_running,
                frame.facing_right,
                frame.camera_x
            );
            self.last = Some(pose);
        }

        trace!(
            target: "render",
            "Frame: {} layers, {} landmarks visible",
            frame.layers.len(),
            frame.landmarks.len()
        );
    }
}

//=== ChannelSink =========================================================

/// Forwards frames to an external painter over a crossbeam channel.
///
/// Never blocks the core thread: a full channel drops the frame, a
/// disconnected one turns the sink into a no-op.
#[derive(Debug)]
pub struct ChannelSink {
    sender: Sender<RenderFrame>,
    dropped: u64,
    connected: bool,
}

impl ChannelSink {
    pub fn new(sender: Sender<RenderFrame>) -> Self {
        Self {
            sender,
            dropped: 0,
            connected: true,
        }
    }

    /// Frames dropped because the painter lagged.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl FrameSink for ChannelSink {
    fn present(&mut self, frame: &RenderFrame) {
        if !self.connected {
            return;
        }

        match self.sender.try_send(frame.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                warn!(
                    target: "render",
                    "Painter lagging, dropped frame ({} total)",
                    self.dropped
                );
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "render", "Painter disconnected, no further frames sent");
                self.connected = false;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
