//=========================================================================
// Game View
//=========================================================================
//
// One mounted instance of the side-scroller.
//
// Architecture:
//   InputEvent ──► handle_event() ──► InputSampler (HeldKeys, focus)
//                                          │
//   advance() ──► sim::step(state, held, viewport) ──► GameState
//                                          │
//   frame()   ──► place_layers / place_landmarks ──► RenderFrame
//
// A view owns all of its state. Two views never share held keys, and
// dropping a view drops its HeldKeys with it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, PhysicsConfig};
use crate::core::input::{HeldKeys, InputEvent, InputSampler, KeyBindings};
use crate::core::render::{place_landmarks, place_layers, Landmark, ParallaxLayer, RenderFrame};
use crate::core::sim::{self, GameState};

//=== GameView ============================================================

#[derive(Debug, Clone)]
pub struct GameView {
    sampler: InputSampler,
    state: GameState,
    physics: PhysicsConfig,

    /// Last measured width; `None` until the surface reports one.
    viewport_width: Option<f64>,

    layers: Vec<ParallaxLayer>,
    landmarks: Vec<Landmark>,
    ticks: u64,
}

impl GameView {
    //--- Construction -----------------------------------------------------

    /// Mounts a view with the default key bindings.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_bindings(config, KeyBindings::default())
    }

    /// Mounts a view with a custom binding table.
    pub fn with_bindings(config: &GameConfig, bindings: KeyBindings) -> Self {
        info!(
            target: "game",
            "Mounting {} world (width {}, move speed {})",
            config.preset,
            config.physics.world_width,
            config.physics.move_speed
        );

        Self {
            sampler: InputSampler::with_bindings(bindings),
            state: GameState::initial(&config.physics),
            physics: config.physics,
            viewport_width: None,
            layers: config.preset.layers(),
            landmarks: config.preset.landmarks(),
            ticks: 0,
        }
    }

    //--- Input ------------------------------------------------------------

    /// Applies one input event. Returns `true` when the key was consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.sampler.process_event(event)
    }

    /// Applies an ordered batch of input events.
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        self.sampler.process_events(events);
    }

    /// Records a new viewport measurement in world units.
    pub fn set_viewport_width(&mut self, width: f64) {
        if self.viewport_width != Some(width) {
            debug!(target: "game", "Viewport width: {}", width);
            self.viewport_width = Some(width);
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the simulation by one frame.
    ///
    /// Skipped entirely while the view is unfocused. Returns `true` when a
    /// step ran.
    pub fn advance(&mut self) -> bool {
        if !self.sampler.has_focus() {
            return false;
        }

        let previous = self.state;
        self.state = sim::step(
            &previous,
            self.sampler.held(),
            self.viewport_width(),
            &self.physics,
        );
        self.ticks += 1;

        if !previous.is_jumping && self.state.is_jumping {
            debug!(target: "game", "Jump started at x={:.1}", self.state.player_x);
        } else if previous.is_jumping && !self.state.is_jumping {
            debug!(target: "game", "Landed at x={:.1}", self.state.player_x);
        }

        true
    }

    //--- Query API --------------------------------------------------------

    /// Placement data for the current state.
    pub fn frame(&self) -> RenderFrame {
        let viewport_width = self.viewport_width();
        let max_camera_x = sim::max_camera_x(self.physics.world_width, viewport_width);
        let camera_x = self.state.camera_x;

        RenderFrame {
            camera_x,
            player_x: self.state.player_x,
            player_y: self.state.player_y,
            facing_right: self.state.facing_right,
            is_jumping: self.state.is_jumping,
            is_running: self.state.is_running,
            viewport_width,
            layers: place_layers(&self.layers, camera_x, viewport_width, max_camera_x),
            landmarks: place_landmarks(&self.landmarks, camera_x, viewport_width),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn held(&self) -> &HeldKeys {
        self.sampler.held()
    }

    pub fn has_focus(&self) -> bool {
        self.sampler.has_focus()
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Resolved viewport width (fallback applied).
    pub fn viewport_width(&self) -> f64 {
        sim::resolve_viewport_width(self.viewport_width)
    }

    /// Steps run since mount.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
