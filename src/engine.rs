//=========================================================================
// Parallax Runner Engine
//
// Main entry point and coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns core thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_sink()                blocks until exit
//         └─ with_bindings()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::game::GameView;
use crate::core::input::KeyBindings;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::{FrameSink, LogSink};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: taken from the [`GameConfig`] (60.0 unless configured)
/// - **Channel capacity**: 128 events
/// - **Sink**: [`LogSink`]
/// - **Bindings**: arrows, WASD and Space
///
/// # Examples
///
/// ```no_run
/// use parallax_runner::core::config::{GameConfig, WorldPreset};
/// use parallax_runner::EngineBuilder;
///
/// EngineBuilder::new(GameConfig::from_preset(WorldPreset::Decorated))
///     .with_tps(120.0)
///     .build()
///     .run()?;
/// # Ok::<(), parallax_runner::PlatformError>(())
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    channel_capacity: usize,
    sink: Option<Box<dyn FrameSink>>,
    bindings: KeyBindings,
}

impl EngineBuilder {
    /// Creates a builder for a configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            channel_capacity: 128,
            sink: None,
            bindings: KeyBindings::default(),
        }
    }

    /// Overrides the target ticks per second of the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not a positive finite number.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps.is_finite() && tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the frame sink that receives every tick's frame.
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replaces the key binding table.
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Builds the engine instance.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`GameConfig::validate`].
    pub fn build(self) -> Engine {
        if let Err(e) = self.config.validate() {
            panic!("Invalid game config: {}", e);
        }

        info!(
            "Building engine (preset: {}, TPS: {}, channel: {})",
            self.config.preset, self.config.tps, self.channel_capacity
        );

        let view = GameView::with_bindings(&self.config, self.bindings);
        let sink = self.sink.unwrap_or_else(|| Box::new(LogSink::new()));

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(view, sink),
            tps: self.config.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

//=== Engine ==============================================================

/// Side-scroller runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► GameView → FrameSink
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Key/Focus/Resize events
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On close: core thread exits, is joined, runtime returns
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running. The core thread is joined either way.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        // Platform owns the only sender, so returning disconnects the core
        let result = Platform::new(tx).run();

        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
