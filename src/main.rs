//=========================================================================
// Parallax Runner: Binary
//
// Usage:
//   parallax-runner [CONFIG]
//
// CONFIG defaults to `parallax.toml` in the working directory; a missing
// file means preset defaults. `SCROLLER_*` variables override the file and
// `RUST_LOG` overrides the log filter.
//
//=========================================================================

use anyhow::{Context, Result};
use log::info;

use parallax_runner::core::config::GameConfig;
use parallax_runner::EngineBuilder;

const DEFAULT_CONFIG_PATH: &str = "parallax.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = GameConfig::load_or_default(&path)
        .and_then(GameConfig::apply_env)
        .with_context(|| format!("loading configuration from {}", path))?;

    info!(
        "Starting {} world ({} x {} TPS)",
        config.preset, config.physics.world_width, config.tps
    );

    EngineBuilder::new(config)
        .build()
        .run()
        .context("running platform event loop")
}
