//! Troll demo entry point.
//!
//! Composition root for the troll wrappers: builds a bare troll, then
//! wraps a fresh one in each variant in turn and runs the full set of
//! operations, so the change in behavior is visible in the log stream.

use anyhow::Result;
use troll::Troll;
use troll::builder::{clubbed, peaceful, simple, super_troll};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    setup_logging()?;

    tracing::info!("A simple looking troll approaches.");
    let troll = simple();
    troll.attack();
    troll.flee_battle();
    tracing::info!("Simple troll power: {}.", troll.attack_power());

    tracing::info!("A troll with huge club surprises you.");
    let troll = clubbed(simple());
    troll.attack();
    troll.flee_battle();
    tracing::info!("Clubbed troll power: {}.", troll.attack_power());

    tracing::info!("A super troll with super huge club surprises you.");
    let troll = super_troll(simple());
    troll.attack();
    troll.flee_battle();
    tracing::info!("Super troll power: {}.", troll.attack_power());

    tracing::info!("A peaceful troll with an awkward smile surprises you.");
    let troll = peaceful(simple());
    troll.attack();
    troll.flee_battle();
    tracing::info!("Peaceful troll power: {}.", troll.attack_power());

    Ok(())
}

/// Setup logging to stdout with an INFO default, overridable via RUST_LOG.
fn setup_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
