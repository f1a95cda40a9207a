//! Slant Tennis entry point
//!
//! There is no native window; this runs a headless attract-mode rally and
//! dumps the final frame snapshot as JSON.

#[cfg(not(target_arch = "wasm32"))]
use slant_tennis::sim::{GameEvent, SimulationState, TickInput, tick};

/// Field size used by the demo
#[cfg(not(target_arch = "wasm32"))]
const FIELD: (f32, f32) = (800.0, 400.0);
/// One minute at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slant Tennis (native) starting headless demo...");

    let seed = std::env::var("SLANT_TENNIS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let mut state = match SimulationState::new(FIELD.0, FIELD.1, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Setup failed: {e}");
            std::process::exit(1);
        }
    };

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut hits = 0u32;
    for _ in 0..DEMO_TICKS {
        tick(&mut state, &input);
        hits += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
            .count() as u32;
    }

    log::info!(
        "{} ticks, {} paddle hits, score {} - {}",
        state.time_ticks,
        hits,
        state.score.left,
        state.score.right
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot serialization failed: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts drive the library directly on the web
}
