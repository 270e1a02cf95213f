//! Orbit Replay.
//!
//! Spielt ein aufgezeichnetes Gesten-Skript (JSON) ab und gibt die
//! resultierenden Viewport-Parameter als JSON aus.
//!
//! `orbit-replay --init-options [optionen.toml]` schreibt stattdessen die
//! Standard-Optionen, als Vorlage zum Anpassen.

use anyhow::Context;
use orbit_view_controller::{ControllerOptions, GestureScript, OrbitController, ViewportProps};
use std::path::PathBuf;

const USAGE: &str =
    "Aufruf: orbit-replay <skript.json> [optionen.toml] | --init-options [optionen.toml]";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Orbit Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let first = args.next().context(USAGE)?;

    if first == "--init-options" {
        let path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(ControllerOptions::config_path);
        return ControllerOptions::default().save_to_file(&path);
    }

    let script_path = PathBuf::from(first);
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(ControllerOptions::config_path);

    let mut options = ControllerOptions::load_from_file(&options_path);
    let script = GestureScript::load(&script_path)?;
    if let Some(initial) = script.initial.clone() {
        options.initial_view = initial;
    }

    let mut controller: OrbitController = OrbitController::from_options(options);
    for intent in &script.intents {
        controller.handle_intent(intent);
    }

    let state = controller.state();
    if !state.interactive_state().is_idle() {
        log::warn!("Skript endet mit offener Geste: {:?}", state.interactive_state());
    }
    if &controller.replay_history() != state {
        log::warn!("Replay der Historie weicht vom aktuellen Zustand ab");
    }
    log::info!(
        "{} Commands angewendet, Zoom {:.3}",
        controller.history().len(),
        state.viewport_props().zoom
    );

    let output = ViewportProps::from(*state.viewport_props());
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
