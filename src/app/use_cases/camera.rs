//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::GestureCommand;
use crate::core::{InteractiveState, OrbitState, Viewport, ViewportProps};

/// Wendet einen Command auf einen Zustand an und liefert den Folgezustand.
///
/// `initial` sind die Startparameter, auf die `Reset` zurückspringt.
pub fn apply_command<V: Viewport>(
    state: &OrbitState<V>,
    command: &GestureCommand,
    initial: &ViewportProps,
) -> OrbitState<V> {
    match *command {
        GestureCommand::PanStart { pos } => state.pan_start(pos),
        GestureCommand::Pan { pos, start_pos } => state.pan(pos, start_pos),
        GestureCommand::PanEnd => state.pan_end(),
        GestureCommand::ZoomStart { pos } => state.zoom_start(pos),
        GestureCommand::Zoom {
            pos,
            start_pos,
            scale,
        } => state.zoom(pos, start_pos, scale),
        GestureCommand::ZoomEnd => state.zoom_end(),
        GestureCommand::RotateStart => state.rotate_start(),
        GestureCommand::Rotate => state.rotate(),
        GestureCommand::RotateEnd => state.rotate_end(),
        GestureCommand::Resize { width, height } => state.resized(width, height),
        GestureCommand::FitBounds { padding } => state.fit_bounds(padding),
        GestureCommand::Reset => state.reset(initial.clone()),
    }
}

/// Spielt eine Command-Folge ab `start` erneut ab.
///
/// Da alle Übergänge rein sind, liefert das bei gleichem Start und gleichen
/// Commands immer denselben Zustand.
pub fn replay<'a, V, I>(start: OrbitState<V>, commands: I, initial: &ViewportProps) -> OrbitState<V>
where
    V: Viewport,
    I: IntoIterator<Item = &'a GestureCommand>,
{
    commands
        .into_iter()
        .fold(start, |state, command| apply_command(&state, command, initial))
}
