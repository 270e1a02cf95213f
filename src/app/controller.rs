//! Application Controller für zentrale Gesten-Verarbeitung.

use super::intent_mapping::{
    map_intent_to_commands, pinch_open_after, DragMode, MappingContext,
};
use super::use_cases::camera;
use super::{GestureCommand, GestureIntent, StateHistory};
use crate::core::{OrbitState, OrbitViewport, Viewport, ViewportProps};
use crate::shared::ControllerOptions;

/// Orchestriert Gesten-Intents und hält den aktuellen Kamera-Zustand.
///
/// Jeder angewendete Command landet mit seinem Folgezustand in der Historie,
/// sodass sich der Zustand jederzeit per Replay reproduzieren lässt.
pub struct OrbitController<V = OrbitViewport> {
    initial: ViewportProps,
    state: OrbitState<V>,
    drag_mode: DragMode,
    pinch_open: bool,
    options: ControllerOptions,
    history: StateHistory<V>,
}

impl<V: Viewport> OrbitController<V> {
    /// Erstellt einen Controller mit expliziten Startparametern.
    pub fn new(initial: ViewportProps, options: ControllerOptions) -> Self {
        let state = OrbitState::new(initial.clone());
        log::debug!("OrbitController gestartet: {:?}", state.viewport_props());
        Self {
            initial,
            state,
            drag_mode: DragMode::None,
            pinch_open: false,
            history: StateHistory::new(state, options.history_depth),
            options,
        }
    }

    /// Erstellt einen Controller mit der Start-Ansicht aus den Optionen.
    pub fn from_options(options: ControllerOptions) -> Self {
        Self::new(options.initial_view.clone(), options)
    }

    /// Aktueller Kamera-Zustand
    pub fn state(&self) -> &OrbitState<V> {
        &self.state
    }

    pub fn history(&self) -> &StateHistory<V> {
        &self.history
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    /// `true`, solange eine Pinch-Geste offen ist.
    pub fn is_pinching(&self) -> bool {
        self.pinch_open
    }

    /// Startparameter, auf die `Reset` zurückspringt.
    pub fn initial(&self) -> &ViewportProps {
        &self.initial
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, intent: &GestureIntent) -> &OrbitState<V> {
        let ctx = MappingContext {
            drag_mode: self.drag_mode,
            pinch_open: self.pinch_open,
            viewport_center: self.state.viewport_props().center_px(),
            options: &self.options,
        };
        let commands = map_intent_to_commands(&ctx, intent);
        self.drag_mode = self.drag_mode.after(intent, self.options.invert_pan);
        self.pinch_open = pinch_open_after(self.pinch_open, intent);

        for command in commands {
            self.handle_command(command);
        }
        &self.state
    }

    /// Führt einen Command auf dem aktuellen Zustand aus und protokolliert ihn.
    pub fn handle_command(&mut self, command: GestureCommand) -> &OrbitState<V> {
        log::debug!("GestureCommand: {:?}", command);
        self.state = camera::apply_command(&self.state, &command, &self.initial);
        if matches!(command, GestureCommand::Reset) {
            self.drag_mode = DragMode::None;
            self.pinch_open = false;
        }
        self.history.record(command, self.state);
        &self.state
    }

    /// Spielt die gespeicherte Historie ab ihrer Basis erneut ab.
    pub fn replay_history(&self) -> OrbitState<V> {
        camera::replay(*self.history.base(), self.history.commands(), &self.initial)
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::from_options(ControllerOptions::default())
    }
}
