//! Mapping von Gesten-Intents auf zustandsändernde Commands.

use super::{GestureCommand, GestureIntent, PointerButton};
use crate::shared::ControllerOptions;
use glam::DVec2;

/// Modus des aktuell laufenden Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    Pan,
    Rotate,
}

impl DragMode {
    /// Ordnet einer Zeiger-Taste den Drag-Modus zu.
    ///
    /// Mit `invert_pan` pannt die primäre Taste und die sekundäre rotiert,
    /// sonst umgekehrt. Die mittlere Taste pannt immer.
    pub fn for_button(button: PointerButton, invert_pan: bool) -> Self {
        match (button, invert_pan) {
            (PointerButton::Middle, _) => DragMode::Pan,
            (PointerButton::Primary, true) | (PointerButton::Secondary, false) => DragMode::Pan,
            (PointerButton::Primary, false) | (PointerButton::Secondary, true) => DragMode::Rotate,
        }
    }

    /// Drag-Modus nach Verarbeitung des Intents.
    pub fn after(self, intent: &GestureIntent, invert_pan: bool) -> Self {
        match intent {
            GestureIntent::DragStarted { button, .. } => Self::for_button(*button, invert_pan),
            GestureIntent::DragEnded | GestureIntent::ResetRequested => DragMode::None,
            _ => self,
        }
    }

    fn end_command(self) -> Option<GestureCommand> {
        match self {
            DragMode::None => None,
            DragMode::Pan => Some(GestureCommand::PanEnd),
            DragMode::Rotate => Some(GestureCommand::RotateEnd),
        }
    }
}

/// Gibt zurück, ob nach dem Intent eine Pinch-Geste offen ist.
pub fn pinch_open_after(open: bool, intent: &GestureIntent) -> bool {
    match intent {
        GestureIntent::PinchStarted { .. } => true,
        GestureIntent::PinchEnded | GestureIntent::ResetRequested => false,
        _ => open,
    }
}

/// Bündelt den Kontext, den das Mapping braucht.
pub struct MappingContext<'a> {
    pub drag_mode: DragMode,
    /// Offene Pinch-Geste; Stufen-Zooms würden ihre Zoom-Session überschreiben
    pub pinch_open: bool,
    pub viewport_center: DVec2,
    pub options: &'a ControllerOptions,
}

/// Übersetzt einen `GestureIntent` in eine Sequenz ausführbarer `GestureCommand`s.
pub fn map_intent_to_commands(ctx: &MappingContext, intent: &GestureIntent) -> Vec<GestureCommand> {
    match *intent {
        GestureIntent::DragStarted { pos, button } => {
            // Ein noch offener Drag wird zuerst sauber beendet
            let mut commands: Vec<GestureCommand> = ctx.drag_mode.end_command().into_iter().collect();
            commands.push(match DragMode::for_button(button, ctx.options.invert_pan) {
                DragMode::Rotate => GestureCommand::RotateStart,
                _ => GestureCommand::PanStart { pos },
            });
            commands
        }
        GestureIntent::DragMoved { pos } => match ctx.drag_mode {
            DragMode::Pan => vec![GestureCommand::Pan {
                pos,
                start_pos: None,
            }],
            DragMode::Rotate => vec![GestureCommand::Rotate],
            DragMode::None => {
                log::debug!("DragMoved ohne aktiven Drag ignoriert");
                Vec::new()
            }
        },
        GestureIntent::DragEnded => ctx.drag_mode.end_command().into_iter().collect(),
        GestureIntent::Scrolled { .. }
        | GestureIntent::ZoomInRequested
        | GestureIntent::ZoomOutRequested
            if ctx.pinch_open =>
        {
            log::debug!("Stufen-Zoom während Pinch ignoriert");
            Vec::new()
        }
        GestureIntent::Scrolled { pos, delta } => match ctx.options.scroll_factor(delta) {
            Some(scale) => step_zoom(pos, scale),
            None => Vec::new(),
        },
        GestureIntent::PinchStarted { pos } => vec![GestureCommand::ZoomStart { pos }],
        GestureIntent::PinchMoved { pos, scale } => vec![GestureCommand::Zoom {
            pos,
            start_pos: None,
            scale,
        }],
        GestureIntent::PinchEnded => vec![GestureCommand::ZoomEnd],
        GestureIntent::ZoomInRequested => step_zoom(ctx.viewport_center, ctx.options.zoom_step),
        GestureIntent::ZoomOutRequested => {
            step_zoom(ctx.viewport_center, 1.0 / ctx.options.zoom_step)
        }
        GestureIntent::ViewportResized { width, height } => {
            vec![GestureCommand::Resize { width, height }]
        }
        GestureIntent::FitBoundsRequested => vec![GestureCommand::FitBounds {
            padding: ctx.options.fit_padding,
        }],
        GestureIntent::ResetRequested => vec![GestureCommand::Reset],
    }
}

/// Einmaliger Zoom um einen festen Anker als abgeschlossene Geste.
fn step_zoom(pos: DVec2, scale: f64) -> Vec<GestureCommand> {
    vec![
        GestureCommand::ZoomStart { pos },
        GestureCommand::Zoom {
            pos,
            start_pos: None,
            scale,
        },
        GestureCommand::ZoomEnd,
    ]
}
