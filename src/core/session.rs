//! Flüchtiger Gesten-Zustand zwischen `*_start` und `*_end`.

use super::ViewportParams;
use glam::DVec2;

/// Interaktions-Zustand, nötig um Änderungen relativ zum Gestenbeginn zu berechnen.
///
/// Im Leerlauf (keine Geste aktiv) sind alle Felder `None` bzw. `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionSession {
    /// Eingefrorene Parameter beim Pan-Start (Referenzrahmen für Deltas)
    pub start_pan_viewport: Option<ViewportParams>,
    /// Zeigerposition beim Pan-Start
    pub start_pan_pos: Option<DVec2>,
    /// `true`, solange eine Pan-Geste offen ist
    pub is_panning: bool,
    /// Eingefrorene Parameter beim Zoom-Start
    pub start_zoom_viewport: Option<ViewportParams>,
    /// Zeigerposition beim Zoom-Start (Anker)
    pub start_zoom_pos: Option<DVec2>,
}

impl InteractionSession {
    /// Prüft ob keine Pan-Felder mehr belegt sind.
    pub fn is_pan_idle(&self) -> bool {
        self.start_pan_viewport.is_none() && self.start_pan_pos.is_none() && !self.is_panning
    }

    /// Prüft ob keine Zoom-Felder mehr belegt sind.
    pub fn is_zoom_idle(&self) -> bool {
        self.start_zoom_viewport.is_none() && self.start_zoom_pos.is_none()
    }

    /// Gibt `true` zurück, wenn keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        self.is_pan_idle() && self.is_zoom_idle()
    }

    pub(crate) fn clear_pan(&mut self) {
        self.start_pan_viewport = None;
        self.start_pan_pos = None;
        self.is_panning = false;
    }

    pub(crate) fn clear_zoom(&mut self) {
        self.start_zoom_viewport = None;
        self.start_zoom_pos = None;
    }
}
