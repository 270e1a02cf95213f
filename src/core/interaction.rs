//! Gemeinsame Schnittstelle für gestengesteuerte Kamera-Zustände.

use glam::DVec2;

/// Zustandsübergänge für Pan-, Zoom- und Rotations-Gesten.
///
/// Jeder Aufruf liefert einen neuen Zustand, der Empfänger bleibt unverändert.
/// Der Aufrufer ruft `*_start` vor dem ersten Gesten-Update und `*_end` nach
/// dem letzten auf. Pan und Zoom nutzen getrennte Session-Felder und dürfen
/// sich abwechseln.
pub trait InteractiveState: Sized {
    /// Beginnt einen Pan an Bildschirmposition `pos`.
    fn pan_start(&self, pos: DVec2) -> Self;

    /// Pan auf die aktuelle Zeigerposition.
    ///
    /// `start_pos` wird nur verwendet, wenn vorher kein `pan_start` lief.
    fn pan(&self, pos: DVec2, start_pos: Option<DVec2>) -> Self;

    /// Beendet den Pan. Muss aufgerufen werden, wenn `pan_start` lief.
    fn pan_end(&self) -> Self;

    /// Beginnt einen Zoom, `pos` wird zum Anker.
    fn zoom_start(&self, pos: DVec2) -> Self;

    /// Zoom um den akkumulierten Faktor `scale` relativ zum Gestenbeginn.
    ///
    /// `start_pos` wird nur verwendet, wenn vorher kein `zoom_start` lief.
    fn zoom(&self, pos: DVec2, start_pos: Option<DVec2>, scale: f64) -> Self;

    /// Beendet den Zoom. Muss aufgerufen werden, wenn `zoom_start` lief.
    fn zoom_end(&self) -> Self;

    fn rotate_start(&self) -> Self;

    fn rotate(&self) -> Self;

    fn rotate_end(&self) -> Self;
}
