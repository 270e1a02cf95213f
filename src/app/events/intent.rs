use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Zeiger-Taste, mit der ein Drag begonnen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Gesten-Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Positionen sind Bildschirm-Pixel im Koordinatensystem des Projektors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureIntent {
    /// Zeiger gedrückt, Drag beginnt
    DragStarted { pos: DVec2, button: PointerButton },
    /// Zeiger bewegt während eines Drags
    DragMoved { pos: DVec2 },
    /// Zeiger losgelassen
    DragEnded,
    /// Mausrad (positiv = hineinzoomen)
    Scrolled { pos: DVec2, delta: f64 },
    /// Pinch-Geste beginnt (Zentrum der Finger)
    PinchStarted { pos: DVec2 },
    /// Pinch-Update mit akkumuliertem Skalierungsfaktor
    PinchMoved { pos: DVec2, scale: f64 },
    /// Pinch-Geste endet
    PinchEnded,
    /// Stufenweise hineinzoomen (um die Bildschirm-Mitte)
    ZoomInRequested,
    /// Stufenweise herauszoomen (um die Bildschirm-Mitte)
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { width: f64, height: f64 },
    /// Kamera auf die Szene-Bounds ausrichten
    FitBoundsRequested,
    /// Kamera auf die Startparameter zurücksetzen
    ResetRequested,
}
