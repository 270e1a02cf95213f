use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Commands sind einzelne Zustandsübergänge, die zentral ausgeführt werden.
///
/// Eine Command-Liste plus Startparameter reicht aus, um einen Zustand
/// deterministisch zu rekonstruieren (siehe `replay`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureCommand {
    /// Pan-Lifecycle Start
    PanStart { pos: DVec2 },
    /// Pan-Lifecycle Update
    Pan {
        pos: DVec2,
        start_pos: Option<DVec2>,
    },
    /// Pan-Lifecycle Ende
    PanEnd,
    /// Zoom-Lifecycle Start (Anker)
    ZoomStart { pos: DVec2 },
    /// Zoom-Lifecycle Update mit akkumuliertem Faktor
    Zoom {
        pos: DVec2,
        start_pos: Option<DVec2>,
        scale: f64,
    },
    /// Zoom-Lifecycle Ende
    ZoomEnd,
    RotateStart,
    Rotate,
    RotateEnd,
    /// Viewport-Größe setzen
    Resize { width: f64, height: f64 },
    /// Auf Szene-Bounds ausrichten
    FitBounds { padding: f64 },
    /// Zurück auf die Startparameter (Session wird geleert)
    Reset,
}
