//! Deklarative Viewport-Parameter und Constraint-Anwendung.
//!
//! `ViewportProps` ist die rohe Parameter-Tasche (jedes Feld optional, z.B. aus
//! TOML/JSON), `ViewportParams` der daraus konstruierte, vollständig belegte
//! Zustand. Die Konstruktion ist total: ungültige Zahlen werden durch den
//! jeweiligen Fallback ersetzt, niemals weitergereicht.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// ── Projektion ──────────────────────────────────────────────────────

/// Standard-Sichtfeld in Grad.
pub const DEFAULT_FOV: f64 = 50.0;
/// Standard-Abstand der Near-Clipping-Plane.
pub const DEFAULT_NEAR: f64 = 1.0;
/// Standard-Abstand der Far-Clipping-Plane.
pub const DEFAULT_FAR: f64 = 100.0;

// ── Nach der Projektion ─────────────────────────────────────────────

/// Standard-Verschiebung in Pixeln.
pub const DEFAULT_TRANSLATION: f64 = 0.0;
/// Standard-Zoom-Faktor.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ── Constraints ─────────────────────────────────────────────────────

/// Standard-Untergrenze des Zooms.
pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
/// Standard-Obergrenze des Zooms (unbegrenzt).
pub const DEFAULT_MAX_ZOOM: f64 = f64::INFINITY;

/// Fallback für Breite, Höhe und Augenabstand.
pub const DEFAULT_EXTENT: f64 = 1.0;

/// Achsenparallele Ausdehnung der Szene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Bounds {
    /// Erstellt Bounds aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
            min_z: min.z,
            max_z: max.z,
        }
    }

    pub fn min(&self) -> DVec3 {
        DVec3::new(self.min_x, self.min_y, self.min_z)
    }

    pub fn max(&self) -> DVec3 {
        DVec3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Mittelpunkt der Box
    pub fn center(&self) -> DVec3 {
        (self.min() + self.max()) * 0.5
    }

    /// Kantenlängen der Box
    pub fn size(&self) -> DVec3 {
        self.max() - self.min()
    }

    /// Verwirft Bounds mit nicht-endlichen Werten, vertauschte Achsen werden sortiert.
    fn sanitized(self) -> Option<Self> {
        let (min, max) = (self.min(), self.max());
        if !min.is_finite() || !max.is_finite() {
            log::warn!("Bounds mit nicht-endlichen Werten verworfen: {:?}", self);
            return None;
        }
        Some(Self::from_corners(min, max))
    }
}

/// Rohe Parameter-Tasche: beliebige Teilmenge der Viewport-Felder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportProps {
    /// Breite des Viewports in Pixeln
    pub width: Option<f64>,
    /// Höhe des Viewports in Pixeln
    pub height: Option<f64>,
    /// Abstand vom Auge zum Ziel
    pub distance: Option<f64>,
    /// Ausdehnung des Modells
    pub bounds: Option<Bounds>,
    /// Welt-Punkt, auf den die Kamera blickt (Default: Ursprung)
    pub look_at: Option<DVec3>,
    /// Sichtfeld in Grad
    pub fov: Option<f64>,
    pub near: Option<f64>,
    pub far: Option<f64>,
    /// Verschiebung nach der Projektion, in Pixeln
    pub translation_x: Option<f64>,
    pub translation_y: Option<f64>,
    pub zoom: Option<f64>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
}

/// Vollständig belegte, bereinigte Kamera-Parameter.
///
/// Wird ausschließlich über `From<ViewportProps>` gebaut; danach gilt
/// `min_zoom <= zoom <= max_zoom`, `0 < near < far` und alle Felder außer
/// `max_zoom` sind endlich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportParams {
    pub width: f64,
    pub height: f64,
    pub distance: f64,
    pub bounds: Option<Bounds>,
    pub look_at: DVec3,
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    pub translation_x: f64,
    pub translation_y: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewportParams {
    /// Seitenverhältnis Breite / Höhe
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Bildschirm-Mitte in Pixeln
    pub fn center_px(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width, self.height) * 0.5
    }

    /// Zoom in den erlaubten Bereich zwingen.
    fn with_constraints(mut self) -> Self {
        // min_zoom <= max_zoom und beide nicht NaN, siehe sanitize_zoom_range
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self::from(ViewportProps::default())
    }
}

impl From<ViewportProps> for ViewportParams {
    fn from(props: ViewportProps) -> Self {
        let (near, far) = sanitize_clip_planes(props.near, props.far);
        let (min_zoom, max_zoom) = sanitize_zoom_range(props.min_zoom, props.max_zoom);

        Self {
            width: ensure_positive(props.width, DEFAULT_EXTENT),
            height: ensure_positive(props.height, DEFAULT_EXTENT),
            distance: ensure_positive(props.distance, DEFAULT_EXTENT),
            bounds: props.bounds.and_then(Bounds::sanitized),
            look_at: props.look_at.map(sanitize_point).unwrap_or(DVec3::ZERO),
            fov: sanitize_fov(props.fov),
            near,
            far,
            translation_x: ensure_finite(props.translation_x, DEFAULT_TRANSLATION),
            translation_y: ensure_finite(props.translation_y, DEFAULT_TRANSLATION),
            zoom: ensure_finite(props.zoom, DEFAULT_ZOOM),
            min_zoom,
            max_zoom,
        }
        .with_constraints()
    }
}

impl From<ViewportParams> for ViewportProps {
    fn from(params: ViewportParams) -> Self {
        Self {
            width: Some(params.width),
            height: Some(params.height),
            distance: Some(params.distance),
            bounds: params.bounds,
            look_at: Some(params.look_at),
            fov: Some(params.fov),
            near: Some(params.near),
            far: Some(params.far),
            translation_x: Some(params.translation_x),
            translation_y: Some(params.translation_y),
            zoom: Some(params.zoom),
            min_zoom: Some(params.min_zoom),
            max_zoom: Some(params.max_zoom),
        }
    }
}

fn ensure_finite(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}

fn ensure_positive(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            log::debug!("Ungültige Ausdehnung {} ersetzt durch {}", v, fallback);
            fallback
        }
        None => fallback,
    }
}

fn sanitize_point(point: DVec3) -> DVec3 {
    let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
    DVec3::new(clean(point.x), clean(point.y), clean(point.z))
}

fn sanitize_fov(fov: Option<f64>) -> f64 {
    match fov {
        Some(v) if v.is_finite() && v > 0.0 && v < 180.0 => v,
        Some(v) => {
            log::debug!("Ungültiges Sichtfeld {} ersetzt durch {}", v, DEFAULT_FOV);
            DEFAULT_FOV
        }
        None => DEFAULT_FOV,
    }
}

fn sanitize_clip_planes(near: Option<f64>, far: Option<f64>) -> (f64, f64) {
    let near = ensure_finite(near, DEFAULT_NEAR);
    let far = ensure_finite(far, DEFAULT_FAR);
    if near > 0.0 && near < far {
        (near, far)
    } else {
        log::warn!(
            "Clipping-Planes near={} far={} ungültig, verwende Standardwerte",
            near,
            far
        );
        (DEFAULT_NEAR, DEFAULT_FAR)
    }
}

fn sanitize_zoom_range(min_zoom: Option<f64>, max_zoom: Option<f64>) -> (f64, f64) {
    let mut min = ensure_finite(min_zoom, DEFAULT_MIN_ZOOM);
    // +∞ ist als Obergrenze erlaubt und gleichzeitig der Fallback
    let mut max = ensure_finite(max_zoom, DEFAULT_MAX_ZOOM);
    if max < min {
        log::warn!("Zoom-Grenzen vertauscht (min={}, max={})", min, max);
        std::mem::swap(&mut min, &mut max);
    }
    (min.max(0.0), max.max(0.0))
}
