//! Projektions-Vertrag zwischen Controller und Renderer.
//!
//! Der Controller kennt nur den `Viewport`-Trait. `OrbitViewport` ist die
//! Referenz-Implementierung: perspektivische Orbit-Kamera, deren Auge im
//! Abstand `distance` entlang +Z über dem `look_at` liegt.

use super::ViewportParams;
use glam::{DMat4, DVec3};

/// Projektor, gebaut aus einem unveränderlichen Parameter-Snapshot.
///
/// Bildschirm-Koordinaten: x/y in Pixeln, z trägt die Tiefe. Für einen
/// Snapshot müssen `project` und `unproject` zueinander invers sein.
pub trait Viewport: Sized {
    /// Baut den Projektor für die gegebenen Parameter.
    fn from_params(params: &ViewportParams) -> Self;

    /// Welt → Bildschirm
    fn project(&self, world: DVec3) -> DVec3;

    /// Bildschirm → Welt
    fn unproject(&self, screen: DVec3) -> DVec3;
}

/// Perspektivische Orbit-Projektion (Ursprung oben links, y nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitViewport {
    view: DMat4,
    projection: DMat4,
    pixel_projection: DMat4,
    pixel_unprojection: DMat4,
}

impl OrbitViewport {
    /// View-Matrix (Welt → Kamera)
    pub fn view_matrix(&self) -> DMat4 {
        self.view
    }

    /// Projektions-Matrix (Kamera → Clip-Space)
    pub fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    /// Gesamtmatrix Welt → Pixel, inklusive Zoom und Translation.
    pub fn pixel_projection_matrix(&self) -> DMat4 {
        self.pixel_projection
    }
}

impl Viewport for OrbitViewport {
    fn from_params(params: &ViewportParams) -> Self {
        let eye = params.look_at + DVec3::new(0.0, 0.0, params.distance);
        let view = DMat4::look_at_rh(eye, params.look_at, DVec3::Y);
        let projection = DMat4::perspective_rh_gl(
            params.fov.to_radians(),
            params.aspect(),
            params.near,
            params.far,
        );

        // NDC → Pixel: Zoom skaliert um die (verschobene) Bildschirm-Mitte, Y wird geflippt
        let half = params.center_px();
        let to_pixels = DMat4::from_translation(DVec3::new(
            half.x + params.translation_x,
            half.y + params.translation_y,
            0.0,
        )) * DMat4::from_scale(DVec3::new(
            half.x * params.zoom,
            -half.y * params.zoom,
            1.0,
        ));

        let pixel_projection = to_pixels * projection * view;
        Self {
            view,
            projection,
            pixel_projection,
            // Bei zoom == 0 singulär; der Controller verwirft nicht-endliche Ergebnisse
            pixel_unprojection: pixel_projection.inverse(),
        }
    }

    fn project(&self, world: DVec3) -> DVec3 {
        self.pixel_projection.project_point3(world)
    }

    fn unproject(&self, screen: DVec3) -> DVec3 {
        self.pixel_unprojection.project_point3(screen)
    }
}
