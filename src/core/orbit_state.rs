//! Unveränderlicher Kamera-Zustand: Viewport-Parameter plus Interaktions-Session.
//!
//! Jeder Übergang baut über `updated()` einen neuen Zustand, der die
//! Constraints erneut durchläuft. Deltas werden immer gegen den beim
//! Gestenbeginn eingefrorenen Referenzrahmen berechnet, damit sich über viele
//! Zeiger-Updates keine Drift aufsummiert.

use super::{
    InteractionSession, InteractiveState, OrbitViewport, Viewport, ViewportParams, ViewportProps,
};
use glam::{DVec2, DVec3};
use std::fmt;
use std::marker::PhantomData;

/// Kamera-Zustand, generisch über den verwendeten Projektor.
pub struct OrbitState<V = OrbitViewport> {
    params: ViewportParams,
    session: InteractionSession,
    _viewport: PhantomData<fn() -> V>,
}

// Manuelle Impls: der Projektor-Typ ist nur Marker und braucht selbst kein Clone/Debug/Eq.
impl<V> Clone for OrbitState<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for OrbitState<V> {}

impl<V> PartialEq for OrbitState<V> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.session == other.session
    }
}

impl<V> fmt::Debug for OrbitState<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitState")
            .field("params", &self.params)
            .field("session", &self.session)
            .finish()
    }
}

impl<V: Viewport> Default for OrbitState<V> {
    fn default() -> Self {
        Self::new(ViewportProps::default())
    }
}

impl<V: Viewport> OrbitState<V> {
    /// Konstruiert einen Zustand aus einer beliebigen Teilmenge der Parameter.
    pub fn new(props: ViewportProps) -> Self {
        Self::from_parts(ViewportParams::from(props), InteractionSession::default())
    }

    fn from_parts(params: ViewportParams, session: InteractionSession) -> Self {
        Self {
            params,
            session,
            _viewport: PhantomData,
        }
    }

    /// Aktuelle, bereinigte Viewport-Parameter
    pub fn viewport_props(&self) -> &ViewportParams {
        &self.params
    }

    /// Aktuelle Interaktions-Session
    pub fn interactive_state(&self) -> &InteractionSession {
        &self.session
    }

    /// Projektor für die aktuellen Parameter (für den Renderer).
    pub fn viewport(&self) -> V {
        V::from_params(&self.params)
    }

    /// Neuer Zustand mit geänderter Viewport-Größe.
    pub fn resized(&self, width: f64, height: f64) -> Self {
        self.updated(|props, _| {
            props.width = Some(width);
            props.height = Some(height);
        })
    }

    /// Zentriert die Kamera auf die Szene-Bounds und wählt einen passenden Zoom.
    ///
    /// Der Zoom wird so gewählt, dass die um `padding` (relativ) vergrößerten
    /// Bounds in der Look-At-Ebene vollständig sichtbar sind. Ohne Bounds
    /// bleibt der Zustand unverändert.
    pub fn fit_bounds(&self, padding: f64) -> Self {
        let Some(bounds) = self.params.bounds else {
            log::debug!("fit_bounds ohne Bounds ignoriert");
            return *self;
        };

        let center = bounds.center();
        let size = bounds.size();
        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };

        // Sichtbare Welt-Halbhöhe in der Look-At-Ebene bei Zoom 1.0
        let visible_half_height = self.params.distance * (self.params.fov.to_radians() * 0.5).tan();
        let needed_half_height =
            (size.y * 0.5).max(size.x * 0.5 / self.params.aspect()) * (1.0 + padding);
        let zoom = (needed_half_height > 0.0).then(|| visible_half_height / needed_half_height);

        let fitted = self.updated(|props, _| {
            props.look_at = Some(center);
            if zoom.is_some() {
                props.zoom = zoom;
            }
        });

        log::info!(
            "Bounds ({:.2}, {:.2}, {:.2}) bis ({:.2}, {:.2}, {:.2}), look_at: {:?}, zoom: {:.3}",
            bounds.min_x,
            bounds.min_y,
            bounds.min_z,
            bounds.max_x,
            bounds.max_y,
            bounds.max_z,
            fitted.params.look_at,
            fitted.params.zoom
        );
        fitted
    }

    /// Zurück auf die Startparameter, die Session wird geleert.
    pub fn reset(&self, initial: ViewportProps) -> Self {
        log::debug!("Kamera zurückgesetzt");
        Self::new(initial)
    }

    /// Zentraler Merge: Parameter + Session + Patch, danach erneut Constraints anwenden.
    fn updated(&self, patch: impl FnOnce(&mut ViewportProps, &mut InteractionSession)) -> Self {
        let mut props = ViewportProps::from(self.params);
        let mut session = self.session;
        patch(&mut props, &mut session);
        Self::from_parts(ViewportParams::from(props), session)
    }

    /// Verwirft nicht-endliche Projektor-Ergebnisse zugunsten des aktuellen `look_at`.
    fn finite_look_at(&self, candidate: DVec3, gesture: &str) -> DVec3 {
        if candidate.is_finite() {
            candidate
        } else {
            log::warn!(
                "{}: Projektor lieferte {:?}, look_at bleibt unverändert",
                gesture,
                candidate
            );
            self.params.look_at
        }
    }
}

impl<V: Viewport> InteractiveState for OrbitState<V> {
    fn pan_start(&self, pos: DVec2) -> Self {
        let snapshot = self.params;
        self.updated(|_, session| {
            session.start_pan_viewport = Some(snapshot);
            session.start_pan_pos = Some(pos);
        })
    }

    fn pan(&self, pos: DVec2, start_pos: Option<DVec2>) -> Self {
        let start = self.session.start_pan_pos.or(start_pos).unwrap_or_else(|| {
            log::debug!("pan ohne Startposition, Delta ist null");
            pos
        });
        let reference = self.session.start_pan_viewport.unwrap_or(self.params);
        let viewport = V::from_params(&reference);

        let delta = pos - start;
        let center = viewport.project(reference.look_at);
        let target = viewport.unproject(DVec3::new(
            center.x - delta.x,
            center.y - delta.y,
            center.z,
        ));
        let look_at = self.finite_look_at(target, "pan");

        self.updated(|props, session| {
            props.look_at = Some(look_at);
            session.is_panning = true;
        })
    }

    fn pan_end(&self) -> Self {
        self.updated(|_, session| session.clear_pan())
    }

    fn zoom_start(&self, pos: DVec2) -> Self {
        let snapshot = self.params;
        self.updated(|_, session| {
            session.start_zoom_viewport = Some(snapshot);
            session.start_zoom_pos = Some(pos);
        })
    }

    fn zoom(&self, pos: DVec2, start_pos: Option<DVec2>, scale: f64) -> Self {
        let anchor = self.session.start_zoom_pos.or(start_pos).unwrap_or(pos);
        let reference = self.session.start_zoom_viewport.unwrap_or(self.params);
        let viewport = V::from_params(&reference);

        // `scale` ist relativ zum Referenzrahmen akkumuliert
        let base_zoom = reference.zoom;
        let new_zoom = scaled_zoom(base_zoom, scale, self.params.min_zoom, self.params.max_zoom);
        let ratio = zoom_ratio(new_zoom, base_zoom);

        // Der Welt-Punkt unter dem Anker soll nach dem Zoom unter `anchor + delta` liegen
        let delta = pos - anchor;
        let center = viewport.project(reference.look_at);
        let offset = anchor - center.truncate();
        let new_center = center.truncate() + offset - (offset + delta) / ratio;
        let target = viewport.unproject(new_center.extend(center.z));
        let look_at = self.finite_look_at(target, "zoom");

        self.updated(|props, _| {
            props.look_at = Some(look_at);
            props.zoom = Some(new_zoom);
        })
    }

    /// Beendet den Zoom und leert die komplette Zoom-Session (symmetrisch zu `pan_end`).
    fn zoom_end(&self) -> Self {
        self.updated(|_, session| session.clear_zoom())
    }

    fn rotate_start(&self) -> Self {
        self.updated(|_, _| {})
    }

    fn rotate(&self) -> Self {
        self.updated(|_, _| {})
    }

    fn rotate_end(&self) -> Self {
        self.updated(|_, _| {})
    }
}

/// `base * scale`, geklemmt; nicht-endliche Ergebnisse behalten `base`.
fn scaled_zoom(base: f64, scale: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    let zoom = base * scale;
    if zoom.is_nan() {
        return base;
    }
    let clamped = zoom.clamp(min_zoom, max_zoom);
    if clamped.is_finite() {
        clamped
    } else {
        base
    }
}

/// Verhältnis neuer zu altem Zoom; bei Nenner 0 oder entartetem Ergebnis 1.
fn zoom_ratio(new_zoom: f64, old_zoom: f64) -> f64 {
    if old_zoom == 0.0 || !old_zoom.is_finite() {
        return 1.0;
    }
    let ratio = new_zoom / old_zoom;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Lineare Test-Projektion: 100 px pro Welteinheit bei Zoom 1, y nach unten.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct FlatViewport {
        center: DVec2,
        look_at: DVec3,
        pixels_per_unit: f64,
    }

    impl Viewport for FlatViewport {
        fn from_params(params: &ViewportParams) -> Self {
            Self {
                center: params.center_px()
                    + DVec2::new(params.translation_x, params.translation_y),
                look_at: params.look_at,
                pixels_per_unit: 100.0 * params.zoom,
            }
        }

        fn project(&self, world: DVec3) -> DVec3 {
            let rel = world - self.look_at;
            DVec3::new(
                self.center.x + rel.x * self.pixels_per_unit,
                self.center.y - rel.y * self.pixels_per_unit,
                rel.z,
            )
        }

        fn unproject(&self, screen: DVec3) -> DVec3 {
            DVec3::new(
                self.look_at.x + (screen.x - self.center.x) / self.pixels_per_unit,
                self.look_at.y - (screen.y - self.center.y) / self.pixels_per_unit,
                self.look_at.z + screen.z,
            )
        }
    }

    type FlatState = OrbitState<FlatViewport>;

    fn scenario_props() -> ViewportProps {
        ViewportProps {
            width: Some(800.0),
            height: Some(600.0),
            distance: Some(3.0),
            zoom: Some(1.0),
            min_zoom: Some(0.5),
            max_zoom: Some(4.0),
            ..Default::default()
        }
    }

    fn assert_vec3_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn stub_projection_roundtrips() {
        let state = FlatState::new(ViewportProps {
            look_at: Some(DVec3::new(2.0, -1.0, 0.5)),
            zoom: Some(1.7),
            ..scenario_props()
        });
        let viewport = state.viewport();
        let look_at = state.viewport_props().look_at;
        assert_vec3_eq(viewport.unproject(viewport.project(look_at)), look_at);
    }

    #[test]
    fn pan_start_only_records_session() {
        let state = FlatState::new(scenario_props());
        let started = state.pan_start(DVec2::new(10.0, 20.0));

        assert_eq!(started.viewport_props(), state.viewport_props());
        let session = started.interactive_state();
        assert_eq!(session.start_pan_pos, Some(DVec2::new(10.0, 20.0)));
        assert_eq!(session.start_pan_viewport, Some(*state.viewport_props()));
        assert!(!session.is_panning);
    }

    #[test]
    fn pan_moves_look_at_against_pointer() {
        let state = FlatState::new(scenario_props())
            .pan_start(DVec2::ZERO)
            .pan(DVec2::new(100.0, 0.0), None);

        // 100 px = 1 Welteinheit; Inhalt folgt dem Zeiger, Ziel wandert entgegen
        assert_vec3_eq(state.viewport_props().look_at, DVec3::new(-1.0, 0.0, 0.0));
        assert!(state.interactive_state().is_panning);
    }

    #[test]
    fn pan_depends_only_on_final_position() {
        let started = FlatState::new(scenario_props()).pan_start(DVec2::new(5.0, 5.0));
        let via_intermediate = started
            .pan(DVec2::new(40.0, -30.0), None)
            .pan(DVec2::new(-12.0, 77.0), None);
        let direct = started.pan(DVec2::new(-12.0, 77.0), None);

        assert_eq!(
            via_intermediate.viewport_props().look_at,
            direct.viewport_props().look_at
        );
    }

    #[test]
    fn pan_end_restores_idle_session() {
        let mut state = FlatState::new(scenario_props()).pan_start(DVec2::ZERO);
        for i in 0..10 {
            state = state.pan(DVec2::new(i as f64 * 3.0, i as f64), None);
        }
        let ended = state.pan_end();

        assert!(ended.interactive_state().is_idle());
        assert_eq!(
            ended.viewport_props().look_at,
            state.viewport_props().look_at
        );
    }

    #[test]
    fn pan_without_start_uses_fallback_position() {
        let state = FlatState::new(scenario_props());
        let panned = state.pan(DVec2::new(0.0, 50.0), Some(DVec2::ZERO));
        // y nach unten: Zeiger nach unten → Ziel wandert nach +y
        assert_vec3_eq(panned.viewport_props().look_at, DVec3::new(0.0, 0.5, 0.0));

        let unmoved = state.pan(DVec2::new(0.0, 50.0), None);
        assert_vec3_eq(unmoved.viewport_props().look_at, DVec3::ZERO);
    }

    #[test]
    fn open_session_wins_over_fallback() {
        let state = FlatState::new(scenario_props())
            .pan_start(DVec2::ZERO)
            .pan(DVec2::new(100.0, 0.0), Some(DVec2::new(100.0, 0.0)));
        assert_vec3_eq(state.viewport_props().look_at, DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn zoom_with_unit_scale_at_anchor_is_identity() {
        let state = FlatState::new(ViewportProps {
            look_at: Some(DVec3::new(0.3, 0.7, 0.0)),
            zoom: Some(2.0),
            ..scenario_props()
        });
        let anchor = DVec2::new(123.0, 456.0);
        let zoomed = state.zoom_start(anchor).zoom(anchor, None, 1.0);

        assert_vec3_eq(zoomed.viewport_props().look_at, state.viewport_props().look_at);
        assert_eq!(zoomed.viewport_props().zoom, 2.0);
    }

    #[test]
    fn zoom_is_clamped_to_max() {
        let state = FlatState::new(scenario_props());
        assert_eq!(state.viewport_props().zoom, 1.0);

        let center = DVec2::new(400.0, 300.0);
        let zoomed = state.zoom_start(center).zoom(center, None, 10.0);
        assert_eq!(zoomed.viewport_props().zoom, 4.0);
    }

    #[test]
    fn zoom_grows_monotonically_until_clamp() {
        let started = FlatState::new(scenario_props()).zoom_start(DVec2::new(400.0, 300.0));
        let zooms: Vec<f64> = [1.0, 1.5, 2.0, 3.0, 4.0, 6.0, 9.0]
            .iter()
            .map(|&scale| {
                started
                    .zoom(DVec2::new(400.0, 300.0), None, scale)
                    .viewport_props()
                    .zoom
            })
            .collect();

        for pair in zooms.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(zooms[4], 4.0);
        assert_eq!(zooms[5], 4.0);
        assert_eq!(zooms[6], 4.0);
    }

    #[test]
    fn scale_is_accumulated_relative_to_zoom_start() {
        let started = FlatState::new(scenario_props()).zoom_start(DVec2::new(400.0, 300.0));
        let twice = started
            .zoom(DVec2::new(400.0, 300.0), None, 2.0)
            .zoom(DVec2::new(400.0, 300.0), None, 3.0);
        assert_eq!(twice.viewport_props().zoom, 3.0);
    }

    #[test]
    fn zoom_keeps_anchor_point_under_cursor() {
        let state = FlatState::new(ViewportProps {
            look_at: Some(DVec3::new(1.0, 2.0, 0.0)),
            ..scenario_props()
        });
        let anchor = DVec2::new(650.0, 120.0);
        let before = state.viewport();
        let world_under_anchor = before.unproject(anchor.extend(0.0));

        let zoomed = state.zoom_start(anchor).zoom(anchor, None, 2.5);
        let after = zoomed.viewport().project(world_under_anchor);

        assert_eq!(zoomed.viewport_props().zoom, 2.5);
        assert_relative_eq!(after.x, anchor.x, epsilon = 1e-9);
        assert_relative_eq!(after.y, anchor.y, epsilon = 1e-9);
    }

    #[test]
    fn zoom_while_panning_moves_anchor_point_with_pointer() {
        let state = FlatState::new(scenario_props());
        let anchor = DVec2::new(200.0, 400.0);
        let pointer = DVec2::new(260.0, 380.0);
        let world_under_anchor = state.viewport().unproject(anchor.extend(0.0));

        let zoomed = state.zoom_start(anchor).zoom(pointer, None, 0.75);
        let after = zoomed.viewport().project(world_under_anchor);

        assert_relative_eq!(after.x, pointer.x, epsilon = 1e-9);
        assert_relative_eq!(after.y, pointer.y, epsilon = 1e-9);
    }

    #[test]
    fn unit_scale_zoom_reduces_to_pan() {
        let state = FlatState::new(scenario_props());
        let start = DVec2::new(300.0, 300.0);
        let pos = DVec2::new(330.0, 250.0);

        let zoomed = state.zoom(pos, Some(start), 1.0);
        let panned = state.pan(pos, Some(start));

        assert_vec3_eq(
            zoomed.viewport_props().look_at,
            panned.viewport_props().look_at,
        );
    }

    #[test]
    fn zoom_end_clears_whole_zoom_session() {
        let state = FlatState::new(scenario_props())
            .zoom_start(DVec2::new(1.0, 1.0))
            .zoom(DVec2::new(1.0, 1.0), None, 2.0)
            .zoom_end();
        assert!(state.interactive_state().is_zoom_idle());
        assert_eq!(state.viewport_props().zoom, 2.0);
    }

    #[test]
    fn pan_and_zoom_sessions_are_independent() {
        let state = FlatState::new(scenario_props())
            .pan_start(DVec2::ZERO)
            .zoom_start(DVec2::new(400.0, 300.0))
            .zoom_end();
        let session = state.interactive_state();
        assert!(session.is_zoom_idle());
        assert_eq!(session.start_pan_pos, Some(DVec2::ZERO));
    }

    #[test]
    fn zero_zoom_does_not_poison_look_at() {
        let state = FlatState::new(ViewportProps {
            zoom: Some(0.0),
            ..Default::default()
        });
        assert_eq!(state.viewport_props().zoom, 0.0);

        let zoomed = state.zoom(DVec2::new(10.0, 10.0), Some(DVec2::ZERO), 2.0);
        assert!(zoomed.viewport_props().look_at.is_finite());
        assert!(zoomed.viewport_props().zoom.is_finite());
    }

    #[test]
    fn non_finite_scale_keeps_zoom() {
        let state = FlatState::new(scenario_props());
        let center = DVec2::new(400.0, 300.0);
        let zoomed = state.zoom(center, None, f64::NAN);
        assert_eq!(zoomed.viewport_props().zoom, 1.0);
        assert_vec3_eq(zoomed.viewport_props().look_at, DVec3::ZERO);
    }

    #[test]
    fn negative_scale_is_absorbed_by_clamp() {
        let state = FlatState::new(scenario_props());
        let center = DVec2::new(400.0, 300.0);
        let zoomed = state.zoom(center, None, -3.0);
        assert_eq!(zoomed.viewport_props().zoom, 0.5);
        assert!(zoomed.viewport_props().look_at.is_finite());
    }

    #[test]
    fn rotation_is_state_preserving() {
        let state = FlatState::new(scenario_props()).pan_start(DVec2::new(3.0, 4.0));
        assert_eq!(state.rotate_start(), state);
        assert_eq!(state.rotate_start().rotate().rotate_end(), state);
    }

    #[test]
    fn resized_reapplies_sanitizing() {
        let state = FlatState::new(scenario_props());
        let resized = state.resized(1024.0, 768.0);
        assert_eq!(resized.viewport_props().width, 1024.0);
        assert_eq!(resized.viewport_props().height, 768.0);

        let broken = state.resized(f64::NAN, -1.0);
        assert_eq!(broken.viewport_props().width, 1.0);
        assert_eq!(broken.viewport_props().height, 1.0);
    }

    #[test]
    fn fit_bounds_centers_and_zooms() {
        use crate::core::Bounds;

        let state = FlatState::new(ViewportProps {
            bounds: Some(Bounds::from_corners(
                DVec3::new(2.0, 2.0, 0.0),
                DVec3::new(6.0, 4.0, 0.0),
            )),
            width: Some(600.0),
            height: Some(600.0),
            distance: Some(10.0),
            fov: Some(90.0),
            ..Default::default()
        });

        let fitted = state.fit_bounds(0.0);
        let params = fitted.viewport_props();
        assert_vec3_eq(params.look_at, DVec3::new(4.0, 3.0, 0.0));
        // sichtbare Halbhöhe 10 * tan(45°) = 10, benötigt 2 (Breite 4 / 2, Aspekt 1)
        assert_relative_eq!(params.zoom, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn fit_bounds_without_bounds_is_noop() {
        let state = FlatState::new(scenario_props());
        assert_eq!(state.fit_bounds(0.1), state);
    }
}
