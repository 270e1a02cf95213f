//! Zentrale Konfiguration für den Orbit-Controller.
//!
//! `ControllerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ViewportProps;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Zoom ────────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Buttons / Shortcuts).
pub const ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Gesten ──────────────────────────────────────────────────────────

/// Primäre Taste pannt, sekundäre rotiert (umgekehrt bei `false`).
pub const INVERT_PAN: bool = true;
/// Relativer Rand bei „Auf Bounds ausrichten".
pub const FIT_PADDING: f64 = 0.05;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Zustände.
pub const HISTORY_DEPTH: usize = 1000;

/// Alle zur Laufzeit änderbaren Controller-Optionen.
/// Wird als `orbit_view_controller.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerOptions {
    // ── Zoom ────────────────────────────────────────────────────
    /// Faktor für ZoomIn/ZoomOut
    pub zoom_step: f64,
    /// Faktor pro Mausrad-Raste
    pub scroll_zoom_step: f64,

    // ── Gesten ──────────────────────────────────────────────────
    /// Tastenbelegung für Pan und Rotation tauschen
    #[serde(default = "default_invert_pan")]
    pub invert_pan: bool,
    /// Relativer Rand für FitBounds
    #[serde(default = "default_fit_padding")]
    pub fit_padding: f64,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Tiefe der Zustands-Historie
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Start-Ansicht ───────────────────────────────────────────
    /// Startparameter der Kamera (fehlende Felder → Standardwerte)
    #[serde(default)]
    pub initial_view: ViewportProps,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            invert_pan: INVERT_PAN,
            fit_padding: FIT_PADDING,
            history_depth: HISTORY_DEPTH,
            initial_view: ViewportProps::default(),
        }
    }
}

/// Serde-Default für `invert_pan` (Abwärtskompatibilität).
fn default_invert_pan() -> bool {
    INVERT_PAN
}

/// Serde-Default für `fit_padding` (Abwärtskompatibilität).
fn default_fit_padding() -> f64 {
    FIT_PADDING
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

/// Dateiname der Optionen neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "orbit_view_controller.toml";

impl ControllerOptions {
    /// Parst Optionen aus TOML; fehlende Felder erhalten ihre Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Optionen sind kein gültiges TOML")
    }

    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Eine fehlende Datei ist kein Fehler. Eine unlesbare oder fehlerhafte
    /// Datei wird gemeldet; in beiden Fällen gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "{} nicht vorhanden, Controller startet mit Standardwerten",
                path.display()
            );
            return Self::default();
        }

        let loaded = std::fs::read_to_string(path)
            .with_context(|| format!("{} nicht lesbar", path.display()))
            .and_then(|content| Self::from_toml_str(&content));
        match loaded {
            Ok(options) => {
                log::info!("Controller-Optionen aus {} übernommen", path.display());
                options
            }
            Err(e) => {
                log::warn!("{:#}; Controller startet mit Standardwerten", e);
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML; fehlende Verzeichnisse werden angelegt.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Verzeichnis {} nicht anlegbar", dir.display()))?;
        }
        let content =
            toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("{} nicht schreibbar", path.display()))?;
        log::info!("Controller-Optionen nach {} geschrieben", path.display());
        Ok(())
    }

    /// Standardpfad der Optionen: neben der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        dir.join(OPTIONS_FILE_NAME)
    }

    /// Zoom-Faktor für eine Mausrad-Bewegung; `None` ohne Bewegung.
    pub fn scroll_factor(&self, delta: f64) -> Option<f64> {
        if delta == 0.0 || delta.is_nan() {
            return None;
        }
        let step = self.scroll_zoom_step;
        Some(if delta > 0.0 { step } else { 1.0 / step })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        let opts = ControllerOptions::from_toml_str(
            r#"
            zoom_step = 1.5
            scroll_zoom_step = 1.05

            [initial_view]
            width = 800.0
            height = 600.0
            zoom = 2.0
            "#,
        )
        .expect("TOML sollte parsebar sein");

        assert_eq!(opts.zoom_step, 1.5);
        assert!(opts.invert_pan);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
        assert_eq!(opts.initial_view.width, Some(800.0));
        assert_eq!(opts.initial_view.zoom, Some(2.0));
        assert_eq!(opts.initial_view.fov, None);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "orbit_view_controller_options_{}",
            std::process::id()
        ));
        let path = dir.join("nested").join(OPTIONS_FILE_NAME);
        let mut opts = ControllerOptions::default();
        opts.invert_pan = false;
        opts.initial_view.distance = Some(3.0);

        opts.save_to_file(&path).expect("Speichern sollte gelingen");
        let loaded = ControllerOptions::load_from_file(&path);
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded =
            ControllerOptions::load_from_file(Path::new("/nonexistent/orbit_view_controller.toml"));
        assert_eq!(loaded, ControllerOptions::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "orbit_view_controller_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "zoom_step = \"schnell\"").expect("Schreiben sollte gelingen");
        let loaded = ControllerOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, ControllerOptions::default());
        assert!(ControllerOptions::from_toml_str("zoom_step = \"schnell\"").is_err());
    }

    #[test]
    fn config_path_uses_options_file_name() {
        let path = ControllerOptions::config_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(OPTIONS_FILE_NAME)
        );
    }

    #[test]
    fn scroll_factor_direction() {
        let opts = ControllerOptions::default();
        assert_eq!(opts.scroll_factor(3.0), Some(SCROLL_ZOOM_STEP));
        assert_eq!(opts.scroll_factor(-1.0), Some(1.0 / SCROLL_ZOOM_STEP));
        assert_eq!(opts.scroll_factor(0.0), None);
    }
}
