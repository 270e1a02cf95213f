//! Gesten-Skripte im JSON-Format für Replay und Tests.

use super::GestureIntent;
use crate::core::ViewportProps;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aufgezeichnete Intent-Folge mit optionaler Start-Ansicht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Überschreibt die Start-Ansicht aus den Optionen
    #[serde(default)]
    pub initial: Option<ViewportProps>,
    pub intents: Vec<GestureIntent>,
}

impl GestureScript {
    /// Lädt ein Skript aus einer JSON-Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
        let script = Self::from_json_str(&content)
            .with_context(|| format!("Skript fehlerhaft: {}", path.display()))?;
        log::info!(
            "Skript geladen: {} ({} Intents)",
            path.display(),
            script.intents.len()
        );
        Ok(script)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
