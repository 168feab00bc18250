//! Zentrale Konfiguration für Spline-Bearbeitung und -Auswertung.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ControlPointMode, SplineSettings};
use serde::{Deserialize, Serialize};

// ── Editieren ───────────────────────────────────────────────────────

/// Abstand neu erzeugter Kontrollpunkte (lokale Einheiten).
pub const ADDED_POINT_DISTANCE: f32 = 3.0;
/// Dauer eines neuen Segments in Sekunden, wenn keine Vorlage existiert.
pub const DEFAULT_SEGMENT_TIME: f32 = 1.0;

// ── Auswertung ──────────────────────────────────────────────────────

/// Stützpunkte pro Segment für Polylinien (Rendering, Längen-Schätzung).
pub const SAMPLES_PER_SEGMENT: usize = 10;

// ── Undo/Redo ───────────────────────────────────────────────────────

/// Maximale Tiefe der Undo-History.
pub const HISTORY_DEPTH: usize = 100;

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Wird als `rail_spline.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    /// Abstand neu erzeugter Handles/Anker
    #[serde(default = "default_added_point_distance")]
    pub added_point_distance: f32,
    /// Dauer eines neuen Segments ohne Vorlage
    #[serde(default = "default_segment_time")]
    pub default_segment_time: f32,
    /// Modus neu eingefügter Anker
    #[serde(default = "default_new_anchor_mode")]
    pub new_anchor_mode: ControlPointMode,
    /// Stützpunkte pro Segment für Polylinien
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            added_point_distance: ADDED_POINT_DISTANCE,
            default_segment_time: DEFAULT_SEGMENT_TIME,
            new_anchor_mode: ControlPointMode::Aligned,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `added_point_distance`.
fn default_added_point_distance() -> f32 {
    ADDED_POINT_DISTANCE
}

/// Serde-Default für `default_segment_time`.
fn default_segment_time() -> f32 {
    DEFAULT_SEGMENT_TIME
}

/// Serde-Default für `new_anchor_mode` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_new_anchor_mode() -> ControlPointMode {
    ControlPointMode::Aligned
}

/// Serde-Default für `samples_per_segment`.
fn default_samples_per_segment() -> usize {
    SAMPLES_PER_SEGMENT
}

/// Serde-Default für `history_depth`.
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl SplineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rail-spline"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("rail_spline.toml")
    }

    /// Editier-Parameter für neue oder geladene Splines.
    ///
    /// Nicht-positive Abstände fallen auf den Standardwert zurück.
    pub fn spline_settings(&self) -> SplineSettings {
        let added_point_distance = if self.added_point_distance > 0.0 {
            self.added_point_distance
        } else {
            ADDED_POINT_DISTANCE
        };
        SplineSettings {
            added_point_distance,
            default_segment_time: self.default_segment_time.max(0.0),
            new_anchor_mode: self.new_anchor_mode,
        }
    }
}
