//! Dateiaktionen für Spline-Dokumente.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::core::{BezierSpline, SplineSettings};
use anyhow::Context;
use std::path::Path;

/// Lädt eine Spline aus einer JSON-Datei.
pub fn load_spline(path: &Path, settings: SplineSettings) -> anyhow::Result<BezierSpline> {
    let json_content = std::fs::read_to_string(path)
        .with_context(|| format!("Spline-Datei nicht lesbar: {}", path.display()))?;
    let spline = crate::json::parse_spline_document(&json_content, settings)
        .with_context(|| format!("Spline-Datei ungueltig: {}", path.display()))?;

    log::info!(
        "Loaded spline: {} segments, {} control points, loop: {}",
        spline.segment_count(),
        spline.control_point_count(),
        spline.is_loop()
    );
    Ok(spline)
}

/// Speichert eine Spline als JSON-Datei.
pub fn save_spline(path: &Path, spline: &BezierSpline) -> anyhow::Result<()> {
    let json_content = crate::json::write_spline_document(spline)?;
    std::fs::write(path, json_content)
        .with_context(|| format!("Spline-Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Spline saved as: {}", path.display());
    Ok(())
}
