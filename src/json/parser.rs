//! Parser für Spline-Dokumente im JSON-Format.

use crate::core::{BezierSpline, SplineDocument, SplineSettings};
use anyhow::{Context, Result};

/// Parst ein JSON-Dokument und baut daraus eine Spline.
///
/// Strukturfehler (falsche Längen, nicht-endliche Werte) werden als
/// `SplineError::InvalidDocument` im Fehler-Kontext gemeldet.
pub fn parse_spline_document(json_content: &str, settings: SplineSettings) -> Result<BezierSpline> {
    let document: SplineDocument =
        serde_json::from_str(json_content).context("Fehler beim Parsen des Spline-JSON")?;
    let spline = BezierSpline::from_document(&document, settings)
        .context("Spline-Dokument verletzt Struktur-Invarianten")?;

    log::debug!(
        "Spline geparst: {} Segmente, Loop: {}",
        spline.segment_count(),
        spline.is_loop()
    );
    Ok(spline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPointMode, SplineError};

    const STRAIGHT: &str = r#"{
        "points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0]],
        "modes": ["Free", "Mirrored"]
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let spline = parse_spline_document(STRAIGHT, SplineSettings::default())
            .expect("Minimal-Dokument muss parsen");
        assert_eq!(spline.segment_count(), 1);
        assert!(!spline.is_loop());
        assert_eq!(spline.control_point_mode(3).unwrap(), ControlPointMode::Mirrored);
        assert_eq!(spline.total_time(), 0.0);
    }

    #[test]
    fn test_parse_rejects_wrong_point_count() {
        let json = r#"{ "points": [[0,0,0],[1,0,0],[2,0,0]], "modes": ["Free"] }"#;
        let err = parse_spline_document(json, SplineSettings::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplineError>(),
            Some(SplineError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_parse_rejects_broken_json() {
        assert!(parse_spline_document("{ points: ", SplineSettings::default()).is_err());
    }
}
