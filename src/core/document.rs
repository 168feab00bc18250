//! Persistenz-Form einer Spline als flache, parallele Arrays.
//!
//! Das Dokument ist reine Daten (serde). Erst `BezierSpline::from_document`
//! prüft die Struktur-Invarianten und baut die Anker-Liste.

use super::spline::{AnchorRecord, MIN_ANCHOR_COUNT};
use super::{BezierSpline, ControlPointMode, SplineError, SplineSettings};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Flache Darstellung einer Spline für Dateien und Host-Anwendungen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineDocument {
    /// Kontrollpunkte (`3·Segmente + 1`)
    pub points: Vec<Vec3>,
    /// Ein Modus pro Anker
    pub modes: Vec<ControlPointMode>,
    /// Eine Orientierung pro Anker
    #[serde(default)]
    pub orientations: Vec<Quat>,
    /// Eine Segment-Dauer pro Anker
    #[serde(default)]
    pub segment_times: Vec<f32>,
    /// Geschlossene Spline
    #[serde(rename = "loop", default)]
    pub looped: bool,
}

impl SplineDocument {
    /// Erzeugt das Dokument aus einer Spline.
    pub fn from_spline(spline: &BezierSpline) -> Self {
        let anchors = spline.anchors();
        Self {
            points: spline.control_points(),
            modes: anchors.iter().map(|a| a.mode).collect(),
            orientations: anchors.iter().map(|a| a.orientation).collect(),
            segment_times: anchors.iter().map(|a| a.segment_time).collect(),
            looped: spline.is_loop(),
        }
    }

    /// Anzahl Anker laut Punkt-Array (nur gültig wenn `validate` ok).
    fn anchor_count(&self) -> usize {
        (self.points.len() - 1) / 3 + 1
    }

    /// Prüft Längen und Endlichkeit aller Werte.
    ///
    /// Fehlende `orientations`/`segment_times` (leere Arrays) sind erlaubt und
    /// werden beim Aufbau mit Identität bzw. 0 gefüllt.
    pub fn validate(&self) -> Result<(), SplineError> {
        let len = self.points.len();
        if len < 3 * (MIN_ANCHOR_COUNT - 1) + 1 || (len - 1) % 3 != 0 {
            return Err(SplineError::InvalidDocument(format!(
                "{len} Punkte: erwartet 3n+1 mit n >= 1"
            )));
        }
        let anchors = self.anchor_count();
        check_len("modes", self.modes.len(), anchors, false)?;
        check_len("orientations", self.orientations.len(), anchors, true)?;
        check_len("segment_times", self.segment_times.len(), anchors, true)?;

        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(SplineError::InvalidDocument(format!(
                "Punkt {i} ist nicht endlich"
            )));
        }
        if let Some(i) = self
            .orientations
            .iter()
            .position(|q| !q.is_finite() || q.length_squared() < f32::EPSILON)
        {
            return Err(SplineError::InvalidDocument(format!(
                "Orientierung {i} ist nicht endlich oder null"
            )));
        }
        if let Some(i) = self
            .segment_times
            .iter()
            .position(|t| !t.is_finite() || *t < 0.0)
        {
            return Err(SplineError::InvalidDocument(format!(
                "Segment-Dauer {i} ist ungueltig"
            )));
        }
        Ok(())
    }
}

fn check_len(
    field: &str,
    actual: usize,
    expected: usize,
    allow_empty: bool,
) -> Result<(), SplineError> {
    if actual == expected || (allow_empty && actual == 0) {
        Ok(())
    } else {
        Err(SplineError::InvalidDocument(format!(
            "{field}: {actual} Eintraege, erwartet {expected}"
        )))
    }
}

/// Normalisiert nur merklich abweichende Quaternionen (bitgenauer Roundtrip).
fn unit_quat(q: Quat) -> Quat {
    if (q.length_squared() - 1.0).abs() > 1e-4 {
        q.normalize()
    } else {
        q
    }
}

impl BezierSpline {
    /// Baut eine Spline aus einem Dokument.
    ///
    /// Eine offene Loop-Naht (erster ≠ letzter Anker in Position, Modus oder
    /// Orientierung) wird geschlossen. Handles, die ihren `Aligned`- oder
    /// `Mirrored`-Modus verletzen, werden mit `InvalidDocument` abgelehnt.
    pub fn from_document(
        document: &SplineDocument,
        settings: SplineSettings,
    ) -> Result<Self, SplineError> {
        document.validate()?;
        let points = &document.points;
        let len = points.len();

        let anchors = (0..document.anchor_count())
            .map(|a| {
                let index = a * 3;
                let position = points[index];
                AnchorRecord {
                    position,
                    handle_in: if index > 0 { points[index - 1] } else { position },
                    handle_out: if index + 1 < len {
                        points[index + 1]
                    } else {
                        position
                    },
                    mode: document.modes[a],
                    orientation: document
                        .orientations
                        .get(a)
                        .map_or(Quat::IDENTITY, |q| unit_quat(*q)),
                    segment_time: document.segment_times.get(a).copied().unwrap_or(0.0),
                }
            })
            .collect();

        let mut spline = Self::from_parts(anchors, document.looped, settings);
        if document.looped {
            let anchors = spline.anchors();
            let (first, last) = (&anchors[0], &anchors[anchors.len() - 1]);
            let open_seam = first.position != last.position
                || first.mode != last.mode
                || first.orientation != last.orientation;
            if open_seam {
                log::warn!("Loop-Naht im Dokument offen, wird geschlossen");
                spline.set_loop(true);
            }
        }
        spline.check_tangent_modes()?;
        Ok(spline)
    }

    /// Flache Persistenz-Form dieser Spline.
    pub fn to_document(&self) -> SplineDocument {
        SplineDocument::from_spline(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_document() -> SplineDocument {
        SplineDocument {
            points: vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            ],
            modes: vec![ControlPointMode::Free, ControlPointMode::Free],
            orientations: vec![],
            segment_times: vec![],
            looped: false,
        }
    }

    #[test]
    fn test_document_roundtrip_keeps_points() {
        let mut spline = BezierSpline::new();
        spline.add_segment();
        spline.set_segment_time(1, 2.5).unwrap();

        let doc = spline.to_document();
        assert_eq!(doc.points.len(), 7);
        assert_eq!(doc.modes.len(), 3);

        let rebuilt = BezierSpline::from_document(&doc, *spline.settings()).unwrap();
        assert_eq!(rebuilt, spline);
    }

    #[test]
    fn test_missing_optional_arrays_are_filled() {
        let spline = BezierSpline::from_document(&straight_document(), SplineSettings::default())
            .expect("Dokument muss gueltig sein");
        assert_eq!(spline.orientation(1).unwrap(), Quat::IDENTITY);
        assert_eq!(spline.total_time(), 0.0);
    }

    #[test]
    fn test_rejects_wrong_point_count() {
        let mut doc = straight_document();
        doc.points.push(Vec3::ONE);
        assert!(matches!(
            doc.validate(),
            Err(SplineError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_rejects_mode_count_mismatch() {
        let mut doc = straight_document();
        doc.modes.push(ControlPointMode::Aligned);
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_point() {
        let mut doc = straight_document();
        doc.points[2] = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_open_loop_seam_is_closed_on_load() {
        let mut doc = straight_document();
        doc.looped = true;
        let spline = BezierSpline::from_document(&doc, SplineSettings::default()).unwrap();
        assert!(spline.is_loop());
        assert_eq!(spline.control_point(0).unwrap(), spline.control_point(3).unwrap());
    }

    /// Dokument mit einem Innen-Anker bei (3,0,0) und frei wählbaren Handles.
    fn interior_anchor_document(
        mode: ControlPointMode,
        handle_in: Vec3,
        handle_out: Vec3,
    ) -> SplineDocument {
        SplineDocument {
            points: vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                handle_in,
                Vec3::new(3.0, 0.0, 0.0),
                handle_out,
                Vec3::new(5.0, 0.0, 0.0),
                Vec3::new(6.0, 0.0, 0.0),
            ],
            modes: vec![ControlPointMode::Free, mode, ControlPointMode::Free],
            orientations: vec![],
            segment_times: vec![],
            looped: false,
        }
    }

    #[test]
    fn test_loop_seam_orientation_is_shared_on_load() {
        let doc = SplineDocument {
            points: vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 1.0),
                Vec3::new(3.0, 0.0, 2.0),
                Vec3::new(2.0, 0.0, 3.0),
                Vec3::new(1.0, 0.0, 2.0),
                Vec3::ZERO,
            ],
            modes: vec![ControlPointMode::Free; 3],
            orientations: vec![
                Quat::IDENTITY,
                Quat::IDENTITY,
                Quat::from_xyzw(0.0, 1.0, 0.0, 0.0),
            ],
            segment_times: vec![],
            looped: true,
        };

        let spline = BezierSpline::from_document(&doc, SplineSettings::default())
            .expect("Dokument muss gueltig sein");
        assert_eq!(spline.orientation(2).unwrap(), spline.orientation(0).unwrap());
        assert_eq!(spline.orientation(0).unwrap(), Quat::IDENTITY);
    }

    #[test]
    fn test_rejects_handles_violating_their_mode() {
        let bent_in = Vec3::new(2.0, 5.0, 0.0);
        let bent_out = Vec3::new(4.0, 5.0, 0.0);
        for mode in [ControlPointMode::Mirrored, ControlPointMode::Aligned] {
            let doc = interior_anchor_document(mode, bent_in, bent_out);
            assert!(matches!(
                BezierSpline::from_document(&doc, SplineSettings::default()),
                Err(SplineError::InvalidDocument(_))
            ));
        }

        let free = interior_anchor_document(ControlPointMode::Free, bent_in, bent_out);
        assert!(BezierSpline::from_document(&free, SplineSettings::default()).is_ok());
    }

    #[test]
    fn test_accepts_aligned_handles_with_different_lengths() {
        let doc = interior_anchor_document(
            ControlPointMode::Aligned,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        );
        let mut spline = BezierSpline::from_document(&doc, SplineSettings::default())
            .expect("Kollineare Handles muessen gueltig sein");
        let before = spline.control_points();
        spline.enforce_mode(3).unwrap();
        assert_eq!(spline.control_points(), before);
    }
}
