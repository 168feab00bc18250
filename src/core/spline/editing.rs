//! Strukturelle Editier-Operationen: Segment anhängen, Anker einfügen, Anker löschen.
//!
//! Alle Operationen prüfen ihre Argumente vor der ersten Mutation.

use super::{AnchorRecord, BezierSpline};
use crate::core::orientation::look_rotation;
use crate::core::{EditOutcome, SplineError};
use glam::Vec3;

impl BezierSpline {
    /// Hängt ein Segment in Verlängerung des letzten Segments an.
    ///
    /// Die drei neuen Punkte liegen im 1-, 2- und 3-fachen `added_point_distance`
    /// entlang der End-Richtung. Das neue Segment übernimmt die Dauer des
    /// vorherigen (oder `default_segment_time`, falls diese 0 ist).
    pub fn add_segment(&mut self) {
        let last = self.last_anchor_index();
        let end = self.anchors[last].position;
        let direction = self
            .velocity(1.0)
            .try_normalize()
            .or_else(|| (end - self.anchors[last - 1].position).try_normalize())
            .unwrap_or(Vec3::X);
        let step = direction * self.settings.added_point_distance;

        let previous_time = self.anchors[last - 1].segment_time;
        let segment_time = if previous_time > 0.0 {
            previous_time
        } else {
            self.settings.default_segment_time
        };

        let tail = &mut self.anchors[last];
        tail.handle_out = end + step;
        tail.segment_time = segment_time;

        self.anchors.push(AnchorRecord {
            position: end + step * 3.0,
            handle_in: end + step * 2.0,
            handle_out: end + step * 3.0,
            mode: self.settings.new_anchor_mode,
            orientation: look_rotation(direction, Vec3::Y),
            segment_time: 0.0,
        });

        // Bisheriger End-Anker ist jetzt innen → Modus greift
        self.enforce_mode_at(last * 3);
        if self.looped {
            self.close_loop_seam();
        }
        self.settle_dormant_handles();

        log::debug!(
            "Segment angehaengt: {} Segmente, Dauer {:.2}s",
            self.segment_count(),
            segment_time
        );
    }

    /// Fügt einen Anker in der Mitte des Segments `anchor → anchor + 1` ein.
    ///
    /// Position: `point((anchor + 0.5) / segment_count)`. Die Handles liegen im
    /// Abstand `added_point_distance` entlang der Sehne der beiden Nachbar-Anker.
    /// Die Segment-Dauer wird halbiert.
    pub fn insert_anchor_between(&mut self, anchor: usize) -> Result<(), SplineError> {
        let segments = self.segment_count();
        if anchor >= segments {
            return Err(SplineError::AnchorOutOfRange {
                anchor,
                count: segments,
            });
        }

        let left = self.anchors[anchor];
        let right = self.anchors[anchor + 1];
        let t = (anchor as f32 + 0.5) / segments as f32;
        let position = self.point(t);
        let direction = (right.position - left.position)
            .try_normalize()
            .or_else(|| self.velocity(t).try_normalize())
            .unwrap_or(Vec3::X);
        let offset = direction * self.settings.added_point_distance;
        let half_time = left.segment_time * 0.5;

        self.anchors[anchor].segment_time = half_time;
        self.anchors.insert(
            anchor + 1,
            AnchorRecord {
                position,
                handle_in: position - offset,
                handle_out: position + offset,
                mode: self.settings.new_anchor_mode,
                orientation: left.orientation.slerp(right.orientation, 0.5),
                segment_time: half_time,
            },
        );

        let inserted = (anchor + 1) * 3;
        self.enforce_mode_at(inserted);
        self.enforce_mode_at(inserted - 3);
        self.enforce_mode_at(inserted + 3);

        log::debug!(
            "Anker {} eingefuegt: {} Segmente",
            anchor + 1,
            self.segment_count()
        );
        Ok(())
    }

    /// Entfernt einen Anker samt seiner beiden Handles.
    ///
    /// Bei nur einem Segment wird die Operation abgelehnt (`EditOutcome::Rejected`).
    pub fn remove_anchor(&mut self, anchor: usize) -> Result<EditOutcome, SplineError> {
        self.check_anchor(anchor)?;
        if self.segment_count() < 2 {
            log::warn!("Anker {} nicht entfernt: letztes Segment bleibt erhalten", anchor);
            return Ok(EditOutcome::Rejected);
        }

        let was_last = anchor == self.last_anchor_index();
        self.anchors.remove(anchor);

        if was_last {
            let last = self.last_anchor_index();
            self.anchors[last].segment_time = 0.0;
        }
        if self.looped && (anchor == 0 || was_last) {
            self.close_loop_seam();
        }
        self.settle_dormant_handles();

        log::debug!(
            "Anker {} entfernt: {} Segmente",
            anchor,
            self.segment_count()
        );
        Ok(EditOutcome::Applied)
    }
}
