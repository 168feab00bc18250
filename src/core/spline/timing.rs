//! Segment-Zeiten und Orientierungs-Interpolation.

use super::BezierSpline;
use crate::core::SplineError;
use glam::Quat;

impl BezierSpline {
    /// Summe aller Segment-Dauern.
    pub fn total_time(&self) -> f32 {
        self.anchors.iter().map(|a| a.segment_time).sum()
    }

    /// Dauer des von `anchor` ausgehenden Segments.
    pub fn segment_time(&self, anchor: usize) -> Result<f32, SplineError> {
        self.check_anchor(anchor)?;
        Ok(self.anchors[anchor].segment_time)
    }

    /// Setzt die Dauer des von `anchor` ausgehenden Segments (>= 0, endlich).
    pub fn set_segment_time(&mut self, anchor: usize, seconds: f32) -> Result<(), SplineError> {
        self.check_anchor(anchor)?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SplineError::InvalidSegmentTime(seconds));
        }
        self.anchors[anchor].segment_time = seconds;
        Ok(())
    }

    /// Gespeicherte Orientierung eines Ankers.
    pub fn orientation(&self, anchor: usize) -> Result<Quat, SplineError> {
        self.check_anchor(anchor)?;
        Ok(self.anchors[anchor].orientation)
    }

    /// Setzt die Orientierung eines Ankers (normalisiert, Null-Quaternion → Identität).
    ///
    /// Bei Loop teilen sich erster und letzter Anker die Orientierung.
    pub fn set_orientation(&mut self, anchor: usize, orientation: Quat) -> Result<(), SplineError> {
        self.check_anchor(anchor)?;
        let orientation = if orientation.is_finite() && orientation.length_squared() > f32::EPSILON
        {
            orientation.normalize()
        } else {
            Quat::IDENTITY
        };
        let last = self.last_anchor_index();
        self.anchors[anchor].orientation = orientation;
        if self.looped {
            if anchor == 0 {
                self.anchors[last].orientation = orientation;
            } else if anchor == last {
                self.anchors[0].orientation = orientation;
            }
        }
        Ok(())
    }

    /// Orientierung bei `t`: Slerp zwischen den beiden umgebenden Ankern.
    ///
    /// Gewichtet nach Position im Kontrollpunkt-Array, nicht nach Zeit.
    pub fn orientation_at_percent(&self, t: f32) -> Quat {
        let (segment, local) = self.locate(t);
        let from = self.anchors[segment].orientation;
        let to = self.anchors[segment + 1].orientation;
        from.slerp(to, local)
    }

    /// Bildet eine Zeit in `[0, total_time]` auf den normierten Parameter ab.
    ///
    /// Segmente mit Dauer 0 werden übersprungen. Ohne Gesamtdauer → 0.
    pub fn percent_at_time(&self, time: f32) -> f32 {
        let total = self.total_time();
        if total <= 0.0 || time.is_nan() {
            return 0.0;
        }
        let time = time.clamp(0.0, total);
        let count = self.segment_count();

        let mut start = 0.0f32;
        for (segment, anchor) in self.anchors[..count].iter().enumerate() {
            let duration = anchor.segment_time;
            if duration > 0.0 && time <= start + duration {
                let local = ((time - start) / duration).clamp(0.0, 1.0);
                return (segment as f32 + local) / count as f32;
            }
            start += duration;
        }
        1.0
    }

    /// Umkehrung von [`percent_at_time`](Self::percent_at_time).
    pub fn time_at_percent(&self, t: f32) -> f32 {
        let (segment, local) = self.locate(t);
        let before: f32 = self.anchors[..segment]
            .iter()
            .map(|a| a.segment_time)
            .sum();
        before + local * self.anchors[segment].segment_time
    }
}
