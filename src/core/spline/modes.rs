//! Kontrollpunkt-Setter, Tangenten-Modi und Loop-Naht.

use super::{BezierSpline, Slot};
use crate::core::{ControlPointMode, SplineError};
use glam::Vec3;

/// Zulässige Abweichung beim Prüfen geladener Tangenten.
const MODE_TOLERANCE: f32 = 1e-4;

impl BezierSpline {
    /// Verschiebt einen Kontrollpunkt.
    ///
    /// Ein Anker nimmt seine beiden Handles um dasselbe Delta mit (bei Loop
    /// auch das Handle jenseits der Naht). Danach wird der Modus erzwungen.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) -> Result<(), SplineError> {
        self.check_index(index)?;
        self.move_control_point(index, position);
        Ok(())
    }

    /// Modus des Ankers, zu dem `index` gehört.
    pub fn control_point_mode(&self, index: usize) -> Result<ControlPointMode, SplineError> {
        self.check_index(index)?;
        Ok(self.anchors[(index + 1) / 3].mode)
    }

    /// Setzt den Modus des Ankers, zu dem `index` gehört, und erzwingt die Geometrie.
    ///
    /// Bei Loop teilen sich erster und letzter Anker den Modus.
    pub fn set_control_point_mode(
        &mut self,
        index: usize,
        mode: ControlPointMode,
    ) -> Result<(), SplineError> {
        self.check_index(index)?;
        let mode_index = (index + 1) / 3;
        let last = self.last_anchor_index();
        self.anchors[mode_index].mode = mode;
        if self.looped {
            if mode_index == 0 {
                self.anchors[last].mode = mode;
            } else if mode_index == last {
                self.anchors[0].mode = mode;
            }
        }
        self.enforce_mode_at(index);
        Ok(())
    }

    /// Erzwingt den Modus des Ankers, zu dem `index` gehört.
    pub fn enforce_mode(&mut self, index: usize) -> Result<(), SplineError> {
        self.check_index(index)?;
        self.enforce_mode_at(index);
        Ok(())
    }

    /// Öffnet oder schließt die Spline.
    ///
    /// Beim Schließen übernimmt der letzte Anker Modus und Orientierung des
    /// ersten, die Naht wird über `set_control_point(0, ..)` geschlossen.
    pub fn set_loop(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            let first = self.anchors[0];
            let last = self.last_anchor_index();
            self.anchors[last].mode = first.mode;
            self.anchors[last].orientation = first.orientation;
            self.move_control_point(0, first.position);
        }
    }

    pub(super) fn move_control_point(&mut self, index: usize, position: Vec3) {
        if let Slot::Anchor(_) = Slot::of(index) {
            let len = self.control_point_count();
            let delta = position - self.get(index);
            if self.looped {
                if index == 0 {
                    self.shift(1, delta);
                    self.shift(len - 2, delta);
                    self.put(len - 1, position);
                } else if index == len - 1 {
                    self.put(0, position);
                    self.shift(1, delta);
                    self.shift(index - 1, delta);
                } else {
                    self.shift(index - 1, delta);
                    self.shift(index + 1, delta);
                }
            } else {
                if index > 0 {
                    self.shift(index - 1, delta);
                }
                if index + 1 < len {
                    self.shift(index + 1, delta);
                }
            }
        }
        self.put(index, position);
        self.enforce_mode_at(index);
        self.settle_dormant_handles();
    }

    /// Richtet das "enforced" Handle am "fixed" Handle aus.
    ///
    /// Liegt `index` auf oder vor dem Anker, ist das eingehende Handle fixiert,
    /// sonst das ausgehende. `Mirrored` spiegelt, `Aligned` übernimmt nur die
    /// Richtung und behält die bisherige Länge. Liegt das fixierte Handle auf
    /// dem Anker, bleibt alles unverändert.
    pub(super) fn enforce_mode_at(&mut self, index: usize) {
        let mode_index = (index + 1) / 3;
        let mode = self.anchors[mode_index].mode;
        let is_endpoint = mode_index == 0 || mode_index == self.last_anchor_index();
        if !mode.is_constrained() || (!self.looped && is_endpoint) {
            return;
        }

        let len = self.control_point_count();
        let middle = mode_index * 3;
        let before = if middle == 0 { len - 2 } else { middle - 1 };
        let after = if middle + 1 >= len { 1 } else { middle + 1 };
        let (fixed, enforced) = if index <= middle {
            (before, after)
        } else {
            (after, before)
        };

        let anchor = self.get(middle);
        let fixed_offset = anchor - self.get(fixed);
        let enforced_offset = match mode {
            ControlPointMode::Mirrored => fixed_offset,
            ControlPointMode::Aligned => match fixed_offset.try_normalize() {
                Some(dir) => dir * anchor.distance(self.get(enforced)),
                None => return,
            },
            ControlPointMode::Free => return,
        };
        self.put(enforced, anchor + enforced_offset);
    }

    /// Prüft, ob alle erzwungenen Anker ihren Modus bereits erfüllen.
    ///
    /// `Mirrored`: Handles punktsymmetrisch. `Aligned`: Handles kollinear und
    /// entgegengesetzt (ein Handle auf dem Anker ist erlaubt). Offene Enden
    /// werden nicht geprüft.
    pub(crate) fn check_tangent_modes(&self) -> Result<(), SplineError> {
        let len = self.control_point_count();
        let last = self.last_anchor_index();
        for (a, record) in self.anchors.iter().enumerate() {
            let is_endpoint = a == 0 || a == last;
            let unchecked_end = is_endpoint && (!self.looped || a == last);
            if !record.mode.is_constrained() || unchecked_end {
                continue;
            }
            let middle = a * 3;
            let before = if middle == 0 { len - 2 } else { middle - 1 };
            let incoming = self.get(before) - record.position;
            let outgoing = self.get(middle + 1) - record.position;
            let scale = incoming.length().max(outgoing.length()).max(1.0);

            let satisfied = match record.mode {
                ControlPointMode::Mirrored => {
                    (incoming + outgoing).length() <= MODE_TOLERANCE * scale
                }
                ControlPointMode::Aligned => {
                    match (incoming.try_normalize(), outgoing.try_normalize()) {
                        (Some(i), Some(o)) => i.dot(o) <= -1.0 + MODE_TOLERANCE,
                        _ => true,
                    }
                }
                ControlPointMode::Free => true,
            };
            if !satisfied {
                return Err(SplineError::InvalidDocument(format!(
                    "Anker {a} verletzt Modus {:?}",
                    record.mode
                )));
            }
        }
        Ok(())
    }

    /// Schließt die Loop-Naht: letzter Anker folgt dem ersten.
    ///
    /// Das eingehende Handle des letzten Ankers wandert um dasselbe Delta mit.
    pub(super) fn close_loop_seam(&mut self) {
        let first = self.anchors[0];
        let last = self.last_anchor_index();
        let record = &mut self.anchors[last];
        let delta = first.position - record.position;
        record.handle_in += delta;
        record.position = first.position;
        record.mode = first.mode;
        record.orientation = first.orientation;
        self.enforce_mode_at(0);
        self.settle_dormant_handles();
    }
}
