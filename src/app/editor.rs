//! Editier-Fassade für Authoring-Tools: Spline + Selektion + Undo/Redo.
//!
//! Jede erfolgreiche Mutation legt vorher einen Snapshot ab. Fehlgeschlagene
//! oder abgelehnte Operationen erzeugen keinen History-Eintrag.

use super::history::{Snapshot, SplineHistory};
use crate::core::{BezierSpline, ControlPointMode, EditOutcome, SplineError};
use crate::shared::SplineOptions;
use glam::Vec3;
use std::sync::Arc;

/// Spline-Editor-Zustand eines Authoring-Tools
#[derive(Debug)]
pub struct SplineEditor {
    spline: Arc<BezierSpline>,
    selected_point: Option<usize>,
    history: SplineHistory,
}

impl SplineEditor {
    /// Erstellt einen Editor für eine bestehende Spline.
    pub fn new(spline: BezierSpline, history_depth: usize) -> Self {
        Self {
            spline: Arc::new(spline),
            selected_point: None,
            history: SplineHistory::new_with_capacity(history_depth),
        }
    }

    /// Erstellt einen Editor mit Standard-Spline aus den Optionen.
    pub fn from_options(options: &SplineOptions) -> Self {
        Self::new(
            BezierSpline::with_settings(options.spline_settings()),
            options.history_depth,
        )
    }

    /// Aktuelle Spline (read-only).
    pub fn spline(&self) -> &BezierSpline {
        &self.spline
    }

    /// Geteilte Referenz, z.B. für einen Follower in einem anderen Subsystem.
    pub fn shared_spline(&self) -> Arc<BezierSpline> {
        Arc::clone(&self.spline)
    }

    /// Aktuell selektierter Kontrollpunkt.
    pub fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    /// Selektiert einen Kontrollpunkt (None hebt die Selektion auf).
    pub fn select_point(&mut self, index: Option<usize>) -> Result<(), SplineError> {
        if let Some(i) = index {
            self.spline.control_point(i)?;
        }
        self.selected_point = index;
        Ok(())
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Macht die letzte Änderung rückgängig.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.pop_undo_with_current(current) {
            Some(prev) => {
                self.apply(prev);
                true
            }
            None => false,
        }
    }

    /// Stellt die zuletzt rückgängig gemachte Änderung wieder her.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.pop_redo_with_current(current) {
            Some(next) => {
                self.apply(next);
                true
            }
            None => false,
        }
    }

    /// Verschiebt einen Kontrollpunkt.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) -> Result<(), SplineError> {
        self.spline.control_point(index)?;
        self.edit(|s| s.set_control_point(index, position))
    }

    /// Verschiebt den selektierten Kontrollpunkt; ohne Selektion passiert nichts.
    pub fn move_selected(&mut self, position: Vec3) -> Result<bool, SplineError> {
        let Some(index) = self.selected_point else {
            return Ok(false);
        };
        self.set_control_point(index, position)?;
        Ok(true)
    }

    /// Setzt den Modus des Ankers, zu dem `index` gehört.
    pub fn set_control_point_mode(
        &mut self,
        index: usize,
        mode: ControlPointMode,
    ) -> Result<(), SplineError> {
        self.spline.control_point(index)?;
        self.edit(|s| s.set_control_point_mode(index, mode))
    }

    /// Öffnet oder schließt die Spline.
    pub fn set_loop(&mut self, looped: bool) {
        if self.spline.is_loop() == looped {
            return;
        }
        self.record();
        Arc::make_mut(&mut self.spline).set_loop(looped);
    }

    /// Hängt ein Segment an und selektiert den neuen End-Anker.
    pub fn add_segment(&mut self) {
        self.record();
        Arc::make_mut(&mut self.spline).add_segment();
        self.selected_point = Some(self.spline.control_point_count() - 1);
    }

    /// Fügt hinter `anchor` einen Anker ein und selektiert ihn.
    pub fn insert_anchor_between(&mut self, anchor: usize) -> Result<(), SplineError> {
        if anchor >= self.spline.segment_count() {
            return Err(SplineError::AnchorOutOfRange {
                anchor,
                count: self.spline.segment_count(),
            });
        }
        self.edit(|s| s.insert_anchor_between(anchor))?;
        self.selected_point = Some((anchor + 1) * 3);
        Ok(())
    }

    /// Entfernt einen Anker; abgelehnte Operationen landen nicht in der History.
    pub fn remove_anchor(&mut self, anchor: usize) -> Result<EditOutcome, SplineError> {
        if anchor >= self.spline.anchor_count() {
            return Err(SplineError::AnchorOutOfRange {
                anchor,
                count: self.spline.anchor_count(),
            });
        }
        if self.spline.segment_count() < 2 {
            return Ok(EditOutcome::Rejected);
        }
        self.record();
        let outcome = Arc::make_mut(&mut self.spline).remove_anchor(anchor)?;
        if self
            .selected_point
            .is_some_and(|i| i >= self.spline.control_point_count())
        {
            self.selected_point = None;
        }
        Ok(outcome)
    }

    /// Führt eine bereits validierte Mutation mit History-Eintrag aus.
    fn edit(
        &mut self,
        op: impl FnOnce(&mut BezierSpline) -> Result<(), SplineError>,
    ) -> Result<(), SplineError> {
        let snap = self.snapshot();
        op(Arc::make_mut(&mut self.spline))?;
        self.history.record_snapshot(snap);
        Ok(())
    }

    fn record(&mut self) {
        let snap = self.snapshot();
        self.history.record_snapshot(snap);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.spline, self.selected_point)
    }

    fn apply(&mut self, snap: Snapshot) {
        self.spline = snap.spline;
        self.selected_point = snap.selected_point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_restores_previous_geometry() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        let before = editor.spline().clone();

        editor.set_control_point(1, Vec3::new(3.0, 2.0, 0.0)).unwrap();
        assert_ne!(editor.spline(), &before);

        assert!(editor.undo());
        assert_eq!(editor.spline(), &before);
        assert!(editor.redo());
        assert_eq!(
            editor.spline().control_point(1).unwrap(),
            Vec3::new(3.0, 2.0, 0.0)
        );
    }

    #[test]
    fn test_failed_edit_records_nothing() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        assert!(editor.set_control_point(42, Vec3::ONE).is_err());
        assert!(editor.insert_anchor_between(5).is_err());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_rejected_remove_records_nothing() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        assert_eq!(editor.remove_anchor(0), Ok(EditOutcome::Rejected));
        assert!(!editor.can_undo());
        assert_eq!(editor.spline().control_point_count(), 4);
    }

    #[test]
    fn test_add_segment_selects_new_end() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        editor.add_segment();
        assert_eq!(editor.selected_point(), Some(6));

        assert!(editor.remove_anchor(2).unwrap().is_applied());
        assert_eq!(editor.selected_point(), None);

        assert!(editor.undo());
        assert_eq!(editor.selected_point(), Some(6));
        assert_eq!(editor.spline().segment_count(), 2);
    }

    #[test]
    fn test_move_selected_without_selection() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        assert_eq!(editor.move_selected(Vec3::ONE), Ok(false));
        editor.select_point(Some(2)).unwrap();
        assert_eq!(editor.move_selected(Vec3::ONE), Ok(true));
        assert_eq!(editor.spline().control_point(2).unwrap(), Vec3::ONE);
        assert!(editor.select_point(Some(4)).is_err());
    }

    #[test]
    fn test_shared_spline_is_not_mutated_by_later_edits() {
        let mut editor = SplineEditor::new(BezierSpline::new(), 10);
        let shared = editor.shared_spline();
        editor.set_loop(true);
        assert!(!shared.is_loop());
        assert!(editor.spline().is_loop());
    }
}
