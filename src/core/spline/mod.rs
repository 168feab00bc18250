//! Kette kubischer Bézier-Segmente mit Tangenten-Modi, Loop und Segment-Zeiten.
//!
//! Die Spline speichert eine geordnete Liste von [`AnchorRecord`]s. Die flache
//! Kontrollpunkt-Sicht (`3·Segmente + 1` Punkte) wird daraus abgeleitet:
//!
//! ```text
//! i % 3 == 0  →  anchors[i / 3].position
//! i % 3 == 1  →  anchors[i / 3].handle_out
//! i % 3 == 2  →  anchors[(i + 1) / 3].handle_in
//! ```
//!
//! Mutationen laufen ausschließlich über Setter, damit Modus-Erzwingung und
//! Loop-Naht als Seiteneffekt greifen.

mod editing;
mod modes;
mod timing;


use super::bezier::{cubic_first_derivative, cubic_point};
use super::{ControlPointMode, SplineError};
use glam::{Affine3A, Quat, Vec3};

/// Mindestanzahl Anker (ein Segment).
pub const MIN_ANCHOR_COUNT: usize = 2;

/// Ein Anker samt Handles, Modus, Orientierung und Dauer des ausgehenden Segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRecord {
    /// Position, durch die die Spline exakt verläuft
    pub position: Vec3,
    /// Eingehendes Tangenten-Handle (beim ersten Anker ohne Wirkung)
    pub handle_in: Vec3,
    /// Ausgehendes Tangenten-Handle (beim letzten Anker ohne Wirkung)
    pub handle_out: Vec3,
    /// Tangenten-Modus
    pub mode: ControlPointMode,
    /// Orientierung für die Up-Interpolation
    pub orientation: Quat,
    /// Dauer des ausgehenden Segments in Sekunden (beim letzten Anker 0)
    pub segment_time: f32,
}

impl AnchorRecord {
    /// Anker ohne Ausdehnung der Handles an `position`.
    pub fn at(position: Vec3, mode: ControlPointMode) -> Self {
        Self {
            position,
            handle_in: position,
            handle_out: position,
            mode,
            orientation: Quat::IDENTITY,
            segment_time: 0.0,
        }
    }
}

/// Editier-Parameter, die nicht Teil der Geometrie sind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSettings {
    /// Abstand neu erzeugter Handles/Anker (Vielfache bei `add_segment`)
    pub added_point_distance: f32,
    /// Dauer eines neuen Segments, wenn keine Vorlage existiert
    pub default_segment_time: f32,
    /// Modus neu eingefügter Anker
    pub new_anchor_mode: ControlPointMode,
}

impl Default for SplineSettings {
    fn default() -> Self {
        Self {
            added_point_distance: 3.0,
            default_segment_time: 1.0,
            new_anchor_mode: ControlPointMode::Aligned,
        }
    }
}

/// Rolle eines flachen Kontrollpunkt-Index innerhalb der Anker-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Anchor(usize),
    HandleOut(usize),
    HandleIn(usize),
}

impl Slot {
    fn of(index: usize) -> Self {
        match index % 3 {
            0 => Self::Anchor(index / 3),
            1 => Self::HandleOut(index / 3),
            _ => Self::HandleIn((index + 1) / 3),
        }
    }
}

/// Kubische Bézier-Spline in lokalen Koordinaten
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    anchors: Vec<AnchorRecord>,
    looped: bool,
    settings: SplineSettings,
}

impl BezierSpline {
    /// Erstellt die Standard-Spline mit Standard-Einstellungen.
    pub fn new() -> Self {
        Self::with_settings(SplineSettings::default())
    }

    /// Erstellt die Standard-Spline: ein gerades Segment entlang +X.
    ///
    /// Punkte im Abstand `added_point_distance`, beide Anker im Modus
    /// `new_anchor_mode`, erstes Segment mit `default_segment_time`.
    pub fn with_settings(settings: SplineSettings) -> Self {
        let step = Vec3::X * settings.added_point_distance;
        let mut start = AnchorRecord::at(Vec3::ZERO, settings.new_anchor_mode);
        start.handle_out = step;
        start.segment_time = settings.default_segment_time;
        let mut end = AnchorRecord::at(step * 3.0, settings.new_anchor_mode);
        end.handle_in = step * 2.0;

        Self {
            anchors: vec![start, end],
            looped: false,
            settings,
        }
    }

    /// Baut eine Spline direkt aus Ankern (bereits validiert).
    pub(crate) fn from_parts(
        anchors: Vec<AnchorRecord>,
        looped: bool,
        settings: SplineSettings,
    ) -> Self {
        debug_assert!(anchors.len() >= MIN_ANCHOR_COUNT);
        Self {
            anchors,
            looped,
            settings,
        }
    }

    // ── Struktur ────────────────────────────────────────────────────

    /// Anzahl Anker (`Segmente + 1`).
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Anzahl kubischer Segmente.
    pub fn segment_count(&self) -> usize {
        self.anchors.len() - 1
    }

    /// Anzahl Kontrollpunkte in der flachen Sicht (`3·Segmente + 1`).
    pub fn control_point_count(&self) -> usize {
        self.segment_count() * 3 + 1
    }

    /// Read-only-Zugriff auf alle Anker (z.B. für Renderer).
    pub fn anchors(&self) -> &[AnchorRecord] {
        &self.anchors
    }

    /// True wenn die Spline geschlossen ist.
    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Aktive Editier-Einstellungen.
    pub fn settings(&self) -> &SplineSettings {
        &self.settings
    }

    /// Ersetzt die Editier-Einstellungen (Geometrie bleibt unverändert).
    pub fn set_settings(&mut self, settings: SplineSettings) {
        self.settings = settings;
    }

    /// Alle Kontrollpunkte in flacher Reihenfolge.
    pub fn control_points(&self) -> Vec<Vec3> {
        (0..self.control_point_count()).map(|i| self.get(i)).collect()
    }

    /// Position eines Kontrollpunkts.
    pub fn control_point(&self, index: usize) -> Result<Vec3, SplineError> {
        self.check_index(index)?;
        Ok(self.get(index))
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Position bei `t ∈ [0, 1]` (außerhalb geklemmt).
    pub fn point(&self, t: f32) -> Vec3 {
        let (segment, local) = self.locate(t);
        let [p0, p1, p2, p3] = self.segment_points(segment);
        cubic_point(p0, p1, p2, p3, local)
    }

    /// Erste Ableitung nach dem Segment-Parameter bei `t`.
    pub fn velocity(&self, t: f32) -> Vec3 {
        let (segment, local) = self.locate(t);
        let [p0, p1, p2, p3] = self.segment_points(segment);
        cubic_first_derivative(p0, p1, p2, p3, local)
    }

    /// Normalisierte Richtung bei `t`; `Vec3::ZERO` bei verschwindender Geschwindigkeit.
    pub fn direction(&self, t: f32) -> Vec3 {
        self.velocity(t).normalize_or_zero()
    }

    /// Position bei `t`, transformiert in den Raum des Aufrufers.
    pub fn point_in(&self, transform: &Affine3A, t: f32) -> Vec3 {
        transform.transform_point3(self.point(t))
    }

    /// Richtung bei `t`, transformiert in den Raum des Aufrufers.
    pub fn direction_in(&self, transform: &Affine3A, t: f32) -> Vec3 {
        transform
            .transform_vector3(self.velocity(t))
            .normalize_or_zero()
    }

    /// Die vier Kontrollpunkte eines Segments.
    pub fn segment_points(&self, segment: usize) -> [Vec3; 4] {
        let start = &self.anchors[segment];
        let end = &self.anchors[segment + 1];
        [start.position, start.handle_out, end.handle_in, end.position]
    }

    /// Zerlegt `t` in Segment-Index und lokalen Parameter.
    ///
    /// `t >= 1` wählt das letzte Segment mit lokalem Parameter 1, NaN zählt als 0.
    fn locate(&self, t: f32) -> (usize, f32) {
        let count = self.segment_count();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return (count - 1, 1.0);
        }
        let scaled = t * count as f32;
        let segment = (scaled.floor() as usize).min(count - 1);
        (segment, scaled - segment as f32)
    }

    // ── Flacher Index ───────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), SplineError> {
        let len = self.control_point_count();
        if index < len {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange { index, len })
        }
    }

    fn check_anchor(&self, anchor: usize) -> Result<(), SplineError> {
        let count = self.anchor_count();
        if anchor < count {
            Ok(())
        } else {
            Err(SplineError::AnchorOutOfRange { anchor, count })
        }
    }

    fn get(&self, index: usize) -> Vec3 {
        match Slot::of(index) {
            Slot::Anchor(a) => self.anchors[a].position,
            Slot::HandleOut(a) => self.anchors[a].handle_out,
            Slot::HandleIn(a) => self.anchors[a].handle_in,
        }
    }

    fn put(&mut self, index: usize, value: Vec3) {
        match Slot::of(index) {
            Slot::Anchor(a) => self.anchors[a].position = value,
            Slot::HandleOut(a) => self.anchors[a].handle_out = value,
            Slot::HandleIn(a) => self.anchors[a].handle_in = value,
        }
    }

    fn shift(&mut self, index: usize, delta: Vec3) {
        let moved = self.get(index) + delta;
        self.put(index, moved);
    }

    fn last_anchor_index(&self) -> usize {
        self.anchors.len() - 1
    }

    /// Legt die wirkungslosen Handles (`handle_in` des ersten, `handle_out`
    /// des letzten Ankers) auf ihren Anker.
    fn settle_dormant_handles(&mut self) {
        let last = self.last_anchor_index();
        let first = &mut self.anchors[0];
        first.handle_in = first.position;
        let tail = &mut self.anchors[last];
        tail.handle_out = tail.position;
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}
