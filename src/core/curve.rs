//! Einzelne quadratische Bézier-Kurve aus drei Kontrollpunkten.

use super::bezier::{quadratic_first_derivative, quadratic_point};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Quadratische Bézier-Kurve (P0 → P2, gesteuert über P1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    /// Kontrollpunkte in lokalen Koordinaten
    pub points: [Vec3; 3],
}

impl BezierCurve {
    /// Erstellt eine Kurve aus drei Kontrollpunkten
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Setzt die Kontrollpunkte auf die Standard-Gerade entlang +X zurück.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Position bei `t` (geklemmt auf [0, 1]).
    pub fn point(&self, t: f32) -> Vec3 {
        let [p0, p1, p2] = self.points;
        quadratic_point(p0, p1, p2, t)
    }

    /// Erste Ableitung bei `t`.
    pub fn velocity(&self, t: f32) -> Vec3 {
        let [p0, p1, p2] = self.points;
        quadratic_first_derivative(p0, p1, p2, t)
    }

    /// Normalisierte Richtung bei `t`; `Vec3::ZERO` bei degenerierter Kurve.
    pub fn direction(&self, t: f32) -> Vec3 {
        self.velocity(t).normalize_or_zero()
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        )
    }
}
