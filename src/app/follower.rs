//! Tick-getriebener Bahn-Folger für Kameras, Schiffe und Projektile.
//!
//! Der Walker besitzt nur seinen Fortschritt; die Spline wird pro Tick
//! geliehen, damit Editor und Folger unabhängig voneinander leben können.

use crate::core::BezierSpline;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Verhalten am Ende der Spline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalkerMode {
    /// Bleibt am Ende stehen
    #[default]
    Once,
    /// Springt zurück an den Anfang
    Loop,
    /// Läuft abwechselnd vor und zurück
    PingPong,
}

/// Zeitbasis für den Fortschritt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalkerTiming {
    /// Gleichmäßiger Parameter-Fortschritt über `duration`
    #[default]
    Uniform,
    /// Fortschritt nach den Segment-Dauern der Spline
    SegmentTimes,
}

/// Ergebnis eines Ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerPose {
    /// Position auf der Spline (lokale Koordinaten)
    pub position: Vec3,
    /// Normalisierte Bewegungsrichtung (rückwärts bei PingPong invertiert)
    pub direction: Vec3,
    /// Interpolierte Anker-Orientierung
    pub orientation: Quat,
    /// Spline-Parameter in `[0, 1]`
    pub progress: f32,
}

/// Folgt einer Spline über die Zeit
#[derive(Debug, Clone, PartialEq)]
pub struct SplineWalker {
    /// Gesamtdauer eines Durchlaufs bei `Uniform` (Sekunden)
    pub duration: f32,
    /// Verhalten am Ende
    pub mode: WalkerMode,
    /// Zeitbasis
    pub timing: WalkerTiming,
    progress: f32,
    going_forward: bool,
}

impl SplineWalker {
    /// Erstellt einen Walker am Spline-Anfang.
    pub fn new(duration: f32, mode: WalkerMode, timing: WalkerTiming) -> Self {
        Self {
            duration,
            mode,
            timing,
            progress: 0.0,
            going_forward: true,
        }
    }

    /// Aktueller Fortschritt in der jeweiligen Zeitbasis (`[0, 1]`).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// True solange der Walker vorwärts läuft.
    pub fn is_going_forward(&self) -> bool {
        self.going_forward
    }

    /// True wenn ein `Once`-Walker das Ende erreicht hat.
    pub fn is_finished(&self) -> bool {
        self.mode == WalkerMode::Once && self.progress >= 1.0
    }

    /// Setzt den Walker an den Anfang zurück.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.going_forward = true;
    }

    /// Rückt um `dt` Sekunden vor und liefert die neue Pose.
    pub fn tick(&mut self, spline: &BezierSpline, dt: f32) -> WalkerPose {
        let period = self.period(spline);
        if period > 0.0 && dt.is_finite() && dt > 0.0 {
            self.advance(dt / period);
        }
        self.pose(spline)
    }

    /// Pose am aktuellen Fortschritt ohne Vorrücken.
    pub fn pose(&self, spline: &BezierSpline) -> WalkerPose {
        let t = match self.timing {
            WalkerTiming::SegmentTimes if spline.total_time() > 0.0 => {
                spline.percent_at_time(self.progress * spline.total_time())
            }
            _ => self.progress,
        };
        let direction = spline.direction(t);
        WalkerPose {
            position: spline.point(t),
            direction: if self.going_forward {
                direction
            } else {
                -direction
            },
            orientation: spline.orientation_at_percent(t),
            progress: t,
        }
    }

    /// Dauer eines Durchlaufs in Sekunden.
    fn period(&self, spline: &BezierSpline) -> f32 {
        match self.timing {
            WalkerTiming::SegmentTimes if spline.total_time() > 0.0 => spline.total_time(),
            _ => self.duration,
        }
    }

    fn advance(&mut self, step: f32) {
        if self.going_forward {
            self.progress += step;
            if self.progress > 1.0 {
                match self.mode {
                    WalkerMode::Once => self.progress = 1.0,
                    WalkerMode::Loop => self.progress = self.progress.fract(),
                    WalkerMode::PingPong => {
                        self.progress = (2.0 - self.progress).max(0.0);
                        self.going_forward = false;
                    }
                }
            }
        } else {
            self.progress -= step;
            if self.progress < 0.0 {
                self.progress = (-self.progress).min(1.0);
                self.going_forward = true;
            }
        }
    }
}
