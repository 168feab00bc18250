//! Fehlertypen der Spline-Operationen.

use thiserror::Error;

/// Fehler bei Zugriff auf oder Mutation einer Spline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Kontrollpunkt-Index liegt außerhalb von `0..len`
    #[error("Kontrollpunkt-Index {index} ausserhalb des gueltigen Bereichs (Anzahl {len})")]
    IndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Anzahl Kontrollpunkte
        len: usize,
    },

    /// Anker-Index liegt außerhalb von `0..count`
    #[error("Anker-Index {anchor} ausserhalb des gueltigen Bereichs (Anzahl {count})")]
    AnchorOutOfRange {
        /// Angefragter Anker
        anchor: usize,
        /// Anzahl gültiger Anker für diese Operation
        count: usize,
    },

    /// Segment-Dauer ist negativ oder nicht endlich
    #[error("Ungueltige Segment-Dauer: {0}")]
    InvalidSegmentTime(f32),

    /// Persistierte Daten verletzen die Struktur-Invarianten
    #[error("Ungueltiges Spline-Dokument: {0}")]
    InvalidDocument(String),
}

/// Ergebnis einer strukturellen Editier-Operation.
///
/// `Rejected` ist kein Fehler: das Tool ignoriert unzulässige Verkleinerungen
/// (z.B. Löschen des letzten verbleibenden Segments) stillschweigend.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Operation wurde vollständig ausgeführt
    Applied,
    /// Operation wurde abgelehnt, die Spline ist unverändert
    Rejected,
}

impl EditOutcome {
    /// True wenn die Operation ausgeführt wurde.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
