//! Tangenten-Modus eines Ankers.

use serde::{Deserialize, Serialize};

/// Legt fest, wie ein Tangenten-Handle auf Änderungen am Gegen-Handle reagiert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlPointMode {
    /// Beide Handles sind unabhängig
    #[default]
    Free,
    /// Handles bleiben kollinear, jedes behält seine eigene Länge
    Aligned,
    /// Handles bleiben kollinear und gleich lang (Punktspiegelung am Anker)
    Mirrored,
}

impl ControlPointMode {
    /// True wenn der Modus Geometrie erzwingt.
    pub fn is_constrained(self) -> bool {
        !matches!(self, Self::Free)
    }
}
