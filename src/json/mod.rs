//! JSON Import/Export für Spline-Dokumente.
//!
//! Das Format spiegelt [`SplineDocument`](crate::core::SplineDocument): flache
//! Kontrollpunkt-Liste plus parallele Listen pro Anker.

pub mod parser;
pub mod writer;

pub use parser::parse_spline_document;
pub use writer::write_spline_document;
