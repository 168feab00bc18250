//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Konfiguration und Spline-Geometrie, die von `app`, `io` und der Binary
//! gleichermaßen genutzt werden.

pub mod options;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use options::{ADDED_POINT_DISTANCE, DEFAULT_SEGMENT_TIME};
pub use spline_geometry::{approx_length, polyline_length, resample_by_distance, sample_polyline};
