//! Core-Domänentypen: Bézier-Formeln, Kurve, Spline, Persistenz-Dokument.

pub mod bezier;
pub mod control_point_mode;
pub mod curve;
pub mod document;
pub mod error;
pub mod orientation;
pub mod spline;

pub use control_point_mode::ControlPointMode;
pub use curve::BezierCurve;
pub use document::SplineDocument;
pub use error::{EditOutcome, SplineError};
pub use orientation::look_rotation;
pub use spline::{AnchorRecord, BezierSpline, SplineSettings, MIN_ANCHOR_COUNT};
