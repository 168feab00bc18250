//! Rail-Spline Library.
//! Kubische Bézier-Splines für Kamerafahrten, Flugbahnen und Schienen.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{
    load_spline, save_spline, SplineEditor, SplineHistory, SplineWalker, WalkerMode, WalkerPose,
    WalkerTiming,
};
pub use core::{
    look_rotation, AnchorRecord, BezierCurve, BezierSpline, ControlPointMode, EditOutcome,
    SplineDocument, SplineError, SplineSettings,
};
pub use json::{parse_spline_document, write_spline_document};
pub use shared::{approx_length, resample_by_distance, sample_polyline, SplineOptions};
