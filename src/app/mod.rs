//! Application-Layer: Editier-Fassade, Undo/Redo, Dateiaktionen und Bahn-Folger.

pub mod editor;
pub mod file_io;
pub mod follower;
pub mod history;

pub use editor::SplineEditor;
pub use file_io::{load_spline, save_spline};
pub use follower::{SplineWalker, WalkerMode, WalkerPose, WalkerTiming};
pub use history::{Snapshot, SplineHistory};
