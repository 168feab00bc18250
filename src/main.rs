//! Rail-Spline CLI.
//!
//! Lädt ein Spline-Dokument (oder die Standard-Spline), gibt eine Übersicht
//! aus und tastet die Bahn gleichmäßig ab.

use rail_spline::{approx_length, load_spline, sample_polyline, BezierSpline, SplineOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Rail-Spline v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = SplineOptions::config_path();
    let options = SplineOptions::load_from_file(&config_path);

    let spline = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_spline(&path, options.spline_settings())?,
        None => {
            log::info!("Keine Datei angegeben, verwende Standard-Spline");
            BezierSpline::with_settings(options.spline_settings())
        }
    };

    print_summary(&spline, &options);
    Ok(())
}

fn print_summary(spline: &BezierSpline, options: &SplineOptions) {
    let samples = spline.segment_count() * options.samples_per_segment.max(1);
    println!("Segmente:       {}", spline.segment_count());
    println!("Kontrollpunkte: {}", spline.control_point_count());
    println!("Loop:           {}", spline.is_loop());
    println!("Gesamtdauer:    {:.3}s", spline.total_time());
    println!("Laenge (ca.):   {:.3}", approx_length(spline, samples));

    let points = sample_polyline(spline, options.samples_per_segment);
    let last = points.len().saturating_sub(1).max(1);
    for (i, p) in points.iter().enumerate() {
        let t = i as f32 / last as f32;
        let d = spline.direction(t);
        println!(
            "t={:.3}  pos=({:.3}, {:.3}, {:.3})  dir=({:.3}, {:.3}, {:.3})",
            t, p.x, p.y, p.z, d.x, d.y, d.z
        );
    }
}
