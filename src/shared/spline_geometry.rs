//! Reine Geometrie-Funktionen rund um Splines: Polylinien, Längen, Resampling.
//!
//! Layer-neutral: kann von `app`, `io` und Host-Anwendungen (Renderer,
//! Follower) importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::BezierSpline;
use glam::Vec3;

/// Tastet die Spline gleichmäßig im Parameter ab.
///
/// Liefert `segment_count · steps_per_segment + 1` Punkte inklusive beider Enden.
pub fn sample_polyline(spline: &BezierSpline, steps_per_segment: usize) -> Vec<Vec3> {
    let steps = spline.segment_count() * steps_per_segment.max(1);
    (0..=steps)
        .map(|i| spline.point(i as f32 / steps as f32))
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Approximierte Spline-Länge über `samples` Polylinien-Segmente.
pub fn approx_length(spline: &BezierSpline, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = spline.point(0.0);
    for i in 1..=samples {
        let p = spline.point(i as f32 / samples as f32);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang einer Polyline.
pub fn resample_by_distance(polyline: &[Vec3], max_segment_length: f32) -> Vec<Vec3> {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return Vec::new();
    };
    if polyline.len() < 2 || max_segment_length <= 0.0 {
        return polyline.to_vec();
    }

    let total = polyline_length(polyline);
    if total < f32::EPSILON {
        return vec![first];
    }

    let segment_count = (total / max_segment_length).ceil().max(1.0) as usize;
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(first);

    let mut poly_idx = 0;
    let mut remainder = 0.0f32; // Rest-Distanz im aktuellen Polyline-Segment

    for _ in 1..segment_count {
        let mut needed = spacing;

        while poly_idx + 1 < polyline.len() {
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - remainder;

            if available >= needed {
                remainder += needed;
                let t = remainder / seg_len;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], t));
                break;
            }
            needed -= available;
            remainder = 0.0;
            poly_idx += 1;
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(last);
    result
}
