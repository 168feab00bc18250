#![no_main]

use libfuzzer_sys::fuzz_target;
use rail_spline::{parse_spline_document, write_spline_document, SplineSettings};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spline) = parse_spline_document(text, SplineSettings::default()) else {
        return;
    };

    // Gültige Dokumente müssen auswertbar und wieder schreibbar sein
    for i in 0..=16 {
        let t = i as f32 / 16.0;
        assert!(!spline.direction(t).is_nan());
    }
    assert_eq!(spline.control_point_count(), spline.segment_count() * 3 + 1);
    let _ = write_spline_document(&spline);
});
