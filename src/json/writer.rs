//! Writer für Spline-Dokumente im JSON-Format.

use crate::core::BezierSpline;
use anyhow::Result;

/// Schreibt eine Spline als formatiertes JSON-Dokument.
pub fn write_spline_document(spline: &BezierSpline) -> Result<String> {
    let mut output = serde_json::to_string_pretty(&spline.to_document())?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_uses_loop_key() {
        let mut spline = BezierSpline::new();
        spline.set_loop(true);
        let json = write_spline_document(&spline).unwrap();
        assert!(json.contains("\"loop\": true"));
        assert!(json.contains("\"segment_times\""));
        assert!(json.ends_with('\n'));
    }
}
