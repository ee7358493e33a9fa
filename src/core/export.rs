// PolyPlot - core/export.rs
//
// CSV and JSON export of the curve sampled at integer x.
// Core layer: writes to any Write trait object.

use crate::core::polynomial::Polynomial;
use crate::util::constants;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// One evaluated point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Evaluate `polynomial` at every integer in `from..=to`.
///
/// An inverted range yields no points.
pub fn sample_integers(
    polynomial: &Polynomial,
    from: i64,
    to: i64,
) -> Result<Vec<SamplePoint>, ExportError> {
    if from > to {
        return Ok(Vec::new());
    }
    let count = i128::from(to) - i128::from(from) + 1;
    if count > i128::from(constants::MAX_EXPORT_POINTS) {
        return Err(ExportError::RangeTooLarge {
            from,
            to,
            max: constants::MAX_EXPORT_POINTS,
        });
    }
    Ok((from..=to)
        .map(|n| {
            let x = n as f64;
            SamplePoint {
                x,
                y: polynomial.eval(x),
            }
        })
        .collect())
}

/// Export points to CSV with an `x,y` header.
pub fn export_csv<W: Write>(points: &[SamplePoint], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if points.is_empty() {
        csv_writer
            .write_record(["x", "y"])
            .map_err(|e| ExportError::Csv { source: e })?;
    }
    for point in points {
        csv_writer
            .serialize(point)
            .map_err(|e| ExportError::Csv { source: e })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(points.len())
}

/// Export points to JSON format (array of objects).
pub fn export_json<W: Write>(points: &[SamplePoint], mut writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, points)
        .map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ExportError::Io { source: e })?;
    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::polynomial::SEXTIC;

    #[test]
    fn test_sample_integers_inclusive() {
        let points = sample_integers(&SEXTIC, -1, 1).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].x, 0.0);
        assert!((points[1].y + 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(sample_integers(&SEXTIC, 3, 2).unwrap().is_empty());
    }

    #[test]
    fn test_huge_range_rejected() {
        let err = sample_integers(&SEXTIC, i64::MIN, i64::MAX).unwrap_err();
        assert!(matches!(err, ExportError::RangeTooLarge { .. }));
    }

    #[test]
    fn test_csv_export() {
        let points = sample_integers(&SEXTIC, 0, 1).unwrap();
        let mut buf = Vec::new();
        let count = export_csv(&points, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "x,y");
        assert!(lines[1].starts_with("0.0,-0.8"), "{output}");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_export_empty_still_has_header() {
        let mut buf = Vec::new();
        assert_eq!(export_csv(&[], &mut buf).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n");
    }

    #[test]
    fn test_json_export() {
        let points = sample_integers(&SEXTIC, 1, 1).unwrap();
        let mut buf = Vec::new();
        let count = export_json(&points, &mut buf).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["x"], 1.0);
        assert!((value[0]["y"].as_f64().unwrap() - 0.4).abs() < 1e-9);
    }
}
