//! IERS `finals2000A` fixed-column reader.
//!
//! Only the Bulletin A columns are read: MJD, polar motion, UT1−UTC and LOD.
//! Rows missing any of the first four are skipped.

use super::record::{EopRecord, EopSource};
use crate::{CoordError, CoordResult};
use tracing::debug;

const MIN_LINE_LEN: usize = 68;
const UT1_FLAG_COLUMN: usize = 57;

pub fn parse_finals(content: &str) -> CoordResult<Vec<EopRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        match parse_finals_line(line) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if records.is_empty() {
        return Err(CoordError::parse(
            "No valid records found in finals2000A data",
        ));
    }

    debug!(records = records.len(), skipped, "parsed finals2000A");
    records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
    Ok(records)
}

pub fn parse_finals_line(line: &str) -> Option<EopRecord> {
    if line.len() < MIN_LINE_LEN {
        return None;
    }

    let mjd = parse_field(line, 7, 15)?;
    let xp = parse_field(line, 18, 27)?;
    let yp = parse_field(line, 37, 46)?;
    let ut1_utc = parse_field(line, 58, 68)?;
    // LOD is published in milliseconds.
    let lod = parse_field(line, 79, 86).unwrap_or(0.0) * 0.001;

    let source = match line.as_bytes().get(UT1_FLAG_COLUMN) {
        Some(b'P') => EopSource::IersPrediction,
        _ => EopSource::IersFinals,
    };

    EopRecord::new(mjd, xp, yp, ut1_utc, lod)
        .ok()
        .map(|record| record.with_source(source))
}

fn parse_field(line: &str, start: usize, end: usize) -> Option<f64> {
    let s = line.get(start..end.min(line.len()))?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
