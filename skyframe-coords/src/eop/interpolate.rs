use super::record::{EopParameters, EopRecord, EopSource};
use crate::constants::DEFAULT_EOP_MAX_GAP_DAYS;
use crate::{CoordError, CoordResult};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LAGRANGE_POINTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterpolationMethod {
    #[default]
    Linear,

    /// Five-point Lagrange centred on the nearest record.
    Lagrange,
}

/// Daily EOP samples with interpolation between them.
///
/// UT1−UTC jumps by one second across a leap second; interpolation unwraps the
/// jump so values between the two records stay on the earlier side.
#[derive(Debug, Clone)]
pub struct EopTable {
    records: Vec<EopRecord>,

    method: InterpolationMethod,

    max_gap_days: f64,
}

impl EopTable {
    pub fn new(mut records: Vec<EopRecord>) -> Self {
        records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));

        Self {
            records,
            method: InterpolationMethod::Linear,
            max_gap_days: DEFAULT_EOP_MAX_GAP_DAYS,
        }
    }

    pub fn with_method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_gap(mut self, max_gap_days: f64) -> Self {
        self.max_gap_days = max_gap_days;
        self
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    pub fn get(&self, mjd: f64) -> CoordResult<EopParameters> {
        if self.records.is_empty() {
            return Err(CoordError::data_unavailable(
                "No EOP records available for interpolation",
            ));
        }

        let (before_idx, after_idx) = self.find_interpolation_interval(mjd)?;

        for idx in [before_idx, after_idx] {
            let record = &self.records[idx];
            if (record.mjd - mjd).abs() < 1e-10 {
                return Ok(record.to_parameters());
            }
        }

        let gap = self.records[after_idx].mjd - self.records[before_idx].mjd;
        if gap > self.max_gap_days {
            return Err(CoordError::data_unavailable(format!(
                "Gap of {:.1} days exceeds maximum interpolation gap of {:.1} days",
                gap, self.max_gap_days
            )));
        }

        trace!(mjd, method = ?self.method, "interpolating EOP");
        match self.method {
            InterpolationMethod::Linear => Ok(self.linear_interpolate(mjd, before_idx, after_idx)),
            InterpolationMethod::Lagrange => self.lagrange_interpolate(mjd, before_idx),
        }
    }

    fn find_interpolation_interval(&self, mjd: f64) -> CoordResult<(usize, usize)> {
        let first = &self.records[0];
        let last = &self.records[self.records.len() - 1];

        if mjd.is_nan() || mjd < first.mjd {
            return Err(CoordError::data_unavailable(format!(
                "MJD {:.1} is before first available record (MJD {:.1})",
                mjd, first.mjd
            )));
        }

        if mjd > last.mjd {
            return Err(CoordError::data_unavailable(format!(
                "MJD {:.1} is after last available record (MJD {:.1})",
                mjd, last.mjd
            )));
        }

        if self.records.len() == 1 {
            return Ok((0, 0));
        }

        let mut left = 0;
        let mut right = self.records.len() - 1;

        while right - left > 1 {
            let mid = (left + right) / 2;
            if self.records[mid].mjd <= mjd {
                left = mid;
            } else {
                right = mid;
            }
        }

        Ok((left, right))
    }

    fn linear_interpolate(&self, mjd: f64, before_idx: usize, after_idx: usize) -> EopParameters {
        let p1 = self.records[before_idx].to_parameters();
        let p2 = self.records[after_idx].to_parameters();

        let t = (mjd - p1.mjd) / (p2.mjd - p1.mjd);
        let ut1_after = unwrap_leap_second(p1.ut1_utc, p2.ut1_utc);

        EopParameters::new(
            mjd,
            p1.x_p + t * (p2.x_p - p1.x_p),
            p1.y_p + t * (p2.y_p - p1.y_p),
            p1.ut1_utc + t * (ut1_after - p1.ut1_utc),
            p1.lod + t * (p2.lod - p1.lod),
            EopSource::Interpolated,
        )
    }

    fn lagrange_interpolate(&self, mjd: f64, before_idx: usize) -> CoordResult<EopParameters> {
        if self.records.len() < LAGRANGE_POINTS {
            return Err(CoordError::data_unavailable(format!(
                "Not enough records for {}-point Lagrange interpolation",
                LAGRANGE_POINTS
            )));
        }

        let center_idx = self.find_center_index(mjd);
        let start = center_idx
            .saturating_sub(LAGRANGE_POINTS / 2)
            .min(self.records.len() - LAGRANGE_POINTS);

        let reference = self.records[before_idx].ut1_utc();
        let points: Vec<EopParameters> = self.records[start..start + LAGRANGE_POINTS]
            .iter()
            .map(|r| {
                let mut p = r.to_parameters();
                p.ut1_utc = unwrap_leap_second(reference, p.ut1_utc);
                p
            })
            .collect();

        Ok(EopParameters::new(
            mjd,
            lagrange_value(mjd, &points, |p| p.x_p),
            lagrange_value(mjd, &points, |p| p.y_p),
            lagrange_value(mjd, &points, |p| p.ut1_utc),
            lagrange_value(mjd, &points, |p| p.lod),
            EopSource::Interpolated,
        ))
    }

    fn find_center_index(&self, mjd: f64) -> usize {
        let mut best_idx = 0;
        let mut best_diff = (self.records[0].mjd - mjd).abs();

        for (idx, record) in self.records.iter().enumerate() {
            let diff = (record.mjd - mjd).abs();
            if diff < best_diff {
                best_diff = diff;
                best_idx = idx;
            }
        }

        best_idx
    }

    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.mjd, last.mjd)),
            _ => None,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Shifts `value` by whole seconds so it lies within half a second of `reference`.
fn unwrap_leap_second(reference: f64, value: f64) -> f64 {
    value - (value - reference).round()
}

fn lagrange_value<F>(mjd: f64, points: &[EopParameters], extract: F) -> f64
where
    F: Fn(&EopParameters) -> f64,
{
    let mut result = 0.0;

    for (i, pi) in points.iter().enumerate() {
        let mut li = 1.0;
        for (j, pj) in points.iter().enumerate() {
            if i != j {
                li *= (mjd - pj.mjd) / (pi.mjd - pj.mjd);
            }
        }
        result += extract(pi) * li;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_records() -> Vec<EopRecord> {
        (0..5)
            .map(|i| {
                let i = i as f64;
                EopRecord::new(
                    59945.0 + i,
                    0.1 + 0.001 * i,
                    0.2 + 0.002 * i,
                    0.01 + 0.0001 * i,
                    0.001 + 0.00001 * i,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_linear_interpolation() {
        let table = EopTable::new(create_test_records());

        let mjd = 59946.5;
        let params = table.get(mjd).unwrap();

        assert!((params.x_p - (0.101 + 0.102) / 2.0).abs() < 1e-10);
        assert!((params.y_p - (0.202 + 0.204) / 2.0).abs() < 1e-10);
        assert_eq!(params.mjd, mjd);
        assert_eq!(params.source, EopSource::Interpolated);
    }

    #[test]
    fn test_exact_match() {
        let table = EopTable::new(create_test_records());

        let params = table.get(59947.0).unwrap();
        assert_eq!(params.mjd, 59947.0);
        assert!((params.x_p - 0.102).abs() < 1e-10);
        assert_eq!(params.source, EopSource::UserData);

        let last = table.get(59949.0).unwrap();
        assert!((last.x_p - 0.104).abs() < 1e-10);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut records = create_test_records();
        records.reverse();
        let table = EopTable::new(records);
        assert_eq!(table.time_span(), Some((59945.0, 59949.0)));
        assert!((table.get(59945.5).unwrap().x_p - 0.1005).abs() < 1e-10);
    }

    #[test]
    fn test_lagrange_reproduces_linear_data() {
        let table = EopTable::new(create_test_records()).with_method(InterpolationMethod::Lagrange);

        let params = table.get(59947.5).unwrap();
        assert!((params.x_p - 0.1025).abs() < 1e-10);
        assert!((params.y_p - 0.205).abs() < 1e-10);
        assert!((params.ut1_utc - 0.01025).abs() < 1e-10);
    }

    #[test]
    fn test_lagrange_follows_curvature() {
        let records: Vec<EopRecord> = (0..7)
            .map(|i| {
                let d = i as f64;
                EopRecord::new(60000.0 + d, 0.01 * d * d, 0.0, 0.0, 0.0).unwrap()
            })
            .collect();

        let linear = EopTable::new(records.clone()).get(60002.5).unwrap();
        let lagrange = EopTable::new(records)
            .with_method(InterpolationMethod::Lagrange)
            .get(60002.5)
            .unwrap();

        assert!((lagrange.x_p - 0.0625).abs() < 1e-9);
        assert!((linear.x_p - 0.065).abs() < 1e-9);
    }

    #[test]
    fn test_lagrange_insufficient_points() {
        let records = vec![
            EopRecord::new(59945.0, 0.1, 0.2, 0.01, 0.001).unwrap(),
            EopRecord::new(59946.0, 0.101, 0.202, 0.0101, 0.0011).unwrap(),
        ];
        let table = EopTable::new(records).with_method(InterpolationMethod::Lagrange);

        assert!(matches!(
            table.get(59945.5),
            Err(CoordError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_lagrange_edges() {
        let records: Vec<EopRecord> = (0..10)
            .map(|i| {
                let i = i as f64;
                EopRecord::new(59945.0 + i, 0.1 + 0.001 * i, 0.2, 0.01, 0.001).unwrap()
            })
            .collect();
        let table = EopTable::new(records).with_method(InterpolationMethod::Lagrange);

        assert!((table.get(59945.2).unwrap().x_p - 0.1002).abs() < 1e-10);
        assert!((table.get(59953.7).unwrap().x_p - 0.1087).abs() < 1e-10);
    }

    #[test]
    fn test_leap_second_unwrapped() {
        // 2017-01-01 leap second: UT1-UTC jumps by +1 s.
        let records = vec![
            EopRecord::new(57753.0, 0.0, 0.0, -0.5920, 0.0).unwrap(),
            EopRecord::new(57754.0, 0.0, 0.0, 0.4078, 0.0).unwrap(),
        ];
        let table = EopTable::new(records);

        let mid = table.get(57753.5).unwrap();
        assert!((mid.ut1_utc + 0.5921).abs() < 1e-7);

        let after = table.get(57754.0).unwrap();
        assert!((after.ut1_utc - 0.4078).abs() < 1e-7);
    }

    #[test]
    fn test_out_of_range() {
        let table = EopTable::new(create_test_records());

        assert!(table.get(59944.0).is_err());
        assert!(table.get(59950.0).is_err());
        assert!(table.get(f64::NAN).is_err());
    }

    #[test]
    fn test_max_gap_enforcement() {
        let mut records = create_test_records();
        records[3].mjd = 59955.0;
        records[4].mjd = 59956.0;

        let table = EopTable::new(records).with_max_gap(3.0);

        let err = table.get(59950.0).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum interpolation gap"));
        assert!(table.get(59955.5).is_ok());
    }

    #[test]
    fn test_empty_records() {
        let table = EopTable::new(vec![]);
        let err = table.get(59945.0).unwrap_err();
        assert!(err.to_string().contains("No EOP records available"));
        assert_eq!(table.time_span(), None);
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn test_single_record() {
        let table = EopTable::new(vec![EopRecord::new(60000.0, 0.1, 0.2, 0.0, 0.0).unwrap()]);
        assert!(table.get(60000.0).is_ok());
        assert!(table.get(60000.5).is_err());
    }

    #[test]
    fn test_unwrap_leap_second() {
        assert_eq!(unwrap_leap_second(-0.59, 0.41), 0.41 - 1.0);
        assert_eq!(unwrap_leap_second(0.41, -0.59), -0.59 + 1.0);
        assert_eq!(unwrap_leap_second(0.1, 0.2), 0.2);
    }
}
