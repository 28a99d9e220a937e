//! Header Cleaner Module
//! Normalizes the 903 header columns: maps SEX codes to labels, derives AGE
//! from DOB, and projects down to the three columns of interest.

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

/// Date pattern used by 903 header exports.
const DOB_FORMAT: &str = "%d/%m/%Y";

/// Mean Gregorian year length in days, used for the age conversion.
const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Cleans a raw 903 header DataFrame into the SEX / AGE / ETHNIC view.
///
/// Value coercion is lenient throughout: unmapped sex codes and unparsable
/// dates become nulls rather than errors, and the row count is preserved.
pub struct HeaderCleaner;

impl HeaderCleaner {
    /// Map a 903 sex code to its display label. Codes outside {1, 2} are
    /// unmapped and yield `None`.
    pub fn map_sex_code(code: Option<i64>) -> Option<&'static str> {
        match code {
            Some(1) => Some("Male"),
            Some(2) => Some("Female"),
            _ => None,
        }
    }

    /// Parse a DOB string under the fixed day/month/year pattern.
    /// Impossible calendar dates (e.g. 31/02) fail the parse and yield `None`.
    pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), DOB_FORMAT).ok()
    }

    /// Whole years between `dob` and `reference`, using the 365.25-day
    /// year-length convention.
    pub fn age_in_years(dob: NaiveDate, reference: NaiveDate) -> i64 {
        let days = (reference - dob).num_days();
        (days as f64 / DAYS_PER_YEAR).floor() as i64
    }

    /// Produce the cleaned record set: exactly the columns SEX (label),
    /// AGE (whole years at `reference_date`), ETHNIC (pass-through).
    ///
    /// The reference date is an explicit parameter so the transform is a pure
    /// function of its inputs; callers wanting "today" pass it in.
    pub fn clean(df: &DataFrame, reference_date: NaiveDate) -> Result<DataFrame, CleanError> {
        let sex_col = df
            .column("SEX")
            .map_err(|_| CleanError::MissingColumn("SEX"))?;
        let dob_col = df
            .column("DOB")
            .map_err(|_| CleanError::MissingColumn("DOB"))?;
        let ethnic_col = df
            .column("ETHNIC")
            .map_err(|_| CleanError::MissingColumn("ETHNIC"))?;

        // Non-strict casts: values that do not convert become nulls
        let sex_i64 = sex_col.cast(&DataType::Int64)?;
        let sex_ca = sex_i64.i64()?;
        let dob_str = dob_col.cast(&DataType::String)?;
        let dob_ca = dob_str.str()?;
        let ethnic_str = ethnic_col.cast(&DataType::String)?;
        let ethnic_ca = ethnic_str.str()?;

        let mut sex_labels: Vec<Option<String>> = Vec::with_capacity(df.height());
        let mut ages: Vec<Option<i64>> = Vec::with_capacity(df.height());
        let mut ethnicities: Vec<Option<String>> = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            sex_labels.push(Self::map_sex_code(sex_ca.get(i)).map(str::to_string));

            let dob = dob_ca.get(i).and_then(Self::parse_dob);
            ages.push(dob.map(|d| Self::age_in_years(d, reference_date)));

            ethnicities.push(ethnic_ca.get(i).map(str::to_string));
        }

        let cleaned = DataFrame::new(vec![
            Column::new("SEX".into(), sex_labels),
            Column::new("AGE".into(), ages),
            Column::new("ETHNIC".into(), ethnicities),
        ])?;

        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn maps_known_sex_codes() {
        assert_eq!(HeaderCleaner::map_sex_code(Some(1)), Some("Male"));
        assert_eq!(HeaderCleaner::map_sex_code(Some(2)), Some("Female"));
        assert_eq!(HeaderCleaner::map_sex_code(Some(3)), None);
        assert_eq!(HeaderCleaner::map_sex_code(Some(0)), None);
        assert_eq!(HeaderCleaner::map_sex_code(None), None);
    }

    #[test]
    fn parses_dob_and_rejects_impossible_dates() {
        assert_eq!(
            HeaderCleaner::parse_dob("01/01/2000"),
            NaiveDate::from_ymd_opt(2000, 1, 1)
        );
        assert_eq!(HeaderCleaner::parse_dob("31/02/2000"), None);
        assert_eq!(HeaderCleaner::parse_dob("not-a-date"), None);
        assert_eq!(HeaderCleaner::parse_dob(""), None);
    }

    #[test]
    fn age_uses_mean_year_length() {
        let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(HeaderCleaner::age_in_years(dob, reference()), 24);

        // Newborn
        assert_eq!(HeaderCleaner::age_in_years(reference(), reference()), 0);
    }

    #[test]
    fn clean_produces_exactly_three_columns() {
        let raw = df!(
            "CHILD" => &[101i64, 102],
            "SEX" => &[1i64, 2],
            "DOB" => &["01/01/2000", "15/06/2010"],
            "ETHNIC" => &["WBRI", "AIND"],
        )
        .unwrap();

        let cleaned = HeaderCleaner::clean(&raw, reference()).unwrap();
        let names: Vec<&str> = cleaned
            .get_column_names()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, vec!["SEX", "AGE", "ETHNIC"]);
        assert_eq!(cleaned.height(), raw.height());

        let sex = cleaned.column("SEX").unwrap();
        let sex = sex.str().unwrap();
        assert_eq!(sex.get(0), Some("Male"));
        assert_eq!(sex.get(1), Some("Female"));

        let age = cleaned.column("AGE").unwrap();
        let age = age.i64().unwrap();
        assert_eq!(age.get(0), Some(24));
        assert_eq!(age.get(1), Some(13));
    }

    #[test]
    fn invalid_values_coerce_to_null_without_dropping_rows() {
        let raw = df!(
            "SEX" => &[3i64, 1],
            "DOB" => &["31/02/2000", "garbage"],
            "ETHNIC" => &["B", "C"],
        )
        .unwrap();

        let cleaned = HeaderCleaner::clean(&raw, reference()).unwrap();
        assert_eq!(cleaned.height(), 2);

        let sex = cleaned.column("SEX").unwrap();
        let sex = sex.str().unwrap();
        assert_eq!(sex.get(0), None);
        assert_eq!(sex.get(1), Some("Male"));

        let age = cleaned.column("AGE").unwrap();
        let age = age.i64().unwrap();
        assert_eq!(age.get(0), None);
        assert_eq!(age.get(1), None);

        let ethnic = cleaned.column("ETHNIC").unwrap();
        let ethnic = ethnic.str().unwrap();
        assert_eq!(ethnic.get(0), Some("B"));
        assert_eq!(ethnic.get(1), Some("C"));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let raw = df!(
            "SEX" => &[1i64],
            "DOB" => &["01/01/2000"],
        )
        .unwrap();

        let err = HeaderCleaner::clean(&raw, reference()).unwrap_err();
        assert!(matches!(err, CleanError::MissingColumn("ETHNIC")));
    }
}
