//! Summary Calculator Module
//! Computes the categorical distributions shown by the charts: count by sex
//! and count by ethnicity over the cleaned record set.

use polars::prelude::*;
use std::collections::HashMap;

/// Display bucket for values that were unmapped or unparsable upstream.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One category and its row count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    /// Share of `total` this category represents, for proportional encodings.
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Summary of one cleaned header, recomputed per upload.
#[derive(Debug, Clone, Default)]
pub struct HeaderSummary {
    pub row_count: usize,
    pub sex: Vec<CategoryCount>,
    pub ethnicity: Vec<CategoryCount>,
}

impl HeaderSummary {
    pub fn is_empty(&self) -> bool {
        self.sex.is_empty() && self.ethnicity.is_empty()
    }
}

/// Computes categorical distributions over the cleaned DataFrame.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Group-by-count over a single string column. Nulls collect into the
    /// "Unknown" bucket. Categories come back alphabetical, Unknown last,
    /// so chart order is deterministic.
    pub fn count_by_column(df: &DataFrame, column: &str) -> Result<Vec<CategoryCount>, PolarsError> {
        let col = df.column(column)?;
        let casted = col.cast(&DataType::String)?;
        let ca = casted.str()?;

        let mut counts: HashMap<Option<String>, usize> = HashMap::new();
        for value in ca.into_iter() {
            *counts.entry(value.map(str::to_string)).or_insert(0) += 1;
        }

        let unknown = counts.remove(&None);

        let mut result: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(label, count)| CategoryCount {
                label: label.unwrap_or_default(),
                count,
            })
            .collect();
        result.sort_by(|a, b| a.label.cmp(&b.label));

        if let Some(count) = unknown {
            result.push(CategoryCount {
                label: UNKNOWN_LABEL.to_string(),
                count,
            });
        }

        Ok(result)
    }

    /// Compute both chart views over a cleaned header.
    pub fn summarize(df: &DataFrame) -> Result<HeaderSummary, PolarsError> {
        Ok(HeaderSummary {
            row_count: df.height(),
            sex: Self::count_by_column(df, "SEX")?,
            ethnicity: Self::count_by_column(df, "ETHNIC")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sex_categories() {
        let df = df!(
            "SEX" => &[Some("Male"), Some("Male"), Some("Female")],
            "ETHNIC" => &[Some("A"), Some("A"), Some("B")],
        )
        .unwrap();

        let counts = SummaryCalculator::count_by_column(&df, "SEX").unwrap();
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    label: "Female".to_string(),
                    count: 1,
                },
                CategoryCount {
                    label: "Male".to_string(),
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn nulls_land_in_unknown_bucket_last() {
        let df = df!(
            "SEX" => &[Some("Male"), None, None],
        )
        .unwrap();

        let counts = SummaryCalculator::count_by_column(&df, "SEX").unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].label, "Male");
        assert_eq!(counts[1].label, UNKNOWN_LABEL);
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn shares_are_proportional() {
        let df = df!(
            "ETHNIC" => &["A", "A", "B"],
        )
        .unwrap();

        let counts = SummaryCalculator::count_by_column(&df, "ETHNIC").unwrap();
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 3);

        let a = counts.iter().find(|c| c.label == "A").unwrap();
        let b = counts.iter().find(|c| c.label == "B").unwrap();
        assert!((a.share(total) - 2.0 / 3.0).abs() < 1e-12);
        assert!((b.share(total) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn share_of_empty_total_is_zero() {
        let c = CategoryCount {
            label: "A".to_string(),
            count: 0,
        };
        assert_eq!(c.share(0), 0.0);
    }

    #[test]
    fn summarize_covers_both_views() {
        let df = df!(
            "SEX" => &[Some("Male"), Some("Female"), None],
            "AGE" => &[Some(10i64), Some(4), None],
            "ETHNIC" => &[Some("WBRI"), Some("WBRI"), Some("AIND")],
        )
        .unwrap();

        let summary = SummaryCalculator::summarize(&df).unwrap();
        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.sex.len(), 3); // Female, Male, Unknown
        assert_eq!(summary.ethnicity.len(), 2);
        assert_eq!(summary.ethnicity[0].label, "AIND");
        assert_eq!(summary.ethnicity[0].count, 1);
        assert_eq!(summary.ethnicity[1].label, "WBRI");
        assert_eq!(summary.ethnicity[1].count, 2);
    }
}
