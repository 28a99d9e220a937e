//! Stats module - categorical summaries of the cleaned header

mod calculator;

pub use calculator::{CategoryCount, HeaderSummary, SummaryCalculator, UNKNOWN_LABEL};
