use chrono::Datelike;

use crate::error::Result;
use crate::models::{DailySentimentTally, SentimentSeries};
use crate::store::TallyStore;

/// Builds the trend chart series from all recorded tallies.
pub async fn sentiment_series(tallies: &dyn TallyStore) -> Result<SentimentSeries> {
    Ok(format_series(&tallies.all_ordered().await?))
}

/// Positional transform of date-ascending tallies into four parallel
/// series. The date label is "month.day" with no year, so two tallies a
/// full year apart would render the same label; callers charting more
/// than a year of data inherit that ambiguity.
pub fn format_series(tallies: &[DailySentimentTally]) -> SentimentSeries {
    let mut series = SentimentSeries {
        dates: Vec::with_capacity(tallies.len()),
        positive: Vec::with_capacity(tallies.len()),
        negative: Vec::with_capacity(tallies.len()),
        neutral: Vec::with_capacity(tallies.len()),
    };

    for tally in tallies {
        series.dates.push(format!(
            "{}.{}",
            tally.record_date.month(),
            tally.record_date.day()
        ));
        series.positive.push(tally.positive);
        series.negative.push(tally.negative);
        series.neutral.push(tally.neutral);
    }

    series
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn tally(y: i32, m: u32, d: u32, positive: i64, negative: i64, neutral: i64) -> DailySentimentTally {
        DailySentimentTally {
            record_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            positive,
            negative,
            neutral,
        }
    }

    #[test]
    fn produces_parallel_series_in_input_order() {
        let series = format_series(&[
            tally(2024, 9, 10, 1, 0, 2),
            tally(2024, 9, 11, 0, 3, 0),
        ]);

        assert_eq!(series.dates, vec!["9.10", "9.11"]);
        assert_eq!(series.positive, vec![1, 0]);
        assert_eq!(series.negative, vec![0, 3]);
        assert_eq!(series.neutral, vec![2, 0]);
    }

    #[test]
    fn date_labels_are_not_zero_padded() {
        let series = format_series(&[tally(2024, 1, 5, 0, 0, 1)]);
        assert_eq!(series.dates, vec!["1.5"]);
    }

    #[test]
    fn empty_input_yields_four_empty_series() {
        let series = format_series(&[]);
        assert!(series.dates.is_empty());
        assert!(series.positive.is_empty());
        assert!(series.negative.is_empty());
        assert!(series.neutral.is_empty());
    }

    #[test]
    fn year_boundary_labels_collide_by_design() {
        let series = format_series(&[
            tally(2023, 12, 31, 1, 0, 0),
            tally(2024, 12, 31, 0, 1, 0),
        ]);
        assert_eq!(series.dates[0], series.dates[1]);
    }
}
