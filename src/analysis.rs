//! Read-side analysis over the log collection.
//!
//! The weekly volume series is recomputed from scratch on every request; with
//! a single user's history the full pass is cheap, and it keeps the series
//! correct by construction rather than incrementally maintained.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::models::LogEntry;

/// One point of the weekly training-volume series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyVolume {
  /// ISO week label, `{iso year}-W{week:02}`. Zero-padded so the labels sort
  /// the same lexically and chronologically.
  pub week: String,
  /// Total volume (sets x reps x weight) logged that week, rounded to the
  /// nearest whole number.
  pub volume: f64,
}

/// Bucket every log entry into its ISO week (Monday start, week 1 holds the
/// year's first Thursday) and sum volumes per bucket. Entries with missing or
/// zeroed numeric fields contribute zero; aggregation never fails on dirty
/// history.
pub fn weekly_volume(logs: &[LogEntry]) -> Vec<WeeklyVolume> {
  let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();

  for entry in logs {
    let iso = entry.date.iso_week();
    *buckets.entry((iso.year(), iso.week())).or_default() += entry.volume();
  }

  buckets
    .into_iter()
    .map(|((year, week), volume)| WeeklyVolume {
      week: format!("{year}-W{week:02}"),
      volume: volume.round(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Exercise, LogDetails, LogEntry};
  use chrono::{TimeZone, Utc};

  fn entry_on(y: i32, m: u32, d: u32, exercises: Vec<Exercise>) -> LogEntry {
    LogEntry {
      id: crate::models::uid("log"),
      workout_id: "w_aaaaaaa".to_string(),
      date: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
      details: LogDetails {
        note: String::new(),
        exercises,
      },
    }
  }

  fn bench_3x8_60() -> Vec<Exercise> {
    vec![Exercise::new("Bench Press", 3, 8, 60.0)]
  }

  #[test]
  fn empty_history_yields_empty_series() {
    assert!(weekly_volume(&[]).is_empty());
  }

  #[test]
  fn same_week_entries_accumulate_into_one_bucket() {
    // Mon 2024-01-15 and Wed 2024-01-17 are both ISO week 2024-W03.
    let logs = vec![
      entry_on(2024, 1, 15, bench_3x8_60()),
      entry_on(2024, 1, 17, bench_3x8_60()),
    ];

    let series = weekly_volume(&logs);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].week, "2024-W03");
    assert_eq!(series[0].volume, 2880.0);
  }

  #[test]
  fn week_label_is_zero_padded() {
    let logs = vec![entry_on(2024, 1, 3, bench_3x8_60())];
    let series = weekly_volume(&logs);
    assert_eq!(series[0].week, "2024-W01");
  }

  #[test]
  fn buckets_sort_chronologically_across_year_boundary() {
    // 2023-12-28 is ISO week 2023-W52; 2024-01-01 (a Monday) opens 2024-W01.
    let logs = vec![
      entry_on(2024, 1, 1, bench_3x8_60()),
      entry_on(2023, 12, 28, bench_3x8_60()),
    ];

    let series = weekly_volume(&logs);
    let labels: Vec<&str> = series.iter().map(|p| p.week.as_str()).collect();
    assert_eq!(labels, vec!["2023-W52", "2024-W01"]);
  }

  #[test]
  fn iso_week_assignment_follows_the_iso_year() {
    // 2024-12-30 is a Monday belonging to ISO week 2025-W01.
    let logs = vec![entry_on(2024, 12, 30, bench_3x8_60())];
    let series = weekly_volume(&logs);
    assert_eq!(series[0].week, "2025-W01");
  }

  #[test]
  fn missing_weight_contributes_zero_not_an_error() {
    let raw = r#"[{
      "id": "log_aaaaaaa",
      "workoutId": "w_gone",
      "date": "2024-01-15T10:00:00Z",
      "details": { "note": "", "exercises": [
        { "id": "ex_aaaaaaa", "name": "Row", "sets": 3, "reps": 10 }
      ]}
    }]"#;
    let logs: Vec<LogEntry> = serde_json::from_str(raw).unwrap();

    let series = weekly_volume(&logs);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].volume, 0.0);
  }

  #[test]
  fn series_spans_multiple_weeks_oldest_first() {
    use crate::test_utils::{mock_exercise, mock_log_entry};

    // 14 days apart is always two distinct ISO weeks
    let logs = vec![
      mock_log_entry("w_aaaaaaa", 0, vec![mock_exercise("Squat", 5, 5, 100.0)]),
      mock_log_entry("w_aaaaaaa", 14, vec![mock_exercise("Squat", 5, 5, 80.0)]),
    ];

    let series = weekly_volume(&logs);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].volume, 2000.0, "older week comes first");
    assert_eq!(series[1].volume, 2500.0);
    assert!(series[0].week < series[1].week);
  }

  #[test]
  fn volume_is_rounded_to_whole_numbers() {
    let logs = vec![entry_on(2024, 1, 15, vec![Exercise::new("Curl", 3, 7, 12.3)])];
    let series = weekly_volume(&logs);
    // 3 * 7 * 12.3 = 258.3 -> 258
    assert_eq!(series[0].volume, 258.0);
  }
}
