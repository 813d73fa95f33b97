use crate::models::{ChartSeries, LedgerEntry, Metric, Range};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Build a chart series for the requested range and metric.
///
/// Pure function of its inputs; the only ambient dependency (the clock) is
/// injected through `build_series_at` so bucketing is testable.
pub fn build_series(
    range: Range,
    metric: Metric,
    incomes: &[LedgerEntry],
    expenses: &[LedgerEntry],
) -> ChartSeries {
    build_series_at(Local::now(), range, metric, incomes, expenses)
}

pub fn build_series_at(
    now: DateTime<Local>,
    range: Range,
    metric: Metric,
    incomes: &[LedgerEntry],
    expenses: &[LedgerEntry],
) -> ChartSeries {
    let buckets = bucket_windows(now, range);
    let mut labels = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());

    for bucket in buckets {
        // Income and expense sums stay independent until the metric combines
        // them; amounts accumulate at full precision, rounding is a render
        // concern.
        let income = sum_in(incomes, &bucket);
        let expense = sum_in(expenses, &bucket);
        values.push(match metric {
            Metric::Income => income,
            Metric::Expenses => expense,
            Metric::Balance => income - expense,
        });
        labels.push(bucket.label);
    }

    ChartSeries { labels, values }
}

struct Bucket {
    label: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    // The last calendar-month bucket keeps the original closed-end comparison.
    closed_end: bool,
}

fn sum_in(entries: &[LedgerEntry], bucket: &Bucket) -> f64 {
    entries
        .iter()
        .filter(|entry| {
            let at = entry.date.with_timezone(&Local).naive_local();
            at >= bucket.start
                && if bucket.closed_end {
                    at <= bucket.end
                } else {
                    at < bucket.end
                }
        })
        .map(|entry| entry.amount)
        .sum()
}

fn bucket_windows(now: DateTime<Local>, range: Range) -> Vec<Bucket> {
    let at = now.naive_local();
    match range {
        Range::Day => sliding(at, 24, Duration::hours(1), |start| {
            start.format("%H:%M").to_string()
        }),
        Range::Week => sliding(at, 7, Duration::days(1), |start| {
            start.format("%a").to_string()
        }),
        Range::Month => sliding(at, 30, Duration::days(1), |start| start.day().to_string()),
        Range::Year => calendar_months(now.year()),
    }
}

/// Fixed count of right-open buckets of width `step`, ending at `now`.
fn sliding(
    now: NaiveDateTime,
    count: usize,
    step: Duration,
    label: impl Fn(NaiveDateTime) -> String,
) -> Vec<Bucket> {
    let window_start = now - step * count as i32;
    (0..count)
        .map(|i| {
            let start = window_start + step * i as i32;
            Bucket {
                label: label(start),
                start,
                end: start + step,
                closed_end: false,
            }
        })
        .collect()
}

fn calendar_months(year: i32) -> Vec<Bucket> {
    (1..=12)
        .map(|month| {
            let start = month_start(year, month);
            let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            Bucket {
                label: start.format("%b").to_string(),
                start,
                end: month_start(next_year, next_month),
                closed_end: month == 12,
            }
        })
        .collect()
}

fn month_start(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn entry(amount: f64, at: DateTime<Local>) -> LedgerEntry {
        LedgerEntry {
            description: "entry".to_string(),
            amount,
            date: at.with_timezone(&Utc),
        }
    }

    fn sample_ledger(now: DateTime<Local>) -> (Vec<LedgerEntry>, Vec<LedgerEntry>) {
        let incomes = vec![
            entry(1000.0, now - Duration::days(1)),
            entry(250.25, now - Duration::days(3)),
        ];
        let expenses = vec![
            entry(300.5, now - Duration::days(2)),
            entry(40.0, now - Duration::days(6)),
        ];
        (incomes, expenses)
    }

    #[test]
    fn empty_ledgers_yield_zero_series_with_fixed_bucket_counts() {
        let now = fixed_now();
        for (range, expected) in [
            (Range::Day, 24),
            (Range::Week, 7),
            (Range::Month, 30),
            (Range::Year, 12),
        ] {
            let series = build_series_at(now, range, Metric::Balance, &[], &[]);
            assert_eq!(series.labels.len(), expected);
            assert_eq!(series.values.len(), expected);
            assert!(series.values.iter().all(|value| *value == 0.0));
        }
    }

    #[test]
    fn day_range_places_entries_in_their_hour_buckets() {
        let now = fixed_now();
        let incomes = vec![entry(1000.0, now - Duration::hours(2))];
        let expenses = vec![entry(300.0, now - Duration::hours(1))];

        let income = build_series_at(now, Range::Day, Metric::Income, &incomes, &expenses);
        let expense = build_series_at(now, Range::Day, Metric::Expenses, &incomes, &expenses);
        let balance = build_series_at(now, Range::Day, Metric::Balance, &incomes, &expenses);

        // Window starts at now - 24h, so now - 2h opens bucket 22.
        assert_eq!(income.values[22], 1000.0);
        assert_eq!(expense.values[23], 300.0);
        assert_eq!(balance.values[22], 1000.0);
        assert_eq!(balance.values[23], -300.0);
        for i in 0..22 {
            assert_eq!(income.values[i], 0.0);
            assert_eq!(expense.values[i], 0.0);
            assert_eq!(balance.values[i], 0.0);
        }
        assert_eq!(income.values[23], 0.0);
        assert_eq!(expense.values[22], 0.0);
    }

    #[test]
    fn balance_is_income_minus_expenses_elementwise() {
        let now = fixed_now();
        let (incomes, expenses) = sample_ledger(now);

        for range in [Range::Day, Range::Week, Range::Month, Range::Year] {
            let income = build_series_at(now, range, Metric::Income, &incomes, &expenses);
            let expense = build_series_at(now, range, Metric::Expenses, &incomes, &expenses);
            let balance = build_series_at(now, range, Metric::Balance, &incomes, &expenses);
            for i in 0..balance.values.len() {
                assert_eq!(balance.values[i], income.values[i] - expense.values[i]);
            }
        }
    }

    #[test]
    fn whole_range_balance_matches_flat_totals() {
        let now = fixed_now();
        let (incomes, expenses) = sample_ledger(now);
        let flat_income: f64 = incomes.iter().map(|e| e.amount).sum();
        let flat_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

        // Every sample entry sits inside the 7-day window.
        let series = build_series_at(now, Range::Week, Metric::Balance, &incomes, &expenses);
        let total: f64 = series.values.iter().sum();
        assert!((total - (flat_income - flat_expenses)).abs() < 1e-9);
    }

    #[test]
    fn week_range_excludes_entries_older_than_the_window() {
        let now = fixed_now();
        let incomes = vec![entry(999.0, now - Duration::days(8))];

        let series = build_series_at(now, Range::Week, Metric::Income, &incomes, &[]);
        assert!(series.values.iter().all(|value| *value == 0.0));
    }

    #[test]
    fn year_range_uses_calendar_months_of_the_current_year() {
        let now = fixed_now();
        let incomes = vec![
            entry(500.0, Local.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap()),
            entry(75.0, Local.with_ymd_and_hms(2026, 12, 31, 23, 30, 0).unwrap()),
        ];
        let expenses = vec![entry(
            120.0,
            Local.with_ymd_and_hms(2026, 2, 20, 18, 0, 0).unwrap(),
        )];

        let series = build_series_at(now, Range::Year, Metric::Balance, &incomes, &expenses);
        assert_eq!(series.labels[0], "Jan");
        assert_eq!(series.labels[1], "Feb");
        assert_eq!(series.labels[11], "Dec");
        assert_eq!(series.values[1], 380.0);
        assert_eq!(series.values[11], 75.0);
        assert_eq!(series.values[0], 0.0);
    }

    #[test]
    fn week_labels_are_weekday_abbreviations() {
        let now = fixed_now();
        let series = build_series_at(now, Range::Week, Metric::Balance, &[], &[]);
        // 2026-06-15 is a Monday; the window starts a week earlier.
        assert_eq!(series.labels[0], "Mon");
        assert_eq!(series.labels[6], "Sun");
    }
}
