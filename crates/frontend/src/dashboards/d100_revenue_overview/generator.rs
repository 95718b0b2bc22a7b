//! Synthetic revenue series for the overview chart.
//!
//! Pure functions only: the caller supplies the anchor day and the random
//! source, so a fixed seed reproduces the exact same series.

use chrono::{Duration, NaiveDate};
use contracts::dashboards::d100_revenue_overview::{
    Bucket, BucketLabel, DateRecord, FilterState, Granularity, RevenueSeriesRequest,
    RevenueSeriesResponse, SeriesSummary,
};
use contracts::enums::TimeRange;
use rand::Rng;
use std::ops::Range;

const BASE_REVENUE: Range<f64> = 4000.0..7000.0;
const BASE_ORDERS: Range<u32> = 100..150;

/// Generate `days` daily records ending at `anchor`, oldest first
pub fn generate_daily_records<R: Rng + ?Sized>(
    days: u32,
    filters: &FilterState,
    anchor: NaiveDate,
    rng: &mut R,
) -> Vec<DateRecord> {
    let multiplier = filters.multiplier();

    (0..days)
        .rev()
        .map(|offset| {
            // Draw order is fixed so the base series only depends on the seed
            let base_revenue = rng.gen_range(BASE_REVENUE);
            let base_orders = rng.gen_range(BASE_ORDERS);

            DateRecord {
                date: anchor - Duration::days(i64::from(offset)),
                revenue: base_revenue * multiplier,
                orders: (f64::from(base_orders) * multiplier).round() as u32,
            }
        })
        .collect()
}

/// Roll daily records up according to `Granularity::for_days(records.len())`
pub fn bucket_records(records: &[DateRecord]) -> Vec<Bucket> {
    match Granularity::for_days(records.len() as u32) {
        Granularity::Daily => records.iter().map(Bucket::from_record).collect(),
        Granularity::Weekly => bucket_by_week(records),
        Granularity::Monthly => bucket_by_month(records),
    }
}

fn bucket_by_week(records: &[DateRecord]) -> Vec<Bucket> {
    // chunks() never yields an empty slice
    records
        .chunks(Granularity::WEEK_LEN)
        .enumerate()
        .map(|(index, chunk)| {
            let mut bucket = Bucket::empty(BucketLabel::Week(index as u32 + 1));
            for record in chunk {
                bucket.add(record);
            }
            bucket
        })
        .collect()
}

fn bucket_by_month(records: &[DateRecord]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();

    for record in records {
        let label = BucketLabel::month_of(record.date);
        match buckets.last_mut() {
            Some(current) if current.label == label => current.add(record),
            _ => {
                let mut bucket = Bucket::empty(label);
                bucket.add(record);
                buckets.push(bucket);
            }
        }
    }

    buckets
}

/// Full pipeline for one chart load
pub fn generate_series<R: Rng + ?Sized>(
    time_range: TimeRange,
    filters: &FilterState,
    anchor: NaiveDate,
    rng: &mut R,
) -> Vec<Bucket> {
    let records = generate_daily_records(time_range.days(), filters, anchor, rng);
    bucket_records(&records)
}

pub fn build_response<R: Rng + ?Sized>(
    request: &RevenueSeriesRequest,
    rng: &mut R,
) -> RevenueSeriesResponse {
    let buckets = generate_series(request.time_range, &request.filters, request.anchor, rng);
    let summary = SeriesSummary::from_buckets(&buckets);

    log::debug!(
        "revenue series: range={} region={} category={} buckets={}",
        request.time_range,
        request.filters.region,
        request.filters.category,
        buckets.len()
    );

    RevenueSeriesResponse {
        time_range: request.time_range,
        granularity: Granularity::for_days(request.time_range.days()),
        buckets,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use contracts::enums::{ProductCategory, Region};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Distinct calendar months touched by `days` days ending at `anchor`
    fn months_spanned(days: u32, anchor: NaiveDate) -> u32 {
        if days == 0 {
            return 0;
        }
        let first = anchor - Duration::days(i64::from(days) - 1);
        let months = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
        (months(anchor) - months(first) + 1) as u32
    }

    fn all_filters() -> Vec<FilterState> {
        let mut filters = Vec::new();
        for region in Region::all() {
            for category in ProductCategory::all() {
                filters.push(FilterState::new(None, region, category));
            }
        }
        filters
    }

    #[test]
    fn test_records_cover_range_oldest_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let anchor = ymd(2026, 10, 19);
        let records = generate_daily_records(30, &FilterState::default(), anchor, &mut rng);

        assert_eq!(records.len(), 30);
        assert_eq!(records[0].date, ymd(2026, 9, 20));
        assert_eq!(records[29].date, anchor);
        assert!(records.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));
    }

    #[test]
    fn test_week_range_is_daily() {
        let mut rng = StdRng::seed_from_u64(7);
        let anchor = ymd(2026, 10, 19);
        let buckets = generate_series(TimeRange::Week, &FilterState::default(), anchor, &mut rng);

        assert_eq!(buckets.len(), 7);
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.label, BucketLabel::Day(anchor - Duration::days(6 - i as i64)));
            assert_eq!(bucket.days, 1);
            assert!((4000.0..7000.0).contains(&bucket.revenue));
            assert!((100..150).contains(&bucket.orders));
        }
    }

    #[test]
    fn test_month_range_is_weekly() {
        let mut rng = StdRng::seed_from_u64(3);
        let buckets = generate_series(
            TimeRange::Month,
            &FilterState::default(),
            ymd(2026, 10, 19),
            &mut rng,
        );

        let labels: Vec<BucketLabel> = buckets.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            (1..=5).map(BucketLabel::Week).collect::<Vec<_>>()
        );
        let sizes: Vec<u32> = buckets.iter().map(|b| b.days).collect();
        assert_eq!(sizes, vec![7, 7, 7, 7, 2]);
    }

    #[test]
    fn test_quarter_and_year_are_monthly() {
        let mut rng = StdRng::seed_from_u64(11);
        // Jan 1 .. Mar 31 of a non-leap year is exactly 90 days
        let quarter = generate_series(
            TimeRange::Quarter,
            &FilterState::default(),
            ymd(2026, 3, 31),
            &mut rng,
        );
        assert_eq!(quarter.len(), 3);
        assert_eq!(quarter[0].label, BucketLabel::Month(ymd(2026, 1, 1)));
        assert_eq!(quarter[1].days, 28);

        let year = generate_series(
            TimeRange::Year,
            &FilterState::default(),
            ymd(2026, 12, 31),
            &mut rng,
        );
        assert_eq!(year.len(), 12);
        assert_eq!(year[11].label, BucketLabel::Month(ymd(2026, 12, 1)));
    }

    #[test]
    fn test_unaligned_windows_follow_month_count() {
        let anchor = ymd(2026, 10, 19);
        for range in [TimeRange::Quarter, TimeRange::Year] {
            let mut rng = StdRng::seed_from_u64(5);
            let buckets = generate_series(range, &FilterState::default(), anchor, &mut rng);
            assert_eq!(buckets.len() as u32, months_spanned(range.days(), anchor));
        }
        assert_eq!(months_spanned(365, anchor), 13);
        assert_eq!(months_spanned(90, anchor), 4);
    }

    #[test]
    fn test_bucket_count_formula() {
        let anchor = ymd(2026, 6, 15);
        for days in 0..=400u32 {
            let mut rng = StdRng::seed_from_u64(u64::from(days));
            let records = generate_daily_records(days, &FilterState::default(), anchor, &mut rng);
            let expected = if days <= 14 {
                days
            } else if days <= 60 {
                (days + 6) / 7
            } else {
                months_spanned(days, anchor)
            };
            assert_eq!(bucket_records(&records).len() as u32, expected, "days={}", days);
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let anchor = ymd(2026, 10, 19);
        let mut rng = StdRng::seed_from_u64(60);
        let sixty = generate_daily_records(60, &FilterState::default(), anchor, &mut rng);
        let buckets = bucket_records(&sixty);
        assert_eq!(buckets.len(), 9);
        assert!(matches!(buckets[0].label, BucketLabel::Week(1)));
        assert_eq!(buckets[8].days, 4);

        let sixty_one = generate_daily_records(61, &FilterState::default(), anchor, &mut rng);
        let buckets = bucket_records(&sixty_one);
        assert!(buckets.iter().all(|b| matches!(b.label, BucketLabel::Month(_))));
    }

    #[test]
    fn test_sums_are_preserved() {
        let anchor = ymd(2026, 10, 19);
        for filters in all_filters() {
            for range in TimeRange::all() {
                let mut rng = StdRng::seed_from_u64(42);
                let records = generate_daily_records(range.days(), &filters, anchor, &mut rng);
                let buckets = bucket_records(&records);

                let record_revenue: f64 = records.iter().map(|r| r.revenue).sum();
                let bucket_revenue: f64 = buckets.iter().map(|b| b.revenue).sum();
                assert!((record_revenue - bucket_revenue).abs() < 1e-6);

                let record_orders: u32 = records.iter().map(|r| r.orders).sum();
                let bucket_orders: u32 = buckets.iter().map(|b| b.orders).sum();
                assert_eq!(record_orders, bucket_orders);

                let bucket_days: u32 = buckets.iter().map(|b| b.days).sum();
                assert_eq!(bucket_days, range.days());
            }
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let anchor = ymd(2026, 10, 19);
        let filters = FilterState::new(None, Region::Europe, ProductCategory::Home);
        let first = generate_series(TimeRange::Month, &filters, anchor, &mut StdRng::seed_from_u64(9));
        let second = generate_series(TimeRange::Month, &filters, anchor, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_filters_scale_baseline() {
        let anchor = ymd(2026, 12, 31);
        let filtered = FilterState::new(None, Region::Asia, ProductCategory::Electronics);

        let baseline = generate_series(
            TimeRange::Year,
            &FilterState::default(),
            anchor,
            &mut StdRng::seed_from_u64(2024),
        );
        let scaled = generate_series(TimeRange::Year, &filtered, anchor, &mut StdRng::seed_from_u64(2024));

        assert_eq!(scaled.len(), 12);
        for (base, adjusted) in baseline.iter().zip(&scaled) {
            assert_eq!(base.label, adjusted.label);
            assert!((adjusted.revenue - base.revenue * 1.04).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let records = generate_daily_records(0, &FilterState::default(), ymd(2026, 1, 1), &mut rng);
        assert!(records.is_empty());
        assert!(bucket_records(&records).is_empty());
        assert_eq!(months_spanned(0, ymd(2026, 1, 1)), 0);
    }

    #[test]
    fn test_build_response_summary() {
        let request = RevenueSeriesRequest {
            time_range: TimeRange::Quarter,
            filters: FilterState::default(),
            anchor: ymd(2026, 3, 31),
        };
        let response = build_response(&request, &mut StdRng::seed_from_u64(77));

        assert_eq!(response.granularity, Granularity::Monthly);
        assert_eq!(response.buckets.len(), 3);
        let orders: u64 = response.buckets.iter().map(|b| u64::from(b.orders)).sum();
        assert_eq!(response.summary.total_orders, orders);
        assert!(response.summary.average_order_value.is_some());
    }
}
