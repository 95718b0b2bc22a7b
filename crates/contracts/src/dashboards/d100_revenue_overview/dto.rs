use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DashboardError;
use crate::enums::product_category::ProductCategory;
use crate::enums::region::Region;
use crate::enums::time_range::TimeRange;

/// Snapshot of the filter bar selection
///
/// Replaced wholesale on every apply/clear, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected day (YYYY-MM-DD), informational only
    pub date: Option<NaiveDate>,
    pub region: Region,
    pub category: ProductCategory,
}

impl FilterState {
    pub fn new(date: Option<NaiveDate>, region: Region, category: ProductCategory) -> Self {
        Self {
            date,
            region,
            category,
        }
    }

    /// Build from raw select values, rejecting anything outside the vocabularies
    pub fn parse(date: Option<&str>, region: &str, category: &str) -> Result<Self, DashboardError> {
        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| DashboardError::InvalidDate(raw.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            date,
            region: region.parse()?,
            category: category.parse()?,
        })
    }

    /// Compound scale factor; exactly 1.0 when both filters are `all`
    pub fn multiplier(&self) -> f64 {
        let mut multiplier = 1.0;
        if let Some(factor) = self.region.factor() {
            multiplier *= factor;
        }
        if let Some(factor) = self.category.factor() {
            multiplier *= factor;
        }
        multiplier
    }

    /// Number of non-default filters (for the badge on the filter bar)
    pub fn active_count(&self) -> usize {
        [
            self.date.is_some(),
            self.region != Region::All,
            self.category != ProductCategory::All,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

/// One synthetic day of sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRecord {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
}

/// How daily records are rolled up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// Up to this many days every day gets its own point
    pub const DAILY_MAX_DAYS: u32 = 14;
    /// Up to this many days records are grouped into weeks, above it into months
    pub const WEEKLY_MAX_DAYS: u32 = 60;
    pub const WEEK_LEN: usize = 7;

    pub fn for_days(days: u32) -> Self {
        if days > Self::WEEKLY_MAX_DAYS {
            Granularity::Monthly
        } else if days > Self::DAILY_MAX_DAYS {
            Granularity::Weekly
        } else {
            Granularity::Daily
        }
    }
}

/// X-axis key of an aggregated point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BucketLabel {
    Day(NaiveDate),
    /// First day of the month
    Month(NaiveDate),
    /// 1-based week ordinal within the range
    Week(u32),
}

impl BucketLabel {
    pub fn month_of(date: NaiveDate) -> Self {
        // day 1 exists in every month
        BucketLabel::Month(date.with_day(1).unwrap_or(date))
    }

    /// Literal label used for week buckets, e.g. "Week 3"
    pub fn week_name(ordinal: u32) -> String {
        format!("Week {}", ordinal)
    }
}

/// Aggregated chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: BucketLabel,
    pub revenue: f64,
    pub orders: u32,
    /// Number of daily records folded into this bucket
    pub days: u32,
}

impl Bucket {
    pub fn from_record(record: &DateRecord) -> Self {
        Self {
            label: BucketLabel::Day(record.date),
            revenue: record.revenue,
            orders: record.orders,
            days: 1,
        }
    }

    pub fn empty(label: BucketLabel) -> Self {
        Self {
            label,
            revenue: 0.0,
            orders: 0,
            days: 0,
        }
    }

    pub fn add(&mut self, record: &DateRecord) {
        self.revenue += record.revenue;
        self.orders += record.orders;
        self.days += 1;
    }
}

/// Request for the revenue overview chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeriesRequest {
    pub time_range: TimeRange,
    pub filters: FilterState,
    /// Last day of the generated window
    pub anchor: NaiveDate,
}

/// Response for the revenue overview chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeriesResponse {
    pub time_range: TimeRange,
    pub granularity: Granularity,
    pub buckets: Vec<Bucket>,
    pub summary: super::SeriesSummary,
}
