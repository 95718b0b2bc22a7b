use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dashboards::d100_revenue_overview::DashboardError;

/// Time range selectable on the revenue chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    /// Code used in selects and config files
    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Quarter => "Quarter",
            TimeRange::Year => "Year",
        }
    }

    /// Number of calendar days generated for the range
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    pub fn all() -> Vec<TimeRange> {
        vec![
            TimeRange::Week,
            TimeRange::Month,
            TimeRange::Quarter,
            TimeRange::Year,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "week" => Some(TimeRange::Week),
            "month" => Some(TimeRange::Month),
            "quarter" => Some(TimeRange::Quarter),
            "year" => Some(TimeRange::Year),
            _ => None,
        }
    }
}

impl FromStr for TimeRange {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DashboardError::InvalidRange(s.to_string()))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
