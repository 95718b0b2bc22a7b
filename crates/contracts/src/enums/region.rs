use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dashboards::d100_revenue_overview::DashboardError;

/// Sales region filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    All,
    NorthAmerica,
    Europe,
    Asia,
    Australia,
    Africa,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::All => "all",
            Region::NorthAmerica => "north-america",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Australia => "australia",
            Region::Africa => "africa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::All => "All Regions",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Australia => "Australia",
            Region::Africa => "Africa",
        }
    }

    /// Revenue/orders scale factor, `None` for `All`
    pub fn factor(&self) -> Option<f64> {
        match self {
            Region::All => None,
            Region::NorthAmerica => Some(1.2),
            Region::Europe => Some(0.9),
            Region::Asia => Some(0.8),
            Region::Australia => Some(0.7),
            Region::Africa => Some(0.5),
        }
    }

    pub fn all() -> Vec<Region> {
        vec![
            Region::All,
            Region::NorthAmerica,
            Region::Europe,
            Region::Asia,
            Region::Australia,
            Region::Africa,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(Region::All),
            "north-america" => Some(Region::NorthAmerica),
            "europe" => Some(Region::Europe),
            "asia" => Some(Region::Asia),
            "australia" => Some(Region::Australia),
            "africa" => Some(Region::Africa),
            _ => None,
        }
    }
}

impl FromStr for Region {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DashboardError::InvalidFilter {
            field: "region",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
