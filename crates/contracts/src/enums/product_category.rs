use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dashboards::d100_revenue_overview::DashboardError;

/// Product category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    #[default]
    All,
    Electronics,
    Clothing,
    Home,
    Sports,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::All => "all",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Home => "home",
            ProductCategory::Sports => "sports",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::All => "All Categories",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Home => "Home & Garden",
            ProductCategory::Sports => "Sports & Outdoors",
        }
    }

    /// Revenue/orders scale factor, `None` for `All`
    pub fn factor(&self) -> Option<f64> {
        match self {
            ProductCategory::All => None,
            ProductCategory::Electronics => Some(1.3),
            ProductCategory::Clothing => Some(0.95),
            ProductCategory::Home => Some(0.85),
            ProductCategory::Sports => Some(0.75),
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::All,
            ProductCategory::Electronics,
            ProductCategory::Clothing,
            ProductCategory::Home,
            ProductCategory::Sports,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(ProductCategory::All),
            "electronics" => Some(ProductCategory::Electronics),
            "clothing" => Some(ProductCategory::Clothing),
            "home" => Some(ProductCategory::Home),
            "sports" => Some(ProductCategory::Sports),
            _ => None,
        }
    }
}

impl FromStr for ProductCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DashboardError::InvalidFilter {
            field: "category",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
