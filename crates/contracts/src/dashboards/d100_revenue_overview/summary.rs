use serde::{Deserialize, Serialize};

use super::Bucket;

/// KPI totals shown above the revenue chart
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    /// `None` when there are no orders
    pub average_order_value: Option<f64>,
}

impl SeriesSummary {
    pub fn from_buckets(buckets: &[Bucket]) -> Self {
        let total_revenue: f64 = buckets.iter().map(|b| b.revenue).sum();
        let total_orders: u64 = buckets.iter().map(|b| u64::from(b.orders)).sum();
        let average_order_value = if total_orders == 0 {
            None
        } else {
            Some(total_revenue / total_orders as f64)
        };

        Self {
            total_revenue,
            total_orders,
            average_order_value,
        }
    }
}
