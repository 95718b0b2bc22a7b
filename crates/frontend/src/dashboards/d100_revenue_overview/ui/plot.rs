//! SVG geometry for the revenue chart.
//!
//! Buckets in, coordinates out. Revenue is plotted against the left axis and
//! orders against the right one, both sharing the same x bands.

use contracts::dashboards::d100_revenue_overview::Bucket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
}

impl ChartType {
    pub fn code(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
        }
    }

    pub fn all() -> Vec<ChartType> {
        vec![ChartType::Line, ChartType::Bar]
    }
}

/// Drawing surface in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 320.0,
            left: 56.0,
            right: 48.0,
            top: 10.0,
            bottom: 32.0,
        }
    }
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// Map `value` inside `domain` to a y coordinate (larger values higher up)
    pub fn y_for(&self, value: f64, domain: Domain) -> f64 {
        let ratio = (value - domain.min) / domain.span();
        self.baseline() - ratio.clamp(0.0, 1.0) * self.inner_height()
    }
}

/// Value range of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Line charts pad the data range, bar charts always start at zero
    pub fn for_values(values: &[f64], chart_type: ChartType, padding: f64) -> Self {
        if values.is_empty() {
            return Domain { min: 0.0, max: 1.0 };
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let domain = match chart_type {
            ChartType::Line => Domain {
                min: (min - padding).max(0.0),
                max: max + padding,
            },
            ChartType::Bar => Domain { min: 0.0, max },
        };

        if domain.span() <= 0.0 {
            Domain {
                min: domain.min,
                max: domain.min + 1.0,
            }
        } else {
            domain
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `count` evenly spaced tick values from min to max inclusive
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => (0..count)
                .map(|i| self.min + self.span() * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

pub const REVENUE_PADDING: f64 = 1000.0;
pub const ORDERS_PADDING: f64 = 10.0;

/// One bucket projected onto the plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Centre of the bucket's x band
    pub x: f64,
    pub revenue_y: f64,
    pub orders_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<PlotPoint>,
    pub band_width: f64,
    pub revenue_domain: Domain,
    pub orders_domain: Domain,
}

pub fn layout(buckets: &[Bucket], area: &PlotArea, chart_type: ChartType) -> ChartLayout {
    let revenues: Vec<f64> = buckets.iter().map(|b| b.revenue).collect();
    let orders: Vec<f64> = buckets.iter().map(|b| f64::from(b.orders)).collect();
    let revenue_domain = Domain::for_values(&revenues, chart_type, REVENUE_PADDING);
    let orders_domain = Domain::for_values(&orders, chart_type, ORDERS_PADDING);

    let band_width = if buckets.is_empty() {
        0.0
    } else {
        area.inner_width() / buckets.len() as f64
    };

    let points = revenues
        .iter()
        .zip(&orders)
        .enumerate()
        .map(|(i, (revenue, orders))| PlotPoint {
            x: area.left + band_width * (i as f64 + 0.5),
            revenue_y: area.y_for(*revenue, revenue_domain),
            orders_y: area.y_for(*orders, orders_domain),
        })
        .collect();

    ChartLayout {
        points,
        band_width,
        revenue_domain,
        orders_domain,
    }
}

/// `points` attribute of an SVG polyline
pub fn polyline_points(points: &[PlotPoint], y: impl Fn(&PlotPoint) -> f64) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, y(p)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar width: wide bars for the short daily range, never wider than 40% of a band
pub fn bar_width(preferred: f64, band_width: f64) -> f64 {
    preferred.min(band_width * 0.4).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_revenue_overview::BucketLabel;

    fn bucket(ordinal: u32, revenue: f64, orders: u32) -> Bucket {
        Bucket {
            label: BucketLabel::Week(ordinal),
            revenue,
            orders,
            days: 7,
        }
    }

    #[test]
    fn test_line_domain_is_padded() {
        let domain = Domain::for_values(&[4000.0, 6500.0], ChartType::Line, REVENUE_PADDING);
        assert_eq!(domain, Domain { min: 3000.0, max: 7500.0 });

        let bar = Domain::for_values(&[4000.0, 6500.0], ChartType::Bar, REVENUE_PADDING);
        assert_eq!(bar, Domain { min: 0.0, max: 6500.0 });
    }

    #[test]
    fn test_degenerate_domains() {
        assert_eq!(Domain::for_values(&[], ChartType::Line, 10.0).span(), 1.0);
        assert_eq!(Domain::for_values(&[0.0], ChartType::Bar, 10.0).span(), 1.0);
    }

    #[test]
    fn test_layout_points() {
        let area = PlotArea {
            width: 120.0,
            height: 110.0,
            left: 10.0,
            right: 10.0,
            top: 5.0,
            bottom: 5.0,
        };
        let buckets = vec![bucket(1, 0.0, 0), bucket(2, 1000.0, 50)];
        let layout = layout(&buckets, &area, ChartType::Bar);

        assert_eq!(layout.band_width, 50.0);
        assert_eq!(layout.points[0].x, 35.0);
        assert_eq!(layout.points[1].x, 85.0);
        // zero sits on the baseline, the maximum touches the top
        assert_eq!(layout.points[0].revenue_y, 105.0);
        assert_eq!(layout.points[1].revenue_y, 5.0);
        assert_eq!(layout.points[1].orders_y, 5.0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(&[], &PlotArea::default(), ChartType::Line);
        assert!(layout.points.is_empty());
        assert_eq!(layout.band_width, 0.0);
    }

    #[test]
    fn test_ticks_and_polyline() {
        let domain = Domain { min: 0.0, max: 100.0 };
        assert_eq!(domain.ticks(3), vec![0.0, 50.0, 100.0]);
        assert!(domain.ticks(0).is_empty());

        let points = vec![
            PlotPoint { x: 1.0, revenue_y: 2.0, orders_y: 3.0 },
            PlotPoint { x: 4.0, revenue_y: 5.5, orders_y: 6.0 },
        ];
        assert_eq!(polyline_points(&points, |p| p.revenue_y), "1.0,2.0 4.0,5.5");
    }

    #[test]
    fn test_bar_width_clamped() {
        assert_eq!(bar_width(20.0, 100.0), 20.0);
        assert_eq!(bar_width(20.0, 10.0), 4.0);
    }

    #[test]
    fn test_chart_type_codes() {
        let codes: Vec<&str> = ChartType::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["line", "bar"]);
        assert_eq!(ChartType::default(), ChartType::Line);
    }
}
