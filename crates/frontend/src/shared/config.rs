use contracts::enums::TimeRange;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::dashboards::d100_revenue_overview::ui::ChartType;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub loading: LoadingConfig,
    pub chart: ChartConfig,
}

/// Simulated latency of the mock data layer
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    pub chart_delay_ms: u32,
    pub apply_filters_delay_ms: u32,
    pub clear_filters_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub default_time_range: TimeRange,
    pub default_chart_type: ChartType,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            chart_delay_ms: 800,
            apply_filters_delay_ms: 800,
            clear_filters_delay_ms: 500,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_time_range: TimeRange::Month,
            default_chart_type: ChartType::Line,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[loading]
chart_delay_ms = 800
apply_filters_delay_ms = 800
clear_filters_delay_ms = 500

[chart]
default_time_range = "month"
default_chart_type = "line"
"#;

/// localStorage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "revenue_dashboard.config";

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. TOML override in localStorage
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage key {}", CONFIG_STORAGE_KEY);
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Ignoring invalid config override: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Process-wide configuration, loaded on first access
pub fn get_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|e| {
            log::error!("Failed to load configuration: {}", e);
            DashboardConfig::default()
        })
    })
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<String> {
    None
}
