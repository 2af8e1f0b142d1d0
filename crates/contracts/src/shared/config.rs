use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub timing: TimingConfig,
    pub chart_defaults: ChartDefaults,
}

/// Delays and retry bounds of the view-switch choreography and the
/// charting-library readiness wait.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Pause between showing the loading indicator and swapping views.
    pub settle_delay_ms: u32,
    pub poll_interval_ms: u32,
    pub max_poll_attempts: u32,
}

/// Global Chart.js defaults applied once the library is available.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ChartDefaults {
    pub font_family: String,
    pub color: String,
    pub legend_display: bool,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

/// Partial timing settings, e.g. parsed from the page query string.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingOverrides {
    pub settle_delay_ms: Option<u32>,
    pub poll_interval_ms: Option<u32>,
    pub max_poll_attempts: Option<u32>,
}

impl TimingOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r##"
[timing]
settle_delay_ms = 50
poll_interval_ms = 200
max_poll_attempts = 10

[chart_defaults]
font_family = "'Segoe UI', -apple-system, BlinkMacSystemFont, 'Helvetica Neue', Arial, sans-serif"
color = "#4a5568"
legend_display = false
responsive = true
maintain_aspect_ratio = false
"##;

impl DashboardConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.timing.validate()?;
        Ok(config)
    }
}

impl TimingConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be greater than zero");
        }
        if self.max_poll_attempts == 0 {
            anyhow::bail!("max_poll_attempts must be greater than zero");
        }
        Ok(())
    }

    /// Returns a copy with the overrides applied, or an error if the result
    /// would be invalid. `self` is never modified.
    pub fn with_overrides(&self, overrides: &TimingOverrides) -> anyhow::Result<Self> {
        let merged = Self {
            settle_delay_ms: overrides.settle_delay_ms.unwrap_or(self.settle_delay_ms),
            poll_interval_ms: overrides.poll_interval_ms.unwrap_or(self.poll_interval_ms),
            max_poll_attempts: overrides.max_poll_attempts.unwrap_or(self.max_poll_attempts),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_toml(DEFAULT_CONFIG)
}
