use contracts::shared::config::{load_config, DashboardConfig, TimingOverrides};
use web_sys::window;

/// Embedded configuration with timing overrides taken from the page query
/// string, e.g. `?settle_delay_ms=0&max_poll_attempts=20`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let mut config = load_config()?;

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let overrides = parse_overrides(&search);
    if overrides.is_empty() {
        return Ok(config);
    }

    match config.timing.with_overrides(&overrides) {
        Ok(timing) => {
            log::info!("Timing overrides applied: {:?}", timing);
            config.timing = timing;
        }
        Err(err) => log::warn!("Ignoring timing overrides {:?}: {}", overrides, err),
    }
    Ok(config)
}

/// Unknown or malformed parameters yield no overrides.
pub fn parse_overrides(search: &str) -> TimingOverrides {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}
