//! Value → display policies.
//!
//! Chart.js accepts scriptable options (functions of the data point) for
//! colours, tick labels and tooltips. Here they are plain data so the catalog
//! stays serialisable and the formatting is testable without a browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

/// One band of a threshold palette: values strictly above `above` get `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub above: f64,
    pub color: String,
}

/// Buckets a value into a colour. Bands are checked in order, so list the
/// highest threshold first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPalette {
    pub bands: Vec<Band>,
    pub fallback: String,
}

impl ThresholdPalette {
    pub fn new(bands: &[(f64, &str)], fallback: &str) -> Self {
        Self {
            bands: bands
                .iter()
                .map(|(above, color)| Band {
                    above: *above,
                    color: color.to_string(),
                })
                .collect(),
            fallback: fallback.to_string(),
        }
    }

    pub fn color_for(&self, value: f64) -> &str {
        self.bands
            .iter()
            .find(|band| value > band.above)
            .map(|band| band.color.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

/// How a dataset colour (background or border) is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ColorPolicy {
    Solid(String),
    PerPoint(Vec<String>),
    Thresholds(ThresholdPalette),
}

impl ColorPolicy {
    pub fn solid(color: &str) -> Self {
        Self::Solid(color.to_string())
    }

    pub fn per_point(colors: &[&str]) -> Self {
        Self::PerPoint(colors.iter().map(|c| c.to_string()).collect())
    }

    /// Resolves the policy against the series values into the JSON Chart.js
    /// expects: a single colour string or one colour per point.
    pub fn resolve(&self, values: &[f64]) -> Value {
        match self {
            ColorPolicy::Solid(color) => Value::String(color.clone()),
            ColorPolicy::PerPoint(colors) => {
                Value::Array(colors.iter().cloned().map(Value::String).collect())
            }
            ColorPolicy::Thresholds(palette) => Value::Array(
                values
                    .iter()
                    .map(|v| Value::String(palette.color_for(*v).to_string()))
                    .collect(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Axis ticks
// ---------------------------------------------------------------------------

/// Label format for axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickFormat {
    /// Leave the library's default labels in place.
    #[default]
    Plain,
    /// `94.5` → `94.5%`
    Percent,
    /// `15000` → `15K`
    Thousands,
    /// `142000` → `£142K`
    PoundsThousands,
}

impl TickFormat {
    pub fn is_plain(&self) -> bool {
        matches!(self, TickFormat::Plain)
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => format!("{}", value),
            TickFormat::Percent => format!("{}%", value),
            TickFormat::Thousands => format!("{}K", value / 1000.0),
            TickFormat::PoundsThousands => format!("£{}K", value / 1000.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Tooltips
// ---------------------------------------------------------------------------

/// Tooltip label format for a hovered data point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TooltipFormat {
    #[default]
    Default,
    /// `{prefix}{value}{suffix}`, e.g. `Availability: 94.9%`.
    Affixed { prefix: String, suffix: String },
    /// `{label}: {value}{suffix}`, e.g. `Cash: 58.8%`.
    LabelSuffix { suffix: String },
    /// `{label}: £{value in millions}M ({share of series total}%)`.
    ShareOfTotalMillions,
}

impl TooltipFormat {
    pub fn affixed(prefix: &str, suffix: &str) -> Self {
        Self::Affixed {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn label_suffix(suffix: &str) -> Self {
        Self::LabelSuffix {
            suffix: suffix.to_string(),
        }
    }

    /// Returns `None` when the library's default tooltip should be used.
    pub fn label(&self, label: &str, value: f64, series: &[f64]) -> Option<String> {
        match self {
            TooltipFormat::Default => None,
            TooltipFormat::Affixed { prefix, suffix } => {
                Some(format!("{}{}{}", prefix, value, suffix))
            }
            TooltipFormat::LabelSuffix { suffix } => Some(format!("{}: {}{}", label, value, suffix)),
            TooltipFormat::ShareOfTotalMillions => {
                let total: f64 = series.iter().sum();
                let share = if total == 0.0 {
                    0.0
                } else {
                    value / total * 100.0
                };
                Some(format!(
                    "{}: £{:.2}M ({:.1}%)",
                    label,
                    value / 1_000_000.0,
                    share
                ))
            }
        }
    }
}
