//! Error analysis: severity split, time-of-day pattern, failing components
//! and quarterly spikes.

use crate::dashboards::ChartSpec;
use crate::shared::charts::{
    Axis, ChartConfig, ChartKind, ColorPolicy, Dataset, LegendPosition, ThresholdPalette,
    TickFormat,
};

const RED: &str = "rgba(239, 68, 68, 0.7)";
const AMBER: &str = "rgba(245, 158, 11, 0.7)";
const GREEN: &str = "rgba(16, 185, 129, 0.7)";

pub fn charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            id: "errorDistChart",
            title: "Error Distribution",
            config: error_distribution(),
        },
        ChartSpec {
            id: "temporalErrorChart",
            title: "Temporal Error Pattern",
            config: temporal_errors(),
        },
        ChartSpec {
            id: "failureChart",
            title: "Component Failures",
            config: component_failures(),
        },
        ChartSpec {
            id: "spikeChart",
            title: "Error Spikes",
            config: error_spikes(),
        },
    ]
}

/// Failure counts above 15K are critical, above 8K elevated.
pub fn failure_palette(alpha: &str) -> ThresholdPalette {
    let critical = format!("rgba(239, 68, 68, {alpha})");
    let elevated = format!("rgba(245, 158, 11, {alpha})");
    let normal = format!("rgba(16, 185, 129, {alpha})");
    ThresholdPalette::new(
        &[(15000.0, critical.as_str()), (8000.0, elevated.as_str())],
        &normal,
    )
}

fn error_distribution() -> ChartConfig {
    ChartConfig::new(ChartKind::Pie)
        .labels(&["Critical", "Major", "Minor", "Self-Resolved"])
        .dataset(
            Dataset::unlabeled(&[2867.0, 5234.0, 8934.0, 1668.0])
                .background(ColorPolicy::per_point(&[
                    RED,
                    AMBER,
                    "rgba(234, 179, 8, 0.7)",
                    GREEN,
                ]))
                .border(ColorPolicy::per_point(&[
                    "rgba(239, 68, 68, 1)",
                    "rgba(245, 158, 11, 1)",
                    "rgba(234, 179, 8, 1)",
                    "rgba(16, 185, 129, 1)",
                ]))
                .border_width(2),
        )
        .legend(LegendPosition::Right)
}

fn temporal_errors() -> ChartConfig {
    ChartConfig::new(ChartKind::Line)
        .labels(&["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"])
        .dataset(
            Dataset::values(
                "Error Frequency",
                &[234.0, 567.0, 2345.0, 3456.0, 1890.0, 456.0],
            )
            .border(ColorPolicy::solid("#ef4444"))
            .background(ColorPolicy::solid("rgba(239, 68, 68, 0.1)"))
            .tension(0.4)
            .filled()
            .point_radius(4, 6),
        )
        .y_axis(Axis::new().from_zero())
}

fn component_failures() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .labels(&[
            "Ticket\nPrinter",
            "Receipt\nPrinter",
            "Note\nRecycler",
            "Coin\nUnit",
            "RTD",
            "Card\nDisp",
        ])
        .dataset(
            Dataset::values(
                "Failures",
                &[19690.0, 13703.0, 10244.0, 8635.0, 4257.0, 3326.0],
            )
            .background(ColorPolicy::Thresholds(failure_palette("0.7")))
            .border(ColorPolicy::Thresholds(failure_palette("1")))
            .border_width(1),
        )
        .y_axis(Axis::new().ticks(TickFormat::Thousands))
}

fn error_spikes() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .labels(&["Mar 24", "Jun 24", "Sep 24", "Dec 24", "Mar 25", "Jun 25"])
        .dataset(
            Dataset::values("Error Spikes", &[456.0, 678.0, 523.0, 389.0, 412.0, 398.0])
                .background(ColorPolicy::solid(RED))
                .border(ColorPolicy::solid("rgba(239, 68, 68, 1)"))
                .border_width(1),
        )
        .y_axis(Axis::new().from_zero())
}
