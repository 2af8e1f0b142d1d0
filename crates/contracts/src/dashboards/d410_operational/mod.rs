//! Operational performance: availability, component health, daily event
//! pattern and temperature impact.

use crate::dashboards::ChartSpec;
use crate::shared::charts::{
    Axis, ChartConfig, ChartKind, ColorPolicy, Dataset, LegendPosition, TickFormat, TooltipFormat,
};

const QUARTERS: [&str; 6] = ["Mar 24", "Jun 24", "Sep 24", "Dec 24", "Mar 25", "Jun 25"];
const FOUR_HOURLY: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

pub fn charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            id: "availabilityChart",
            title: "Availability Trend",
            config: availability(),
        },
        ChartSpec {
            id: "healthChart",
            title: "Component Health",
            config: component_health(),
        },
        ChartSpec {
            id: "dailyPatternChart",
            title: "Daily Event Pattern",
            config: daily_pattern(),
        },
        ChartSpec {
            id: "tempPerfChart",
            title: "Temperature vs Performance",
            config: temperature_performance(),
        },
    ]
}

fn availability() -> ChartConfig {
    ChartConfig::new(ChartKind::Line)
        .labels(&QUARTERS)
        .dataset(
            Dataset::values("Availability %", &[93.5, 94.2, 93.8, 94.5, 94.83, 94.9])
                .border(ColorPolicy::solid("#818cf8"))
                .background(ColorPolicy::solid("rgba(129, 140, 248, 0.1)"))
                .tension(0.4)
                .filled()
                .point_radius(4, 6),
        )
        .y_axis(Axis::new().range(92.0, 96.0).ticks(TickFormat::Percent))
        .tooltip(TooltipFormat::affixed("Availability: ", "%"))
}

fn component_health() -> ChartConfig {
    ChartConfig::new(ChartKind::Doughnut)
        .labels(&["Healthy (>95%)", "Warning (90-95%)", "Critical (<90%)"])
        .dataset(
            Dataset::unlabeled(&[5.0, 1.0, 2.0])
                .background(ColorPolicy::per_point(&[
                    "rgba(167, 243, 208, 0.8)",
                    "rgba(254, 215, 170, 0.8)",
                    "rgba(254, 202, 202, 0.8)",
                ]))
                .border(ColorPolicy::per_point(&[
                    "rgba(110, 231, 183, 1)",
                    "rgba(251, 146, 60, 1)",
                    "rgba(252, 165, 165, 1)",
                ]))
                .border_width(2),
        )
        .legend(LegendPosition::Bottom)
}

fn daily_pattern() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .labels(&FOUR_HOURLY)
        .dataset(
            Dataset::values("Events", &[150.0, 80.0, 450.0, 680.0, 520.0, 280.0])
                .background(ColorPolicy::solid("rgba(129, 140, 248, 0.7)"))
                .border(ColorPolicy::solid("rgba(129, 140, 248, 1)"))
                .border_width(1),
        )
        .y_axis(Axis::new().from_zero())
}

fn temperature_performance() -> ChartConfig {
    ChartConfig::new(ChartKind::Scatter)
        .dataset(
            Dataset::points(
                "Temp vs Performance",
                &[
                    (28.0, 96.5),
                    (35.0, 95.2),
                    (42.0, 94.3),
                    (48.0, 93.2),
                    (55.0, 91.8),
                    (62.0, 89.2),
                ],
            )
            .background(ColorPolicy::solid("rgba(59, 130, 246, 0.6)"))
            .point_radius(6, 8),
        )
        .x_axis(Axis::new().titled("Temperature (°C)"))
        .y_axis(Axis::new().titled("Availability (%)"))
}
