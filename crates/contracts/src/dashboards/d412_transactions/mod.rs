//! Transactions and revenue: monthly revenue by tender, payment split,
//! hourly load, cash-to-card migration and product mix.

use crate::dashboards::ChartSpec;
use crate::shared::charts::{
    Axis, ChartConfig, ChartKind, ColorPolicy, Dataset, LegendPosition, ThresholdPalette,
    TickFormat, TooltipFormat,
};

const MONTHS: [&str; 16] = [
    "Mar 24", "Apr 24", "May 24", "Jun 24", "Jul 24", "Aug 24", "Sep 24", "Oct 24", "Nov 24",
    "Dec 24", "Jan 25", "Feb 25", "Mar 25", "Apr 25", "May 25", "Jun 25",
];

const PRODUCT_FILL: [&str; 5] = [
    "rgba(59, 130, 246, 0.7)",
    "rgba(16, 185, 129, 0.7)",
    "rgba(139, 92, 246, 0.7)",
    "rgba(245, 158, 11, 0.7)",
    "rgba(107, 114, 128, 0.7)",
];

const PRODUCT_BORDER: [&str; 5] = [
    "rgba(59, 130, 246, 1)",
    "rgba(16, 185, 129, 1)",
    "rgba(139, 92, 246, 1)",
    "rgba(245, 158, 11, 1)",
    "rgba(107, 114, 128, 1)",
];

pub fn charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            id: "revenueChart",
            title: "Revenue Trend",
            config: revenue(),
        },
        ChartSpec {
            id: "paymentDistChart",
            title: "Payment Distribution",
            config: payment_distribution(),
        },
        ChartSpec {
            id: "hourlyTransChart",
            title: "Hourly Transaction Pattern",
            config: hourly_transactions(),
        },
        ChartSpec {
            id: "cashCardTrendChart",
            title: "Cash to Card Migration",
            config: cash_card_trend(),
        },
        ChartSpec {
            id: "productVolumeChart",
            title: "Product Volume",
            config: product_volume(),
        },
        ChartSpec {
            id: "productRevenueChart",
            title: "Product Revenue",
            config: product_revenue(),
        },
    ]
}

/// Peak hours above 4K transactions, busy above 2K.
pub fn hourly_palette() -> ThresholdPalette {
    ThresholdPalette::new(
        &[
            (4000.0, "rgba(239, 68, 68, 0.7)"),
            (2000.0, "rgba(245, 158, 11, 0.7)"),
        ],
        "rgba(59, 130, 246, 0.7)",
    )
}

fn revenue() -> ChartConfig {
    ChartConfig::new(ChartKind::Line)
        .labels(&MONTHS)
        .dataset(
            Dataset::values(
                "Total Revenue",
                &[
                    142000.0, 148000.0, 155000.0, 162000.0, 168000.0, 175000.0, 178000.0, 182000.0,
                    185000.0, 188000.0, 191000.0, 194000.0, 197000.0, 199000.0, 201000.0, 203000.0,
                ],
            )
            .border(ColorPolicy::solid("#818cf8"))
            .background(ColorPolicy::solid("rgba(129, 140, 248, 0.1)"))
            .tension(0.4)
            .filled(),
        )
        .dataset(
            Dataset::values(
                "Cash Revenue",
                &[
                    95000.0, 93000.0, 91000.0, 89000.0, 87000.0, 85000.0, 83000.0, 81000.0,
                    79000.0, 77000.0, 75000.0, 73000.0, 71000.0, 69000.0, 67000.0, 65000.0,
                ],
            )
            .border(ColorPolicy::solid("#10b981"))
            .dashed(&[5, 5])
            .tension(0.4),
        )
        .dataset(
            Dataset::values(
                "Card Revenue",
                &[
                    47000.0, 55000.0, 64000.0, 73000.0, 81000.0, 90000.0, 95000.0, 101000.0,
                    106000.0, 111000.0, 116000.0, 121000.0, 126000.0, 130000.0, 134000.0,
                    138000.0,
                ],
            )
            .border(ColorPolicy::solid("#f59e0b"))
            .dashed(&[5, 5])
            .tension(0.4),
        )
        .legend(LegendPosition::Top)
        .y_axis(Axis::new().ticks(TickFormat::PoundsThousands))
}

fn payment_distribution() -> ChartConfig {
    ChartConfig::new(ChartKind::Doughnut)
        .labels(&["Cash", "Bank Card", "Contactless", "Mobile Pay"])
        .dataset(
            Dataset::unlabeled(&[58.8, 24.3, 12.4, 4.5])
                .background(ColorPolicy::per_point(&[
                    "rgba(16, 185, 129, 0.8)",
                    "rgba(59, 130, 246, 0.8)",
                    "rgba(139, 92, 246, 0.8)",
                    "rgba(236, 72, 153, 0.8)",
                ]))
                .border(ColorPolicy::per_point(&[
                    "rgba(16, 185, 129, 1)",
                    "rgba(59, 130, 246, 1)",
                    "rgba(139, 92, 246, 1)",
                    "rgba(236, 72, 153, 1)",
                ]))
                .border_width(2),
        )
        .legend(LegendPosition::Right)
        .tooltip(TooltipFormat::label_suffix("%"))
}

fn hourly_transactions() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .labels(&[
            "05:00", "06:00", "07:00", "08:00", "09:00", "10:00", "11:00", "12:00", "13:00",
            "14:00", "15:00", "16:00", "17:00", "18:00", "19:00", "20:00", "21:00", "22:00",
            "23:00",
        ])
        .dataset(
            Dataset::values(
                "Transactions",
                &[
                    120.0, 450.0, 2340.0, 4560.0, 3890.0, 2340.0, 1890.0, 2560.0, 2890.0, 2340.0,
                    2670.0, 3890.0, 4670.0, 5230.0, 3450.0, 2340.0, 1560.0, 890.0, 340.0,
                ],
            )
            .background(ColorPolicy::Thresholds(hourly_palette()))
            .border_width(1),
        )
        .y_axis(Axis::new().from_zero())
}

fn cash_card_trend() -> ChartConfig {
    ChartConfig::new(ChartKind::Line)
        .labels(&["Mar 24", "Jun 24", "Sep 24", "Dec 24", "Mar 25", "Jun 25"])
        .dataset(
            Dataset::values("Cash %", &[72.0, 66.0, 63.0, 60.0, 59.0, 58.8])
                .border(ColorPolicy::solid("#10b981"))
                .background(ColorPolicy::solid("rgba(16, 185, 129, 0.1)"))
                .tension(0.4)
                .filled(),
        )
        .dataset(
            Dataset::values("Card %", &[28.0, 34.0, 37.0, 40.0, 41.0, 41.2])
                .border(ColorPolicy::solid("#3b82f6"))
                .background(ColorPolicy::solid("rgba(59, 130, 246, 0.1)"))
                .tension(0.4)
                .filled(),
        )
        .legend(LegendPosition::Top)
        .y_axis(Axis::new().ticks(TickFormat::Percent))
}

fn product_volume() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .labels(&["Oyster", "Magnetic", "Contactless", "Paper", "Other"])
        .dataset(
            Dataset::values(
                "Transaction Volume",
                &[271000.0, 78000.0, 32000.0, 12000.0, 5520.0],
            )
            .background(ColorPolicy::per_point(&PRODUCT_FILL))
            .border(ColorPolicy::per_point(&PRODUCT_BORDER))
            .border_width(1),
        )
        .y_axis(Axis::new().ticks(TickFormat::Thousands))
}

fn product_revenue() -> ChartConfig {
    ChartConfig::new(ChartKind::Pie)
        .labels(&[
            "Oyster Top-up",
            "Day Travelcard",
            "Season Ticket",
            "Pay As You Go",
            "Other",
        ])
        .dataset(
            Dataset::unlabeled(&[1420000.0, 568000.0, 426000.0, 284000.0, 142000.0])
                .background(ColorPolicy::per_point(&PRODUCT_FILL))
                .border(ColorPolicy::per_point(&PRODUCT_BORDER))
                .border_width(2),
        )
        .legend(LegendPosition::Right)
        .tooltip(TooltipFormat::ShareOfTotalMillions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_hours_highlighted() {
        let palette = hourly_palette();
        assert_eq!(palette.color_for(5230.0), "rgba(239, 68, 68, 0.7)");
        assert_eq!(palette.color_for(2340.0), "rgba(245, 158, 11, 0.7)");
        assert_eq!(palette.color_for(2000.0), "rgba(59, 130, 246, 0.7)");
    }

    #[test]
    fn test_revenue_has_three_series_with_dashed_tenders() {
        let config = revenue();
        assert_eq!(config.datasets.len(), 3);
        assert!(config.datasets[0].border_dash.is_none());
        assert_eq!(config.datasets[1].border_dash, Some(vec![5, 5]));
        assert_eq!(
            config.options.formatted_axes(),
            vec![("y", TickFormat::PoundsThousands)]
        );
    }
}
