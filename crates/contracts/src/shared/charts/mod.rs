//! Chart configuration model.
//!
//! A `ChartConfig` describes one chart the way Chart.js understands it, minus
//! the scriptable callbacks: those are expressed through the policies in
//! [`policy`] and attached by the frontend when the chart is constructed.

pub mod policy;

pub use policy::{Band, ColorPolicy, ThresholdPalette, TickFormat, TooltipFormat};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Pie,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Points(Vec<Point>),
}

impl SeriesData {
    /// The value each point is coloured and labelled by (y for scatter points).
    pub fn values(&self) -> Vec<f64> {
        match self {
            SeriesData::Values(values) => values.clone(),
            SeriesData::Points(points) => points.iter().map(|p| p.y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(values) => values.len(),
            SeriesData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_json(&self) -> Value {
        match self {
            SeriesData::Values(values) => json!(values),
            SeriesData::Points(points) => Value::Array(
                points
                    .iter()
                    .map(|p| json!({ "x": p.x, "y": p.y }))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: SeriesData,
    pub background: Option<ColorPolicy>,
    pub border: Option<ColorPolicy>,
    pub border_width: Option<u32>,
    pub border_dash: Option<Vec<u32>>,
    pub tension: Option<f64>,
    pub fill: bool,
    pub point_radius: Option<u32>,
    pub point_hover_radius: Option<u32>,
}

impl Dataset {
    fn with_data(label: Option<&str>, data: SeriesData) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            background: None,
            border: None,
            border_width: None,
            border_dash: None,
            tension: None,
            fill: false,
            point_radius: None,
            point_hover_radius: None,
        }
    }

    pub fn values(label: &str, data: &[f64]) -> Self {
        Self::with_data(Some(label), SeriesData::Values(data.to_vec()))
    }

    /// Dataset without a series label (pie and doughnut slices use the chart labels).
    pub fn unlabeled(data: &[f64]) -> Self {
        Self::with_data(None, SeriesData::Values(data.to_vec()))
    }

    pub fn points(label: &str, data: &[(f64, f64)]) -> Self {
        let points = data.iter().map(|&(x, y)| Point { x, y }).collect();
        Self::with_data(Some(label), SeriesData::Points(points))
    }

    pub fn background(mut self, policy: ColorPolicy) -> Self {
        self.background = Some(policy);
        self
    }

    pub fn border(mut self, policy: ColorPolicy) -> Self {
        self.border = Some(policy);
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn dashed(mut self, pattern: &[u32]) -> Self {
        self.border_dash = Some(pattern.to_vec());
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn point_radius(mut self, radius: u32, hover_radius: u32) -> Self {
        self.point_radius = Some(radius);
        self.point_hover_radius = Some(hover_radius);
        self
    }

    fn to_json(&self) -> Value {
        let values = self.data.values();
        let mut out = Map::new();
        if let Some(label) = &self.label {
            out.insert("label".into(), json!(label));
        }
        out.insert("data".into(), self.data.to_json());
        if let Some(background) = &self.background {
            out.insert("backgroundColor".into(), background.resolve(&values));
        }
        if let Some(border) = &self.border {
            out.insert("borderColor".into(), border.resolve(&values));
        }
        if let Some(width) = self.border_width {
            out.insert("borderWidth".into(), json!(width));
        }
        if let Some(dash) = &self.border_dash {
            out.insert("borderDash".into(), json!(dash));
        }
        if let Some(tension) = self.tension {
            out.insert("tension".into(), json!(tension));
        }
        if self.fill {
            out.insert("fill".into(), json!(true));
        }
        if let Some(radius) = self.point_radius {
            out.insert("pointRadius".into(), json!(radius));
        }
        if let Some(radius) = self.point_hover_radius {
            out.insert("pointHoverRadius".into(), json!(radius));
        }
        Value::Object(out)
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Right,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::Top => "top",
            LegendPosition::Bottom => "bottom",
            LegendPosition::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub begin_at_zero: bool,
    pub title: Option<String>,
    pub ticks: TickFormat,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn from_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn ticks(mut self, ticks: TickFormat) -> Self {
        self.ticks = ticks;
        self
    }

    fn to_json(&self) -> Value {
        let mut out = Map::new();
        if let Some(min) = self.min {
            out.insert("min".into(), json!(min));
        }
        if let Some(max) = self.max {
            out.insert("max".into(), json!(max));
        }
        if self.begin_at_zero {
            out.insert("beginAtZero".into(), json!(true));
        }
        if let Some(title) = &self.title {
            out.insert("title".into(), json!({ "display": true, "text": title }));
        }
        // Non-plain ticks get their `callback` attached by the frontend.
        out.insert("ticks".into(), json!({}));
        Value::Object(out)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    /// `None` keeps the global default (hidden legend).
    pub legend: Option<LegendPosition>,
    pub x: Option<Axis>,
    pub y: Option<Axis>,
    pub tooltip: TooltipFormat,
}

impl ChartOptions {
    /// Axes that carry a non-plain tick format, keyed by Chart.js scale id.
    pub fn formatted_axes(&self) -> Vec<(&'static str, TickFormat)> {
        [("x", &self.x), ("y", &self.y)]
            .into_iter()
            .filter_map(|(id, axis)| axis.as_ref().map(|a| (id, a.ticks)))
            .filter(|(_, ticks)| !ticks.is_plain())
            .collect()
    }

    fn to_json(&self) -> Value {
        let mut scales = Map::new();
        if let Some(x) = &self.x {
            scales.insert("x".into(), x.to_json());
        }
        if let Some(y) = &self.y {
            scales.insert("y".into(), y.to_json());
        }

        let mut plugins = Map::new();
        if let Some(position) = self.legend {
            plugins.insert(
                "legend".into(),
                json!({ "display": true, "position": position.as_str() }),
            );
        }
        plugins.insert("tooltip".into(), json!({ "callbacks": {} }));

        let mut out = Map::new();
        if !scales.is_empty() {
            out.insert("scales".into(), Value::Object(scales));
        }
        out.insert("plugins".into(), Value::Object(plugins));
        Value::Object(out)
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.options.legend = Some(position);
        self
    }

    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.options.x = Some(axis);
        self
    }

    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.options.y = Some(axis);
        self
    }

    pub fn tooltip(mut self, tooltip: TooltipFormat) -> Self {
        self.options.tooltip = tooltip;
        self
    }

    /// Series values of every dataset, in dataset order.
    pub fn series_values(&self) -> Vec<Vec<f64>> {
        self.datasets.iter().map(|d| d.data.values()).collect()
    }

    /// Chart.js configuration object with colour policies resolved and empty
    /// `ticks` / `tooltip.callbacks` slots left for the frontend callbacks.
    pub fn to_chartjs(&self) -> Value {
        let mut data = Map::new();
        if !self.labels.is_empty() {
            data.insert("labels".into(), json!(self.labels));
        }
        data.insert(
            "datasets".into(),
            Value::Array(self.datasets.iter().map(Dataset::to_json).collect()),
        );

        json!({
            "type": self.kind.as_str(),
            "data": Value::Object(data),
            "options": self.options.to_json(),
        })
    }
}
