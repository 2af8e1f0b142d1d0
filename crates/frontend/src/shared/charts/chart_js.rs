//! Chart.js binding. The library is loaded by a `<script>` tag of the host
//! page and exposed as the global `Chart` class.

use super::{ChartLibrary, Renderable};
use contracts::shared::charts::{ChartConfig, TickFormat, TooltipFormat};
use contracts::shared::config::ChartDefaults;
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = Chart, catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = Chart, catch)]
    fn destroy(this: &JsChart) -> Result<(), JsValue>;
}

type TickCallback = Closure<dyn Fn(f64) -> String>;
type TooltipCallback = Closure<dyn Fn(JsValue) -> String>;

/// A constructed Chart.js chart together with the Rust callbacks it calls
/// into. The callbacks must outlive the chart, so they are owned here and
/// released after `destroy()`.
pub struct ChartJsHandle {
    chart: JsChart,
    _ticks: Vec<TickCallback>,
    _tooltip: Option<TooltipCallback>,
}

impl Renderable for ChartJsHandle {
    fn teardown(self) -> Result<(), String> {
        self.chart.destroy().map_err(|err| describe(&err))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartLibrary for ChartJs {
    type Surface = CanvasRenderingContext2d;
    type Handle = ChartJsHandle;

    fn is_loaded(&self) -> bool {
        chart_class().map(|class| class.is_function()).unwrap_or(false)
    }

    fn apply_defaults(&self, defaults: &ChartDefaults) -> Result<(), String> {
        let apply = || -> Result<(), JsValue> {
            let chart_defaults = Reflect::get(&chart_class()?, &"defaults".into())?;
            set_path(
                &chart_defaults,
                &["font", "family"],
                &defaults.font_family.as_str().into(),
            )?;
            set_path(&chart_defaults, &["color"], &defaults.color.as_str().into())?;
            set_path(
                &chart_defaults,
                &["plugins", "legend", "display"],
                &defaults.legend_display.into(),
            )?;
            set_path(&chart_defaults, &["responsive"], &defaults.responsive.into())?;
            set_path(
                &chart_defaults,
                &["maintainAspectRatio"],
                &defaults.maintain_aspect_ratio.into(),
            )
        };
        apply().map_err(|err| describe(&err))
    }

    fn construct(
        &self,
        context: CanvasRenderingContext2d,
        config: &ChartConfig,
    ) -> Result<ChartJsHandle, String> {
        let js_config = config
            .to_chartjs()
            .serialize(&Serializer::json_compatible())
            .map_err(|err| err.to_string())?;

        let ticks = attach_tick_callbacks(&js_config, config).map_err(|err| describe(&err))?;
        let tooltip = attach_tooltip_callback(&js_config, config).map_err(|err| describe(&err))?;

        let chart = JsChart::new(&context, &js_config).map_err(|err| describe(&err))?;
        Ok(ChartJsHandle {
            chart,
            _ticks: ticks,
            _tooltip: tooltip,
        })
    }
}

fn chart_class() -> Result<JsValue, JsValue> {
    Reflect::get(&js_sys::global(), &"Chart".into())
}

fn attach_tick_callbacks(js_config: &JsValue, config: &ChartConfig) -> Result<Vec<TickCallback>, JsValue> {
    let mut callbacks = Vec::new();
    for (axis, format) in config.options.formatted_axes() {
        let callback = tick_callback(format);
        set_path(
            js_config,
            &["options", "scales", axis, "ticks", "callback"],
            callback.as_ref(),
        )?;
        callbacks.push(callback);
    }
    Ok(callbacks)
}

fn tick_callback(format: TickFormat) -> TickCallback {
    Closure::new(move |value: f64| format.format(value))
}

fn attach_tooltip_callback(
    js_config: &JsValue,
    config: &ChartConfig,
) -> Result<Option<TooltipCallback>, JsValue> {
    if config.options.tooltip == TooltipFormat::Default {
        return Ok(None);
    }

    let format = config.options.tooltip.clone();
    let series = config.series_values();
    let callback: TooltipCallback = Closure::new(move |context: JsValue| {
        let label = Reflect::get(&context, &"label".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let value = Reflect::get(&context, &"raw".into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let dataset = Reflect::get(&context, &"datasetIndex".into())
            .ok()
            .and_then(|v| v.as_f64())
            .map(|index| index as usize)
            .unwrap_or(0);
        let values = series.get(dataset).map(Vec::as_slice).unwrap_or(&[]);
        format.label(&label, value, values).unwrap_or(label)
    });

    set_path(
        js_config,
        &["options", "plugins", "tooltip", "callbacks", "label"],
        callback.as_ref(),
    )?;
    Ok(Some(callback))
}

/// Sets `root.a.b.c = value`, creating missing intermediate objects.
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut target = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = Reflect::get(&target, &key)?;
        if next.is_undefined() || next.is_null() {
            next = Object::new().into();
            Reflect::set(&target, &key, &next)?;
        }
        target = next;
    }
    Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
