//! Chart.js Integration
//!
//! Binds the `Chart` class the host page loads, builds chart configurations
//! from visualization data, and owns the live chart handles.

use js_sys::{Array, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::models::{DailyDistribution, LabeledSeries, NutrientComparison, VisualizationData};

#[wasm_bindgen]
extern "C" {
    /// Chart.js chart instance
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Protein, carbs, fat
const MACRO_COLORS: [&str; 3] = ["#4CAF50", "#FF9800", "#2196F3"];
/// Breakfast, lunch, dinner, snacks
const MEAL_COLORS: [&str; 4] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0"];

const RECOMMENDED_FILL: &str = "#81C784";
const RECOMMENDED_BORDER: &str = "#4CAF50";
const ACTUAL_FILL: &str = "#FF9800";
const ACTUAL_BORDER: &str = "#F57C00";

const TOOLTIP_LABEL_PATH: [&str; 5] = ["options", "plugins", "tooltip", "callbacks", "label"];

/// Rounded percentage of `value` in the sum of `values`
pub fn share_percent(value: f64, values: &[f64]) -> i64 {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as i64
}

// ========================
// Configurations
// ========================

/// Pie chart of the macronutrient split. The tooltip label callback is
/// attached separately since it cannot be expressed as JSON.
pub fn macros_config(macros: &LabeledSeries) -> Value {
    json!({
        "type": "pie",
        "data": {
            "labels": macros.labels,
            "datasets": [{
                "data": macros.values,
                "backgroundColor": MACRO_COLORS,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "bottom" },
                "tooltip": { "callbacks": {} }
            }
        }
    })
}

fn y_axis(title: &str, stacked: bool) -> Value {
    json!({
        "beginAtZero": true,
        "stacked": stacked,
        "title": { "display": true, "text": title }
    })
}

pub fn meal_calories_config(meals: &LabeledSeries) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": meals.labels,
            "datasets": [{
                "label": "Calories by Meal",
                "data": meals.values,
                "backgroundColor": MEAL_COLORS,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": y_axis("Calories (kcal)", false) }
        }
    })
}

pub fn nutrient_comparison_config(comparison: &NutrientComparison) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": comparison.nutrients,
            "datasets": [
                {
                    "label": "Recommended",
                    "data": comparison.recommended,
                    "backgroundColor": RECOMMENDED_FILL,
                    "borderColor": RECOMMENDED_BORDER,
                    "borderWidth": 1
                },
                {
                    "label": "Actual in Meal Plan",
                    "data": comparison.actual,
                    "backgroundColor": ACTUAL_FILL,
                    "borderColor": ACTUAL_BORDER,
                    "borderWidth": 1
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": y_axis("Amount (g)", false) }
        }
    })
}

/// Stacked bars: one dataset per meal type, one bar per day
pub fn daily_distribution_config(dist: &DailyDistribution) -> Value {
    let datasets: Vec<Value> = dist
        .meal_types
        .iter()
        .zip(&dist.values)
        .enumerate()
        .map(|(i, (meal, values))| {
            json!({
                "label": meal,
                "data": values,
                "backgroundColor": MEAL_COLORS[i % MEAL_COLORS.len()],
                "borderWidth": 1
            })
        })
        .collect();

    json!({
        "type": "bar",
        "data": { "labels": dist.days, "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "stacked": true },
                "y": y_axis("Calories (kcal)", true)
            }
        }
    })
}

// ========================
// JS plumbing
// ========================

type LabelCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// Tooltip label `"<label>: <share>%"` for the pie chart
fn percentage_label() -> LabelCallback {
    Closure::new(|context: JsValue| {
        let label = Reflect::get(&context, &"label".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let raw = Reflect::get(&context, &"raw".into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let values: Vec<f64> = Reflect::get(&context, &"dataset".into())
            .and_then(|dataset| Reflect::get(&dataset, &"data".into()))
            .map(|data| Array::from(&data).iter().filter_map(|v| v.as_f64()).collect())
            .unwrap_or_default();
        JsValue::from_str(&format!("{}: {}%", label, share_percent(raw, &values)))
    })
}

fn to_js(config: &Value) -> Result<JsValue, JsValue> {
    // Plain objects rather than JS Maps, which Chart.js cannot read
    Ok(config.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn set_path(target: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| JsValue::from_str("empty property path"))?;
    let mut node = target.clone();
    for key in parents {
        node = Reflect::get(&node, &JsValue::from_str(key))?;
    }
    Reflect::set(&node, &JsValue::from_str(last), value)?;
    Ok(())
}

fn new_chart(canvas: Option<&HtmlCanvasElement>, config: &JsValue) -> Result<Chart, JsValue> {
    let canvas = canvas.ok_or_else(|| JsValue::from_str("chart canvas is not mounted"))?;
    Chart::new(canvas, config)
}

// ========================
// Chart handles
// ========================

/// Canvases the charts render into
pub struct ChartCanvases {
    pub macros: Option<HtmlCanvasElement>,
    pub meal_calories: Option<HtmlCanvasElement>,
    pub nutrient_comparison: Option<HtmlCanvasElement>,
    pub daily_distribution: Option<HtmlCanvasElement>,
}

/// A live chart that must be destroyed before its canvas is reused
pub trait ChartHandle {
    fn release(&self);
}

impl ChartHandle for Chart {
    fn release(&self) {
        self.destroy();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Macros,
    MealCalories,
    NutrientComparison,
    DailyDistribution,
}

/// One optional handle per chart canvas
pub struct ChartSlots<H: ChartHandle> {
    macros: Option<H>,
    meal_calories: Option<H>,
    nutrient_comparison: Option<H>,
    daily_distribution: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlots<H> {
    fn default() -> Self {
        Self {
            macros: None,
            meal_calories: None,
            nutrient_comparison: None,
            daily_distribution: None,
        }
    }
}

impl<H: ChartHandle> ChartSlots<H> {
    pub fn is_empty(&self) -> bool {
        self.macros.is_none()
            && self.meal_calories.is_none()
            && self.nutrient_comparison.is_none()
            && self.daily_distribution.is_none()
    }

    pub fn teardown(&mut self) {
        let charts = [
            self.macros.take(),
            self.meal_calories.take(),
            self.nutrient_comparison.take(),
            self.daily_distribution.take(),
        ];
        for chart in charts.into_iter().flatten() {
            chart.release();
        }
    }

    /// Release every existing handle, then build a fresh one per kind.
    /// Stops at the first failure, leaving the charts built so far in place.
    pub fn rebuild<E>(
        &mut self,
        with_distribution: bool,
        mut build: impl FnMut(ChartKind) -> Result<H, E>,
    ) -> Result<(), E> {
        self.teardown();

        self.macros = Some(build(ChartKind::Macros)?);
        self.meal_calories = Some(build(ChartKind::MealCalories)?);
        self.nutrient_comparison = Some(build(ChartKind::NutrientComparison)?);
        if with_distribution {
            self.daily_distribution = Some(build(ChartKind::DailyDistribution)?);
        }
        Ok(())
    }
}

/// Live Chart.js charts. A canvas holds at most one chart, so every rebuild
/// destroys the previous set first.
#[derive(Default)]
pub struct ChartSet {
    slots: ChartSlots<Chart>,
    /// Referenced by the macros chart; dropped only after it is destroyed
    tooltip_label: Option<LabelCallback>,
}

impl ChartSet {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn teardown(&mut self) {
        self.slots.teardown();
        self.tooltip_label = None;
    }

    pub fn rebuild(&mut self, canvases: &ChartCanvases, data: &VisualizationData) -> Result<(), JsValue> {
        self.teardown();

        let ChartSet { slots, tooltip_label } = self;
        slots.rebuild(data.daily_distribution.is_some(), |kind| -> Result<Chart, JsValue> {
            match kind {
                ChartKind::Macros => {
                    let label = percentage_label();
                    let config = to_js(&macros_config(&data.macros))?;
                    set_path(&config, &TOOLTIP_LABEL_PATH, label.as_ref())?;
                    let chart = new_chart(canvases.macros.as_ref(), &config)?;
                    *tooltip_label = Some(label);
                    Ok(chart)
                }
                ChartKind::MealCalories => {
                    let config = to_js(&meal_calories_config(&data.meal_calories))?;
                    new_chart(canvases.meal_calories.as_ref(), &config)
                }
                ChartKind::NutrientComparison => {
                    let config = to_js(&nutrient_comparison_config(&data.nutrient_comparison))?;
                    new_chart(canvases.nutrient_comparison.as_ref(), &config)
                }
                ChartKind::DailyDistribution => {
                    let dist = data
                        .daily_distribution
                        .as_ref()
                        .ok_or_else(|| JsValue::from_str("no daily distribution data"))?;
                    let config = to_js(&daily_distribution_config(dist))?;
                    new_chart(canvases.daily_distribution.as_ref(), &config)
                }
            }
        })
    }
}

impl Drop for ChartSet {
    fn drop(&mut self) {
        self.teardown();
    }
}
