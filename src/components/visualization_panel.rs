//! Visualization Panel Component
//!
//! Fetches chart data each time the visualization tab is entered and
//! rebuilds every chart from it.

use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::charts::{ChartCanvases, ChartSet};
use crate::commands;
use crate::context::use_page_context;

#[component]
pub fn VisualizationPanel() -> impl IntoView {
    let ctx = use_page_context();

    let macros_ref = NodeRef::<Canvas>::new();
    let meal_calories_ref = NodeRef::<Canvas>::new();
    let nutrient_comparison_ref = NodeRef::<Canvas>::new();
    let daily_distribution_ref = NodeRef::<Canvas>::new();

    // Chart handles are JS objects, so they stay on this thread
    let charts = StoredValue::new_local(ChartSet::default());
    let (has_distribution, set_has_distribution) = signal(false);

    Effect::new(move |_| {
        let request = ctx.visualization_requests.get();
        if request == 0 {
            return;
        }
        web_sys::console::log_1(&format!("[CHARTS] Fetching visualization data, request={}", request).into());
        spawn_local(async move {
            match commands::get_visualizations_data().await {
                Ok(data) => {
                    set_has_distribution.set(data.daily_distribution.is_some());
                    let canvases = ChartCanvases {
                        macros: macros_ref.get_untracked(),
                        meal_calories: meal_calories_ref.get_untracked(),
                        nutrient_comparison: nutrient_comparison_ref.get_untracked(),
                        daily_distribution: daily_distribution_ref.get_untracked(),
                    };
                    if charts.with_value(|set| !set.is_empty()) {
                        web_sys::console::log_1(&"[CHARTS] Replacing existing charts".into());
                    }
                    let rebuilt = charts.try_update_value(|set| set.rebuild(&canvases, &data));
                    if let Some(Err(err)) = rebuilt {
                        web_sys::console::error_2(&"[CHARTS] Failed to build charts:".into(), &err);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CHARTS] Request failed: {}", err).into());
                    ctx.show_error(err.describe("Failed to load visualization data"));
                }
            }
        });
    });

    view! {
        <div class="charts-grid">
            <div class="chart-card">
                <h3>"Macronutrient Breakdown"</h3>
                <div class="chart-container">
                    <canvas id="macros-chart" node_ref=macros_ref></canvas>
                </div>
            </div>
            <div class="chart-card">
                <h3>"Calories by Meal"</h3>
                <div class="chart-container">
                    <canvas id="meal-calories-chart" node_ref=meal_calories_ref></canvas>
                </div>
            </div>
            <div class="chart-card">
                <h3>"Recommended vs. Actual Nutrients"</h3>
                <div class="chart-container">
                    <canvas id="nutrient-comparison-chart" node_ref=nutrient_comparison_ref></canvas>
                </div>
            </div>
            <div
                class="chart-card"
                style:display=move || if has_distribution.get() { "block" } else { "none" }
            >
                <h3>"Daily Meal Distribution"</h3>
                <div class="chart-container">
                    <canvas id="meal-distribution-chart" node_ref=daily_distribution_ref></canvas>
                </div>
            </div>
        </div>
    }
}
