//! Recommendations Panel Component
//!
//! Nutrition totals and the weekly meal plan of the latest recommendation.

use leptos::prelude::*;

use crate::components::{NutritionSummary, WeeklyPlanView};
use crate::context::use_page_context;
use crate::meal_plan;
use crate::store::{use_plan_store, PlanStateStoreFields};
use crate::tabs::Tab;

#[component]
pub fn RecommendationsPanel() -> impl IntoView {
    let ctx = use_page_context();
    let store = use_plan_store();

    view! {
        <div class="recommendations">
            {move || match store.recommendation().get() {
                None => view! {
                    <p class="empty-message">"Fill in your details and generate recommendations to see your weekly plan."</p>
                }.into_any(),
                Some(rec) => {
                    let totals = rec.nutritional_totals;
                    let days = meal_plan::ordered_days(&rec.weekly_plan);
                    view! {
                        <div class="nutrition-grid">
                            <NutritionSummary
                                id="nutrition-requirements"
                                title="Average Daily Nutrition"
                                calories_label="Daily Calories"
                                figures=totals.daily_average
                            />
                            <NutritionSummary
                                id="nutrition-requirements-weekly"
                                title="Weekly Nutrition"
                                calories_label="Weekly Calories"
                                figures=totals.weekly
                            />
                            {rec.nutrition_req.map(|req| view! {
                                <NutritionSummary
                                    id="nutrition-targets"
                                    title="Daily Targets"
                                    calories_label="Daily Calories"
                                    figures=req
                                />
                            })}
                        </div>

                        <h3>"Weekly Meal Plan"</h3>
                        <WeeklyPlanView days=days />
                    }.into_any()
                }
            }}

            <button
                type="button"
                id="view-visualization"
                class="secondary-btn"
                on:click=move |_| ctx.switch_tab(Tab::Visualization)
            >
                "View Visualization"
            </button>
        </div>
    }
}
