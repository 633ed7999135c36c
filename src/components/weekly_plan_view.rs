//! Weekly Plan View Component
//!
//! Day buttons above a meal table for the active day.

use leptos::prelude::*;

use crate::meal_plan::{self, ITEMS_PER_MEAL};
use crate::store::{store_active_day_plan, store_select_day, use_plan_store, PlanStateStoreFields};

#[component]
pub fn WeeklyPlanView(days: Vec<String>) -> impl IntoView {
    let store = use_plan_store();

    let rows = move || {
        store_active_day_plan(&store)
            .map(|day| meal_plan::day_rows(&day))
            .unwrap_or_default()
    };

    view! {
        <div class="weekly-tab-content">
            {days.into_iter().map(|day| {
                let active_name = day.clone();
                let click_name = day.clone();
                let is_active = move || store.active_day().get().as_deref() == Some(active_name.as_str());
                view! {
                    <button
                        class=move || if is_active() { "day-tab active" } else { "day-tab" }
                        on:click=move |_| store_select_day(&store, click_name.clone())
                    >
                        {day}
                    </button>
                }
            }).collect_view()}
        </div>

        <table class="weekly-diet-table">
            <thead>
                <tr>
                    <th>"Meal"</th>
                    {(1..=ITEMS_PER_MEAL).map(|n| view! { <th>{format!("Option {}", n)}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| {
                    let slot = row.slot_class;
                    view! {
                        <tr>
                            <td class="meal-name">{row.meal}</td>
                            {row.foods.into_iter().enumerate().map(|(i, food)| {
                                view! {
                                    <td class=format!("{}{}", slot, i + 1)>
                                        <span>{food.unwrap_or_default()}</span>
                                    </td>
                                }
                            }).collect_view()}
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
