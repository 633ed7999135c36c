//! Profile Form Component
//!
//! Personal details, dietary preferences, BMI lookup and plan generation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bmi::BmiResult;
use crate::commands;
use crate::context::use_page_context;
use crate::form::{ActivityLevel, FormState, Gender, Goal, SelectOption};
use crate::store::{store_set_recommendation, use_plan_store};
use crate::tabs::Tab;

/// `<select>` over a closed option set
fn option_select<T>(
    id: &'static str,
    current: impl Fn() -> T + Copy + Send + Sync + 'static,
    pick: impl Fn(T) + Send + Sync + 'static,
) -> impl IntoView
where
    T: SelectOption + Send + Sync,
{
    view! {
        <select
            id=id
            prop:value=move || current().value()
            on:change=move |ev| {
                if let Some(option) = T::from_value(&event_target_value(&ev)) {
                    pick(option);
                }
            }
        >
            {T::ALL.iter().map(|option| {
                view! { <option value=option.value()>{option.value()}</option> }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn ProfileForm() -> impl IntoView {
    let ctx = use_page_context();
    let store = use_plan_store();

    let form = RwSignal::new(FormState::default());
    let (bmi_text, set_bmi_text) = signal(String::new());

    // Silently skipped until both weight and height are positive
    let calculate_bmi = move || {
        let Some(args) = form.with_untracked(FormState::bmi_request) else {
            return;
        };
        spawn_local(async move {
            match commands::calculate_bmi(&args).await {
                Ok(reply) => {
                    let result = BmiResult::new(reply.bmi);
                    web_sys::console::log_1(&format!("[BMI] {} -> {}", reply.bmi, result.category).into());
                    set_bmi_text.set(result.display());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BMI] Request failed: {}", err).into());
                    ctx.show_error(err.describe("Failed to calculate BMI"));
                }
            }
        });
    };

    let generate_recommendations = move |_| {
        let args = match form.with_untracked(FormState::plan_request) {
            Ok(args) => args,
            Err(err) => {
                ctx.show_error(err.to_string());
                return;
            }
        };

        ctx.show_loading();
        spawn_local(async move {
            let result = commands::generate_weekly_plan(&args).await;
            ctx.hide_loading();
            match result {
                Ok(recommendation) => {
                    web_sys::console::log_1(
                        &format!("[PLAN] Received plan for {} days", recommendation.weekly_plan.len()).into(),
                    );
                    store_set_recommendation(&store, recommendation);
                    ctx.switch_tab(Tab::Recommendations);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLAN] Request failed: {}", err).into());
                    ctx.show_error(err.describe("Failed to generate recommendations"));
                }
            }
        });
    };

    view! {
        <div class="profile-form">
            <div class="form-section">
                <h3>"Personal Details"</h3>

                <div class="form-group">
                    <label for="age">"Age"</label>
                    <input
                        type="number"
                        id="age"
                        min="1"
                        prop:value=move || form.with(|f| f.age.clone())
                        on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="gender">"Gender"</label>
                    {option_select::<Gender>(
                        "gender",
                        move || form.with(|f| f.gender),
                        move |gender| form.update(|f| f.gender = gender),
                    )}
                </div>

                <div class="form-group">
                    <label for="weight">"Weight (kg)"</label>
                    <input
                        type="number"
                        id="weight"
                        step="0.1"
                        prop:value=move || form.with(|f| f.weight.clone())
                        on:input=move |ev| form.update(|f| f.weight = event_target_value(&ev))
                        on:change=move |_| calculate_bmi()
                    />
                </div>

                <div class="form-group">
                    <label for="height">"Height (cm)"</label>
                    <input
                        type="number"
                        id="height"
                        step="0.1"
                        prop:value=move || form.with(|f| f.height.clone())
                        on:input=move |ev| form.update(|f| f.height = event_target_value(&ev))
                        on:change=move |_| calculate_bmi()
                    />
                </div>

                <div class="form-group bmi-group">
                    <label for="bmi">"BMI"</label>
                    <input type="text" id="bmi" readonly prop:value=move || bmi_text.get() />
                    <button type="button" id="calculate-bmi" on:click=move |_| calculate_bmi()>
                        "Calculate BMI"
                    </button>
                </div>

                <div class="form-group">
                    <label for="activity-level">"Activity Level"</label>
                    {option_select::<ActivityLevel>(
                        "activity-level",
                        move || form.with(|f| f.activity_level),
                        move |level| form.update(|f| f.activity_level = level),
                    )}
                </div>

                <div class="form-group">
                    <label for="goal">"Goal"</label>
                    {option_select::<Goal>(
                        "goal",
                        move || form.with(|f| f.goal),
                        move |goal| form.update(|f| f.goal = goal),
                    )}
                </div>
            </div>

            <div class="form-section">
                <h3>"Dietary Preferences"</h3>

                <div class="checkbox-group">
                    <label>
                        <input
                            type="checkbox"
                            id="vegetarian"
                            prop:checked=move || form.with(|f| f.diet.vegetarian())
                            on:change=move |ev| form.update(|f| f.diet.set_vegetarian(event_target_checked(&ev)))
                        />
                        "Vegetarian"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            id="vegan"
                            prop:checked=move || form.with(|f| f.diet.vegan())
                            on:change=move |ev| form.update(|f| f.diet.set_vegan(event_target_checked(&ev)))
                        />
                        "Vegan"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            id="low-carb"
                            prop:checked=move || form.with(|f| f.diet.low_carb)
                            on:change=move |ev| form.update(|f| f.diet.low_carb = event_target_checked(&ev))
                        />
                        "Low Carb"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            id="low-fat"
                            prop:checked=move || form.with(|f| f.diet.low_fat)
                            on:change=move |ev| form.update(|f| f.diet.low_fat = event_target_checked(&ev))
                        />
                        "Low Fat"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            id="high-protein"
                            prop:checked=move || form.with(|f| f.diet.high_protein)
                            on:change=move |ev| form.update(|f| f.diet.high_protein = event_target_checked(&ev))
                        />
                        "High Protein"
                    </label>
                </div>

                <div class="form-group">
                    <label for="allergies">"Allergies (comma separated)"</label>
                    <input
                        type="text"
                        id="allergies"
                        placeholder="e.g. nuts, dairy"
                        prop:value=move || form.with(|f| f.allergies.clone())
                        on:input=move |ev| form.update(|f| f.allergies = event_target_value(&ev))
                    />
                </div>
            </div>

            <button
                type="button"
                id="generate-recommendations"
                class="primary-btn"
                on:click=generate_recommendations
            >
                "Get Recommendations"
            </button>
        </div>
    }
}
