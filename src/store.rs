//! Plan State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::meal_plan;
use crate::models::{DayPlan, Recommendation};

/// Latest plan received from the backend and the day being viewed
#[derive(Clone, Debug, Default, Store)]
pub struct PlanState {
    /// Last successful weekly plan response (None until one arrives)
    pub recommendation: Option<Recommendation>,
    /// Day whose meals are shown; only one day is active at a time
    pub active_day: Option<String>,
}

/// Type alias for the store
pub type PlanStore = Store<PlanState>;

/// Get the plan store from context
pub fn use_plan_store() -> PlanStore {
    expect_context::<PlanStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the plan; the first day becomes active
pub fn store_set_recommendation(store: &PlanStore, recommendation: Recommendation) {
    let first_day = meal_plan::default_day(&recommendation.weekly_plan);
    store.recommendation().set(Some(recommendation));
    store.active_day().set(first_day);
}

/// Make `day` the single active day
pub fn store_select_day(store: &PlanStore, day: String) {
    store.active_day().set(Some(day));
}

/// Meals of the active day, if a plan is loaded and contains that day
pub fn store_active_day_plan(store: &PlanStore) -> Option<DayPlan> {
    let day = store.active_day().get()?;
    store
        .recommendation()
        .with(|rec| rec.as_ref().and_then(|rec| rec.weekly_plan.get(&day).cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_plan::DAYS_OF_WEEK;
    use crate::models::{MealItem, NutritionFigures, NutritionalTotals, WeeklyPlan};

    fn item(name: String) -> MealItem {
        MealItem {
            name,
            calories: Some(100.0),
            protein: None,
            carbohydrates: None,
            fats: None,
            fibre: None,
        }
    }

    fn recommendation() -> Recommendation {
        let weekly_plan: WeeklyPlan = DAYS_OF_WEEK
            .iter()
            .map(|day| {
                let plan = DayPlan {
                    breakfast: vec![item(format!("{} toast", day)), item(format!("{} eggs", day))],
                    ..Default::default()
                };
                (day.to_string(), plan)
            })
            .collect();
        Recommendation {
            nutritional_totals: NutritionalTotals {
                daily_average: NutritionFigures::default(),
                weekly: NutritionFigures::default(),
            },
            weekly_plan,
            nutrition_req: None,
        }
    }

    #[test]
    fn test_new_plan_activates_first_day() {
        let store = Store::new(PlanState::default());
        assert_eq!(store_active_day_plan(&store), None);

        store_set_recommendation(&store, recommendation());
        assert_eq!(store.active_day().get_untracked().as_deref(), Some("Monday"));
        let monday = store_active_day_plan(&store).unwrap();
        assert_eq!(monday.breakfast[0].name, "Monday toast");
    }

    #[test]
    fn test_selecting_a_day_replaces_the_active_one() {
        let store = Store::new(PlanState::default());
        store_set_recommendation(&store, recommendation());

        store_select_day(&store, "Tuesday".to_string());
        assert_eq!(store.active_day().get_untracked().as_deref(), Some("Tuesday"));
        let tuesday = store_active_day_plan(&store).unwrap();
        assert_eq!(tuesday.breakfast[1].name, "Tuesday eggs");

        // A fresh plan resets the selection
        store_set_recommendation(&store, recommendation());
        assert_eq!(store.active_day().get_untracked().as_deref(), Some("Monday"));
    }
}
