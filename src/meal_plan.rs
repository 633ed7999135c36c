//! Weekly Meal Plan Utilities
//!
//! Day ordering and the per-day meal table.

use crate::models::{DayPlan, MealItem, WeeklyPlan};

/// Items shown per meal slot
pub const ITEMS_PER_MEAL: usize = 2;

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Day names of a plan in display order: calendar days first, then any other keys by name
pub fn ordered_days(plan: &WeeklyPlan) -> Vec<String> {
    let mut days: Vec<String> = plan.keys().cloned().collect();
    days.sort_by_key(|day| {
        let pos = DAYS_OF_WEEK.iter().position(|d| d == day).unwrap_or(DAYS_OF_WEEK.len());
        (pos, day.clone())
    });
    days
}

/// Day shown when a plan first arrives
pub fn default_day(plan: &WeeklyPlan) -> Option<String> {
    ordered_days(plan).into_iter().next()
}

/// One row of the day table
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    pub meal: &'static str,
    /// Class prefix of the row's cells, e.g. `breakfastFood`
    pub slot_class: &'static str,
    /// Food names; `None` where the plan has fewer items than slots
    pub foods: [Option<String>; ITEMS_PER_MEAL],
}

fn first_items(items: &[MealItem]) -> [Option<String>; ITEMS_PER_MEAL] {
    std::array::from_fn(|i| items.get(i).map(|item| item.name.clone()))
}

/// Rows for breakfast, lunch, snack and dinner, in that order
pub fn day_rows(day: &DayPlan) -> Vec<MealRow> {
    vec![
        MealRow { meal: "Breakfast", slot_class: "breakfastFood", foods: first_items(&day.breakfast) },
        MealRow { meal: "Lunch", slot_class: "lunchFood", foods: first_items(&day.lunch) },
        MealRow { meal: "Snack", slot_class: "snackFood", foods: first_items(&day.snacks) },
        MealRow { meal: "Dinner", slot_class: "dinnerFood", foods: first_items(&day.dinner) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> MealItem {
        MealItem {
            name: name.to_string(),
            calories: None,
            protein: None,
            carbohydrates: None,
            fats: None,
            fibre: None,
        }
    }

    fn day(prefix: &str) -> DayPlan {
        let items = |meal: &str, n: usize| {
            (1..=n).map(|i| item(&format!("{} {} {}", prefix, meal, i))).collect::<Vec<_>>()
        };
        DayPlan {
            breakfast: items("breakfast", 3),
            lunch: items("lunch", 3),
            snacks: items("snack", 2),
            dinner: items("dinner", 3),
        }
    }

    fn week() -> WeeklyPlan {
        DAYS_OF_WEEK.iter().map(|d| (d.to_string(), day(d))).collect()
    }

    #[test]
    fn test_ordered_days_follow_calendar() {
        let mut plan = week();
        plan.insert("Bonus".to_string(), DayPlan::default());
        let days = ordered_days(&plan);
        assert_eq!(&days[..7], &DAYS_OF_WEEK.map(String::from)[..]);
        assert_eq!(days[7], "Bonus");
        assert_eq!(default_day(&plan).as_deref(), Some("Monday"));
    }

    #[test]
    fn test_tuesday_rows_show_first_two_items() {
        let plan = week();
        let rows = day_rows(&plan["Tuesday"]);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].meal, "Breakfast");
        assert_eq!(
            rows[0].foods,
            [Some("Tuesday breakfast 1".to_string()), Some("Tuesday breakfast 2".to_string())]
        );
        assert_eq!(rows[2].slot_class, "snackFood");
        assert_eq!(rows[2].foods[1].as_deref(), Some("Tuesday snack 2"));
        assert_eq!(rows[3].foods[0].as_deref(), Some("Tuesday dinner 1"));
    }

    #[test]
    fn test_short_slots_render_empty() {
        let day = DayPlan {
            breakfast: vec![item("Oatmeal")],
            ..Default::default()
        };
        let rows = day_rows(&day);
        assert_eq!(rows[0].foods, [Some("Oatmeal".to_string()), None]);
        assert_eq!(rows[1].foods, [None, None]);
    }

    #[test]
    fn test_empty_plan_has_no_default_day() {
        assert_eq!(default_day(&WeeklyPlan::new()), None);
    }
}
