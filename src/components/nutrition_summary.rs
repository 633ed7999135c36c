//! Nutrition Summary Component

use leptos::prelude::*;

use crate::models::NutritionFigures;

/// `(label, value)` pairs in display order
pub fn summary_lines(calories_label: &str, figures: &NutritionFigures) -> Vec<(String, String)> {
    vec![
        (format!("{}: ", calories_label), format!("{} kcal", figures.calories)),
        ("Protein: ".to_string(), format!("{}g", figures.protein)),
        ("Carbohydrates: ".to_string(), format!("{}g", figures.carbs)),
        ("Fat: ".to_string(), format!("{}g", figures.fat)),
        ("Fiber: ".to_string(), format!("{}g", figures.fiber)),
    ]
}

/// Calories plus macro and fiber grams under a heading
#[component]
pub fn NutritionSummary(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] calories_label: String,
    figures: NutritionFigures,
) -> impl IntoView {
    view! {
        <div class="nutrition-summary">
            <h3>{title}</h3>
            <div id=id>
                {summary_lines(&calories_label, &figures).into_iter().map(|(label, value)| view! {
                    <p><strong>{label}</strong>{value}</p>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_summary_lines() {
        let figures = NutritionFigures {
            calories: 2100.0,
            protein: 120.5,
            carbs: 230.1,
            fat: 70.2,
            fiber: 30.0,
        };
        let lines = summary_lines("Daily Calories", &figures);

        assert_eq!(lines[0], ("Daily Calories: ".to_string(), "2100 kcal".to_string()));
        assert_eq!(lines[1].1, "120.5g");
        assert_eq!(lines[4], ("Fiber: ".to_string(), "30g".to_string()));
    }
}
