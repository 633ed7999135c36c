//! Frontend Models
//!
//! Request and response payloads matching the backend endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::form::{ActivityLevel, Gender, Goal};

// ========================
// BMI
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
}

// ========================
// Weekly plan
// ========================

/// Body of `POST /generate_weekly_plan`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub vegetarian: bool,
    pub vegan: bool,
    pub low_carb: bool,
    pub low_fat: bool,
    pub high_protein: bool,
    pub allergies: String,
}

/// Calories in kcal, everything else in grams
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutritionFigures {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutritionalTotals {
    pub daily_average: NutritionFigures,
    pub weekly: NutritionFigures,
}

/// One food in a meal slot. Field names follow the food database columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealItem {
    #[serde(rename = "Food_items")]
    pub name: String,
    #[serde(rename = "Calories", default)]
    pub calories: Option<f64>,
    #[serde(rename = "Protein", default)]
    pub protein: Option<f64>,
    #[serde(rename = "Carbohydrates", default)]
    pub carbohydrates: Option<f64>,
    #[serde(rename = "Fats", default)]
    pub fats: Option<f64>,
    #[serde(rename = "Fibre", default)]
    pub fibre: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub breakfast: Vec<MealItem>,
    #[serde(default)]
    pub lunch: Vec<MealItem>,
    #[serde(default)]
    pub snacks: Vec<MealItem>,
    #[serde(default)]
    pub dinner: Vec<MealItem>,
}

pub type WeeklyPlan = HashMap<String, DayPlan>;

/// Successful `POST /generate_weekly_plan` reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub nutritional_totals: NutritionalTotals,
    pub weekly_plan: WeeklyPlan,
    #[serde(default)]
    pub nutrition_req: Option<NutritionFigures>,
}

// ========================
// Visualizations
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LabeledSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutrientComparison {
    #[serde(default)]
    pub nutrients: Vec<String>,
    #[serde(default)]
    pub recommended: Vec<f64>,
    #[serde(default)]
    pub actual: Vec<f64>,
}

/// Calories per meal type per day: `values[meal_type][day]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyDistribution {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub meal_types: Vec<String>,
    #[serde(default)]
    pub values: Vec<Vec<f64>>,
}

/// `GET /get_visualizations_data` reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisualizationData {
    pub macros: LabeledSeries,
    #[serde(alias = "daily_calories")]
    pub meal_calories: LabeledSeries,
    pub nutrient_comparison: NutrientComparison,
    #[serde(default)]
    pub daily_distribution: Option<DailyDistribution>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_request_uses_backend_field_names() {
        let req = PlanRequest {
            age: 30,
            gender: Gender::Female,
            weight: 62.5,
            height: 168.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::MuscleGain,
            vegetarian: true,
            vegan: false,
            low_carb: false,
            low_fat: true,
            high_protein: false,
            allergies: "peanuts".to_string(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["activity_level"], "Moderately Active");
        assert_eq!(value["goal"], "Muscle Gain");
        assert_eq!(value["low_fat"], true);
        assert_eq!(value["allergies"], "peanuts");
        assert_eq!(value.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_recommendation_ignores_extra_food_columns() {
        let body = json!({
            "success": true,
            "nutritional_totals": {
                "daily_average": {"calories": 2100, "protein": 120.5, "carbs": 230.1, "fat": 70.2, "fiber": 30.0},
                "weekly": {"calories": 14700, "protein": 843.5, "carbs": 1610.7, "fat": 491.4, "fiber": 210.0},
                "daily": {}
            },
            "weekly_plan": {
                "Monday": {
                    "breakfast": [{"Food_items": "Oatmeal", "Calories": 150, "Meal_Type": "Breakfast", "Vegan": true}],
                    "lunch": [],
                    "dinner": [],
                    "snacks": []
                }
            }
        });

        let rec: Recommendation = serde_json::from_value(body).unwrap();
        assert_eq!(rec.nutritional_totals.daily_average.calories, 2100.0);
        assert!(rec.nutrition_req.is_none());
        let monday = &rec.weekly_plan["Monday"];
        assert_eq!(monday.breakfast[0].name, "Oatmeal");
        assert_eq!(monday.breakfast[0].calories, Some(150.0));
        assert_eq!(monday.breakfast[0].fats, None);
    }

    #[test]
    fn test_visualization_accepts_daily_calories_key() {
        let body = json!({
            "macros": {"labels": ["Protein", "Carbs", "Fat"], "values": [480, 920, 630]},
            "daily_calories": {"labels": ["Monday", "Tuesday"], "values": [2000, 2100]},
            "nutrient_comparison": {
                "nutrients": ["Protein (g)"],
                "recommended": [840],
                "actual": [800]
            }
        });

        let data: VisualizationData = serde_json::from_value(body).unwrap();
        assert_eq!(data.meal_calories.labels, vec!["Monday", "Tuesday"]);
        assert!(data.daily_distribution.is_none());
    }
}
