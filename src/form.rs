//! Profile Form State
//!
//! Raw user input plus the rules for turning it into backend requests.

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{BmiRequest, PlanRequest};

// Select enums serialize through `SelectOption::value`, so the backend strings
// live in one place.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Goal {
    #[default]
    WeightLoss,
    MuscleGain,
    Maintenance,
    GeneralHealth,
}

impl From<Gender> for &'static str {
    fn from(gender: Gender) -> Self {
        gender.value()
    }
}

impl From<ActivityLevel> for &'static str {
    fn from(level: ActivityLevel) -> Self {
        level.value()
    }
}

impl From<Goal> for &'static str {
    fn from(goal: Goal) -> Self {
        goal.value()
    }
}

/// A closed set of `<select>` options
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Value sent to the backend and used as the `<option>` value
    fn value(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|opt| opt.value() == value)
    }
}

impl SelectOption for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female];

    fn value(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl SelectOption for ActivityLevel {
    const ALL: &'static [Self] = &[
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    fn value(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }
}

impl SelectOption for Goal {
    const ALL: &'static [Self] = &[
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::GeneralHealth,
    ];

    fn value(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
            Goal::GeneralHealth => "General Health",
        }
    }
}

/// Dietary preference checkboxes.
///
/// Vegan implies vegetarian; the setters keep the pair consistent in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DietaryFlags {
    vegetarian: bool,
    vegan: bool,
    pub low_carb: bool,
    pub low_fat: bool,
    pub high_protein: bool,
}

impl DietaryFlags {
    pub fn vegetarian(&self) -> bool {
        self.vegetarian
    }

    pub fn vegan(&self) -> bool {
        self.vegan
    }

    pub fn set_vegan(&mut self, checked: bool) {
        self.vegan = checked;
        if checked {
            self.vegetarian = true;
        }
    }

    pub fn set_vegetarian(&mut self, checked: bool) {
        self.vegetarian = checked;
        if !checked {
            self.vegan = false;
        }
    }
}

/// Everything the user typed or picked. Numeric fields are kept as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub age: String,
    pub gender: Gender,
    pub weight: String,
    pub height: String,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet: DietaryFlags,
    pub allergies: String,
}

/// Parse a numeric input, accepting only finite values above zero
fn positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl FormState {
    /// BMI request if both weight and height are positive, otherwise nothing to send
    pub fn bmi_request(&self) -> Option<BmiRequest> {
        let weight = positive(&self.weight)?;
        let height = positive(&self.height)?;
        Some(BmiRequest { weight, height })
    }

    /// Validate age, weight and height (in that order) and build the plan request.
    ///
    /// Fractional ages are truncated. An age that truncates to zero (e.g. `0.5`)
    /// is rejected here, which is stricter than a plain positivity check: such a
    /// request would otherwise reach the backend as `age: 0` and fail there.
    pub fn plan_request(&self) -> Result<PlanRequest, ValidationError> {
        let age = positive(&self.age)
            .map(|a| a.trunc())
            .filter(|a| *a >= 1.0 && *a <= u32::MAX as f64)
            .ok_or(ValidationError::InvalidAge)? as u32;
        let weight = positive(&self.weight).ok_or(ValidationError::InvalidWeight)?;
        let height = positive(&self.height).ok_or(ValidationError::InvalidHeight)?;

        Ok(PlanRequest {
            age,
            gender: self.gender,
            weight,
            height,
            activity_level: self.activity_level,
            goal: self.goal,
            vegetarian: self.diet.vegetarian(),
            vegan: self.diet.vegan(),
            low_carb: self.diet.low_carb,
            low_fat: self.diet.low_fat,
            high_protein: self.diet.high_protein,
            allergies: self.allergies.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            age: "34".into(),
            weight: "70".into(),
            height: "175".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vegan_checks_vegetarian() {
        let mut diet = DietaryFlags::default();
        diet.set_vegan(true);
        assert!(diet.vegan());
        assert!(diet.vegetarian());

        // Unchecking vegan leaves vegetarian alone
        diet.set_vegan(false);
        assert!(!diet.vegan());
        assert!(diet.vegetarian());
    }

    #[test]
    fn test_unchecking_vegetarian_unchecks_vegan() {
        let mut diet = DietaryFlags::default();
        diet.set_vegan(true);
        diet.set_vegetarian(false);
        assert!(!diet.vegetarian());
        assert!(!diet.vegan());

        diet.set_vegetarian(true);
        assert!(diet.vegetarian());
        assert!(!diet.vegan());
    }

    #[test]
    fn test_invalid_fields_produce_no_request() {
        let mut form = filled();
        form.age = String::new();
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidAge));

        let mut form = filled();
        form.weight = "0".into();
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidWeight));

        let mut form = filled();
        form.height = "-170".into();
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidHeight));

        let mut form = filled();
        form.weight = "abc".into();
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_age_is_checked_before_weight_and_height() {
        let form = FormState::default();
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidAge));

        let form = FormState { age: "0.5".into(), ..filled() };
        assert_eq!(form.plan_request(), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn test_plan_request_carries_form() {
        let mut form = filled();
        form.age = "41.8".into();
        form.goal = Goal::Maintenance;
        form.diet.set_vegan(true);
        form.diet.high_protein = true;
        form.allergies = "nuts, dairy".into();

        let req = form.plan_request().unwrap();
        assert_eq!(req.age, 41);
        assert_eq!(req.weight, 70.0);
        assert_eq!(req.height, 175.0);
        assert_eq!(req.goal, Goal::Maintenance);
        assert!(req.vegan && req.vegetarian && req.high_protein);
        assert!(!req.low_carb && !req.low_fat);
        assert_eq!(req.allergies, "nuts, dairy");
    }

    #[test]
    fn test_bmi_request_requires_both_values() {
        let form = FormState { weight: "70".into(), height: "1.75".into(), ..Default::default() };
        assert_eq!(form.bmi_request(), Some(BmiRequest { weight: 70.0, height: 1.75 }));

        let form = FormState { weight: "70".into(), ..Default::default() };
        assert_eq!(form.bmi_request(), None);

        let form = FormState { weight: "-1".into(), height: "175".into(), ..Default::default() };
        assert_eq!(form.bmi_request(), None);
    }

    #[test]
    fn test_select_options_serialize_as_their_values() {
        for gender in Gender::ALL {
            assert_eq!(serde_json::to_value(gender).unwrap(), gender.value());
        }
        for level in ActivityLevel::ALL {
            assert_eq!(serde_json::to_value(level).unwrap(), level.value());
        }
        for goal in Goal::ALL {
            assert_eq!(serde_json::to_value(goal).unwrap(), goal.value());
        }
        assert_eq!(serde_json::to_value(ActivityLevel::VeryActive).unwrap(), "Very Active");
    }

    #[test]
    fn test_select_values_round_trip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_value(level.value()), Some(*level));
        }
        assert_eq!(Goal::from_value("General Health"), Some(Goal::GeneralHealth));
        assert_eq!(Gender::from_value("Other"), None);
    }
}
