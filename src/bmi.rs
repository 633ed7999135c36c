//! BMI Classification
//!
//! Maps a BMI value returned by the backend onto its weight category.

use std::fmt;

/// Lower bound of the Normal band
const NORMAL_FROM: f64 = 18.5;
/// Lower bound of the Overweight band
const OVERWEIGHT_FROM: f64 = 25.0;
/// Lower bound of the Obese band
const OBESE_FROM: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < NORMAL_FROM {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if bmi < OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A BMI value together with its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn new(bmi: f64) -> Self {
        Self { bmi, category: BmiCategory::classify(bmi) }
    }

    /// Text for the read-only BMI field, e.g. `22.9 (Normal)`
    pub fn display(&self) -> String {
        format!("{} ({})", self.bmi, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::classify(45.2), BmiCategory::Obese);
        assert_eq!(BmiCategory::classify(0.0), BmiCategory::Underweight);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(BmiResult::new(22.9).display(), "22.9 (Normal)");
        assert_eq!(BmiResult::new(17.25).display(), "17.25 (Underweight)");
        assert_eq!(BmiResult::new(31.0).display(), "31 (Obese)");
    }
}
