//! Metrics calculator: BMI, BMR, TDEE and the daily macro split.
//!
//! All values are `f64` so that malformed input propagates as NaN or
//! Infinity into the report instead of being rejected. Every value except
//! `bmi` and `bmr` is rounded to a whole number when finite.

use crate::number::js_round;
use crate::{ConsultationRequest, Goal};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const FAT_SHARE_OF_CALORIES: f64 = 0.25;

/// Derived body and nutrition metrics for one request
#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    /// Unrounded; the report shows one decimal
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub protein_grams: f64,
    /// Body weight × 2, shown next to the protein target whatever the goal
    pub protein_per_kg_display: f64,
    pub fat_grams: f64,
    pub carb_grams: f64,
}

/// Goal-dependent calorie adjustment and protein factor (g per kg)
fn goal_targets(goal: &Goal) -> (f64, f64) {
    match goal {
        Goal::WeightLoss => (-500.0, 2.2),
        Goal::MuscleGain => (400.0, 2.4),
        Goal::Maintenance | Goal::Endurance | Goal::GeneralHealth | Goal::Unrecognized(_) => {
            (0.0, 2.0)
        }
    }
}

/// Simplified unisex Mifflin-St Jeor estimate (no sex term)
pub fn basal_metabolic_rate(age: f64, weight_kg: f64, height_cm: f64) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + 5.0
}

pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

impl Metrics {
    pub fn calculate(request: &ConsultationRequest) -> Self {
        let age = request.age.value;
        let weight = request.weight.value;
        let height = request.height.value;

        let bmi = body_mass_index(weight, height);
        let bmr = basal_metabolic_rate(age, weight, height);
        let tdee = js_round(bmr * request.activity_level.multiplier());

        let (calorie_adjustment, protein_per_kg) = goal_targets(&request.goal);
        let target_calories = js_round(tdee + calorie_adjustment);

        // Order matters: carbs are whatever protein and fat leave over
        let protein_grams = js_round(weight * protein_per_kg);
        let fat_grams = js_round(target_calories * FAT_SHARE_OF_CALORIES / KCAL_PER_GRAM_FAT);
        let carb_grams = js_round(
            (target_calories
                - protein_grams * KCAL_PER_GRAM_PROTEIN
                - fat_grams * KCAL_PER_GRAM_FAT)
                / KCAL_PER_GRAM_CARB,
        );

        Metrics {
            bmi,
            bmr,
            tdee,
            target_calories,
            protein_grams,
            protein_per_kg_display: js_round(weight * 2.0),
            fat_grams,
            carb_grams,
        }
    }

    pub fn meal_split(&self) -> MealSplit {
        MealSplit::from_target(self.target_calories)
    }
}

/// Per-meal calorie budget.
///
/// Each share is rounded on its own, so the four values may sum to one
/// more or less than the daily target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MealSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
}

impl MealSplit {
    pub fn from_target(target_calories: f64) -> Self {
        MealSplit {
            breakfast: js_round(target_calories * 0.25),
            lunch: js_round(target_calories * 0.35),
            dinner: js_round(target_calories * 0.30),
            snacks: js_round(target_calories * 0.10),
        }
    }

    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, ConsultationType, NumericInput};

    fn request(goal: Goal, activity_level: ActivityLevel) -> ConsultationRequest {
        ConsultationRequest {
            age: NumericInput::new("30", 30.0),
            weight: NumericInput::new("70", 70.0),
            height: NumericInput::new("175", 175.0),
            goal,
            activity_level,
            dietary_preferences: None,
            allergies: None,
            health_conditions: None,
            kind: ConsultationType::Nutrition,
        }
    }

    #[test]
    fn test_bmr_and_tdee() {
        let metrics = Metrics::calculate(&request(Goal::Maintenance, ActivityLevel::Moderate));

        assert_eq!(metrics.bmr, 1648.75);
        assert_eq!(metrics.tdee, 2556.0);
    }

    #[test]
    fn test_bmi() {
        let metrics = Metrics::calculate(&request(Goal::Maintenance, ActivityLevel::Moderate));

        assert!((metrics.bmi - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_weight_loss_macros() {
        let metrics = Metrics::calculate(&request(Goal::WeightLoss, ActivityLevel::Moderate));

        assert_eq!(metrics.target_calories, 2056.0);
        assert_eq!(metrics.protein_grams, 154.0);
        assert_eq!(metrics.fat_grams, 57.0);
        assert_eq!(metrics.carb_grams, 232.0);
        assert_eq!(metrics.protein_per_kg_display, 140.0);
    }

    #[test]
    fn test_muscle_gain_macros() {
        let metrics = Metrics::calculate(&request(Goal::MuscleGain, ActivityLevel::Moderate));

        assert_eq!(metrics.target_calories, 2956.0);
        assert_eq!(metrics.protein_grams, 168.0);
        assert_eq!(metrics.fat_grams, 82.0);
        // (2956 - 672 - 738) / 4 = 386.5
        assert_eq!(metrics.carb_grams, 387.0);
    }

    #[test]
    fn test_default_goal_macros() {
        for goal in [
            Goal::Maintenance,
            Goal::Endurance,
            Goal::GeneralHealth,
            Goal::Unrecognized("yoga".into()),
        ] {
            let metrics = Metrics::calculate(&request(goal, ActivityLevel::Moderate));
            assert_eq!(metrics.target_calories, metrics.tdee);
            assert_eq!(metrics.protein_grams, 140.0);
        }
    }

    #[test]
    fn test_unknown_activity_matches_sedentary() {
        let unknown = Metrics::calculate(&request(Goal::Maintenance, ActivityLevel::Unrecognized));
        let sedentary = Metrics::calculate(&request(Goal::Maintenance, ActivityLevel::Sedentary));

        assert_eq!(unknown, sedentary);
        // 1648.75 * 1.2 = 1978.5
        assert_eq!(unknown.tdee, 1979.0);
    }

    #[test]
    fn test_macro_calories_close_to_target() {
        let metrics = Metrics::calculate(&request(Goal::WeightLoss, ActivityLevel::Athlete));
        let from_macros = metrics.protein_grams * 4.0 + metrics.carb_grams * 4.0 + metrics.fat_grams * 9.0;

        assert!((from_macros - metrics.target_calories).abs() <= 4.5);
    }

    #[test]
    fn test_meal_split_is_not_renormalized() {
        let split = MealSplit::from_target(2056.0);

        assert_eq!(split.breakfast, 514.0);
        assert_eq!(split.lunch, 720.0);
        assert_eq!(split.dinner, 617.0);
        assert_eq!(split.snacks, 206.0);
        assert_eq!(split.total(), 2057.0);
    }

    #[test]
    fn test_invalid_numbers_propagate() {
        let mut req = request(Goal::WeightLoss, ActivityLevel::Moderate);
        req.age = NumericInput::new("undefined", f64::NAN);
        let metrics = Metrics::calculate(&req);
        assert!(metrics.bmr.is_nan());
        assert!(metrics.tdee.is_nan());
        assert!(metrics.carb_grams.is_nan());
        assert!(!metrics.bmi.is_nan());

        let mut req = request(Goal::WeightLoss, ActivityLevel::Moderate);
        req.height = NumericInput::new("0", 0.0);
        let metrics = Metrics::calculate(&req);
        assert_eq!(metrics.bmi, f64::INFINITY);
    }
}
