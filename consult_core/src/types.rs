//! Core domain types for the fitconsult service.
//!
//! This module defines the fundamental types used throughout the system:
//! - Goals, activity levels and consultation types
//! - Dietary profiles derived from free-text preferences
//! - The typed consultation request

// ============================================================================
// Categorical Inputs
// ============================================================================

/// Training or nutrition goal chosen by the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
    GeneralHealth,
    /// Any other text; keeps what the user sent for the report header
    Unrecognized(String),
}

impl Goal {
    /// Parse the wire key. Matching is exact and case-sensitive.
    pub fn parse(key: &str) -> Self {
        match key {
            "weight-loss" => Goal::WeightLoss,
            "muscle-gain" => Goal::MuscleGain,
            "maintenance" => Goal::Maintenance,
            "endurance" => Goal::Endurance,
            "general-health" => Goal::GeneralHealth,
            other => Goal::Unrecognized(other.to_string()),
        }
    }

    /// Wire key for this goal
    pub fn label(&self) -> &str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Maintenance => "maintenance",
            Goal::Endurance => "endurance",
            Goal::GeneralHealth => "general-health",
            Goal::Unrecognized(text) => text,
        }
    }

    /// Header form: upper-cased, with the first hyphen turned into a space
    pub fn heading(&self) -> String {
        self.label().to_uppercase().replacen('-', " ", 1)
    }
}

/// Self-reported daily activity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
    Unrecognized,
}

impl ActivityLevel {
    pub fn parse(key: &str) -> Self {
        match key {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "athlete" => ActivityLevel::Athlete,
            _ => ActivityLevel::Unrecognized,
        }
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Athlete => 1.9,
            ActivityLevel::Unrecognized => 1.2,
        }
    }
}

/// Which report to produce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultationType {
    Fitness,
    Nutrition,
}

impl ConsultationType {
    /// Only the exact key `fitness` selects a fitness report
    pub fn parse(key: Option<&str>) -> Self {
        match key {
            Some("fitness") => ConsultationType::Fitness,
            _ => ConsultationType::Nutrition,
        }
    }
}

/// Diet family inferred from free-text dietary preferences
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DietaryProfile {
    Vegan,
    Vegetarian,
    Omnivore,
}

impl DietaryProfile {
    /// Case-insensitive substring match; "vegan" wins over "vegetarian"
    pub fn from_preferences(preferences: Option<&str>) -> Self {
        let Some(text) = preferences else {
            return DietaryProfile::Omnivore;
        };
        let lowered = text.to_lowercase();
        if lowered.contains("vegan") {
            DietaryProfile::Vegan
        } else if lowered.contains("vegetarian") {
            DietaryProfile::Vegetarian
        } else {
            DietaryProfile::Omnivore
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// A numeric field as received: the caller's text plus its coerced value
#[derive(Clone, Debug, PartialEq)]
pub struct NumericInput {
    pub raw: String,
    pub value: f64,
}

impl NumericInput {
    pub fn new(raw: impl Into<String>, value: f64) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }
}

/// A single consultation request, consumed once per response
#[derive(Clone, Debug, PartialEq)]
pub struct ConsultationRequest {
    /// Years
    pub age: NumericInput,
    /// Kilograms
    pub weight: NumericInput,
    /// Centimetres
    pub height: NumericInput,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub dietary_preferences: Option<String>,
    pub allergies: Option<String>,
    pub health_conditions: Option<String>,
    pub kind: ConsultationType,
}

impl ConsultationRequest {
    pub fn dietary_profile(&self) -> DietaryProfile {
        DietaryProfile::from_preferences(self.dietary_preferences.as_deref())
    }
}
