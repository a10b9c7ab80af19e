use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::MacroDistribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Physical activity level, each mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier applied to BMR to obtain TDEE.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "lose weight",
            Goal::Maintain => "maintain weight",
            Goal::Gain => "gain weight",
        }
    }
}

/// Patient attributes that drive the energy and macro targets.
///
/// Missing numeric fields deserialize to 0 and are sanitized again by the
/// calculators, so a half-filled intake form never yields NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientMetrics {
    pub gender: Gender,

    #[serde(default)]
    pub age: u32,

    #[serde(default)]
    pub height_cm: f64,

    #[serde(default)]
    pub weight_kg: f64,

    pub activity_level: ActivityLevel,

    pub goal: Goal,

    /// Only meaningful when `goal` is not `Maintain`.
    #[serde(default)]
    pub monthly_weight_goal_kg: f64,
}

impl Default for PatientMetrics {
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            age: 0,
            height_cm: 0.0,
            weight_kg: 0.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            monthly_weight_goal_kg: 0.0,
        }
    }
}

/// Persisted patient document: identity, metrics, and chosen macro split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub name: String,

    pub metrics: PatientMetrics,

    #[serde(default)]
    pub macros: MacroDistribution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_metrics_deserialize_missing_numbers_as_zero() {
        let json = r#"{"gender": "female", "activityLevel": "very-active", "goal": "maintain"}"#;
        let metrics: PatientMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.gender, Gender::Female);
        assert_eq!(metrics.activity_level, ActivityLevel::VeryActive);
        assert_eq!(metrics.age, 0);
        assert_eq!(metrics.weight_kg, 0.0);
        assert_eq!(metrics.monthly_weight_goal_kg, 0.0);
    }

    #[test]
    fn test_record_defaults_macros() {
        let json = r#"{
            "name": "Ana",
            "metrics": {"gender": "male", "age": 40, "heightCm": 180, "weightKg": 82,
                        "activityLevel": "light", "goal": "lose", "monthlyWeightGoalKg": 1.5}
        }"#;
        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.macros, MacroDistribution::default());
        assert_eq!(record.metrics.activity_level, ActivityLevel::Light);
    }
}
