use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoringError;

/// Linear reward up to the target, capped at 1.0. Excess is neither rewarded nor penalised.
pub fn bounded_score(value: f64, target: f64) -> f64 {
    (value / target).min(1.0)
}

/// Linear reward up to the target, then a symmetric penalty `2 - value/target`
/// that reaches 0.0 at twice the target and never goes below it.
pub fn penalized_score(value: f64, target: f64) -> f64 {
    let ratio = value / target;
    if value > target {
        (2.0 - ratio).max(0.0)
    } else {
        ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    FatLoss,
}

impl Goal {
    pub fn weights(&self) -> GoalWeights {
        match self {
            Goal::MuscleGain => GoalWeights { calories: 0.2, protein: 0.4, fat: 0.2, carbs: 0.2 },
            Goal::FatLoss => GoalWeights { calories: 0.3, protein: 0.4, fat: 0.3, carbs: 0.2 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::MuscleGain => "muscle_gain",
            Goal::FatLoss => "fat_loss",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "muscle_gain" => Ok(Goal::MuscleGain),
            "fat_loss" => Ok(Goal::FatLoss),
            other => Err(ScoringError::InvalidGoal { goal: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalWeights {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl GoalWeights {
    pub fn total(&self, scores: &NutrientScores) -> f64 {
        scores.calories * self.calories
            + scores.protein * self.protein
            + scores.fat * self.fat
            + scores.carbs * self.carbs
    }
}

/// Per-nutrient scores of one row, each in `0.0..=2.0` for sane targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientScores {
    #[serde(rename = "Calories Score")]
    pub calories: f64,
    #[serde(rename = "Protein Score")]
    pub protein: f64,
    #[serde(rename = "Fat Score")]
    pub fat: f64,
    #[serde(rename = "Carbs Score")]
    pub carbs: f64,
}
