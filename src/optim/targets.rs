use serde::{Deserialize, Serialize};

pub const PROTEIN_ENERGY_SHARE: f64 = 0.4;
pub const FAT_ENERGY_SHARE: f64 = 0.3;
pub const CARB_ENERGY_SHARE: f64 = 0.3;

/// Atwater factors, kcal per gram.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;

pub const MEALS_PER_DAY: f64 = 3.0;

/// Gram targets for a single meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    #[serde(rename = "Protein (g)")]
    pub protein_g: f64,
    #[serde(rename = "Fat (g)")]
    pub fat_g: f64,
    #[serde(rename = "Carbs (g)")]
    pub carbs_g: f64,
}

impl MacroTargets {
    /// Energy of one meal at these targets, recomputed from the Atwater factors.
    pub fn meal_kcal(&self) -> f64 {
        self.protein_g * PROTEIN_KCAL_PER_G
            + self.fat_g * FAT_KCAL_PER_G
            + self.carbs_g * CARB_KCAL_PER_G
    }
}

/// Splits a daily TEE into per-meal macro targets.
///
/// # Arguments
/// * `tee`: Total Energy Expenditure in kcal/day.
///
/// # Returns
/// Grams of protein, fat and carbohydrate for one of three equal meals, with a
/// 40/30/30 energy split. A negative `tee` yields negative targets.
pub fn compute_target_macros_per_meal(tee: f64) -> MacroTargets {
    MacroTargets {
        protein_g: tee * PROTEIN_ENERGY_SHARE / PROTEIN_KCAL_PER_G / MEALS_PER_DAY,
        fat_g: tee * FAT_ENERGY_SHARE / FAT_KCAL_PER_G / MEALS_PER_DAY,
        carbs_g: tee * CARB_ENERGY_SHARE / CARB_KCAL_PER_G / MEALS_PER_DAY,
    }
}

pub fn per_meal_calories(tee: f64) -> f64 {
    tee / MEALS_PER_DAY
}
