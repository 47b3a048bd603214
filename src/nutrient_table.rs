use serde::{Deserialize, Serialize};

/// One normalised food record. Nutrient fields are per item and default to 0.0
/// when the upstream record omitted them.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NutrientRow {
    #[serde(rename = "Food", default)]
    pub food: String,
    #[serde(rename = "FDC ID", default)]
    pub fdc_id: String,
    #[serde(rename = "Brand", default)]
    pub brand: String,
    #[serde(rename = "Calories", default)]
    pub calories: f64,
    #[serde(rename = "Protein (g)", default)]
    pub protein_g: f64,
    #[serde(rename = "Fat (g)", default)]
    pub fat_g: f64,
    #[serde(rename = "Carbs (g)", default)]
    pub carbs_g: f64,
    #[serde(rename = "Sugar (g)", default)]
    pub sugar_g: f64,
    #[serde(rename = "Fiber (g)", default)]
    pub fiber_g: f64,
    #[serde(rename = "Sodium (mg)", default)]
    pub sodium_mg: f64,
}

pub type NutrientTable = Vec<NutrientRow>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientLabel {
    Calories,
    Protein,
    Fat,
    Carbs,
    Sugar,
    Fiber,
    Sodium,
}

impl NutrientLabel {
    pub const ALL: [NutrientLabel; 7] = [
        NutrientLabel::Calories,
        NutrientLabel::Protein,
        NutrientLabel::Fat,
        NutrientLabel::Carbs,
        NutrientLabel::Sugar,
        NutrientLabel::Fiber,
        NutrientLabel::Sodium,
    ];

    /// Column header used in nutrient tables.
    pub fn column(&self) -> &'static str {
        match self {
            NutrientLabel::Calories => "Calories",
            NutrientLabel::Protein => "Protein (g)",
            NutrientLabel::Fat => "Fat (g)",
            NutrientLabel::Carbs => "Carbs (g)",
            NutrientLabel::Sugar => "Sugar (g)",
            NutrientLabel::Fiber => "Fiber (g)",
            NutrientLabel::Sodium => "Sodium (mg)",
        }
    }

    /// Reference daily intake for an adult, in the label's unit.
    pub fn daily_value(&self) -> f64 {
        match self {
            NutrientLabel::Calories => 2000.0,
            NutrientLabel::Protein => 50.0,
            NutrientLabel::Fat => 78.0,
            NutrientLabel::Carbs => 300.0,
            NutrientLabel::Sugar => 50.0,
            NutrientLabel::Fiber => 28.0,
            NutrientLabel::Sodium => 2300.0,
        }
    }
}

impl NutrientRow {
    pub fn value(&self, label: NutrientLabel) -> f64 {
        match label {
            NutrientLabel::Calories => self.calories,
            NutrientLabel::Protein => self.protein_g,
            NutrientLabel::Fat => self.fat_g,
            NutrientLabel::Carbs => self.carbs_g,
            NutrientLabel::Sugar => self.sugar_g,
            NutrientLabel::Fiber => self.fiber_g,
            NutrientLabel::Sodium => self.sodium_mg,
        }
    }

    pub(crate) fn value_mut(&mut self, label: NutrientLabel) -> &mut f64 {
        match label {
            NutrientLabel::Calories => &mut self.calories,
            NutrientLabel::Protein => &mut self.protein_g,
            NutrientLabel::Fat => &mut self.fat_g,
            NutrientLabel::Carbs => &mut self.carbs_g,
            NutrientLabel::Sugar => &mut self.sugar_g,
            NutrientLabel::Fiber => &mut self.fiber_g,
            NutrientLabel::Sodium => &mut self.sodium_mg,
        }
    }
}

/// Normalises each of the seven nutrients of a row by its daily value.
///
/// The fractions are not clamped; a row with twice the daily sodium yields 2.0.
/// Entries come back in `NutrientLabel::ALL` order, ready for a profile chart.
pub fn daily_value_profile(row: &NutrientRow) -> Vec<(NutrientLabel, f64)> {
    NutrientLabel::ALL
        .iter()
        .map(|&label| (label, row.value(label) / label.daily_value()))
        .collect()
}
