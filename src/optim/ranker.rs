use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::error::ScoringError;
use crate::nutrient_table::NutrientRow;
use crate::optim::nutri_eval::{bounded_score, penalized_score, Goal, GoalWeights, NutrientScores};
use crate::optim::targets::MacroTargets;

/// A nutrient row together with its per-nutrient scores and weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    #[serde(flatten)]
    pub row: NutrientRow,
    #[serde(flatten)]
    pub scores: NutrientScores,
    #[serde(rename = "Total Score")]
    pub total_score: f64,
}

/// Scores one row. Calories are compared against the full daily `tee`, the
/// macros against the per-meal `targets`.
pub fn score_row(row: &NutrientRow, targets: &MacroTargets, tee: f64, weights: &GoalWeights) -> ScoredRow {
    let scores = NutrientScores {
        calories: penalized_score(row.calories, tee),
        protein: bounded_score(row.protein_g, targets.protein_g),
        fat: penalized_score(row.fat_g, targets.fat_g),
        carbs: penalized_score(row.carbs_g, targets.carbs_g),
    };
    ScoredRow {
        row: row.clone(),
        total_score: weights.total(&scores),
        scores,
    }
}

// Descending by total; NaN totals sink to the bottom.
fn by_total_descending(a: &ScoredRow, b: &ScoredRow) -> Ordering {
    match (a.total_score.is_nan(), b.total_score.is_nan()) {
        (false, false) => b.total_score.total_cmp(&a.total_score),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Scores every row and returns them ranked, highest total first.
///
/// The input is left untouched. The sort is stable, so rows with equal totals
/// keep their input order.
pub fn score_menu(table: &[NutrientRow], targets: &MacroTargets, tee: f64, goal: Goal) -> Vec<ScoredRow> {
    let weights = goal.weights();
    let mut scored: Vec<ScoredRow> = table
        .par_iter()
        .map(|row| score_row(row, targets, tee, &weights))
        .collect();
    scored.sort_by(by_total_descending);

    debug!(rows = scored.len(), %goal, tee, "ranked nutrient table");
    scored
}

/// Same as [`score_menu`] for a goal given by name.
///
/// # Errors
/// Returns [`ScoringError::InvalidGoal`] when `goal` is neither `muscle_gain`
/// nor `fat_loss`.
pub fn score_menu_for_goal(
    table: &[NutrientRow],
    targets: &MacroTargets,
    tee: f64,
    goal: &str,
) -> Result<Vec<ScoredRow>, ScoringError> {
    let goal: Goal = goal.parse()?;
    Ok(score_menu(table, targets, tee, goal))
}
