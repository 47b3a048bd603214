pub mod nutri_eval;
pub mod ranker;
pub mod targets;

pub use nutri_eval::{bounded_score, penalized_score, Goal, GoalWeights, NutrientScores};
pub use ranker::{score_menu, score_menu_for_goal, score_row, ScoredRow};
pub use targets::{compute_target_macros_per_meal, per_meal_calories, MacroTargets};
