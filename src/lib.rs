pub mod cli;
pub mod config;
pub mod energy;
pub mod error;
pub mod exercise;
pub mod nutrient_table;
pub mod optim;
pub mod table_loader;

pub use energy::{
    body_mass_index, calculate_bmr, calculate_tee, estimate_energy, ActivityLevel, Demographics,
    EnergyEstimate, Gender,
};
pub use error::ScoringError;
pub use exercise::{calories_to_exercise_with_distance, estimate_speed_bmi_age, Activity, ExercisePlan};
pub use nutrient_table::{daily_value_profile, NutrientLabel, NutrientRow, NutrientTable};
pub use optim::{compute_target_macros_per_meal, score_menu, score_menu_for_goal, Goal, MacroTargets, ScoredRow};
