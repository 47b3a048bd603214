use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::energy::{ActivityLevel, Demographics, Gender};
use crate::error::ScoringError;
use crate::optim::Goal;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate BMR, TEE and BMI
    Energy(DemographicArgs),
    /// Per-meal macro targets for a daily TEE
    Targets {
        /// Total Energy Expenditure in kcal/day
        #[arg(long, allow_negative_numbers = true)]
        tee: f64,
    },
    /// Rank the foods of a nutrient table against per-meal targets
    Rank(RankArgs),
    /// Time and distance needed to burn a number of calories
    Exercise {
        #[arg(long, allow_negative_numbers = true)]
        calories: f64,
        #[arg(long)]
        bmi: f64,
        #[arg(long)]
        age: f64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DemographicArgs {
    /// "male" or "female"
    #[arg(long)]
    pub gender: String,
    /// Age in years
    #[arg(long)]
    pub age: f64,
    /// Height in centimetres
    #[arg(long)]
    pub height: f64,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,
    /// inactive, low_active, active or very_active (default: inactive)
    #[arg(long)]
    pub activity: Option<String>,
}

impl DemographicArgs {
    pub fn to_demographics(&self) -> Demographics {
        Demographics {
            gender: Gender::from(self.gender.as_str()),
            age: self.age,
            height_cm: self.height,
            weight_kg: self.weight,
            activity_level: ActivityLevel::from(self.activity.as_deref().unwrap_or("inactive")),
        }
    }
}

/// Demographics for `rank`: all four body fields or none of them.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionalDemographicArgs {
    #[arg(long, requires = "age")]
    pub gender: Option<String>,
    #[arg(long, requires = "height")]
    pub age: Option<f64>,
    #[arg(long, requires = "weight")]
    pub height: Option<f64>,
    #[arg(long, requires = "gender")]
    pub weight: Option<f64>,
    #[arg(long, requires = "gender")]
    pub activity: Option<String>,
}

impl OptionalDemographicArgs {
    /// `None` unless gender, age, height and weight were all given.
    pub fn to_demographics(&self) -> Option<Demographics> {
        let (gender, age, height, weight) = (self.gender.as_deref()?, self.age?, self.height?, self.weight?);
        Some(Demographics {
            gender: Gender::from(gender),
            age,
            height_cm: height,
            weight_kg: weight,
            activity_level: ActivityLevel::from(self.activity.as_deref().unwrap_or("inactive")),
        })
    }
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// CSV nutrient table; falls back to MEAL_RANKER_FOODS_CSV
    #[arg(short, long)]
    pub foods: Option<PathBuf>,
    /// muscle_gain or fat_loss
    #[arg(short, long, default_value = "muscle_gain")]
    pub goal: String,
    /// Daily TEE in kcal; estimated from demographics when omitted
    #[arg(long)]
    pub tee: Option<f64>,
    /// Number of ranked rows to print; falls back to MEAL_RANKER_TOP
    #[arg(long)]
    pub top: Option<usize>,
    #[command(flatten)]
    pub demographics: OptionalDemographicArgs,
}

impl RankArgs {
    /// Checked before the food table or TEE are looked at.
    pub fn goal(&self) -> Result<Goal, ScoringError> {
        self.goal.parse()
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
