use anyhow::{Context, Result};
use meal_ranker::cli::{parse_args, Command, DemographicArgs, RankArgs};
use meal_ranker::config::{AppConfig, FOODS_CSV_ENV_VAR};
use meal_ranker::energy::{body_mass_index, estimate_energy, Demographics};
use meal_ranker::exercise::{calories_to_exercise_with_distance, ExercisePlan};
use meal_ranker::optim::{compute_target_macros_per_meal, per_meal_calories, score_menu, Goal, MacroTargets, ScoredRow};
use meal_ranker::table_loader::read_nutrient_table;
use serde::Serialize;
use tokio::fs;

fn init_logging(config: &AppConfig) {
    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialise output")?);
    Ok(())
}

fn print_targets(targets: &MacroTargets) {
    println!("Per-meal targets:");
    println!("  Protein (g): {:>8.2}", targets.protein_g);
    println!("  Fat (g):     {:>8.2}", targets.fat_g);
    println!("  Carbs (g):   {:>8.2}", targets.carbs_g);
}

fn print_exercise_plan(plan: &ExercisePlan) {
    println!("To burn {:.0} kcal:", plan.calories);
    println!("  {:<10} {:>8} {:>12} {:>10}", "Activity", "Minutes", "Distance km", "Speed km/h");
    for entry in &plan.activities {
        println!(
            "  {:<10} {:>8} {:>12.2} {:>10.2}",
            entry.activity.name(),
            entry.time_min,
            entry.distance_km,
            entry.speed_kmh
        );
    }
}

fn print_ranking(ranked: &[ScoredRow]) {
    println!(
        "{:<4} {:<40} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "#", "Food", "kcal", "Prot", "Fat", "Carbs", "Score"
    );
    for (idx, scored) in ranked.iter().enumerate() {
        let row = &scored.row;
        let name: String = row.food.chars().take(40).collect();
        println!(
            "{:<4} {:<40} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>7.3}",
            idx + 1,
            name,
            row.calories,
            row.protein_g,
            row.fat_g,
            row.carbs_g,
            scored.total_score
        );
    }
}

#[derive(Serialize)]
struct EnergyReport {
    demographics: Demographics,
    bmr: Option<f64>,
    tee: f64,
    bmi: f64,
    targets: MacroTargets,
}

fn run_energy(args: &DemographicArgs, json: bool) -> Result<()> {
    let demographics = args.to_demographics();
    let estimate = estimate_energy(&demographics);
    let report = EnergyReport {
        demographics,
        bmr: estimate.bmr,
        tee: estimate.tee,
        bmi: body_mass_index(demographics.height_cm, demographics.weight_kg),
        targets: compute_target_macros_per_meal(estimate.tee),
    };

    if json {
        return print_json(&report);
    }
    if let Some(bmr) = report.bmr {
        println!("BMR: {:.2} kcal/day", bmr);
    }
    println!("TEE: {:.2} kcal/day", report.tee);
    println!("BMI: {:.1}", report.bmi);
    print_targets(&report.targets);
    Ok(())
}

#[derive(Serialize)]
struct RankReport<'a> {
    goal: Goal,
    tee: f64,
    targets: MacroTargets,
    ranked: &'a [ScoredRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    top_pick_surplus: Option<ExercisePlan>,
}

async fn run_rank(args: &RankArgs, config: &AppConfig, json: bool) -> Result<()> {
    let goal = args.goal()?;

    let foods_path = args
        .foods
        .clone()
        .or_else(|| config.foods_csv.clone())
        .with_context(|| format!("No food table given: pass --foods or set {}", FOODS_CSV_ENV_VAR))?;

    let demographics = args.demographics.to_demographics();
    let tee = match (args.tee, demographics.as_ref()) {
        (Some(tee), _) => tee,
        (None, Some(d)) => estimate_energy(d).tee,
        (None, None) => anyhow::bail!("Pass --tee or the demographic flags (--gender, --age, --height, --weight)"),
    };

    let content = fs::read_to_string(&foods_path)
        .await
        .with_context(|| format!("Failed to read food table '{}'", foods_path.display()))?;
    let table = read_nutrient_table(content.as_bytes())
        .with_context(|| format!("Failed to parse food table '{}'", foods_path.display()))?;

    let targets = compute_target_macros_per_meal(tee);
    let ranked = score_menu(&table, &targets, tee, goal);
    let shown = &ranked[..ranked.len().min(args.top.unwrap_or(config.top))];

    // Excess of the best pick over one meal's share of TEE, as exercise.
    let top_pick_surplus = match (shown.first(), demographics.as_ref()) {
        (Some(best), Some(d)) => {
            let surplus = best.row.calories - per_meal_calories(tee);
            (surplus > 0.0).then(|| {
                calories_to_exercise_with_distance(surplus, body_mass_index(d.height_cm, d.weight_kg), d.age)
            })
        }
        _ => None,
    };

    if json {
        return print_json(&RankReport {
            goal,
            tee,
            targets,
            ranked: shown,
            top_pick_surplus,
        });
    }

    println!("Goal: {}  TEE: {:.0} kcal/day", goal, tee);
    print_targets(&targets);
    println!();
    print_ranking(shown);
    if let Some(plan) = top_pick_surplus {
        println!();
        print_exercise_plan(&plan);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();
    init_logging(&config);

    let cli = parse_args();
    tracing::debug!(?cli, "parsed arguments");

    match &cli.command {
        Command::Energy(args) => run_energy(args, cli.json)?,
        Command::Targets { tee } => {
            let targets = compute_target_macros_per_meal(*tee);
            if cli.json {
                print_json(&targets)?;
            } else {
                print_targets(&targets);
            }
        }
        Command::Rank(args) => run_rank(args, &config, cli.json).await?,
        Command::Exercise { calories, bmi, age } => {
            let plan = calories_to_exercise_with_distance(*calories, *bmi, *age);
            if cli.json {
                print_json(&plan)?;
            } else {
                print_exercise_plan(&plan);
            }
        }
    }

    Ok(())
}
