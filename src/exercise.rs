//! Translates a calorie figure into time and distance for a few common activities.
//!
//! Speeds start from a per-activity base and are slowed for a BMI above 25
//! and for an age above 40. Calories are not validated: zero gives an empty
//! workout, negative values give negative time and distance.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Speed used for any activity name without a known base speed.
pub const DEFAULT_SPEED_KMH: f64 = 5.0;

const OVERWEIGHT_BMI: f64 = 25.0;
const OVERWEIGHT_SPEED_FACTOR: f64 = 0.9;
const OLDER_AGE: f64 = 40.0;
const OLDER_SPEED_FACTOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Running,
    Swimming,
    Cycling,
    Walking,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Running,
        Activity::Swimming,
        Activity::Cycling,
        Activity::Walking,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::Swimming => "Swimming",
            Activity::Cycling => "Cycling",
            Activity::Walking => "Walking",
        }
    }

    pub fn from_name(name: &str) -> Option<Activity> {
        Activity::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn base_speed_kmh(&self) -> f64 {
        match self {
            Activity::Running => 9.0,
            Activity::Swimming => 3.0,
            Activity::Cycling => 15.0,
            Activity::Walking => 5.0,
        }
    }

    pub fn kcal_per_minute(&self) -> f64 {
        match self {
            Activity::Running => 10.0,
            Activity::Swimming => 14.0,
            Activity::Cycling => 8.0,
            Activity::Walking => 4.0,
        }
    }
}

/// Rounds to `decimals` places on the exact decimal expansion of `value`,
/// so 7.694999.. stays 7.69 instead of drifting up through `value * 100`.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

fn adjust_speed(base: f64, bmi: f64, age: f64) -> f64 {
    let mut speed = base;
    if bmi > OVERWEIGHT_BMI {
        speed *= OVERWEIGHT_SPEED_FACTOR;
    }
    if age > OLDER_AGE {
        speed *= OLDER_SPEED_FACTOR;
    }
    round_to(speed, 2)
}

/// Adjusted speed in km/h for an activity given by name.
///
/// Unknown names fall back to [`DEFAULT_SPEED_KMH`] before adjustment.
pub fn estimate_speed_bmi_age(activity: &str, bmi: f64, age: f64) -> f64 {
    let base = Activity::from_name(activity).map_or(DEFAULT_SPEED_KMH, |a| a.base_speed_kmh());
    adjust_speed(base, bmi, age)
}

pub fn activity_speed(activity: Activity, bmi: f64, age: f64) -> f64 {
    adjust_speed(activity.base_speed_kmh(), bmi, age)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityPlan {
    pub activity: Activity,
    pub time_min: i64,
    pub distance_km: f64,
    pub speed_kmh: f64,
}

/// Per-activity plans, in `Activity::ALL` order.
///
/// Serialises as a map from activity name to `{time_min, distance_km, speed_kmh}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePlan {
    pub calories: f64,
    pub activities: Vec<ActivityPlan>,
}

#[derive(Serialize)]
struct PlanEntry {
    time_min: i64,
    distance_km: f64,
    speed_kmh: f64,
}

impl Serialize for ExercisePlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for plan in &self.activities {
            let entry = PlanEntry {
                time_min: plan.time_min,
                distance_km: plan.distance_km,
                speed_kmh: plan.speed_kmh,
            };
            map.serialize_entry(plan.activity.name(), &entry)?;
        }
        map.end()
    }
}

impl ExercisePlan {
    pub fn get(&self, activity: Activity) -> Option<&ActivityPlan> {
        self.activities.iter().find(|p| p.activity == activity)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ActivityPlan> {
        Activity::from_name(name).and_then(|a| self.get(a))
    }
}

/// How long and how far each activity takes to burn `calories`.
///
/// Minutes are rounded half-to-even for display; distance is derived from
/// the unrounded minutes and the rounded speed, then kept to two decimals.
pub fn calories_to_exercise_with_distance(calories: f64, bmi: f64, age: f64) -> ExercisePlan {
    let activities = Activity::ALL
        .iter()
        .map(|&activity| {
            let minutes = calories / activity.kcal_per_minute();
            let speed = activity_speed(activity, bmi, age);
            let distance = (minutes / 60.0) * speed;
            ActivityPlan {
                activity,
                time_min: minutes.round_ties_even() as i64,
                distance_km: round_to(distance, 2),
                speed_kmh: speed,
            }
        })
        .collect();

    ExercisePlan { calories, activities }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_speeds_without_adjustment() {
        assert_eq!(estimate_speed_bmi_age("Running", 22.0, 25.0), 9.0);
        assert_eq!(estimate_speed_bmi_age("Swimming", 22.0, 25.0), 3.0);
        assert_eq!(estimate_speed_bmi_age("Cycling", 22.0, 25.0), 15.0);
        assert_eq!(estimate_speed_bmi_age("Walking", 22.0, 25.0), 5.0);
    }

    #[test]
    fn test_running_speed_with_both_adjustments() {
        // 9.0 * 0.9 * 0.95 is 7.694999.. in binary
        assert_eq!(estimate_speed_bmi_age("Running", 28.0, 45.0), 7.69);
    }

    #[test]
    fn test_single_adjustments() {
        assert_eq!(estimate_speed_bmi_age("Cycling", 30.0, 30.0), 13.5);
        assert_eq!(estimate_speed_bmi_age("Walking", 20.0, 50.0), 4.75);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(estimate_speed_bmi_age("Running", 25.0, 40.0), 9.0);
    }

    #[test]
    fn test_unknown_activity_defaults_to_walking_speed() {
        assert_eq!(estimate_speed_bmi_age("Rowing", 22.0, 25.0), 5.0);
        assert_eq!(estimate_speed_bmi_age("running", 30.0, 30.0), 4.5);
    }

    #[test]
    fn test_walking_plan_for_600_kcal() {
        let plan = calories_to_exercise_with_distance(600.0, 22.0, 25.0);
        let walking = plan.get_by_name("Walking").unwrap();
        assert_eq!(walking.speed_kmh, 5.0);
        assert_eq!(walking.time_min, 150);
        assert_eq!(walking.distance_km, 12.5);
    }

    #[test]
    fn test_plan_covers_every_activity_in_order() {
        let plan = calories_to_exercise_with_distance(600.0, 22.0, 25.0);
        let names: Vec<&str> = plan.activities.iter().map(|p| p.activity.name()).collect();
        assert_eq!(names, vec!["Running", "Swimming", "Cycling", "Walking"]);

        let running = plan.get(Activity::Running).unwrap();
        assert_eq!(running.time_min, 60);
        assert_eq!(running.distance_km, 9.0);

        let cycling = plan.get(Activity::Cycling).unwrap();
        assert_eq!(cycling.time_min, 75);
        assert_eq!(cycling.distance_km, 18.75);

        // 600 / 14 = 42.857.. minutes at 3 km/h
        let swimming = plan.get(Activity::Swimming).unwrap();
        assert_eq!(swimming.time_min, 43);
        assert_eq!(swimming.distance_km, 2.14);
    }

    #[test]
    fn test_time_rounds_half_to_even() {
        // 625 / 10 = 62.5 running minutes
        let plan = calories_to_exercise_with_distance(625.0, 22.0, 25.0);
        assert_eq!(plan.get(Activity::Running).unwrap().time_min, 62);
    }

    #[test]
    fn test_zero_calories_is_empty_workout() {
        let plan = calories_to_exercise_with_distance(0.0, 30.0, 50.0);
        for entry in &plan.activities {
            assert_eq!(entry.time_min, 0);
            assert_eq!(entry.distance_km, 0.0);
        }
    }

    #[test]
    fn test_negative_calories_propagate() {
        let plan = calories_to_exercise_with_distance(-400.0, 22.0, 25.0);
        let walking = plan.get(Activity::Walking).unwrap();
        assert_eq!(walking.time_min, -100);
        assert!(walking.distance_km < 0.0);
    }

    #[test]
    fn test_plan_serialises_as_activity_map() {
        let plan = calories_to_exercise_with_distance(600.0, 22.0, 25.0);
        let json = serde_json::to_value(&plan).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 4);
        for name in ["Running", "Swimming", "Cycling", "Walking"] {
            assert!(map.contains_key(name), "missing {name}");
        }
        assert_eq!(json["Walking"]["time_min"], 150);
        assert_eq!(json["Walking"]["distance_km"], 12.5);
        assert_eq!(json["Walking"]["speed_kmh"], 5.0);
        assert!(json["Walking"].get("activity").is_none());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(7.694999999999999, 2), 7.69);
        assert_eq!(round_to(2.14285, 2), 2.14);
        assert_eq!(round_to(-8.333333, 2), -8.33);
        assert_eq!(round_to(12.5, 2), 12.5);
    }
}
