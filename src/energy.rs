use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl From<&str> for Gender {
    /// `"male"` (any case) is `Male`; every other label falls through to `Female`.
    fn from(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Inactive,
    LowActive,
    Active,
    /// Catch-all bucket: "very active" and any unrecognised label.
    VeryActive,
}

impl From<&str> for ActivityLevel {
    fn from(label: &str) -> Self {
        let normalised = label.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalised.as_str() {
            "inactive" => ActivityLevel::Inactive,
            "low_active" => ActivityLevel::LowActive,
            "active" => ActivityLevel::Active,
            _ => ActivityLevel::VeryActive,
        }
    }
}

/// Inputs for every energy estimate. Units are fixed: years, centimetres, kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub gender: Gender,
    pub age: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// kcal/day. Only present when produced from a full `Demographics` record.
    pub bmr: Option<f64>,
    /// kcal/day.
    pub tee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    /// age <= 2
    Infant,
    /// 2 < age < 19
    Youth,
    /// age >= 19
    Adult,
}

impl AgeBand {
    pub fn for_age(age: f64) -> Self {
        if age <= 2.0 {
            AgeBand::Infant
        } else if age < 19.0 {
            AgeBand::Youth
        } else {
            AgeBand::Adult
        }
    }
}

/// One row of the TEE equation table: `intercept + age·a + height·h + weight·w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeeCoefficients {
    pub intercept: f64,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
}

impl TeeCoefficients {
    const fn new(intercept: f64, age: f64, height: f64, weight: f64) -> Self {
        Self { intercept, age, height, weight }
    }

    pub fn apply(&self, age: f64, height_cm: f64, weight_kg: f64) -> f64 {
        self.intercept + self.age * age + self.height * height_cm + self.weight * weight_kg
    }
}

/// Looks up the TEE equation for a gender, age band and activity level.
///
/// Infant equations ignore the activity level.
pub fn tee_coefficients(gender: Gender, band: AgeBand, activity: ActivityLevel) -> TeeCoefficients {
    use ActivityLevel::*;
    use AgeBand::*;
    use Gender::*;

    match (gender, band, activity) {
        (Male, Infant, _) => TeeCoefficients::new(-716.45, -1.00, 17.82, 15.06),
        (Female, Infant, _) => TeeCoefficients::new(-69.15, 80.00, 2.65, 54.15),

        (Male, Youth, Inactive) => TeeCoefficients::new(-447.51, -3.68, 13.01, 13.15),
        (Male, Youth, LowActive) => TeeCoefficients::new(19.12, 3.68, 8.62, 20.28),
        (Male, Youth, Active) => TeeCoefficients::new(-388.19, 3.68, 12.66, 20.46),
        (Male, Youth, VeryActive) => TeeCoefficients::new(-671.75, 3.68, 15.38, 23.25),

        (Male, Adult, Inactive) => TeeCoefficients::new(753.07, -10.83, 6.50, 14.10),
        (Male, Adult, LowActive) => TeeCoefficients::new(581.47, -10.83, 8.30, 14.94),
        (Male, Adult, Active) => TeeCoefficients::new(1004.82, -10.83, 6.52, 15.91),
        (Male, Adult, VeryActive) => TeeCoefficients::new(-517.88, -10.83, 15.61, 19.11),

        (Female, Youth, Inactive) => TeeCoefficients::new(55.59, -22.25, 8.43, 17.07),
        (Female, Youth, LowActive) => TeeCoefficients::new(-297.54, -22.25, 12.77, 14.73),
        (Female, Youth, Active) => TeeCoefficients::new(-189.55, -22.25, 11.74, 18.34),
        (Female, Youth, VeryActive) => TeeCoefficients::new(-709.59, -22.25, 18.22, 14.25),

        (Female, Adult, Inactive) => TeeCoefficients::new(584.90, -7.01, 5.72, 11.71),
        (Female, Adult, LowActive) => TeeCoefficients::new(575.77, -7.01, 6.60, 12.14),
        (Female, Adult, Active) => TeeCoefficients::new(710.25, -7.01, 6.54, 12.34),
        (Female, Adult, VeryActive) => TeeCoefficients::new(511.83, -7.01, 9.07, 12.56),
    }
}

/// Basal Metabolic Rate in kcal/day.
///
/// Male uses `88.362 + 13.397·w + 4.799·h − 5.677·a`; female uses the
/// Mifflin-St Jeor `10·w + 6.25·h − 5·a − 161`. Inputs are not range-checked.
pub fn calculate_bmr(gender: Gender, age: f64, height_cm: f64, weight_kg: f64) -> f64 {
    match gender {
        Gender::Male => 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * age),
        Gender::Female => 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age - 161.0,
    }
}

/// Total Energy Expenditure in kcal/day.
///
/// # Arguments
/// * `gender`, `age`, `height_cm`, `weight_kg`: select and feed the equation.
/// * `activity_level`: ignored for infants (age <= 2).
///
/// # Returns
/// The estimate from the matching equation. Neighbouring age bands are not
/// continuous, so ages 2/3 and 18/19 may jump.
pub fn calculate_tee(
    gender: Gender,
    age: f64,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
) -> f64 {
    tee_coefficients(gender, AgeBand::for_age(age), activity_level).apply(age, height_cm, weight_kg)
}

pub fn estimate_energy(demographics: &Demographics) -> EnergyEstimate {
    let Demographics { gender, age, height_cm, weight_kg, activity_level } = *demographics;
    EnergyEstimate {
        bmr: Some(calculate_bmr(gender, age, height_cm, weight_kg)),
        tee: calculate_tee(gender, age, height_cm, weight_kg, activity_level),
    }
}

/// Body-mass index (kg/m²) from centimetres and kilograms.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
