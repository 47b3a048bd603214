use std::path::PathBuf;

pub const FOODS_CSV_ENV_VAR: &str = "MEAL_RANKER_FOODS_CSV";
pub const TOP_ENV_VAR: &str = "MEAL_RANKER_TOP";
pub const LOG_FILTER_ENV_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV_VAR: &str = "LOG_FORMAT";

const DEFAULT_TOP: usize = 10;
const DEFAULT_LOG_FILTER: &str = "meal_ranker=info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Food table used by `rank` when `--foods` is not given.
    pub foods_csv: Option<PathBuf>,
    pub top: usize,
    pub log_filter: String,
    pub json_logs: bool,
}

impl AppConfig {
    /// Reads settings from the process environment. Call after `dotenv`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            foods_csv: lookup(FOODS_CSV_ENV_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            top: lookup(TOP_ENV_VAR)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_TOP),
            log_filter: lookup(LOG_FILTER_ENV_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            json_logs: lookup(LOG_FORMAT_ENV_VAR)
                .map(|v| v == "json")
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.foods_csv, None);
        assert_eq!(config.top, 10);
        assert_eq!(config.log_filter, "meal_ranker=info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_values_read_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (FOODS_CSV_ENV_VAR, "data/foods.csv"),
            (TOP_ENV_VAR, "3"),
            (LOG_FILTER_ENV_VAR, "debug"),
            (LOG_FORMAT_ENV_VAR, "json"),
        ]));
        assert_eq!(config.foods_csv, Some(PathBuf::from("data/foods.csv")));
        assert_eq!(config.top, 3);
        assert_eq!(config.log_filter, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_unparsable_top_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(TOP_ENV_VAR, "lots")]));
        assert_eq!(config.top, 10);
    }
}
