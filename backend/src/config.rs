use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};
use crate::store::IdStrategy;

pub const SEED_CANDIDATES: &str = "SEED_CANDIDATES";
pub const ID_STRATEGY: &str = "ID_STRATEGY";
pub const AUTO_GENERATE_SECS: &str = "AUTO_GENERATE_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_candidates: bool,
    pub id_strategy: IdStrategy,
    pub auto_generate_every: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_candidates: true,
            id_strategy: IdStrategy::Length,
            auto_generate_every: None,
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(format!("unknown id strategy '{other}'")),
        }
    }
}

impl AppConfig {
    /// Builds the config from any key/value source, falling back to defaults
    /// (with a warning) for values that do not parse.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let auto_generate_every = match try_load::<u64, _>(&lookup, AUTO_GENERATE_SECS) {
            Some(0) => {
                warn!("{AUTO_GENERATE_SECS} must be positive, auto-generation stays disabled");
                None
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Self {
            seed_candidates: try_load(&lookup, SEED_CANDIDATES).unwrap_or(defaults.seed_candidates),
            id_strategy: try_load(&lookup, ID_STRATEGY).unwrap_or(defaults.id_strategy),
            auto_generate_every,
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default");
        return None;
    };

    raw.trim()
        .parse()
        .map_err(|e| warn!("Invalid {key} value '{raw}': {e}, using default"))
        .ok()
}
