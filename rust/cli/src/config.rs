use cardfloor_engine::floor::TournamentSettings;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub participants: usize,
    pub group_size: usize,
    pub hands_per_group: usize,
    pub seed: Option<u64>,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub participants: ValueSource,
    pub group_size: ValueSource,
    pub hands_per_group: ValueSource,
    pub seed: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            participants: ValueSource::Default,
            group_size: ValueSource::Default,
            hands_per_group: ValueSource::Default,
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let settings = TournamentSettings::default();
        Self {
            participants: 12,
            group_size: settings.group_size,
            hands_per_group: settings.hands_per_group,
            seed: None,
            strategy: "random".into(),
        }
    }
}

impl Config {
    pub fn tournament_settings(&self) -> TournamentSettings {
        TournamentSettings {
            group_size: self.group_size,
            hands_per_group: self.hands_per_group,
            seed: self.seed,
        }
    }
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub participants: Option<usize>,
    pub group_size: Option<usize>,
    pub hands_per_group: Option<usize>,
    pub seed: Option<u64>,
    pub strategy: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&Overrides::default())
}

/// Resolve configuration: defaults, then `CARDFLOOR_CONFIG` file, then
/// `CARDFLOOR_*` environment variables, then `overrides`.
pub fn load_with_overrides(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CARDFLOOR_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.participants {
            cfg.participants = v;
            sources.participants = ValueSource::File;
        }
        if let Some(v) = f.group_size {
            cfg.group_size = v;
            sources.group_size = ValueSource::File;
        }
        if let Some(v) = f.hands_per_group {
            cfg.hands_per_group = v;
            sources.hands_per_group = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Some(v) = env_number("CARDFLOOR_PARTICIPANTS", "participants")? {
        cfg.participants = v;
        sources.participants = ValueSource::Env;
    }
    if let Some(v) = env_number("CARDFLOOR_GROUP_SIZE", "group_size")? {
        cfg.group_size = v;
        sources.group_size = ValueSource::Env;
    }
    if let Some(v) = env_number("CARDFLOOR_HANDS", "hands_per_group")? {
        cfg.hands_per_group = v;
        sources.hands_per_group = ValueSource::Env;
    }
    if let Some(v) = env_number("CARDFLOOR_SEED", "seed")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var("CARDFLOOR_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }

    if let Some(v) = overrides.participants {
        cfg.participants = v;
        sources.participants = ValueSource::Cli;
    }
    if let Some(v) = overrides.group_size {
        cfg.group_size = v;
        sources.group_size = ValueSource::Cli;
    }
    if let Some(v) = overrides.hands_per_group {
        cfg.hands_per_group = v;
        sources.hands_per_group = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = &overrides.strategy {
        cfg.strategy = v.clone();
        sources.strategy = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    participants: Option<usize>,
    #[serde(default)]
    group_size: Option<usize>,
    #[serde(default)]
    hands_per_group: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<String>,
}

fn env_number<T: std::str::FromStr>(var: &str, field: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", field, v))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.group_size == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: group_size must be >=1".into(),
        ));
    }
    if cfg.hands_per_group == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hands_per_group must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_tournament() {
        let cfg = Config::default();
        assert_eq!(cfg.participants, 12);
        assert_eq!(cfg.group_size, 6);
        assert_eq!(cfg.hands_per_group, 1000);
        assert_eq!(cfg.strategy, "random");
    }

    #[test]
    fn validate_rejects_zero_group_and_hands() {
        let mut cfg = Config::default();
        cfg.group_size = 0;
        assert!(validate(&cfg).is_err());
        let mut cfg = Config::default();
        cfg.hands_per_group = 0;
        assert!(validate(&cfg).is_err());
    }
}
