//! Process configuration.
//!
//! Read once at startup. The lookup is injected so tests never touch the
//! real environment.

use tally_eval::{DivisionMode, EvalConfig, Evaluator, OperatorRegistry, DEFAULT_MAX_DEPTH};

/// Selects floored division for `/`.
pub const USE_INTEGER_DIVISION: &str = "USE_INTEGER_DIVISION";

/// Overrides the parenthesis nesting limit.
pub const MAX_DEPTH: &str = "TALLY_MAX_DEPTH";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}' (expected true, false, 1 or 0)")]
    InvalidBool { name: &'static str, value: String },

    #[error("invalid value for {name}: '{value}' (expected a positive integer)")]
    InvalidDepth { name: &'static str, value: String },
}

/// Resolved configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub use_integer_division: bool,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_integer_division: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Unset and empty values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = non_empty(lookup(USE_INTEGER_DIVISION)) {
            config.use_integer_division = parse_bool(&value).ok_or(ConfigError::InvalidBool {
                name: USE_INTEGER_DIVISION,
                value,
            })?;
        }

        if let Some(value) = non_empty(lookup(MAX_DEPTH)) {
            config.max_depth = match value.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError::InvalidDepth {
                        name: MAX_DEPTH,
                        value,
                    })
                }
            };
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn division_mode(&self) -> DivisionMode {
        DivisionMode::from_flag(self.use_integer_division)
    }

    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::default().with_max_depth(self.max_depth)
    }

    /// Build the evaluator this configuration describes.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::with_config(
            OperatorRegistry::standard(self.division_mode()),
            self.eval_config(),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
