//! Runtime settings. There is no config file; the environment is the only source.

pub const PRECISION_VAR: &str = "FIGURES_PRECISION";
pub const DEFAULT_PRECISION: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidPrecision { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Digits after the decimal point for coordinates, areas and radii.
    pub precision: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MenuConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = MenuConfig::default();
        if let Some(value) = lookup(PRECISION_VAR) {
            config.precision = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPrecision {
                    var: PRECISION_VAR,
                    value,
                })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unset_uses_defaults() {
        assert_eq!(MenuConfig::from_lookup(|_| None), Ok(MenuConfig::default()));
        assert_eq!(MenuConfig::default().precision, 3);
    }
    #[test]
    fn test_precision_from_environment() {
        let config = MenuConfig::from_lookup(|var| (var == PRECISION_VAR).then(|| " 5 ".to_owned()));
        assert_eq!(config, Ok(MenuConfig { precision: 5 }));
    }
    #[test]
    fn test_bad_precision_is_reported() {
        let config = MenuConfig::from_lookup(|_| Some("-2".to_owned()));
        assert_eq!(
            config,
            Err(ConfigError::InvalidPrecision {
                var: PRECISION_VAR,
                value: "-2".to_owned()
            })
        );
        assert_eq!(
            config.unwrap_err().to_string(),
            "FIGURES_PRECISION must be a non-negative integer, got '-2'"
        );
    }
}
