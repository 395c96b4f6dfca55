use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::time::Duration;
use crate::types::{Config, DEFAULT_COMMAND_TIMEOUT_SECS};

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<Config> {
    load_config_with_env(&SystemEnvironment)
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<Config> {
    let timeout_secs: u64 = match env.get_var("PREFLIGHT_TIMEOUT_SECS") {
        Some(raw) => raw
            .trim()
            .parse()
            .context("Invalid PREFLIGHT_TIMEOUT_SECS")?,
        None => DEFAULT_COMMAND_TIMEOUT_SECS,
    };
    if timeout_secs == 0 {
        return Err(anyhow!("PREFLIGHT_TIMEOUT_SECS must be greater than zero"));
    }

    // https://no-color.org: any non-empty value disables colour
    let colorize = env
        .get_var("NO_COLOR")
        .map(|v| v.is_empty())
        .unwrap_or(true);

    let force_juju_checks = env
        .get_var("PREFLIGHT_FORCE_JUJU")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(false);

    Ok(Config {
        command_timeout: Duration::from_secs(timeout_secs),
        colorize,
        force_juju_checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading_with_env() {
        let env = MockEnvironment::new()
            .with_var("PREFLIGHT_TIMEOUT_SECS", "15")
            .with_var("NO_COLOR", "1")
            .with_var("PREFLIGHT_FORCE_JUJU", "true");

        let config = load_config_with_env(&env).unwrap();

        assert_eq!(config.command_timeout, Duration::from_secs(15));
        assert!(!config.colorize);
        assert!(config.force_juju_checks);
    }

    #[test]
    fn test_config_loading_defaults() {
        let config = load_config_with_env(&MockEnvironment::new()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.command_timeout, Duration::from_secs(60));
        assert!(config.colorize);
        assert!(!config.force_juju_checks);
    }

    #[test]
    fn test_config_loading_invalid_timeout() {
        let env = MockEnvironment::new().with_var("PREFLIGHT_TIMEOUT_SECS", "soon");
        let result = load_config_with_env(&env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PREFLIGHT_TIMEOUT_SECS"));

        let env = MockEnvironment::new().with_var("PREFLIGHT_TIMEOUT_SECS", "0");
        let result = load_config_with_env(&env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PREFLIGHT_TIMEOUT_SECS"));
    }

    #[test]
    fn test_empty_no_color_keeps_colour() {
        let env = MockEnvironment::new().with_var("NO_COLOR", "");
        let config = load_config_with_env(&env).unwrap();
        assert!(config.colorize);
    }

    #[test]
    fn test_boolean_parsing() {
        for val in ["1", "true", "TRUE", "True"] {
            let env = MockEnvironment::new().with_var("PREFLIGHT_FORCE_JUJU", val);
            let config = load_config_with_env(&env).unwrap();
            assert!(config.force_juju_checks, "Failed for value: {}", val);
        }

        for val in ["0", "false", "FALSE", "no", "off", ""] {
            let env = MockEnvironment::new().with_var("PREFLIGHT_FORCE_JUJU", val);
            let config = load_config_with_env(&env).unwrap();
            assert!(!config.force_juju_checks, "Failed for value: {}", val);
        }
    }
}
