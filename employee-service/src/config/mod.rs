use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_MONGODB_DATABASE: &str = "fiber-hrms";

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_MONGODB_DATABASE.to_string(),
        }
    }
}

impl EmployeeConfig {
    pub fn load() -> Result<Self, AppError> {
        // Loads .env and APP__ overrides for the shared settings.
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(EmployeeConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some(DEFAULT_MONGODB_URI), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some(DEFAULT_MONGODB_DATABASE), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match (value, default) {
        (Some(val), _) => Ok(val),
        (None, _) if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        (None, Some(def)) => Ok(def.to_string()),
        (None, None) => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mongo_defaults_match_local_instance() {
        let mongo = MongoConfig::default();
        assert_eq!(mongo.uri, "mongodb://localhost:27017");
        assert_eq!(mongo.database, "fiber-hrms");
    }

    #[test]
    fn explicit_value_wins() {
        let value = resolve(
            "MONGODB_DATABASE",
            Some("hr".to_string()),
            Some(DEFAULT_MONGODB_DATABASE),
            true,
        )
        .unwrap();
        assert_eq!(value, "hr");
    }

    #[test]
    fn default_used_outside_production() {
        let value = resolve("MONGODB_URI", None, Some(DEFAULT_MONGODB_URI), false).unwrap();
        assert_eq!(value, DEFAULT_MONGODB_URI);
    }

    #[test]
    fn production_requires_explicit_value() {
        let err = resolve("MONGODB_URI", None, Some(DEFAULT_MONGODB_URI), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("MONGODB_URI"));
    }
}
