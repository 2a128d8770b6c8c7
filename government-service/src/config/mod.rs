use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

use crate::models::ApiVersion;
use crate::validation::{VaccineCatalog, DEFAULT_VACCINES};

#[derive(Debug, Clone)]
pub struct GovernmentConfig {
    pub common: core_config::Config,
    /// Contract revision this deployment serves.
    pub api_version: ApiVersion,
    pub vaccines: VaccineCatalog,
}

impl GovernmentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_version = get_env("API_VERSION", Some("v2"), is_prod)?
            .parse::<ApiVersion>()
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        let default_vaccines = DEFAULT_VACCINES.join(",");
        let vaccines =
            VaccineCatalog::parse_list(&get_env("VACCINE_CATALOG", Some(&default_vaccines), is_prod)?);
        if vaccines.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "VACCINE_CATALOG must name at least one vaccine"
            )));
        }

        Ok(GovernmentConfig {
            common: common_config,
            api_version,
            vaccines,
        })
    }

    /// Defaults for the given revision, without reading the environment.
    pub fn for_version(api_version: ApiVersion) -> Self {
        Self {
            common: core_config::Config::default(),
            api_version,
            vaccines: VaccineCatalog::default(),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
