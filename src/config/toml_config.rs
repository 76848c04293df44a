use crate::domain::ports::{ConfigProvider, LogFormat};
use crate::utils::error::{CockpitError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub taxonomy: TaxonomySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub name: Option<String>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: Some("cockpit-design-aesthetics".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomySection {
    /// Omit to use the dataset compiled into the binary.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

impl ServiceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CockpitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CockpitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CockpitError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn service_name(&self) -> &str {
        self.service.name.as_deref().unwrap_or("cockpit-design-aesthetics")
    }
}

impl ConfigProvider for ServiceConfig {
    fn taxonomy_path(&self) -> Option<&str> {
        self.taxonomy.path.as_deref()
    }

    fn log_format(&self) -> LogFormat {
        self.logging.format
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        // An absent name falls back to the default; only a blank one is wrong.
        if let Some(name) = &self.service.name {
            if name.trim().is_empty() {
                return Err(CockpitError::ConfigValidationError {
                    field: "service.name".to_string(),
                    message: "name cannot be empty".to_string(),
                });
            }
        }

        if let Some(path) = &self.taxonomy.path {
            validate_path("taxonomy.path", path)?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
