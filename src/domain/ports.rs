use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// Where the taxonomy text comes from. Read once at startup.
pub trait TaxonomySource: Send + Sync {
    /// Human-readable origin used in logs and parse errors.
    fn origin(&self) -> String;
    fn read_to_string(&self) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    /// `None` selects the taxonomy compiled into the binary.
    fn taxonomy_path(&self) -> Option<&str>;
    fn log_format(&self) -> LogFormat;
    fn log_level(&self) -> Option<&str>;
}
