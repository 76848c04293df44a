pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, EffectiveConfig};
pub use config::ServiceConfig;

pub use app::{ToolDispatcher, ToolResponse};
pub use core::{CockpitService, Composition, Lookup, NotFound, PromptOptions, TaxonomyStore};
pub use utils::error::{CockpitError, Result};
