use thiserror::Error;

#[derive(Error, Debug)]
pub enum CockpitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Taxonomy parse error in {origin}: {message}")]
    TaxonomyParseError { origin: String, message: String },

    #[error("Taxonomy validation error at {section}: {message}")]
    TaxonomyValidationError { section: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error for field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown tool: {tool}")]
    UnknownToolError { tool: String },

    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArgumentsError { tool: String, message: String },
}

impl CockpitError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CockpitError::IoError(e) => format!("Could not read a required file: {}", e),
            CockpitError::SerializationError(e) => format!("Could not encode or decode JSON: {}", e),
            CockpitError::TaxonomyParseError { origin, .. } => {
                format!("The instrument taxonomy at {} is not valid TOML", origin)
            }
            CockpitError::TaxonomyValidationError { section, message } => {
                format!("The instrument taxonomy is incomplete ({}): {}", section, message)
            }
            CockpitError::ConfigError { message } => format!("Configuration problem: {}", message),
            CockpitError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CockpitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CockpitError::UnknownToolError { tool } => format!("There is no tool named '{}'", tool),
            CockpitError::InvalidArgumentsError { tool, message } => {
                format!("The arguments for '{}' are not valid: {}", tool, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CockpitError::IoError(_) => "Check that the file exists and is readable",
            CockpitError::SerializationError(_) => "Send well-formed JSON objects, one per line",
            CockpitError::TaxonomyParseError { .. } => {
                "Fix the TOML syntax or drop --taxonomy to use the built-in dataset"
            }
            CockpitError::TaxonomyValidationError { .. } => {
                "Make sure aircraft_types, instruments and eras are present and use lower_snake_case keys"
            }
            CockpitError::ConfigError { .. }
            | CockpitError::ConfigValidationError { .. }
            | CockpitError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            CockpitError::UnknownToolError { .. } => "Call list_tools to see the available tool names",
            CockpitError::InvalidArgumentsError { .. } => {
                "Check required argument names and pass strings for every value"
            }
        }
    }

    /// Process exit code used by the CLI when this error aborts startup.
    pub fn exit_code(&self) -> i32 {
        match self {
            CockpitError::TaxonomyParseError { .. } | CockpitError::TaxonomyValidationError { .. } => 3,
            CockpitError::IoError(_) => 3,
            CockpitError::UnknownToolError { .. } | CockpitError::InvalidArgumentsError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CockpitError>;
