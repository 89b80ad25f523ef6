use thiserror::Error;

pub type MicronResult<T> = Result<T, MicronError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MicronError {
    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid style '{token}': {reason}")]
    InvalidStyle { token: String, reason: String },

    #[error("Theme variable '{variable}' not found")]
    ThemeVariableNotFound { variable: String },

    #[error("Invalid theme variable reference: {reference}")]
    InvalidThemeReference { reference: String },

    #[error("Invalid field name '{name}' for component '{component}': must match [A-Za-z0-9_-.]+")]
    InvalidFieldName { component: String, name: String },

    #[error("Invalid property '{property}' for component '{component}': {reason}")]
    InvalidProperty {
        component: String,
        property: String,
        reason: String,
    },

    #[error("Value out of range for '{property}': {value}. Expected range: {range}")]
    ValueOutOfRange {
        property: String,
        value: String,
        range: String,
    },

    #[error("Component '{child}' is not allowed inside '{parent}'")]
    InvalidChild { parent: String, child: String },

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },

    #[error("Page is missing a 'body' section")]
    MissingBody,
}

impl From<serde_yaml::Error> for MicronError {
    fn from(err: serde_yaml::Error) -> Self {
        MicronError::YamlError(err.to_string())
    }
}
