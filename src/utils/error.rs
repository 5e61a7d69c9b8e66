use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile parsing error: {message}")]
    ProfileParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Field '{field}' is a {actual} field, expected a {expected} field")]
    FieldShape {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

impl EditorError {
    /// Short message for stderr, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            EditorError::IoError(e) => format!("Could not read or write a file: {}", e),
            EditorError::SerializationError(_) => {
                "The document could not be serialized".to_string()
            }
            EditorError::ProfileParseError { .. } => "The profile file is not valid".to_string(),
            EditorError::InvalidConfigValue { field, .. } => {
                format!("The value given for '{}' is not valid", field)
            }
            EditorError::UnknownField { field } => format!("There is no field named '{}'", field),
            EditorError::FieldShape { field, expected, .. } => {
                format!("'{}' cannot be edited as a {} field", field, expected)
            }
            EditorError::InvalidCommand { message } => message.clone(),
            EditorError::ClipboardError { .. } => "Copying to the clipboard failed".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EditorError::IoError(_) => "Check that the path exists and is readable/writable",
            EditorError::SerializationError(_) => "Report this as a bug",
            EditorError::ProfileParseError { .. } => {
                "Check the TOML syntax and that field names are camelCase (e.g. postalCode)"
            }
            EditorError::InvalidConfigValue { .. } => "Correct the value and try again",
            EditorError::UnknownField { .. } => "Run the 'fields' command to list field names",
            EditorError::FieldShape { .. } => {
                "Use 'set' for text fields, 'item' for lists and 'pair' for founders/employees"
            }
            EditorError::InvalidCommand { .. } => "Type 'help' to list the available commands",
            EditorError::ClipboardError { .. } => {
                "Install wl-copy, xclip or pbcopy, or use a terminal that supports OSC 52"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
