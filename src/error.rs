use std::fmt;

#[derive(Debug)]
pub enum DocqaError {
    /// A message record did not have the expected shape.
    Validation(String),
    /// Document text could not be obtained.
    Extraction(String),
    ModelCall {
        status: Option<u16>,
        message: String,
    },
    AccessDenied,
    Config(String),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl DocqaError {
    /// True for every failure that originates in the model API call.
    pub fn is_model_call_error(&self) -> bool {
        matches!(
            self,
            DocqaError::ModelCall { .. } | DocqaError::NetworkError(_) | DocqaError::Timeout
        )
    }
}

impl fmt::Display for DocqaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocqaError::Validation(msg) => write!(f, "Invalid message: {}", msg),
            DocqaError::Extraction(msg) => write!(f, "Could not read document: {}", msg),
            DocqaError::ModelCall {
                status: Some(status),
                message,
            } => write!(f, "API error (status {}): {}", status, message),
            DocqaError::ModelCall {
                status: None,
                message,
            } => write!(f, "API error: {}", message),
            DocqaError::AccessDenied => write!(f, "Access denied: incorrect password"),
            DocqaError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DocqaError::NetworkError(e) => write!(f, "Network error: {}", e),
            DocqaError::Timeout => write!(f, "Request timeout"),
            DocqaError::IoError(e) => write!(f, "IO error: {}", e),
            DocqaError::JsonError(e) => write!(f, "JSON error: {}", e),
            DocqaError::YamlError(e) => write!(f, "YAML error: {}", e),
            DocqaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DocqaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocqaError::NetworkError(e) => Some(e),
            DocqaError::IoError(e) => Some(e),
            DocqaError::JsonError(e) => Some(e),
            DocqaError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DocqaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DocqaError::Timeout
        } else {
            DocqaError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for DocqaError {
    fn from(err: std::io::Error) -> Self {
        DocqaError::IoError(err)
    }
}

impl From<serde_json::Error> for DocqaError {
    fn from(err: serde_json::Error) -> Self {
        DocqaError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for DocqaError {
    fn from(err: serde_yaml::Error) -> Self {
        DocqaError::YamlError(err)
    }
}

impl From<anyhow::Error> for DocqaError {
    fn from(err: anyhow::Error) -> Self {
        DocqaError::Config(format!("{:#}", err))
    }
}

impl From<String> for DocqaError {
    fn from(msg: String) -> Self {
        DocqaError::Other(msg)
    }
}

impl From<&str> for DocqaError {
    fn from(msg: &str) -> Self {
        DocqaError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocqaError>;

