use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FigInvoiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Figma API error (status: {status:?}): {message}")]
    FigmaApi {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Figma access expired or revoked: {0}")]
    ReconnectAccount(String),

    #[error("Node not found in Figma file: {0}")]
    NodeNotFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FigInvoiceError {
    pub fn figma_api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FigInvoiceError::FigmaApi {
            status,
            message: message.into(),
        }
    }

    /// Classify a non-success response from the design tool.
    ///
    /// 401/403 mean the stored token no longer works and the user has to
    /// reconnect; 404 means the file itself is gone.
    pub fn from_figma_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FigInvoiceError::ReconnectAccount(message)
            }
            StatusCode::NOT_FOUND => FigInvoiceError::NodeNotFound(message),
            _ => FigInvoiceError::figma_api(Some(status), message),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            FigInvoiceError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            FigInvoiceError::Network(e) => ErrorPayload::new(
                ErrorCategory::Network,
                e.to_string(),
                "Check connectivity/proxy/VPN and retry.",
            ),
            FigInvoiceError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Use a Figma link such as https://www.figma.com/design/<FILE_KEY>/Name?node-id=1-2.",
            ),
            FigInvoiceError::FigmaApi { status, message } => ErrorPayload::new(
                ErrorCategory::Figma,
                format!("Figma API error (status {:?}): {}", status, message),
                "Check the Figma link and rate limits; retry after waiting.",
            ),
            FigInvoiceError::ReconnectAccount(message) => ErrorPayload::new(
                ErrorCategory::Auth,
                message.to_string(),
                "Reconnect your Figma account (refresh FIGMA_TOKEN or FIGMA_OAUTH_TOKEN).",
            ),
            FigInvoiceError::NodeNotFound(id) => ErrorPayload::new(
                ErrorCategory::Figma,
                format!("Node not found in Figma file: {}", id),
                "Check the node-id in the link; copy the frame link again from Figma.",
            ),
            FigInvoiceError::TemplateNotFound(id) => ErrorPayload::new(
                ErrorCategory::Store,
                format!("Template not found: {}", id),
                "List stored templates or import the design again.",
            ),
            FigInvoiceError::Image(e) => ErrorPayload::new(
                ErrorCategory::Figma,
                e.to_string(),
                "The thumbnail could not be decoded; retry the import or skip --thumbnail.",
            ),
            FigInvoiceError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check JSON inputs; run with --verbose for details.",
            ),
            FigInvoiceError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check YAML data file syntax.",
            ),
            FigInvoiceError::Toml(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check config file syntax (TOML).",
            ),
            FigInvoiceError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("figma_token") || lower.contains("figma token") {
                    ErrorPayload::new(
                        ErrorCategory::Auth,
                        msg.to_string(),
                        "Set FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN) before importing.",
                    )
                } else if lower.contains("file key") && lower.contains("figma") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a Figma URL with a file key: https://www.figma.com/file/<FILE_KEY>/... with node-id if needed.",
                    )
                } else if lower.contains("unknown variable") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Run `figinvoice variables` to list the supported variable names.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file.",
                    )
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FigInvoiceError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Figma,
    Auth,
    Store,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_maps_to_reconnect() {
        let err = FigInvoiceError::from_figma_status(StatusCode::UNAUTHORIZED, "Invalid token");
        assert!(matches!(err, FigInvoiceError::ReconnectAccount(_)));
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Auth);
        assert!(payload
            .remediation
            .unwrap_or_default()
            .to_ascii_lowercase()
            .contains("reconnect"));
    }

    #[test]
    fn not_found_status_maps_to_node_not_found() {
        let err = FigInvoiceError::from_figma_status(StatusCode::NOT_FOUND, "Not found");
        assert!(matches!(err, FigInvoiceError::NodeNotFound(_)));
    }

    #[test]
    fn server_error_stays_generic() {
        let err = FigInvoiceError::from_figma_status(StatusCode::BAD_GATEWAY, "upstream");
        match err {
            FigInvoiceError::FigmaApi { status, message } => {
                assert_eq!(status, Some(StatusCode::BAD_GATEWAY));
                assert_eq!(message, "upstream");
            }
            other => panic!("expected generic Figma error, got {other:?}"),
        }
    }

    #[test]
    fn config_payload_includes_figma_token_remediation() {
        let err =
            FigInvoiceError::Config("FIGMA_TOKEN environment variable is required".to_string());
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Auth);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("FIGMA_TOKEN"),
            "expected FIGMA token remediation, got: {remediation}"
        );
    }

    #[test]
    fn config_payload_includes_file_key_hint() {
        let err = FigInvoiceError::Config("Figma URL missing file key".to_string());
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.to_ascii_lowercase().contains("file key"),
            "expected file key remediation, got: {remediation}"
        );
    }

    #[test]
    fn config_payload_uses_default_remediation_for_other_messages() {
        let err = FigInvoiceError::Config("Some other config issue".to_string());
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(remediation.contains("Check flags/paths"));
    }

    #[test]
    fn template_not_found_is_a_store_error() {
        let err = FigInvoiceError::TemplateNotFound("abc".into());
        assert_eq!(err.to_payload().category, ErrorCategory::Store);
    }
}
