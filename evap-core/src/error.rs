//! Error types for calls to the calculation service.

use thiserror::Error;

/// A failed call to the calculation service.
///
/// The `Display` text is what the dashboard appends to its
/// "Error calculating ..." prefix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Network unreachable, connection reset, timeout and the like
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response; `detail` is the service-provided message when there
    /// was one, otherwise a generic status line
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response from calculation service: {0}")]
    Decode(String),

    /// Client could not be constructed from the given configuration
    #[error("Invalid service configuration: {0}")]
    Config(String),
}

/// Type alias for Results using ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// Build a `Rejected` error from a non-2xx status and the raw body.
    ///
    /// The service reports failures as `{"detail": "..."}`; request
    /// validation failures carry a list of `{"msg": "..."}` objects instead,
    /// which are joined with "; ".
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ServiceError::Rejected { status, detail }
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_used() {
        let err = ServiceError::from_response(400, r#"{"detail":"invalid wind function"}"#);
        assert_eq!(
            err,
            ServiceError::Rejected {
                status: 400,
                detail: "invalid wind function".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid wind function");
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail":[
            {"loc":["body","temperature"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","humidity"],"msg":"value is not a valid float","type":"type_error.float"}
        ]}"#;
        let err = ServiceError::from_response(422, body);
        assert_eq!(err.to_string(), "field required; value is not a valid float");
    }

    #[test]
    fn test_missing_detail_falls_back_to_status() {
        assert_eq!(
            ServiceError::from_response(502, "<html>Bad Gateway</html>").to_string(),
            "Request failed with status code 502"
        );
        assert_eq!(
            ServiceError::from_response(500, r#"{"detail":""}"#).to_string(),
            "Request failed with status code 500"
        );
        assert_eq!(
            ServiceError::from_response(404, r#"{"message":"nope"}"#).to_string(),
            "Request failed with status code 404"
        );
    }
}
