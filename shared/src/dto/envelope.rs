use serde::{Deserialize, Serialize};

/// Response envelope used by every `/api/v1` endpoint.
///
/// Success bodies carry `data`; failure bodies carry `message` (some older
/// handlers still send `error`, accepted as an alias).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, or the backend's message when the call failed.
    ///
    /// A `success: true` body without `data` is treated as a failure too.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}

/// Bare error body, for endpoints that reply with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_yields_data() {
        let json = r#"{"success":true,"data":{"count":2}}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap()["count"], 2);
    }

    #[test]
    fn test_failure_envelope_yields_message() {
        let json = r#"{"success":false,"message":"Pair not supported"}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Pair not supported");
    }

    #[test]
    fn test_error_alias_is_accepted() {
        let json = r#"{"success":false,"error":"Invalid PIN"}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.message.as_deref(), Some("Invalid PIN"));

        let bare: ErrorResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(bare.message, "nope");
    }

    #[test]
    fn test_success_without_data_is_failure() {
        let json = r#"{"success":true}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Request failed");
    }
}
