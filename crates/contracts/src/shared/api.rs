//! Wire envelope of the REST API and the error taxonomy.
//!
//! Every response is wrapped as `{ "success": bool, "data": ..., "message": ..,
//! "code": .., "errors": [{ "field", "message" }] }`. The frontend unwraps the
//! envelope here, so list views only ever see typed records or an [`ApiError`].

use crate::shared::notification::ToastCategory;
use crate::shared::validation::FieldErrors;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldIssue>,
}

impl ApiEnvelope {
    /// Successful envelope without payload, for empty `204` bodies.
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            code: None,
            errors: Vec::new(),
        }
    }

    /// Fails with a classified [`ApiError`] unless `success` is set.
    pub fn into_data(self, status: u16) -> Result<Value, ApiError> {
        if !self.success {
            return Err(ApiError::from_envelope(Some(status), &self));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }

    /// Unwraps a list payload. `data` may be a bare array or an object that
    /// holds the array under `list_key` (or under `items`).
    pub fn into_list<T: DeserializeOwned>(
        self,
        status: u16,
        list_key: &str,
    ) -> Result<Vec<T>, ApiError> {
        let data = self.into_data(status)?;
        let array = match data {
            Value::Array(_) => data,
            Value::Object(mut map) => match map.remove(list_key).or_else(|| map.remove("items")) {
                Some(found @ Value::Array(_)) => found,
                _ => {
                    return Err(ApiError::parse(format!(
                        "response has no '{}' list",
                        list_key
                    )))
                }
            },
            Value::Null => Value::Array(Vec::new()),
            other => {
                return Err(ApiError::parse(format!("unexpected list payload: {}", other)));
            }
        };
        serde_json::from_value(array).map_err(|e| ApiError::parse(e.to_string()))
    }

    /// Unwraps a single record; `data` may be the record itself or an object
    /// holding it under `item_key`.
    pub fn into_item<T: DeserializeOwned>(self, status: u16, item_key: &str) -> Result<T, ApiError> {
        let data = self.into_data(status)?;
        let item = match data {
            Value::Object(mut map) => match map.remove(item_key) {
                Some(found @ Value::Object(_)) => found,
                Some(other) => {
                    map.insert(item_key.to_string(), other);
                    Value::Object(map)
                }
                None => Value::Object(map),
            },
            Value::Null => return Err(ApiError::parse("empty response".to_string())),
            other => other,
        };
        serde_json::from_value(item).map_err(|e| ApiError::parse(e.to_string()))
    }

    /// Successful acknowledgement without a payload (delete, logout).
    pub fn into_ack(self, status: u16) -> Result<(), ApiError> {
        self.into_data(status).map(|_| ())
    }
}

/// Класс ошибки, как его сообщает API (или как он выводится из HTTP статуса)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Authentication,
    AccountStatus,
    Validation,
    Permission,
    RateLimit,
    Network,
    Server,
    Unknown,
}

impl ErrorKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "authentication" | "unauthorized" | "token_expired" | "invalid_token" => {
                Some(ErrorKind::Authentication)
            }
            "account_status" | "account_inactive" | "account_locked" => {
                Some(ErrorKind::AccountStatus)
            }
            "validation" | "validation_error" => Some(ErrorKind::Validation),
            "permission" | "forbidden" => Some(ErrorKind::Permission),
            "rate_limit" | "too_many_requests" => Some(ErrorKind::RateLimit),
            "network" => Some(ErrorKind::Network),
            "server" | "internal_error" => Some(ErrorKind::Server),
            _ => None,
        }
    }

    /// A recognized error code wins over the HTTP status. No status means the
    /// request never reached the server.
    pub fn classify(status: Option<u16>, code: Option<&str>) -> Self {
        if let Some(kind) = code.and_then(ErrorKind::from_code) {
            return kind;
        }
        match status {
            None => ErrorKind::Network,
            Some(401) => ErrorKind::Authentication,
            Some(403) => ErrorKind::Permission,
            Some(423) => ErrorKind::AccountStatus,
            Some(400) | Some(422) => ErrorKind::Validation,
            Some(429) => ErrorKind::RateLimit,
            Some(500..=599) => ErrorKind::Server,
            Some(_) => ErrorKind::Unknown,
        }
    }

    /// Fallback text when the server did not send a message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Authentication => "Your session has expired. Please sign in again.",
            ErrorKind::AccountStatus => "Your account is inactive or locked.",
            ErrorKind::Validation => "Some fields are invalid.",
            ErrorKind::Permission => "You do not have permission to perform this action.",
            ErrorKind::RateLimit => "Too many requests. Please wait a moment and retry.",
            ErrorKind::Network => "The server could not be reached.",
            ErrorKind::Server => "The server failed to process the request.",
            ErrorKind::Unknown => "Unexpected error.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub field_errors: FieldErrors,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind,
            message: if message.trim().is_empty() {
                kind.default_message().to_string()
            } else {
                message
            },
            field_errors: FieldErrors::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Malformed or unexpected response body.
    pub fn parse(message: String) -> Self {
        Self::new(ErrorKind::Server, format!("Failed to parse response: {}", message))
    }

    /// Request made without a stored session token.
    pub fn not_authenticated() -> Self {
        Self::new(ErrorKind::Authentication, "Not authenticated")
    }

    pub fn from_envelope(status: Option<u16>, envelope: &ApiEnvelope) -> Self {
        let kind = ErrorKind::classify(status, envelope.code.as_deref());
        let mut error = Self::new(kind, envelope.message.clone().unwrap_or_default());
        for issue in &envelope.errors {
            error.field_errors.insert(issue.field.clone(), issue.message.clone());
        }
        error
    }

    /// Error for a non-2xx response whose body is not an envelope.
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiEnvelope>(body) {
            Ok(envelope) => Self::from_envelope(Some(status), &envelope),
            Err(_) => Self::new(ErrorKind::classify(Some(status), None), String::new()),
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Auth-related failures are reported under the auth category regardless
    /// of which resource triggered them.
    pub fn toast_category(&self, fallback: ToastCategory) -> ToastCategory {
        match self.kind {
            ErrorKind::Authentication | ErrorKind::AccountStatus => ToastCategory::Auth,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(alias = "_id")]
        id: String,
    }

    fn envelope(json: &str) -> ApiEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_classify_by_status() {
        assert_eq!(ErrorKind::classify(None, None), ErrorKind::Network);
        assert_eq!(ErrorKind::classify(Some(401), None), ErrorKind::Authentication);
        assert_eq!(ErrorKind::classify(Some(403), None), ErrorKind::Permission);
        assert_eq!(ErrorKind::classify(Some(422), None), ErrorKind::Validation);
        assert_eq!(ErrorKind::classify(Some(429), None), ErrorKind::RateLimit);
        assert_eq!(ErrorKind::classify(Some(503), None), ErrorKind::Server);
        assert_eq!(ErrorKind::classify(Some(418), None), ErrorKind::Unknown);
    }

    #[test]
    fn test_code_wins_over_status() {
        assert_eq!(
            ErrorKind::classify(Some(403), Some("ACCOUNT_INACTIVE")),
            ErrorKind::AccountStatus
        );
        assert_eq!(
            ErrorKind::classify(Some(403), Some("something_else")),
            ErrorKind::Permission
        );
    }

    #[test]
    fn test_list_accepts_bare_and_wrapped_arrays() {
        let bare: Vec<Item> = envelope(r#"{"success":true,"data":[{"id":"1"}]}"#)
            .into_list(200, "tickets")
            .unwrap();
        let wrapped: Vec<Item> =
            envelope(r#"{"success":true,"data":{"tickets":[{"_id":"2"}],"total":1}}"#)
                .into_list(200, "tickets")
                .unwrap();
        assert_eq!(bare, vec![Item { id: "1".into() }]);
        assert_eq!(wrapped, vec![Item { id: "2".into() }]);
    }

    #[test]
    fn test_item_accepts_bare_and_wrapped_objects() {
        let bare: Item = envelope(r#"{"success":true,"data":{"id":"7"}}"#)
            .into_item(200, "ticket")
            .unwrap();
        let wrapped: Item = envelope(r#"{"success":true,"data":{"ticket":{"_id":"8"}}}"#)
            .into_item(200, "ticket")
            .unwrap();
        assert_eq!(bare.id, "7");
        assert_eq!(wrapped.id, "8");
    }

    #[test]
    fn test_failed_envelope_carries_field_errors() {
        let err = envelope(
            r#"{"success":false,"message":"Invalid input","code":"validation",
                "errors":[{"field":"email","message":"Email already used"}]}"#,
        )
        .into_ack(400)
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.to_string(), "Invalid input");
        assert_eq!(err.field_errors.get("email"), Some("Email already used"));
    }

    #[test]
    fn test_acknowledged_envelope_yields_empty_list() {
        assert!(ApiEnvelope::acknowledged().into_ack(204).is_ok());
        let items: Vec<Item> = ApiEnvelope::acknowledged().into_list(200, "tickets").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_from_status_without_envelope_uses_default_message() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, ErrorKind::Server.default_message());
    }

    #[test]
    fn test_auth_errors_toast_under_auth() {
        let err = ApiError::new(ErrorKind::Authentication, "");
        assert_eq!(err.toast_category(ToastCategory::Ticket), ToastCategory::Auth);
        let err = ApiError::network("offline");
        assert_eq!(err.toast_category(ToastCategory::Ticket), ToastCategory::Ticket);
    }
}
