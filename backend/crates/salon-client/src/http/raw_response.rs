use reqwest::StatusCode;
use serde_json::Value;

/// Status and decoded body of a response, before any shaping
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    /// `None` when the body was empty or not JSON
    pub body: Option<Value>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Server-provided `message`, or `Error {status}` when there is none
    pub fn error_message(&self) -> String {
        self.body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("Error {}", self.status.as_u16()))
    }

    /// Non-empty string field of the body
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get(name))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
