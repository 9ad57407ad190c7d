use serde::Deserialize;
use serde_json::json;

use crate::domain::RawPhoneNumber;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendOtpJsonResponse {
    #[serde(default)]
    message: Option<String>,
}

pub fn encode_send_otp_body(phone_number: &RawPhoneNumber) -> serde_json::Value {
    json!({ RawPhoneNumber::FIELD: phone_number.raw() })
}

/// Decode the `auth/send-otp` response.
///
/// The payload carries nothing of interest beyond an optional human-readable
/// message; success is conveyed by the HTTP status.
pub fn decode_send_otp_json_response(json: &str) -> Result<Option<String>, TransportError> {
    let parsed: SendOtpJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.message)
}
