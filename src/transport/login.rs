use serde::Deserialize;
use serde_json::json;

use crate::domain::{Otp, RawPhoneNumber, SessionToken};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("login response did not contain a session token")]
    MissingSessionToken,
}

#[derive(Debug, Clone, Deserialize)]
struct LoginJsonResponse {
    #[serde(default)]
    token: Option<String>,
}

pub fn encode_login_body(phone_number: &RawPhoneNumber, otp: &Otp) -> serde_json::Value {
    json!({
        RawPhoneNumber::FIELD: phone_number.raw(),
        Otp::FIELD: otp.as_str(),
    })
}

/// Decode the `auth/login` response into a session token.
///
/// A response without a non-empty `token` field is malformed: the caller must
/// not end up holding a credential in that case.
pub fn decode_login_json_response(json: &str) -> Result<SessionToken, TransportError> {
    let parsed: LoginJsonResponse = serde_json::from_str(json)?;
    let token = parsed.token.ok_or(TransportError::MissingSessionToken)?;
    SessionToken::new(token).map_err(|_| TransportError::MissingSessionToken)
}
