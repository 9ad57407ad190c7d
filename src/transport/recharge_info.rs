use serde::Deserialize;
use serde_json::json;

use super::money::TransportMoney;
use crate::domain::{CustomerNumber, MeterNumber, RechargeEntry};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct RechargeInfoJsonResponse {
    #[serde(default)]
    data: Vec<RechargeJsonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct RechargeJsonEntry {
    date: String,
    gross_amount: TransportMoney,
    energy_cost: TransportMoney,
    #[serde(default)]
    tokens: Vec<String>,
}

pub fn encode_recharge_info_body(
    customer_number: &CustomerNumber,
    meter_number: &MeterNumber,
) -> serde_json::Value {
    json!({
        CustomerNumber::FIELD: customer_number.as_str(),
        MeterNumber::FIELD: meter_number.as_str(),
    })
}

/// Decode the `recharge-history` response, preserving provider order.
///
/// An absent or empty `data` list is a valid "no history" result, not an error.
pub fn decode_recharge_info_json_response(json: &str) -> Result<Vec<RechargeEntry>, TransportError> {
    let parsed: RechargeInfoJsonResponse = serde_json::from_str(json)?;
    Ok(parsed
        .data
        .into_iter()
        .map(|entry| RechargeEntry {
            date: entry.date,
            gross_amount: entry.gross_amount.into_string(),
            energy_cost: entry.energy_cost.into_string(),
            tokens: entry.tokens,
        })
        .collect())
}
