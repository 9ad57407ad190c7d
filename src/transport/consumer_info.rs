use serde::Deserialize;

use crate::domain::ConsumerProfile;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct ConsumerInfoJsonResponse {
    #[serde(default)]
    data: Option<ConsumerJsonProfile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConsumerJsonProfile {
    division: String,
    meter_type: String,
    account_type: String,
    snd_division: String,
    sanction_load: String,
    customer_name: String,
    customer_address: String,
    tariff_category: String,
}

/// Decode the `consumer-info` response.
///
/// A null/absent `data` object means the provider has no record for the
/// logged-in account and maps to `None`.
pub fn decode_consumer_info_json_response(
    json: &str,
) -> Result<Option<ConsumerProfile>, TransportError> {
    let parsed: ConsumerInfoJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.data.map(|profile| ConsumerProfile {
        division: profile.division,
        meter_type: profile.meter_type,
        account_type: profile.account_type,
        snd_division: profile.snd_division,
        sanction_load: profile.sanction_load,
        customer_name: profile.customer_name,
        customer_address: profile.customer_address,
        tariff_category: profile.tariff_category,
    }))
}
