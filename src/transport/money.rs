use serde::Deserialize;
use serde::de::Error as DeError;

/// Money-like value returned by the BPDB API as either JSON string or number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`500.00` remains `"500.00"` instead of becoming `"500.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportMoney {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected money field to be JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        amount: TransportMoney,
    }

    #[test]
    fn preserves_number_token_verbatim() {
        let holder: Holder = serde_json::from_str(r#"{"amount": 500.00}"#).unwrap();
        assert_eq!(holder.amount.into_string(), "500.00");
    }

    #[test]
    fn accepts_string_amounts() {
        let holder: Holder = serde_json::from_str(r#"{"amount": "420.69"}"#).unwrap();
        assert_eq!(holder.amount.into_string(), "420.69");
    }

    #[test]
    fn rejects_non_money_tokens() {
        assert!(serde_json::from_str::<Holder>(r#"{"amount": true}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"amount": [1]}"#).is_err());
    }
}
