use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the BPDB API (`phoneNumber`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used by the BPDB API (`phoneNumber`).
    pub const FIELD: &'static str = "phoneNumber";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the API.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        // Preserve E.164 normalization semantics for opt-in `PhoneNumber`.
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON field name used by the BPDB API (`phoneNumber`).
    pub const FIELD: &'static str = "phoneNumber";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix; BPDB subscriber numbers are Bangladeshi, so
    /// `country::Id::BD` is the usual choice.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password submitted during login (`otp`).
///
/// Invariant: non-empty after trimming. The provider decides length and
/// expiry; this type does not second-guess either.
pub struct Otp(String);

impl Otp {
    /// JSON field name used by the BPDB API (`otp`).
    pub const FIELD: &'static str = "otp";

    /// Create a validated [`Otp`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated OTP.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// BPDB customer account number (`customerNumber`).
///
/// Invariant: non-empty after trimming.
pub struct CustomerNumber(String);

impl CustomerNumber {
    /// JSON field name used by the BPDB API (`customerNumber`).
    pub const FIELD: &'static str = "customerNumber";

    /// Create a validated [`CustomerNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated customer number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Prepaid meter number (`meterNumber`).
///
/// Invariant: non-empty after trimming.
pub struct MeterNumber(String);

impl MeterNumber {
    /// JSON field name used by the BPDB API (`meterNumber`).
    pub const FIELD: &'static str = "meterNumber";

    /// Create a validated [`MeterNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated meter number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Opaque session token issued by a successful login (`token`).
///
/// Invariant: non-empty after trimming. Sent back as a bearer credential on
/// authenticated calls.
pub struct SessionToken(String);

impl SessionToken {
    /// JSON field name used by the BPDB API (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`SessionToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let otp = Otp::new(" 123456 ").unwrap();
        assert_eq!(otp.as_str(), "123456");
        assert!(Otp::new("  ").is_err());

        let customer = CustomerNumber::new(" 61001234 ").unwrap();
        assert_eq!(customer.as_str(), "61001234");
        assert!(CustomerNumber::new("").is_err());

        let meter = MeterNumber::new(" 0101234567 ").unwrap();
        assert_eq!(meter.as_str(), "0101234567");
        assert!(MeterNumber::new("  ").is_err());

        let token = SessionToken::new(" eyJhbGciOi ").unwrap();
        assert_eq!(token.as_str(), "eyJhbGciOi");
        assert!(SessionToken::new("  ").is_err());
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" 01812345678 ").unwrap();
        assert_eq!(raw.raw(), "01812345678");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+8801812345678").unwrap();
        let p2 = PhoneNumber::parse(None, "+880 18 1234-5678").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+8801812345678");
        assert_eq!(p1.raw(), "+8801812345678");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+8801812345678");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_uses_default_region_for_local_form() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::BD), "01812345678").unwrap();
        assert_eq!(pn.e164(), "+8801812345678");
        assert_eq!(pn.raw(), "01812345678");
    }
}
