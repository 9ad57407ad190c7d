//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ConsumerProfile, CustomerNumber, MeterNumber, Otp, RawPhoneNumber, RechargeEntry, SessionToken,
    ValidationError,
};

/// Default BPDB smart-meter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://smartmeter.bpdb.gov.bd/api/v1";

const SEND_OTP_PATH: &str = "auth/send-otp";
const LOGIN_PATH: &str = "auth/login";
const RECHARGE_INFO_PATH: &str = "recharge-history";
const CONSUMER_INFO_PATH: &str = "consumer-info";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url).json(&body);
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MeterClient`].
///
/// This error preserves:
/// - missing-credential failures (authenticated call before `login`),
/// - HTTP-level failures (non-2xx status or transport failures),
/// - parse failures (response shape does not match the expected schema).
pub enum MeterError {
    /// An authenticated operation was called before a successful `login`.
    #[error("authentication required: call login first")]
    AuthenticationRequired,

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),
}

#[derive(Debug, Clone)]
struct Endpoints {
    send_otp: String,
    login: String,
    recharge_info: String,
    consumer_info: String,
}

impl Endpoints {
    fn from_base(base_url: &str) -> Result<Self, MeterError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let mut base = base_url.trim_end_matches('/').to_owned();
        base.push('/');
        let base = Url::parse(&base).map_err(MeterError::InvalidBaseUrl)?;

        let join = |path: &str| -> Result<String, MeterError> {
            Ok(base
                .join(path)
                .map_err(MeterError::InvalidBaseUrl)?
                .into())
        };

        Ok(Self {
            send_otp: join(SEND_OTP_PATH)?,
            login: join(LOGIN_PATH)?,
            recharge_info: join(RECHARGE_INFO_PATH)?,
            consumer_info: join(CONSUMER_INFO_PATH)?,
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`MeterClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// seed a previously stored session token.
pub struct MeterClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    session: Option<SessionToken>,
}

impl MeterClientBuilder {
    /// Create a builder with the default base URL and no overrides.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            session: None,
        }
    }

    /// Override the API base URL (endpoint paths are joined onto it).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Seed the client with a session token obtained from an earlier login,
    /// e.g. one restored from an external store.
    pub fn session_token(mut self, token: SessionToken) -> Self {
        self.session = Some(token);
        self
    }

    /// Build a [`MeterClient`].
    pub fn build(self) -> Result<MeterClient, MeterError> {
        let endpoints = Endpoints::from_base(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MeterError::Transport(Box::new(err)))?;

        Ok(MeterClient {
            endpoints,
            session: self.session,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for MeterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level BPDB smart-meter client.
///
/// This type orchestrates request validation, JSON encoding, and response
/// parsing for the four provider operations. The session token issued by
/// [`MeterClient::login`] is held in memory for the lifetime of this instance
/// and attached as a bearer credential to the authenticated calls.
pub struct MeterClient {
    endpoints: Endpoints,
    session: Option<SessionToken>,
    http: Arc<dyn HttpTransport>,
}

impl MeterClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`MeterClient::builder`].
    pub fn new() -> Result<Self, MeterError> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> MeterClientBuilder {
        MeterClientBuilder::new()
    }

    /// The session token currently held by this client, if any.
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    /// Ask the provider to dispatch an OTP to `phone_number`.
    ///
    /// The phone number is passed through as given; the provider owns the
    /// format rules. On success the optional provider message is returned.
    ///
    /// Errors:
    /// - [`MeterError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`MeterError::Transport`] for network failures,
    /// - [`MeterError::Parse`] when the body is not valid JSON.
    pub async fn send_otp(
        &self,
        phone_number: &RawPhoneNumber,
    ) -> Result<Option<String>, MeterError> {
        let body = crate::transport::encode_send_otp_body(phone_number);
        let response = self.post(&self.endpoints.send_otp, None, body).await?;

        crate::transport::decode_send_otp_json_response(&response.body)
            .map_err(|err| MeterError::Parse(Box::new(err)))
    }

    /// Exchange a phone number and OTP for a session token.
    ///
    /// On success the token is stored on this instance for subsequent calls
    /// and also returned for external persistence. When the response lacks a
    /// token field the call fails with [`MeterError::Parse`] and no credential
    /// is stored.
    pub async fn login(
        &mut self,
        phone_number: &RawPhoneNumber,
        otp: &Otp,
    ) -> Result<SessionToken, MeterError> {
        let body = crate::transport::encode_login_body(phone_number, otp);
        let response = self.post(&self.endpoints.login, None, body).await?;

        let token = crate::transport::decode_login_json_response(&response.body)
            .map_err(|err| MeterError::Parse(Box::new(err)))?;

        self.session = Some(token.clone());
        Ok(token)
    }

    /// Fetch the prepaid recharge history for a customer/meter pair.
    ///
    /// Requires a prior successful [`MeterClient::login`] on this instance
    /// (or a seeded token); fails with [`MeterError::AuthenticationRequired`]
    /// before performing any request otherwise. Entries are returned in
    /// provider order; an empty history is `Ok(vec![])`, not an error.
    pub async fn recharge_info(
        &self,
        customer_number: &CustomerNumber,
        meter_number: &MeterNumber,
    ) -> Result<Vec<RechargeEntry>, MeterError> {
        let token = self
            .session
            .as_ref()
            .ok_or(MeterError::AuthenticationRequired)?;

        let body = crate::transport::encode_recharge_info_body(customer_number, meter_number);
        let response = self
            .post(&self.endpoints.recharge_info, Some(token.as_str()), body)
            .await?;

        crate::transport::decode_recharge_info_json_response(&response.body)
            .map_err(|err| MeterError::Parse(Box::new(err)))
    }

    /// Fetch the consumer profile for the logged-in account.
    ///
    /// Requires a prior successful [`MeterClient::login`] on this instance
    /// (or a seeded token). `Ok(None)` means the provider has no record for
    /// this account.
    pub async fn consumer_info(&self) -> Result<Option<ConsumerProfile>, MeterError> {
        let token = self
            .session
            .as_ref()
            .ok_or(MeterError::AuthenticationRequired)?;

        let response = self
            .http
            .get(&self.endpoints.consumer_info, Some(token.as_str()))
            .await
            .map_err(MeterError::Transport)?;
        let response = check_status(response)?;

        crate::transport::decode_consumer_info_json_response(&response.body)
            .map_err(|err| MeterError::Parse(Box::new(err)))
    }

    async fn post(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: serde_json::Value,
    ) -> Result<HttpResponse, MeterError> {
        let response = self
            .http
            .post_json(url, bearer, body)
            .await
            .map_err(MeterError::Transport)?;
        check_status(response)
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, MeterError> {
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(MeterError::HttpStatus {
            status: response.status,
            body,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct RecordedRequest {
        method: &'static str,
        url: String,
        bearer: Option<String>,
        body: Option<serde_json::Value>,
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            bearer: Option<&'a str>,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(RecordedRequest {
                        method: "POST",
                        url: url.to_owned(),
                        bearer: bearer.map(str::to_owned),
                        body: Some(body),
                    });
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            bearer: Option<&'a str>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(RecordedRequest {
                        method: "GET",
                        url: url.to_owned(),
                        bearer: bearer.map(str::to_owned),
                        body: None,
                    });
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    fn make_client(session: Option<SessionToken>, transport: FakeTransport) -> MeterClient {
        MeterClient {
            endpoints: Endpoints::from_base("https://example.invalid/api/v1").unwrap(),
            session,
            http: Arc::new(transport),
        }
    }

    fn phone() -> RawPhoneNumber {
        RawPhoneNumber::new("01812345678").unwrap()
    }

    #[test]
    fn endpoints_join_onto_base_url() {
        let endpoints = Endpoints::from_base("https://example.invalid/api/v1").unwrap();
        assert_eq!(
            endpoints.send_otp,
            "https://example.invalid/api/v1/auth/send-otp"
        );
        assert_eq!(endpoints.login, "https://example.invalid/api/v1/auth/login");
        assert_eq!(
            endpoints.recharge_info,
            "https://example.invalid/api/v1/recharge-history"
        );
        assert_eq!(
            endpoints.consumer_info,
            "https://example.invalid/api/v1/consumer-info"
        );

        // Trailing slash on the base must not double up.
        let endpoints = Endpoints::from_base("https://example.invalid/api/v1/").unwrap();
        assert_eq!(endpoints.login, "https://example.invalid/api/v1/auth/login");

        assert!(matches!(
            Endpoints::from_base("not a url"),
            Err(MeterError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn send_otp_issues_exactly_one_request() {
        let transport = FakeTransport::new(200, r#"{"message": "OTP sent"}"#);
        let client = make_client(None, transport.clone());

        let message = client.send_otp(&phone()).await.unwrap();
        assert_eq!(message.as_deref(), Some("OTP sent"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].url,
            "https://example.invalid/api/v1/auth/send-otp"
        );
        assert_eq!(requests[0].bearer, None);
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({ "phoneNumber": "01812345678" }))
        );
    }

    #[tokio::test]
    async fn send_otp_maps_non_success_http_status() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(None, transport);

        let err = client.send_otp(&phone()).await.unwrap_err();
        assert!(matches!(
            err,
            MeterError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn send_otp_maps_empty_http_body_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(None, transport);

        let err = client.send_otp(&phone()).await.unwrap_err();
        assert!(matches!(
            err,
            MeterError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn login_stores_token_and_returns_it() {
        let transport = FakeTransport::new(200, r#"{"token": "abc123"}"#);
        let mut client = make_client(None, transport.clone());

        let otp = Otp::new("123456").unwrap();
        let token = client.login(&phone(), &otp).await.unwrap();
        assert_eq!(token.as_str(), "abc123");
        assert_eq!(client.session_token().map(SessionToken::as_str), Some("abc123"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://example.invalid/api/v1/auth/login");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "phoneNumber": "01812345678",
                "otp": "123456",
            }))
        );
    }

    #[tokio::test]
    async fn login_without_token_field_is_parse_error_and_stores_nothing() {
        let transport = FakeTransport::new(200, r#"{"message": "welcome"}"#);
        let mut client = make_client(None, transport);

        let otp = Otp::new("123456").unwrap();
        let err = client.login(&phone(), &otp).await.unwrap_err();
        assert!(matches!(err, MeterError::Parse(_)));
        assert!(client.session_token().is_none());
    }

    #[tokio::test]
    async fn login_with_invalid_json_is_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let mut client = make_client(None, transport);

        let otp = Otp::new("123456").unwrap();
        let err = client.login(&phone(), &otp).await.unwrap_err();
        assert!(matches!(err, MeterError::Parse(_)));
        assert!(client.session_token().is_none());
    }

    #[tokio::test]
    async fn recharge_info_requires_login_and_performs_no_request() {
        let transport = FakeTransport::new(200, r#"{"data": []}"#);
        let client = make_client(None, transport.clone());

        let customer = CustomerNumber::new("61001234").unwrap();
        let meter = MeterNumber::new("0101234567").unwrap();
        let err = client.recharge_info(&customer, &meter).await.unwrap_err();
        assert!(matches!(err, MeterError::AuthenticationRequired));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn recharge_info_sends_bearer_token_and_parses_entries() {
        let json = r#"
        {
          "data": [
            {
              "date": "2024-01-01",
              "gross_amount": 500.00,
              "energy_cost": 420.00,
              "tokens": ["1111-2222"]
            }
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let token = SessionToken::new("abc123").unwrap();
        let client = make_client(Some(token), transport.clone());

        let customer = CustomerNumber::new("61001234").unwrap();
        let meter = MeterNumber::new("0101234567").unwrap();
        let entries = client.recharge_info(&customer, &meter).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2024-01-01");
        assert_eq!(entries[0].gross_amount, "500.00");
        assert_eq!(entries[0].energy_cost, "420.00");
        assert_eq!(entries[0].tokens, ["1111-2222"]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://example.invalid/api/v1/recharge-history"
        );
        assert_eq!(requests[0].bearer.as_deref(), Some("abc123"));
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "customerNumber": "61001234",
                "meterNumber": "0101234567",
            }))
        );
    }

    #[tokio::test]
    async fn recharge_info_empty_history_is_ok_not_error() {
        let transport = FakeTransport::new(200, r#"{"data": []}"#);
        let token = SessionToken::new("abc123").unwrap();
        let client = make_client(Some(token), transport);

        let customer = CustomerNumber::new("61001234").unwrap();
        let meter = MeterNumber::new("0101234567").unwrap();
        let entries = client.recharge_info(&customer, &meter).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn consumer_info_requires_login_and_performs_no_request() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(None, transport.clone());

        let err = client.consumer_info().await.unwrap_err();
        assert!(matches!(err, MeterError::AuthenticationRequired));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn consumer_info_uses_get_with_bearer_and_parses_profile() {
        let json = r#"
        {
          "data": {
            "division": "Dhaka South",
            "meterType": "Prepaid",
            "accountType": "Residential",
            "sndDivision": "SND-3",
            "sanctionLoad": "5kW",
            "customerName": "Jane Doe",
            "customerAddress": "123 Main Rd",
            "tariffCategory": "Domestic"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let token = SessionToken::new("abc123").unwrap();
        let client = make_client(Some(token), transport.clone());

        let profile = client.consumer_info().await.unwrap().unwrap();
        assert_eq!(profile.customer_name, "Jane Doe");
        assert_eq!(profile.tariff_category, "Domestic");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].url,
            "https://example.invalid/api/v1/consumer-info"
        );
        assert_eq!(requests[0].bearer.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn consumer_info_maps_null_data_to_none() {
        let transport = FakeTransport::new(200, r#"{"data": null}"#);
        let token = SessionToken::new("abc123").unwrap();
        let client = make_client(Some(token), transport);

        assert!(client.consumer_info().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn consumer_info_maps_non_success_http_status() {
        let transport = FakeTransport::new(401, r#"{"message": "expired"}"#);
        let token = SessionToken::new("stale").unwrap();
        let client = make_client(Some(token), transport);

        let err = client.consumer_info().await.unwrap_err();
        assert!(matches!(
            err,
            MeterError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));
    }

    #[test]
    fn builder_applies_base_url_and_session_token() {
        let token = SessionToken::new("abc123").unwrap();
        let client = MeterClient::builder()
            .base_url("https://example.invalid/api/v1")
            .session_token(token)
            .build()
            .unwrap();
        assert_eq!(
            client.endpoints.login,
            "https://example.invalid/api/v1/auth/login"
        );
        assert_eq!(client.session_token().map(SessionToken::as_str), Some("abc123"));

        assert!(matches!(
            MeterClient::builder().base_url("not a url").build(),
            Err(MeterError::InvalidBaseUrl(_))
        ));
    }
}
