//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiToken, Balance, SendSms, SendSmsResponse, UnauthorizedPayload, ValidationError,
};

const BASE_ORIGIN: &str = "https://gatewayapi.com/";
const BALANCE_PATH: &str = "rest/me";
const SEND_SMS_PATH: &str = "rest/mtsms";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    json_body: Option<String>,
    timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.json_body {
                builder = builder
                    .header("Content-Type", "application/json")
                    .body(body);
            }
            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayApiClient`].
///
/// The client makes exactly one classification decision: an HTTP 401 becomes
/// [`GatewayApiError::Unauthorized`] with the provider's structured payload
/// attached. Every other failure passes through with the original status and
/// body inspectable.
pub enum GatewayApiError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code other than 401.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// HTTP 401 from GatewayAPI. The display message mirrors the payload's
    /// `message` field, e.g. to prompt for credential rotation.
    #[error("{}", .payload.message)]
    Unauthorized { payload: UnauthorizedPayload },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Default)]
/// Per-call configuration passed through to the underlying transport.
///
/// Extra headers are merged into the request, but the `Authorization` header
/// is always set by the client last and cannot be overridden here.
pub struct CallOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayApiClient`].
///
/// Use this to customize transport-level settings. The GatewayAPI base origin
/// itself is fixed and not configurable.
pub struct GatewayApiClientBuilder {
    token: ApiToken,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GatewayApiClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`GatewayApiClient`].
    pub fn build(self) -> Result<GatewayApiClient, GatewayApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayApiError::Transport(Box::new(err)))?;

        Ok(GatewayApiClient {
            authorization: crate::transport::basic_authorization(&self.token),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level GatewayAPI client.
///
/// All requests go against the fixed base origin `https://gatewayapi.com/`
/// and carry HTTP Basic authentication derived from the API token once at
/// construction time. The client is cheap to clone and safe to share across
/// tasks; concurrent calls do not interfere.
pub struct GatewayApiClient {
    authorization: String,
    http: Arc<dyn HttpTransport>,
}

impl GatewayApiClient {
    /// Create a client with default transport settings.
    ///
    /// For more customization, use [`GatewayApiClient::builder`].
    pub fn new(token: ApiToken) -> Self {
        Self {
            authorization: crate::transport::basic_authorization(&token),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom transport settings.
    pub fn builder(token: ApiToken) -> GatewayApiClientBuilder {
        GatewayApiClientBuilder::new(token)
    }

    /// Fetch the account balance and currency via `GET /rest/me`.
    pub async fn get_balance(&self) -> Result<Balance, GatewayApiError> {
        self.get_balance_with(CallOptions::default()).await
    }

    /// [`GatewayApiClient::get_balance`] with per-call options.
    pub async fn get_balance_with(
        &self,
        options: CallOptions,
    ) -> Result<Balance, GatewayApiError> {
        let body = self
            .dispatch(HttpMethod::Get, BALANCE_PATH, None, options)
            .await?;
        crate::transport::decode_balance_json_response(&body)
            .map_err(|err| GatewayApiError::Parse(Box::new(err)))
    }

    /// Send an SMS via `POST /rest/mtsms`.
    ///
    /// The request body is serialized verbatim; GatewayAPI performs all
    /// validation (MSISDN format, recipient count, sender rules). Not
    /// idempotent: calling twice sends two messages.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, GatewayApiError> {
        self.send_sms_with(request, CallOptions::default()).await
    }

    /// [`GatewayApiClient::send_sms`] with per-call options.
    pub async fn send_sms_with(
        &self,
        request: SendSms,
        options: CallOptions,
    ) -> Result<SendSmsResponse, GatewayApiError> {
        let json_body = crate::transport::encode_send_sms_json_body(&request)
            .map_err(|err| GatewayApiError::Parse(Box::new(err)))?;
        let body = self
            .dispatch(HttpMethod::Post, SEND_SMS_PATH, Some(json_body), options)
            .await?;
        crate::transport::decode_send_sms_json_response(&body)
            .map_err(|err| GatewayApiError::Parse(Box::new(err)))
    }

    /// Shared dispatch routine: resolve the URL, attach authentication, run
    /// the call, classify the failure.
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        json_body: Option<String>,
        options: CallOptions,
    ) -> Result<String, GatewayApiError> {
        let url = resolve_url(path)?;

        // Caller headers first, Authorization last so it always wins.
        let mut headers: Vec<(String, String)> = options
            .headers
            .into_iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
            .collect();
        headers.push(("Authorization".to_owned(), self.authorization.clone()));

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url,
                headers,
                json_body,
                timeout: options.timeout,
            })
            .await
            .map_err(GatewayApiError::Transport)?;

        if response.status == 401 {
            // A 401 whose body does not match the documented payload shape
            // degrades to the generic status error below.
            if let Ok(payload) =
                crate::transport::decode_unauthorized_json_response(&response.body)
            {
                return Err(GatewayApiError::Unauthorized { payload });
            }
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(GatewayApiError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn resolve_url(path: &str) -> Result<String, GatewayApiError> {
    let base = Url::parse(BASE_ORIGIN).map_err(|err| GatewayApiError::Transport(Box::new(err)))?;
    let url = base
        .join(path)
        .map_err(|err| GatewayApiError::Transport(Box::new(err)))?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{Msisdn, Recipient};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
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

        fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_request(&self) -> HttpRequest {
            self.requests().last().cloned().expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Vec<&'a str> {
        request
            .headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    fn make_client(token: &str, transport: FakeTransport) -> GatewayApiClient {
        GatewayApiClient {
            authorization: crate::transport::basic_authorization(
                &ApiToken::new(token).unwrap(),
            ),
            http: Arc::new(transport),
        }
    }

    const BALANCE_JSON: &str = r#"{"id": 1, "credit": 10.5, "currency": "EUR"}"#;
    const SEND_JSON: &str = r#"
    {
      "ids": [431332671],
      "usage": {
        "total_cost": 0.0225,
        "currency": "eur",
        "countries": { "DK": 1 }
      }
    }
    "#;

    #[tokio::test]
    async fn get_balance_hits_fixed_endpoint_with_basic_auth() {
        let transport = FakeTransport::new(200, BALANCE_JSON);
        let client = make_client("test_key", transport.clone());

        let balance = client.get_balance().await.unwrap();
        assert_eq!(
            balance,
            Balance {
                id: 1,
                credit: 10.5,
                currency: "EUR".to_owned(),
            }
        );

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://gatewayapi.com/rest/me");
        assert_eq!(request.json_body, None);
        assert_eq!(header(&request, "authorization"), ["Basic dGVzdF9rZXk6"]);
    }

    #[tokio::test]
    async fn authorization_header_is_stable_across_calls() {
        let transport = FakeTransport::new(200, BALANCE_JSON);
        let client = make_client("test_key", transport.clone());

        client.get_balance().await.unwrap();
        client.get_balance().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            header(&requests[0], "authorization"),
            header(&requests[1], "authorization")
        );
    }

    #[tokio::test]
    async fn send_sms_posts_verbatim_json_body() {
        let transport = FakeTransport::new(200, SEND_JSON);
        let client = make_client("test_key", transport.clone());

        let request = SendSms::new(
            "hello",
            vec![
                Recipient::new(4510203040u64),
                Recipient::new(Msisdn::text("46735551020")),
            ],
        );

        let response = client.send_sms(request).await.unwrap();
        assert_eq!(response.ids, vec![431332671]);
        assert_eq!(response.usage.total_cost, 0.0225);
        assert_eq!(response.usage.countries.get("DK"), Some(&1));

        let recorded = transport.last_request();
        assert_eq!(recorded.method, HttpMethod::Post);
        assert_eq!(recorded.url, "https://gatewayapi.com/rest/mtsms");

        let body: serde_json::Value =
            serde_json::from_str(recorded.json_body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "hello",
                "recipients": [
                    { "msisdn": 4510203040u64 },
                    { "msisdn": "46735551020" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn send_sms_includes_optional_fields_when_set() {
        let transport = FakeTransport::new(200, SEND_JSON);
        let client = make_client("test_key", transport.clone());

        let request = SendSms::new("hello", vec![Recipient::new(4510203040u64)])
            .sender("ExampleSMS")
            .userref("order-42");
        client.send_sms(request).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().json_body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["sender"], "ExampleSMS");
        assert_eq!(body["userref"], "order-42");
    }

    #[tokio::test]
    async fn unauthorized_response_maps_to_typed_error() {
        let json = r#"
        {
          "code": "X",
          "incident_uuid": "u1",
          "message": "bad key",
          "variables": {}
        }
        "#;
        let transport = FakeTransport::new(401, json);
        let client = make_client("bad_key", transport);

        let err = client.get_balance().await.unwrap_err();
        assert_eq!(err.to_string(), "bad key");
        match err {
            GatewayApiError::Unauthorized { payload } => {
                assert_eq!(payload.code, "X");
                assert_eq!(payload.incident_uuid, "u1");
                assert_eq!(payload.message, "bad key");
                assert_eq!(payload.variables, serde_json::json!({}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_with_undecodable_body_degrades_to_http_status() {
        let transport = FakeTransport::new(401, "gateway timeout page");
        let client = make_client("test_key", transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayApiError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn non_unauthorized_error_status_passes_through() {
        let transport = FakeTransport::new(500, r#"{"error": "exception details"}"#);
        let client = make_client("test_key", transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(!matches!(err, GatewayApiError::Unauthorized { .. }));
        match err {
            GatewayApiError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.as_deref(), Some(r#"{"error": "exception details"}"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_maps_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client("test_key", transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayApiError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn invalid_success_body_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client("test_key", transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, GatewayApiError::Parse(_)));
    }

    #[tokio::test]
    async fn caller_headers_merge_but_never_override_authorization() {
        let transport = FakeTransport::new(200, BALANCE_JSON);
        let client = make_client("test_key", transport.clone());

        let options = CallOptions {
            headers: vec![
                ("X-Custom".to_owned(), "1".to_owned()),
                ("authorization".to_owned(), "Basic forged".to_owned()),
            ],
            timeout: None,
        };
        client.get_balance_with(options).await.unwrap();

        let request = transport.last_request();
        assert_eq!(header(&request, "x-custom"), ["1"]);
        assert_eq!(header(&request, "authorization"), ["Basic dGVzdF9rZXk6"]);
    }

    #[tokio::test]
    async fn per_call_timeout_passes_through_to_transport() {
        let transport = FakeTransport::new(200, BALANCE_JSON);
        let client = make_client("test_key", transport.clone());

        let options = CallOptions {
            headers: Vec::new(),
            timeout: Some(Duration::from_secs(5)),
        };
        client.get_balance_with(options).await.unwrap();

        assert_eq!(
            transport.last_request().timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[tokio::test]
    async fn send_sms_maps_unauthorized_like_get_balance() {
        let json = r#"
        {
          "code": "0x0213",
          "incident_uuid": "u2",
          "message": "Unauthorized",
          "variables": {"key": "***"}
        }
        "#;
        let transport = FakeTransport::new(401, json);
        let client = make_client("bad_key", transport);

        let request = SendSms::new("hello", vec![Recipient::new(4510203040u64)]);
        let err = client.send_sms(request).await.unwrap_err();
        match err {
            GatewayApiError::Unauthorized { payload } => {
                assert_eq!(payload.message, "Unauthorized");
                assert_eq!(payload.variables["key"], "***");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builder_produces_client_with_derived_authorization() {
        let client = GatewayApiClient::builder(ApiToken::new("GoGoGo").unwrap())
            .timeout(Duration::from_secs(10))
            .user_agent("gatewayapi-tests")
            .build()
            .unwrap();
        assert_eq!(client.authorization, "Basic R29Hb0dvOg==");
    }

    #[test]
    fn resolve_url_joins_against_fixed_origin() {
        assert_eq!(
            resolve_url(BALANCE_PATH).unwrap(),
            "https://gatewayapi.com/rest/me"
        );
        assert_eq!(
            resolve_url(SEND_SMS_PATH).unwrap(),
            "https://gatewayapi.com/rest/mtsms"
        );
    }
}
