use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value as JsonValue;
use url::Url;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::query::{Operation, TableRequest};

/// Executor for [`TableRequest`]s.
///
/// The production implementation talks to PostgREST; tests substitute
/// an in-memory implementation so gateway behavior can be asserted
/// without a live Supabase instance.
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Execute one table operation and return the raw JSON payload
    /// (a single object when `request.single`, an array otherwise).
    async fn execute(&self, request: TableRequest) -> BridgeResult<JsonValue>;
}

/// PostgREST backend over reqwest.
///
/// Sends `apikey` and `Authorization: Bearer` on every request, the
/// way supabase-js does with the anon key.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    base_url: Url,
    schema: String,
}

impl RestBackend {
    /// Create a backend from a bridge configuration.
    pub fn new(config: &BridgeConfig) -> BridgeResult<Self> {
        let base_url = Url::parse(&config.supabase_url)
            .map_err(|e| BridgeError::config(format!("Invalid Supabase URL: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "apikey",
            HeaderValue::from_str(&config.anon_key)
                .map_err(|e| BridgeError::config(format!("Invalid anon key header: {e}")))?,
        );
        default_headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
                .map_err(|e| BridgeError::config(format!("Invalid auth header: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            schema: config.schema.clone(),
        })
    }

    /// The project URL this backend talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl TableBackend for RestBackend {
    async fn execute(&self, request: TableRequest) -> BridgeResult<JsonValue> {
        let url = request.url(self.base_url.as_str());
        let method = request.operation.method();

        tracing::debug!(method = %method, url = %url, "Executing PostgREST request");

        let mut headers = request.headers();
        apply_schema_header(&mut headers, &self.schema, request.operation);

        let mut http_request = self.http.request(method, &url).headers(headers);
        if let Some(ref body) = request.body {
            http_request = http_request.json(body);
        }

        let response = http_request.send().await?;
        let status = response.status().as_u16();
        let body_text = response.text().await?;

        if status >= 400 {
            return Err(parse_error_body(status, &body_text));
        }

        if body_text.is_empty() {
            return Ok(JsonValue::Null);
        }

        serde_json::from_str(&body_text)
            .map_err(|e| BridgeError::serialization(format!("Failed to parse response: {e}")))
    }
}

/// Non-default schemas ride on PostgREST profile headers:
/// `Accept-Profile` for reads, `Content-Profile` for writes.
fn apply_schema_header(headers: &mut HeaderMap, schema: &str, operation: Operation) {
    if schema == "public" {
        return;
    }
    let name = match operation {
        Operation::Select => "Accept-Profile",
        Operation::Insert | Operation::Update | Operation::Upsert => "Content-Profile",
    };
    if let Ok(value) = HeaderValue::from_str(schema) {
        headers.insert(name, value);
    }
}

/// Parse a PostgREST error body:
/// `{ "message": "...", "code": "...", "details": "...", "hint": "..." }`
fn parse_error_body(status: u16, body: &str) -> BridgeError {
    if let Ok(error_obj) = serde_json::from_str::<JsonValue>(body) {
        let message = error_obj
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        let code = error_obj
            .get("code")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        BridgeError::postgrest(status, message, code)
    } else {
        BridgeError::postgrest(status, body.to_string(), None)
    }
}
