use reqwest::{
    Client, Response, StatusCode,
    header::{
        ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue,
    },
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use credit_purchase_application::{
    error::{AppError, AppResult},
    infrastructure_config::BackendConfig,
    ports::outgoing::remote_procedure::RemoteProcedurePort,
};

const RPC_PATH: &str = "rest/v1/rpc";
const API_KEY_HEADER: &str = "apikey";
const CONTENT_PROFILE_HEADER: &str = "content-profile";

/// Error envelope returned by PostgREST when a database function raises.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

#[derive(Clone)]
pub struct PostgrestRpcAdapter {
    client: Client,
    rpc_base_url: String,
    headers: HeaderMap,
}

impl PostgrestRpcAdapter {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError {
                message: format!("Failed to build backend HTTP client: {e}"),
            })?;

        let headers = request_headers(config)?;

        info!(
            backend_url = %config.redacted_url(),
            schema = %config.schema,
            timeout_secs = config.request_timeout_secs,
            "PostgREST RPC client initialized"
        );

        Ok(Self {
            client,
            rpc_base_url: format!("{}/{}", config.url.trim_end_matches('/'), RPC_PATH),
            headers,
        })
    }

    fn endpoint(&self, procedure: &str) -> String {
        format!("{}/{}", self.rpc_base_url, procedure)
    }
}

fn request_headers(config: &BackendConfig) -> AppResult<HeaderMap> {
    let key = config.anon_key();
    let invalid_key = |_: InvalidHeaderValue| AppError::ConfigError {
        message: "backend anon_key contains characters not allowed in a header".to_string(),
    };

    let mut api_key = HeaderValue::from_str(key).map_err(invalid_key)?;
    api_key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid_key)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    // PostgREST resolves functions in `public` unless told otherwise.
    if !config.uses_default_schema() {
        let profile = HeaderValue::from_str(&config.schema).map_err(|_| AppError::ConfigError {
            message: format!("backend schema '{}' is not a valid header value", config.schema),
        })?;
        headers.insert(CONTENT_PROFILE_HEADER, profile);
    }

    Ok(headers)
}

#[async_trait::async_trait]
impl RemoteProcedurePort for PostgrestRpcAdapter {
    #[instrument(skip(self, params))]
    async fn call(&self, procedure: &str, params: Value) -> AppResult<Value> {
        let response = self
            .client
            .post(self.endpoint(procedure))
            .headers(self.headers.clone())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "RPC transport failure");
                AppError::RemoteOperationFailed {
                    message: e.to_string(),
                }
            })?;

        read_rpc_response(response).await
    }
}

async fn read_rpc_response(response: Response) -> AppResult<Value> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::RemoteOperationFailed {
            message: e.to_string(),
        })?;

    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&body).map_err(|e| AppError::RemoteOperationFailed {
            message: format!("Invalid JSON in RPC response: {e}"),
        });
    }

    let message = error_message(status, &body);
    debug!(status = %status, message = %message, "RPC returned an error");
    Err(AppError::RemoteOperationFailed { message })
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<PostgrestErrorBody>(body) {
        debug!(
            code = ?envelope.code,
            details = ?envelope.details,
            hint = ?envelope.hint,
            "PostgREST error envelope"
        );
        if let Some(message) = envelope.message {
            return message;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| status.to_string(), ToString::to_string)
    } else {
        text.to_string()
    }
}
