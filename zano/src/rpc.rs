//! JSON-RPC 2.0 plumbing.  [`Transport`] is the seam the rest of the
//! crate talks to; [`HttpTransport`] is the real thing, a plain
//! `reqwest` POST per call with no retries.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::log;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    Endpoint { endpoint: String, reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("rpc decode error: {0}")]
    Decode(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("rpc response carries no result")]
    MissingResult,
}

impl RpcError {
    /// Application-level message, if the node answered with an `error` object.
    pub fn rpc_message(&self) -> Option<&str> {
        match self {
            RpcError::Rpc { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// One JSON-RPC endpoint.  Returns the `result` member of the response
/// untouched; shape checks belong to the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// Build the request envelope.  The id is always 0: calls are strictly
/// sequential, nothing is correlated by id.
pub fn envelope(method: &str, params: Value) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 0,
        "method": method,
        "params": params,
    })
}

/// Pull `result` out of a decoded response body, or turn its `error`
/// member into [`RpcError::Rpc`].
pub fn unwrap_response(mut body: Value) -> Result<Value, RpcError> {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        let code = err.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = match err.get("message").and_then(Value::as_str) {
            Some(m) => m.to_string(),
            None => err.to_string(),
        };
        return Err(RpcError::Rpc { code, message });
    }
    match body.get_mut("result").map(Value::take) {
        Some(Value::Null) | None => Err(RpcError::MissingResult),
        Some(result) => Ok(result),
    }
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: Url,
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, RpcError> {
        Ok(Self {
            url: parse_endpoint(endpoint)?,
            http: HttpClient::new(),
        })
    }

    /// Same as [`HttpTransport::new`] but every request gives up after
    /// `timeout`.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, RpcError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            url: parse_endpoint(endpoint)?,
            http,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn post(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let res = self
            .http
            .post(self.url.as_str())
            .json(&envelope(method, params))
            .send()
            .await?;
        let status = res.status();
        let bytes = res.bytes().await?;

        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) if status.is_success() => {
                let mut sample = String::from_utf8_lossy(&bytes).to_string();
                if sample.len() > 256 {
                    sample.truncate(256);
                }
                return Err(RpcError::Decode(format!("{e}; body: {sample}")));
            }
            Err(_) => {
                return Err(RpcError::Status {
                    status: status.as_u16(),
                    endpoint: self.url.to_string(),
                })
            }
        };

        if status.is_success() {
            return unwrap_response(body);
        }
        // Only a JSON-RPC error outranks a failure status; a `result` does not.
        match unwrap_response(body) {
            Err(e @ RpcError::Rpc { .. }) => Err(e),
            _ => Err(RpcError::Status {
                status: status.as_u16(),
                endpoint: self.url.to_string(),
            }),
        }
    }
}

impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let out = self.post(method, params).await;
        if let Err(e) = &out {
            log!("[rpc] {} @ {} failed: {}", method, self.url, e);
        }
        out
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, RpcError> {
    let url = Url::parse(endpoint).map_err(|e| RpcError::Endpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RpcError::Endpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}
