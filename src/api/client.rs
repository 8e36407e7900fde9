use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use yansi::Paint;

use crate::error::ProvisionError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub(crate) fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Raw outcome of one round trip. Non-JSON bodies are kept as a string.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn body_text(&self) -> String {
        match &self.body {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }
}

/// Thin wrapper over one reqwest client bound to the API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ProvisionError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("omnivm/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProvisionError::Config(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return whatever came back, success or not.
    /// Prints the request as a curl command and the raw response payload.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ProvisionError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log_output(format!("Request:\n{}", curl_line(&method, &url, token.is_some(), body)));

        let mut req = self.client.request(method, &url);
        if let Some(t) = token {
            req = req.bearer_auth(t);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        log_output(response_line(status, &body));

        Ok(ApiResponse { status, body })
    }

    /// GET a listing and decode it. Non-success statuses become `ProvisionError::Api`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<T, ProvisionError> {
        let resp = self.request(Method::GET, endpoint, token, None).await?;
        if !resp.is_success() {
            return Err(ProvisionError::Api {
                status: resp.status.as_u16(),
                body: resp.body_text(),
            });
        }
        decode(endpoint, resp.body)
    }
}

pub fn decode<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T, ProvisionError> {
    serde_json::from_value(body)
        .map_err(|e| ProvisionError::UnexpectedResponse(format!("{}: {}", endpoint, e)))
}

fn curl_line(method: &Method, url: &str, authenticated: bool, body: Option<&Value>) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    // the token itself never reaches the terminal
    if authenticated {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer ***'").fg(yansi::Color::Magenta)
        ));
    }
    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string_pretty(&redact(d)).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    parts.join(" ")
}

fn response_line(status: StatusCode, body: &Value) -> String {
    let shown = redact(body);
    let json_str = serde_json::to_string_pretty(&shown).unwrap_or_else(|_| format!("{:?}", shown));
    let response_str = if status.is_success() {
        Paint::new(json_str).rgb(100, 100, 100).to_string()
    } else {
        Paint::new(json_str).fg(yansi::Color::Red).to_string()
    };
    format!("Response (HTTP {}):\n{}", status.as_u16(), response_str)
}

/// Keys whose values are masked wherever they appear in a logged body.
const SECRET_KEYS: [&str; 2] = ["password", "token"];

fn redact(body: &Value) -> Value {
    match body {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| {
                    let shown = if SECRET_KEYS.contains(&k.as_str()) {
                        Value::String("***".into())
                    } else {
                        redact(v)
                    };
                    (k.clone(), shown)
                })
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(redact).collect()),
        other => other.clone(),
    }
}
