use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    constants::{ACCEPT, API_BASE_URL, CHECK_REWARD_PATH, CLAIM_REWARD_PATH, ORIGIN, REFERER},
    errors::RequestError,
    http::{send_http_request, RequestParams},
};

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub available: bool,
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ClaimResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub daily_claimed: bool,
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

/// The API is loose with flag types, so `null`, `0`, `""` and friends all read as `false`.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Renders an amount the way the API sent it, strings unquoted.
pub fn display_value(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(v) => v.to_string(),
    }
}

#[allow(async_fn_in_trait)]
pub trait RewardApi {
    async fn check(&self, token: &str) -> Result<CheckResponse, RequestError>;

    async fn claim(&self, token: &str) -> Result<ClaimResponse, RequestError>;
}

pub struct HumanityApi {
    client: Client,
    base_url: String,
}

impl HumanityApi {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, API_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn post<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, RequestError> {
        let url = format!("{}{path}", self.base_url);
        let headers = get_headers(token)?;

        // Both endpoints take an empty JSON object.
        let request_params = RequestParams {
            url: &url,
            method: Method::POST,
            body: Some(serde_json::json!({})),
        };

        let text = send_http_request(&self.client, &request_params, Some(&headers)).await?;

        parse_body(&text)
    }
}

impl RewardApi for HumanityApi {
    async fn check(&self, token: &str) -> Result<CheckResponse, RequestError> {
        self.post(CHECK_REWARD_PATH, token).await
    }

    async fn claim(&self, token: &str) -> Result<ClaimResponse, RequestError> {
        self.post(CLAIM_REWARD_PATH, token).await
    }
}

fn parse_body<T: DeserializeOwned + Default>(text: &str) -> Result<T, RequestError> {
    if text.trim().is_empty() {
        return Ok(T::default());
    }

    match serde_json::from_str::<Value>(text)? {
        Value::Null => Ok(T::default()),
        value => Ok(serde_json::from_value(value)?),
    }
}

fn get_headers(token: &str) -> Result<HeaderMap, RequestError> {
    let mut headers = HeaderMap::new();

    headers.insert(
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}"))?,
    );
    headers.insert(HeaderName::from_static("token"), HeaderValue::from_str(token)?);
    headers.insert(
        HeaderName::from_static("accept"),
        HeaderValue::from_static(ACCEPT),
    );
    headers.insert(
        HeaderName::from_static("origin"),
        HeaderValue::from_static(ORIGIN),
    );
    headers.insert(
        HeaderName::from_static("referer"),
        HeaderValue::from_static(REFERER),
    );

    Ok(headers)
}
