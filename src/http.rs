use reqwest::{header::HeaderMap, Client, Method};
use serde::Serialize;

use crate::errors::RequestError;

#[derive(Clone)]
pub struct RequestParams<'a, S: Serialize> {
    pub url: &'a str,
    pub method: Method,
    pub body: Option<S>,
}

/// Returns the response text. Non-2xx statuses become [`RequestError::Status`] with the body kept.
pub async fn send_http_request(
    client: &Client,
    request_params: &RequestParams<'_, impl Serialize>,
    headers: Option<&HeaderMap>,
) -> Result<String, RequestError> {
    let mut request = client.request(request_params.method.clone(), request_params.url);

    if let Some(body) = &request_params.body {
        request = request.json(&body);
    }

    if let Some(headers) = headers {
        request = request.headers(headers.clone());
    }

    let response = request
        .send()
        .await
        .inspect_err(|e| tracing::debug!("Request failed: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .inspect_err(|e| tracing::debug!("Failed to retrieve response text: {}", e))?;

    if !status.is_success() {
        return Err(RequestError::Status { status, body: text });
    }

    Ok(text)
}
