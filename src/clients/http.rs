use http::header::{HeaderMap, HeaderName, HeaderValue};
use rquest::{Client, RequestBuilder, Response};
use rquest_util::Emulation;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::Result;

/// Thin wrapper over an emulated browser client that applies the configured
/// auth headers and request timeout to every request.
pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(api: &ApiConfig, emulation: Emulation) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in api.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(header_name, header_value);
            } else {
                error!(header_key = key, "Invalid header value");
            }
        }

        debug!(emulation = ?emulation, "Creating client with emulation");

        let client = Client::builder()
            .emulation(emulation)
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self { client, headers })
    }

    pub fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> RequestBuilder {
        self.with_headers(self.client.post(url)).json(body)
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }
        request
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        Ok(response)
    }
}
