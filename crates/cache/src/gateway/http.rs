use super::CacheGateway;
use crate::instruction::Instructions;
use reqwest::header::CONTENT_TYPE;
use skeletonkey_core::{Error, Result, DEFAULT_REQUEST_TIMEOUT};
use std::time::Duration;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Gateway reached over HTTP: one POST per instruction list
#[derive(Debug, Clone)]
pub struct HttpGateway {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway with the default request timeout
    pub fn new(endpoint: Url) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a gateway whose requests give up after `timeout`
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network_with_source(endpoint.as_str(), e))?;

        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl CacheGateway for HttpGateway {
    async fn execute(&self, instructions: &Instructions) -> Result<String> {
        let body = instructions.to_json()?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::network_with_source(self.endpoint.as_str(), e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::debug!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "gateway rejected instructions"
            );
            return Err(Error::unexpected_status(
                instructions.operation(),
                status.as_u16(),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| Error::network_with_source(self.endpoint.as_str(), e))
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
