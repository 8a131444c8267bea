use std::borrow::Cow;

use anyhow::Context;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

pub(crate) mod entity;
mod releases;

pub struct Config {
    base_url: Cow<'static, str>,
    max_retry: u32,
    timeout: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            base_url: crate::with_env_or("RELEASED_BASE_URL", "https://api.released.fyi"),
            max_retry: crate::with_env_as_or("RELEASED_MAX_RETRY", 0)?,
            timeout: crate::with_env_as_or("RELEASED_TIMEOUT", 20)?,
        })
    }

    pub fn build(self) -> anyhow::Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("User-Agent", HeaderValue::from_static("released-frame"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(self.timeout))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retry);
        let inner = reqwest_middleware::ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let base_url = Url::parse(&self.base_url).context("unable to parse released base url")?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("released base url {base_url} can't hold a path");
        }
        Ok(Client { base_url, inner })
    }
}

/// Client of the released.fyi API.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    inner: reqwest_middleware::ClientWithMiddleware,
}
