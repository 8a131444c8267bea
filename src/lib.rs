use std::borrow::Cow;

use anyhow::Context;

pub mod adapter_frame;
pub mod adapter_http_server;
pub mod adapter_released;
pub mod adapter_rsa;
pub mod domain;
pub mod tracing;

pub(crate) fn maybe_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

pub(crate) fn with_env_or(name: &str, default_value: &'static str) -> Cow<'static, str> {
    maybe_env(name)
        .map(Cow::Owned)
        .unwrap_or(Cow::Borrowed(default_value))
}

pub(crate) fn with_env_as_or<T>(name: &str, default_value: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(value) = maybe_env(name) else {
        return Ok(default_value);
    };
    value
        .parse::<T>()
        .with_context(|| format!("unable to parse value from {name:?}"))
}

pub struct Config {
    frame: domain::Config,
    http_server: adapter_http_server::Config,
    released: adapter_released::Config,
    renderer: adapter_frame::Config,
    rsa: adapter_rsa::Config,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            frame: domain::Config::from_env()?,
            http_server: adapter_http_server::Config::from_env()?,
            released: adapter_released::Config::from_env()?,
            renderer: adapter_frame::Config::from_env()?,
            rsa: adapter_rsa::Config::from_env()?,
        })
    }

    pub fn build(self) -> anyhow::Result<Application> {
        let source = self.released.build()?;
        let signer = self.rsa.build()?;
        let renderer = self.renderer.build()?;
        let frame_service = self.frame.build(source, signer);
        let server = self.http_server.build(frame_service, renderer)?;
        Ok(Application { server })
    }
}

pub struct Application {
    server: adapter_http_server::Server<
        adapter_released::Client,
        adapter_rsa::RsaClient,
        adapter_frame::HtmlRenderer,
    >,
}

impl Application {
    pub async fn run(self) -> anyhow::Result<()> {
        self.server.run().await
    }

    /// Serves on an already bound listener.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        self.server.serve(listener).await
    }
}
