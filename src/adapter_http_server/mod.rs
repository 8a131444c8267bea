use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::domain::FrameService;

mod handler;
mod middleware;

const DEFAULT_ADDRESS: std::net::IpAddr = std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    address: std::net::IpAddr,
    port: u16,
    static_root: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Ok(Self {
            address: crate::with_env_as_or("ADDRESS", DEFAULT_ADDRESS)?,
            port: crate::with_env_as_or("PORT", DEFAULT_PORT)?,
            static_root: PathBuf::from(crate::with_env_or("STATIC_ROOT", "./public").as_ref()),
        })
    }

    pub fn build<RS, SS, FR>(
        self,
        frame_service: FrameService<RS, SS>,
        renderer: FR,
    ) -> anyhow::Result<Server<RS, SS, FR>> {
        Ok(Server {
            address: std::net::SocketAddr::from((self.address, self.port)),
            static_root: self.static_root,
            state: ServerState {
                frame_service: Arc::new(frame_service),
                renderer,
            },
        })
    }
}

pub struct ServerState<RS, SS, FR> {
    frame_service: Arc<FrameService<RS, SS>>,
    renderer: FR,
}

impl<RS, SS, FR: Clone> Clone for ServerState<RS, SS, FR> {
    fn clone(&self) -> Self {
        Self {
            frame_service: Arc::clone(&self.frame_service),
            renderer: self.renderer.clone(),
        }
    }
}

pub struct Server<RS, SS, FR> {
    address: std::net::SocketAddr,
    static_root: PathBuf,
    state: ServerState<RS, SS, FR>,
}

impl<RS, SS, FR> Server<RS, SS, FR>
where
    RS: crate::domain::prelude::ReleaseSource,
    SS: crate::domain::prelude::StateSigner,
    FR: crate::domain::prelude::FrameRenderer + Clone,
{
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.address)
            .await
            .with_context(|| format!("unable to bind {}", self.address))?;
        self.serve(listener).await
    }

    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        let app = handler::build(&self.static_root)
            .layer(middleware::tracing::layer())
            .with_state(self.state);
        tracing::info!(address = ?listener.local_addr()?, "starting server");
        axum::serve(listener, app).await.context("server crashed")
    }
}
