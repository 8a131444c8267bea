use std::borrow::Cow;
use std::path::Path;

use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::adapter_http_server::ServerState;

mod frame;
mod health;

pub fn build<RS, SS, FR>(static_root: &Path) -> axum::Router<ServerState<RS, SS, FR>>
where
    RS: crate::domain::prelude::ReleaseSource,
    SS: crate::domain::prelude::StateSigner,
    FR: crate::domain::prelude::FrameRenderer + Clone,
{
    axum::Router::new()
        .route(
            "/gh/{owner}/{repo}",
            get(frame::handler::<RS, SS, FR>).post(frame::action_handler::<RS, SS, FR>),
        )
        .route("/health", get(health::handler))
        .fallback_service(ServeDir::new(static_root))
}

#[derive(Debug)]
struct ApiError {
    status_code: axum::http::StatusCode,
    message: Cow<'static, str>,
}

impl ApiError {
    #[inline]
    fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status_code: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, self.message).into_response()
    }
}
