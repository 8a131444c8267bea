use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::adapter_http_server::ServerState;
use crate::adapter_http_server::handler::ApiError;
use crate::domain::entity::{FrameRequest, NavEvent, Route};
use crate::domain::prelude::{FrameRenderer, ReleaseSource, StateSigner};

#[derive(Debug, Default, serde::Deserialize)]
pub struct FrameQuery {
    tag: Option<String>,
}

/// Body posted when a frame button is pressed.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAction {
    button_value: Option<String>,
    state: Option<String>,
}

async fn respond<RS, SS, FR>(
    state: &ServerState<RS, SS, FR>,
    request: FrameRequest,
) -> Result<Html<String>, ApiError>
where
    RS: ReleaseSource,
    SS: StateSigner,
    FR: FrameRenderer + Clone,
{
    let outcome = state
        .frame_service
        .handle(request)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, "unable to build frame");
            ApiError::internal("unable to load release")
        })?;
    let document = state.renderer.render(&outcome).map_err(|err| {
        tracing::error!(error = ?err, "unable to render frame");
        ApiError::internal("unable to render frame")
    })?;
    Ok(Html(document))
}

/// First render of a frame instance.
#[tracing::instrument(skip_all, err(Debug))]
pub async fn handler<RS, SS, FR>(
    State(state): State<ServerState<RS, SS, FR>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<FrameQuery>,
) -> Result<Html<String>, ApiError>
where
    RS: ReleaseSource,
    SS: StateSigner,
    FR: FrameRenderer + Clone,
{
    let request = FrameRequest {
        route: Route::new(owner, repo, query.tag),
        event: None,
        state: None,
    };
    respond(&state, request).await
}

/// Button press on an existing frame instance.
#[tracing::instrument(skip_all, fields(button = ?action.button_value), err(Debug))]
pub async fn action_handler<RS, SS, FR>(
    State(state): State<ServerState<RS, SS, FR>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<FrameQuery>,
    Json(action): Json<FrameAction>,
) -> Result<Html<String>, ApiError>
where
    RS: ReleaseSource,
    SS: StateSigner,
    FR: FrameRenderer + Clone,
{
    let request = FrameRequest {
        route: Route::new(owner, repo, query.tag),
        event: NavEvent::from_button(action.button_value.as_deref()),
        state: action.state,
    };
    respond(&state, request).await
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;

    use crate::adapter_http_server::handler::tests::state;
    use crate::domain::entity::{FrameOutcome, NavState, ReleaseData, ReleaseItem, Route};
    use crate::domain::prelude::{MockFrameRenderer, MockReleaseSource, MockStateSigner};

    fn path(owner: &str, repo: &str) -> Path<(String, String)> {
        Path((owner.to_string(), repo.to_string()))
    }

    fn release() -> ReleaseData {
        ReleaseData {
            title: "v1.0.0".into(),
            latest: true,
            author: None,
            tag: "v1.0.0".into(),
            notes: None,
            items: (0..8)
                .map(|index| ReleaseItem::new("note", format!("item {index}")))
                .collect(),
            url: "https://github.com/owner/repo/releases/tag/v1.0.0".into(),
        }
    }

    #[tokio::test]
    async fn should_render_not_found_for_placeholder_route() {
        let mut source = MockReleaseSource::new();
        source.expect_fetch_release().never();
        let mut renderer = MockFrameRenderer::new();
        renderer
            .expect_render()
            .withf(|outcome| {
                *outcome == FrameOutcome::NotFound(Route::new(":owner", ":repo", None))
            })
            .once()
            .return_once(|_| Ok("not found".into()));

        let res = super::handler(
            State(state(source, MockStateSigner::new(), renderer)),
            path(":owner", ":repo"),
            Query(super::FrameQuery::default()),
        )
        .await
        .unwrap();
        assert_eq!(res.0, "not found");
    }

    #[tokio::test]
    async fn should_forward_tag_to_source() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_release()
            .withf(|route| route.tag == "v0.1.0")
            .once()
            .return_once(|_| Box::pin(async { Ok(None) }));
        let mut renderer = MockFrameRenderer::new();
        renderer
            .expect_render()
            .once()
            .return_once(|_| Ok("not found".into()));

        let res = super::handler(
            State(state(source, MockStateSigner::new(), renderer)),
            path("owner", "repo"),
            Query(super::FrameQuery {
                tag: Some("v0.1.0".into()),
            }),
        )
        .await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn should_move_to_next_page_on_button_press() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_release()
            .once()
            .return_once(|_| Box::pin(async { Ok(Some(release())) }));
        let mut signer = MockStateSigner::new();
        signer
            .expect_open()
            .withf(|token| token == "sealed-0")
            .once()
            .return_once(|_| Ok(NavState { page: 0 }));
        signer
            .expect_seal()
            .withf(|state| state.page == 1)
            .once()
            .return_once(|_| Ok("sealed-1".into()));
        let mut renderer = MockFrameRenderer::new();
        renderer
            .expect_render()
            .withf(|outcome| match outcome {
                FrameOutcome::Release(view) => {
                    view.page_index == 1 && view.page_count == 2 && view.state == "sealed-1"
                }
                FrameOutcome::NotFound(_) => false,
            })
            .once()
            .return_once(|_| Ok("page 2".into()));

        let res = super::action_handler(
            State(state(source, signer, renderer)),
            path("owner", "repo"),
            Query(super::FrameQuery::default()),
            Json(super::FrameAction {
                button_value: Some("next".into()),
                state: Some("sealed-0".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(res.0, "page 2");
    }

    #[tokio::test]
    async fn should_fail_when_upstream_fails() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_release()
            .once()
            .return_once(|_| Box::pin(async { Err(anyhow::anyhow!("connection reset")) }));
        let mut renderer = MockFrameRenderer::new();
        renderer.expect_render().never();

        let err = super::action_handler(
            State(state(source, MockStateSigner::new(), renderer)),
            path("owner", "repo"),
            Query(super::FrameQuery::default()),
            Json(super::FrameAction::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_fail_when_renderer_fails() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_release()
            .once()
            .return_once(|_| Box::pin(async { Ok(None) }));
        let mut renderer = MockFrameRenderer::new();
        renderer
            .expect_render()
            .once()
            .return_once(|_| Err(anyhow::anyhow!("broken template")));

        let err = super::handler(
            State(state(source, MockStateSigner::new(), renderer)),
            path("owner", "repo"),
            Query(super::FrameQuery::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_read_back_tag_from_post_url() {
        let origin = reqwest::Url::parse("https://released.fyi").unwrap();
        for tag in ["v1.0.0+build.5", "a&b", "a#b", "v1 ✓"] {
            let route = Route::new("tokio-rs", "axum", Some(tag.to_string()));
            let url = crate::adapter_frame::post_url(&origin, &route).unwrap();
            let uri: axum::http::Uri = url.as_str().parse().unwrap();
            let Query(query) = Query::<super::FrameQuery>::try_from_uri(&uri).unwrap();
            assert_eq!(query.tag.as_deref(), Some(tag));
        }
    }
}
