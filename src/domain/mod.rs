use std::num::NonZeroUsize;

use anyhow::Context;

use self::entity::{FrameOutcome, FrameRequest, FrameView, NavState, Overview};
use self::navigation::ClampPolicy;
use self::prelude::{ReleaseSource, StateSigner};

pub mod entity;
pub mod filter;
pub mod navigation;
pub mod paginator;
pub mod prelude;

pub struct Config {
    page_capacity: NonZeroUsize,
    clamp_policy: ClampPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_capacity: paginator::DEFAULT_PAGE_CAPACITY,
            clamp_policy: ClampPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            page_capacity: crate::with_env_as_or(
                "FRAME_PAGE_CAPACITY",
                paginator::DEFAULT_PAGE_CAPACITY,
            )?,
            clamp_policy: crate::with_env_as_or("FRAME_CLAMP_POLICY", ClampPolicy::default())?,
        })
    }

    pub fn build<RS, SS>(self, source: RS, signer: SS) -> FrameService<RS, SS> {
        FrameService {
            source,
            signer,
            page_capacity: self.page_capacity,
            clamp_policy: self.clamp_policy,
        }
    }
}

/// Runs one interaction: restores the navigation state, fetches the release,
/// paginates its items and works out which page and controls to show.
#[derive(Debug)]
pub struct FrameService<RS, SS> {
    source: RS,
    signer: SS,
    page_capacity: NonZeroUsize,
    clamp_policy: ClampPolicy,
}

impl<RS, SS> FrameService<RS, SS>
where
    RS: ReleaseSource,
    SS: StateSigner,
{
    fn restore_state(&self, token: Option<&str>) -> NavState {
        let Some(token) = token else {
            return NavState::default();
        };
        self.signer.open(token).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "rejected navigation state, starting over");
            NavState::default()
        })
    }

    #[tracing::instrument(
        skip_all,
        fields(owner = %request.route.owner, repo = %request.route.repo, tag = %request.route.tag),
        err(Debug)
    )]
    pub async fn handle(&self, request: FrameRequest) -> anyhow::Result<FrameOutcome> {
        let FrameRequest {
            route,
            event,
            state,
        } = request;

        let previous = self.restore_state(state.as_deref());
        let requested = navigation::apply(previous.page, event);

        if route.is_unbound() {
            return Ok(FrameOutcome::NotFound(route));
        }

        let Some(release) = self.source.fetch_release(&route).await? else {
            tracing::info!("release not found");
            return Ok(FrameOutcome::NotFound(route));
        };

        let mut pages =
            paginator::paginate(filter::filter(&release.items), self.page_capacity);
        let page_count = pages.len();
        let page_index = navigation::clamp(requested, page_count, self.clamp_policy);
        if requested != page_index as i64 {
            tracing::debug!(requested, page_index, page_count, "page out of bounds, clamping");
        }

        let state = self
            .signer
            .seal(&NavState {
                page: page_index as i64,
            })
            .context("unable to seal navigation state")?;
        let controls = navigation::controls(page_index, page_count, &release.url);
        let elements = if page_index < page_count {
            pages.swap_remove(page_index)
        } else {
            Vec::new()
        };

        tracing::info!(page = page_index, page_count, "rendering page");

        Ok(FrameOutcome::Release(Box::new(FrameView {
            route,
            overview: Overview::from(&release),
            elements,
            page_index,
            page_count,
            controls,
            state,
        })))
    }
}
