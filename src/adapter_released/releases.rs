use anyhow::Context;
use reqwest::StatusCode;

use crate::adapter_released::entity::Release;
use crate::domain::entity::{ReleaseData, Route};

impl super::Client {
    pub(crate) async fn get_release(&self, route: &Route) -> anyhow::Result<Option<Release>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("released base url can't hold a path"))?
            .pop_if_empty()
            .extend([route.owner.as_str(), route.repo.as_str()]);
        let mut req = self.inner.get(url);
        if !route.is_latest() {
            req = req.query(&[("tag", route.tag.as_str())]);
        }
        let res = req.send().await.context("unable to request")?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        res.error_for_status_ref()?;
        res.json().await.context("unable to read response").map(Some)
    }
}

impl crate::domain::prelude::ReleaseSource for super::Client {
    #[tracing::instrument(skip(self), err(Debug))]
    async fn fetch_release(&self, route: &Route) -> anyhow::Result<Option<ReleaseData>> {
        Ok(self.get_release(route).await?.map(ReleaseData::from))
    }
}
