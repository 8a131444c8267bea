use super::entity::*;

/// Source of release data, usually the released.fyi API.
pub trait ReleaseSource: Send + Sync + 'static {
    /// Fetch the release targeted by the route, `None` when it doesn't exist.
    fn fetch_release(
        &self,
        route: &Route,
    ) -> impl Future<Output = anyhow::Result<Option<ReleaseData>>> + Send;
}

#[cfg(test)]
mockall::mock! {
    pub ReleaseSource {}

    impl ReleaseSource for ReleaseSource {
        fn fetch_release(
            &self,
            route: &Route,
        ) -> impl Future<Output = anyhow::Result<Option<ReleaseData>>> + Send;
    }
}

/// Turns navigation state into an opaque token the client sends back.
pub trait StateSigner: Send + Sync + 'static {
    fn seal(&self, state: &NavState) -> anyhow::Result<String>;

    /// Fails when the token was not produced by [`StateSigner::seal`].
    fn open(&self, token: &str) -> anyhow::Result<NavState>;
}

#[cfg(test)]
mockall::mock! {
    pub StateSigner {}

    impl StateSigner for StateSigner {
        fn seal(&self, state: &NavState) -> anyhow::Result<String>;
        fn open(&self, token: &str) -> anyhow::Result<NavState>;
    }
}

/// Produces the document sent back for an interaction.
pub trait FrameRenderer: Send + Sync + 'static {
    fn render(&self, outcome: &FrameOutcome) -> anyhow::Result<String>;
}

#[cfg(test)]
mockall::mock! {
    pub FrameRenderer {}

    impl Clone for FrameRenderer {
        fn clone(&self) -> Self;
    }

    impl FrameRenderer for FrameRenderer {
        fn render(&self, outcome: &FrameOutcome) -> anyhow::Result<String>;
    }
}
