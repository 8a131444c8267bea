#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let tracing_config = released_frame::tracing::Config::from_env()?;
    let tracer = tracing_config.install()?;

    let app = released_frame::Config::from_env()?.build()?;
    let res = app.run().await;

    tracer.shutdown();

    res
}
