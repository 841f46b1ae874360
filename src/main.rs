use anyhow::Context;
use completion_gateway::configuration::get_configuration;
use completion_gateway::startup::Application;
use completion_gateway::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("completion_gateway".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    if let Err(e) = serve().await {
        tracing::error!(error.cause_chain = ?e, error.message = %e, "Fatal error");
        return Err(e);
    }
    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    let application = Application::build(configuration)
        .await
        .context("Failed to bind the listener")?;
    application
        .run_until_stopped()
        .await
        .context("Server error")
}
