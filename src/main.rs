use amber_waitlist::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("amber-waitlist".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;

    let app = Application::build(config).await?;
    tracing::info!(port = app.get_port(), "Waitlist server started");
    app.run_until_stopped().await?;

    Ok(())
}
