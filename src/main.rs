use waitlist_backend::configuration::get_configuration;
use waitlist_backend::startup::Application;
use waitlist_backend::telemetry::get_subscriber;
use waitlist_backend::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main] // requires tokio features: macros, rt-multi-thread
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("waitlist-backend", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    tracing::info!("listening on port {}", app.get_port());
    app.run_until_stopped().await?;
    Ok(())
}
