use portfolio::configuration::get_configuration;
use portfolio::startup::Application;
use portfolio::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main] // or #[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("portfolio".into(), "info".into());
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    let application = Application::build(&configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
