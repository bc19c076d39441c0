use formgate::api::update_intent;
use formgate::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    formgate::setup_logging();

    // Configuration is assembled once and shared across invocations.
    let config = AppConfig::from_env();

    lambda_runtime::run(lambda_runtime::service_fn(|event| {
        update_intent::handler(&config, event)
    }))
    .await
}
