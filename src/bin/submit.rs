use formgate::api::submit;
use formgate::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    formgate::setup_logging();

    // Configuration is assembled once and shared across invocations.
    let config = AppConfig::from_env();

    lambda_runtime::run(lambda_runtime::service_fn(|event| {
        submit::handler(&config, event)
    }))
    .await
}
