use formgate::api::health;
use formgate::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    formgate::setup_logging();

    let config = AppConfig::from_env();

    lambda_runtime::run(lambda_runtime::service_fn(|event| {
        health::handler(&config, event)
    }))
    .await
}
