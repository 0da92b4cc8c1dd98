use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use panorama::core::config::AppConfig;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    panorama::setup_logging();

    let config = AppConfig::from_env()?;

    run(service_fn(move |event: LambdaEvent<Value>| {
        let config = config.clone();
        async move { panorama::api::handler(&config, event).await }
    }))
    .await
}
