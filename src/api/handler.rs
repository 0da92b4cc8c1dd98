//! Lambda handler - thin adapter from proxy events to the route table.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use super::{parsing, routes};
use crate::core::config::AppConfig;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err`; every outcome, including pipeline failures, is encoded
/// as a proxy response with the matching status code.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let method = parsing::request_method(&event.payload);
    let path = parsing::request_path(&event.payload);

    let response = routes::dispatch(config, method, path).await;
    Ok(response.into_lambda())
}
