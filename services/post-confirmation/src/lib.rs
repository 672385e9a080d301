use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::Instrument;

// Application layer modules
pub mod application;

// Domain layer modules
pub mod domain;

// Infrastructure layer modules
pub mod infrastructure;

use application::PostConfirmationHandler;
use infrastructure::CognitoOps;

/// Lambdaイベントを処理し、ペイロードをそのまま返す
///
/// PostConfirmationHandlerは失敗しないため、常に`Ok`を返す。
pub async fn handler<C>(
    trigger: &PostConfirmationHandler<C>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    C: CognitoOps,
{
    let span = tracing::info_span!("post_confirmation", request_id = %event.context.request_id);
    Ok(trigger.handle(event.payload).instrument(span).await)
}
