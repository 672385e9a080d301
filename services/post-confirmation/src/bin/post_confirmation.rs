/// Cognito PostConfirmation Lambda関数
///
/// ユーザーのメール確認完了時にCognitoから呼び出される。
/// Cognitoクライアントと設定はコールドスタート時に1度だけ作成し、
/// 以降の全invocationで共有する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use post_confirmation::application::PostConfirmationHandler;
use post_confirmation::infrastructure::{AwsCognitoOps, PostConfirmationConfig, init_logging};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = PostConfirmationConfig::from_env();
    info!(
        require_admin_approval = config.require_admin_approval(),
        "PostConfirmation設定を読み込み"
    );

    let cognito_ops = AwsCognitoOps::from_config().await;
    let trigger = PostConfirmationHandler::new(cognito_ops, config);
    let trigger = &trigger;

    // Lambda関数を初期化して実行
    let func = service_fn(move |event: LambdaEvent<Value>| async move {
        post_confirmation::handler(trigger, event).await
    });
    lambda_runtime::run(func).await?;
    Ok(())
}
