/// PostConfirmationハンドラー
///
/// ユーザーがメール確認を完了した直後にCognitoから呼び出される。
/// イベント内容をログに残し、必要に応じてユーザーを無効化して管理者承認待ちにする。
///
/// Cognitoはトリガーの戻り値としてイベント本体を要求するため、
/// 抽出エラーやCognito APIエラーが発生しても受け取ったイベントをそのまま返す。
/// エラーを返すとエンドユーザーの確認フロー自体が失敗する。
use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::{ConfirmedUser, ExtractError};
use crate::infrastructure::{CognitoOps, PostConfirmationConfig};

pub struct PostConfirmationHandler<C>
where
    C: CognitoOps,
{
    /// Cognito管理API
    cognito_ops: C,
    /// トリガー設定
    config: PostConfirmationConfig,
}

impl<C> PostConfirmationHandler<C>
where
    C: CognitoOps,
{
    /// 新しいPostConfirmationHandlerを作成
    pub fn new(cognito_ops: C, config: PostConfirmationConfig) -> Self {
        Self {
            cognito_ops,
            config,
        }
    }

    /// PostConfirmationイベントを処理する
    ///
    /// # 処理フロー
    /// 1. 受信したイベントをログ出力
    /// 2. userPoolId、userName、userAttributesを抽出
    /// 3. ユーザー情報をログ出力
    /// 4. 承認必須の場合はAdminDisableUserを1回だけ呼び出す（再試行しない）
    /// 5. 受け取ったイベントを変更せずに返す
    pub async fn handle(&self, event: Value) -> Value {
        info!(event = %event, "PostConfirmationイベントを受信");

        match self.process(&event).await {
            Ok(()) => {}
            Err(err @ ExtractError::MissingField(_)) => {
                warn!(error = %err, "イベントに必須フィールドがありません");
            }
            Err(err @ ExtractError::Malformed { .. }) => {
                error!(error = %err, "PostConfirmation処理中に予期しないエラー");
            }
        }

        event
    }

    async fn process(&self, event: &Value) -> Result<(), ExtractError> {
        let user = ConfirmedUser::from_event(event)?;

        info!(
            user_pool_id = user.user_pool_id(),
            username = user.user_name(),
            "User {} confirmed in pool {}",
            user.user_name(),
            user.user_pool_id()
        );
        let user_attributes = Value::Object(user.user_attributes().clone());
        info!(user_attributes = %user_attributes, "ユーザー属性");
        info!(
            name = user.name(),
            email = user.email(),
            "Confirmed user: {} ({})",
            user.name(),
            user.email()
        );

        if self.config.require_admin_approval() {
            self.disable_pending_approval(&user).await;
        } else {
            info!(
                username = user.user_name(),
                "管理者承認が無効のためユーザー無効化をスキップ"
            );
        }

        Ok(())
    }

    /// ユーザーを無効化して管理者承認待ちにする
    ///
    /// 失敗した場合はログのみ残す。ユーザーは有効なまま残る。
    async fn disable_pending_approval(&self, user: &ConfirmedUser<'_>) {
        match self
            .cognito_ops
            .disable_user(user.user_pool_id(), user.user_name())
            .await
        {
            Ok(()) => {
                info!(
                    username = user.user_name(),
                    "ユーザーを無効化しました（管理者承認待ち）"
                );
            }
            Err(err) => {
                error!(
                    username = user.user_name(),
                    user_pool_id = user.user_pool_id(),
                    error = %err,
                    "ユーザーの無効化に失敗"
                );
            }
        }
    }
}
