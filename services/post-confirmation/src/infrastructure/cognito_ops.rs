//! Cognito操作モジュール
//!
//! PostConfirmationトリガーから呼び出すCognito User Pools管理APIを提供する。
//! - AdminDisableUser: 確認済みユーザーを無効化し、管理者承認待ちにする

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use thiserror::Error;
use tracing::info;

/// Cognito操作のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CognitoOpsError {
    /// AWS SDK エラー
    #[error("AWS Cognito APIエラー: {0}")]
    AwsSdkError(String),
}

/// Cognito操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait CognitoOps: Send + Sync {
    /// ユーザーを無効化する
    ///
    /// 無効化されたユーザーは管理者が再度有効化するまでサインインできない。
    ///
    /// # 引数
    /// * `user_pool_id` - 対象ユーザープールID
    /// * `username` - 対象ユーザー名
    async fn disable_user(&self, user_pool_id: &str, username: &str)
    -> Result<(), CognitoOpsError>;
}

/// 実際のAWS Cognito SDKを使用したCognito操作実装
#[derive(Debug, Clone)]
pub struct AwsCognitoOps {
    client: CognitoClient,
}

impl AwsCognitoOps {
    /// 新しいAwsCognitoOpsを作成
    pub fn new(client: CognitoClient) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = CognitoClient::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl CognitoOps for AwsCognitoOps {
    async fn disable_user(
        &self,
        user_pool_id: &str,
        username: &str,
    ) -> Result<(), CognitoOpsError> {
        self.client
            .admin_disable_user()
            .user_pool_id(user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(|err| CognitoOpsError::AwsSdkError(DisplayErrorContext(&err).to_string()))?;

        info!(
            user_pool_id = %user_pool_id,
            username = %username,
            "AdminDisableUser成功"
        );
        Ok(())
    }
}
