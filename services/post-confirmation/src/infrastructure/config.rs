/// PostConfirmationトリガー設定
///
/// 環境変数:
/// - REQUIRE_ADMIN_APPROVAL: 確認後にユーザーを無効化して管理者承認待ちにするか（デフォルト: true）
use thiserror::Error;
use tracing::warn;

/// 管理者承認フラグの環境変数名
pub const REQUIRE_ADMIN_APPROVAL_ENV: &str = "REQUIRE_ADMIN_APPROVAL";

/// 設定読み込みのエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostConfirmationConfig {
    /// 確認済みユーザーを無効化するかどうか
    require_admin_approval: bool,
}

impl Default for PostConfirmationConfig {
    fn default() -> Self {
        Self {
            require_admin_approval: true,
        }
    }
}

impl PostConfirmationConfig {
    /// 明示的な値で作成（テスト用）
    pub fn new(require_admin_approval: bool) -> Self {
        Self {
            require_admin_approval,
        }
    }

    /// 環境変数から設定を読み込む
    ///
    /// 未設定または解釈できない値の場合はデフォルト（承認必須）になる。
    /// コールドスタートは失敗させない。
    pub fn from_env() -> Self {
        let Ok(value) = std::env::var(REQUIRE_ADMIN_APPROVAL_ENV) else {
            return Self::default();
        };

        match parse_flag(REQUIRE_ADMIN_APPROVAL_ENV, &value) {
            Ok(require_admin_approval) => Self::new(require_admin_approval),
            Err(err) => {
                let config = Self::default();
                warn!(
                    error = %err,
                    require_admin_approval = config.require_admin_approval,
                    "不正な設定値のためデフォルトを使用"
                );
                config
            }
        }
    }

    pub fn require_admin_approval(&self) -> bool {
        self.require_admin_approval
    }
}

/// true/false, 1/0, yes/no（大文字小文字を区別しない）を解釈する
fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
