/// 確認済みユーザー
///
/// Cognito PostConfirmationイベントから読み取ったユーザー情報。
/// イベント本体はそのままCognitoに返却する必要があるため、
/// この型はイベントを借用して必要なフィールドだけを参照する。
use serde_json::{Map, Value};
use thiserror::Error;

/// 属性が存在しない場合にログへ出力する値
pub const MISSING_ATTRIBUTE: &str = "N/A";

/// イベントからのユーザー情報抽出エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// 必須フィールドが欠落
    #[error("missing required field in event: {0}")]
    MissingField(&'static str),
    /// フィールドは存在するが型が想定外
    #[error("unexpected value for {field}: expected {expected}")]
    Malformed {
        field: &'static str,
        expected: &'static str,
    },
}

/// PostConfirmationイベントから抽出したユーザー情報
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedUser<'a> {
    /// ユーザープールID（userPoolId）
    user_pool_id: &'a str,
    /// ユーザー名（userName）
    user_name: &'a str,
    /// ユーザー属性（request.userAttributes）
    user_attributes: &'a Map<String, Value>,
}

impl<'a> ConfirmedUser<'a> {
    /// イベントからユーザー情報を抽出する
    ///
    /// userPoolId → userName → request.userAttributes の順に読み取り、
    /// 最初に見つかった問題をエラーとして返す。
    pub fn from_event(event: &'a Value) -> Result<Self, ExtractError> {
        let user_pool_id = required_str(event, "userPoolId")?;
        let user_name = required_str(event, "userName")?;

        let request = event
            .get("request")
            .ok_or(ExtractError::MissingField("request"))?;
        if !request.is_object() {
            return Err(ExtractError::Malformed {
                field: "request",
                expected: "object",
            });
        }

        let user_attributes = request
            .get("userAttributes")
            .ok_or(ExtractError::MissingField("userAttributes"))?
            .as_object()
            .ok_or(ExtractError::Malformed {
                field: "userAttributes",
                expected: "object",
            })?;

        Ok(Self {
            user_pool_id,
            user_name,
            user_attributes,
        })
    }

    pub fn user_pool_id(&self) -> &'a str {
        self.user_pool_id
    }

    pub fn user_name(&self) -> &'a str {
        self.user_name
    }

    pub fn user_attributes(&self) -> &'a Map<String, Value> {
        self.user_attributes
    }

    /// email属性（存在しなければ`N/A`）
    pub fn email(&self) -> &'a str {
        self.attribute_or_missing("email")
    }

    /// name属性（存在しなければ`N/A`）
    pub fn name(&self) -> &'a str {
        self.attribute_or_missing("name")
    }

    /// 文字列でない属性値は欠落として扱う
    fn attribute_or_missing(&self, key: &str) -> &'a str {
        self.user_attributes
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(MISSING_ATTRIBUTE)
    }
}

fn required_str<'a>(event: &'a Value, field: &'static str) -> Result<&'a str, ExtractError> {
    event
        .get(field)
        .ok_or(ExtractError::MissingField(field))?
        .as_str()
        .ok_or(ExtractError::Malformed {
            field,
            expected: "string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_valid_event() -> Value {
        json!({
            "version": "1",
            "region": "ca-central-1",
            "userPoolId": "ca-central-1_TestPool",
            "userName": "0f3c1e2a-user",
            "triggerSource": "PostConfirmation_ConfirmSignUp",
            "request": {
                "userAttributes": {
                    "sub": "0f3c1e2a-user",
                    "email": "taro@example.com",
                    "name": "Taro Yamada",
                    "email_verified": "true"
                }
            },
            "response": {}
        })
    }

    #[test]
    fn test_from_event_extracts_identifiers() {
        let event = create_valid_event();
        let user = ConfirmedUser::from_event(&event).unwrap();

        assert_eq!(user.user_pool_id(), "ca-central-1_TestPool");
        assert_eq!(user.user_name(), "0f3c1e2a-user");
        assert_eq!(user.email(), "taro@example.com");
        assert_eq!(user.name(), "Taro Yamada");
        assert_eq!(user.user_attributes().len(), 4);
    }

    #[test]
    fn test_missing_email_and_name_use_sentinel() {
        let event = json!({
            "userPoolId": "pool",
            "userName": "user",
            "request": { "userAttributes": { "sub": "abc" } }
        });
        let user = ConfirmedUser::from_event(&event).unwrap();

        assert_eq!(user.email(), MISSING_ATTRIBUTE);
        assert_eq!(user.name(), "N/A");
    }

    #[test]
    fn test_non_string_attribute_treated_as_missing() {
        let event = json!({
            "userPoolId": "pool",
            "userName": "user",
            "request": { "userAttributes": { "email": 42, "name": null } }
        });
        let user = ConfirmedUser::from_event(&event).unwrap();

        assert_eq!(user.email(), "N/A");
        assert_eq!(user.name(), "N/A");
    }

    #[test]
    fn test_missing_user_pool_id() {
        let event = json!({
            "userName": "user",
            "request": { "userAttributes": {} }
        });

        assert_eq!(
            ConfirmedUser::from_event(&event),
            Err(ExtractError::MissingField("userPoolId"))
        );
    }

    #[test]
    fn test_missing_user_name() {
        let event = json!({
            "userPoolId": "pool",
            "request": { "userAttributes": {} }
        });

        assert_eq!(
            ConfirmedUser::from_event(&event),
            Err(ExtractError::MissingField("userName"))
        );
    }

    #[test]
    fn test_missing_request_and_attributes() {
        let no_request = json!({ "userPoolId": "pool", "userName": "user" });
        assert_eq!(
            ConfirmedUser::from_event(&no_request),
            Err(ExtractError::MissingField("request"))
        );

        let no_attributes = json!({ "userPoolId": "pool", "userName": "user", "request": {} });
        assert_eq!(
            ConfirmedUser::from_event(&no_attributes),
            Err(ExtractError::MissingField("userAttributes"))
        );
    }

    #[test]
    fn test_malformed_fields() {
        let numeric_pool = json!({
            "userPoolId": 123,
            "userName": "user",
            "request": { "userAttributes": {} }
        });
        assert_eq!(
            ConfirmedUser::from_event(&numeric_pool),
            Err(ExtractError::Malformed {
                field: "userPoolId",
                expected: "string"
            })
        );

        let list_attributes = json!({
            "userPoolId": "pool",
            "userName": "user",
            "request": { "userAttributes": ["email"] }
        });
        assert_eq!(
            ConfirmedUser::from_event(&list_attributes),
            Err(ExtractError::Malformed {
                field: "userAttributes",
                expected: "object"
            })
        );

        let string_request = json!({ "userPoolId": "pool", "userName": "user", "request": "x" });
        assert!(matches!(
            ConfirmedUser::from_event(&string_request),
            Err(ExtractError::Malformed { field: "request", .. })
        ));
    }

    #[test]
    fn test_extract_error_display() {
        assert_eq!(
            ExtractError::MissingField("userName").to_string(),
            "missing required field in event: userName"
        );
        assert_eq!(
            ExtractError::Malformed {
                field: "userAttributes",
                expected: "object"
            }
            .to_string(),
            "unexpected value for userAttributes: expected object"
        );
    }

    #[test]
    fn test_non_object_event() {
        // Value::getは配列・文字列に対してNoneを返す
        let event = json!(["not", "an", "event"]);
        assert_eq!(
            ConfirmedUser::from_event(&event),
            Err(ExtractError::MissingField("userPoolId"))
        );
    }
}
