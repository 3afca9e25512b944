//! The account-scoped request body and identifier resolution.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::errors::{ServiceError, ServiceResult};

/// Token substituted for `@` when an email address becomes a key prefix.
pub const EMAIL_AT_TOKEN: &str = "_at_";

/// Body accepted by every route.
///
/// Every field is optional at the decoding stage; each operation checks
/// presence of the fields it needs. Empty strings are treated as absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[serde(default, deserialize_with = "scalar_string")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub account_id: Option<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub email: Option<String>,

    /// Relative sub-path below the identifier, e.g. `2024/q1`.
    #[serde(default, deserialize_with = "scalar_string")]
    pub folder_path: Option<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub folder_name: Option<String>,
}

impl AccountRequest {
    /// Decode a raw request body. An empty body or a JSON `null` is an empty
    /// request; anything other than a JSON object is rejected.
    pub fn from_body(body: &[u8]) -> ServiceResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let invalid = |err: serde_json::Error| {
            ServiceError::validation(format!("invalid request body: {err}"))
        };
        match serde_json::from_slice::<Value>(body).map_err(invalid)? {
            Value::Null => Ok(Self::default()),
            object @ Value::Object(_) => serde_json::from_value(object).map_err(invalid),
            _ => Err(ServiceError::validation(
                "invalid request body: expected a JSON object",
            )),
        }
    }

    /// `userId`, required by the file metadata operations.
    pub fn require_user_id(&self) -> ServiceResult<&str> {
        present(&self.user_id).ok_or_else(|| ServiceError::validation("userId is required"))
    }

    /// Identifier for the initial scaffold: `userId`, else `accountId`, else
    /// the email with its `@` replaced.
    pub fn scaffold_identifier(&self) -> ServiceResult<String> {
        if let Some(id) = present(&self.user_id).or(present(&self.account_id)) {
            return Ok(id.to_string());
        }
        present(&self.email)
            .map(|email| email.replacen('@', EMAIL_AT_TOKEN, 1))
            .ok_or_else(|| ServiceError::validation("userId, accountId, or email is required"))
    }

    /// Identifier for ad-hoc folders: `userId`, else `accountId`.
    pub fn folder_owner(&self) -> ServiceResult<&str> {
        present(&self.user_id)
            .or(present(&self.account_id))
            .ok_or_else(|| ServiceError::validation("userId or accountId is required"))
    }

    pub fn require_folder_name(&self) -> ServiceResult<&str> {
        present(&self.folder_name).ok_or_else(|| ServiceError::validation("folderName is required"))
    }

    pub fn folder_path(&self) -> Option<&str> {
        present(&self.folder_path)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Accept strings, numbers and booleans, rendering the latter two as text.
/// `false` and zero are falsy identifiers and decode as absent.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some(true.to_string())),
        other => Err(de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}
