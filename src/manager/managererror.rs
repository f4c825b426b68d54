use thiserror::Error;

/// 由 JSON 建立具名物件（設定檔、積分法）時的錯誤
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> serde::Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidParameter { field, reason: reason.into() }
    }
}
