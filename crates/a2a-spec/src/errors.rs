use derive_builder::UninitializedFieldError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum A2aSpecError {
    #[error("Parameter '{param}' {reason}")]
    InvalidArgument { param: String, reason: String },
}

impl A2aSpecError {
    /// A required parameter was not supplied.
    pub fn missing(param: impl Into<String>) -> Self {
        A2aSpecError::InvalidArgument {
            param: param.into(),
            reason: "may not be null".to_string(),
        }
    }

    /// A parameter was supplied but could not be interpreted.
    pub fn malformed(param: impl Into<String>, reason: impl Into<String>) -> Self {
        A2aSpecError::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    pub fn param(&self) -> &str {
        match self {
            A2aSpecError::InvalidArgument { param, .. } => param,
        }
    }

    pub fn json_rpc_code(&self) -> i32 {
        match self {
            A2aSpecError::InvalidArgument { .. } => -32602,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn data(&self) -> Option<serde_json::Value> {
        match self {
            A2aSpecError::InvalidArgument { param, .. } => {
                Some(serde_json::json!({ "param": param }))
            }
        }
    }
}

// derive_builder reports rust field names, callers only ever see wire names.
impl From<UninitializedFieldError> for A2aSpecError {
    fn from(value: UninitializedFieldError) -> Self {
        let param = match value.field_name() {
            "task_id" => "taskId",
            other => other,
        };
        A2aSpecError::missing(param)
    }
}

/// JSON-RPC error object carried in the `error` member of a response.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, ToSchema)]
pub struct JsonrpcError {
    ///A Number that indicates the error type that occurred.
    pub code: i32,
    /**A Primitive or Structured value that contains additional information about the error.
    This may be omitted.*/
    #[serde(default, skip_serializing_if = "::std::option::Option::is_none")]
    pub data: ::std::option::Option<::serde_json::Value>,
    ///A String providing a short description of the error.
    pub message: ::std::string::String,
}

impl From<A2aSpecError> for JsonrpcError {
    fn from(value: A2aSpecError) -> Self {
        JsonrpcError {
            code: value.json_rpc_code(),
            data: value.data(),
            message: value.message(),
        }
    }
}
