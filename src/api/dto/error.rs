//! Error response body shared by every endpoint.

use serde::{Deserialize, Serialize};

/// `{"Message": ..., "ErrorCode": ...}` where `ErrorCode` equals the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Message")]
    pub message: String,

    #[serde(rename = "ErrorCode")]
    pub error_code: u16,
}
