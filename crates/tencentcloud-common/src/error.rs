// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Code attached to request payloads rejected before they are sent.
pub const BUILD_REQUEST_ERROR: &str = "ClientError.BuildRequestError";

/// Code attached to payloads that could not be parsed as JSON.
pub const PARSE_JSON_ERROR: &str = "ClientError.ParseJsonError";

/// A classified error as reported by the API (or synthesized client-side
/// with a `ClientError.*` code).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "[TencentCloudSDKError] Code={code}, Message={message}, RequestId={request_id}"
)]
pub struct SdkError {
    /// Machine-readable code, e.g. `InvalidInstanceId.NotFound`.
    pub code: String,
    pub message: String,
    /// Empty when the error never reached the server.
    pub request_id: String,
}

impl SdkError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: request_id.into(),
        }
    }

    /// The broad class this error's code belongs to.
    pub fn category(&self) -> ErrorCategory {
        self.code.parse().unwrap_or(ErrorCategory::Other)
    }
}

/// The first segment of an error code, which classifies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    AuthFailure,
    ClientError,
    FailedOperation,
    InternalError,
    InvalidParameter,
    InvalidParameterValue,
    LimitExceeded,
    MissingParameter,
    ResourceInsufficient,
    ResourceNotFound,
    ResourceUnavailable,
    ResourcesSoldOut,
    UnauthorizedOperation,
    UnsupportedOperation,
    /// Legacy codes such as `InvalidInstanceId.NotFound` that predate the
    /// categorized scheme.
    Other,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for ErrorCategory {
    type Err = &'static str;

    /// Accepts either a bare category (`LimitExceeded`) or a full code
    /// (`LimitExceeded.CvmInstanceQuota`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = s.trim().split('.').next().unwrap_or_default();
        let category = match prefix {
            "AuthFailure" => Self::AuthFailure,
            "ClientError" => Self::ClientError,
            "FailedOperation" => Self::FailedOperation,
            "InternalError" | "InternalServerError" => Self::InternalError,
            "InvalidParameter" => Self::InvalidParameter,
            "InvalidParameterValue" => Self::InvalidParameterValue,
            "LimitExceeded" => Self::LimitExceeded,
            "MissingParameter" => Self::MissingParameter,
            "ResourceInsufficient" => Self::ResourceInsufficient,
            "ResourceNotFound" => Self::ResourceNotFound,
            "ResourceUnavailable" => Self::ResourceUnavailable,
            "ResourcesSoldOut" => Self::ResourcesSoldOut,
            "UnauthorizedOperation" => Self::UnauthorizedOperation,
            "UnsupportedOperation" => Self::UnsupportedOperation,
            _ => return Err("unrecognized error code category"),
        };
        Ok(category)
    }
}

/// Errors produced while encoding or decoding API payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not valid JSON, or does not match the type's shape.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A request payload carried keys the request type does not declare.
    #[error("{type_name} has unknown keys: {}", .keys.join(", "))]
    UnknownFields { type_name: String, keys: Vec<String> },

    /// The server (or the envelope decoder) reported a classified error.
    #[error(transparent)]
    Api(#[from] SdkError),
}

impl Error {
    /// The classified code for this error.
    pub fn code(&self) -> &str {
        match self {
            Error::Json(_) => PARSE_JSON_ERROR,
            Error::UnknownFields { .. } => BUILD_REQUEST_ERROR,
            Error::Api(e) => &e.code,
        }
    }

    pub fn is_unknown_fields(&self) -> bool {
        matches!(self, Error::UnknownFields { .. })
    }

    /// The server-assigned request ID, if the error came back from the API.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api(e) if !e.request_id.is_empty() => Some(&e.request_id),
            _ => None,
        }
    }
}

impl From<Error> for SdkError {
    fn from(value: Error) -> Self {
        match value {
            Error::Json(e) => SdkError::new(PARSE_JSON_ERROR, e.to_string(), ""),
            Error::UnknownFields { type_name, .. } => SdkError::new(
                BUILD_REQUEST_ERROR,
                format!("{type_name} has unknown keys!"),
                "",
            ),
            Error::Api(e) => e,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_from_code() {
        let cases = [
            ("LimitExceeded.CvmInstanceQuota", ErrorCategory::LimitExceeded),
            ("InvalidParameterValue.Range", ErrorCategory::InvalidParameterValue),
            ("InvalidParameter", ErrorCategory::InvalidParameter),
            ("InternalServerError", ErrorCategory::InternalError),
            (BUILD_REQUEST_ERROR, ErrorCategory::ClientError),
            ("InvalidInstanceId.NotFound", ErrorCategory::Other),
            ("", ErrorCategory::Other),
        ];
        for (code, expected) in cases {
            let err = SdkError::new(code, "", "");
            assert_eq!(err.category(), expected, "code {code}");
        }
    }

    #[test]
    fn sdk_error_display() {
        let err = SdkError::new(
            "InvalidInstanceId.NotFound",
            "instance not found",
            "6c3c3a4e-7d62-4b6c-a0c3-2b1d5a4b8f3e",
        );
        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKError] Code=InvalidInstanceId.NotFound, \
             Message=instance not found, \
             RequestId=6c3c3a4e-7d62-4b6c-a0c3-2b1d5a4b8f3e"
        );
    }

    #[test]
    fn unknown_fields_classification() {
        let err = Error::UnknownFields {
            type_name: "RunInstancesRequest".to_string(),
            keys: vec!["Bogus".to_string(), "Zone".to_string()],
        };
        assert!(err.is_unknown_fields());
        assert_eq!(err.code(), BUILD_REQUEST_ERROR);
        assert_eq!(err.request_id(), None);
        assert_eq!(
            err.to_string(),
            "RunInstancesRequest has unknown keys: Bogus, Zone"
        );

        let sdk: SdkError = err.into();
        assert_eq!(sdk.code, BUILD_REQUEST_ERROR);
        assert_eq!(sdk.message, "RunInstancesRequest has unknown keys!");
        assert_eq!(sdk.category(), ErrorCategory::ClientError);
    }

    #[test]
    fn json_errors_are_parse_errors() {
        let err: Error =
            serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(!err.is_unknown_fields());
        assert_eq!(err.code(), PARSE_JSON_ERROR);
    }
}
