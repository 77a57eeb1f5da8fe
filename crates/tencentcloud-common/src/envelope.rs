// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `{"Response": {...}}` wrapper around every API reply.
//!
//! A successful reply carries the action's response fields and a `RequestId`
//! inside `Response`. A failed reply carries an `Error` object instead:
//!
//! ```text
//! {"Response": {"Error": {"Code": "...", "Message": "..."}, "RequestId": "..."}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::ApiResponse;
use crate::error::{Error, SdkError, PARSE_JSON_ERROR};

/// A reply as it appears on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<R> {
    #[serde(rename = "Response")]
    pub response: R,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorReply {
    error: Option<ErrorBody>,
    #[serde(default)]
    request_id: String,
}

/// Unwraps a reply body into the action's response type.
///
/// Error replies become [`Error::Api`] carrying the server's code, message
/// and request ID. A body without a `Response` object is reported as
/// `ClientError.ParseJsonError`.
pub fn decode_response<R: ApiResponse>(body: &str) -> Result<R, Error> {
    let mut reply: Value = serde_json::from_str(body)?;
    let response = match reply.get_mut("Response") {
        Some(response) if response.is_object() => response.take(),
        _ => {
            return Err(SdkError::new(
                PARSE_JSON_ERROR,
                "reply has no `Response` object",
                "",
            )
            .into());
        }
    };

    let failure = ErrorReply::deserialize(&response)?;
    if let Some(error) = failure.error.filter(|e| !e.code.is_empty()) {
        return Err(SdkError::new(error.code, error.message, failure.request_id)
            .into());
    }

    Ok(serde_json::from_value(response)?)
}

/// Wraps `response` the way the server would.
pub fn encode_response<R: ApiResponse>(response: &R) -> String {
    serde_json::to_string(&Envelope { response }).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorCategory;
    use schemars::JsonSchema;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "PascalCase")]
    struct DescribeThingsResponse {
        #[serde(skip_serializing_if = "Option::is_none")]
        total_count: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl ApiResponse for DescribeThingsResponse {}

    #[test]
    fn decode_success() {
        let body = r#"{
            "Response": {
                "TotalCount": 3,
                "AddedLater": [1, 2, 3],
                "RequestId": "b5b41468-520d-4192-b42f-595cc34b6c1c"
            }
        }"#;
        let resp: DescribeThingsResponse = decode_response(body).unwrap();
        assert_eq!(resp.total_count, Some(3));
        assert_eq!(
            resp.request_id.as_deref(),
            Some("b5b41468-520d-4192-b42f-595cc34b6c1c")
        );
    }

    #[test]
    fn decode_error_reply() {
        let body = r#"{
            "Response": {
                "Error": {
                    "Code": "LimitExceeded.CvmInstanceQuota",
                    "Message": "quota exhausted"
                },
                "RequestId": "req-42"
            }
        }"#;
        let err = decode_response::<DescribeThingsResponse>(body).unwrap_err();
        assert_eq!(err.code(), "LimitExceeded.CvmInstanceQuota");
        assert_eq!(err.request_id(), Some("req-42"));
        match err {
            Error::Api(sdk) => {
                assert_eq!(sdk.message, "quota exhausted");
                assert_eq!(sdk.category(), ErrorCategory::LimitExceeded);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_missing_envelope() {
        for body in [r#"{"TotalCount": 1}"#, r#"{"Response": 7}"#, "[]"] {
            let err =
                decode_response::<DescribeThingsResponse>(body).unwrap_err();
            assert_eq!(err.code(), PARSE_JSON_ERROR, "body {body}");
            assert!(matches!(err, Error::Api(_)));
        }

        let err = decode_response::<DescribeThingsResponse>("not json")
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn encode_then_decode() {
        let resp = DescribeThingsResponse {
            total_count: Some(0),
            request_id: Some("req-7".to_string()),
        };
        let body = encode_response(&resp);
        assert_eq!(body, r#"{"Response":{"TotalCount":0,"RequestId":"req-7"}}"#);
        assert_eq!(decode_response::<DescribeThingsResponse>(&body).unwrap(), resp);
    }
}
