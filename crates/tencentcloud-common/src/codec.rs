// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON encoding and decoding of API payloads.
//!
//! Requests and responses share an encoder but decode differently:
//!
//! - Request payloads form a closed schema. Before a payload is decoded, its
//!   top-level keys are checked against the wire names the request type
//!   declares, and any extra key fails the decode with
//!   [`Error::UnknownFields`]. This catches misspelled parameters before the
//!   request leaves the process.
//! - Response payloads form an open schema: keys the type does not know about
//!   are ignored so that older clients keep working when the server starts
//!   returning new fields.
//!
//! The set of wire names for a type is read from its derived JSON schema, so
//! it always agrees with the serde attributes on the type.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// The top-level wire names declared by `T`.
pub fn wire_names<T: JsonSchema>() -> BTreeSet<String> {
    let root = schemars::schema_for!(T);
    root.schema
        .object
        .map(|obj| obj.properties.keys().cloned().collect())
        .unwrap_or_default()
}

/// Encodes `value` as compact JSON. Unset (`None`) fields are omitted by the
/// types themselves.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes `s` into `T`, first rejecting any top-level key `T` does not
/// declare.
pub fn from_json_string_checked<T>(s: &str) -> Result<T, Error>
where
    T: DeserializeOwned + JsonSchema,
{
    let mut fields: Map<String, Value> = serde_json::from_str(s)?;
    for name in wire_names::<T>() {
        fields.remove(&name);
    }
    if !fields.is_empty() {
        return Err(Error::UnknownFields {
            type_name: T::schema_name(),
            keys: fields.keys().cloned().collect(),
        });
    }
    Ok(serde_json::from_str(s)?)
}

/// Decodes `s` into `T`, ignoring keys `T` does not declare.
pub fn from_json_string_lenient<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    Ok(serde_json::from_str(s)?)
}

/// The parameters of one API action.
pub trait ApiRequest: Serialize + DeserializeOwned + JsonSchema {
    /// Encodes the request. An encoding failure yields an empty string; use
    /// [`ApiRequest::try_to_json_string`] to observe it.
    fn to_json_string(&self) -> String {
        self.try_to_json_string().unwrap_or_default()
    }

    fn try_to_json_string(&self) -> Result<String, Error> {
        to_json_string(self)
    }

    /// Decodes a request, rejecting undeclared top-level keys.
    fn from_json_string(s: &str) -> Result<Self, Error> {
        from_json_string_checked(s)
    }
}

/// The reply parameters of one API action, i.e. the contents of the
/// `Response` object.
pub trait ApiResponse: Serialize + DeserializeOwned + JsonSchema {
    /// Encodes the response. An encoding failure yields an empty string; use
    /// [`ApiResponse::try_to_json_string`] to observe it.
    fn to_json_string(&self) -> String {
        self.try_to_json_string().unwrap_or_default()
    }

    fn try_to_json_string(&self) -> Result<String, Error> {
        to_json_string(self)
    }

    fn from_json_string(s: &str) -> Result<Self, Error> {
        from_json_string_lenient(s)
    }
}

/// Binds a request type to the remote action it invokes.
pub trait Action: ApiRequest {
    /// Service name, which is also the endpoint's first label (`cvm`).
    const SERVICE: &'static str;
    /// API version, e.g. `2017-03-12`.
    const VERSION: &'static str;
    /// Action name, e.g. `RunInstances`.
    const ACTION: &'static str;

    type Response: ApiResponse;
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "PascalCase")]
    struct ResizeRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        instance_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        disk_size: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none", rename = "CPU")]
        cpu: Option<i64>,
    }

    impl ApiRequest for ResizeRequest {}

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "PascalCase")]
    struct ResizeResponse {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl ApiResponse for ResizeResponse {}

    #[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
    struct NoParams {}

    impl ApiRequest for NoParams {}

    #[test]
    fn wire_names_follow_serde_renames() {
        let names = wire_names::<ResizeRequest>();
        let expected: BTreeSet<String> = ["CPU", "DiskSize", "InstanceId"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, expected);
        assert!(wire_names::<NoParams>().is_empty());
    }

    #[test]
    fn request_rejects_unknown_keys() {
        let err = ResizeRequest::from_json_string(
            r#"{"InstanceId": "ins-1", "Bogus": 1, "Another": null}"#,
        )
        .unwrap_err();
        match err {
            Error::UnknownFields { type_name, keys } => {
                assert_eq!(type_name, "ResizeRequest");
                assert_eq!(keys, vec!["Another", "Bogus"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let req =
            ResizeRequest::from_json_string(r#"{"InstanceId": "ins-1"}"#)
                .unwrap();
        assert_eq!(req.instance_id.as_deref(), Some("ins-1"));
        assert_eq!(req.disk_size, None);
    }

    #[test]
    fn request_type_mismatch_is_a_parse_error() {
        let err = ResizeRequest::from_json_string(r#"{"DiskSize": "big"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = ResizeRequest::from_json_string("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = ResizeRequest::from_json_string("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn response_ignores_unknown_keys() {
        let resp = ResizeResponse::from_json_string(
            r#"{"RequestId": "req-1", "NewField": {"x": 1}}"#,
        )
        .unwrap();
        assert_eq!(resp.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn unset_fields_are_omitted() {
        assert_eq!(ResizeRequest::default().to_json_string(), "{}");
        let req = ResizeRequest {
            disk_size: Some(0),
            cpu: Some(4),
            ..Default::default()
        };
        assert_eq!(req.to_json_string(), r#"{"DiskSize":0,"CPU":4}"#);
        assert_eq!(ResizeRequest::from_json_string(&req.to_json_string()).unwrap(), req);
    }

    #[test]
    fn empty_requests() {
        assert_eq!(NoParams::default().to_json_string(), "{}");
        assert!(NoParams::from_json_string("{}").is_ok());
        assert!(NoParams::from_json_string(r#"{"Limit": 1}"#)
            .unwrap_err()
            .is_unknown_fields());
    }
}
