// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spread placement ("disaster recover") groups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::Tag;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DisasterRecoverGroup {
    pub disaster_recover_group_id: Option<String>,
    pub name: Option<String>,
    /// `HOST`, `SW` or `RACK`.
    pub r#type: Option<String>,
    pub cvm_quota_total: Option<i64>,
    pub current_num: Option<i64>,
    pub instance_ids: Option<Vec<String>>,
    pub create_time: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupRequest {
    pub name: Option<String>,
    /// Spread across physical hosts (`HOST`), switches (`SW`) or racks
    /// (`RACK`).
    pub r#type: Option<String>,
    pub client_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupResponse {
    pub disaster_recover_group_id: Option<String>,
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub cvm_quota_total: Option<i64>,
    pub current_num: Option<i64>,
    pub create_time: Option<String>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsRequest {
    pub disaster_recover_group_ids: Option<Vec<String>>,
    /// Fuzzy match on the group name.
    pub name: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsResponse {
    pub disaster_recover_group_set: Option<Vec<DisasterRecoverGroup>>,
    pub total_count: Option<i64>,
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeDisasterRecoverGroupQuotaRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupQuotaResponse {
    pub group_quota: Option<i64>,
    pub current_num: Option<i64>,
    pub cvm_in_host_group_quota: Option<i64>,
    pub cvm_in_sw_group_quota: Option<i64>,
    pub cvm_in_rack_group_quota: Option<i64>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDisasterRecoverGroupsRequest {
    /// Groups must be empty.
    pub disaster_recover_group_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDisasterRecoverGroupsResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDisasterRecoverGroupAttributeRequest {
    pub disaster_recover_group_id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDisasterRecoverGroupAttributeResponse {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn create_group_round_trip() {
        let req = CreateDisasterRecoverGroupRequest {
            name: Some("test-group".to_string()),
            r#type: Some("HOST".to_string()),
            ..Default::default()
        };
        let json = req.to_json_string();
        assert_eq!(json, r#"{"Name":"test-group","Type":"HOST"}"#);

        let decoded =
            CreateDisasterRecoverGroupRequest::from_json_string(&json).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn create_group_rejects_bogus_key() {
        let err = CreateDisasterRecoverGroupRequest::from_json_string(
            r#"{"Name": "test-group", "Bogus": 1}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "CreateDisasterRecoverGroupRequest has unknown keys: Bogus"
        );
        assert!(CreateDisasterRecoverGroupRequest::from_json_string(
            r#"{"Name": "test-group"}"#
        )
        .is_ok());
    }

    #[test]
    fn quota_response() {
        let resp = DescribeDisasterRecoverGroupQuotaResponse::from_json_string(
            r#"{"GroupQuota": 10, "CurrentNum": 2, "CvmInHostGroupQuota": 50,
                "CvmInSwGroupQuota": 20, "CvmInRackGroupQuota": 20,
                "RequestId": "req-q"}"#,
        )
        .unwrap();
        assert_eq!(resp.group_quota, Some(10));
        assert_eq!(resp.cvm_in_sw_group_quota, Some(20));
    }
}
