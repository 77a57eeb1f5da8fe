// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dedicated hosts (CDH).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{ChargePrepaid, Filter, Placement, Price, Tag, TagSpecification};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HostItem {
    pub placement: Option<Placement>,
    pub host_id: Option<String>,
    pub host_type: Option<String>,
    pub host_name: Option<String>,
    pub host_charge_type: Option<String>,
    pub renew_flag: Option<String>,
    pub created_time: Option<String>,
    pub expired_time: Option<String>,
    /// Instances placed on this host.
    pub instance_ids: Option<Vec<String>>,
    pub host_state: Option<String>,
    pub host_ip: Option<String>,
    pub host_resource: Option<HostResource>,
    pub cage_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

/// Capacity and usage of a dedicated host.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HostResource {
    pub cpu_total: Option<u64>,
    pub cpu_available: Option<u64>,
    /// GiB.
    pub mem_total: Option<f64>,
    pub mem_available: Option<f64>,
    pub disk_total: Option<u64>,
    pub disk_available: Option<u64>,
    pub disk_type: Option<String>,
    pub gpu_total: Option<u64>,
    pub gpu_available: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AllocateHostsRequest {
    pub placement: Option<Placement>,
    pub client_token: Option<String>,
    pub host_charge_prepaid: Option<ChargePrepaid>,
    /// Only `PREPAID` is accepted.
    pub host_charge_type: Option<String>,
    pub host_type: Option<String>,
    pub host_count: Option<u64>,
    pub tag_specification: Option<Vec<TagSpecification>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AllocateHostsResponse {
    pub host_id_set: Option<Vec<String>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHostsRequest {
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHostsResponse {
    pub total_count: Option<u64>,
    pub host_set: Option<Vec<HostItem>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHostsAttributeRequest {
    pub host_ids: Option<Vec<String>>,
    pub host_name: Option<String>,
    pub renew_flag: Option<String>,
    pub project_id: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHostsAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRenewHostsRequest {
    pub host_ids: Option<Vec<String>>,
    pub host_charge_prepaid: Option<ChargePrepaid>,
    pub dry_run: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRenewHostsResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RenewHostsRequest {
    pub host_ids: Option<Vec<String>>,
    pub host_charge_prepaid: Option<ChargePrepaid>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RenewHostsResponse {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn allocate_hosts_request() {
        let req = AllocateHostsRequest {
            placement: Some(Placement {
                zone: Some("ap-guangzhou-4".to_string()),
                project_id: Some(0),
                ..Default::default()
            }),
            host_charge_type: Some("PREPAID".to_string()),
            host_charge_prepaid: Some(ChargePrepaid {
                period: Some(1),
                renew_flag: Some("NOTIFY_AND_AUTO_RENEW".to_string()),
            }),
            host_type: Some("HS1".to_string()),
            ..Default::default()
        };
        let json = req.to_json_string();
        assert_eq!(
            json,
            r#"{"Placement":{"Zone":"ap-guangzhou-4","ProjectId":0},"HostChargePrepaid":{"Period":1,"RenewFlag":"NOTIFY_AND_AUTO_RENEW"},"HostChargeType":"PREPAID","HostType":"HS1"}"#
        );
        assert_eq!(AllocateHostsRequest::from_json_string(&json).unwrap(), req);
    }

    #[test]
    fn host_resource_usage() {
        let json = r#"{
            "TotalCount": 1,
            "HostSet": [{
                "HostId": "host-ey16rkyg",
                "HostIp": "10.0.0.1",
                "InstanceIds": ["ins-1", "ins-2"],
                "HostResource": {
                    "CpuTotal": 56, "CpuAvailable": 48,
                    "MemTotal": 224.0, "MemAvailable": 192.5,
                    "DiskTotal": 0, "DiskAvailable": 0,
                    "DiskType": "LOCAL_BASIC"
                }
            }]
        }"#;
        let resp = DescribeHostsResponse::from_json_string(json).unwrap();
        let host = &resp.host_set.unwrap()[0];
        assert_eq!(host.host_ip.as_deref(), Some("10.0.0.1"));
        let res = host.host_resource.as_ref().unwrap();
        assert_eq!(res.cpu_available, Some(48));
        assert_eq!(res.mem_available, Some(192.5));
        assert_eq!(res.gpu_total, None);
    }
}
