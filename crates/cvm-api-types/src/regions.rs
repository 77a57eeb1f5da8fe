// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Regions, zones, instance type catalogs and account quotas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Externals, Filter, ItemPrice};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegionInfo {
    /// e.g. `ap-guangzhou`.
    pub region: Option<String>,
    pub region_name: Option<String>,
    /// `AVAILABLE` or `UNAVAILABLE`.
    pub region_state: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneInfo {
    /// e.g. `ap-guangzhou-3`.
    pub zone: Option<String>,
    pub zone_name: Option<String>,
    /// Numeric zone ID, as a string.
    pub zone_id: Option<String>,
    pub zone_state: Option<String>,
}

/// One sellable configuration in a zone.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeQuotaItem {
    pub zone: Option<String>,
    pub instance_type: Option<String>,
    pub instance_charge_type: Option<String>,
    pub network_card: Option<i64>,
    pub externals: Option<Externals>,
    pub cpu: Option<i64>,
    pub memory: Option<i64>,
    pub instance_family: Option<String>,
    pub type_name: Option<String>,
    pub local_disk_type_list: Option<Vec<LocalDiskType>>,
    /// `SELL`, `SOLD_OUT` or `UNAVAILABLE`.
    pub status: Option<String>,
    pub price: Option<ItemPrice>,
    pub sold_out_reason: Option<String>,
    pub instance_bandwidth: Option<f64>,
    pub instance_pps: Option<i64>,
    pub storage_block_amount: Option<i64>,
    pub cpu_type: Option<String>,
    pub gpu: Option<i64>,
    pub fpga: Option<i64>,
    pub remark: Option<String>,
    pub gpu_count: Option<f64>,
    pub frequency: Option<String>,
    pub status_category: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LocalDiskType {
    pub r#type: Option<String>,
    pub partition_type: Option<String>,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    /// `REQUIRED` or `OPTIONAL`.
    pub required: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceFamilyConfig {
    pub instance_family_name: Option<String>,
    pub instance_family: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeConfig {
    pub zone: Option<String>,
    pub instance_type: Option<String>,
    pub instance_family: Option<String>,
    #[serde(rename = "GPU")]
    pub gpu: Option<i64>,
    #[serde(rename = "CPU")]
    pub cpu: Option<i64>,
    pub memory: Option<i64>,
    #[serde(rename = "FPGA")]
    pub fpga: Option<i64>,
    pub gpu_count: Option<f64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InternetChargeTypeConfig {
    pub internet_charge_type: Option<String>,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AccountQuotaOverview {
    pub region: Option<String>,
    pub account_quota: Option<AccountQuota>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AccountQuota {
    pub post_paid_quota_set: Option<Vec<PostPaidQuota>>,
    pub pre_paid_quota_set: Option<Vec<PrePaidQuota>>,
    pub spot_paid_quota_set: Option<Vec<SpotPaidQuota>>,
    pub image_quota_set: Option<Vec<ImageQuota>>,
    pub disaster_recover_group_quota_set: Option<Vec<DisasterRecoverGroupQuota>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PostPaidQuota {
    pub used_quota: Option<u64>,
    pub remaining_quota: Option<u64>,
    pub total_quota: Option<u64>,
    pub zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PrePaidQuota {
    pub used_quota: Option<u64>,
    pub once_quota: Option<u64>,
    pub remaining_quota: Option<u64>,
    pub total_quota: Option<u64>,
    pub zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SpotPaidQuota {
    pub used_quota: Option<u64>,
    pub remaining_quota: Option<u64>,
    pub total_quota: Option<u64>,
    pub zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImageQuota {
    pub used_quota: Option<u64>,
    pub total_quota: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DisasterRecoverGroupQuota {
    pub group_quota: Option<i64>,
    pub current_num: Option<i64>,
    pub cvm_in_host_group_quota: Option<i64>,
    pub cvm_in_switch_group_quota: Option<i64>,
    pub cvm_in_rack_group_quota: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeRegionsRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionsResponse {
    pub total_count: Option<u64>,
    pub region_set: Option<Vec<RegionInfo>>,
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeZonesRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    pub total_count: Option<u64>,
    pub zone_set: Option<Vec<ZoneInfo>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosRequest {
    /// Accepts `zone`, `instance-family`, `instance-type`,
    /// `instance-charge-type` and `sort-keys`.
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosResponse {
    pub instance_type_quota_set: Option<Vec<InstanceTypeQuotaItem>>,
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeInstanceFamilyConfigsRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceFamilyConfigsResponse {
    pub instance_family_config_set: Option<Vec<InstanceFamilyConfig>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsRequest {
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsResponse {
    pub instance_type_config_set: Option<Vec<InstanceTypeConfig>>,
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeInternetChargeTypeConfigsRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInternetChargeTypeConfigsResponse {
    pub internet_charge_type_config_set: Option<Vec<InternetChargeTypeConfig>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAccountQuotaRequest {
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAccountQuotaResponse {
    pub app_id: Option<String>,
    pub account_quota_overview: Option<AccountQuotaOverview>,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn parameterless_requests() {
        assert_eq!(DescribeRegionsRequest {}.to_json_string(), "{}");
        assert!(DescribeZonesRequest::from_json_string("{}").is_ok());

        let err = DescribeRegionsRequest::from_json_string(r#"{"Region": "x"}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "DescribeRegionsRequest has unknown keys: Region"
        );
    }

    #[test]
    fn instance_type_config_acronyms() {
        let json = r#"{
            "InstanceTypeConfigSet": [{
                "Zone": "ap-guangzhou-3",
                "InstanceType": "GN7.2XLARGE32",
                "InstanceFamily": "GN7",
                "GPU": 1,
                "CPU": 8,
                "Memory": 32,
                "FPGA": 0,
                "GpuCount": 1.0
            }],
            "RequestId": "req-9"
        }"#;
        let resp =
            DescribeInstanceTypeConfigsResponse::from_json_string(json).unwrap();
        let cfg = &resp.instance_type_config_set.unwrap()[0];
        assert_eq!(cfg.gpu, Some(1));
        assert_eq!(cfg.cpu, Some(8));
        assert_eq!(cfg.fpga, Some(0));
        assert_eq!(cfg.gpu_count, Some(1.0));
    }

    #[test]
    fn zone_config_price_and_local_disks() {
        let json = r#"{
            "InstanceTypeQuotaSet": [{
                "Zone": "ap-guangzhou-3",
                "InstanceType": "IT5.4XLARGE64",
                "Cpu": 16,
                "Status": "SELL",
                "Price": {"UnitPrice": 3.36, "ChargeUnit": "HOUR"},
                "LocalDiskTypeList": [{
                    "Type": "LOCAL_NVME",
                    "PartitionType": "DATA",
                    "MinSize": 3570,
                    "MaxSize": 3570,
                    "Required": "REQUIRED"
                }]
            }]
        }"#;
        let resp =
            DescribeZoneInstanceConfigInfosResponse::from_json_string(json)
                .unwrap();
        let item = &resp.instance_type_quota_set.unwrap()[0];
        assert_eq!(item.cpu, Some(16));
        assert_eq!(item.price.as_ref().unwrap().unit_price, Some(3.36));
        let disk = &item.local_disk_type_list.as_ref().unwrap()[0];
        assert_eq!(disk.r#type.as_deref(), Some("LOCAL_NVME"));
        assert_eq!(disk.required.as_deref(), Some("REQUIRED"));
    }
}
