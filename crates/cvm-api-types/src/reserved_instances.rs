// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reserved instances: offerings, purchases and pricing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::Filter;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstances {
    pub reserved_instances_id: Option<String>,
    pub instance_type: Option<String>,
    pub zone: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Term in seconds.
    pub duration: Option<i64>,
    pub instance_count: Option<i64>,
    pub product_description: Option<String>,
    /// `active`, `pending` or `retired`.
    pub state: Option<String>,
    pub currency_code: Option<String>,
    /// `All Upfront`, `Partial Upfront` or `No Upfront`.
    pub offering_type: Option<String>,
    pub instance_family: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstancesOffering {
    pub zone: Option<String>,
    pub currency_code: Option<String>,
    pub duration: Option<i64>,
    pub fixed_price: Option<f64>,
    pub instance_type: Option<String>,
    pub offering_type: Option<String>,
    pub reserved_instances_offering_id: Option<String>,
    pub product_description: Option<String>,
    pub usage_price: Option<f64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstancePrice {
    pub original_fixed_price: Option<f64>,
    pub discount_fixed_price: Option<f64>,
    pub original_usage_price: Option<f64>,
    pub discount_usage_price: Option<f64>,
}

/// Top of the reserved-instance configuration tree: instance family, then
/// instance type, then price per zone and term.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstanceConfigInfoItem {
    pub r#type: Option<String>,
    pub type_name: Option<String>,
    pub order: Option<i64>,
    pub instance_family: Option<Vec<ReservedInstanceFamilyItem>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstanceFamilyItem {
    pub instance_family: Option<String>,
    pub order: Option<i64>,
    pub instance_types: Option<Vec<ReservedInstanceTypeItem>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstanceTypeItem {
    pub instance_type: Option<String>,
    pub cpu: Option<u64>,
    pub memory: Option<u64>,
    pub gpu: Option<u64>,
    pub fpga: Option<u64>,
    pub storage_block: Option<u64>,
    pub network_card: Option<u64>,
    pub max_bandwidth: Option<f64>,
    pub frequency: Option<String>,
    pub cpu_model_name: Option<String>,
    pub pps: Option<u64>,
    pub externals: Option<ReservedInstanceExternals>,
    pub remark: Option<String>,
    pub prices: Option<Vec<ReservedInstancePriceItem>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstanceExternals {
    pub release_address: Option<bool>,
    pub unsupport_networks: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstancePriceItem {
    pub offering_type: Option<String>,
    pub fixed_price: Option<f64>,
    pub usage_price: Option<f64>,
    pub reserved_instances_offering_id: Option<String>,
    pub zone: Option<String>,
    pub duration: Option<u64>,
    pub product_description: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesRequest {
    pub dry_run: Option<bool>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesResponse {
    pub total_count: Option<i64>,
    pub reserved_instances_set: Option<Vec<ReservedInstances>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsRequest {
    pub dry_run: Option<bool>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Seconds.
    pub max_duration: Option<i64>,
    pub min_duration: Option<i64>,
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsResponse {
    pub total_count: Option<i64>,
    pub reserved_instances_offerings_set: Option<Vec<ReservedInstancesOffering>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesConfigInfosRequest {
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesConfigInfosResponse {
    pub reserved_instance_config_infos: Option<Vec<ReservedInstanceConfigInfoItem>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingRequest {
    pub instance_count: Option<i64>,
    pub reserved_instances_offering_id: Option<String>,
    pub dry_run: Option<bool>,
    pub client_token: Option<String>,
    pub reserved_instance_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingResponse {
    pub reserved_instance_id: Option<String>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquirePricePurchaseReservedInstancesOfferingRequest {
    pub instance_count: Option<u64>,
    pub reserved_instances_offering_id: Option<String>,
    pub dry_run: Option<bool>,
    pub client_token: Option<String>,
    pub reserved_instance_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquirePricePurchaseReservedInstancesOfferingResponse {
    pub price: Option<ReservedInstancePrice>,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::ApiResponse;

    #[test]
    fn config_info_tree() {
        let json = r#"{
            "ReservedInstanceConfigInfos": [{
                "Type": "S",
                "TypeName": "Standard",
                "Order": 1,
                "InstanceFamily": [{
                    "InstanceFamily": "S5",
                    "Order": 1,
                    "InstanceTypes": [{
                        "InstanceType": "S5.LARGE8",
                        "Cpu": 4,
                        "Memory": 8,
                        "Gpu": 0,
                        "Prices": [{
                            "OfferingType": "All Upfront",
                            "FixedPrice": 4096.0,
                            "UsagePrice": 0.0,
                            "Zone": "ap-guangzhou-3",
                            "Duration": 31536000
                        }]
                    }]
                }]
            }],
            "RequestId": "req-ri"
        }"#;
        let resp =
            DescribeReservedInstancesConfigInfosResponse::from_json_string(json)
                .unwrap();
        let item = &resp.reserved_instance_config_infos.unwrap()[0];
        assert_eq!(item.r#type.as_deref(), Some("S"));
        let family = &item.instance_family.as_ref().unwrap()[0];
        let ty = &family.instance_types.as_ref().unwrap()[0];
        assert_eq!(ty.cpu, Some(4));
        assert_eq!(ty.gpu, Some(0));
        let price = &ty.prices.as_ref().unwrap()[0];
        assert_eq!(price.duration, Some(31_536_000));
        assert_eq!(price.fixed_price, Some(4096.0));
    }
}
