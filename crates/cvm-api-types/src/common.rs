// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types referenced by requests and responses across several product
//! areas: placement, disks, networking, login, tags, filters, billing and
//! pricing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Where an instance (or host, or cluster) is placed.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
    /// Availability zone, e.g. `ap-guangzhou-1`.
    pub zone: Option<String>,
    /// Project to assign the resource to. `0` is the default project.
    pub project_id: Option<i64>,
    /// Dedicated hosts (CDH) to create the instance on.
    pub host_ids: Option<Vec<String>>,
    /// The dedicated host an instance lives on. Only returned.
    pub host_id: Option<String>,
}

/// The system (boot) disk of an instance.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SystemDisk {
    /// `LOCAL_BASIC`, `LOCAL_SSD`, `CLOUD_BASIC`, `CLOUD_SSD`,
    /// `CLOUD_PREMIUM`, `CLOUD_BSSD`, `CLOUD_HSSD` or `CLOUD_TSSD`.
    pub disk_type: Option<String>,
    pub disk_id: Option<String>,
    /// Size in GiB.
    pub disk_size: Option<i64>,
    /// Cloud dedicated cluster the disk belongs to.
    pub cdc_id: Option<String>,
    pub disk_name: Option<String>,
}

/// A data disk attached at creation time, or an existing data disk to
/// resize.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DataDisk {
    /// Size in GiB.
    pub disk_size: Option<i64>,
    pub disk_type: Option<String>,
    pub disk_id: Option<String>,
    /// Whether the disk is released together with the instance. Only
    /// meaningful for pay-as-you-go cloud disks.
    pub delete_with_instance: Option<bool>,
    /// Snapshot to create the disk from.
    pub snapshot_id: Option<String>,
    pub encrypt: Option<bool>,
    /// KMS key used when `encrypt` is set.
    pub kms_key_id: Option<String>,
    /// Extra throughput in MiB/s.
    pub throughput_performance: Option<i64>,
    pub cdc_id: Option<String>,
    pub burst_performance: Option<bool>,
    pub disk_name: Option<String>,
}

/// Public network configuration.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InternetAccessible {
    /// `TRAFFIC_POSTPAID_BY_HOUR`, `BANDWIDTH_POSTPAID_BY_HOUR`,
    /// `BANDWIDTH_PACKAGE` or `BANDWIDTH_PREPAID`.
    pub internet_charge_type: Option<String>,
    /// Outbound bandwidth cap in Mbps. `0` means no public bandwidth.
    pub internet_max_bandwidth_out: Option<i64>,
    pub public_ip_assigned: Option<bool>,
    pub bandwidth_package_id: Option<String>,
    /// `BGP`, `CMCC`, `CTCC`, `CUCC` and so on.
    pub internet_service_provider: Option<String>,
    #[serde(rename = "IPv4AddressType")]
    pub ipv4_address_type: Option<String>,
    #[serde(rename = "IPv6AddressType")]
    pub ipv6_address_type: Option<String>,
    #[serde(rename = "AntiDDoSPackageId")]
    pub anti_ddos_package_id: Option<String>,
}

/// VPC and subnet to attach an instance's primary interface to.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualPrivateCloud {
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    /// Whether the instance acts as a public gateway for the VPC.
    pub as_vpc_gateway: Option<bool>,
    pub private_ip_addresses: Option<Vec<String>>,
    pub ipv6_address_count: Option<u64>,
}

/// How users log into a new or reinstalled instance. At most one of
/// `password`, `key_ids` and `keep_image_login` should be set.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LoginSettings {
    pub password: Option<String>,
    pub key_ids: Option<Vec<String>>,
    /// `"TRUE"` keeps the login settings baked into a custom image.
    pub keep_image_login: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EnhancedService {
    pub security_service: Option<RunSecurityServiceEnabled>,
    pub monitor_service: Option<RunMonitorServiceEnabled>,
    pub automation_service: Option<RunAutomationServiceEnabled>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunSecurityServiceEnabled {
    pub enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunMonitorServiceEnabled {
    pub enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunAutomationServiceEnabled {
    pub enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: Some(key.into()), value: Some(value.into()) }
    }
}

/// Tags to bind to the resources of one type created by a request.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TagSpecification {
    /// `instance`, `host`, `image`, `keypair`, `ps` (placement group) or
    /// `hpc`.
    pub resource_type: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

/// A `Describe*` filter. Values within one filter are ORed; separate filters
/// are ANDed.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

impl Filter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// Billing period of a monthly-subscription instance.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceChargePrepaid {
    /// Months: 1-12, 24, 36, 48 or 60.
    pub period: Option<i64>,
    /// `NOTIFY_AND_AUTO_RENEW`, `NOTIFY_AND_MANUAL_RENEW` or
    /// `DISABLE_NOTIFY_AND_MANUAL_RENEW`.
    pub renew_flag: Option<String>,
}

/// Billing period of a monthly-subscription dedicated host.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChargePrepaid {
    pub period: Option<u64>,
    pub renew_flag: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMarketOptionsRequest {
    pub spot_options: Option<SpotMarketOptions>,
    /// Only `spot` is accepted.
    pub market_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SpotMarketOptions {
    /// Bid price, as a decimal string.
    pub max_price: Option<String>,
    /// Only `one-time` is accepted.
    pub spot_instance_type: Option<String>,
}

/// A scheduled action on instances created by a request.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ActionTimer {
    /// Only `TerminateInstances` is accepted.
    pub timer_action: Option<String>,
    /// `YYYY-MM-DDThh:mm:ssZ`, UTC.
    pub action_time: Option<String>,
    pub externals: Option<Externals>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Externals {
    pub release_address: Option<bool>,
    pub unsupport_networks: Option<Vec<String>>,
    pub storage_block_attr: Option<StorageBlock>,
}

/// Local HDD storage block attributes.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StorageBlock {
    pub r#type: Option<String>,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
}

/// The result of a price inquiry.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    pub instance_price: Option<ItemPrice>,
    pub bandwidth_price: Option<ItemPrice>,
}

/// Price of one billable item. Which fields are present depends on the
/// billing mode: prepaid items carry `original_price`/`discount_price`,
/// pay-as-you-go items carry `unit_price` and its tiers.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPrice {
    pub unit_price: Option<f64>,
    /// `HOUR` or `GB`.
    pub charge_unit: Option<String>,
    pub original_price: Option<f64>,
    pub discount_price: Option<f64>,
    /// Percent, e.g. `20.0` for a 20% rate.
    pub discount: Option<f64>,
    pub unit_price_discount: Option<f64>,
    pub unit_price_second_step: Option<f64>,
    pub unit_price_discount_second_step: Option<f64>,
    pub unit_price_third_step: Option<f64>,
    pub unit_price_discount_third_step: Option<f64>,
    pub original_price_three_year: Option<f64>,
    pub discount_price_three_year: Option<f64>,
    pub discount_three_year: Option<f64>,
    pub original_price_five_year: Option<f64>,
    pub discount_price_five_year: Option<f64>,
    pub discount_five_year: Option<f64>,
    pub original_price_one_year: Option<f64>,
    pub discount_price_one_year: Option<f64>,
    pub discount_one_year: Option<f64>,
}

/// Custom instance metadata.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    pub items: Option<Vec<MetadataItem>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataItem {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CpuTopology {
    pub core_count: Option<i64>,
    pub thread_per_core: Option<i64>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn unset_fields_produce_no_tokens() {
        let placement = Placement {
            zone: Some("ap-guangzhou-1".to_string()),
            ..Default::default()
        };
        assert_ser_tokens(
            &placement,
            &[
                Token::Struct { name: "Placement", len: 1 },
                Token::Str("Zone"),
                Token::Some,
                Token::Str("ap-guangzhou-1"),
                Token::StructEnd,
            ],
        );
        assert_ser_tokens(
            &Placement::default(),
            &[Token::Struct { name: "Placement", len: 0 }, Token::StructEnd],
        );
    }

    #[test]
    fn zero_values_are_not_unset() {
        let disk = DataDisk {
            disk_size: Some(0),
            delete_with_instance: Some(false),
            disk_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&disk).unwrap(),
            r#"{"DiskSize":0,"DeleteWithInstance":false,"DiskName":""}"#
        );
    }

    #[test]
    fn acronym_wire_names() {
        let net = InternetAccessible {
            ipv4_address_type: Some("WanIP".to_string()),
            ipv6_address_type: Some("EIPv6".to_string()),
            anti_ddos_package_id: Some("bgp-12345678".to_string()),
            ..Default::default()
        };
        let v = serde_json::to_value(&net).unwrap();
        assert_eq!(v["IPv4AddressType"], "WanIP");
        assert_eq!(v["IPv6AddressType"], "EIPv6");
        assert_eq!(v["AntiDDoSPackageId"], "bgp-12345678");

        let block = StorageBlock {
            r#type: Some("LOCAL_PRO".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r#"{"Type":"LOCAL_PRO"}"#
        );
    }

    #[test]
    fn filter_helper() {
        let filter = Filter::new("zone", ["ap-guangzhou-3", "ap-guangzhou-4"]);
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"Name":"zone","Values":["ap-guangzhou-3","ap-guangzhou-4"]}"#
        );
    }
}
