// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instance lifecycle: creation, queries, power state, reconfiguration,
//! billing changes, price inquiries and rescue mode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{
    ActionTimer, CpuTopology, DataDisk, EnhancedService, Filter,
    InstanceChargePrepaid, InstanceMarketOptionsRequest, InternetAccessible,
    ItemPrice, LoginSettings, Metadata, Placement, Price, SystemDisk, Tag,
    TagSpecification, VirtualPrivateCloud,
};
use crate::launch_templates::LaunchTemplate;
use crate::regions::InstanceTypeConfig;

/// An instance as returned by `DescribeInstances`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub placement: Option<Placement>,
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    /// vCPU count.
    #[serde(rename = "CPU")]
    pub cpu: Option<i64>,
    /// Memory in GiB.
    pub memory: Option<i64>,
    /// `NORMAL`, `EXPIRED` or `PROTECTIVELY_ISOLATED`.
    pub restrict_state: Option<String>,
    pub instance_name: Option<String>,
    pub instance_charge_type: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub private_ip_addresses: Option<Vec<String>>,
    pub public_ip_addresses: Option<Vec<String>>,
    pub internet_accessible: Option<InternetAccessible>,
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub image_id: Option<String>,
    pub renew_flag: Option<String>,
    pub created_time: Option<String>,
    pub expired_time: Option<String>,
    pub os_name: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    pub login_settings: Option<LoginSettings>,
    /// `PENDING`, `LAUNCH_FAILED`, `RUNNING`, `STOPPED`, `STARTING`,
    /// `STOPPING`, `REBOOTING`, `SHUTDOWN`, `TERMINATING`.
    pub instance_state: Option<String>,
    pub tags: Option<Vec<Tag>>,
    /// `KEEP_CHARGING`, `STOP_CHARGING` or `NOT_APPLICABLE`.
    pub stop_charging_mode: Option<String>,
    pub uuid: Option<String>,
    pub latest_operation: Option<String>,
    pub latest_operation_state: Option<String>,
    pub latest_operation_request_id: Option<String>,
    pub disaster_recover_group_id: Option<String>,
    #[serde(rename = "IPv6Addresses")]
    pub ipv6_addresses: Option<Vec<String>>,
    pub cam_role_name: Option<String>,
    pub hpc_cluster_id: Option<String>,
    pub rdma_ip_addresses: Option<Vec<String>>,
    pub dedicated_cluster_id: Option<String>,
    /// `ARREAR`, `EXPIRE`, `MANMADE` or `NOTISOLATED`.
    pub isolated_source: Option<String>,
    #[serde(rename = "GPUInfo")]
    pub gpu_info: Option<GpuInfo>,
    pub license_type: Option<String>,
    pub disable_api_termination: Option<bool>,
    pub default_login_user: Option<String>,
    pub default_login_port: Option<i64>,
    pub latest_operation_error_msg: Option<String>,
    pub metadata: Option<Metadata>,
    #[serde(rename = "PublicIPv6Addresses")]
    pub public_ipv6_addresses: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GpuInfo {
    /// Fractional for vGPU instances.
    #[serde(rename = "GPUCount")]
    pub gpu_count: Option<f64>,
    #[serde(rename = "GPUId")]
    pub gpu_id: Option<Vec<String>>,
    #[serde(rename = "GPUType")]
    pub gpu_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStatus {
    pub instance_id: Option<String>,
    pub instance_state: Option<String>,
}

/// How many more times an operation may be applied to an instance.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct OperationCountLimit {
    pub operation: Option<String>,
    pub instance_id: Option<String>,
    pub current_count: Option<i64>,
    pub limit_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceAttribute {
    pub instance_id: Option<String>,
    pub attributes: Option<Attribute>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    /// Base64-encoded custom data.
    pub user_data: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceRefund {
    pub instance_id: Option<String>,
    pub refunds: Option<f64>,
    pub price_detail: Option<String>,
}

/// Whether an instance may be changed to a given instance type.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeConfigStatus {
    /// `SELL` or `UNAVAILABLE`.
    pub status: Option<String>,
    pub message: Option<String>,
    pub instance_type_config: Option<InstanceTypeConfig>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InternetBandwidthConfig {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub internet_accessible: Option<InternetAccessible>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    /// `PREPAID`, `POSTPAID_BY_HOUR`, `CDHPAID`, `SPOTPAID` or `CDCPAID`.
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub placement: Option<Placement>,
    pub instance_type: Option<String>,
    pub image_id: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub internet_accessible: Option<InternetAccessible>,
    pub instance_count: Option<i64>,
    /// Minimum number of instances to create; the request fails if fewer
    /// than this can be provisioned.
    pub min_count: Option<i64>,
    pub instance_name: Option<String>,
    pub login_settings: Option<LoginSettings>,
    pub security_group_ids: Option<Vec<String>>,
    pub enhanced_service: Option<EnhancedService>,
    /// Idempotency token, at most 64 ASCII characters.
    pub client_token: Option<String>,
    pub host_name: Option<String>,
    pub action_timer: Option<ActionTimer>,
    pub disaster_recover_group_ids: Option<Vec<String>>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    /// Base64-encoded, at most 16 KiB before encoding.
    pub user_data: Option<String>,
    pub metadata: Option<Metadata>,
    /// Validate the request without creating anything.
    pub dry_run: Option<bool>,
    pub cpu_topology: Option<CpuTopology>,
    pub cam_role_name: Option<String>,
    pub hpc_cluster_id: Option<String>,
    pub launch_template: Option<LaunchTemplate>,
    pub dedicated_cluster_id: Option<String>,
    pub chc_ids: Option<Vec<String>>,
    pub disable_api_termination: Option<bool>,
    pub enable_jumbo_frame: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesResponse {
    pub instance_id_set: Option<Vec<String>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesRequest {
    /// At most 100 IDs; cannot be combined with `filters`.
    pub instance_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    pub total_count: Option<i64>,
    pub instance_set: Option<Vec<Instance>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesStatusRequest {
    pub instance_ids: Option<Vec<String>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesStatusResponse {
    pub total_count: Option<i64>,
    pub instance_status_set: Option<Vec<InstanceStatus>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesOperationLimitsRequest {
    pub instance_ids: Option<Vec<String>>,
    /// Only `INSTANCE_DEGRADE` is accepted.
    pub operation: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesOperationLimitsResponse {
    pub instance_operation_limit_set: Option<Vec<OperationCountLimit>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesAttributesRequest {
    /// Only `UserData` is accepted.
    pub attributes: Option<Vec<String>>,
    pub instance_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesAttributesResponse {
    pub instance_set: Option<Vec<InstanceAttribute>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesModificationRequest {
    pub instance_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesModificationResponse {
    pub total_count: Option<i64>,
    pub instance_type_config_status_set: Option<Vec<InstanceTypeConfigStatus>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlRequest {
    pub instance_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlResponse {
    /// Valid for 15 seconds and only once.
    pub instance_vnc_url: Option<String>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceInternetBandwidthConfigsRequest {
    pub instance_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceInternetBandwidthConfigsResponse {
    pub internet_bandwidth_config_set: Option<Vec<InternetBandwidthConfig>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StartInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StartInstancesResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    /// Superseded by `stop_type`.
    pub force_stop: Option<bool>,
    /// `SOFT`, `HARD` or `SOFT_FIRST`.
    pub stop_type: Option<String>,
    /// `KEEP_CHARGING` or `STOP_CHARGING`.
    pub stopped_mode: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstancesResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RebootInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    pub force_reboot: Option<bool>,
    pub stop_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RebootInstancesResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    /// Release the instance's elastic IPs as well.
    pub release_address: Option<bool>,
    pub release_prepaid_data_disks: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateInstancesResponse {
    pub request_id: Option<String>,
}

/// Reinstalls an instance's operating system.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstanceRequest {
    pub instance_id: Option<String>,
    pub image_id: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub login_settings: Option<LoginSettings>,
    pub enhanced_service: Option<EnhancedService>,
    pub host_name: Option<String>,
    pub user_data: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstanceResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesTypeRequest {
    /// Only one instance per request.
    pub instance_ids: Option<Vec<String>>,
    pub instance_type: Option<String>,
    pub force_stop: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesTypeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesPasswordRequest {
    pub instance_ids: Option<Vec<String>>,
    pub password: Option<String>,
    /// Defaults to `Administrator` on Windows and `root` elsewhere.
    pub user_name: Option<String>,
    pub force_stop: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesPasswordResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesInternetMaxBandwidthRequest {
    pub instance_ids: Option<Vec<String>>,
    pub internet_accessible: Option<InternetAccessible>,
    /// `YYYY-MM-DD`; only for `BANDWIDTH_PREPAID` instances.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesInternetMaxBandwidthResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResizeInstanceDisksRequest {
    pub instance_id: Option<String>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub force_stop: Option<bool>,
    pub system_disk: Option<SystemDisk>,
    /// Expand cloud disks without stopping the instance.
    pub resize_online: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResizeInstanceDisksResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesAttributeRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_name: Option<String>,
    pub user_data: Option<String>,
    /// Replaces the full set of bound security groups.
    pub security_groups: Option<Vec<String>>,
    pub cam_role_name: Option<String>,
    pub host_name: Option<String>,
    pub disable_api_termination: Option<bool>,
    pub cam_role_type: Option<String>,
    pub auto_reboot: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesProjectRequest {
    pub instance_ids: Option<Vec<String>>,
    pub project_id: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesProjectResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesVpcAttributeRequest {
    pub instance_ids: Option<Vec<String>>,
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub force_stop: Option<bool>,
    pub reserve_host_name: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesVpcAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesChargeTypeRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub modify_portable_data_disk: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesChargeTypeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesRenewFlagRequest {
    pub instance_ids: Option<Vec<String>>,
    pub renew_flag: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesRenewFlagResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesDisasterRecoverGroupRequest {
    pub instance_ids: Option<Vec<String>>,
    /// Leave unset to remove the instances from their current group.
    pub disaster_recover_group_id: Option<String>,
    /// Move instances even if they already belong to another group.
    pub force: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesDisasterRecoverGroupResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RenewInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub renew_portable_data_disk: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RenewInstancesResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesRequest {
    pub placement: Option<Placement>,
    pub image_id: Option<String>,
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub instance_type: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub internet_accessible: Option<InternetAccessible>,
    pub instance_count: Option<i64>,
    pub instance_name: Option<String>,
    pub login_settings: Option<LoginSettings>,
    pub security_group_ids: Option<Vec<String>>,
    pub enhanced_service: Option<EnhancedService>,
    pub client_token: Option<String>,
    pub host_name: Option<String>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    pub hpc_cluster_id: Option<String>,
    pub cpu_topology: Option<CpuTopology>,
    pub launch_template: Option<LaunchTemplate>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstanceRequest {
    pub instance_id: Option<String>,
    pub image_id: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub login_settings: Option<LoginSettings>,
    pub enhanced_service: Option<EnhancedService>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstanceResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstancesTypeRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstancesTypeResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResizeInstanceDisksRequest {
    pub instance_id: Option<String>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub force_stop: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResizeInstanceDisksResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstancesInternetMaxBandwidthRequest {
    pub instance_ids: Option<Vec<String>>,
    pub internet_accessible: Option<InternetAccessible>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceResetInstancesInternetMaxBandwidthResponse {
    pub bandwidth_price: Option<ItemPrice>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceModifyInstancesChargeTypeRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub modify_portable_data_disk: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceModifyInstancesChargeTypeResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRenewInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub dry_run: Option<bool>,
    pub renew_portable_data_disk: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRenewInstancesResponse {
    pub price: Option<Price>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceTerminateInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceTerminateInstancesResponse {
    pub instance_refunds_set: Option<Vec<InstanceRefund>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EnterRescueModeRequest {
    pub instance_id: Option<String>,
    /// Password for the rescue environment.
    pub password: Option<String>,
    pub username: Option<String>,
    pub force_stop: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EnterRescueModeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ExitRescueModeRequest {
    pub instance_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ExitRescueModeResponse {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::{Filter, Tag};
    use tencentcloud_common::{ApiRequest, ApiResponse, Error};

    #[test]
    fn run_instances_nested_placement() {
        let req = RunInstancesRequest {
            placement: Some(Placement {
                zone: Some("ap-guangzhou-1".to_string()),
                ..Default::default()
            }),
            instance_type: Some("S5.MEDIUM2".to_string()),
            image_id: Some("img-9qrfy1xt".to_string()),
            instance_count: Some(1),
            ..Default::default()
        };

        let json = req.to_json_string();
        assert_eq!(
            json,
            r#"{"Placement":{"Zone":"ap-guangzhou-1"},"InstanceType":"S5.MEDIUM2","ImageId":"img-9qrfy1xt","InstanceCount":1}"#
        );

        let decoded = RunInstancesRequest::from_json_string(&json).unwrap();
        assert_eq!(decoded, req);
        assert_eq!(
            decoded.placement.and_then(|p| p.zone).as_deref(),
            Some("ap-guangzhou-1")
        );
    }

    #[test]
    fn run_instances_rejects_misspelled_parameter() {
        let err = RunInstancesRequest::from_json_string(
            r#"{"InstanceType": "S5.MEDIUM2", "ImageID": "img-9qrfy1xt"}"#,
        )
        .unwrap_err();
        match err {
            Error::UnknownFields { type_name, keys } => {
                assert_eq!(type_name, "RunInstancesRequest");
                assert_eq!(keys, vec!["ImageID"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nested_objects_are_not_guarded() {
        // Only top-level keys are checked; nested objects decode leniently.
        let req = RunInstancesRequest::from_json_string(
            r#"{"Placement": {"Zone": "ap-guangzhou-3", "Rack": "r1"}}"#,
        )
        .unwrap();
        assert_eq!(
            req.placement.unwrap().zone.as_deref(),
            Some("ap-guangzhou-3")
        );
    }

    #[test]
    fn describe_instances_with_filters() {
        let req = DescribeInstancesRequest {
            filters: Some(vec![
                Filter::new("zone", ["ap-guangzhou-3"]),
                Filter::new("instance-state", ["RUNNING", "STOPPED"]),
            ]),
            offset: Some(0),
            limit: Some(100),
            ..Default::default()
        };
        let decoded =
            DescribeInstancesRequest::from_json_string(&req.to_json_string())
                .unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn describe_instances_response_tolerates_new_fields() {
        let json = r#"{
            "TotalCount": 1,
            "InstanceSet": [{
                "InstanceId": "ins-xlsmtpzq",
                "CPU": 2,
                "Memory": 4,
                "IPv6Addresses": ["2402:4e00::1"],
                "GPUInfo": {"GPUCount": 0.25, "GPUType": "T4"},
                "Tags": [{"Key": "env", "Value": "prod"}],
                "SomeFutureField": {"Nested": true}
            }],
            "RequestId": "8e6f3c1d-7d34-4e50-a1a5-2f3b6d2cbb7a"
        }"#;
        let resp = DescribeInstancesResponse::from_json_string(json).unwrap();
        assert_eq!(resp.total_count, Some(1));
        let instance = &resp.instance_set.as_ref().unwrap()[0];
        assert_eq!(instance.instance_id.as_deref(), Some("ins-xlsmtpzq"));
        assert_eq!(instance.cpu, Some(2));
        assert_eq!(
            instance.ipv6_addresses.as_deref(),
            Some(&["2402:4e00::1".to_string()][..])
        );
        assert_eq!(
            instance.gpu_info.as_ref().and_then(|g| g.gpu_count),
            Some(0.25)
        );
        assert_eq!(instance.tags, Some(vec![Tag::new("env", "prod")]));
        assert_eq!(instance.public_ipv6_addresses, None);
    }

    #[test]
    fn stop_instances_explicit_false_is_kept() {
        let req = StopInstancesRequest {
            instance_ids: Some(vec!["ins-1".to_string()]),
            force_stop: Some(false),
            ..Default::default()
        };
        assert_eq!(
            req.to_json_string(),
            r#"{"InstanceIds":["ins-1"],"ForceStop":false}"#
        );
    }
}
