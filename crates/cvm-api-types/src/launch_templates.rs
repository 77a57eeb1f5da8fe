// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Launch templates: reusable, versioned `RunInstances` parameter sets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{
    ActionTimer, DataDisk, EnhancedService, Filter, InstanceChargePrepaid,
    InstanceMarketOptionsRequest, InternetAccessible, LoginSettings, Placement,
    SystemDisk, TagSpecification, VirtualPrivateCloud,
};

/// Reference to a launch template version from `RunInstances`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplate {
    pub launch_template_id: Option<String>,
    /// Defaults to the template's default version.
    pub launch_template_version: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateInfo {
    pub latest_version_number: Option<u64>,
    pub launch_template_id: Option<String>,
    pub launch_template_name: Option<String>,
    pub default_version_number: Option<u64>,
    pub launch_template_version_count: Option<u64>,
    pub created_by: Option<String>,
    pub creation_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateVersionInfo {
    pub launch_template_version: Option<u64>,
    pub launch_template_version_data: Option<LaunchTemplateVersionData>,
    pub creation_time: Option<String>,
    pub launch_template_id: Option<String>,
    pub is_default_version: Option<bool>,
    pub launch_template_version_description: Option<String>,
    pub created_by: Option<String>,
}

/// The instance parameters captured by one template version.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateVersionData {
    pub placement: Option<Placement>,
    pub instance_type: Option<String>,
    pub instance_name: Option<String>,
    pub instance_charge_type: Option<String>,
    pub system_disk: Option<SystemDisk>,
    pub data_disks: Option<Vec<DataDisk>>,
    pub internet_accessible: Option<InternetAccessible>,
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub image_id: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    pub login_settings: Option<LoginSettings>,
    pub cam_role_name: Option<String>,
    pub hpc_cluster_id: Option<String>,
    pub instance_count: Option<u64>,
    pub enhanced_service: Option<EnhancedService>,
    pub user_data: Option<String>,
    pub disaster_recover_group_ids: Option<Vec<String>>,
    pub action_timer: Option<ActionTimer>,
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    pub host_name: Option<String>,
    pub client_token: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub disable_api_termination: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateRequest {
    pub launch_template_name: Option<String>,
    pub placement: Option<Placement>,
    pub image_id: Option<String>,
    pub launch_template_version_description: Option<String>,
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
    pub action_timer: Option<ActionTimer>,
    pub disaster_recover_group_ids: Option<Vec<String>>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    pub user_data: Option<String>,
    pub dry_run: Option<bool>,
    pub cam_role_name: Option<String>,
    pub hpc_cluster_id: Option<String>,
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub disable_api_termination: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateResponse {
    pub launch_template_id: Option<String>,
    pub request_id: Option<String>,
}

/// Creates a new version of an existing template. Unset parameters are
/// inherited from `launch_template_version`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionRequest {
    pub placement: Option<Placement>,
    pub launch_template_id: Option<String>,
    pub launch_template_version: Option<i64>,
    pub launch_template_version_description: Option<String>,
    pub instance_type: Option<String>,
    pub image_id: Option<String>,
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
    pub action_timer: Option<ActionTimer>,
    pub disaster_recover_group_ids: Option<Vec<String>>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    pub user_data: Option<String>,
    pub dry_run: Option<bool>,
    pub cam_role_name: Option<String>,
    pub hpc_cluster_id: Option<String>,
    pub instance_charge_type: Option<String>,
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    pub disable_api_termination: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionResponse {
    pub launch_template_version_number: Option<i64>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesRequest {
    pub launch_template_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesResponse {
    pub total_count: Option<u64>,
    pub launch_template_set: Option<Vec<LaunchTemplateInfo>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsRequest {
    pub launch_template_id: Option<String>,
    pub launch_template_versions: Option<Vec<u64>>,
    pub min_version: Option<u64>,
    pub max_version: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub default_version: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsResponse {
    pub total_count: Option<u64>,
    pub launch_template_version_set: Option<Vec<LaunchTemplateVersionInfo>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateRequest {
    pub launch_template_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateVersionsRequest {
    pub launch_template_id: Option<String>,
    pub launch_template_versions: Option<Vec<i64>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateVersionsResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyLaunchTemplateDefaultVersionRequest {
    pub launch_template_id: Option<String>,
    pub default_version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyLaunchTemplateDefaultVersionResponse {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn version_info_decodes_nested_data() {
        let json = r#"{
            "TotalCount": 1,
            "LaunchTemplateVersionSet": [{
                "LaunchTemplateVersion": 2,
                "IsDefaultVersion": true,
                "LaunchTemplateId": "lt-34vaef8fe",
                "LaunchTemplateVersionData": {
                    "InstanceType": "S5.SMALL2",
                    "Placement": {"Zone": "ap-guangzhou-6", "ProjectId": 0},
                    "InstanceCount": 3
                }
            }],
            "RequestId": "req-1"
        }"#;
        let resp =
            DescribeLaunchTemplateVersionsResponse::from_json_string(json)
                .unwrap();
        let info = &resp.launch_template_version_set.unwrap()[0];
        assert_eq!(info.launch_template_version, Some(2));
        assert_eq!(info.is_default_version, Some(true));
        let data = info.launch_template_version_data.as_ref().unwrap();
        assert_eq!(data.instance_type.as_deref(), Some("S5.SMALL2"));
        assert_eq!(data.instance_count, Some(3));
        assert_eq!(data.placement.as_ref().unwrap().project_id, Some(0));
    }

    #[test]
    fn delete_versions_guarded() {
        let req = DeleteLaunchTemplateVersionsRequest::from_json_string(
            r#"{"LaunchTemplateId": "lt-1", "LaunchTemplateVersions": [1, 3]}"#,
        )
        .unwrap();
        assert_eq!(req.launch_template_versions, Some(vec![1, 3]));

        let err = DeleteLaunchTemplateVersionsRequest::from_json_string(
            r#"{"LaunchTemplateId": "lt-1", "Versions": [1]}"#,
        )
        .unwrap_err();
        assert!(err.is_unknown_fields());
    }
}
