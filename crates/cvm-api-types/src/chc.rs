// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud Hosting Cluster (CHC) physical servers and their out-of-band
//! (BMC) and deployment networks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Filter, Placement, VirtualPrivateCloud};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcHost {
    pub chc_id: Option<String>,
    pub instance_name: Option<String>,
    pub serial_number: Option<String>,
    /// `REGISTERED`, `VPC_READY`, `PREPARED`, `ONLINE`, ...
    pub instance_state: Option<String>,
    pub device_type: Option<String>,
    pub placement: Option<Placement>,
    pub bmc_virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub bmc_ip: Option<String>,
    pub bmc_security_group_ids: Option<Vec<String>>,
    pub deploy_virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub deploy_ip: Option<String>,
    pub deploy_security_group_ids: Option<Vec<String>>,
    /// The CVM instance the server was turned into, if any.
    pub cvm_instance_id: Option<String>,
    pub created_time: Option<String>,
    pub hardware_description: Option<String>,
    #[serde(rename = "CPU")]
    pub cpu: Option<i64>,
    pub memory: Option<i64>,
    pub disk: Option<String>,
    #[serde(rename = "BmcMAC")]
    pub bmc_mac: Option<String>,
    #[serde(rename = "DeployMAC")]
    pub deploy_mac: Option<String>,
    pub tenant_type: Option<String>,
    pub deploy_extra_config: Option<ChcDeployExtraConfig>,
}

/// PXE boot parameters for the deployment network.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcDeployExtraConfig {
    pub mini_os_type: Option<String>,
    pub boot_type: Option<String>,
    pub boot_file: Option<String>,
    pub next_server_address: Option<String>,
}

/// Operations currently refused for a CHC server in its present state.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcHostDeniedActions {
    pub chc_id: Option<String>,
    pub state: Option<String>,
    pub deny_actions: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcHostsRequest {
    pub chc_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcHostsResponse {
    pub total_count: Option<u64>,
    pub chc_host_set: Option<Vec<ChcHost>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcDeniedActionsRequest {
    pub chc_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcDeniedActionsResponse {
    pub chc_host_denied_action_set: Option<Vec<ChcHostDeniedActions>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyChcAttributeRequest {
    pub chc_ids: Option<Vec<String>>,
    pub instance_name: Option<String>,
    pub device_type: Option<String>,
    pub bmc_user: Option<String>,
    pub password: Option<String>,
    pub bmc_security_group_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyChcAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcAssistVpcRequest {
    pub chc_ids: Option<Vec<String>>,
    pub bmc_virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub bmc_security_group_ids: Option<Vec<String>>,
    pub deploy_virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub deploy_security_group_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcAssistVpcResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcDeployVpcRequest {
    pub chc_ids: Option<Vec<String>>,
    pub deploy_virtual_private_cloud: Option<VirtualPrivateCloud>,
    pub deploy_security_group_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcDeployVpcResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcAssistVpcRequest {
    pub chc_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcAssistVpcResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcDeployVpcRequest {
    pub chc_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcDeployVpcResponse {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn chc_host_wire_names() {
        let json = r#"{
            "ChcHostSet": [{
                "ChcId": "chc-0brmw3wl",
                "CPU": 96,
                "Memory": 384,
                "BmcMAC": "00:1b:21:aa:bb:cc",
                "DeployMAC": "00:1b:21:aa:bb:cd",
                "BmcVirtualPrivateCloud": {"VpcId": "vpc-1", "SubnetId": "subnet-1"},
                "DeployExtraConfig": {"MiniOsType": "linux", "BootType": "pxe"}
            }],
            "TotalCount": 1
        }"#;
        let resp = DescribeChcHostsResponse::from_json_string(json).unwrap();
        let host = &resp.chc_host_set.unwrap()[0];
        assert_eq!(host.cpu, Some(96));
        assert_eq!(host.bmc_mac.as_deref(), Some("00:1b:21:aa:bb:cc"));
        assert_eq!(host.deploy_mac.as_deref(), Some("00:1b:21:aa:bb:cd"));
        assert_eq!(
            host.bmc_virtual_private_cloud
                .as_ref()
                .and_then(|v| v.vpc_id.as_deref()),
            Some("vpc-1")
        );
        assert_eq!(
            host.deploy_extra_config
                .as_ref()
                .and_then(|c| c.boot_type.as_deref()),
            Some("pxe")
        );
    }

    #[test]
    fn configure_assist_vpc_request() {
        let req = ConfigureChcAssistVpcRequest {
            chc_ids: Some(vec!["chc-1".to_string()]),
            bmc_virtual_private_cloud: Some(VirtualPrivateCloud {
                vpc_id: Some("vpc-1".to_string()),
                subnet_id: Some("subnet-1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            req.to_json_string(),
            r#"{"ChcIds":["chc-1"],"BmcVirtualPrivateCloud":{"VpcId":"vpc-1","SubnetId":"subnet-1"}}"#
        );

        let err = ConfigureChcAssistVpcRequest::from_json_string(
            r#"{"ChcIds": ["chc-1"], "BMCVirtualPrivateCloud": {}}"#,
        )
        .unwrap_err();
        assert!(err.is_unknown_fields());
    }
}
