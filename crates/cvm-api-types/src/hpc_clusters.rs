// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-performance computing clusters (RDMA-connected instance groups).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HpcClusterInfo {
    pub hpc_cluster_id: Option<String>,
    pub name: Option<String>,
    pub remark: Option<String>,
    pub cvm_quota_total: Option<u64>,
    pub zone: Option<String>,
    pub current_num: Option<u64>,
    pub create_time: Option<String>,
    pub instance_ids: Option<Vec<String>>,
    pub hpc_cluster_type: Option<String>,
    pub hpc_cluster_business_id: Option<String>,
    pub hpc_cluster_net_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHpcClusterRequest {
    pub zone: Option<String>,
    pub name: Option<String>,
    pub remark: Option<String>,
    pub hpc_cluster_type: Option<String>,
    pub hpc_cluster_business_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHpcClusterResponse {
    pub hpc_cluster_set: Option<Vec<HpcClusterInfo>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHpcClustersRequest {
    pub hpc_cluster_ids: Option<Vec<String>>,
    pub name: Option<String>,
    pub zone: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub hpc_cluster_type: Option<String>,
    pub hpc_cluster_business_id: Option<String>,
    pub instance_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHpcClustersResponse {
    pub hpc_cluster_set: Option<Vec<HpcClusterInfo>>,
    pub total_count: Option<u64>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHpcClusterAttributeRequest {
    pub hpc_cluster_id: Option<String>,
    pub name: Option<String>,
    pub remark: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHpcClusterAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteHpcClustersRequest {
    pub hpc_cluster_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteHpcClustersResponse {
    pub request_id: Option<String>,
}
