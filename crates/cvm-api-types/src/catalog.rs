// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The table of every CVM action this crate knows about.
//!
//! Each action is registered once below, which binds its request type to
//! its name and response type (via [`Action`]) and adds an [`ActionEntry`]
//! to [`CATALOG`]. Entries let callers that only have an action name and a
//! JSON payload (a CLI, a proxy, a test harness) use the typed codecs.

use std::collections::BTreeSet;

use schemars::schema::RootSchema;
use tencentcloud_common::codec::wire_names;
use tencentcloud_common::envelope;
use tencentcloud_common::metadata::RequestMetadata;
use tencentcloud_common::profile::Profile;
use tencentcloud_common::{Action, ApiRequest, ApiResponse, Error};

/// Type-erased access to one action's request and response types.
pub struct ActionEntry {
    name: &'static str,
    request_fields: fn() -> BTreeSet<String>,
    normalize_request: fn(&str) -> Result<String, Error>,
    preview_request: fn(&str, &Profile) -> Result<RequestMetadata, Error>,
    request_schema: fn() -> RootSchema,
    response_schema: fn() -> RootSchema,
    decode_response: fn(&str) -> Result<String, Error>,
}

impl ActionEntry {
    const fn of<A: Action>() -> Self {
        Self {
            name: A::ACTION,
            request_fields: wire_names::<A>,
            normalize_request: normalize::<A>,
            preview_request: preview::<A>,
            request_schema: schema::<A>,
            response_schema: schema::<A::Response>,
            decode_response: decode::<A>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Top-level parameter names the request accepts.
    pub fn request_fields(&self) -> BTreeSet<String> {
        (self.request_fields)()
    }

    /// Decodes `body` as this action's request, rejecting unknown
    /// parameters, and re-encodes it. The result has unset parameters
    /// dropped and the rest in declaration order.
    pub fn normalize_request(&self, body: &str) -> Result<String, Error> {
        (self.normalize_request)(body)
    }

    /// Decodes `body` as this action's request and resolves what a transport
    /// would send for it under `profile`.
    pub fn preview_request(
        &self,
        body: &str,
        profile: &Profile,
    ) -> Result<RequestMetadata, Error> {
        (self.preview_request)(body, profile)
    }

    pub fn request_schema(&self) -> RootSchema {
        (self.request_schema)()
    }

    pub fn response_schema(&self) -> RootSchema {
        (self.response_schema)()
    }

    /// Unwraps a reply envelope and re-encodes the response parameters.
    pub fn decode_response(&self, body: &str) -> Result<String, Error> {
        (self.decode_response)(body)
    }
}

impl std::fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionEntry").field("name", &self.name).finish()
    }
}

fn normalize<A: Action>(body: &str) -> Result<String, Error> {
    A::from_json_string(body)?.try_to_json_string()
}

fn preview<A: Action>(
    body: &str,
    profile: &Profile,
) -> Result<RequestMetadata, Error> {
    let request = A::from_json_string(body)?;
    RequestMetadata::for_request(&request, profile)
}

fn schema<T: schemars::JsonSchema>() -> RootSchema {
    schemars::schema_for!(T)
}

fn decode<A: Action>(body: &str) -> Result<String, Error> {
    let response: A::Response = envelope::decode_response(body)?;
    response.try_to_json_string()
}

/// Looks up an action by its exact name, e.g. `RunInstances`.
pub fn find(name: &str) -> Option<&'static ActionEntry> {
    CATALOG
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .map(|idx| &CATALOG[idx])
}

/// Actions whose name contains `fragment`, ignoring case.
pub fn search(fragment: &str) -> Vec<&'static ActionEntry> {
    let needle = fragment.to_ascii_lowercase();
    CATALOG
        .iter()
        .filter(|entry| entry.name.to_ascii_lowercase().contains(&needle))
        .collect()
}

// Registers `module::Name` as the action `Name`, with request type
// `module::NameRequest` and response type `module::NameResponse`. Entries
// must be listed in sorted order so that `find` can binary search.
macro_rules! register_actions {
    ($($module:ident :: $action:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                impl ApiRequest for crate::$module::[<$action Request>] {}
                impl ApiResponse for crate::$module::[<$action Response>] {}
                impl Action for crate::$module::[<$action Request>] {
                    const SERVICE: &'static str = crate::SERVICE;
                    const VERSION: &'static str = crate::API_VERSION;
                    const ACTION: &'static str = stringify!($action);
                    type Response = crate::$module::[<$action Response>];
                }
            )*

            /// Every registered action, sorted by name.
            pub static CATALOG: &[ActionEntry] = &[
                $(ActionEntry::of::<crate::$module::[<$action Request>]>(),)*
            ];
        }
    };
}

register_actions! {
    hosts::AllocateHosts,
    key_pairs::AssociateInstancesKeyPairs,
    chc::ConfigureChcAssistVpc,
    chc::ConfigureChcDeployVpc,
    placement_groups::CreateDisasterRecoverGroup,
    hpc_clusters::CreateHpcCluster,
    images::CreateImage,
    key_pairs::CreateKeyPair,
    launch_templates::CreateLaunchTemplate,
    launch_templates::CreateLaunchTemplateVersion,
    placement_groups::DeleteDisasterRecoverGroups,
    hpc_clusters::DeleteHpcClusters,
    images::DeleteImages,
    key_pairs::DeleteKeyPairs,
    launch_templates::DeleteLaunchTemplate,
    launch_templates::DeleteLaunchTemplateVersions,
    regions::DescribeAccountQuota,
    chc::DescribeChcDeniedActions,
    chc::DescribeChcHosts,
    placement_groups::DescribeDisasterRecoverGroupQuota,
    placement_groups::DescribeDisasterRecoverGroups,
    hosts::DescribeHosts,
    hpc_clusters::DescribeHpcClusters,
    images::DescribeImageFromFamily,
    images::DescribeImageQuota,
    images::DescribeImageSharePermission,
    images::DescribeImages,
    images::DescribeImportImageOs,
    regions::DescribeInstanceFamilyConfigs,
    instances::DescribeInstanceInternetBandwidthConfigs,
    regions::DescribeInstanceTypeConfigs,
    instances::DescribeInstanceVncUrl,
    instances::DescribeInstances,
    instances::DescribeInstancesAttributes,
    instances::DescribeInstancesModification,
    instances::DescribeInstancesOperationLimits,
    instances::DescribeInstancesStatus,
    regions::DescribeInternetChargeTypeConfigs,
    key_pairs::DescribeKeyPairs,
    launch_templates::DescribeLaunchTemplateVersions,
    launch_templates::DescribeLaunchTemplates,
    regions::DescribeRegions,
    reserved_instances::DescribeReservedInstances,
    reserved_instances::DescribeReservedInstancesConfigInfos,
    reserved_instances::DescribeReservedInstancesOfferings,
    regions::DescribeZoneInstanceConfigInfos,
    regions::DescribeZones,
    key_pairs::DisassociateInstancesKeyPairs,
    instances::EnterRescueMode,
    instances::ExitRescueMode,
    images::ExportImages,
    images::ImportImage,
    key_pairs::ImportKeyPair,
    reserved_instances::InquirePricePurchaseReservedInstancesOffering,
    instances::InquiryPriceModifyInstancesChargeType,
    hosts::InquiryPriceRenewHosts,
    instances::InquiryPriceRenewInstances,
    instances::InquiryPriceResetInstance,
    instances::InquiryPriceResetInstancesInternetMaxBandwidth,
    instances::InquiryPriceResetInstancesType,
    instances::InquiryPriceResizeInstanceDisks,
    instances::InquiryPriceRunInstances,
    instances::InquiryPriceTerminateInstances,
    chc::ModifyChcAttribute,
    placement_groups::ModifyDisasterRecoverGroupAttribute,
    hosts::ModifyHostsAttribute,
    hpc_clusters::ModifyHpcClusterAttribute,
    images::ModifyImageAttribute,
    images::ModifyImageSharePermission,
    instances::ModifyInstancesAttribute,
    instances::ModifyInstancesChargeType,
    instances::ModifyInstancesDisasterRecoverGroup,
    instances::ModifyInstancesProject,
    instances::ModifyInstancesRenewFlag,
    instances::ModifyInstancesVpcAttribute,
    key_pairs::ModifyKeyPairAttribute,
    launch_templates::ModifyLaunchTemplateDefaultVersion,
    reserved_instances::PurchaseReservedInstancesOffering,
    instances::RebootInstances,
    chc::RemoveChcAssistVpc,
    chc::RemoveChcDeployVpc,
    hosts::RenewHosts,
    instances::RenewInstances,
    instances::ResetInstance,
    instances::ResetInstancesInternetMaxBandwidth,
    instances::ResetInstancesPassword,
    instances::ResetInstancesType,
    instances::ResizeInstanceDisks,
    instances::RunInstances,
    instances::StartInstances,
    instances::StopInstances,
    images::SyncImages,
    instances::TerminateInstances,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::error::{BUILD_REQUEST_ERROR, PARSE_JSON_ERROR};

    #[test]
    fn catalog_is_sorted_and_unique() {
        assert_eq!(CATALOG.len(), 93);
        assert!(CATALOG.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn every_action_is_findable() {
        for entry in CATALOG {
            let found = find(entry.name()).unwrap();
            assert_eq!(found.name(), entry.name());
        }
        assert!(find("runinstances").is_none());
        assert!(find("LaunchRocket").is_none());
    }

    #[test]
    fn search_ignores_case() {
        let names: Vec<_> =
            search("rescue").iter().map(|entry| entry.name()).collect();
        assert_eq!(names, vec!["EnterRescueMode", "ExitRescueMode"]);
        assert_eq!(search("").len(), CATALOG.len());
        assert!(search("nothing-matches").is_empty());
    }

    #[test]
    fn empty_payloads_round_trip() {
        for entry in CATALOG {
            assert_eq!(entry.normalize_request("{}").unwrap(), "{}", "{entry:?}");
            assert_eq!(
                entry.decode_response(r#"{"Response": {}}"#).unwrap(),
                "{}",
                "{entry:?}"
            );
        }
    }

    #[test]
    fn every_request_rejects_unknown_keys() {
        for entry in CATALOG {
            let err = entry
                .normalize_request(r#"{"DefinitelyNotAParameter": true}"#)
                .unwrap_err();
            assert_eq!(err.code(), BUILD_REQUEST_ERROR, "{entry:?}");
            assert!(err
                .to_string()
                .starts_with(&format!("{}Request has unknown keys", entry.name())));
        }
    }

    #[test]
    fn every_response_carries_request_id() {
        for entry in CATALOG {
            let schema = entry.response_schema();
            let props = &schema.schema.object.as_ref().unwrap().properties;
            assert!(props.contains_key("RequestId"), "{entry:?}");
            assert!(!entry.request_fields().contains("RequestId"), "{entry:?}");
        }
    }

    #[test]
    fn normalize_drops_unset_and_keeps_nested() {
        let entry = find("RunInstances").unwrap();
        let out = entry
            .normalize_request(
                r#"{
                    "InstanceCount": 1,
                    "Placement": {"Zone": "ap-guangzhou-1"},
                    "InstanceName": null
                }"#,
            )
            .unwrap();
        assert_eq!(out, r#"{"Placement":{"Zone":"ap-guangzhou-1"},"InstanceCount":1}"#);
    }

    #[test]
    fn preview_resolves_headers() {
        let profile = Profile::default().with_region("ap-singapore");
        let md = find("DescribeRegions")
            .unwrap()
            .preview_request("{}", &profile)
            .unwrap();
        assert_eq!(md.url(), "https://cvm.tencentcloudapi.com/");
        assert_eq!(md.header("X-TC-Action"), Some("DescribeRegions"));
        assert_eq!(md.header("X-TC-Version"), Some("2017-03-12"));
        assert_eq!(md.header("X-TC-Region"), Some("ap-singapore"));
        assert_eq!(md.body, "{}");
    }

    #[test]
    fn decode_response_errors() {
        let entry = find("DescribeInstances").unwrap();
        let err = entry
            .decode_response(
                r#"{"Response": {
                    "Error": {"Code": "InvalidInstanceId.NotFound", "Message": "gone"},
                    "RequestId": "req-404"
                }}"#,
            )
            .unwrap_err();
        assert_eq!(err.code(), crate::errors::INVALID_INSTANCE_ID_NOT_FOUND);
        assert_eq!(err.request_id(), Some("req-404"));

        let err = entry.decode_response(r#"{"TotalCount": 0}"#).unwrap_err();
        assert_eq!(err.code(), PARSE_JSON_ERROR);
    }

    #[test]
    fn decode_response_ignores_new_fields() {
        let out = find("DescribeZones")
            .unwrap()
            .decode_response(
                r#"{"Response": {
                    "TotalCount": 1,
                    "ZoneSet": [{"Zone": "ap-guangzhou-3", "ZoneState": "AVAILABLE", "Extra": 1}],
                    "Brand": "new",
                    "RequestId": "req-z"
                }}"#,
            )
            .unwrap();
        assert_eq!(
            out,
            r#"{"TotalCount":1,"ZoneSet":[{"Zone":"ap-guangzhou-3","ZoneState":"AVAILABLE"}],"RequestId":"req-z"}"#
        );
    }

    #[test]
    fn action_constants() {
        use crate::instances::RunInstancesRequest;
        assert_eq!(RunInstancesRequest::SERVICE, "cvm");
        assert_eq!(RunInstancesRequest::VERSION, "2017-03-12");
        assert_eq!(RunInstancesRequest::ACTION, "RunInstances");
    }
}
