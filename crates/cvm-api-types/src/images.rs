// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Custom images: creation, import/export, cross-region sync and sharing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Filter, Tag, TagSpecification};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub image_id: Option<String>,
    pub os_name: Option<String>,
    /// `PUBLIC_IMAGE`, `PRIVATE_IMAGE` or `SHARED_IMAGE`.
    pub image_type: Option<String>,
    pub created_time: Option<String>,
    pub image_name: Option<String>,
    pub image_description: Option<String>,
    /// GiB.
    pub image_size: Option<i64>,
    pub architecture: Option<String>,
    /// `CREATING`, `NORMAL`, `CREATEFAILED`, `USING`, `SYNCING`,
    /// `IMPORTING` or `IMPORTFAILED`.
    pub image_state: Option<String>,
    pub platform: Option<String>,
    pub image_creator: Option<String>,
    pub image_source: Option<String>,
    pub sync_percent: Option<i64>,
    pub is_support_cloudinit: Option<bool>,
    pub snapshot_set: Option<Vec<Snapshot>>,
    pub tags: Option<Vec<Tag>>,
    pub license_type: Option<String>,
    pub image_family: Option<String>,
    pub image_deprecated: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub snapshot_id: Option<String>,
    /// `SYSTEM_DISK` or `DATA_DISK`.
    pub disk_usage: Option<String>,
    pub disk_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImage {
    pub image_id: Option<String>,
    pub region: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SharePermission {
    pub created_time: Option<String>,
    pub account_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImageOsList {
    pub windows: Option<Vec<String>>,
    pub linux: Option<Vec<String>>,
}

/// Importable operating systems for one platform.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct OsVersion {
    pub os_name: Option<String>,
    pub os_versions: Option<Vec<String>>,
    pub architecture: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageRequest {
    pub image_name: Option<String>,
    /// Create from an instance...
    pub instance_id: Option<String>,
    pub image_description: Option<String>,
    /// `TRUE` or `FALSE`; stop a running instance first.
    pub force_poweroff: Option<String>,
    pub sysprep: Option<String>,
    pub data_disk_ids: Option<Vec<String>>,
    /// ...or from snapshots.
    pub snapshot_ids: Option<Vec<String>>,
    pub dry_run: Option<bool>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    pub image_family: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageResponse {
    pub image_id: Option<String>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesRequest {
    pub image_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// Only list images usable by this instance type.
    pub instance_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesResponse {
    pub image_set: Option<Vec<Image>>,
    pub total_count: Option<i64>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteImagesRequest {
    pub image_ids: Option<Vec<String>>,
    /// Also delete the snapshots backing the images.
    pub delete_binded_snap: Option<bool>,
    pub dry_run: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteImagesResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageAttributeRequest {
    pub image_id: Option<String>,
    pub image_name: Option<String>,
    pub image_description: Option<String>,
    pub image_family: Option<String>,
    pub image_deprecated: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageAttributeResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImagesRequest {
    pub image_ids: Option<Vec<String>>,
    pub destination_regions: Option<Vec<String>>,
    pub dry_run: Option<bool>,
    pub image_name: Option<String>,
    pub image_set_required: Option<bool>,
    pub encrypt: Option<bool>,
    pub kms_key_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImagesResponse {
    pub image_set: Option<Vec<SyncImage>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImportImageRequest {
    pub architecture: Option<String>,
    pub os_type: Option<String>,
    pub os_version: Option<String>,
    /// COS URL of the image file.
    pub image_url: Option<String>,
    pub image_name: Option<String>,
    pub image_description: Option<String>,
    pub dry_run: Option<bool>,
    /// Skip the image format check.
    pub force: Option<bool>,
    pub tag_specification: Option<Vec<TagSpecification>>,
    /// `TencentCloud` or `BYOL`.
    pub license_type: Option<String>,
    pub boot_mode: Option<String>,
    pub image_family: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImportImageResponse {
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeImportImageOsRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImportImageOsResponse {
    pub import_image_os_list_supported: Option<ImageOsList>,
    pub import_image_os_version_set: Option<Vec<OsVersion>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageSharePermissionRequest {
    pub image_id: Option<String>,
    pub account_ids: Option<Vec<String>>,
    /// `SHARE` or `CANCEL`.
    pub permission: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageSharePermissionResponse {
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionRequest {
    pub image_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionResponse {
    pub share_permission_set: Option<Vec<SharePermission>>,
    pub request_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescribeImageQuotaRequest {}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageQuotaResponse {
    pub image_num_quota: Option<i64>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ExportImagesRequest {
    pub bucket_name: Option<String>,
    pub image_ids: Option<Vec<String>>,
    /// `RAW`, `QCOW2`, `VHD` or `VMDK`.
    pub export_format: Option<String>,
    pub file_name_prefix_list: Option<Vec<String>>,
    pub only_export_root_disk: Option<bool>,
    pub dry_run: Option<bool>,
    pub role_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ExportImagesResponse {
    pub task_id: Option<u64>,
    pub cos_paths: Option<Vec<String>>,
    pub request_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageFromFamilyRequest {
    pub image_family: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageFromFamilyResponse {
    /// The newest non-deprecated image in the family.
    pub image: Option<Image>,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ApiRequest, ApiResponse};

    #[test]
    fn create_image_from_snapshots() {
        let req = CreateImageRequest {
            image_name: Some("golden-2024".to_string()),
            snapshot_ids: Some(vec![
                "snap-system".to_string(),
                "snap-data".to_string(),
            ]),
            dry_run: Some(true),
            ..Default::default()
        };
        let json = req.to_json_string();
        assert_eq!(
            json,
            r#"{"ImageName":"golden-2024","SnapshotIds":["snap-system","snap-data"],"DryRun":true}"#
        );
        assert_eq!(CreateImageRequest::from_json_string(&json).unwrap(), req);
    }

    #[test]
    fn describe_images_response_snapshots() {
        let json = r#"{
            "ImageSet": [{
                "ImageId": "img-8toqc6s3",
                "ImageType": "PRIVATE_IMAGE",
                "ImageSize": 50,
                "IsSupportCloudinit": true,
                "SnapshotSet": [
                    {"SnapshotId": "snap-1", "DiskUsage": "SYSTEM_DISK", "DiskSize": 50}
                ]
            }],
            "TotalCount": 1,
            "RequestId": "req-img"
        }"#;
        let resp = DescribeImagesResponse::from_json_string(json).unwrap();
        let image = &resp.image_set.unwrap()[0];
        assert_eq!(image.image_size, Some(50));
        assert_eq!(image.is_support_cloudinit, Some(true));
        let snap = &image.snapshot_set.as_ref().unwrap()[0];
        assert_eq!(snap.disk_usage.as_deref(), Some("SYSTEM_DISK"));
    }

    #[test]
    fn import_os_list() {
        let json = r#"{
            "ImportImageOsListSupported": {"Windows": ["Windows"], "Linux": ["CentOS", "Ubuntu"]},
            "ImportImageOsVersionSet": [
                {"OsName": "CentOS", "OsVersions": ["7", "8"], "Architecture": ["x86_64"]}
            ]
        }"#;
        let resp =
            DescribeImportImageOsResponse::from_json_string(json).unwrap();
        assert_eq!(
            resp.import_image_os_list_supported.unwrap().linux.unwrap().len(),
            2
        );
        assert_eq!(resp.request_id, None);
    }
}
