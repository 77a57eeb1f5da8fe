// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error codes the CVM API may return in `Response.Error.Code`.
//!
//! Compare against [`SdkError::code`](tencentcloud_common::SdkError). Codes
//! without a `Category.` prefix predate the categorized scheme and classify
//! as [`ErrorCategory::Other`](tencentcloud_common::ErrorCategory::Other).

// AuthFailure
pub const AUTH_FAILURE_CAM_ROLE_NAME_AUTHENTICATE_FAILED: &str =
    "AuthFailure.CamRoleNameAuthenticateFailed";

// FailedOperation
pub const FAILED_OPERATION_ACCOUNT_ALREADY_EXISTS: &str =
    "FailedOperation.AccountAlreadyExists";
pub const FAILED_OPERATION_ACCOUNT_IS_YOUR_SELF: &str =
    "FailedOperation.AccountIsYourSelf";
pub const FAILED_OPERATION_ALREADY_IN_DISASTER_RECOVER_GROUP: &str =
    "FailedOperation.AlreadyInDisasterRecoverGroup";
pub const FAILED_OPERATION_BYOL_IMAGE_SHARE_FAILED: &str =
    "FailedOperation.BYOLImageShareFailed";
pub const FAILED_OPERATION_DISASTER_RECOVER_GROUP_NOT_FOUND: &str =
    "FailedOperation.DisasterRecoverGroupNotFound";
pub const FAILED_OPERATION_GET_INSTANCE_TAT_AGENT_STATUS_FAILED: &str =
    "FailedOperation.GetInstanceTATAgentStatusFailed";
pub const FAILED_OPERATION_ILLEGAL_TAG_KEY: &str =
    "FailedOperation.IllegalTagKey";
pub const FAILED_OPERATION_ILLEGAL_TAG_VALUE: &str =
    "FailedOperation.IllegalTagValue";
pub const FAILED_OPERATION_INQUIRY_PRICE_FAILED: &str =
    "FailedOperation.InquiryPriceFailed";
pub const FAILED_OPERATION_INQUIRY_REFUND_PRICE_FAILED: &str =
    "FailedOperation.InquiryRefundPriceFailed";
pub const FAILED_OPERATION_INVALID_IMAGE_STATE: &str =
    "FailedOperation.InvalidImageState";
pub const FAILED_OPERATION_INVALID_INSTANCE_APPLICATION_ROLE: &str =
    "FailedOperation.InvalidInstanceApplicationRole";
pub const FAILED_OPERATION_INVALID_INSTANCE_APPLICATION_ROLE_EMR: &str =
    "FailedOperation.InvalidInstanceApplicationRoleEmr";
pub const FAILED_OPERATION_NO_AVAILABLE_IP_ADDRESS_COUNT_IN_SUBNET: &str =
    "FailedOperation.NoAvailableIpAddressCountInSubnet";
pub const FAILED_OPERATION_NOT_FOUND_EIP: &str = "FailedOperation.NotFoundEIP";
pub const FAILED_OPERATION_NOT_MASTER_ACCOUNT: &str =
    "FailedOperation.NotMasterAccount";
pub const FAILED_OPERATION_PLACEMENT_SET_NOT_EMPTY: &str =
    "FailedOperation.PlacementSetNotEmpty";
pub const FAILED_OPERATION_PROMOTIONAL_PERIO_RESTRICTION: &str =
    "FailedOperation.PromotionalPerioRestriction";
pub const FAILED_OPERATION_PROMOTIONAL_REGION_RESTRICTION: &str =
    "FailedOperation.PromotionalRegionRestriction";
pub const FAILED_OPERATION_Q_IMAGE_SHARE_FAILED: &str =
    "FailedOperation.QImageShareFailed";
pub const FAILED_OPERATION_R_IMAGE_SHARE_FAILED: &str =
    "FailedOperation.RImageShareFailed";
pub const FAILED_OPERATION_SECURITY_GROUP_ACTION_FAILED: &str =
    "FailedOperation.SecurityGroupActionFailed";
pub const FAILED_OPERATION_SNAPSHOT_SIZE_LARGER_THAN_DATA_SIZE: &str =
    "FailedOperation.SnapshotSizeLargerThanDataSize";
pub const FAILED_OPERATION_SNAPSHOT_SIZE_LESS_THAN_DATA_SIZE: &str =
    "FailedOperation.SnapshotSizeLessThanDataSize";
pub const FAILED_OPERATION_TAG_KEY_RESERVED: &str =
    "FailedOperation.TagKeyReserved";
pub const FAILED_OPERATION_TAT_AGENT_NOT_SUPPORT: &str =
    "FailedOperation.TatAgentNotSupport";
pub const FAILED_OPERATION_UNRETURNABLE: &str = "FailedOperation.Unreturnable";

// InternalError
pub const INTERNAL_ERROR: &str = "InternalError";
pub const INTERNAL_ERROR_TRADE_UNKNOWN_ERROR: &str =
    "InternalError.TradeUnknownError";
pub const INTERNAL_SERVER_ERROR: &str = "InternalServerError";

// InvalidParameter
pub const INVALID_PARAMETER: &str = "InvalidParameter";
pub const INVALID_PARAMETER_AT_MOST_ONE: &str = "InvalidParameter.AtMostOne";
pub const INVALID_PARAMETER_AUTO_SNAPSHOT_NOT_SUPPORTED: &str =
    "InvalidParameter.AutoSnapshotNotSupported";
pub const INVALID_PARAMETER_CDC_NOT_SUPPORTED: &str =
    "InvalidParameter.CdcNotSupported";
pub const INVALID_PARAMETER_DATA_DISK_ID_CONTAINS_ROOT_DISK: &str =
    "InvalidParameter.DataDiskIdContainsRootDisk";
pub const INVALID_PARAMETER_DATA_DISK_NOT_BELONG_SPECIFIED_INSTANCE: &str =
    "InvalidParameter.DataDiskNotBelongSpecifiedInstance";
pub const INVALID_PARAMETER_DUPLICATE_SYSTEM_SNAPSHOTS: &str =
    "InvalidParameter.DuplicateSystemSnapshots";
pub const INVALID_PARAMETER_EDGE_ZONE_MISS_INTERNET_ACCESSIBLE: &str =
    "InvalidParameter.EdgeZoneMissInternetAccessible";
pub const INVALID_PARAMETER_HOST_ID_CUSTOMIZED_INSTANCE_TYPE_NOT_SUPPORT: &str =
    "InvalidParameter.HostIdCustomizedInstanceTypeNotSupport";
pub const INVALID_PARAMETER_HOST_ID_INSTANCE_TYPE_NOT_SUPPORT: &str =
    "InvalidParameter.HostIdInstanceTypeNotSupport";
pub const INVALID_PARAMETER_HOST_ID_STANDARD_INSTANCE_TYPE_NOT_SUPPORT: &str =
    "InvalidParameter.HostIdStandardInstanceTypeNotSupport";
pub const INVALID_PARAMETER_HOST_ID_STATUS_NOT_SUPPORT: &str =
    "InvalidParameter.HostIdStatusNotSupport";
pub const INVALID_PARAMETER_HOST_NAME_ILLEGAL: &str =
    "InvalidParameter.HostNameIllegal";
pub const INVALID_PARAMETER_IMAGE_IDS_SNAPSHOT_IDS_MUST_ONE: &str =
    "InvalidParameter.ImageIdsSnapshotIdsMustOne";
pub const INVALID_PARAMETER_INSTANCE_IMAGE_NOT_SUPPORT: &str =
    "InvalidParameter.InstanceImageNotSupport";
pub const INVALID_PARAMETER_INSTANCE_TYPE_SUPPORTED_HOST_NOT_FOUND: &str =
    "InvalidParameter.InstanceTypeSupportedHostNotFound";
pub const INVALID_PARAMETER_INTERNET_ACCESSIBLE_NOT_SUPPORTED: &str =
    "InvalidParameter.InternetAccessibleNotSupported";
pub const INVALID_PARAMETER_INVALID_DEPENDENCE: &str =
    "InvalidParameter.InvalidDependence";
pub const INVALID_PARAMETER_INVALID_IP_FORMAT: &str =
    "InvalidParameter.InvalidIpFormat";
pub const INVALID_PARAMETER_INVALID_KMS_KEY_ID: &str =
    "InvalidParameter.InvalidKmsKeyId";
pub const INVALID_PARAMETER_INVALID_PARAMETER_COEXIST_IMAGE_IDS_FILTERS: &str =
    "InvalidParameter.InvalidParameterCoexistImageIdsFilters";
pub const INVALID_PARAMETER_INVALID_PARAMETER_URL_ERROR: &str =
    "InvalidParameter.InvalidParameterUrlError";
pub const INVALID_PARAMETER_INVALID_TARGET_OS_TYPE: &str =
    "InvalidParameter.InvalidTargetOSType";
pub const INVALID_PARAMETER_LACK_CORE_COUNT_OR_THREAD_PER_CORE: &str =
    "InvalidParameter.LackCoreCountOrThreadPerCore";
pub const INVALID_PARAMETER_LOCAL_DATA_DISK_NOT_SUPPORT: &str =
    "InvalidParameter.LocalDataDiskNotSupport";
pub const INVALID_PARAMETER_ONLY_SUPPORT_FOR_EDGE_ZONE: &str =
    "InvalidParameter.OnlySupportForEdgeZone";
pub const INVALID_PARAMETER_PARAMETER_CONFLICT: &str =
    "InvalidParameter.ParameterConflict";
pub const INVALID_PARAMETER_PASSWORD_NOT_SUPPORTED: &str =
    "InvalidParameter.PasswordNotSupported";
pub const INVALID_PARAMETER_SNAPSHOT_NOT_FOUND: &str =
    "InvalidParameter.SnapshotNotFound";
pub const INVALID_PARAMETER_SPECIAL_PARAMETER_FOR_SPECIAL_ACCOUNT: &str =
    "InvalidParameter.SpecialParameterForSpecialAccount";
pub const INVALID_PARAMETER_SPECIFY_ONE_PARAMETER: &str =
    "InvalidParameter.SpecifyOneParameter";
pub const INVALID_PARAMETER_SWAP_DISK_NOT_SUPPORT: &str =
    "InvalidParameter.SwapDiskNotSupport";
pub const INVALID_PARAMETER_SYSTEM_SNAPSHOT_NOT_FOUND: &str =
    "InvalidParameter.SystemSnapshotNotFound";
/// Spelled this way to stay distinct from
/// [`INVALID_PARAMETER_VALUE_TOO_LARGE`].
pub const INVALIDPARAMETER_VALUETOOLARGE: &str =
    "InvalidParameter.ValueTooLarge";

// InvalidParameterValue
pub const INVALID_PARAMETER_VALUE: &str = "InvalidParameterValue";
pub const INVALID_PARAMETER_VALUE_AMOUNT_NOT_EQUAL: &str =
    "InvalidParameterValue.AmountNotEqual";
pub const INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ID_MALFORMED: &str =
    "InvalidParameterValue.BandwidthPackageIdMalformed";
pub const INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ID_NOT_FOUND: &str =
    "InvalidParameterValue.BandwidthPackageIdNotFound";
pub const INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ISP_NOT_MATCH: &str =
    "InvalidParameterValue.BandwidthPackageIspNotMatch";
pub const INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ZONE_NOT_MATCH: &str =
    "InvalidParameterValue.BandwidthPackageZoneNotMatch";
pub const INVALID_PARAMETER_VALUE_BASIC_NETWORK_INSTANCE_FAMILY: &str =
    "InvalidParameterValue.BasicNetworkInstanceFamily";
pub const INVALID_PARAMETER_VALUE_BUCKET_NOT_FOUND: &str =
    "InvalidParameterValue.BucketNotFound";
pub const INVALID_PARAMETER_VALUE_CAM_ROLE_NAME_MALFORMED: &str =
    "InvalidParameterValue.CamRoleNameMalformed";
pub const INVALID_PARAMETER_VALUE_CDH_ONLY_LOCAL_DATA_DISK_RESIZE: &str =
    "InvalidParameterValue.CdhOnlyLocalDataDiskResize";
pub const INVALID_PARAMETER_VALUE_CHC_HOSTS_NOT_FOUND: &str =
    "InvalidParameterValue.ChcHostsNotFound";
pub const INVALID_PARAMETER_VALUE_CHC_NETWORK_EMPTY: &str =
    "InvalidParameterValue.ChcNetworkEmpty";
pub const INVALID_PARAMETER_VALUE_CLOUD_SSD_DATA_DISK_SIZE_TOO_SMALL: &str =
    "InvalidParameterValue.CloudSsdDataDiskSizeTooSmall";
pub const INVALID_PARAMETER_VALUE_CORE_COUNT_VALUE: &str =
    "InvalidParameterValue.CoreCountValue";
pub const INVALID_PARAMETER_VALUE_DEDICATED_CLUSTER_NOT_SUPPORTED_CHARGE_TYPE: &str =
    "InvalidParameterValue.DedicatedClusterNotSupportedChargeType";
pub const INVALID_PARAMETER_VALUE_DEPLOY_VPC_ALREADY_EXISTS: &str =
    "InvalidParameterValue.DeployVpcAlreadyExists";
pub const INVALID_PARAMETER_VALUE_DISASTER_RECOVER_GROUP_ID_MALFORMED: &str =
    "InvalidParameterValue.DisasterRecoverGroupIdMalformed";
pub const INVALID_PARAMETER_VALUE_DUPLICATE: &str =
    "InvalidParameterValue.Duplicate";
pub const INVALID_PARAMETER_VALUE_DUPLICATE_TAGS: &str =
    "InvalidParameterValue.DuplicateTags";
pub const INVALID_PARAMETER_VALUE_ELASTIC_NETWORK_NOT_EXIST: &str =
    "InvalidParameterValue.ElasticNetworkNotExist";
pub const INVALID_PARAMETER_VALUE_ELASTIC_NETWORK_VPC_SUBNET_MISMATCH: &str =
    "InvalidParameterValue.ElasticNetworkVpcSubnetMismatch";
pub const INVALID_PARAMETER_VALUE_EXTERNAL_IP_QUOTA_LIMITED: &str =
    "InvalidParameterValue.ExternalIpQuotaLimited";
pub const INVALID_PARAMETER_VALUE_GPU_INSTANCE_FAMILY: &str =
    "InvalidParameterValue.GPUInstanceFamily";
pub const INVALID_PARAMETER_VALUE_HPC_CLUSTER_ID_ZONE_ID_NOT_MATCH: &str =
    "InvalidParameterValue.HpcClusterIdZoneIdNotMatch";
pub const INVALID_PARAMETER_VALUE_IP_ADDRESS_MALFORMED: &str =
    "InvalidParameterValue.IPAddressMalformed";
pub const INVALID_PARAMETER_VALUE_IPV6_ADDRESS_MALFORMED: &str =
    "InvalidParameterValue.IPv6AddressMalformed";
pub const INVALID_PARAMETER_VALUE_ISO_MUST_IMPORT_BY_FORCE: &str =
    "InvalidParameterValue.ISOMustImportByForce";
pub const INVALID_PARAMETER_VALUE_ILLEGAL_HOST_NAME: &str =
    "InvalidParameterValue.IllegalHostName";
pub const INVALID_PARAMETER_VALUE_INCORRECT_FORMAT: &str =
    "InvalidParameterValue.IncorrectFormat";
pub const INVALID_PARAMETER_VALUE_INSTANCE_ID_MALFORMED: &str =
    "InvalidParameterValue.InstanceIdMalformed";
pub const INVALID_PARAMETER_VALUE_INSTANCE_NOT_SUPPORTED_MIX_PRICING_MODEL: &str =
    "InvalidParameterValue.InstanceNotSupportedMixPricingModel";
pub const INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_FOUND: &str =
    "InvalidParameterValue.InstanceTypeNotFound";
pub const INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_SUPPORT_ELASTIC_NETWORKS: &str =
    "InvalidParameterValue.InstanceTypeNotSupportElasticNetworks";
pub const INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_SUPPORT_HPC_CLUSTER: &str =
    "InvalidParameterValue.InstanceTypeNotSupportHpcCluster";
pub const INVALID_PARAMETER_VALUE_INSTANCE_TYPE_REQUIRED_HPC_CLUSTER: &str =
    "InvalidParameterValue.InstanceTypeRequiredHpcCluster";
pub const INVALID_PARAMETER_VALUE_INSUFFICIENT_OFFERING: &str =
    "InvalidParameterValue.InsufficientOffering";
pub const INVALID_PARAMETER_VALUE_INSUFFICIENT_PRICE: &str =
    "InvalidParameterValue.InsufficientPrice";
pub const INVALID_PARAMETER_VALUE_INVALID_APP_ID_FORMAT: &str =
    "InvalidParameterValue.InvalidAppIdFormat";
pub const INVALID_PARAMETER_VALUE_INVALID_BOOT_MODE: &str =
    "InvalidParameterValue.InvalidBootMode";
pub const INVALID_PARAMETER_VALUE_INVALID_BUCKET_PERMISSION_FOR_EXPORT: &str =
    "InvalidParameterValue.InvalidBucketPermissionForExport";
pub const INVALID_PARAMETER_VALUE_INVALID_FILE_NAME_PREFIX_LIST: &str =
    "InvalidParameterValue.InvalidFileNamePrefixList";
pub const INVALID_PARAMETER_VALUE_INVALID_GPU_FAMILY_CHANGE: &str =
    "InvalidParameterValue.InvalidGPUFamilyChange";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_FAMILY: &str =
    "InvalidParameterValue.InvalidImageFamily";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_FOR_GIVEN_INSTANCE_TYPE: &str =
    "InvalidParameterValue.InvalidImageForGivenInstanceType";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_FORMAT: &str =
    "InvalidParameterValue.InvalidImageFormat";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID: &str =
    "InvalidParameterValue.InvalidImageId";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID_FOR_RETSET_INSTANCE: &str =
    "InvalidParameterValue.InvalidImageIdForRetsetInstance";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID_IS_SHARED: &str =
    "InvalidParameterValue.InvalidImageIdIsShared";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_OS_NAME: &str =
    "InvalidParameterValue.InvalidImageOsName";
pub const INVALID_PARAMETER_VALUE_INVALID_IMAGE_STATE: &str =
    "InvalidParameterValue.InvalidImageState";
pub const INVALID_PARAMETER_VALUE_INVALID_INSTANCE_SOURCE: &str =
    "InvalidParameterValue.InvalidInstanceSource";
pub const INVALID_PARAMETER_VALUE_INVALID_INSTANCE_TYPE_PERIODIC_CONTRACT: &str =
    "InvalidParameterValue.InvalidInstanceTypePeriodicContract";
pub const INVALID_PARAMETER_VALUE_INVALID_INSTANCE_TYPE_UNDERWRITE: &str =
    "InvalidParameterValue.InvalidInstanceTypeUnderwrite";
pub const INVALID_PARAMETER_VALUE_INVALID_IP_FORMAT: &str =
    "InvalidParameterValue.InvalidIpFormat";
pub const INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_DESCRIPTION: &str =
    "InvalidParameterValue.InvalidLaunchTemplateDescription";
pub const INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_NAME: &str =
    "InvalidParameterValue.InvalidLaunchTemplateName";
pub const INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_VERSION_DESCRIPTION: &str =
    "InvalidParameterValue.InvalidLaunchTemplateVersionDescription";
pub const INVALID_PARAMETER_VALUE_INVALID_LICENSE_TYPE: &str =
    "InvalidParameterValue.InvalidLicenseType";
pub const INVALID_PARAMETER_VALUE_INVALID_NETWORK_INTERFACE_ID: &str =
    "InvalidParameterValue.InvalidNetworkInterfaceId";
pub const INVALID_PARAMETER_VALUE_INVALID_PARAMETER_MIN_COUNT: &str =
    "InvalidParameterValue.InvalidParameterMinCount";
pub const INVALID_PARAMETER_VALUE_INVALID_PARAMETER_VALUE_LIMIT: &str =
    "InvalidParameterValue.InvalidParameterValueLimit";
pub const INVALID_PARAMETER_VALUE_INVALID_PASSWORD: &str =
    "InvalidParameterValue.InvalidPassword";
pub const INVALID_PARAMETER_VALUE_INVALID_REGION: &str =
    "InvalidParameterValue.InvalidRegion";
pub const INVALID_PARAMETER_VALUE_INVALID_TIME_FORMAT: &str =
    "InvalidParameterValue.InvalidTimeFormat";
pub const INVALID_PARAMETER_VALUE_INVALID_USER_DATA_FORMAT: &str =
    "InvalidParameterValue.InvalidUserDataFormat";
pub const INVALID_PARAMETER_VALUE_INVALID_VAGUE_NAME: &str =
    "InvalidParameterValue.InvalidVagueName";
pub const INVALID_PARAMETER_VALUE_INVALID_VPC_ID_SUBNET_ID_NOT_FOUND: &str =
    "InvalidParameterValue.InvalidVpcIdSubnetIdNotFound";
pub const INVALID_PARAMETER_VALUE_ISP_NOT_SUPPORT_FOR_EDGE_ZONE: &str =
    "InvalidParameterValue.IspNotSupportForEdgeZone";
pub const INVALID_PARAMETER_VALUE_ISP_VALUE_REPEATED: &str =
    "InvalidParameterValue.IspValueRepeated";
pub const INVALID_PARAMETER_VALUE_KEY_PAIR_NOT_FOUND: &str =
    "InvalidParameterValue.KeyPairNotFound";
pub const INVALID_PARAMETER_VALUE_KEY_PAIR_NOT_SUPPORTED: &str =
    "InvalidParameterValue.KeyPairNotSupported";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_DEFAULT_VERSION: &str =
    "InvalidParameterValue.LaunchTemplateDefaultVersion";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_MALFORMED: &str =
    "InvalidParameterValue.LaunchTemplateIdMalformed";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_NOT_EXISTED: &str =
    "InvalidParameterValue.LaunchTemplateIdNotExisted";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_VER_NOT_EXISTED: &str =
    "InvalidParameterValue.LaunchTemplateIdVerNotExisted";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_VER_SET_ALREADY: &str =
    "InvalidParameterValue.LaunchTemplateIdVerSetAlready";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_NOT_FOUND: &str =
    "InvalidParameterValue.LaunchTemplateNotFound";
pub const INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_VERSION: &str =
    "InvalidParameterValue.LaunchTemplateVersion";
pub const INVALID_PARAMETER_VALUE_LIMIT_EXCEEDED: &str =
    "InvalidParameterValue.LimitExceeded";
pub const INVALID_PARAMETER_VALUE_MUST_DHCP_ENABLED_VPC: &str =
    "InvalidParameterValue.MustDhcpEnabledVpc";
pub const INVALID_PARAMETER_VALUE_MUST_ENABLED_IS_RDMA: &str =
    "InvalidParameterValue.MustEnabledIsRdma";
pub const INVALID_PARAMETER_VALUE_NOT_CDC_SUBNET: &str =
    "InvalidParameterValue.NotCdcSubnet";
pub const INVALID_PARAMETER_VALUE_NOT_EMPTY: &str =
    "InvalidParameterValue.NotEmpty";
pub const INVALID_PARAMETER_VALUE_NOT_SUPPORTED: &str =
    "InvalidParameterValue.NotSupported";
pub const INVALID_PARAMETER_VALUE_PREHEAT_NOT_SUPPORTED_INSTANCE_TYPE: &str =
    "InvalidParameterValue.PreheatNotSupportedInstanceType";
pub const INVALID_PARAMETER_VALUE_PREHEAT_NOT_SUPPORTED_ZONE: &str =
    "InvalidParameterValue.PreheatNotSupportedZone";
pub const INVALID_PARAMETER_VALUE_PREHEAT_UNAVAILABLE_ZONES: &str =
    "InvalidParameterValue.PreheatUnavailableZones";
pub const INVALID_PARAMETER_VALUE_RANGE: &str = "InvalidParameterValue.Range";
pub const INVALID_PARAMETER_VALUE_REQUIRED_LOCATION_IMAGE: &str =
    "InvalidParameterValue.RequiredLocationImage";
pub const INVALID_PARAMETER_VALUE_SNAPSHOT_ID_MALFORMED: &str =
    "InvalidParameterValue.SnapshotIdMalformed";
pub const INVALID_PARAMETER_VALUE_SUBNET_ID_MALFORMED: &str =
    "InvalidParameterValue.SubnetIdMalformed";
pub const INVALID_PARAMETER_VALUE_SUBNET_ID_ZONE_ID_NOT_MATCH: &str =
    "InvalidParameterValue.SubnetIdZoneIdNotMatch";
pub const INVALID_PARAMETER_VALUE_SUBNET_NOT_EXIST: &str =
    "InvalidParameterValue.SubnetNotExist";
pub const INVALID_PARAMETER_VALUE_TAG_KEY_NOT_FOUND: &str =
    "InvalidParameterValue.TagKeyNotFound";
pub const INVALID_PARAMETER_VALUE_TAG_QUOTA_LIMIT_EXCEEDED: &str =
    "InvalidParameterValue.TagQuotaLimitExceeded";
pub const INVALID_PARAMETER_VALUE_THREAD_PER_CORE_VALUE: &str =
    "InvalidParameterValue.ThreadPerCoreValue";
pub const INVALID_PARAMETER_VALUE_TOO_LARGE: &str =
    "InvalidParameterValue.TooLarge";
pub const INVALID_PARAMETER_VALUE_TOO_LONG: &str =
    "InvalidParameterValue.TooLong";
pub const INVALID_PARAMETER_VALUE_UUID_MALFORMED: &str =
    "InvalidParameterValue.UuidMalformed";
pub const INVALID_PARAMETER_VALUE_VPC_ID_MALFORMED: &str =
    "InvalidParameterValue.VpcIdMalformed";
pub const INVALID_PARAMETER_VALUE_VPC_ID_NOT_EXIST: &str =
    "InvalidParameterValue.VpcIdNotExist";
pub const INVALID_PARAMETER_VALUE_VPC_ID_SUBNET_ID_NOT_MATCH: &str =
    "InvalidParameterValue.VpcIdSubnetIdNotMatch";
pub const INVALID_PARAMETER_VALUE_VPC_ID_ZONE_ID_NOT_MATCH: &str =
    "InvalidParameterValue.VpcIdZoneIdNotMatch";
pub const INVALID_PARAMETER_VALUE_VPC_NOT_SUPPORT_IPV6_ADDRESS: &str =
    "InvalidParameterValue.VpcNotSupportIpv6Address";
pub const INVALID_PARAMETER_VALUE_ZONE_NOT_SUPPORTED: &str =
    "InvalidParameterValue.ZoneNotSupported";

// LimitExceeded
pub const LIMIT_EXCEEDED_ASSOCIATE_USG_LIMIT_EXCEEDED: &str =
    "LimitExceeded.AssociateUSGLimitExceeded";
pub const LIMIT_EXCEEDED_CVM_INSTANCE_QUOTA: &str =
    "LimitExceeded.CvmInstanceQuota";
pub const LIMIT_EXCEEDED_CVMS_VIFS_PER_SEC_GROUP_LIMIT_EXCEEDED: &str =
    "LimitExceeded.CvmsVifsPerSecGroupLimitExceeded";
pub const LIMIT_EXCEEDED_DISASTER_RECOVER_GROUP: &str =
    "LimitExceeded.DisasterRecoverGroup";
pub const LIMIT_EXCEEDED_EIP_NUM_LIMIT: &str = "LimitExceeded.EipNumLimit";
pub const LIMIT_EXCEEDED_ENI_LIMIT_INSTANCE_TYPE: &str =
    "LimitExceeded.EniLimitInstanceType";
pub const LIMIT_EXCEEDED_ENI_NUM_LIMIT: &str = "LimitExceeded.EniNumLimit";
pub const LIMIT_EXCEEDED_EXPORT_IMAGE_TASK_LIMIT_EXCEEDED: &str =
    "LimitExceeded.ExportImageTaskLimitExceeded";
pub const LIMIT_EXCEEDED_IPV6_ADDRESS_NUM: &str =
    "LimitExceeded.IPv6AddressNum";
pub const LIMIT_EXCEEDED_INSTANCE_ENI_NUM_LIMIT: &str =
    "LimitExceeded.InstanceEniNumLimit";
pub const LIMIT_EXCEEDED_INSTANCE_QUOTA: &str = "LimitExceeded.InstanceQuota";
pub const LIMIT_EXCEEDED_INSTANCE_TYPE_BANDWIDTH: &str =
    "LimitExceeded.InstanceTypeBandwidth";
pub const LIMIT_EXCEEDED_LAUNCH_TEMPLATE_QUOTA: &str =
    "LimitExceeded.LaunchTemplateQuota";
pub const LIMIT_EXCEEDED_LAUNCH_TEMPLATE_VERSION_QUOTA: &str =
    "LimitExceeded.LaunchTemplateVersionQuota";
pub const LIMIT_EXCEEDED_PREHEAT_IMAGE_SNAPSHOT_OUT_OF_QUOTA: &str =
    "LimitExceeded.PreheatImageSnapshotOutOfQuota";
pub const LIMIT_EXCEEDED_PREPAY_QUOTA: &str = "LimitExceeded.PrepayQuota";
pub const LIMIT_EXCEEDED_PREPAY_UNDERWRITE_QUOTA: &str =
    "LimitExceeded.PrepayUnderwriteQuota";
pub const LIMIT_EXCEEDED_SINGLE_USG_QUOTA: &str =
    "LimitExceeded.SingleUSGQuota";
pub const LIMIT_EXCEEDED_SPOT_QUOTA: &str = "LimitExceeded.SpotQuota";
pub const LIMIT_EXCEEDED_TAG_RESOURCE_QUOTA: &str =
    "LimitExceeded.TagResourceQuota";
pub const LIMIT_EXCEEDED_USER_RETURN_QUOTA: &str =
    "LimitExceeded.UserReturnQuota";
pub const LIMIT_EXCEEDED_USER_SPOT_QUOTA: &str = "LimitExceeded.UserSpotQuota";
pub const LIMIT_EXCEEDED_VPC_SUBNET_NUM: &str = "LimitExceeded.VpcSubnetNum";

// MissingParameter
pub const MISSING_PARAMETER: &str = "MissingParameter";
pub const MISSING_PARAMETER_AT_LEAST_ONE: &str = "MissingParameter.AtLeastOne";
pub const MISSING_PARAMETER_DPDK_INSTANCE_TYPE_REQUIRED_VPC: &str =
    "MissingParameter.DPDKInstanceTypeRequiredVPC";
pub const MISSING_PARAMETER_MONITOR_SERVICE: &str =
    "MissingParameter.MonitorService";

// ResourceInsufficient
pub const RESOURCE_INSUFFICIENT_AVAILABILITY_ZONE_SOLD_OUT: &str =
    "ResourceInsufficient.AvailabilityZoneSoldOut";
pub const RESOURCE_INSUFFICIENT_CIDR_BLOCK: &str =
    "ResourceInsufficient.CidrBlock";
pub const RESOURCE_INSUFFICIENT_CLOUD_DISK_SOLD_OUT: &str =
    "ResourceInsufficient.CloudDiskSoldOut";
pub const RESOURCE_INSUFFICIENT_CLOUD_DISK_UNAVAILABLE: &str =
    "ResourceInsufficient.CloudDiskUnavailable";
pub const RESOURCE_INSUFFICIENT_DISASTER_RECOVER_GROUP_CVM_QUOTA: &str =
    "ResourceInsufficient.DisasterRecoverGroupCvmQuota";
pub const RESOURCE_INSUFFICIENT_INSUFFICIENT_GROUP_QUOTA: &str =
    "ResourceInsufficient.InsufficientGroupQuota";
pub const RESOURCE_INSUFFICIENT_INSUFFICIENT_OFFERING_MINIMUM: &str =
    "ResourceInsufficient.InsufficientOfferingMinimum";
pub const RESOURCE_INSUFFICIENT_SPECIFIED_INSTANCE_TYPE: &str =
    "ResourceInsufficient.SpecifiedInstanceType";
pub const RESOURCE_INSUFFICIENT_ZONE_SOLD_OUT_FOR_SPECIFIED_INSTANCE: &str =
    "ResourceInsufficient.ZoneSoldOutForSpecifiedInstance";

// ResourceNotFound
pub const RESOURCE_NOT_FOUND_HPC_CLUSTER: &str = "ResourceNotFound.HpcCluster";
pub const RESOURCE_NOT_FOUND_INVALID_PLACEMENT_SET: &str =
    "ResourceNotFound.InvalidPlacementSet";
pub const RESOURCE_NOT_FOUND_INVALID_ZONE_INSTANCE_TYPE: &str =
    "ResourceNotFound.InvalidZoneInstanceType";
pub const RESOURCE_NOT_FOUND_KEY_PAIR_NOT_FOUND: &str =
    "ResourceNotFound.KeyPairNotFound";
pub const RESOURCE_NOT_FOUND_NO_DEFAULT_CBS: &str =
    "ResourceNotFound.NoDefaultCbs";
pub const RESOURCE_NOT_FOUND_NO_DEFAULT_CBS_WITH_REASON: &str =
    "ResourceNotFound.NoDefaultCbsWithReason";

// ResourceUnavailable
pub const RESOURCE_UNAVAILABLE: &str = "ResourceUnavailable";
pub const RESOURCE_UNAVAILABLE_INSTANCE_TYPE: &str =
    "ResourceUnavailable.InstanceType";
pub const RESOURCE_UNAVAILABLE_SNAPSHOT_CREATING: &str =
    "ResourceUnavailable.SnapshotCreating";

// ResourcesSoldOut
pub const RESOURCES_SOLD_OUT_AVAILABLE_ZONE: &str =
    "ResourcesSoldOut.AvailableZone";
pub const RESOURCES_SOLD_OUT_EIP_INSUFFICIENT: &str =
    "ResourcesSoldOut.EipInsufficient";
pub const RESOURCES_SOLD_OUT_SPECIFIED_INSTANCE_TYPE: &str =
    "ResourcesSoldOut.SpecifiedInstanceType";

// UnauthorizedOperation
pub const UNAUTHORIZED_OPERATION: &str = "UnauthorizedOperation";
pub const UNAUTHORIZED_OPERATION_IMAGE_NOT_BELONG_TO_ACCOUNT: &str =
    "UnauthorizedOperation.ImageNotBelongToAccount";
pub const UNAUTHORIZED_OPERATION_INVALID_TOKEN: &str =
    "UnauthorizedOperation.InvalidToken";
pub const UNAUTHORIZED_OPERATION_MFA_EXPIRED: &str =
    "UnauthorizedOperation.MFAExpired";
pub const UNAUTHORIZED_OPERATION_MFA_NOT_FOUND: &str =
    "UnauthorizedOperation.MFANotFound";
pub const UNAUTHORIZED_OPERATION_PERMISSION_DENIED: &str =
    "UnauthorizedOperation.PermissionDenied";

// UnsupportedOperation
pub const UNSUPPORTED_OPERATION: &str = "UnsupportedOperation";
pub const UNSUPPORTED_OPERATION_ARM_ARCHITECTURE: &str =
    "UnsupportedOperation.ArmArchitecture";
pub const UNSUPPORTED_OPERATION_BANDWIDTH_PACKAGE_ID_NOT_SUPPORTED: &str =
    "UnsupportedOperation.BandwidthPackageIdNotSupported";
pub const UNSUPPORTED_OPERATION_CBS_REMOTE_SSD_NOT_SUPPORT: &str =
    "UnsupportedOperation.CbsRemoteSsdNotSupport";
pub const UNSUPPORTED_OPERATION_COMMERCIAL_IMAGE_CHANGE_CHARGE_TYPE: &str =
    "UnsupportedOperation.CommercialImageChangeChargeType";
pub const UNSUPPORTED_OPERATION_DISK_SNAP_CREATE_TIME_TOO_OLD: &str =
    "UnsupportedOperation.DiskSnapCreateTimeTooOld";
pub const UNSUPPORTED_OPERATION_EDGE_ZONE_INSTANCE: &str =
    "UnsupportedOperation.EdgeZoneInstance";
pub const UNSUPPORTED_OPERATION_EDGE_ZONE_NOT_SUPPORT_CLOUD_DISK: &str =
    "UnsupportedOperation.EdgeZoneNotSupportCloudDisk";
pub const UNSUPPORTED_OPERATION_ELASTIC_NETWORK_INTERFACE: &str =
    "UnsupportedOperation.ElasticNetworkInterface";
pub const UNSUPPORTED_OPERATION_ENCRYPTED_IMAGES_NOT_SUPPORTED: &str =
    "UnsupportedOperation.EncryptedImagesNotSupported";
pub const UNSUPPORTED_OPERATION_HETEROGENEOUS_CHANGE_INSTANCE_FAMILY: &str =
    "UnsupportedOperation.HeterogeneousChangeInstanceFamily";
pub const UNSUPPORTED_OPERATION_HIBERNATION_FOR_NORMAL_INSTANCE: &str =
    "UnsupportedOperation.HibernationForNormalInstance";
pub const UNSUPPORTED_OPERATION_HIBERNATION_OS_VERSION: &str =
    "UnsupportedOperation.HibernationOsVersion";
pub const UNSUPPORTED_OPERATION_IPV6_NOT_SUPPORT_VPC_MIGRATE: &str =
    "UnsupportedOperation.IPv6NotSupportVpcMigrate";
pub const UNSUPPORTED_OPERATION_IMAGE_TOO_LARGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.ImageTooLargeExportUnsupported";
pub const UNSUPPORTED_OPERATION_INSTANCE_CHARGE_TYPE: &str =
    "UnsupportedOperation.InstanceChargeType";
pub const UNSUPPORTED_OPERATION_INSTANCE_MIXED_PRICING_MODEL: &str =
    "UnsupportedOperation.InstanceMixedPricingModel";
pub const UNSUPPORTED_OPERATION_INSTANCE_MIXED_RESET_INSTANCE_TYPE: &str =
    "UnsupportedOperation.InstanceMixedResetInstanceType";
pub const UNSUPPORTED_OPERATION_INSTANCE_MIXED_ZONE_TYPE: &str =
    "UnsupportedOperation.InstanceMixedZoneType";
pub const UNSUPPORTED_OPERATION_INSTANCE_OS_CONVERT_OS_NOT_SUPPORT: &str =
    "UnsupportedOperation.InstanceOsConvertOsNotSupport";
pub const UNSUPPORTED_OPERATION_INSTANCE_OS_WINDOWS: &str =
    "UnsupportedOperation.InstanceOsWindows";
pub const UNSUPPORTED_OPERATION_INSTANCE_REINSTALL_FAILED: &str =
    "UnsupportedOperation.InstanceReinstallFailed";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_BANNING: &str =
    "UnsupportedOperation.InstanceStateBanning";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_CORRUPTED: &str =
    "UnsupportedOperation.InstanceStateCorrupted";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_ENTER_RESCUE_MODE: &str =
    "UnsupportedOperation.InstanceStateEnterRescueMode";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_ENTER_SERVICE_LIVE_MIGRATE: &str =
    "UnsupportedOperation.InstanceStateEnterServiceLiveMigrate";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_EXIT_RESCUE_MODE: &str =
    "UnsupportedOperation.InstanceStateExitRescueMode";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_EXIT_SERVICE_LIVE_MIGRATE: &str =
    "UnsupportedOperation.InstanceStateExitServiceLiveMigrate";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_FREEZING: &str =
    "UnsupportedOperation.InstanceStateFreezing";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_ISOLATING: &str =
    "UnsupportedOperation.InstanceStateIsolating";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_LAUNCH_FAILED: &str =
    "UnsupportedOperation.InstanceStateLaunchFailed";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_NOT_RUNNING: &str =
    "UnsupportedOperation.InstanceStateNotRunning";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_PENDING: &str =
    "UnsupportedOperation.InstanceStatePending";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_REBOOTING: &str =
    "UnsupportedOperation.InstanceStateRebooting";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_RESCUE_MODE: &str =
    "UnsupportedOperation.InstanceStateRescueMode";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_RUNNING: &str =
    "UnsupportedOperation.InstanceStateRunning";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_SERVICE_LIVE_MIGRATE: &str =
    "UnsupportedOperation.InstanceStateServiceLiveMigrate";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_SHUTDOWN: &str =
    "UnsupportedOperation.InstanceStateShutdown";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_STARTING: &str =
    "UnsupportedOperation.InstanceStateStarting";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_STOPPED: &str =
    "UnsupportedOperation.InstanceStateStopped";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_STOPPING: &str =
    "UnsupportedOperation.InstanceStateStopping";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_TERMINATED: &str =
    "UnsupportedOperation.InstanceStateTerminated";
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_TERMINATING: &str =
    "UnsupportedOperation.InstanceStateTerminating";
pub const UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_CONFIDENTIALITY: &str =
    "UnsupportedOperation.InstanceTypeNotSupportConfidentiality";
pub const UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_GRID_LICENCE: &str =
    "UnsupportedOperation.InstanceTypeNotSupportGridLicence";
pub const UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_HIGH_DENSITY_MODE_SETTING: &str =
    "UnsupportedOperation.InstanceTypeNotSupportHighDensityModeSetting";
pub const UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_JUMBO_FRAME: &str =
    "UnsupportedOperation.InstanceTypeNotSupportJumboFrame";
pub const UNSUPPORTED_OPERATION_INSTANCES_ENABLE_JUMBO_WITHOUT_REBOOT: &str =
    "UnsupportedOperation.InstancesEnableJumboWithoutReboot";
pub const UNSUPPORTED_OPERATION_INSTANCES_PROTECTED: &str =
    "UnsupportedOperation.InstancesProtected";
pub const UNSUPPORTED_OPERATION_INVALID_DATA_DISK: &str =
    "UnsupportedOperation.InvalidDataDisk";
pub const UNSUPPORTED_OPERATION_INVALID_DISK: &str =
    "UnsupportedOperation.InvalidDisk";
pub const UNSUPPORTED_OPERATION_INVALID_DISK_BACKUP_QUOTA: &str =
    "UnsupportedOperation.InvalidDiskBackupQuota";
pub const UNSUPPORTED_OPERATION_INVALID_DISK_FAST_ROLLBACK: &str =
    "UnsupportedOperation.InvalidDiskFastRollback";
pub const UNSUPPORTED_OPERATION_INVALID_IMAGE_LICENSE_TYPE_FOR_RESET: &str =
    "UnsupportedOperation.InvalidImageLicenseTypeForReset";
pub const UNSUPPORTED_OPERATION_INVALID_INSTANCE_NOT_SUPPORTED_PROTECTED_INSTANCE: &str =
    "UnsupportedOperation.InvalidInstanceNotSupportedProtectedInstance";
pub const UNSUPPORTED_OPERATION_INVALID_INSTANCE_WITH_SWAP_DISK: &str =
    "UnsupportedOperation.InvalidInstanceWithSwapDisk";
pub const UNSUPPORTED_OPERATION_INVALID_INSTANCES_OWNER: &str =
    "UnsupportedOperation.InvalidInstancesOwner";
pub const UNSUPPORTED_OPERATION_INVALID_PERMISSION_NON_INTERNATIONAL_ACCOUNT: &str =
    "UnsupportedOperation.InvalidPermissionNonInternationalAccount";
pub const UNSUPPORTED_OPERATION_INVALID_REGION_DISK_ENCRYPT: &str =
    "UnsupportedOperation.InvalidRegionDiskEncrypt";
pub const UNSUPPORTED_OPERATION_KEY_PAIR_UNSUPPORTED_WINDOWS: &str =
    "UnsupportedOperation.KeyPairUnsupportedWindows";
pub const UNSUPPORTED_OPERATION_LOCAL_DATA_DISK_CHANGE_INSTANCE_FAMILY: &str =
    "UnsupportedOperation.LocalDataDiskChangeInstanceFamily";
pub const UNSUPPORTED_OPERATION_LOCAL_DISK_MIGRATING_TO_CLOUD_DISK: &str =
    "UnsupportedOperation.LocalDiskMigratingToCloudDisk";
pub const UNSUPPORTED_OPERATION_LOCATION_IMAGE_NOT_SUPPORTED: &str =
    "UnsupportedOperation.LocationImageNotSupported";
pub const UNSUPPORTED_OPERATION_MARKET_IMAGE_CONVERT_OS_UNSUPPORTED: &str =
    "UnsupportedOperation.MarketImageConvertOSUnsupported";
pub const UNSUPPORTED_OPERATION_MARKET_IMAGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.MarketImageExportUnsupported";
pub const UNSUPPORTED_OPERATION_MIN_COUNT_UNSUPPORTED_CHARGE_TYPE: &str =
    "UnsupportedOperation.MinCountUnsupportedChargeType";
pub const UNSUPPORTED_OPERATION_MIN_COUNT_UNSUPPORTED_REGION: &str =
    "UnsupportedOperation.MinCountUnsupportedRegion";
pub const UNSUPPORTED_OPERATION_MODIFY_ENCRYPTION_NOT_SUPPORTED: &str =
    "UnsupportedOperation.ModifyEncryptionNotSupported";
pub const UNSUPPORTED_OPERATION_MODIFY_VPC_WITH_CLB: &str =
    "UnsupportedOperation.ModifyVPCWithCLB";
pub const UNSUPPORTED_OPERATION_MODIFY_VPC_WITH_CLASS_LINK: &str =
    "UnsupportedOperation.ModifyVPCWithClassLink";
pub const UNSUPPORTED_OPERATION_NO_INSTANCE_TYPE_SUPPORT_SPOT: &str =
    "UnsupportedOperation.NoInstanceTypeSupportSpot";
pub const UNSUPPORTED_OPERATION_NO_VPC_NETWORK: &str =
    "UnsupportedOperation.NoVpcNetwork";
pub const UNSUPPORTED_OPERATION_NOT_SUPPORT_IMPORT_INSTANCES_ACTION_TIMER: &str =
    "UnsupportedOperation.NotSupportImportInstancesActionTimer";
pub const UNSUPPORTED_OPERATION_NOT_SUPPORT_INSTANCE_IMAGE: &str =
    "UnsupportedOperation.NotSupportInstanceImage";
pub const UNSUPPORTED_OPERATION_NOT_SUPPORT_UNPAID_ORDER: &str =
    "UnsupportedOperation.NotSupportUnpaidOrder";
pub const UNSUPPORTED_OPERATION_ONLY_FOR_PREPAID_ACCOUNT: &str =
    "UnsupportedOperation.OnlyForPrepaidAccount";
pub const UNSUPPORTED_OPERATION_ORIGINAL_INSTANCE_TYPE_INVALID: &str =
    "UnsupportedOperation.OriginalInstanceTypeInvalid";
pub const UNSUPPORTED_OPERATION_PERIODIC_CONTRACT_NOT_SUPPORT_MANUAL_RENEW: &str =
    "UnsupportedOperation.PeriodicContractNotSupportManualRenew";
pub const UNSUPPORTED_OPERATION_PREHEAT_IMAGE: &str =
    "UnsupportedOperation.PreheatImage";
pub const UNSUPPORTED_OPERATION_PUBLIC_IMAGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.PublicImageExportUnsupported";
pub const UNSUPPORTED_OPERATION_RAW_LOCAL_DISK_INS_REINSTALLTO_QCOW2: &str =
    "UnsupportedOperation.RawLocalDiskInsReinstalltoQcow2";
pub const UNSUPPORTED_OPERATION_RED_HAT_IMAGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.RedHatImageExportUnsupported";
pub const UNSUPPORTED_OPERATION_RED_HAT_INSTANCE_TERMINATE_UNSUPPORTED: &str =
    "UnsupportedOperation.RedHatInstanceTerminateUnsupported";
pub const UNSUPPORTED_OPERATION_RED_HAT_INSTANCE_UNSUPPORTED: &str =
    "UnsupportedOperation.RedHatInstanceUnsupported";
pub const UNSUPPORTED_OPERATION_REGION: &str = "UnsupportedOperation.Region";
pub const UNSUPPORTED_OPERATION_RESERVED_INSTANCE_INVISIBLE_FOR_USER: &str =
    "UnsupportedOperation.ReservedInstanceInvisibleForUser";
pub const UNSUPPORTED_OPERATION_RESERVED_INSTANCE_OUTOF_QUATA: &str =
    "UnsupportedOperation.ReservedInstanceOutofQuata";
pub const UNSUPPORTED_OPERATION_SHARED_IMAGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.SharedImageExportUnsupported";
pub const UNSUPPORTED_OPERATION_SHARED_IMAGE_MODIFY_UNSUPPORTED: &str =
    "UnsupportedOperation.SharedImageModifyUnsupported";
pub const UNSUPPORTED_OPERATION_SPECIAL_INSTANCE_TYPE: &str =
    "UnsupportedOperation.SpecialInstanceType";
pub const UNSUPPORTED_OPERATION_SPOT_UNSUPPORTED_REGION: &str =
    "UnsupportedOperation.SpotUnsupportedRegion";
pub const UNSUPPORTED_OPERATION_STOPPED_MODE_STOP_CHARGING: &str =
    "UnsupportedOperation.StoppedModeStopCharging";
pub const UNSUPPORTED_OPERATION_STOPPED_MODE_STOP_CHARGING_SAME_FAMILY: &str =
    "UnsupportedOperation.StoppedModeStopChargingSameFamily";
pub const UNSUPPORTED_OPERATION_SYNC_ENCRYPT_IMAGE_NOT_SUPPORT: &str =
    "UnsupportedOperation.SyncEncryptImageNotSupport";
pub const UNSUPPORTED_OPERATION_SYSTEM_DISK_TYPE: &str =
    "UnsupportedOperation.SystemDiskType";
pub const UNSUPPORTED_OPERATION_TAT_AGENT_NOT_ONLINE: &str =
    "UnsupportedOperation.TatAgentNotOnline";
pub const UNSUPPORTED_OPERATION_UNDERWRITE_DISCOUNT_GREATER_THAN_PREPAID_DISCOUNT: &str =
    "UnsupportedOperation.UnderwriteDiscountGreaterThanPrepaidDiscount";
pub const UNSUPPORTED_OPERATION_UNDERWRITING_INSTANCE_TYPE_ONLY_SUPPORT_AUTO_RENEW: &str =
    "UnsupportedOperation.UnderwritingInstanceTypeOnlySupportAutoRenew";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_ARM_CHANGE_INSTANCE_FAMILY: &str =
    "UnsupportedOperation.UnsupportedARMChangeInstanceFamily";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_FAMILY: &str =
    "UnsupportedOperation.UnsupportedChangeInstanceFamily";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_FAMILY_TO_ARM: &str =
    "UnsupportedOperation.UnsupportedChangeInstanceFamilyToARM";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_TO_THIS_INSTANCE_FAMILY: &str =
    "UnsupportedOperation.UnsupportedChangeInstanceToThisInstanceFamily";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_INTERNATIONAL_USER: &str =
    "UnsupportedOperation.UnsupportedInternationalUser";
pub const UNSUPPORTED_OPERATION_UNSUPPORTED_POOL: &str =
    "UnsupportedOperation.UnsupportedPool";
pub const UNSUPPORTED_OPERATION_USER_CONVERT_OS_NOT_SUPPORT: &str =
    "UnsupportedOperation.UserConvertOsNotSupport";
pub const UNSUPPORTED_OPERATION_USER_LIMIT_OPERATION_EXCEED_QUOTA: &str =
    "UnsupportedOperation.UserLimitOperationExceedQuota";
pub const UNSUPPORTED_OPERATION_WINDOWS_IMAGE_EXPORT_UNSUPPORTED: &str =
    "UnsupportedOperation.WindowsImageExportUnsupported";

// Uncategorized
pub const ACCOUNT_QUALIFICATION_RESTRICTIONS: &str =
    "AccountQualificationRestrictions";
pub const ENI_NOT_ALLOWED_CHANGE_SUBNET: &str = "EniNotAllowedChangeSubnet";
pub const IMAGE_QUOTA_LIMIT_EXCEEDED: &str = "ImageQuotaLimitExceeded";
pub const INSTANCES_QUOTA_LIMIT_EXCEEDED: &str = "InstancesQuotaLimitExceeded";
pub const INVALID_ACCOUNT_INSUFFICIENT_BALANCE: &str =
    "InvalidAccount.InsufficientBalance";
pub const INVALID_ACCOUNT_UNPAID_ORDER: &str = "InvalidAccount.UnpaidOrder";
pub const INVALID_ACCOUNT_ID_NOT_FOUND: &str = "InvalidAccountId.NotFound";
pub const INVALID_ACCOUNT_IS_YOUR_SELF: &str = "InvalidAccountIs.YourSelf";
pub const INVALID_CLIENT_TOKEN_TOO_LONG: &str = "InvalidClientToken.TooLong";
pub const INVALID_FILTER: &str = "InvalidFilter";
pub const INVALID_FILTER_VALUE_LIMIT_EXCEEDED: &str =
    "InvalidFilterValue.LimitExceeded";
pub const INVALID_HOST_NOT_SUPPORTED: &str = "InvalidHost.NotSupported";
pub const INVALID_HOST_ID_MALFORMED: &str = "InvalidHostId.Malformed";
pub const INVALID_HOST_ID_NOT_FOUND: &str = "InvalidHostId.NotFound";
pub const INVALID_IMAGE_ID_IN_SHARED: &str = "InvalidImageId.InShared";
pub const INVALID_IMAGE_ID_INCORRECT_STATE: &str =
    "InvalidImageId.IncorrectState";
pub const INVALID_IMAGE_ID_MALFORMED: &str = "InvalidImageId.Malformed";
pub const INVALID_IMAGE_ID_NOT_FOUND: &str = "InvalidImageId.NotFound";
pub const INVALID_IMAGE_ID_TOO_LARGE: &str = "InvalidImageId.TooLarge";
pub const INVALID_IMAGE_NAME_DUPLICATE: &str = "InvalidImageName.Duplicate";
pub const INVALID_IMAGE_OS_TYPE_UNSUPPORTED: &str =
    "InvalidImageOsType.Unsupported";
pub const INVALID_IMAGE_OS_VERSION_UNSUPPORTED: &str =
    "InvalidImageOsVersion.Unsupported";
pub const INVALID_INSTANCE_NOT_SUPPORTED: &str = "InvalidInstance.NotSupported";
pub const INVALID_INSTANCE_ID_MALFORMED: &str = "InvalidInstanceId.Malformed";
pub const INVALID_INSTANCE_ID_NOT_FOUND: &str = "InvalidInstanceId.NotFound";
pub const INVALID_INSTANCE_NAME_TOO_LONG: &str = "InvalidInstanceName.TooLong";
pub const INVALID_INSTANCE_NOT_SUPPORTED_PREPAID_INSTANCE: &str =
    "InvalidInstanceNotSupportedPrepaidInstance";
pub const INVALID_INSTANCE_STATE: &str = "InvalidInstanceState";
pub const INVALID_INSTANCE_TYPE_MALFORMED: &str =
    "InvalidInstanceType.Malformed";
pub const INVALID_KEY_PAIR_LIMIT_EXCEEDED: &str =
    "InvalidKeyPair.LimitExceeded";
pub const INVALID_KEY_PAIR_ID_MALFORMED: &str = "InvalidKeyPairId.Malformed";
pub const INVALID_KEY_PAIR_ID_NOT_FOUND: &str = "InvalidKeyPairId.NotFound";
pub const INVALID_KEY_PAIR_NAME_DUPLICATE: &str =
    "InvalidKeyPairName.Duplicate";
pub const INVALID_KEY_PAIR_NAME_EMPTY: &str = "InvalidKeyPairNameEmpty";
pub const INVALID_KEY_PAIR_NAME_INCLUDE_ILLEGAL_CHAR: &str =
    "InvalidKeyPairNameIncludeIllegalChar";
pub const INVALID_KEY_PAIR_NAME_TOO_LONG: &str = "InvalidKeyPairNameTooLong";
pub const INVALID_PARAMETER_COMBINATION: &str = "InvalidParameterCombination";
pub const INVALID_PARAMETER_CONFLICT: &str = "InvalidParameterConflict";
pub const INVALID_PARAMETER_VALUE_LIMIT: &str = "InvalidParameterValueLimit";
pub const INVALID_PARAMETER_VALUE_OFFSET: &str = "InvalidParameterValueOffset";
pub const INVALID_PASSWORD: &str = "InvalidPassword";
pub const INVALID_PERIOD: &str = "InvalidPeriod";
pub const INVALID_PERMISSION: &str = "InvalidPermission";
pub const INVALID_PROJECT_ID_NOT_FOUND: &str = "InvalidProjectId.NotFound";
pub const INVALID_PUBLIC_KEY_DUPLICATE: &str = "InvalidPublicKey.Duplicate";
pub const INVALID_PUBLIC_KEY_MALFORMED: &str = "InvalidPublicKey.Malformed";
pub const INVALID_REGION_NOT_FOUND: &str = "InvalidRegion.NotFound";
pub const INVALID_REGION_UNAVAILABLE: &str = "InvalidRegion.Unavailable";
pub const INVALID_SECURITY_GROUP_ID_NOT_FOUND: &str =
    "InvalidSecurityGroupId.NotFound";
pub const INVALID_SG_ID_MALFORMED: &str = "InvalidSgId.Malformed";
pub const INVALID_ZONE_MISMATCH_REGION: &str = "InvalidZone.MismatchRegion";
pub const MUTEX_OPERATION_TASK_RUNNING: &str = "MutexOperation.TaskRunning";
pub const OPERATION_DENIED_ACCOUNT_NOT_SUPPORTED: &str =
    "OperationDenied.AccountNotSupported";
pub const OPERATION_DENIED_CHC_INSTALL_CLOUD_IMAGE_WITHOUT_DEPLOY_NETWORK: &str =
    "OperationDenied.ChcInstallCloudImageWithoutDeployNetwork";
pub const OPERATION_DENIED_INNER_USER_PROHIBIT_ACTION: &str =
    "OperationDenied.InnerUserProhibitAction";
pub const OPERATION_DENIED_INSTANCE_OPERATION_IN_PROGRESS: &str =
    "OperationDenied.InstanceOperationInProgress";
pub const OPERATION_DENIED_NOT_BANDWIDTH_SHIFT_UP_USER_APPLY_EDGE_ZONE_EIP: &str =
    "OperationDenied.NotBandwidthShiftUpUserApplyEdgeZoneEip";
pub const OVER_QUOTA: &str = "OverQuota";
pub const REGION_ABILITY_LIMIT_UNSUPPORTED_TO_IMPORT_IMAGE: &str =
    "RegionAbilityLimit.UnsupportedToImportImage";
pub const RESOURCE_IN_USE: &str = "ResourceInUse";
pub const RESOURCE_IN_USE_DISK_ROLLBACKING: &str =
    "ResourceInUse.DiskRollbacking";
pub const SEC_GROUP_ACTION_FAILURE: &str = "SecGroupActionFailure";
pub const UNKNOWN_PARAMETER: &str = "UnknownParameter";
pub const VPC_ADDR_NOT_IN_SUB_NET: &str = "VpcAddrNotInSubNet";
pub const VPC_IP_IS_USED: &str = "VpcIpIsUsed";

/// Every code above, sorted.
pub const ALL: &[&str] = &[
    ACCOUNT_QUALIFICATION_RESTRICTIONS,
    AUTH_FAILURE_CAM_ROLE_NAME_AUTHENTICATE_FAILED,
    ENI_NOT_ALLOWED_CHANGE_SUBNET,
    FAILED_OPERATION_ACCOUNT_ALREADY_EXISTS,
    FAILED_OPERATION_ACCOUNT_IS_YOUR_SELF,
    FAILED_OPERATION_ALREADY_IN_DISASTER_RECOVER_GROUP,
    FAILED_OPERATION_BYOL_IMAGE_SHARE_FAILED,
    FAILED_OPERATION_DISASTER_RECOVER_GROUP_NOT_FOUND,
    FAILED_OPERATION_GET_INSTANCE_TAT_AGENT_STATUS_FAILED,
    FAILED_OPERATION_ILLEGAL_TAG_KEY,
    FAILED_OPERATION_ILLEGAL_TAG_VALUE,
    FAILED_OPERATION_INQUIRY_PRICE_FAILED,
    FAILED_OPERATION_INQUIRY_REFUND_PRICE_FAILED,
    FAILED_OPERATION_INVALID_IMAGE_STATE,
    FAILED_OPERATION_INVALID_INSTANCE_APPLICATION_ROLE,
    FAILED_OPERATION_INVALID_INSTANCE_APPLICATION_ROLE_EMR,
    FAILED_OPERATION_NO_AVAILABLE_IP_ADDRESS_COUNT_IN_SUBNET,
    FAILED_OPERATION_NOT_FOUND_EIP,
    FAILED_OPERATION_NOT_MASTER_ACCOUNT,
    FAILED_OPERATION_PLACEMENT_SET_NOT_EMPTY,
    FAILED_OPERATION_PROMOTIONAL_PERIO_RESTRICTION,
    FAILED_OPERATION_PROMOTIONAL_REGION_RESTRICTION,
    FAILED_OPERATION_Q_IMAGE_SHARE_FAILED,
    FAILED_OPERATION_R_IMAGE_SHARE_FAILED,
    FAILED_OPERATION_SECURITY_GROUP_ACTION_FAILED,
    FAILED_OPERATION_SNAPSHOT_SIZE_LARGER_THAN_DATA_SIZE,
    FAILED_OPERATION_SNAPSHOT_SIZE_LESS_THAN_DATA_SIZE,
    FAILED_OPERATION_TAG_KEY_RESERVED,
    FAILED_OPERATION_TAT_AGENT_NOT_SUPPORT,
    FAILED_OPERATION_UNRETURNABLE,
    IMAGE_QUOTA_LIMIT_EXCEEDED,
    INSTANCES_QUOTA_LIMIT_EXCEEDED,
    INTERNAL_ERROR,
    INTERNAL_ERROR_TRADE_UNKNOWN_ERROR,
    INTERNAL_SERVER_ERROR,
    INVALID_ACCOUNT_INSUFFICIENT_BALANCE,
    INVALID_ACCOUNT_UNPAID_ORDER,
    INVALID_ACCOUNT_ID_NOT_FOUND,
    INVALID_ACCOUNT_IS_YOUR_SELF,
    INVALID_CLIENT_TOKEN_TOO_LONG,
    INVALID_FILTER,
    INVALID_FILTER_VALUE_LIMIT_EXCEEDED,
    INVALID_HOST_NOT_SUPPORTED,
    INVALID_HOST_ID_MALFORMED,
    INVALID_HOST_ID_NOT_FOUND,
    INVALID_IMAGE_ID_IN_SHARED,
    INVALID_IMAGE_ID_INCORRECT_STATE,
    INVALID_IMAGE_ID_MALFORMED,
    INVALID_IMAGE_ID_NOT_FOUND,
    INVALID_IMAGE_ID_TOO_LARGE,
    INVALID_IMAGE_NAME_DUPLICATE,
    INVALID_IMAGE_OS_TYPE_UNSUPPORTED,
    INVALID_IMAGE_OS_VERSION_UNSUPPORTED,
    INVALID_INSTANCE_NOT_SUPPORTED,
    INVALID_INSTANCE_ID_MALFORMED,
    INVALID_INSTANCE_ID_NOT_FOUND,
    INVALID_INSTANCE_NAME_TOO_LONG,
    INVALID_INSTANCE_NOT_SUPPORTED_PREPAID_INSTANCE,
    INVALID_INSTANCE_STATE,
    INVALID_INSTANCE_TYPE_MALFORMED,
    INVALID_KEY_PAIR_LIMIT_EXCEEDED,
    INVALID_KEY_PAIR_ID_MALFORMED,
    INVALID_KEY_PAIR_ID_NOT_FOUND,
    INVALID_KEY_PAIR_NAME_DUPLICATE,
    INVALID_KEY_PAIR_NAME_EMPTY,
    INVALID_KEY_PAIR_NAME_INCLUDE_ILLEGAL_CHAR,
    INVALID_KEY_PAIR_NAME_TOO_LONG,
    INVALID_PARAMETER,
    INVALID_PARAMETER_AT_MOST_ONE,
    INVALID_PARAMETER_AUTO_SNAPSHOT_NOT_SUPPORTED,
    INVALID_PARAMETER_CDC_NOT_SUPPORTED,
    INVALID_PARAMETER_DATA_DISK_ID_CONTAINS_ROOT_DISK,
    INVALID_PARAMETER_DATA_DISK_NOT_BELONG_SPECIFIED_INSTANCE,
    INVALID_PARAMETER_DUPLICATE_SYSTEM_SNAPSHOTS,
    INVALID_PARAMETER_EDGE_ZONE_MISS_INTERNET_ACCESSIBLE,
    INVALID_PARAMETER_HOST_ID_CUSTOMIZED_INSTANCE_TYPE_NOT_SUPPORT,
    INVALID_PARAMETER_HOST_ID_INSTANCE_TYPE_NOT_SUPPORT,
    INVALID_PARAMETER_HOST_ID_STANDARD_INSTANCE_TYPE_NOT_SUPPORT,
    INVALID_PARAMETER_HOST_ID_STATUS_NOT_SUPPORT,
    INVALID_PARAMETER_HOST_NAME_ILLEGAL,
    INVALID_PARAMETER_IMAGE_IDS_SNAPSHOT_IDS_MUST_ONE,
    INVALID_PARAMETER_INSTANCE_IMAGE_NOT_SUPPORT,
    INVALID_PARAMETER_INSTANCE_TYPE_SUPPORTED_HOST_NOT_FOUND,
    INVALID_PARAMETER_INTERNET_ACCESSIBLE_NOT_SUPPORTED,
    INVALID_PARAMETER_INVALID_DEPENDENCE,
    INVALID_PARAMETER_INVALID_IP_FORMAT,
    INVALID_PARAMETER_INVALID_KMS_KEY_ID,
    INVALID_PARAMETER_INVALID_PARAMETER_COEXIST_IMAGE_IDS_FILTERS,
    INVALID_PARAMETER_INVALID_PARAMETER_URL_ERROR,
    INVALID_PARAMETER_INVALID_TARGET_OS_TYPE,
    INVALID_PARAMETER_LACK_CORE_COUNT_OR_THREAD_PER_CORE,
    INVALID_PARAMETER_LOCAL_DATA_DISK_NOT_SUPPORT,
    INVALID_PARAMETER_ONLY_SUPPORT_FOR_EDGE_ZONE,
    INVALID_PARAMETER_PARAMETER_CONFLICT,
    INVALID_PARAMETER_PASSWORD_NOT_SUPPORTED,
    INVALID_PARAMETER_SNAPSHOT_NOT_FOUND,
    INVALID_PARAMETER_SPECIAL_PARAMETER_FOR_SPECIAL_ACCOUNT,
    INVALID_PARAMETER_SPECIFY_ONE_PARAMETER,
    INVALID_PARAMETER_SWAP_DISK_NOT_SUPPORT,
    INVALID_PARAMETER_SYSTEM_SNAPSHOT_NOT_FOUND,
    INVALIDPARAMETER_VALUETOOLARGE,
    INVALID_PARAMETER_COMBINATION,
    INVALID_PARAMETER_CONFLICT,
    INVALID_PARAMETER_VALUE,
    INVALID_PARAMETER_VALUE_AMOUNT_NOT_EQUAL,
    INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ID_NOT_FOUND,
    INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ISP_NOT_MATCH,
    INVALID_PARAMETER_VALUE_BANDWIDTH_PACKAGE_ZONE_NOT_MATCH,
    INVALID_PARAMETER_VALUE_BASIC_NETWORK_INSTANCE_FAMILY,
    INVALID_PARAMETER_VALUE_BUCKET_NOT_FOUND,
    INVALID_PARAMETER_VALUE_CAM_ROLE_NAME_MALFORMED,
    INVALID_PARAMETER_VALUE_CDH_ONLY_LOCAL_DATA_DISK_RESIZE,
    INVALID_PARAMETER_VALUE_CHC_HOSTS_NOT_FOUND,
    INVALID_PARAMETER_VALUE_CHC_NETWORK_EMPTY,
    INVALID_PARAMETER_VALUE_CLOUD_SSD_DATA_DISK_SIZE_TOO_SMALL,
    INVALID_PARAMETER_VALUE_CORE_COUNT_VALUE,
    INVALID_PARAMETER_VALUE_DEDICATED_CLUSTER_NOT_SUPPORTED_CHARGE_TYPE,
    INVALID_PARAMETER_VALUE_DEPLOY_VPC_ALREADY_EXISTS,
    INVALID_PARAMETER_VALUE_DISASTER_RECOVER_GROUP_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_DUPLICATE,
    INVALID_PARAMETER_VALUE_DUPLICATE_TAGS,
    INVALID_PARAMETER_VALUE_ELASTIC_NETWORK_NOT_EXIST,
    INVALID_PARAMETER_VALUE_ELASTIC_NETWORK_VPC_SUBNET_MISMATCH,
    INVALID_PARAMETER_VALUE_EXTERNAL_IP_QUOTA_LIMITED,
    INVALID_PARAMETER_VALUE_GPU_INSTANCE_FAMILY,
    INVALID_PARAMETER_VALUE_HPC_CLUSTER_ID_ZONE_ID_NOT_MATCH,
    INVALID_PARAMETER_VALUE_IP_ADDRESS_MALFORMED,
    INVALID_PARAMETER_VALUE_IPV6_ADDRESS_MALFORMED,
    INVALID_PARAMETER_VALUE_ISO_MUST_IMPORT_BY_FORCE,
    INVALID_PARAMETER_VALUE_ILLEGAL_HOST_NAME,
    INVALID_PARAMETER_VALUE_INCORRECT_FORMAT,
    INVALID_PARAMETER_VALUE_INSTANCE_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_INSTANCE_NOT_SUPPORTED_MIX_PRICING_MODEL,
    INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_FOUND,
    INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_SUPPORT_ELASTIC_NETWORKS,
    INVALID_PARAMETER_VALUE_INSTANCE_TYPE_NOT_SUPPORT_HPC_CLUSTER,
    INVALID_PARAMETER_VALUE_INSTANCE_TYPE_REQUIRED_HPC_CLUSTER,
    INVALID_PARAMETER_VALUE_INSUFFICIENT_OFFERING,
    INVALID_PARAMETER_VALUE_INSUFFICIENT_PRICE,
    INVALID_PARAMETER_VALUE_INVALID_APP_ID_FORMAT,
    INVALID_PARAMETER_VALUE_INVALID_BOOT_MODE,
    INVALID_PARAMETER_VALUE_INVALID_BUCKET_PERMISSION_FOR_EXPORT,
    INVALID_PARAMETER_VALUE_INVALID_FILE_NAME_PREFIX_LIST,
    INVALID_PARAMETER_VALUE_INVALID_GPU_FAMILY_CHANGE,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_FAMILY,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_FOR_GIVEN_INSTANCE_TYPE,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_FORMAT,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID_FOR_RETSET_INSTANCE,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_ID_IS_SHARED,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_OS_NAME,
    INVALID_PARAMETER_VALUE_INVALID_IMAGE_STATE,
    INVALID_PARAMETER_VALUE_INVALID_INSTANCE_SOURCE,
    INVALID_PARAMETER_VALUE_INVALID_INSTANCE_TYPE_PERIODIC_CONTRACT,
    INVALID_PARAMETER_VALUE_INVALID_INSTANCE_TYPE_UNDERWRITE,
    INVALID_PARAMETER_VALUE_INVALID_IP_FORMAT,
    INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_DESCRIPTION,
    INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_NAME,
    INVALID_PARAMETER_VALUE_INVALID_LAUNCH_TEMPLATE_VERSION_DESCRIPTION,
    INVALID_PARAMETER_VALUE_INVALID_LICENSE_TYPE,
    INVALID_PARAMETER_VALUE_INVALID_NETWORK_INTERFACE_ID,
    INVALID_PARAMETER_VALUE_INVALID_PARAMETER_MIN_COUNT,
    INVALID_PARAMETER_VALUE_INVALID_PARAMETER_VALUE_LIMIT,
    INVALID_PARAMETER_VALUE_INVALID_PASSWORD,
    INVALID_PARAMETER_VALUE_INVALID_REGION,
    INVALID_PARAMETER_VALUE_INVALID_TIME_FORMAT,
    INVALID_PARAMETER_VALUE_INVALID_USER_DATA_FORMAT,
    INVALID_PARAMETER_VALUE_INVALID_VAGUE_NAME,
    INVALID_PARAMETER_VALUE_INVALID_VPC_ID_SUBNET_ID_NOT_FOUND,
    INVALID_PARAMETER_VALUE_ISP_NOT_SUPPORT_FOR_EDGE_ZONE,
    INVALID_PARAMETER_VALUE_ISP_VALUE_REPEATED,
    INVALID_PARAMETER_VALUE_KEY_PAIR_NOT_FOUND,
    INVALID_PARAMETER_VALUE_KEY_PAIR_NOT_SUPPORTED,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_DEFAULT_VERSION,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_NOT_EXISTED,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_VER_NOT_EXISTED,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_ID_VER_SET_ALREADY,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_NOT_FOUND,
    INVALID_PARAMETER_VALUE_LAUNCH_TEMPLATE_VERSION,
    INVALID_PARAMETER_VALUE_LIMIT_EXCEEDED,
    INVALID_PARAMETER_VALUE_MUST_DHCP_ENABLED_VPC,
    INVALID_PARAMETER_VALUE_MUST_ENABLED_IS_RDMA,
    INVALID_PARAMETER_VALUE_NOT_CDC_SUBNET,
    INVALID_PARAMETER_VALUE_NOT_EMPTY,
    INVALID_PARAMETER_VALUE_NOT_SUPPORTED,
    INVALID_PARAMETER_VALUE_PREHEAT_NOT_SUPPORTED_INSTANCE_TYPE,
    INVALID_PARAMETER_VALUE_PREHEAT_NOT_SUPPORTED_ZONE,
    INVALID_PARAMETER_VALUE_PREHEAT_UNAVAILABLE_ZONES,
    INVALID_PARAMETER_VALUE_RANGE,
    INVALID_PARAMETER_VALUE_REQUIRED_LOCATION_IMAGE,
    INVALID_PARAMETER_VALUE_SNAPSHOT_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_SUBNET_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_SUBNET_ID_ZONE_ID_NOT_MATCH,
    INVALID_PARAMETER_VALUE_SUBNET_NOT_EXIST,
    INVALID_PARAMETER_VALUE_TAG_KEY_NOT_FOUND,
    INVALID_PARAMETER_VALUE_TAG_QUOTA_LIMIT_EXCEEDED,
    INVALID_PARAMETER_VALUE_THREAD_PER_CORE_VALUE,
    INVALID_PARAMETER_VALUE_TOO_LARGE,
    INVALID_PARAMETER_VALUE_TOO_LONG,
    INVALID_PARAMETER_VALUE_UUID_MALFORMED,
    INVALID_PARAMETER_VALUE_VPC_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_VPC_ID_NOT_EXIST,
    INVALID_PARAMETER_VALUE_VPC_ID_SUBNET_ID_NOT_MATCH,
    INVALID_PARAMETER_VALUE_VPC_ID_ZONE_ID_NOT_MATCH,
    INVALID_PARAMETER_VALUE_VPC_NOT_SUPPORT_IPV6_ADDRESS,
    INVALID_PARAMETER_VALUE_ZONE_NOT_SUPPORTED,
    INVALID_PARAMETER_VALUE_LIMIT,
    INVALID_PARAMETER_VALUE_OFFSET,
    INVALID_PASSWORD,
    INVALID_PERIOD,
    INVALID_PERMISSION,
    INVALID_PROJECT_ID_NOT_FOUND,
    INVALID_PUBLIC_KEY_DUPLICATE,
    INVALID_PUBLIC_KEY_MALFORMED,
    INVALID_REGION_NOT_FOUND,
    INVALID_REGION_UNAVAILABLE,
    INVALID_SECURITY_GROUP_ID_NOT_FOUND,
    INVALID_SG_ID_MALFORMED,
    INVALID_ZONE_MISMATCH_REGION,
    LIMIT_EXCEEDED_ASSOCIATE_USG_LIMIT_EXCEEDED,
    LIMIT_EXCEEDED_CVM_INSTANCE_QUOTA,
    LIMIT_EXCEEDED_CVMS_VIFS_PER_SEC_GROUP_LIMIT_EXCEEDED,
    LIMIT_EXCEEDED_DISASTER_RECOVER_GROUP,
    LIMIT_EXCEEDED_EIP_NUM_LIMIT,
    LIMIT_EXCEEDED_ENI_LIMIT_INSTANCE_TYPE,
    LIMIT_EXCEEDED_ENI_NUM_LIMIT,
    LIMIT_EXCEEDED_EXPORT_IMAGE_TASK_LIMIT_EXCEEDED,
    LIMIT_EXCEEDED_IPV6_ADDRESS_NUM,
    LIMIT_EXCEEDED_INSTANCE_ENI_NUM_LIMIT,
    LIMIT_EXCEEDED_INSTANCE_QUOTA,
    LIMIT_EXCEEDED_INSTANCE_TYPE_BANDWIDTH,
    LIMIT_EXCEEDED_LAUNCH_TEMPLATE_QUOTA,
    LIMIT_EXCEEDED_LAUNCH_TEMPLATE_VERSION_QUOTA,
    LIMIT_EXCEEDED_PREHEAT_IMAGE_SNAPSHOT_OUT_OF_QUOTA,
    LIMIT_EXCEEDED_PREPAY_QUOTA,
    LIMIT_EXCEEDED_PREPAY_UNDERWRITE_QUOTA,
    LIMIT_EXCEEDED_SINGLE_USG_QUOTA,
    LIMIT_EXCEEDED_SPOT_QUOTA,
    LIMIT_EXCEEDED_TAG_RESOURCE_QUOTA,
    LIMIT_EXCEEDED_USER_RETURN_QUOTA,
    LIMIT_EXCEEDED_USER_SPOT_QUOTA,
    LIMIT_EXCEEDED_VPC_SUBNET_NUM,
    MISSING_PARAMETER,
    MISSING_PARAMETER_AT_LEAST_ONE,
    MISSING_PARAMETER_DPDK_INSTANCE_TYPE_REQUIRED_VPC,
    MISSING_PARAMETER_MONITOR_SERVICE,
    MUTEX_OPERATION_TASK_RUNNING,
    OPERATION_DENIED_ACCOUNT_NOT_SUPPORTED,
    OPERATION_DENIED_CHC_INSTALL_CLOUD_IMAGE_WITHOUT_DEPLOY_NETWORK,
    OPERATION_DENIED_INNER_USER_PROHIBIT_ACTION,
    OPERATION_DENIED_INSTANCE_OPERATION_IN_PROGRESS,
    OPERATION_DENIED_NOT_BANDWIDTH_SHIFT_UP_USER_APPLY_EDGE_ZONE_EIP,
    OVER_QUOTA,
    REGION_ABILITY_LIMIT_UNSUPPORTED_TO_IMPORT_IMAGE,
    RESOURCE_IN_USE,
    RESOURCE_IN_USE_DISK_ROLLBACKING,
    RESOURCE_INSUFFICIENT_AVAILABILITY_ZONE_SOLD_OUT,
    RESOURCE_INSUFFICIENT_CIDR_BLOCK,
    RESOURCE_INSUFFICIENT_CLOUD_DISK_SOLD_OUT,
    RESOURCE_INSUFFICIENT_CLOUD_DISK_UNAVAILABLE,
    RESOURCE_INSUFFICIENT_DISASTER_RECOVER_GROUP_CVM_QUOTA,
    RESOURCE_INSUFFICIENT_INSUFFICIENT_GROUP_QUOTA,
    RESOURCE_INSUFFICIENT_INSUFFICIENT_OFFERING_MINIMUM,
    RESOURCE_INSUFFICIENT_SPECIFIED_INSTANCE_TYPE,
    RESOURCE_INSUFFICIENT_ZONE_SOLD_OUT_FOR_SPECIFIED_INSTANCE,
    RESOURCE_NOT_FOUND_HPC_CLUSTER,
    RESOURCE_NOT_FOUND_INVALID_PLACEMENT_SET,
    RESOURCE_NOT_FOUND_INVALID_ZONE_INSTANCE_TYPE,
    RESOURCE_NOT_FOUND_KEY_PAIR_NOT_FOUND,
    RESOURCE_NOT_FOUND_NO_DEFAULT_CBS,
    RESOURCE_NOT_FOUND_NO_DEFAULT_CBS_WITH_REASON,
    RESOURCE_UNAVAILABLE,
    RESOURCE_UNAVAILABLE_INSTANCE_TYPE,
    RESOURCE_UNAVAILABLE_SNAPSHOT_CREATING,
    RESOURCES_SOLD_OUT_AVAILABLE_ZONE,
    RESOURCES_SOLD_OUT_EIP_INSUFFICIENT,
    RESOURCES_SOLD_OUT_SPECIFIED_INSTANCE_TYPE,
    SEC_GROUP_ACTION_FAILURE,
    UNAUTHORIZED_OPERATION,
    UNAUTHORIZED_OPERATION_IMAGE_NOT_BELONG_TO_ACCOUNT,
    UNAUTHORIZED_OPERATION_INVALID_TOKEN,
    UNAUTHORIZED_OPERATION_MFA_EXPIRED,
    UNAUTHORIZED_OPERATION_MFA_NOT_FOUND,
    UNAUTHORIZED_OPERATION_PERMISSION_DENIED,
    UNKNOWN_PARAMETER,
    UNSUPPORTED_OPERATION,
    UNSUPPORTED_OPERATION_ARM_ARCHITECTURE,
    UNSUPPORTED_OPERATION_BANDWIDTH_PACKAGE_ID_NOT_SUPPORTED,
    UNSUPPORTED_OPERATION_CBS_REMOTE_SSD_NOT_SUPPORT,
    UNSUPPORTED_OPERATION_COMMERCIAL_IMAGE_CHANGE_CHARGE_TYPE,
    UNSUPPORTED_OPERATION_DISK_SNAP_CREATE_TIME_TOO_OLD,
    UNSUPPORTED_OPERATION_EDGE_ZONE_INSTANCE,
    UNSUPPORTED_OPERATION_EDGE_ZONE_NOT_SUPPORT_CLOUD_DISK,
    UNSUPPORTED_OPERATION_ELASTIC_NETWORK_INTERFACE,
    UNSUPPORTED_OPERATION_ENCRYPTED_IMAGES_NOT_SUPPORTED,
    UNSUPPORTED_OPERATION_HETEROGENEOUS_CHANGE_INSTANCE_FAMILY,
    UNSUPPORTED_OPERATION_HIBERNATION_FOR_NORMAL_INSTANCE,
    UNSUPPORTED_OPERATION_HIBERNATION_OS_VERSION,
    UNSUPPORTED_OPERATION_IPV6_NOT_SUPPORT_VPC_MIGRATE,
    UNSUPPORTED_OPERATION_IMAGE_TOO_LARGE_EXPORT_UNSUPPORTED,
    UNSUPPORTED_OPERATION_INSTANCE_CHARGE_TYPE,
    UNSUPPORTED_OPERATION_INSTANCE_MIXED_PRICING_MODEL,
    UNSUPPORTED_OPERATION_INSTANCE_MIXED_RESET_INSTANCE_TYPE,
    UNSUPPORTED_OPERATION_INSTANCE_MIXED_ZONE_TYPE,
    UNSUPPORTED_OPERATION_INSTANCE_OS_CONVERT_OS_NOT_SUPPORT,
    UNSUPPORTED_OPERATION_INSTANCE_OS_WINDOWS,
    UNSUPPORTED_OPERATION_INSTANCE_REINSTALL_FAILED,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_BANNING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_CORRUPTED,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_ENTER_RESCUE_MODE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_ENTER_SERVICE_LIVE_MIGRATE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_EXIT_RESCUE_MODE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_EXIT_SERVICE_LIVE_MIGRATE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_FREEZING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_ISOLATING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_LAUNCH_FAILED,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_NOT_RUNNING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_PENDING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_REBOOTING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_RESCUE_MODE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_RUNNING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_SERVICE_LIVE_MIGRATE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_SHUTDOWN,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_STARTING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_STOPPED,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_STOPPING,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_TERMINATED,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_TERMINATING,
    UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_CONFIDENTIALITY,
    UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_GRID_LICENCE,
    UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_HIGH_DENSITY_MODE_SETTING,
    UNSUPPORTED_OPERATION_INSTANCE_TYPE_NOT_SUPPORT_JUMBO_FRAME,
    UNSUPPORTED_OPERATION_INSTANCES_ENABLE_JUMBO_WITHOUT_REBOOT,
    UNSUPPORTED_OPERATION_INSTANCES_PROTECTED,
    UNSUPPORTED_OPERATION_INVALID_DATA_DISK,
    UNSUPPORTED_OPERATION_INVALID_DISK,
    UNSUPPORTED_OPERATION_INVALID_DISK_BACKUP_QUOTA,
    UNSUPPORTED_OPERATION_INVALID_DISK_FAST_ROLLBACK,
    UNSUPPORTED_OPERATION_INVALID_IMAGE_LICENSE_TYPE_FOR_RESET,
    UNSUPPORTED_OPERATION_INVALID_INSTANCE_NOT_SUPPORTED_PROTECTED_INSTANCE,
    UNSUPPORTED_OPERATION_INVALID_INSTANCE_WITH_SWAP_DISK,
    UNSUPPORTED_OPERATION_INVALID_INSTANCES_OWNER,
    UNSUPPORTED_OPERATION_INVALID_PERMISSION_NON_INTERNATIONAL_ACCOUNT,
    UNSUPPORTED_OPERATION_INVALID_REGION_DISK_ENCRYPT,
    UNSUPPORTED_OPERATION_KEY_PAIR_UNSUPPORTED_WINDOWS,
    UNSUPPORTED_OPERATION_LOCAL_DATA_DISK_CHANGE_INSTANCE_FAMILY,
    UNSUPPORTED_OPERATION_LOCAL_DISK_MIGRATING_TO_CLOUD_DISK,
    UNSUPPORTED_OPERATION_LOCATION_IMAGE_NOT_SUPPORTED,
    UNSUPPORTED_OPERATION_MARKET_IMAGE_CONVERT_OS_UNSUPPORTED,
    UNSUPPORTED_OPERATION_MARKET_IMAGE_EXPORT_UNSUPPORTED,
    UNSUPPORTED_OPERATION_MIN_COUNT_UNSUPPORTED_CHARGE_TYPE,
    UNSUPPORTED_OPERATION_MIN_COUNT_UNSUPPORTED_REGION,
    UNSUPPORTED_OPERATION_MODIFY_ENCRYPTION_NOT_SUPPORTED,
    UNSUPPORTED_OPERATION_MODIFY_VPC_WITH_CLB,
    UNSUPPORTED_OPERATION_MODIFY_VPC_WITH_CLASS_LINK,
    UNSUPPORTED_OPERATION_NO_INSTANCE_TYPE_SUPPORT_SPOT,
    UNSUPPORTED_OPERATION_NO_VPC_NETWORK,
    UNSUPPORTED_OPERATION_NOT_SUPPORT_IMPORT_INSTANCES_ACTION_TIMER,
    UNSUPPORTED_OPERATION_NOT_SUPPORT_INSTANCE_IMAGE,
    UNSUPPORTED_OPERATION_NOT_SUPPORT_UNPAID_ORDER,
    UNSUPPORTED_OPERATION_ONLY_FOR_PREPAID_ACCOUNT,
    UNSUPPORTED_OPERATION_ORIGINAL_INSTANCE_TYPE_INVALID,
    UNSUPPORTED_OPERATION_PERIODIC_CONTRACT_NOT_SUPPORT_MANUAL_RENEW,
    UNSUPPORTED_OPERATION_PREHEAT_IMAGE,
    UNSUPPORTED_OPERATION_PUBLIC_IMAGE_EXPORT_UNSUPPORTED,
    UNSUPPORTED_OPERATION_RAW_LOCAL_DISK_INS_REINSTALLTO_QCOW2,
    UNSUPPORTED_OPERATION_RED_HAT_IMAGE_EXPORT_UNSUPPORTED,
    UNSUPPORTED_OPERATION_RED_HAT_INSTANCE_TERMINATE_UNSUPPORTED,
    UNSUPPORTED_OPERATION_RED_HAT_INSTANCE_UNSUPPORTED,
    UNSUPPORTED_OPERATION_REGION,
    UNSUPPORTED_OPERATION_RESERVED_INSTANCE_INVISIBLE_FOR_USER,
    UNSUPPORTED_OPERATION_RESERVED_INSTANCE_OUTOF_QUATA,
    UNSUPPORTED_OPERATION_SHARED_IMAGE_EXPORT_UNSUPPORTED,
    UNSUPPORTED_OPERATION_SHARED_IMAGE_MODIFY_UNSUPPORTED,
    UNSUPPORTED_OPERATION_SPECIAL_INSTANCE_TYPE,
    UNSUPPORTED_OPERATION_SPOT_UNSUPPORTED_REGION,
    UNSUPPORTED_OPERATION_STOPPED_MODE_STOP_CHARGING,
    UNSUPPORTED_OPERATION_STOPPED_MODE_STOP_CHARGING_SAME_FAMILY,
    UNSUPPORTED_OPERATION_SYNC_ENCRYPT_IMAGE_NOT_SUPPORT,
    UNSUPPORTED_OPERATION_SYSTEM_DISK_TYPE,
    UNSUPPORTED_OPERATION_TAT_AGENT_NOT_ONLINE,
    UNSUPPORTED_OPERATION_UNDERWRITE_DISCOUNT_GREATER_THAN_PREPAID_DISCOUNT,
    UNSUPPORTED_OPERATION_UNDERWRITING_INSTANCE_TYPE_ONLY_SUPPORT_AUTO_RENEW,
    UNSUPPORTED_OPERATION_UNSUPPORTED_ARM_CHANGE_INSTANCE_FAMILY,
    UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_FAMILY,
    UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_FAMILY_TO_ARM,
    UNSUPPORTED_OPERATION_UNSUPPORTED_CHANGE_INSTANCE_TO_THIS_INSTANCE_FAMILY,
    UNSUPPORTED_OPERATION_UNSUPPORTED_INTERNATIONAL_USER,
    UNSUPPORTED_OPERATION_UNSUPPORTED_POOL,
    UNSUPPORTED_OPERATION_USER_CONVERT_OS_NOT_SUPPORT,
    UNSUPPORTED_OPERATION_USER_LIMIT_OPERATION_EXCEED_QUOTA,
    UNSUPPORTED_OPERATION_WINDOWS_IMAGE_EXPORT_UNSUPPORTED,
    VPC_ADDR_NOT_IN_SUB_NET,
    VPC_IP_IS_USED,
];

/// Whether `code` is one the CVM API documents.
pub fn is_known(code: &str) -> bool {
    ALL.binary_search(&code).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use tencentcloud_common::{ErrorCategory, SdkError};

    #[test]
    fn all_is_sorted_and_unique() {
        assert!(ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lookup() {
        assert!(is_known(INVALID_INSTANCE_ID_NOT_FOUND));
        assert!(is_known("LimitExceeded.CvmInstanceQuota"));
        assert!(is_known(INVALIDPARAMETER_VALUETOOLARGE));
        assert!(!is_known("LimitExceeded.Imaginary"));
        assert!(!is_known(""));
    }

    #[test]
    fn codes_classify_by_prefix() {
        let category = |code: &str| SdkError::new(code, "", "").category();
        assert_eq!(
            category(LIMIT_EXCEEDED_CVM_INSTANCE_QUOTA),
            ErrorCategory::LimitExceeded
        );
        assert_eq!(
            category(RESOURCES_SOLD_OUT_SPECIFIED_INSTANCE_TYPE),
            ErrorCategory::ResourcesSoldOut
        );
        assert_eq!(
            category(UNSUPPORTED_OPERATION_INSTANCE_STATE_STOPPED),
            ErrorCategory::UnsupportedOperation
        );
        assert_eq!(category(INTERNAL_SERVER_ERROR), ErrorCategory::InternalError);
        assert_eq!(category(INVALID_IMAGE_ID_NOT_FOUND), ErrorCategory::Other);
    }
}
