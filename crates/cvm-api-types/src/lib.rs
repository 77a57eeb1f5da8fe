// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request and response types for the CVM (Cloud Virtual Machine) API,
//! version `2017-03-12`.
//!
//! Each remote action `X` has an `XRequest` and an `XResponse` type. Every
//! field is optional: `None` is left off the wire, while `Some` values
//! (including zero, `false` and empty strings) are always sent.
//!
//! Requests decode strictly: a top-level key the request type does not
//! declare is rejected with [`Error::UnknownFields`]. Responses decode
//! leniently so that fields added by the server are ignored.
//!
//! ```ignore
//! use cvm_api_types::{instances::StopInstancesRequest, ApiRequest};
//!
//! let req = StopInstancesRequest {
//!     instance_ids: Some(vec!["ins-r8hr2upy".to_string()]),
//!     stop_type: Some("SOFT_FIRST".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     req.to_json_string(),
//!     r#"{"InstanceIds":["ins-r8hr2upy"],"StopType":"SOFT_FIRST"}"#
//! );
//! ```

pub mod catalog;
pub mod chc;
pub mod common;
pub mod errors;
pub mod hosts;
pub mod hpc_clusters;
pub mod images;
pub mod instances;
pub mod key_pairs;
pub mod launch_templates;
pub mod placement_groups;
pub mod regions;
pub mod reserved_instances;

pub use tencentcloud_common::{Action, ApiRequest, ApiResponse, Error};

/// Service name; also the first label of the default endpoint.
pub const SERVICE: &str = "cvm";

pub const API_VERSION: &str = "2017-03-12";
