// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime pieces shared by the cloud API binding crates.
//!
//! The binding crates (e.g. `cvm-api-types`) only declare data: one struct
//! per request, response and nested value. This crate supplies everything
//! those structs lean on so the bindings themselves stay declarative:
//!
//! - [`ApiRequest`], [`ApiResponse`] and [`Action`], the capability traits
//!   every request/response type implements, including the JSON codec and
//!   the closed-schema check applied to request payloads;
//! - the classified [`Error`] and [`SdkError`] types;
//! - [`envelope`], which unwraps the `{"Response": {...}}` wrapper replies
//!   arrive in and turns error replies into [`SdkError`]s;
//! - [`metadata`], which computes the endpoint and headers a transport would
//!   need for a request;
//! - [`profile`], the client-side configuration file.
//!
//! Nothing here performs network I/O.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod metadata;
pub mod profile;

pub use codec::{Action, ApiRequest, ApiResponse};
pub use error::{Error, ErrorCategory, SdkError};
