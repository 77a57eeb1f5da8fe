// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Everything a transport needs to send a request, short of signing it.

use crate::codec::Action;
use crate::error::Error;
use crate::profile::Profile;

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// The resolved destination, headers and body of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestMetadata {
    pub scheme: String,
    /// Endpoint host, e.g. `cvm.tencentcloudapi.com`.
    pub endpoint: String,
    pub method: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    pub timeout_secs: u64,
}

impl RequestMetadata {
    pub fn for_request<A: Action>(
        request: &A,
        profile: &Profile,
    ) -> Result<Self, Error> {
        let endpoint = endpoint(A::SERVICE, profile);
        let body = request.try_to_json_string()?;

        let mut headers = vec![
            ("Host", endpoint.clone()),
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
            ("X-TC-Action", A::ACTION.to_string()),
            ("X-TC-Version", A::VERSION.to_string()),
        ];
        if let Some(region) = &profile.region {
            headers.push(("X-TC-Region", region.clone()));
        }
        headers.push(("X-TC-Language", profile.language.as_str().to_string()));

        Ok(Self {
            scheme: profile.http.scheme.clone(),
            endpoint,
            method: profile.http.req_method.clone(),
            headers,
            body,
            timeout_secs: profile.http.req_timeout,
        })
    }

    pub fn url(&self) -> String {
        format!("{}://{}/", self.scheme, self.endpoint)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Resolves the endpoint host for `service` under `profile`.
pub fn endpoint(service: &str, profile: &Profile) -> String {
    match &profile.http.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => format!("{}.{}", service, profile.http.root_domain),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::{ApiRequest, ApiResponse};
    use crate::profile::{HttpProfile, Language};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "PascalCase")]
    struct RebootRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        instance_ids: Option<Vec<String>>,
    }

    #[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "PascalCase")]
    struct RebootResponse {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl ApiRequest for RebootRequest {}
    impl ApiResponse for RebootResponse {}
    impl Action for RebootRequest {
        const SERVICE: &'static str = "cvm";
        const VERSION: &'static str = "2017-03-12";
        const ACTION: &'static str = "RebootInstances";
        type Response = RebootResponse;
    }

    #[test]
    fn default_endpoint_and_headers() {
        let profile = Profile::default().with_region("ap-guangzhou");
        let req = RebootRequest {
            instance_ids: Some(vec!["ins-r8hr2upy".to_string()]),
        };
        let md = RequestMetadata::for_request(&req, &profile).unwrap();

        assert_eq!(md.endpoint, "cvm.tencentcloudapi.com");
        assert_eq!(md.url(), "https://cvm.tencentcloudapi.com/");
        assert_eq!(md.method, "POST");
        assert_eq!(md.body, r#"{"InstanceIds":["ins-r8hr2upy"]}"#);
        assert_eq!(md.header("host"), Some("cvm.tencentcloudapi.com"));
        assert_eq!(md.header("X-TC-Action"), Some("RebootInstances"));
        assert_eq!(md.header("X-TC-Version"), Some("2017-03-12"));
        assert_eq!(md.header("X-TC-Region"), Some("ap-guangzhou"));
        assert_eq!(md.header("X-TC-Language"), Some("en-US"));
        assert_eq!(md.timeout_secs, 60);
    }

    #[test]
    fn endpoint_override_and_no_region() {
        let profile = Profile {
            region: None,
            language: Language::ZhCn,
            http: HttpProfile {
                endpoint: Some("cvm.ap-shanghai.tencentcloudapi.com".into()),
                scheme: "http".into(),
                ..Default::default()
            },
        };
        let md =
            RequestMetadata::for_request(&RebootRequest::default(), &profile)
                .unwrap();
        assert_eq!(md.url(), "http://cvm.ap-shanghai.tencentcloudapi.com/");
        assert_eq!(md.header("X-TC-Region"), None);
        assert_eq!(md.header("X-TC-Language"), Some("zh-CN"));
        assert_eq!(md.body, "{}");
    }

    #[test]
    fn root_domain_is_used_without_override() {
        let mut profile = Profile::default();
        profile.http.root_domain = "internal.example.com".to_string();
        assert_eq!(endpoint("cvm", &profile), "cvm.internal.example.com");
    }
}
