// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-side configuration: which region to address, which language error
//! messages should come back in, and how to reach the endpoint.

use std::path::Path;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ROOT_DOMAIN: &str = "tencentcloudapi.com";
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_REQ_METHOD: &str = "POST";
pub const DEFAULT_REQ_TIMEOUT_SECS: u64 = 60;

/// Client profile, typically parsed from a TOML file via [`parse`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Region to address, e.g. `ap-guangzhou`. Region-less actions such as
    /// `DescribeRegions` may leave this unset.
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub http: HttpProfile,
}

impl Profile {
    /// Returns this profile with `region` replacing the configured region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Language of server-generated messages.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpProfile {
    /// Full endpoint host, overriding `<service>.<root_domain>`.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_root_domain")]
    pub root_domain: String,

    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// `POST` or `GET`.
    #[serde(default = "default_req_method")]
    pub req_method: String,

    /// Request timeout in seconds, handed to whatever transport sends the
    /// request.
    #[serde(default = "default_req_timeout")]
    pub req_timeout: u64,
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self {
            endpoint: None,
            root_domain: default_root_domain(),
            scheme: default_scheme(),
            req_method: default_req_method(),
            req_timeout: DEFAULT_REQ_TIMEOUT_SECS,
        }
    }
}

fn default_root_domain() -> String {
    DEFAULT_ROOT_DOMAIN.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_req_method() -> String {
    DEFAULT_REQ_METHOD.to_string()
}

fn default_req_timeout() -> u64 {
    DEFAULT_REQ_TIMEOUT_SECS
}

/// Errors which may be returned when parsing a profile.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot parse toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a TOML file into a profile.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Profile, ParseError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let profile = toml::from_str::<Profile>(&contents)?;
    Ok(profile)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn profile_can_be_serialized_as_toml() {
        let profile = Profile {
            region: Some("ap-singapore".to_string()),
            language: Language::ZhCn,
            http: HttpProfile {
                endpoint: Some("cvm.ap-singapore.tencentcloudapi.com".to_string()),
                ..Default::default()
            },
        };
        let serialized = toml::ser::to_string(&profile).unwrap();
        let deserialized: Profile = toml::de::from_str(&serialized).unwrap();
        assert_eq!(profile, deserialized);
    }

    #[test]
    fn empty_profile_uses_defaults() {
        let profile: Profile = toml::de::from_str("").unwrap();
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.region, None);
        assert_eq!(profile.language, Language::EnUs);
        assert_eq!(profile.http.root_domain, DEFAULT_ROOT_DOMAIN);
        assert_eq!(profile.http.scheme, "https");
        assert_eq!(profile.http.req_method, "POST");
        assert_eq!(profile.http.req_timeout, 60);
    }

    #[test]
    fn parse_profile_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
region = "ap-guangzhou"
language = "zh-CN"

[http]
root_domain = "internal.tencentcloudapi.com"
req_timeout = 15
req_method = "GET"
"#
        )
        .unwrap();

        let profile = parse(file.path()).unwrap();
        assert_eq!(profile.region.as_deref(), Some("ap-guangzhou"));
        assert_eq!(profile.language, Language::ZhCn);
        assert_eq!(profile.http.endpoint, None);
        assert_eq!(profile.http.root_domain, "internal.tencentcloudapi.com");
        assert_eq!(profile.http.scheme, "https");
        assert_eq!(profile.http.req_timeout, 15);
        assert_eq!(profile.http.req_method, "GET");

        let profile = profile.with_region("na-ashburn");
        assert_eq!(profile.region.as_deref(), Some("na-ashburn"));
    }

    #[test]
    fn parse_rejects_bad_language() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"fr-FR\"").unwrap();
        assert!(matches!(parse(file.path()), Err(ParseError::Toml(_))));
    }

    #[test]
    fn parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("profile.toml");
        assert!(matches!(parse(missing), Err(ParseError::Io(_))));
    }
}
