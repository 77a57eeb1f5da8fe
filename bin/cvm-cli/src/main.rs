// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use cvm_api_types::catalog::{self, ActionEntry};
use cvm_api_types::errors;
use slog::{debug, info, o, warn, Drain, Level, Logger};
use tencentcloud_common::metadata::RequestMetadata;
use tencentcloud_common::profile::{self, Profile};
use tencentcloud_common::Error;

#[derive(Debug, Parser)]
#[clap(about, version)]
/// Offline tool for checking and inspecting CVM API payloads
struct Opt {
    /// Client profile (TOML)
    #[clap(short, long, action)]
    config: Option<PathBuf>,

    /// Region, overriding the one in the profile
    #[clap(short, long, action)]
    region: Option<String>,

    /// Enable debugging
    #[clap(short, long, action)]
    debug: bool,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered actions
    Actions {
        /// Only list actions whose name contains this (case-insensitive)
        #[clap(action)]
        filter: Option<String>,
    },

    /// Check a request payload and print it normalized
    Validate {
        /// Action name, e.g. RunInstances
        #[clap(action)]
        action: String,

        /// File holding the JSON request, or - for stdin
        #[clap(action)]
        input: PathBuf,
    },

    /// Show the endpoint, headers and body a request would be sent with
    Preview {
        /// Action name, e.g. RunInstances
        #[clap(action)]
        action: String,

        /// File holding the JSON request, or - for stdin
        #[clap(action)]
        input: PathBuf,
    },

    /// Print the JSON schema of an action's request
    Schema {
        /// Action name, e.g. RunInstances
        #[clap(action)]
        action: String,

        /// Print the response schema instead
        #[clap(long, action)]
        response: bool,
    },

    /// Unwrap a response envelope and print the response parameters
    Decode {
        /// Action name, e.g. RunInstances
        #[clap(action)]
        action: String,

        /// File holding the JSON reply, or - for stdin
        #[clap(action)]
        input: PathBuf,
    },
}

fn create_logger(opt: &Opt) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let level = if opt.debug { Level::Debug } else { Level::Info };
    let drain = slog::LevelFilter(drain, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, o!())
}

fn load_profile(
    log: &Logger,
    config: Option<&Path>,
    region: Option<&str>,
) -> anyhow::Result<Profile> {
    let mut profile = match config {
        Some(path) => {
            debug!(log, "loading profile"; "path" => %path.display());
            profile::parse(path).with_context(|| {
                format!("failed to load profile {}", path.display())
            })?
        }
        None => Profile::default(),
    };
    if let Some(region) = region {
        profile = profile.with_region(region);
    }
    Ok(profile)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut buf = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
    } else {
        buf = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(buf)
}

fn lookup(name: &str) -> anyhow::Result<&'static ActionEntry> {
    if let Some(entry) = catalog::find(name) {
        return Ok(entry);
    }
    let similar: Vec<_> =
        catalog::search(name).iter().map(|entry| entry.name()).collect();
    if similar.is_empty() {
        Err(anyhow!("unknown action {name:?}"))
    } else {
        Err(anyhow!(
            "unknown action {name:?}, did you mean one of: {}",
            similar.join(", ")
        ))
    }
}

fn list_actions(filter: Option<&str>) -> Vec<&'static str> {
    catalog::search(filter.unwrap_or_default())
        .iter()
        .map(|entry| entry.name())
        .collect()
}

fn validate(
    log: &Logger,
    entry: &ActionEntry,
    body: &str,
) -> anyhow::Result<String> {
    match entry.normalize_request(body) {
        Ok(normalized) => {
            debug!(log, "request accepted"; "action" => entry.name());
            Ok(normalized)
        }
        Err(Error::UnknownFields { type_name, keys }) => {
            warn!(log, "unknown request parameters";
                "action" => entry.name(),
                "keys" => keys.join(","));
            let fields = entry.request_fields();
            debug!(log, "accepted parameters";
                "fields" => fields.into_iter().collect::<Vec<_>>().join(","));
            Err(anyhow!("{type_name} has unknown keys: {}", keys.join(", ")))
        }
        Err(e) => {
            Err(e).with_context(|| format!("invalid {} request", entry.name()))
        }
    }
}

fn render_preview(md: &RequestMetadata) -> String {
    let mut out = format!("{} {}\n", md.method, md.url());
    for (name, value) in &md.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push('\n');
    out.push_str(&md.body);
    out
}

fn decode(
    log: &Logger,
    entry: &ActionEntry,
    body: &str,
) -> anyhow::Result<String> {
    match entry.decode_response(body) {
        Ok(response) => Ok(response),
        Err(Error::Api(e)) => {
            info!(log, "server returned an error";
                "action" => entry.name(),
                "code" => &e.code,
                "category" => %e.category(),
                "request_id" => &e.request_id);
            if !errors::is_known(&e.code) {
                debug!(log, "error code is not in the CVM table";
                    "code" => &e.code);
            }
            Err(e.into())
        }
        Err(e) => Err(e)
            .with_context(|| format!("invalid {} response", entry.name())),
    }
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    let log = create_logger(&opt);

    match &opt.cmd {
        Command::Actions { filter } => {
            for name in list_actions(filter.as_deref()) {
                println!("{name}");
            }
        }
        Command::Validate { action, input } => {
            let entry = lookup(action)?;
            let body = read_input(input)?;
            println!("{}", validate(&log, entry, &body)?);
        }
        Command::Preview { action, input } => {
            let entry = lookup(action)?;
            let profile = load_profile(
                &log,
                opt.config.as_deref(),
                opt.region.as_deref(),
            )?;
            if profile.region.is_none() {
                warn!(log, "no region configured; X-TC-Region will be omitted");
            }
            let body = read_input(input)?;
            let md = entry
                .preview_request(&body, &profile)
                .with_context(|| format!("invalid {} request", entry.name()))?;
            println!("{}", render_preview(&md));
        }
        Command::Schema { action, response } => {
            let entry = lookup(action)?;
            let schema = if *response {
                entry.response_schema()
            } else {
                entry.request_schema()
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Decode { action, input } => {
            let entry = lookup(action)?;
            let body = read_input(input)?;
            println!("{}", decode(&log, entry, &body)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn test_logger() -> Logger {
        Logger::root(slog::Discard, o!())
    }

    #[test]
    fn lookup_suggests_similar_names() {
        assert_eq!(lookup("StopInstances").unwrap().name(), "StopInstances");

        let err = lookup("rescuemode").unwrap_err().to_string();
        assert!(err.contains("EnterRescueMode, ExitRescueMode"), "{err}");

        let err = lookup("Teleport").unwrap_err().to_string();
        assert_eq!(err, "unknown action \"Teleport\"");
    }

    #[test]
    fn list_actions_filters() {
        assert_eq!(list_actions(Some("keypairs")).len(), 4);
        assert_eq!(list_actions(None).len(), catalog::CATALOG.len());
    }

    #[test]
    fn validate_reports_unknown_keys() {
        let log = test_logger();
        let entry = lookup("RebootInstances").unwrap();

        let ok = validate(&log, entry, r#"{"InstanceIds": ["ins-1"]}"#).unwrap();
        assert_eq!(ok, r#"{"InstanceIds":["ins-1"]}"#);

        let err = validate(&log, entry, r#"{"InstanceId": "ins-1"}"#)
            .unwrap_err()
            .to_string();
        assert_eq!(err, "RebootInstancesRequest has unknown keys: InstanceId");
    }

    #[test]
    fn decode_surfaces_server_error() {
        let log = test_logger();
        let entry = lookup("StartInstances").unwrap();
        let err = decode(
            &log,
            entry,
            r#"{"Response": {"Error": {"Code": "UnsupportedOperation.InstanceStateRunning", "Message": "already running"}, "RequestId": "req-1"}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKError] Code=UnsupportedOperation.InstanceStateRunning, \
             Message=already running, RequestId=req-1"
        );
    }

    #[test]
    fn profile_from_file_with_region_override() {
        let log = test_logger();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region = \"ap-guangzhou\"").unwrap();

        let profile = load_profile(&log, Some(file.path()), None).unwrap();
        assert_eq!(profile.region.as_deref(), Some("ap-guangzhou"));

        let profile =
            load_profile(&log, Some(file.path()), Some("eu-frankfurt")).unwrap();
        assert_eq!(profile.region.as_deref(), Some("eu-frankfurt"));

        let profile = load_profile(&log, None, None).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn preview_rendering() {
        let entry = lookup("DescribeZones").unwrap();
        let profile = Profile::default().with_region("ap-beijing");
        let md = entry.preview_request("{}", &profile).unwrap();
        let text = render_preview(&md);
        assert!(text.starts_with("POST https://cvm.tencentcloudapi.com/\n"));
        assert!(text.contains("X-TC-Action: DescribeZones\n"));
        assert!(text.contains("X-TC-Region: ap-beijing\n"));
        assert!(text.ends_with("\n\n{}"));
    }

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "{}");
        assert!(read_input(Path::new("/nonexistent/request.json")).is_err());
    }
}
