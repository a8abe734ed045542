//! Builder inspection parser
//!
//! Parses the line-oriented `Key: value` text emitted by
//! `docker buildx inspect` into a structured builder record.
//! The output format varies across buildx versions, so the parser is
//! deliberately lenient: lines it does not recognize are skipped and
//! partial data is preferred over failure. It never returns an error.

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// One builder instance, as reported by `buildx inspect`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderInfo {
    /// Builder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Driver (e.g., "docker-container")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    /// When the builder was last used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,

    /// Execution nodes, in order of appearance in the inspect output
    pub nodes: Vec<NodeInfo>,
}

/// One execution node within a builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Endpoint the node is reachable at (e.g., "unix:///var/run/docker.sock")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Driver options as `key=value` strings, in output order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_opts: Option<Vec<String>>,

    /// Node status (e.g., "running")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Flags passed to the buildkitd daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildkitd_flags: Option<String>,

    /// BuildKit version running on the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildkit_version: Option<String>,

    /// Comma-joined platform identifiers supported by the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<String>,
}

impl NodeInfo {
    /// True if no field has been set yet
    fn is_empty(&self) -> bool {
        *self == NodeInfo::default()
    }
}

/// The closed vocabulary of inspect output keys the parser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InspectField {
    Name,
    Driver,
    LastActivity,
    Endpoint,
    DriverOptions,
    Status,
    Flags,
    Buildkit,
    Platforms,
}

impl InspectField {
    /// Map a lowercased key to a known field, or `None` for keys the
    /// parser does not recognize
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "driver" => Some(Self::Driver),
            "last activity" => Some(Self::LastActivity),
            "endpoint" => Some(Self::Endpoint),
            "driver options" => Some(Self::DriverOptions),
            "status" => Some(Self::Status),
            "flags" => Some(Self::Flags),
            "buildkit" => Some(Self::Buildkit),
            "platforms" => Some(Self::Platforms),
            _ => None,
        }
    }
}

/// Timestamp formats buildx has printed `Last Activity` in
const LAST_ACTIVITY_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z %Z", "%Y-%m-%d %H:%M:%S %z"];

/// Parse `docker buildx inspect` output into a builder record
///
/// The first `Name:` line names the builder; each subsequent `Name:`
/// line closes the node under construction (if it accumulated any
/// field) and opens a new one. Unrecognized lines are skipped.
pub fn parse_inspect(text: &str) -> BuilderInfo {
    let mut builder = BuilderInfo::default();
    let mut node = NodeInfo::default();

    for line in text.trim().lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest
            .split(':')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(":");
        if key.is_empty() || value.is_empty() {
            continue;
        }

        let Some(field) = InspectField::from_key(key.trim().to_lowercase().as_str()) else {
            continue;
        };
        match field {
            InspectField::Name => {
                if builder.name.is_none() {
                    builder.name = Some(value);
                } else {
                    if !node.is_empty() {
                        builder.nodes.push(node);
                    }
                    node = NodeInfo {
                        name: Some(value),
                        ..NodeInfo::default()
                    };
                }
            }
            InspectField::Driver => builder.driver = Some(value),
            InspectField::LastActivity => builder.last_activity = parse_last_activity(&value),
            InspectField::Endpoint => node.endpoint = Some(value),
            InspectField::DriverOptions => node.driver_opts = Some(parse_driver_opts(&value)),
            InspectField::Status => node.status = Some(value),
            InspectField::Flags => node.buildkitd_flags = Some(value),
            InspectField::Buildkit => node.buildkit_version = Some(value),
            InspectField::Platforms => node.platforms = Some(parse_platforms(&value)),
        }
    }

    if !node.is_empty() {
        builder.nodes.push(node);
    }
    builder
}

fn parse_last_activity(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in LAST_ACTIVITY_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    None
}

/// Extract `key="value"` tokens from a driver-options line, rewriting
/// each to a bare `key=value` string
fn parse_driver_opts(value: &str) -> Vec<String> {
    // regex-lite has no compile-time validation; the pattern is a
    // literal so construction cannot fail
    let re = Regex::new(r#"(\w+)="([^"]*)""#).unwrap();
    re.captures_iter(value)
        .map(|cap| format!("{}={}", &cap[1], &cap[2]))
        .collect()
}

/// Reduce a platforms line to a comma-joined list
///
/// A `*` marker on a platform denotes an explicitly preferred subset:
/// when any marker is present, only marked platforms are kept (marker
/// stripped). Otherwise every listed platform is kept.
fn parse_platforms(value: &str) -> String {
    let platforms: Vec<String> = if value.contains('*') {
        value
            .split(',')
            .filter(|p| p.contains('*'))
            .map(|p| p.replace('*', "").trim().to_string())
            .collect()
    } else {
        value.split(',').map(|p| p.trim().to_string()).collect()
    };
    platforms.join(",")
}
