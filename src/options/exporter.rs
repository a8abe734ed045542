//! Exporter classification
//!
//! Decides which output backends a set of exporter entries asks for.
//! The `.` entry is the shorthand for exporting to the local build
//! context directory; an empty exporter list combined with `load`
//! means the implicit docker-load default.

use super::attrs::parse_attrs;

/// True iff any entry's `type` attribute equals `name`
fn has_exporter_type(name: &str, exporters: &[String]) -> bool {
    exporters
        .iter()
        .any(|entry| parse_attrs(entry).iter().any(|attr| attr.is("type", name)))
}

/// True iff any entry requests the local-directory exporter, including
/// the `.` shorthand
pub fn has_local_exporter(exporters: &[String]) -> bool {
    exporters.iter().any(|e| e == ".") || has_exporter_type("local", exporters)
}

/// True iff any entry requests the tar exporter
pub fn has_tar_exporter(exporters: &[String]) -> bool {
    has_exporter_type("tar", exporters)
}

/// True iff the build loads into the docker image store
///
/// That is: an explicit `type=docker` entry, or `load` with no
/// exporters at all, or `load` with the `.` shorthand.
pub fn has_docker_exporter(exporters: &[String], load: bool) -> bool {
    if has_exporter_type("docker", exporters) {
        return true;
    }
    load && (exporters.is_empty() || exporters.iter().any(|e| e == "."))
}
