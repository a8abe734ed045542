//! Buildx Lane - build-option resolution and builder inspection for CI
//!
//! This crate implements the text-handling core of a buildx CI lane:
//! it parses the line-oriented output of `docker buildx inspect` into
//! structured builder/node records, and validates/normalizes the
//! user-supplied build options (secrets, exporters, attestations) that
//! get passed through to buildx. Process execution and stdout capture
//! belong to the calling layer; everything here works on text it is
//! handed.

pub mod context;
pub mod inspect;
pub mod metadata;
pub mod options;

pub use context::{get_provenance_input, RunContext};
pub use inspect::{parse_inspect, BuilderInfo, NodeInfo};
pub use metadata::BuildMetadata;
pub use options::{
    has_attestation_type, has_docker_exporter, has_git_auth_token_secret, has_local_exporter,
    has_tar_exporter, resolve_attestation_attrs, resolve_provenance_attrs, resolve_secret_env,
    resolve_secret_file, resolve_secret_string, SecretError,
};
