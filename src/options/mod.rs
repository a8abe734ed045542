//! Build-option resolution
//!
//! Pure string-grammar helpers for the user-supplied build options a
//! CI lane forwards to buildx: secret references, exporter
//! classification, and attestation/provenance attribute normalization.
//! Exporter and attestation strings arrive from shell-quoted input and
//! are parsed through one shared tolerant tokenizer.

mod attest;
mod attrs;
mod exporter;
mod secret;

pub use attest::{has_attestation_type, resolve_attestation_attrs, resolve_provenance_attrs};
pub use attrs::{parse_attrs, Attr};
pub use exporter::{has_docker_exporter, has_local_exporter, has_tar_exporter};
pub use secret::{
    has_git_auth_token_secret, resolve_secret_env, resolve_secret_file, resolve_secret_string,
    SecretError,
};
