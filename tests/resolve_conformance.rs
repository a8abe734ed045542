//! Build-option resolution conformance tests
//!
//! End-to-end checks over the secret, exporter, and attestation
//! resolution families, driven by the literal inputs a CI lane
//! actually receives.

use buildx_lane::{
    has_attestation_type, has_docker_exporter, has_git_auth_token_secret, has_local_exporter,
    has_tar_exporter, resolve_attestation_attrs, resolve_provenance_attrs, resolve_secret_env,
    resolve_secret_file, resolve_secret_string, RunContext,
};
use std::fs;

fn entries(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn run_context() -> RunContext {
    RunContext {
        server_url: "https://github.com".to_string(),
        repository: "docker/test-docker-action".to_string(),
        run_id: "1234567890".to_string(),
        run_attempt: "1".to_string(),
    }
}

const RUN_URL: &str =
    "https://github.com/docker/test-docker-action/actions/runs/1234567890/attempts/1";

// =============================================================================
// Secrets
// =============================================================================

#[test]
fn test_secret_env_reference_shape() {
    assert_eq!(
        resolve_secret_env("GIT_AUTH_TOKEN=abcdefg").unwrap(),
        "id=GIT_AUTH_TOKEN,env=abcdefg"
    );
}

#[test]
fn test_secret_rejections_name_the_input() {
    for bad in ["", "MYSECRET", "=VALUE", "MYSECRET=", "="] {
        let err = resolve_secret_env(bad).unwrap_err();
        assert_eq!(err.to_string(), format!("invalid secret: {bad}"));
    }
}

#[test]
fn test_string_secret_reference_never_contains_value() {
    let tmp = tempfile::tempdir().unwrap();
    let resolved = resolve_secret_string("API_KEY=hunter2", tmp.path()).unwrap();
    assert!(resolved.starts_with("id=API_KEY,src="));
    assert!(!resolved.contains("hunter2"));
    let path = resolved.strip_prefix("id=API_KEY,src=").unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "hunter2");
}

#[test]
fn test_multiline_string_secret_kept_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let resolved =
        resolve_secret_string("KEY=-----BEGIN-----\nline1\nline2\n-----END-----", tmp.path())
            .unwrap();
    let path = resolved.strip_prefix("id=KEY,src=").unwrap();
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "-----BEGIN-----\nline1\nline2\n-----END-----"
    );
}

#[test]
fn test_file_secret_missing_path_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let kvp = format!("KEY={}", missing.display());
    let err = resolve_secret_file(&kvp, tmp.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("secret file {} not found", missing.display())
    );
}

#[test]
fn test_git_auth_token_key_must_match_exactly() {
    assert!(has_git_auth_token_secret(&entries(&[
        "FOO=bar",
        "GIT_AUTH_TOKEN=tok",
    ])));
    assert!(!has_git_auth_token_secret(&entries(&["GIT_AUTH_TOKEN"])));
    assert!(!has_git_auth_token_secret(&entries(&["git_auth_token=tok"])));
}

// =============================================================================
// Exporters
// =============================================================================

#[test]
fn test_exporter_classification_under_quote_noise() {
    assert!(has_local_exporter(&entries(&["type=local,dest=./out"])));
    assert!(has_local_exporter(&entries(&["\" type= local\" , dest=./out"])));
    assert!(has_local_exporter(&entries(&["."])));
    assert!(!has_local_exporter(&entries(&["type=tar,dest=/tmp/x"])));

    assert!(has_tar_exporter(&entries(&["\"type=tar\" , \"dest=./out.tar\""])));
    assert!(!has_tar_exporter(&entries(&["\" type= local\" , dest=./out"])));
}

#[test]
fn test_docker_exporter_load_interaction() {
    // explicit docker exporter wins regardless of load
    assert!(has_docker_exporter(&entries(&["type=docker"]), false));
    // load with no exporters means the implicit docker-load default
    assert!(has_docker_exporter(&[], true));
    assert!(!has_docker_exporter(&[], false));
    // the `.` shorthand only counts as docker when load is set
    assert!(has_docker_exporter(&entries(&["."]), true));
    assert!(!has_docker_exporter(&entries(&["."]), false));
    // the implicit default applies to an empty exporter list only
    assert!(!has_docker_exporter(&entries(&["type=local,dest=./out"]), true));
}

// =============================================================================
// Attestations / provenance
// =============================================================================

#[test]
fn test_attestation_type_lookup() {
    assert!(has_attestation_type("provenance", "type=provenance,mode=min"));
    assert!(has_attestation_type("sbom", "\"type=sbom\",generator=img"));
    assert!(!has_attestation_type("sbom", "type=provenance,mode=min"));
}

#[test]
fn test_attestation_boolean_shorthand() {
    assert_eq!(
        resolve_attestation_attrs("type=provenance,true"),
        "type=provenance,disabled=false"
    );
    assert_eq!(
        resolve_attestation_attrs("type=provenance,false"),
        "type=provenance,disabled=true"
    );
    assert_eq!(resolve_attestation_attrs(""), "");
}

#[test]
fn test_attestation_full_form_round_trips() {
    for input in [
        "type=provenance,mode=max",
        "type=sbom,generator=docker/scout-sbom-indexer:latest",
        "type=provenance,disabled=true",
    ] {
        assert_eq!(resolve_attestation_attrs(input), input);
    }
}

#[test]
fn test_provenance_defaults() {
    let ctx = run_context();
    assert_eq!(
        resolve_provenance_attrs("", &ctx),
        format!("builder-id={RUN_URL}")
    );
    assert_eq!(
        resolve_provenance_attrs("true", &ctx),
        format!("builder-id={RUN_URL}")
    );
    assert_eq!(resolve_provenance_attrs("false", &ctx), "false");
}

#[test]
fn test_provenance_explicit_builder_id_preserved() {
    let ctx = run_context();
    assert_eq!(
        resolve_provenance_attrs("builder-id=foo", &ctx),
        "builder-id=foo"
    );
    assert_eq!(
        resolve_provenance_attrs("mode=max,builder-id=foo", &ctx),
        "mode=max,builder-id=foo"
    );
}

#[test]
fn test_provenance_appends_default_builder_id() {
    let ctx = run_context();
    assert_eq!(
        resolve_provenance_attrs("mode=min,inline-only=true", &ctx),
        format!("mode=min,inline-only=true,builder-id={RUN_URL}")
    );
}
