//! CI run-identity context
//!
//! The provenance attestation defaults its `builder-id` to the URL of
//! the workflow run that produced the image. That identity comes from
//! the standard CI environment variables; workflow inputs arrive the
//! same way, as `INPUT_<NAME>` variables.

use std::env;

use crate::options::resolve_provenance_attrs;

/// Boolean spellings accepted by the workflow input retrieval layer
const TRUE_VALUES: &[&str] = &["true", "True", "TRUE"];
const FALSE_VALUES: &[&str] = &["false", "False", "FALSE"];

/// Identity of the current workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Server base URL (e.g., "https://github.com")
    pub server_url: String,
    /// Owner/repo slug (e.g., "org/repo")
    pub repository: String,
    /// Run identifier
    pub run_id: String,
    /// Run attempt, starting at 1
    pub run_attempt: String,
}

impl RunContext {
    /// Build the context from the CI environment
    pub fn from_env() -> Self {
        Self {
            server_url: env::var("GITHUB_SERVER_URL")
                .unwrap_or_else(|_| "https://github.com".to_string()),
            repository: env::var("GITHUB_REPOSITORY").unwrap_or_default(),
            run_id: env::var("GITHUB_RUN_ID").unwrap_or_default(),
            run_attempt: env::var("GITHUB_RUN_ATTEMPT").unwrap_or_else(|_| "1".to_string()),
        }
    }

    /// URL of this run, used as the default provenance `builder-id`
    pub fn builder_id_url(&self) -> String {
        format!(
            "{}/{}/actions/runs/{}/attempts/{}",
            self.server_url, self.repository, self.run_id, self.run_attempt
        )
    }
}

/// Read a provenance-shaped workflow input
///
/// Unset or empty inputs yield the empty string. Boolean-shaped values
/// resolve through [`resolve_provenance_attrs`] with the canonical
/// lowercase literal; anything else is normalized as a provenance
/// attribute string, gaining the default `builder-id` when absent.
pub fn get_provenance_input(name: &str, ctx: &RunContext) -> String {
    let var = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    let input = env::var(var).unwrap_or_default();
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    if TRUE_VALUES.contains(&input) {
        resolve_provenance_attrs("true", ctx)
    } else if FALSE_VALUES.contains(&input) {
        resolve_provenance_attrs("false", ctx)
    } else {
        resolve_provenance_attrs(input, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RunContext {
        RunContext {
            server_url: "https://github.com".to_string(),
            repository: "org/repo".to_string(),
            run_id: "99".to_string(),
            run_attempt: "1".to_string(),
        }
    }

    #[test]
    fn test_builder_id_url() {
        assert_eq!(
            ctx().builder_id_url(),
            "https://github.com/org/repo/actions/runs/99/attempts/1"
        );
    }

    #[test]
    fn test_provenance_input_unset() {
        // scoped env var names so parallel tests don't collide
        assert_eq!(get_provenance_input("unset-input-xyz", &ctx()), "");
    }

    #[test]
    fn test_provenance_input_boolean_true() {
        env::set_var("INPUT_PROV_BOOL_CASE", "true");
        assert_eq!(
            get_provenance_input("prov_bool_case", &ctx()),
            "builder-id=https://github.com/org/repo/actions/runs/99/attempts/1"
        );
        env::remove_var("INPUT_PROV_BOOL_CASE");
    }

    #[test]
    fn test_provenance_input_boolean_false() {
        env::set_var("INPUT_PROV_FALSE_CASE", "False");
        assert_eq!(get_provenance_input("prov_false_case", &ctx()), "false");
        env::remove_var("INPUT_PROV_FALSE_CASE");
    }

    #[test]
    fn test_provenance_input_attribute_string() {
        env::set_var("INPUT_PROV_ATTRS_CASE", "mode=max");
        assert_eq!(
            get_provenance_input("prov_attrs_case", &ctx()),
            "mode=max,builder-id=https://github.com/org/repo/actions/runs/99/attempts/1"
        );
        env::remove_var("INPUT_PROV_ATTRS_CASE");
    }
}
