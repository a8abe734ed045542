//! Attestation and provenance attribute normalization
//!
//! Attestation inputs accept a shorthand grammar: a bare `true`/`false`
//! token next to `type=...` toggles the attestation, and a provenance
//! input of just `true` enables it with the default builder identity.
//! These helpers rewrite the shorthands into the full `key=value`
//! attribute strings buildx expects.

use super::attrs::parse_attrs;
use crate::context::RunContext;

/// True iff `attrs` carries a `type` attribute equal to `name`
pub fn has_attestation_type(name: &str, attrs: &str) -> bool {
    parse_attrs(attrs).iter().any(|attr| attr.is("type", name))
}

/// Rewrite bare boolean tokens in an attestation attribute string
///
/// `type=provenance,true` becomes `type=provenance,disabled=false` and
/// `type=provenance,false` becomes `type=provenance,disabled=true`.
/// Attributes already in `key=value` form pass through in order.
pub fn resolve_attestation_attrs(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let attrs: Vec<String> = parse_attrs(input)
        .into_iter()
        .map(|attr| match attr.value {
            Some(value) => format!("{}={}", attr.key, value),
            None => match attr.key.as_str() {
                "true" => "disabled=false".to_string(),
                "false" => "disabled=true".to_string(),
                other => other.to_string(),
            },
        })
        .collect();
    attrs.join(",")
}

/// Normalize a provenance attribute string, defaulting the builder-id
///
/// The boolean literals are special-cased: `true` (and the empty
/// string) yield just the default builder-id attribute, `false` passes
/// through for the caller to disable provenance. Any other input keeps
/// its attributes and gains `builder-id=<run URL>` unless the caller
/// already supplied one.
pub fn resolve_provenance_attrs(input: &str, ctx: &RunContext) -> String {
    match input {
        "" | "true" => format!("builder-id={}", ctx.builder_id_url()),
        "false" => "false".to_string(),
        _ => {
            if parse_attrs(input).iter().any(|a| a.key == "builder-id") {
                input.to_string()
            } else {
                format!("{input},builder-id={}", ctx.builder_id_url())
            }
        }
    }
}
