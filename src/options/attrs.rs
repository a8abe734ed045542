//! Tolerant attribute tokenizer
//!
//! Exporter and attestation entries are comma-separated `key=value`
//! attribute strings that reach us through shell quoting, so entries
//! like `" type= local" , dest=./out` must parse the same as
//! `type=local,dest=./out`. A naive `split('=')` would also break
//! values like `dest=./x` apart, so attributes split on the first `=`
//! only.

/// One parsed attribute: a key with an optional value
///
/// Bare tokens (no `=`) parse as a key with no value, e.g. the `true`
/// in `type=provenance,true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: Option<String>,
}

/// Strip surrounding whitespace and stray double quotes
fn clean(s: &str) -> &str {
    s.trim().trim_matches('"').trim()
}

/// Tokenize a comma-separated attribute entry
///
/// Quote/whitespace noise is stripped from the whole entry and from
/// each attribute; each attribute splits on its first `=` with spaces
/// around the `=` tolerated. Empty attributes are dropped. Order is
/// preserved.
pub fn parse_attrs(entry: &str) -> Vec<Attr> {
    clean(entry)
        .split(',')
        .map(clean)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => Attr {
                key: clean(key).to_string(),
                value: Some(clean(value).to_string()),
            },
            None => Attr {
                key: part.to_string(),
                value: None,
            },
        })
        .collect()
}

impl Attr {
    /// True if this attribute is `key=value` with the given pair
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.key == key && self.value.as_deref() == Some(value)
    }
}
