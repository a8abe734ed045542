//! Secret resolution
//!
//! Turns user-supplied `KEY=VALUE` secret pairs into the reference
//! strings buildx accepts (`id=<key>,src=<path>` or
//! `id=<key>,env=<name>`). The raw secret value never appears in the
//! returned reference; string- and file-backed secrets are staged into
//! a fresh temp file under the caller's temp directory and referenced
//! by path.

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors during secret resolution
#[derive(Debug, Error)]
pub enum SecretError {
    /// Input does not match `KEY=VALUE` with non-empty key and value
    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    /// File-backed secret points at an unreadable path
    #[error("secret file {0} not found")]
    FileNotFound(String),

    /// Staging the secret into a temp file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Split a `KEY=VALUE` pair, rejecting empty keys and values
///
/// The value may itself contain `=`; only the first one delimits.
fn parse_kvp(kvp: &str) -> Result<(&str, &str), SecretError> {
    match kvp.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok((key, value)),
        _ => Err(SecretError::InvalidSecret(kvp.to_string())),
    }
}

/// Write `content` to a fresh temp file under `tmp_dir` and return its path
fn stage_secret(tmp_dir: &Path, content: &[u8]) -> Result<String, SecretError> {
    let mut file = tempfile::Builder::new()
        .prefix(".secret-")
        .tempfile_in(tmp_dir)?;
    file.write_all(content)?;
    let (_, path) = file.keep().map_err(|e| SecretError::Io(e.error))?;
    Ok(path.to_string_lossy().into_owned())
}

/// Resolve an environment-backed secret: `KEY=ENVNAME` -> `id=KEY,env=ENVNAME`
///
/// No file is written; buildx reads the variable itself.
pub fn resolve_secret_env(kvp: &str) -> Result<String, SecretError> {
    let (key, value) = parse_kvp(kvp)?;
    Ok(format!("id={key},env={value}"))
}

/// Resolve an inline secret: the value is written verbatim to a temp
/// file and referenced as `id=KEY,src=<path>`
pub fn resolve_secret_string(kvp: &str, tmp_dir: &Path) -> Result<String, SecretError> {
    let (key, value) = parse_kvp(kvp)?;
    let path = stage_secret(tmp_dir, value.as_bytes())?;
    Ok(format!("id={key},src={path}"))
}

/// Resolve a file-backed secret: the value names a file whose content
/// is copied to a temp file and referenced as `id=KEY,src=<path>`
pub fn resolve_secret_file(kvp: &str, tmp_dir: &Path) -> Result<String, SecretError> {
    let (key, value) = parse_kvp(kvp)?;
    let content =
        fs::read(value).map_err(|_| SecretError::FileNotFound(value.to_string()))?;
    let path = stage_secret(tmp_dir, &content)?;
    Ok(format!("id={key},src={path}"))
}

/// True iff any secret entry's key is the literal `GIT_AUTH_TOKEN`
pub fn has_git_auth_token_secret(secrets: &[String]) -> bool {
    secrets
        .iter()
        .any(|kvp| matches!(kvp.split_once('='), Some(("GIT_AUTH_TOKEN", _))))
}
