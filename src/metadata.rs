//! Build metadata projection
//!
//! `buildx build --metadata-file` writes a flat JSON object of
//! build-result keys. Callers only care about a handful of them; the
//! rest pass through opaquely.

use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Key for the build reference assigned by buildx
const BUILD_REF_KEY: &str = "buildx.build.ref";

/// Key for the pushed image digest
const IMAGE_DIGEST_KEY: &str = "containerimage.digest";

/// Key for the image config digest (the local image ID)
const CONFIG_DIGEST_KEY: &str = "containerimage.config.digest";

/// Errors reading a metadata file's content
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Content is not valid JSON
    #[error("invalid metadata JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Content parsed but is not a JSON object
    #[error("metadata is not a JSON object")]
    NotAnObject,
}

/// The metadata record emitted by a build, as an opaque key/value map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildMetadata(Map<String, Value>);

impl FromStr for BuildMetadata {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match serde_json::from_str(s)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(MetadataError::NotAnObject),
        }
    }
}

impl BuildMetadata {
    /// Look up a string-valued key; non-string values don't project
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The build reference assigned by buildx
    pub fn build_ref(&self) -> Option<&str> {
        self.get(BUILD_REF_KEY)
    }

    /// The pushed image digest
    pub fn digest(&self) -> Option<&str> {
        self.get(IMAGE_DIGEST_KEY)
    }

    /// The image config digest
    pub fn config_digest(&self) -> Option<&str> {
        self.get(CONFIG_DIGEST_KEY)
    }

    /// The whole record, re-serialized
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
