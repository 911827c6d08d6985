//! Logo upload handle.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use marketplace_core::ValueObject;

/// Reference to an uploaded logo file.
///
/// The bytes live wherever the host's upload handler put them; the vendor only
/// keeps this handle plus the stored name (`Vendor::logo_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoFile {
    path: PathBuf,
    original_name: Option<String>,
    mime_type: Option<String>,
    size: u64,
}

impl LogoFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            original_name: None,
            mime_type: None,
            size,
        }
    }

    pub fn with_original_name(mut self, name: impl Into<String>) -> Self {
        self.original_name = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the declared mime type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("image/"))
    }
}

impl ValueObject for LogoFile {}
