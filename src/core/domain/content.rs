//! Repository contents: reads, writes and the commits they produce.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::types::Sha;

/// A file or directory write.
///
/// Creating a file needs no prior state; replacing one requires the SHA of
/// the blob being replaced. The constructors enforce that pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    path: String,
    message: String,
    branch: String,
    content: Vec<u8>,
    replacing: Option<Sha>,
}

impl FileWrite {
    /// Write a new file.
    pub fn create(
        path: impl Into<String>,
        branch: impl Into<String>,
        message: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            branch: branch.into(),
            content: content.into(),
            replacing: None,
        }
    }

    /// Overwrite an existing file whose current blob SHA is `replacing`.
    pub fn replace(
        path: impl Into<String>,
        branch: impl Into<String>,
        message: impl Into<String>,
        content: impl Into<Vec<u8>>,
        replacing: impl Into<Sha>,
    ) -> Self {
        Self {
            replacing: Some(replacing.into()),
            ..Self::create(path, branch, message, content)
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// SHA of the blob being replaced, `None` for a create.
    pub fn replacing(&self) -> Option<&str> {
        self.replacing.as_deref()
    }

    pub(crate) fn body(&self) -> FileWriteBody<'_> {
        FileWriteBody {
            message: &self.message,
            content: STANDARD.encode(&self.content),
            branch: &self.branch,
            sha: self.replacing.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct FileWriteBody<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Kind of a content entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// A file or directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub path: String,
    pub sha: Sha,
    #[serde(default)]
    pub size: u64,
    /// Base64 file body; only present when a single file is read.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentEntry {
    /// Decoded file body, if the response carried one.
    ///
    /// The platform wraps base64 at 60 columns; line breaks are ignored.
    pub fn decoded(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        let encoded = self.content.as_ref()?;
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        Some(STANDARD.decode(compact))
    }
}

/// Result of a content read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// The path addresses a single file (or symlink / submodule).
    File(ContentEntry),
    /// The path addresses a directory; entries in platform order.
    Directory(Vec<ContentEntry>),
    /// Nothing exists at the path for the requested ref.
    NotFound,
}

impl Contents {
    pub fn file(&self) -> Option<&ContentEntry> {
        match self {
            Self::File(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn directory(&self) -> Option<&[ContentEntry]> {
        match self {
            Self::Directory(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Commit metadata returned by a content write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: Option<Sha>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Response to a content write: the new blob and the commit that added it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCommit {
    /// `None` when the write deleted the file.
    #[serde(default)]
    pub content: Option<ContentEntry>,
    pub commit: Commit,
}
