use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One media file available for retrieval over the static mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub title: String,
    pub date: DateTime<Utc>,
    pub file_source: String,
}

impl MediaEntry {
    pub fn from_file_name(title: String, mount_prefix: &str) -> Self {
        Self {
            file_source: format!("{}/{}", mount_prefix, title),
            date: Utc::now(),
            title,
        }
    }
}

/// Parsed metadata document: known tag names plus per-file tag lists.
///
/// `tags` values carry no meaning here; only the key set is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub tags: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub items: HashMap<String, MediaItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItemRecord {
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MetadataDocument {
    /// Tag names in document order.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.keys().cloned().collect()
    }

    /// Tag list for a file, empty when the file has no metadata record.
    pub fn tags_for(&self, title: &str) -> &[String] {
        self.items
            .get(title)
            .map(|item| item.tags.as_slice())
            .unwrap_or(&[])
    }
}
