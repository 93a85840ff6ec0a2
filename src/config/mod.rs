use crate::error::MetadataError;
use crate::link::{LinkCodec, YOUTUBE_BASE_URL};
use crate::storage::TRANSCRIPT_KEY;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// Names of the fields the synchronizer reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    pub display_name: String,
    pub video_url: String,
    pub youtube_id: String,
    pub html5_sources: String,
    pub sub: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            display_name: "display_name".to_string(),
            video_url: "video_url".to_string(),
            youtube_id: "youtube_id_1_0".to_string(),
            html5_sources: "html5_sources".to_string(),
            sub: "sub".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    pub youtube_base_url: String,
    pub transcript_key: String,
    pub fields: FieldNames,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            youtube_base_url: YOUTUBE_BASE_URL.to_string(),
            transcript_key: TRANSCRIPT_KEY.to_string(),
            fields: FieldNames::default(),
        }
    }
}

impl SyncConfig {
    /// Read a YAML file and lay it over the defaults. Keys the file leaves
    /// out keep their default value.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, MetadataError> {
        let overlay: Value = serde_yaml::from_str(content)?;
        let defaults = serde_yaml::to_value(Self::default())?;
        let merged = merge_values(defaults, overlay);
        Ok(serde_yaml::from_value(merged)?)
    }

    pub fn codec(&self) -> LinkCodec {
        LinkCodec::new(&self.youtube_base_url)
    }
}

fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (k, v) in overlay_map {
                let merged = if let Some(base_v) = base_map.remove(&k) {
                    merge_values(base_v, v)
                } else {
                    v
                };
                base_map.insert(k, merged);
            }
            Value::Mapping(base_map)
        }
        (_, overlay) if overlay != Value::Null => overlay,
        (base, _) => base,
    }
}
