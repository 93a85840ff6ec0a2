use crate::collection::{self, FieldCollection, RawMetadata};
use crate::config::SyncConfig;
use crate::error::MetadataError;
use crate::field::{Field, FieldValue};
use crate::link::{LinkCodec, VideoSources, YOUTUBE_ID_LEN};
use crate::storage::Storage;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Attribute on the host element holding the JSON metadata dictionary.
pub const METADATA_ATTRIBUTE: &str = "data-metadata";

// ─── Container ───

/// The host element the editor is mounted on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl Container {
    pub fn new(class: &str) -> Self {
        Self {
            classes: class.split_whitespace().map(str::to_string).collect(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

// ─── Metadata views ───

/// A settings view that can report edits not yet written to its collection.
pub trait MetadataView {
    fn modified_metadata_values(&self) -> Map<String, Value>;
}

impl MetadataView for FieldCollection {
    fn modified_metadata_values(&self) -> Map<String, Value> {
        self.modified_values()
    }
}

/// Field editor view bound to a container and a collection's field names.
/// Edits stay pending until committed into the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEditor {
    container: Container,
    field_names: Vec<String>,
    pending: Map<String, Value>,
}

impl MetadataEditor {
    pub fn new(container: &Container, collection: &FieldCollection) -> Self {
        Self {
            container: container.clone(),
            field_names: collection.models().iter().map(|f| f.name().to_string()).collect(),
            pending: Map::new(),
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn is_bound_to(&self, collection: &FieldCollection) -> bool {
        self.field_names.len() == collection.len()
            && self
                .field_names
                .iter()
                .zip(collection.models())
                .all(|(name, field)| name == field.name())
    }

    /// Record an edit. Returns false for names outside the bound collection.
    pub fn edit(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        if !self.field_names.iter().any(|n| n == name) {
            return false;
        }
        self.pending.insert(name.to_string(), value.into().to_json());
        true
    }

    pub fn discard(&mut self) {
        self.pending.clear();
    }

    /// Write pending edits into `collection` and forget them.
    pub fn commit(&mut self, collection: &mut FieldCollection) {
        for (name, value) in std::mem::take(&mut self.pending) {
            match FieldValue::from_json(&value) {
                Some(v) => {
                    collection.set_value(&name, v);
                }
                None => warn!(field = %name, "dropping pending edit with unsupported value"),
            }
        }
    }
}

impl MetadataView for MetadataEditor {
    fn modified_metadata_values(&self) -> Map<String, Value> {
        self.pending.clone()
    }
}

// ─── Editor ───

/// The basic settings tab of a video component, and the synchronizer
/// between it and the advanced tab.
#[derive(Debug)]
pub struct Editor<S> {
    container: Container,
    collection: FieldCollection,
    metadata_view: MetadataEditor,
    storage: S,
    config: SyncConfig,
    codec: LinkCodec,
}

impl<S: Storage> Editor<S> {
    pub fn new(container: Container, storage: S) -> Result<Self, MetadataError> {
        Self::with_config(container, storage, SyncConfig::default())
    }

    pub fn with_config(container: Container, storage: S, config: SyncConfig) -> Result<Self, MetadataError> {
        let metadata = container
            .attribute(METADATA_ATTRIBUTE)
            .ok_or_else(|| MetadataError::MissingAttribute(METADATA_ATTRIBUTE.to_string()))?;
        let collection = FieldCollection::from_metadata(metadata)?;
        let metadata_view = MetadataEditor::new(&container, &collection);
        let codec = config.codec();
        debug!(fields = collection.len(), "basic tab initialized");
        Ok(Self {
            container,
            collection,
            metadata_view,
            storage,
            config,
            codec,
        })
    }

    pub fn to_models(&self, input: impl Into<RawMetadata>) -> Result<Vec<Field>, MetadataError> {
        collection::to_models(input)
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn collection(&self) -> &FieldCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut FieldCollection {
        &mut self.collection
    }

    pub fn metadata_view(&self) -> &MetadataEditor {
        &self.metadata_view
    }

    pub fn metadata_view_mut(&mut self) -> &mut MetadataEditor {
        &mut self.metadata_view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Tear the editor down, handing back the basic collection and storage.
    pub fn into_parts(self) -> (FieldCollection, S) {
        (self.collection, self.storage)
    }

    /// Advanced tab → basic tab.
    ///
    /// Rebuilds the video list from `youtube_id_1_0` and `html5_sources` and
    /// copies the display name. Values in the view's modified snapshot take
    /// precedence over the committed ones. A missing collection means the
    /// advanced tab was never rendered, and nothing changes.
    pub fn sync_basic_tab(&mut self, advanced: Option<&FieldCollection>, view: Option<&dyn MetadataView>) {
        let Some(advanced) = advanced else {
            debug!("no advanced collection, basic tab left as is");
            return;
        };
        let modified = view.map(|v| v.modified_metadata_values()).unwrap_or_default();
        let names = &self.config.fields;

        let youtube = resolve(advanced, &modified, &names.youtube_id);
        let html5 = resolve(advanced, &modified, &names.html5_sources);
        let youtube_id = youtube.as_ref().and_then(FieldValue::as_text);
        let sources = html5.as_ref().and_then(FieldValue::as_list).unwrap_or(&[]);

        match youtube_id {
            Some(id) if !id.is_empty() && id.chars().count() != YOUTUBE_ID_LEN => {
                warn!(id, "youtube id is not {YOUTUBE_ID_LEN} characters, leaving link empty");
            }
            None if youtube.is_some() => warn!("youtube id is not a string, leaving link empty"),
            _ => {}
        }

        let video_list = self.codec.compose_video_list(youtube_id, sources);
        debug!(?video_list, "basic video list rebuilt");
        self.collection.set_value(&names.video_url, video_list);

        if let Some(display_name) = resolve(advanced, &modified, &names.display_name) {
            self.collection.set_value(&names.display_name, display_name);
        }

        // A transcript picked in the advanced tab must survive the next
        // basic → advanced pass.
        if let Some(Value::String(sub)) = modified.get(&names.sub) {
            if self.storage.get(&self.config.transcript_key).as_deref() != Some(sub.as_str()) {
                debug!(sub = %sub, "storing transcript edited in advanced tab");
                self.storage.set(&self.config.transcript_key, sub);
            }
        }
    }

    /// Basic tab → advanced tab.
    ///
    /// Splits the video list into `youtube_id_1_0` and `html5_sources`, copies
    /// `display_name`, and applies a stored timed transcript. The transcript
    /// setter only runs when the stored value differs from the field.
    pub fn sync_advanced_tab(&mut self, advanced: Option<&mut FieldCollection>) {
        let Some(advanced) = advanced else {
            debug!("no advanced collection, nothing to sync");
            return;
        };
        let names = &self.config.fields;

        if let Some(field) = self.collection.find_by_name(&names.video_url) {
            let VideoSources {
                youtube_id,
                html5_sources,
            } = match field.value() {
                FieldValue::List(items) => self.codec.split_video_list(items),
                FieldValue::Text(s) => self.codec.split_video_list(std::slice::from_ref(s)),
            };
            debug!(%youtube_id, ?html5_sources, "advanced video fields rebuilt");
            advanced.set_value(&names.html5_sources, html5_sources);
            advanced.set_value(&names.youtube_id, youtube_id);
        }

        if let Some(display_name) = self.collection.value_of(&names.display_name) {
            advanced.set_value(&names.display_name, display_name.clone());
        }

        if let Some(sub) = self.storage.get(&self.config.transcript_key) {
            let current = advanced.value_of(&names.sub).and_then(FieldValue::as_text);
            if current != Some(sub.as_str()) && advanced.set_value(&names.sub, sub.as_str()) {
                debug!(sub = %sub, "timed transcript applied");
            }
        }
    }
}

fn resolve(advanced: &FieldCollection, modified: &Map<String, Value>, name: &str) -> Option<FieldValue> {
    modified
        .get(name)
        .and_then(FieldValue::from_json)
        .or_else(|| advanced.find_by_name(name).map(|f| f.display_value().clone()))
}
