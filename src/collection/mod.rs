use crate::error::MetadataError;
use crate::field::{Field, FieldValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata as handed over by the host view: a parsed mapping of
/// `field_name -> record`, or the same mapping still in JSON text form.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMetadata {
    Parsed(Value),
    Json(String),
}

impl From<Value> for RawMetadata {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}

impl From<&str> for RawMetadata {
    fn from(s: &str) -> Self {
        Self::Json(s.to_string())
    }
}

impl From<String> for RawMetadata {
    fn from(s: String) -> Self {
        Self::Json(s)
    }
}

/// Convert metadata into field models, in document order.
///
/// Both the `{name: record}` mapping and a plain array of records are
/// accepted.
pub fn to_models(input: impl Into<RawMetadata>) -> Result<Vec<Field>, MetadataError> {
    let value = match input.into() {
        RawMetadata::Parsed(value) => value,
        RawMetadata::Json(text) => serde_json::from_str(&text)?,
    };
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(_, record)| serde_json::from_value(record).map_err(MetadataError::from))
            .collect(),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Err(MetadataError::NotAnObject),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCollection {
    fields: Vec<Field>,
}

impl From<Vec<Field>> for FieldCollection {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FieldCollection {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn from_metadata(input: impl Into<RawMetadata>) -> Result<Self, MetadataError> {
        to_models(input).map(Self::new)
    }

    pub fn models(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    pub fn value_of(&self, name: &str) -> Option<&FieldValue> {
        self.find_by_name(name).map(Field::value)
    }

    /// Overwrite the value of an existing field. Returns false, writing
    /// nothing, when no field carries `name`.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.find_by_name_mut(name) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    /// `field_name -> value` for every field changed since load.
    pub fn modified_values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|f| f.is_modified())
            .map(|f| (f.name().to_string(), f.value().to_json()))
            .collect()
    }
}
