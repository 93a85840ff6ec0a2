use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Types ───

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Generic,
    List,
    VideoList,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::List => "List",
            Self::VideoList => "VideoList",
        }
    }

    /// Whether values of this type are sequences of strings.
    pub fn is_sequence(&self) -> bool {
        match self {
            Self::Generic => false,
            Self::List | Self::VideoList => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }

    pub fn empty_of(field_type: FieldType) -> Self {
        if field_type.is_sequence() {
            Self::List(Vec::new())
        } else {
            Self::Text(String::new())
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }

    pub fn from_json(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Interchange shape of a field, as embedded in the editor's `data-metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(default)]
    pub default_value: FieldValue,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub explicitly_set: bool,
    pub field_name: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub options: Vec<Value>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: FieldValue,
}

/// A live field model. Tracks the value it was loaded with and how many
/// times its setter ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "FieldRecord", into = "FieldRecord")]
pub struct Field {
    pub display_name: String,
    pub help: String,
    pub options: Vec<Value>,
    field_name: String,
    field_type: FieldType,
    default_value: FieldValue,
    value: FieldValue,
    explicitly_set: bool,
    original_value: FieldValue,
    original_explicitly_set: bool,
    revision: u64,
}

impl From<FieldRecord> for Field {
    fn from(r: FieldRecord) -> Self {
        Self {
            display_name: r.display_name,
            help: r.help,
            options: r.options,
            field_name: r.field_name,
            field_type: r.field_type,
            default_value: r.default_value,
            original_value: r.value.clone(),
            original_explicitly_set: r.explicitly_set,
            value: r.value,
            explicitly_set: r.explicitly_set,
            revision: 0,
        }
    }
}

impl From<Field> for FieldRecord {
    fn from(f: Field) -> Self {
        Self {
            default_value: f.default_value,
            display_name: f.display_name,
            explicitly_set: f.explicitly_set,
            field_name: f.field_name,
            help: f.help,
            options: f.options,
            field_type: f.field_type,
            value: f.value,
        }
    }
}

// The setter counter and load-time snapshot are bookkeeping, not content.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.field_name == other.field_name
            && self.field_type == other.field_type
            && self.display_name == other.display_name
            && self.help == other.help
            && self.options == other.options
            && self.default_value == other.default_value
            && self.value == other.value
            && self.explicitly_set == other.explicitly_set
    }
}

impl Field {
    pub fn new(name: &str, field_type: FieldType, value: impl Into<FieldValue>) -> Self {
        Self::from(FieldRecord {
            default_value: FieldValue::empty_of(field_type),
            display_name: name.to_string(),
            explicitly_set: true,
            field_name: name.to_string(),
            help: String::new(),
            options: Vec::new(),
            field_type,
            value: value.into(),
        })
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<FieldValue>) -> Self {
        self.default_value = default.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.field_name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn default_value(&self) -> &FieldValue {
        &self.default_value
    }

    pub fn is_explicitly_set(&self) -> bool {
        self.explicitly_set
    }

    /// Number of times the setter has run since the field was loaded.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        self.value = value.into();
        self.explicitly_set = true;
        self.revision += 1;
    }

    /// The value shown to the user: the explicit value, else the default.
    pub fn display_value(&self) -> &FieldValue {
        if self.explicitly_set {
            &self.value
        } else {
            &self.default_value
        }
    }

    pub fn is_modified(&self) -> bool {
        match (self.original_explicitly_set, self.explicitly_set) {
            (false, false) => false,
            (true, true) => self.value != self.original_value,
            _ => true,
        }
    }

    pub fn clear(&mut self) {
        self.value = self.default_value.clone();
        self.explicitly_set = false;
        self.revision += 1;
    }
}
