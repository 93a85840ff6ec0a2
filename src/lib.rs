//! Keeps the basic and advanced settings tabs of a video component in step.
//!
//! The basic tab shows a display name and a three-slot video list; the
//! advanced tab holds the raw `display_name`, `sub`, `html5_sources` and
//! `youtube_id_1_0` fields. [`editor::Editor`] maps one onto the other.

pub mod collection;
pub mod config;
pub mod editor;
pub mod error;
pub mod field;
pub mod link;
pub mod storage;

pub use collection::{FieldCollection, RawMetadata};
pub use config::SyncConfig;
pub use editor::{Container, Editor, MetadataEditor, MetadataView};
pub use error::MetadataError;
pub use field::{Field, FieldType, FieldValue};
pub use storage::{SessionStorage, Storage};
