//! Schema Display-Name Rewriting
//!
//! Document generators derive schema identifiers from reflection names, which
//! leak synthetic nested-name separators into the finished document: a type
//! declared inside another surfaces as `Order+Item`. This library plugs into
//! the generator's per-fragment extension point and replaces each schema's
//! identifier with a caller-supplied display name, writing the result to
//! every field downstream viewers read it from (`title`, plus the
//! `x-schema-id` annotation catalog views use).
//!
//! # Example
//!
//! ```
//! use schema_retitle::{
//!     separator_mapper, GeneratorSettings, SchemaFragment, TransformOptions, TypeInfo,
//! };
//! use serde_json::json;
//!
//! let mut settings = GeneratorSettings::new();
//! settings.add_display_names(separator_mapper("+", "."), TransformOptions::default());
//!
//! // Invoked by the pipeline once per generated schema fragment:
//! let mut node = json!({ "type": "object", "x-schema-id": "Item", "properties": {} });
//! let descriptor = TypeInfo::named("Order+Item");
//! let mut fragment = SchemaFragment::new(&mut node).unwrap();
//! settings.run(&mut fragment, &descriptor);
//!
//! assert_eq!(node["x-schema-id"], "Order.Item");
//! assert_eq!(node["title"], "Order.Item");
//! ```
//!
//! # Per-Fragment Outcomes
//!
//! | Outcome | Condition | Effect on fragment |
//! |---------|-----------|--------------------|
//! | `SkippedValueType` | value-like or text type, default policy | none |
//! | `SkippedUnidentified` | no identifier assigned upstream | none |
//! | `Transformed` | otherwise | mapper result written to both slots |
//!
//! The identifier slot's presence is the sole idempotency signal: a second
//! invocation on an already-rewritten fragment rewrites it to the same value
//! (the mapper only sees the type descriptor), and a fragment whose name was
//! suppressed stays suppressed.
//!
//! # Finished Documents
//!
//! [`transform_document`] and [`preview_document`] drive the registered
//! transformers over the reusable-schema section of a document that already
//! exists, which is also what the `schema-retitle` binary does.

mod descriptor;
mod document;
mod error;
mod fragment;
mod loader;
mod settings;
mod transformer;
mod types;

pub use descriptor::TypeInfo;
pub use document::{
    preview_document, transform_document, PreviewEntry, SchemaTypeDescriptor, TransformReport,
};
pub use error::{DocumentError, FragmentError};
pub use fragment::SchemaFragment;
pub use loader::{
    is_url, load_document, load_document_auto, load_document_str, render_document, write_document,
};
pub use settings::GeneratorSettings;
pub use transformer::{DisplayNameTransformer, FragmentTransformer};
pub use types::{
    json_type_name, separator_mapper, NameMapper, Outcome, TransformOptions, TypeDescriptor,
    IDENTIFIER_KEY, TITLE_KEY,
};

#[cfg(feature = "remote")]
pub use loader::load_document_url;
