//! Driving registered transformers over a finished document.
//!
//! The generation pipeline this crate plugs into is external; for documents
//! that already exist (a file on disk, a service's document endpoint) this
//! module plays the host role. It walks the reusable-schema section, derives
//! a [`TypeDescriptor`] from each node, and dispatches the registered
//! transformers on each fragment.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::fragment::SchemaFragment;
use crate::settings::GeneratorSettings;
use crate::types::{Outcome, TypeDescriptor};

/// JSON primitive `type` keywords treated as value-like.
const VALUE_TYPES: &[&str] = &["boolean", "integer", "number", "string"];

/// Descriptor derived from a named schema node of a finished document.
///
/// The registry key doubles as the canonical name; value-likeness comes from
/// the node's own `type` keyword (a primitive type with no `properties`).
#[derive(Debug, Clone)]
pub struct SchemaTypeDescriptor {
    name: String,
    value_like: bool,
    builtin_text: bool,
}

impl SchemaTypeDescriptor {
    pub fn from_node(name: &str, node: &Value) -> Self {
        let ty = node.get("type").and_then(Value::as_str);
        let has_properties = node.get("properties").is_some();
        let value_like =
            !has_properties && ty.map(|t| VALUE_TYPES.contains(&t)).unwrap_or(false);
        Self {
            name: name.to_string(),
            value_like,
            builtin_text: !has_properties && ty == Some("string"),
        }
    }
}

impl TypeDescriptor for SchemaTypeDescriptor {
    fn is_value_like(&self) -> bool {
        self.value_like
    }

    fn is_builtin_text(&self) -> bool {
        self.builtin_text
    }

    fn canonical_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Counts of per-fragment outcomes across one document pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub transformed: usize,
    pub skipped_value_types: usize,
    pub skipped_unidentified: usize,
}

impl TransformReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Transformed => self.transformed += 1,
            Outcome::SkippedValueType => self.skipped_value_types += 1,
            Outcome::SkippedUnidentified => self.skipped_unidentified += 1,
        }
    }

    /// Total fragments visited.
    pub fn total(&self) -> usize {
        self.transformed + self.skipped_value_types + self.skipped_unidentified
    }
}

/// Per-schema record of what a document pass changes.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    /// Registry key of the schema.
    pub name: String,
    pub outcome: Outcome,
    /// Identifier going into the pass: upstream-assigned, or the registry key.
    pub before: String,
    /// Identifier after the pass; `None` when nothing was written or the
    /// mapping suppressed the name.
    pub after: Option<String>,
}

/// Run the registered transformers over every schema in the document.
///
/// Schemas live under `components/schemas` (OpenAPI 3.x) or `definitions`
/// (Swagger 2.0). The registry key is the identifier the generating pipeline
/// assigned; entries that do not yet carry the identifier annotation have it
/// seeded from their key for the duration of the dispatch, so the
/// idempotency guard sees it. Entries the policy skips are left exactly as
/// they were.
///
/// # Errors
///
/// `DocumentError::NoSchemas` when neither schema section exists;
/// `DocumentError::Fragment` when a schema entry is not an object.
pub fn transform_document(
    document: &mut Value,
    settings: &GeneratorSettings,
) -> Result<TransformReport, DocumentError> {
    let schemas = schemas_mut(document).ok_or(DocumentError::NoSchemas)?;
    let mut report = TransformReport::default();

    for (name, node) in schemas.iter_mut() {
        let descriptor = SchemaTypeDescriptor::from_node(name, node);
        let mut fragment =
            SchemaFragment::new(node).map_err(|source| DocumentError::Fragment {
                name: name.clone(),
                source,
            })?;

        let outcome = run_seeded(&mut fragment, name, &descriptor, settings);
        if let Some(outcome) = outcome {
            report.record(outcome);
        }
    }

    Ok(report)
}

/// Seed the registry key as the upstream identifier, dispatch, and take the
/// seed back out if no transformer wrote anything, so skipped nodes stay
/// byte-identical. Identifiers already present in the document are never
/// removed.
fn run_seeded(
    fragment: &mut SchemaFragment<'_>,
    name: &str,
    descriptor: &dyn TypeDescriptor,
    settings: &GeneratorSettings,
) -> Option<Outcome> {
    let seeded = fragment.identifier().is_none();
    if seeded {
        fragment.set_identifier(Some(name));
    }

    let outcome = overall(&settings.run(fragment, descriptor));
    if seeded && outcome != Some(Outcome::Transformed) {
        fragment.set_identifier(None);
    }
    outcome
}

/// Dry-run variant of [`transform_document`].
///
/// Works on a clone of each schema node and reports what the pass would do,
/// one entry per schema in document order. The input document is not
/// modified.
pub fn preview_document(
    document: &Value,
    settings: &GeneratorSettings,
) -> Result<Vec<PreviewEntry>, DocumentError> {
    let schemas = schemas(document).ok_or(DocumentError::NoSchemas)?;
    let mut entries = Vec::with_capacity(schemas.len());

    for (name, node) in schemas {
        let descriptor = SchemaTypeDescriptor::from_node(name, node);
        let mut scratch = node.clone();
        let mut fragment =
            SchemaFragment::new(&mut scratch).map_err(|source| DocumentError::Fragment {
                name: name.clone(),
                source,
            })?;

        let before = fragment
            .identifier()
            .map(String::from)
            .unwrap_or_else(|| name.clone());

        let Some(outcome) = run_seeded(&mut fragment, name, &descriptor, settings) else {
            continue;
        };

        entries.push(PreviewEntry {
            name: name.clone(),
            outcome,
            before,
            after: fragment.identifier().map(String::from),
        });
    }

    Ok(entries)
}

/// One outcome per fragment: a transform beats either skip, and the
/// value-type exemption beats the unidentified guard. `None` when no
/// transformer is registered.
fn overall(outcomes: &[Outcome]) -> Option<Outcome> {
    if outcomes.is_empty() {
        None
    } else if outcomes.contains(&Outcome::Transformed) {
        Some(Outcome::Transformed)
    } else if outcomes.contains(&Outcome::SkippedValueType) {
        Some(Outcome::SkippedValueType)
    } else {
        Some(Outcome::SkippedUnidentified)
    }
}

fn schemas(document: &Value) -> Option<&Map<String, Value>> {
    document
        .pointer("/components/schemas")
        .or_else(|| document.pointer("/definitions"))
        .and_then(Value::as_object)
}

fn schemas_mut(document: &mut Value) -> Option<&mut Map<String, Value>> {
    if document.pointer("/components/schemas").is_some() {
        document
            .pointer_mut("/components/schemas")
            .and_then(Value::as_object_mut)
    } else {
        document.pointer_mut("/definitions").and_then(Value::as_object_mut)
    }
}
