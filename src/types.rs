//! Core types for display-name rewriting.

use serde::Serialize;
use serde_json::Value;

/// Document key carrying the stable schema identifier annotation.
///
/// Catalog-style viewers read this key for their model listing; its presence
/// also signals that the generating pipeline has assigned this fragment an
/// identifier.
pub const IDENTIFIER_KEY: &str = "x-schema-id";

/// Document key carrying the display title viewers render in context.
pub const TITLE_KEY: &str = "title";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only metadata view over the program type a schema was generated from.
///
/// Deliberately narrow: the three queries below are everything the
/// transformation policy consumes. Implementations adapt whatever
/// introspection source is at hand (see [`crate::TypeInfo`] for a plain
/// record and a `std::any`-based adapter).
pub trait TypeDescriptor {
    /// True for primitive/value-like types (numbers, booleans and the like).
    fn is_value_like(&self) -> bool;

    /// True for the built-in text type.
    fn is_builtin_text(&self) -> bool;

    /// Long-form canonical name, `None` for anonymous or unnameable shapes.
    ///
    /// May contain synthetic nested-name separators (`Order+Item`).
    fn canonical_name(&self) -> Option<&str>;
}

/// Caller-supplied mapping from a type descriptor to a display name.
///
/// `None` means "suppress the name": both output slots are cleared. The
/// mapping must be pure; it is invoked once per transformed fragment and may
/// be called from multiple threads within one document build.
pub type NameMapper = Box<dyn Fn(&dyn TypeDescriptor) -> Option<String> + Send + Sync>;

/// Build a mapper that rewrites the nested-name separator in the canonical
/// name.
///
/// `separator_mapper("+", ".")` turns `Order+Item` into `Order.Item`.
/// Descriptors without a canonical name map to `None`.
pub fn separator_mapper(
    separator: impl Into<String>,
    replacement: impl Into<String>,
) -> NameMapper {
    let separator = separator.into();
    let replacement = replacement.into();
    Box::new(move |descriptor| {
        descriptor
            .canonical_name()
            .map(|name| name.replace(&separator, &replacement))
    })
}

/// Options for display-name rewriting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// When true, value-like and text types are renamed too.
    ///
    /// Off by default: fully-qualified primitive names read as noise, and
    /// primitives have no nesting ambiguity for a rewrite to resolve.
    pub include_value_types: bool,
}

impl TransformOptions {
    /// Options with the default skip policy (value-like and text types exempt).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether value-like and text types are renamed.
    pub fn include_value_types(mut self, include: bool) -> Self {
        self.include_value_types = include;
        self
    }
}

/// Terminal outcome of one per-fragment invocation.
///
/// Every invocation takes exactly one of these paths; the first two leave the
/// fragment untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Value-like or built-in text type exempted by the skip policy.
    SkippedValueType,
    /// No identifier assigned upstream; not a named model, or already handled.
    SkippedUnidentified,
    /// Mapper invoked and its result written to both slots.
    Transformed,
}
