//! Type descriptor adapters.
//!
//! The transformation policy only ever asks three questions of a type, so a
//! plain record covers callers without a richer introspection source, and
//! `TypeInfo::of` adapts the compiler's own type naming for Rust types.

use crate::types::TypeDescriptor;

/// Rust primitive type names classified as value-like.
const VALUE_LIKE_NAMES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "bool", "char",
];

/// Owned type descriptor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    name: Option<String>,
    value_like: bool,
    builtin_text: bool,
}

impl TypeInfo {
    /// Descriptor for a named composite type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value_like: false,
            builtin_text: false,
        }
    }

    /// Descriptor for an anonymous inline shape with no canonical name.
    pub fn anonymous() -> Self {
        Self {
            name: None,
            value_like: false,
            builtin_text: false,
        }
    }

    /// Mark this type as value-like.
    pub fn value_like(mut self, value_like: bool) -> Self {
        self.value_like = value_like;
        self
    }

    /// Mark this type as the built-in text type.
    pub fn builtin_text(mut self, builtin_text: bool) -> Self {
        self.builtin_text = builtin_text;
        self
    }

    /// Descriptor for a Rust type, named via `std::any::type_name`.
    ///
    /// Primitive numerics, `bool` and `char` classify as value-like;
    /// `String` and `str` as the built-in text type. The canonical name keeps
    /// whatever path qualification the compiler reports.
    pub fn of<T: ?Sized>() -> Self {
        let name = std::any::type_name::<T>();
        Self {
            name: Some(name.to_string()),
            value_like: VALUE_LIKE_NAMES.contains(&name),
            builtin_text: matches!(name, "alloc::string::String" | "std::string::String" | "str"),
        }
    }
}

impl TypeDescriptor for TypeInfo {
    fn is_value_like(&self) -> bool {
        self.value_like
    }

    fn is_builtin_text(&self) -> bool {
        self.builtin_text
    }

    fn canonical_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
