//! Mutable view over one schema node of a generated document.

use serde_json::{Map, Value};

use crate::error::FragmentError;
use crate::types::{json_type_name, IDENTIFIER_KEY, TITLE_KEY};

/// The two identifier-bearing slots of a schema node.
///
/// The node belongs to the surrounding document and outlives this view;
/// everything other than the identifier annotation and the title is treated
/// as opaque and left untouched. Different downstream viewers read different
/// slots (one renders the title everywhere, another reads the identifier for
/// its model catalog and the title inline), which is why both exist.
pub struct SchemaFragment<'a> {
    node: &'a mut Map<String, Value>,
}

impl<'a> SchemaFragment<'a> {
    /// Borrow a fragment view over a schema node.
    ///
    /// # Errors
    ///
    /// Returns `FragmentError::NotAnObject` when the node is not a JSON object.
    pub fn new(node: &'a mut Value) -> Result<Self, FragmentError> {
        match node {
            Value::Object(map) => Ok(Self { node: map }),
            other => Err(FragmentError::NotAnObject {
                actual: json_type_name(other),
            }),
        }
    }

    /// The identifier annotation, if one has been assigned.
    ///
    /// Non-string values read as unset.
    pub fn identifier(&self) -> Option<&str> {
        self.node.get(IDENTIFIER_KEY).and_then(Value::as_str)
    }

    /// Write or clear the identifier annotation. `None` removes the key.
    pub fn set_identifier(&mut self, name: Option<&str>) {
        write_slot(self.node, IDENTIFIER_KEY, name);
    }

    /// The display title, if one is set.
    pub fn title(&self) -> Option<&str> {
        self.node.get(TITLE_KEY).and_then(Value::as_str)
    }

    /// Write or clear the display title. `None` removes the key.
    pub fn set_title(&mut self, name: Option<&str>) {
        write_slot(self.node, TITLE_KEY, name);
    }
}

fn write_slot(node: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    match value {
        Some(name) => {
            node.insert(key.to_string(), Value::String(name.to_string()));
        }
        None => {
            // shift_remove keeps the order of the remaining keys stable
            node.shift_remove(key);
        }
    }
}
