//! Registration surface for per-fragment transformers.

use crate::fragment::SchemaFragment;
use crate::transformer::{DisplayNameTransformer, FragmentTransformer};
use crate::types::{NameMapper, Outcome, TransformOptions, TypeDescriptor};

/// Pipeline configuration handle holding the registered fragment
/// transformers.
///
/// The document pipeline owns one of these. Callers register transformers at
/// configuration time; the pipeline calls [`run`](Self::run) once per
/// generated fragment. Registration performs no validation and the methods
/// return `&mut Self` for chaining:
///
/// ```
/// use schema_retitle::{separator_mapper, GeneratorSettings, TransformOptions};
///
/// let mut settings = GeneratorSettings::new();
/// settings
///     .add_display_names(separator_mapper("+", "."), TransformOptions::default());
/// ```
#[derive(Default)]
pub struct GeneratorSettings {
    transformers: Vec<Box<dyn FragmentTransformer>>,
}

impl GeneratorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register display-name rewriting with the given mapper and skip policy.
    pub fn add_display_names(
        &mut self,
        mapper: NameMapper,
        options: TransformOptions,
    ) -> &mut Self {
        self.add_fragment_transformer(Box::new(DisplayNameTransformer::with_options(
            mapper, options,
        )))
    }

    /// Register an arbitrary fragment transformer.
    pub fn add_fragment_transformer(
        &mut self,
        transformer: Box<dyn FragmentTransformer>,
    ) -> &mut Self {
        self.transformers.push(transformer);
        self
    }

    /// True when no transformer has been registered.
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Invoke every registered transformer on one fragment, in registration
    /// order.
    ///
    /// Returns one outcome per transformer. Fragments are independent of each
    /// other; the host may call this in any fragment order, from one thread
    /// or several.
    pub fn run(
        &self,
        fragment: &mut SchemaFragment<'_>,
        descriptor: &dyn TypeDescriptor,
    ) -> Vec<Outcome> {
        self.transformers
            .iter()
            .map(|transformer| transformer.transform(fragment, descriptor))
            .collect()
    }
}
