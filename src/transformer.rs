//! The per-fragment transformation decision procedure.

use crate::fragment::SchemaFragment;
use crate::types::{NameMapper, Outcome, TransformOptions, TypeDescriptor};

/// Per-fragment callback invoked by the document pipeline for every schema it
/// emits.
///
/// Implementations hold no shared mutable state: the pipeline may process
/// fragments sequentially or concurrently within one build, in any order, and
/// every write must touch only the fragment passed into that invocation.
pub trait FragmentTransformer: Send + Sync {
    /// Transform one schema fragment in place.
    fn transform(
        &self,
        fragment: &mut SchemaFragment<'_>,
        descriptor: &dyn TypeDescriptor,
    ) -> Outcome;
}

/// Rewrites a fragment's identifier and title with a caller-supplied display
/// name.
///
/// Generated identifiers mirror reflection names, so nested types surface
/// with synthetic separators (`Order+Item`). This transformer replaces the
/// identifier with whatever the mapper produces and propagates the result to
/// every slot downstream viewers read it from.
pub struct DisplayNameTransformer {
    mapper: NameMapper,
    options: TransformOptions,
}

impl DisplayNameTransformer {
    /// Transformer with the default skip policy (value-like and text types
    /// exempt).
    pub fn new(mapper: NameMapper) -> Self {
        Self::with_options(mapper, TransformOptions::default())
    }

    pub fn with_options(mapper: NameMapper, options: TransformOptions) -> Self {
        Self { mapper, options }
    }

    /// Apply the decision procedure to one fragment.
    ///
    /// Exactly one of three outcomes:
    ///
    /// 1. Value-like and built-in text types are exempt unless
    ///    `include_value_types` is set; their short aliases read better than a
    ///    qualified name.
    /// 2. A fragment with no identifier is left alone. Absence means the
    ///    pipeline never assigned one (inline or anonymous shape) or the
    ///    fragment was already handled; the identifier's presence is the only
    ///    idempotency signal, so a second invocation on a transformed fragment
    ///    is a no-op.
    /// 3. Otherwise the mapper runs and its result lands in both the
    ///    identifier and title slots. A `None` result clears both.
    ///
    /// A panic in the caller's mapper propagates to the pipeline's own
    /// fragment-processing error path; nothing is suppressed here.
    pub fn apply(
        &self,
        fragment: &mut SchemaFragment<'_>,
        descriptor: &dyn TypeDescriptor,
    ) -> Outcome {
        if !self.options.include_value_types
            && (descriptor.is_value_like() || descriptor.is_builtin_text())
        {
            return Outcome::SkippedValueType;
        }

        if fragment.identifier().is_none() {
            return Outcome::SkippedUnidentified;
        }

        let name = (self.mapper)(descriptor);
        fragment.set_identifier(name.as_deref());
        fragment.set_title(name.as_deref());
        Outcome::Transformed
    }
}

impl FragmentTransformer for DisplayNameTransformer {
    fn transform(
        &self,
        fragment: &mut SchemaFragment<'_>,
        descriptor: &dyn TypeDescriptor,
    ) -> Outcome {
        self.apply(fragment, descriptor)
    }
}
