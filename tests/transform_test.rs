//! Integration tests for display-name rewriting.

use schema_retitle::{
    preview_document, separator_mapper, transform_document, DisplayNameTransformer,
    GeneratorSettings, NameMapper, Outcome, SchemaFragment, TransformOptions, TypeDescriptor,
    TypeInfo,
};
use serde_json::{json, Value};

fn rewrite_nested() -> DisplayNameTransformer {
    DisplayNameTransformer::new(separator_mapper("+", "."))
}

fn apply(transformer: &DisplayNameTransformer, node: &mut Value, descriptor: &TypeInfo) -> Outcome {
    let mut fragment = SchemaFragment::new(node).unwrap();
    transformer.apply(&mut fragment, descriptor)
}

// === Value-Type Exemption ===

mod exemption {
    use super::*;

    #[test]
    fn value_like_untouched_by_default() {
        let mut node = json!({ "type": "integer", "x-schema-id": "int32" });
        let descriptor = TypeInfo::named("System.Int32").value_like(true);

        let outcome = apply(&rewrite_nested(), &mut node, &descriptor);

        assert_eq!(outcome, Outcome::SkippedValueType);
        assert_eq!(node, json!({ "type": "integer", "x-schema-id": "int32" }));
    }

    #[test]
    fn builtin_text_untouched_by_default() {
        let mut node = json!({ "type": "string", "x-schema-id": "string" });
        let descriptor = TypeInfo::named("System.String").builtin_text(true);

        let outcome = apply(&rewrite_nested(), &mut node, &descriptor);

        assert_eq!(outcome, Outcome::SkippedValueType);
        assert!(node.get("title").is_none());
    }

    #[test]
    fn exemption_ignores_mapper_output() {
        // The mapper would produce a name; the policy never consults it.
        let mapper: NameMapper = Box::new(|_| Some("ShouldNeverAppear".to_string()));
        let transformer = DisplayNameTransformer::new(mapper);

        let mut node = json!({ "x-schema-id": "bool" });
        let descriptor = TypeInfo::named("System.Boolean").value_like(true);

        let outcome = apply(&transformer, &mut node, &descriptor);

        assert_eq!(outcome, Outcome::SkippedValueType);
        assert_eq!(node["x-schema-id"], "bool");
        assert!(node.get("title").is_none());
    }

    #[test]
    fn opt_in_transforms_value_like() {
        let transformer = DisplayNameTransformer::with_options(
            separator_mapper("+", "."),
            TransformOptions::new().include_value_types(true),
        );

        let mut node = json!({ "type": "integer", "x-schema-id": "int32" });
        let descriptor = TypeInfo::named("Primitives+Int32").value_like(true);

        let outcome = apply(&transformer, &mut node, &descriptor);

        assert_eq!(outcome, Outcome::Transformed);
        assert_eq!(node["x-schema-id"], "Primitives.Int32");
        assert_eq!(node["title"], "Primitives.Int32");
    }
}

// === Unidentified Fragments ===

mod unidentified {
    use super::*;

    #[test]
    fn unset_identifier_left_alone() {
        let mut node = json!({ "type": "object", "properties": {} });
        let descriptor = TypeInfo::named("Order+Item");

        let outcome = apply(&rewrite_nested(), &mut node, &descriptor);

        assert_eq!(outcome, Outcome::SkippedUnidentified);
        assert!(node.get("x-schema-id").is_none());
        assert!(node.get("title").is_none());
    }

    #[test]
    fn guard_is_independent_of_descriptor() {
        // Named, anonymous, value-like with inclusion on: no identifier means
        // no mutation in every case.
        let transformer = DisplayNameTransformer::with_options(
            separator_mapper("+", "."),
            TransformOptions::new().include_value_types(true),
        );

        for descriptor in [
            TypeInfo::named("Order+Item"),
            TypeInfo::anonymous(),
            TypeInfo::named("System.Int32").value_like(true),
        ] {
            let mut node = json!({ "type": "object" });
            let outcome = apply(&transformer, &mut node, &descriptor);
            assert_eq!(outcome, Outcome::SkippedUnidentified);
            assert_eq!(node, json!({ "type": "object" }));
        }
    }

    #[test]
    fn non_string_identifier_counts_as_unset() {
        let mut node = json!({ "type": "object", "x-schema-id": 7 });
        let descriptor = TypeInfo::named("Order+Item");

        let outcome = apply(&rewrite_nested(), &mut node, &descriptor);
        assert_eq!(outcome, Outcome::SkippedUnidentified);
    }
}

// === Idempotence ===

mod idempotence {
    use super::*;

    #[test]
    fn twice_equals_once() {
        let transformer = rewrite_nested();
        let descriptor = TypeInfo::named("Order+Item");

        let mut node = json!({ "type": "object", "x-schema-id": "Item" });
        apply(&transformer, &mut node, &descriptor);
        let after_one = node.clone();

        apply(&transformer, &mut node, &descriptor);
        assert_eq!(node, after_one);
    }

    #[test]
    fn rewritten_name_cannot_compound() {
        // The mapper reads the descriptor, never the current slot value, so a
        // replacement applied twice cannot stack. A mapper that appends would
        // reveal compounding immediately.
        let mapper: NameMapper =
            Box::new(|d| d.canonical_name().map(|n| format!("{}Dto", n)));
        let transformer = DisplayNameTransformer::new(mapper);
        let descriptor = TypeInfo::named("Order");

        let mut node = json!({ "x-schema-id": "Order" });
        apply(&transformer, &mut node, &descriptor);
        apply(&transformer, &mut node, &descriptor);

        assert_eq!(node["x-schema-id"], "OrderDto");
        assert_eq!(node["title"], "OrderDto");
    }

    #[test]
    fn suppressed_name_stays_suppressed() {
        // Clearing removes the identifier, so every later invocation takes
        // the unidentified path; a fragment cannot be renamed twice.
        let transformer = rewrite_nested();

        let mut node = json!({ "x-schema-id": "anon", "title": "anon" });
        apply(&transformer, &mut node, &TypeInfo::anonymous());
        assert_eq!(node, json!({}));

        let outcome = apply(&transformer, &mut node, &TypeInfo::named("Order+Item"));
        assert_eq!(outcome, Outcome::SkippedUnidentified);
        assert_eq!(node, json!({}));
    }
}

// === Dual Propagation ===

mod dual_propagation {
    use super::*;

    #[test]
    fn both_slots_equal_mapper_output() {
        let descriptor = TypeInfo::named("Billing+Invoice+Line");
        let mapper = separator_mapper("+", ".");
        let expected = mapper(&descriptor);

        let transformer = DisplayNameTransformer::new(separator_mapper("+", "."));
        let mut node = json!({ "type": "object", "x-schema-id": "Line", "title": "Line" });
        apply(&transformer, &mut node, &descriptor);

        assert_eq!(node["x-schema-id"].as_str(), expected.as_deref());
        assert_eq!(node["title"].as_str(), expected.as_deref());
        assert_eq!(node["x-schema-id"], "Billing.Invoice.Line");
    }

    #[test]
    fn absent_mapping_clears_both_slots() {
        let transformer = rewrite_nested();
        let mut node = json!({
            "type": "object",
            "x-schema-id": "Anonymous1",
            "title": "Anonymous1"
        });

        let outcome = apply(&transformer, &mut node, &TypeInfo::anonymous());

        assert_eq!(outcome, Outcome::Transformed);
        assert!(node.get("x-schema-id").is_none());
        assert!(node.get("title").is_none());
    }
}

// === End-to-End Scenarios ===

mod scenarios {
    use super::*;

    #[test]
    fn nested_type_gets_display_friendly_name() {
        let mut node = json!({ "type": "object", "x-schema-id": "Inner" });
        let descriptor = TypeInfo::named("Outer+Inner");

        apply(&rewrite_nested(), &mut node, &descriptor);

        assert_eq!(node["x-schema-id"], "Outer.Inner");
        assert_eq!(node["title"], "Outer.Inner");
    }

    #[test]
    fn builtin_integer_keeps_short_alias() {
        let mut node = json!({ "type": "integer", "format": "int32", "x-schema-id": "int32" });
        let descriptor = TypeInfo::named("System.Int32").value_like(true);

        apply(&rewrite_nested(), &mut node, &descriptor);

        assert_eq!(node["x-schema-id"], "int32");
        assert!(node.get("title").is_none());
    }

    #[test]
    fn anonymous_inline_shape_stays_unnamed() {
        let mut node = json!({ "type": "object", "properties": { "x": { "type": "number" } } });

        apply(&rewrite_nested(), &mut node, &TypeInfo::anonymous());

        assert!(node.get("x-schema-id").is_none());
        assert!(node.get("title").is_none());
    }
}

// === Finished Documents ===

mod documents {
    use super::*;

    fn sample_document() -> Value {
        json!({
            "openapi": "3.0.1",
            "info": { "title": "Orders API", "version": "1.0" },
            "components": {
                "schemas": {
                    "Order": {
                        "type": "object",
                        "properties": { "items": { "type": "array" } }
                    },
                    "Order+Item": {
                        "type": "object",
                        "properties": { "sku": { "type": "string" } }
                    },
                    "int32": { "type": "integer", "format": "int32" }
                }
            }
        })
    }

    fn settings() -> GeneratorSettings {
        let mut settings = GeneratorSettings::new();
        settings.add_display_names(separator_mapper("+", "."), TransformOptions::default());
        settings
    }

    #[test]
    fn document_pass_renames_composites_only() {
        let mut document = sample_document();
        let report = transform_document(&mut document, &settings()).unwrap();

        assert_eq!(report.transformed, 2);
        assert_eq!(report.skipped_value_types, 1);

        let schemas = &document["components"]["schemas"];
        assert_eq!(schemas["Order"]["title"], "Order");
        assert_eq!(schemas["Order+Item"]["title"], "Order.Item");
        assert_eq!(schemas["Order+Item"]["x-schema-id"], "Order.Item");
        assert!(schemas["int32"].get("title").is_none());

        // Nested property schemas are untouched; only the registry entries
        // are fragments here.
        assert!(schemas["Order+Item"]["properties"]["sku"].get("title").is_none());
    }

    #[test]
    fn document_pass_is_idempotent() {
        let mut document = sample_document();
        let settings = settings();

        transform_document(&mut document, &settings).unwrap();
        let once = document.clone();
        transform_document(&mut document, &settings).unwrap();

        assert_eq!(document, once);
    }

    #[test]
    fn preview_matches_apply() {
        let document = sample_document();
        let entries = preview_document(&document, &settings()).unwrap();

        let renamed: Vec<_> = entries
            .iter()
            .filter(|e| e.outcome == Outcome::Transformed)
            .collect();
        assert_eq!(renamed.len(), 2);
        assert_eq!(renamed[1].before, "Order+Item");
        assert_eq!(renamed[1].after.as_deref(), Some("Order.Item"));

        let mut applied = document.clone();
        transform_document(&mut applied, &settings()).unwrap();
        for entry in &entries {
            let node = &applied["components"]["schemas"][&entry.name];
            if entry.outcome == Outcome::Transformed {
                assert_eq!(node["x-schema-id"].as_str(), entry.after.as_deref());
            }
        }
    }

    #[test]
    fn custom_transformer_registration() {
        // The extension point is not limited to the built-in transformer.
        struct UppercaseTitles;

        impl schema_retitle::FragmentTransformer for UppercaseTitles {
            fn transform(
                &self,
                fragment: &mut SchemaFragment<'_>,
                _descriptor: &dyn TypeDescriptor,
            ) -> Outcome {
                match fragment.identifier().map(str::to_uppercase) {
                    Some(upper) => {
                        fragment.set_title(Some(&upper));
                        Outcome::Transformed
                    }
                    None => Outcome::SkippedUnidentified,
                }
            }
        }

        let mut settings = GeneratorSettings::new();
        settings.add_fragment_transformer(Box::new(UppercaseTitles));

        let mut document = json!({
            "components": { "schemas": { "order": { "type": "object", "properties": {} } } }
        });
        transform_document(&mut document, &settings).unwrap();
        assert_eq!(document["components"]["schemas"]["order"]["title"], "ORDER");
    }
}
