//! Normalization of `jsonschema` errors into [`SchemaViolation`]s.
//!
//! Messages and `params` keys follow Ajv's conventions (`missingProperty`,
//! `allowedValues`, `limit`, `comparison`, ...), so a formatter can rebuild
//! a human message from the params alone. Messages never embed the failing
//! instance: for a `required` failure that instance is the whole parent
//! object.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::ValidationError;
use llmyml_core::SchemaViolation;
use serde_json::{json, Map, Value};

pub(crate) fn to_violation(err: &ValidationError<'_>) -> SchemaViolation {
    let (message, params) = match describe(&err.kind) {
        Some((message, params)) => (message, params),
        None => (err.masked().to_string(), None),
    };
    SchemaViolation::new(
        err.instance_path.to_string(),
        message,
        params,
        err.schema_path.to_string(),
    )
}

type Described = (String, Option<Map<String, Value>>);

fn params(pairs: &[(&str, Value)]) -> Option<Map<String, Value>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

fn bound(comparison: &str, limit: &Value) -> Described {
    (
        format!("must be {comparison} {limit}"),
        params(&[("comparison", json!(comparison)), ("limit", limit.clone())]),
    )
}

fn count_limit(relation: &str, limit: u64, unit: &str) -> Described {
    (
        format!("must NOT have {relation} than {limit} {unit}"),
        params(&[("limit", json!(limit))]),
    )
}

fn describe(kind: &ValidationErrorKind) -> Option<Described> {
    let described = match kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            (
                format!("must have required property '{name}'"),
                params(&[("missingProperty", json!(name))]),
            )
        }
        ValidationErrorKind::Type { kind } => {
            let types = match kind {
                TypeKind::Single(t) => t.to_string(),
                TypeKind::Multiple(set) => (*set)
                    .into_iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            };
            (format!("must be {types}"), params(&[("type", json!(types))]))
        }
        ValidationErrorKind::Enum { options } => (
            "must be equal to one of the allowed values".to_string(),
            params(&[("allowedValues", options.clone())]),
        ),
        ValidationErrorKind::Constant { expected_value } => (
            "must be equal to constant".to_string(),
            params(&[("allowedValue", expected_value.clone())]),
        ),
        ValidationErrorKind::MinLength { limit } => count_limit("fewer", *limit, "characters"),
        ValidationErrorKind::MaxLength { limit } => count_limit("more", *limit, "characters"),
        ValidationErrorKind::MinItems { limit } => count_limit("fewer", *limit, "items"),
        ValidationErrorKind::MaxItems { limit } => count_limit("more", *limit, "items"),
        ValidationErrorKind::MinProperties { limit } => {
            count_limit("fewer", *limit, "properties")
        }
        ValidationErrorKind::MaxProperties { limit } => count_limit("more", *limit, "properties"),
        ValidationErrorKind::Minimum { limit } => bound(">=", limit),
        ValidationErrorKind::Maximum { limit } => bound("<=", limit),
        ValidationErrorKind::ExclusiveMinimum { limit } => bound(">", limit),
        ValidationErrorKind::ExclusiveMaximum { limit } => bound("<", limit),
        ValidationErrorKind::MultipleOf { multiple_of } => (
            format!("must be multiple of {multiple_of}"),
            params(&[("multipleOf", json!(multiple_of))]),
        ),
        ValidationErrorKind::Pattern { pattern } => (
            format!("must match pattern \"{pattern}\""),
            params(&[("pattern", json!(pattern))]),
        ),
        ValidationErrorKind::Format { format } => (
            format!("must match format \"{format}\""),
            params(&[("format", json!(format))]),
        ),
        ValidationErrorKind::AdditionalProperties { unexpected } => (
            format!(
                "must NOT have additional properties: {}",
                unexpected.join(", ")
            ),
            params(&[("additionalProperties", json!(unexpected))]),
        ),
        ValidationErrorKind::UniqueItems => ("must NOT have duplicate items".to_string(), None),
        ValidationErrorKind::AnyOf => ("must match a schema in anyOf".to_string(), None),
        ValidationErrorKind::OneOfNotValid | ValidationErrorKind::OneOfMultipleValid => {
            ("must match exactly one schema in oneOf".to_string(), None)
        }
        ValidationErrorKind::Not { .. } => ("must NOT be valid".to_string(), None),
        ValidationErrorKind::FalseSchema => ("boolean schema is false".to_string(), None),
        ValidationErrorKind::Contains => {
            ("must contain at least 1 valid item".to_string(), None)
        }
        _ => return None,
    };
    Some(described)
}
