//! Product records as the server returns them.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

/// A created product, as returned by the server on success.
///
/// The client holds a transient read-only copy for rendering; the server
/// owns the record. Fields beyond these (timestamps, description) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Server-assigned, immutable identifier.
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    /// The serializer emits either a JSON number or a decimal string.
    #[serde(deserialize_with = "decimal_from_number_or_string")]
    pub price: Decimal,
    pub stock: i64,
    pub is_active: bool,
}

/// Field-level validation messages from a rejected submission.
///
/// Keys are unique field names; each maps to that field's messages in server
/// order. The server guarantees no ordering across fields, so entries are
/// kept sorted by field name for deterministic display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields and their messages, sorted by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn decimal_from_number_or_string<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct DecimalVisitor;

    impl de::Visitor<'_> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a number or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            // Going through the shortest decimal representation keeps 9.99
            // as 9.99 instead of the nearest binary expansion.
            value
                .to_string()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Float(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            value
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(DecimalVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_with_numeric_price() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id": 42, "name": "Widget", "price": 9.99, "stock": 3, "is_active": true}"#,
        )
        .expect("record should decode");

        assert_eq!(record.id, 42);
        assert_eq!(record.name, "Widget");
        assert_eq!(record.category_name, None);
        assert_eq!(record.price.to_string(), "9.99");
        assert_eq!(record.stock, 3);
        assert!(record.is_active);
    }

    #[test]
    fn decodes_record_with_string_price_and_category() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id": 7, "name": "Gadget", "category_name": "Tools",
                "price": "120.50", "stock": 0, "is_active": false}"#,
        )
        .expect("record should decode");

        assert_eq!(record.category_name.as_deref(), Some("Tools"));
        assert_eq!(record.price.to_string(), "120.50");
        assert!(!record.is_active);
    }

    #[test]
    fn ignores_extra_server_fields() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Widget", "price": 1, "stock": 1, "is_active": true,
                "description": "x", "created_at": "2026-01-01T00:00:00Z"}"#,
        )
        .expect("record should decode");

        assert_eq!(record.id, 1);
        assert_eq!(record.price.to_string(), "1");
    }

    #[test]
    fn missing_required_field_fails_to_decode() {
        let result: Result<ProductRecord, _> =
            serde_json::from_str(r#"{"id": 1, "name": "Widget"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn decodes_validation_errors() {
        let errors: ValidationErrors = serde_json::from_str(
            r#"{"price": ["must be positive"], "name": ["required", "too short"]}"#,
        )
        .expect("errors should decode");

        let collected: Vec<(&str, &[String])> = errors.iter().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].0, "name");
        assert_eq!(collected[0].1.len(), 2);
        assert_eq!(collected[1].0, "price");
    }

    #[test]
    fn non_mapping_body_fails_to_decode_as_errors() {
        assert!(serde_json::from_str::<ValidationErrors>(r#""detail""#).is_err());
        assert!(serde_json::from_str::<ValidationErrors>(r#"{"detail": "nope"}"#).is_err());
    }
}
