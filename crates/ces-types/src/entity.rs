use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// A JSON object body: string keys mapped to arbitrary JSON values.
pub type JsonMap = serde_json::Map<String, Value>;

/// Identifier of an entity record.
///
/// Export files carry both numeric and string identifiers; both are treated
/// as opaque and compared structurally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Numeric identifier (e.g. `13`).
    Number(i64),
    /// String identifier (e.g. a UUID or slug).
    Text(String),
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The additive record shape: `{ "type": ..., "id": ..., "data": {...} }`.
///
/// `kind` is the category discriminator (a content-model name such as
/// `api::article.article`). Top-level fields beyond the three known ones are
/// captured in `extra` so that round-trips are lossless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyedEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: EntityId,
    pub data: JsonMap,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl KeyedEntity {
    /// Create a keyed entity with no extra top-level fields.
    pub fn new(kind: impl Into<String>, id: impl Into<EntityId>, data: JsonMap) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            data,
            extra: JsonMap::new(),
        }
    }
}

/// The document record shape: `{ "documentId": ..., ...freeform fields... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntity {
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(flatten)]
    pub fields: JsonMap,
}

impl DocumentEntity {
    /// Create a document entity with no fields beyond the identifier.
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            fields: JsonMap::new(),
        }
    }
}

/// One CMS content item as stored in an entity collection.
///
/// The store is schema-less: a single collection mixes record shapes freely.
/// Deserialization recognizes the two shapes observed in real export files
/// and falls back to an open map for anything else, so no record is ever
/// rejected for its shape alone (non-objects are rejected at the boundary
/// by [`EntityRecord::from_value`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRecord {
    /// `{ "type": ..., "id": ..., "data": {...} }`
    Keyed(KeyedEntity),
    /// `{ "documentId": ..., ... }`
    Document(DocumentEntity),
    /// Any other JSON object, preserved verbatim.
    Open(JsonMap),
}

impl EntityRecord {
    /// Build a record from a parsed JSON value.
    ///
    /// Fails with [`TypeError::NotAnObject`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, TypeError> {
        if !value.is_object() {
            return Err(TypeError::NotAnObject(json_kind(&value)));
        }
        serde_json::from_value(value).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Serialize back into a JSON value.
    pub fn to_value(&self) -> Result<Value, TypeError> {
        serde_json::to_value(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// The category discriminator, when one is present.
    ///
    /// For the keyed shape this is the top-level `type` field; for the other
    /// shapes it is a string-valued `"type"` key if the record carries one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Keyed(k) => Some(&k.kind),
            Self::Document(d) => d.fields.get("type").and_then(Value::as_str),
            Self::Open(map) => map.get("type").and_then(Value::as_str),
        }
    }

    /// Returns `true` if the record's discriminator equals `kind`.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind() == Some(kind)
    }

    /// The document identifier, when one is present in any shape.
    ///
    /// The keyed shape nests it inside `data`; the document shape carries it
    /// at top level.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::Keyed(k) => k.data.get("documentId").and_then(Value::as_str),
            Self::Document(d) => Some(&d.document_id),
            Self::Open(map) => map.get("documentId").and_then(Value::as_str),
        }
    }
}

impl From<KeyedEntity> for EntityRecord {
    fn from(entity: KeyedEntity) -> Self {
        Self::Keyed(entity)
    }
}

impl From<DocumentEntity> for EntityRecord {
    fn from(entity: DocumentEntity) -> Self {
        Self::Document(entity)
    }
}

/// Human-readable name of a JSON value's type, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &str) -> EntityRecord {
        serde_json::from_str(raw).unwrap()
    }

    // -----------------------------------------------------------------------
    // Shape recognition
    // -----------------------------------------------------------------------

    #[test]
    fn keyed_shape_is_recognized() {
        let record = parse(r#"{"type":"api::article.article","id":13,"data":{"documentId":"adhd-intro-guide","title":"Understanding ADHD"}}"#);
        match &record {
            EntityRecord::Keyed(k) => {
                assert_eq!(k.kind, "api::article.article");
                assert_eq!(k.id, EntityId::Number(13));
                assert!(k.extra.is_empty());
            }
            other => panic!("expected keyed shape, got {other:?}"),
        }
        assert_eq!(record.kind(), Some("api::article.article"));
        assert_eq!(record.document_id(), Some("adhd-intro-guide"));
    }

    #[test]
    fn document_shape_is_recognized() {
        let record = parse(r#"{"documentId":"abc-123","title":"A Title","slug":"a-title"}"#);
        match &record {
            EntityRecord::Document(d) => {
                assert_eq!(d.document_id, "abc-123");
                assert_eq!(d.fields.len(), 2);
            }
            other => panic!("expected document shape, got {other:?}"),
        }
        assert_eq!(record.kind(), None);
        assert_eq!(record.document_id(), Some("abc-123"));
    }

    #[test]
    fn open_shape_is_the_fallback() {
        let record = parse(r#"{"action":"plugin::users-permissions.find","role":1}"#);
        assert!(matches!(record, EntityRecord::Open(_)));
        assert_eq!(record.kind(), None);
        assert_eq!(record.document_id(), None);
    }

    #[test]
    fn string_ids_are_accepted() {
        let record = parse(r#"{"type":"api::faq.faq","id":"faq-1","data":{}}"#);
        match record {
            EntityRecord::Keyed(k) => assert_eq!(k.id, EntityId::Text("faq-1".into())),
            other => panic!("expected keyed shape, got {other:?}"),
        }
    }

    #[test]
    fn open_record_with_type_key_exposes_kind() {
        let record = parse(r#"{"type":"plugin::upload.file","name":"logo.png"}"#);
        assert!(matches!(record, EntityRecord::Open(_)));
        assert_eq!(record.kind(), Some("plugin::upload.file"));
        assert!(record.is_kind("plugin::upload.file"));
    }

    // -----------------------------------------------------------------------
    // Lossless round-trips
    // -----------------------------------------------------------------------

    #[test]
    fn keyed_extra_fields_survive_roundtrip() {
        let original = json!({
            "type": "api::category.category",
            "id": 10,
            "data": {"name": "Symptoms & Diagnosis"},
            "version": 2
        });
        let record = EntityRecord::from_value(original.clone()).unwrap();
        assert_eq!(record.to_value().unwrap(), original);
    }

    #[test]
    fn document_roundtrip_is_value_equal() {
        let original = json!({
            "documentId": "adhd-blog-main",
            "heading": "ADHD Resources & Insights",
            "seo": {"metaTitle": "Resources", "canonicalURL": null},
            "dynamic_zone": []
        });
        let record = EntityRecord::from_value(original.clone()).unwrap();
        assert_eq!(record.to_value().unwrap(), original);
    }

    #[test]
    fn open_roundtrip_is_value_equal() {
        let original = json!({"key": "value", "nested": {"n": [1, 2, 3]}});
        let record = EntityRecord::from_value(original.clone()).unwrap();
        assert_eq!(record.to_value().unwrap(), original);
    }

    // -----------------------------------------------------------------------
    // Boundary rejection
    // -----------------------------------------------------------------------

    #[test]
    fn non_object_values_are_rejected() {
        for (value, kind) in [
            (json!([1, 2]), "array"),
            (json!("text"), "string"),
            (json!(42), "number"),
            (json!(null), "null"),
            (json!(true), "boolean"),
        ] {
            let err = EntityRecord::from_value(value).unwrap_err();
            assert_eq!(err, TypeError::NotAnObject(kind));
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn constructed_records_match_parsed_ones() {
        let built: EntityRecord = KeyedEntity::new("api::faq.faq", 200, JsonMap::new()).into();
        let parsed = parse(r#"{"type":"api::faq.faq","id":200,"data":{}}"#);
        assert_eq!(built, parsed);

        let built: EntityRecord = DocumentEntity::new("abc-123").into();
        let parsed = parse(r#"{"documentId":"abc-123"}"#);
        assert_eq!(built, parsed);
    }

    // -----------------------------------------------------------------------
    // EntityId
    // -----------------------------------------------------------------------

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::from(13).to_string(), "13");
        assert_eq!(EntityId::from("faq-1").to_string(), "faq-1");
    }

    #[test]
    fn entity_id_serde_shapes() {
        assert_eq!(serde_json::to_string(&EntityId::Number(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&EntityId::Text("x".into())).unwrap(),
            r#""x""#
        );
    }
}
