use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use ces_types::{EntityId, EntityRecord, KeyedEntity, TypeError};

use crate::blocks::Block;
use crate::nav::{Footer, Navbar};
use crate::seo::Seo;

/// Content-model discriminators used in export files.
pub mod model {
    pub const ARTICLE: &str = "api::article.article";
    pub const CATEGORY: &str = "api::category.category";
    pub const PAGE: &str = "api::page.page";
    pub const BLOG_PAGE: &str = "api::blog-page.blog-page";
    pub const FAQ: &str = "api::faq.faq";
    pub const GLOBAL: &str = "api::global.global";
}

/// Generate a fresh document identifier (random UUID).
pub fn generate_document_id() -> String {
    Uuid::new_v4().to_string()
}

/// RFC 3339 timestamps with millisecond precision and `Z` suffix, the
/// format the export files carry (`2024-08-07T17:08:24.165Z`).
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Serialize a record body into a keyed entity with the given discriminator.
fn keyed_entity<T: Serialize>(
    kind: &str,
    id: impl Into<EntityId>,
    record: &T,
) -> Result<EntityRecord, TypeError> {
    let value = serde_json::to_value(record).map_err(|e| TypeError::Serialization(e.to_string()))?;
    match value {
        Value::Object(data) => Ok(EntityRecord::Keyed(KeyedEntity::new(kind, id, data))),
        _ => Err(TypeError::Serialization(
            "record body did not serialize to an object".to_owned(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// A long-form article record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub content: Vec<Block>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
    pub seo: Option<Seo>,
    /// Freeform dynamic-zone components, passed through untyped.
    #[serde(rename = "dynamic_zone", skip_serializing_if = "Option::is_none")]
    pub dynamic_zone: Option<Value>,
}

impl Article {
    pub fn new(
        document_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        content: Vec<Block>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            title: title.into(),
            description: description.into(),
            slug: slug.into(),
            content,
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: Some("en".to_owned()),
            seo: None,
            dynamic_zone: None,
        }
    }

    pub fn with_seo(mut self, seo: Seo) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::ARTICLE, id, &self)
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A content category record. Categories are not localized in the export
/// format, so `locale` stays `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub document_id: String,
    pub name: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
}

impl Category {
    pub fn new(
        document_id: impl Into<String>,
        name: impl Into<String>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            name: name.into(),
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: None,
        }
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::CATEGORY, id, &self)
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A slug-addressed site page record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub content: Vec<Block>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
    pub seo: Option<Seo>,
}

impl Page {
    pub fn new(
        document_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        content: Vec<Block>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            title: title.into(),
            description: description.into(),
            slug: slug.into(),
            content,
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: Some("en".to_owned()),
            seo: None,
        }
    }

    pub fn with_seo(mut self, seo: Seo) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::PAGE, id, &self)
    }
}

// ---------------------------------------------------------------------------
// Blog page
// ---------------------------------------------------------------------------

/// The blog landing-page record. `sub_heading` keeps its snake_case wire
/// name; the export format mixes conventions within one record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub document_id: String,
    pub heading: String,
    #[serde(rename = "sub_heading")]
    pub sub_heading: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
    pub seo: Option<Seo>,
}

impl BlogPage {
    pub fn new(
        document_id: impl Into<String>,
        heading: impl Into<String>,
        sub_heading: impl Into<String>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            heading: heading.into(),
            sub_heading: Some(sub_heading.into()),
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: Some("en".to_owned()),
            seo: None,
        }
    }

    pub fn with_seo(mut self, seo: Seo) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::BLOG_PAGE, id, &self)
    }
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

/// A question/answer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub document_id: String,
    pub question: String,
    pub answer: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
}

impl Faq {
    pub fn new(
        document_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            question: question.into(),
            answer: answer.into(),
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: Some("en".to_owned()),
        }
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::FAQ, id, &self)
    }
}

// ---------------------------------------------------------------------------
// Global settings
// ---------------------------------------------------------------------------

/// Site-wide settings: default SEO, navbar, and footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Global {
    pub document_id: String,
    pub seo: Seo,
    pub navbar: Navbar,
    pub footer: Footer,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub locale: Option<String>,
}

impl Global {
    pub fn new(
        document_id: impl Into<String>,
        seo: Seo,
        navbar: Navbar,
        footer: Footer,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            seo,
            navbar,
            footer,
            created_at: stamp,
            updated_at: stamp,
            published_at: stamp,
            locale: Some("en".to_owned()),
        }
    }

    pub fn into_entity(self, id: impl Into<EntityId>) -> Result<EntityRecord, TypeError> {
        keyed_entity(model::GLOBAL, id, &self)
    }
}
