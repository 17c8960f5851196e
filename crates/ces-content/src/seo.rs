use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SEO metadata component attached to pages and articles.
///
/// Absent fields serialize as explicit `null`s, matching the export format
/// (the CMS emits every component field whether or not it is set).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub meta_robots: Option<String>,
    pub structured_data: Option<Value>,
    pub meta_viewport: Option<String>,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: Option<String>,
}

impl Seo {
    /// SEO metadata with just a title and description.
    pub fn titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            meta_title: Some(title.into()),
            meta_description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Set the comma-separated keyword list.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the robots directive (e.g. `index, follow`).
    pub fn with_robots(mut self, robots: impl Into<String>) -> Self {
        self.meta_robots = Some(robots.into());
        self
    }
}
