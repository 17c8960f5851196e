use serde::{Deserialize, Serialize};

/// A navigation link.
///
/// Navbar links carry an explicit `newTab` flag; footer column links omit
/// it, so the flag is optional and skipped when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub url: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_tab: Option<bool>,
}

impl NavLink {
    /// A link with no `newTab` flag (footer column style).
    pub fn plain(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            new_tab: None,
        }
    }

    /// A same-tab link (`newTab: false`).
    pub fn internal(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            new_tab: Some(false),
            ..Self::plain(url, text)
        }
    }

    /// A new-tab link (`newTab: true`), for external destinations.
    pub fn external(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            new_tab: Some(true),
            ..Self::plain(url, text)
        }
    }
}

/// Site navigation bar component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub display_name: String,
    pub links: Vec<NavLink>,
}

/// One column of footer links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Footer copyright line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
}

/// Site footer component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub display_name: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: Copyright,
    pub social_links: Vec<NavLink>,
}
