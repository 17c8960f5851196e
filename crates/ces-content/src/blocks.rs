use serde::{Deserialize, Serialize};

/// Inline node inside a rich-text block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Inline {
    /// A text run, optionally bold.
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        bold: Option<bool>,
    },
}

impl Inline {
    /// Plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: None,
        }
    }

    /// Bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: Some(true),
        }
    }
}

/// List numbering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    Unordered,
}

/// One block of structured rich-text content.
///
/// The wire shape is the blocks format CMS editors emit: each block is an
/// object tagged by `"type"`, with children carrying the inline runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        children: Vec<Inline>,
    },
    Heading {
        children: Vec<Inline>,
        level: u8,
    },
    List {
        format: ListFormat,
        children: Vec<Block>,
    },
    ListItem {
        children: Vec<Inline>,
    },
}

impl Block {
    /// A paragraph holding a single plain text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            children: vec![Inline::text(text)],
        }
    }

    /// A heading at the given level.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            children: vec![Inline::text(text)],
            level,
        }
    }

    /// A single list item.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::ListItem {
            children: vec![Inline::text(text)],
        }
    }

    /// An unordered list of plain text items.
    pub fn bullet_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            format: ListFormat::Unordered,
            children: items.into_iter().map(Self::list_item).collect(),
        }
    }
}
