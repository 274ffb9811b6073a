use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One portfolio item with the display metadata the gallery needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    title: Cow<'static, str>,
    key: Cow<'static, str>,
    img: Cow<'static, str>,
    /// Section header rendered before this entry, if any.
    #[serde(
        rename = "lineBreak",
        alias = "line_break",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    line_break: Option<Cow<'static, str>>,
}

impl PortfolioEntry {
    /// Builds an entry from string literals, usable in `const` tables.
    pub const fn borrowed(
        title: &'static str,
        key: &'static str,
        img: &'static str,
        line_break: Option<&'static str>,
    ) -> Self {
        Self {
            title: Cow::Borrowed(title),
            key: Cow::Borrowed(key),
            img: Cow::Borrowed(img),
            line_break: match line_break {
                Some(label) => Some(Cow::Borrowed(label)),
                None => None,
            },
        }
    }

    pub fn new(
        title: impl Into<String>,
        key: impl Into<String>,
        img: impl Into<String>,
        line_break: Option<String>,
    ) -> Self {
        Self {
            title: Cow::Owned(title.into()),
            key: Cow::Owned(key.into()),
            img: Cow::Owned(img.into()),
            line_break: line_break.map(Cow::Owned),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn img(&self) -> &str {
        &self.img
    }

    pub fn line_break(&self) -> Option<&str> {
        self.line_break.as_deref()
    }

    pub fn starts_section(&self) -> bool {
        self.line_break.is_some()
    }
}

/// A run of entries from one line break up to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    /// `None` for entries that come before the first break.
    pub label: Option<&'a str>,
    pub entries: Vec<&'a PortfolioEntry>,
}
