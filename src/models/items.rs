use serde::{Deserialize, Serialize};

/// A labelled destination rendered as a button or link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Small tag rendered above the title; empty means no badge.
    #[serde(default)]
    pub badge: String,
}

impl FeatureItem {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            badge: String::new(),
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn has_badge(&self) -> bool {
        !self.badge.trim().is_empty()
    }
}

pub(crate) fn links(items: &[(&str, &str)]) -> Vec<LinkItem> {
    items
        .iter()
        .map(|(label, href)| LinkItem::new(*label, *href))
        .collect()
}
