//! Artist records for the showcase.

use serde::{Deserialize, Serialize};

/// An artist featured in the storefront showcase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    /// Artist name. Matches the `artist` facet value of their products.
    pub name: String,
    /// Secondary line (former name, solo members).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Short blurb.
    pub description: String,
    /// Optional banner image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtitle: None,
            description: description.into(),
            image: None,
        }
    }

    /// Set the subtitle. Blank subtitles are dropped.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = (!subtitle.trim().is_empty()).then_some(subtitle);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
