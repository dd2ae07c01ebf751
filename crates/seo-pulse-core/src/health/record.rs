//! Input record for health scoring.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::ContentInput;

/// Meta description A/B test slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Variant {
    /// First variant.
    A,
    /// Second variant.
    B,
    /// Third variant.
    C,
}

impl Variant {
    /// All variants in evaluation order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// The variant letter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ImageMeta {
    /// Caption or alt text.
    pub caption: Option<String>,
    /// Externally assessed caption quality (0--100).
    pub caption_quality: Option<u8>,
}

impl ImageMeta {
    /// Image with the given caption.
    pub fn captioned(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            caption_quality: None,
        }
    }

    /// Whether the image has a non-blank caption.
    pub fn is_captioned(&self) -> bool {
        self.caption
            .as_deref()
            .is_some_and(|caption| !caption.trim().is_empty())
    }
}

/// Everything the health scorer looks at for one page.
///
/// Every field is optional so partial records deserialize:
///
/// ```json
/// { "title": "Kış lastiği kampanyası", "descriptions": { "A": "..." } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PageRecord {
    /// Page title.
    pub title: Option<String>,
    /// Meta description variants.
    pub descriptions: BTreeMap<Variant, String>,
    /// Variant the content aggregator scores. Defaults to the first
    /// non-blank variant.
    pub active_variant: Option<Variant>,
    /// Body content as plain prose.
    pub content: Option<String>,
    /// Keyword the page should rank for.
    pub focus_keyword: Option<String>,
    /// Supporting keywords.
    pub secondary_keywords: Vec<String>,
    /// Raw JSON-LD structured data, possibly malformed.
    pub schema_markup: Option<String>,
    /// Images on the page.
    pub images: Vec<ImageMeta>,
}

impl PageRecord {
    /// Non-blank description variants in `A`, `B`, `C` order.
    pub fn description_variants(&self) -> impl Iterator<Item = (Variant, &str)> {
        self.descriptions
            .iter()
            .map(|(variant, text)| (*variant, text.as_str()))
            .filter(|(_, text)| !text.trim().is_empty())
    }

    /// Description the content aggregator scores.
    ///
    /// An explicit `active_variant` wins even when blank; otherwise the
    /// first non-blank variant, or `""`.
    pub fn active_description(&self) -> &str {
        match self.active_variant {
            Some(variant) => self.descriptions.get(&variant).map_or("", String::as_str),
            None => self
                .description_variants()
                .next()
                .map_or("", |(_, text)| text),
        }
    }

    /// Body content, or `""`.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Whether the page has non-blank body content.
    pub fn has_content(&self) -> bool {
        !self.content_text().trim().is_empty()
    }

    /// Aggregator input for this record.
    pub fn content_input(&self) -> ContentInput<'_> {
        let mut input = ContentInput::new(
            self.title.as_deref().unwrap_or(""),
            self.active_description(),
            self.content_text(),
        )
        .with_secondary_keywords(&self.secondary_keywords);
        if let Some(focus) = self.focus_keyword.as_deref() {
            input = input.with_focus_keyword(focus);
        }
        input
    }
}
