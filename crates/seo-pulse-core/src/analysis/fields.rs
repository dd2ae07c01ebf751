//! Title and meta description length bands.
//!
//! Shared by the content aggregator and the health scorer so both award
//! the same points for the same field. Lengths are trimmed character
//! counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::health::Severity;
use crate::scoring::{DescriptionBands, TitleBands};

/// Trimmed character length of a field.
pub fn field_len(field: &str) -> usize {
    field.trim().chars().count()
}

/// Length band of a page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TitleBand {
    /// Empty or absent.
    Missing,
    /// Below `short_min`.
    FarTooShort,
    /// From `short_min` up to `ideal_min`.
    Short,
    /// Within the ideal range.
    Ideal,
    /// Past the ideal range, up to `long_max`.
    Long,
    /// Past `long_max`; search engines truncate it.
    TooLong,
}

impl TitleBand {
    /// Place a title of `chars` characters into a band.
    pub const fn classify(chars: usize, bands: &TitleBands) -> Self {
        if chars == 0 {
            Self::Missing
        } else if chars < bands.short_min {
            Self::FarTooShort
        } else if chars < bands.ideal_min {
            Self::Short
        } else if chars <= bands.ideal_max {
            Self::Ideal
        } else if chars <= bands.long_max {
            Self::Long
        } else {
            Self::TooLong
        }
    }

    /// Points out of 25.
    pub const fn points(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::FarTooShort => 10,
            Self::Short => 18,
            Self::Ideal => 25,
            Self::Long => 20,
            Self::TooLong => 15,
        }
    }

    /// Severity of the finding, or `None` when the title is in band.
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::Ideal => None,
            Self::Missing | Self::TooLong => Some(Severity::Critical),
            Self::FarTooShort | Self::Short | Self::Long => Some(Severity::Warning),
        }
    }

    /// Diagnostic line for a title of `chars` characters.
    pub fn message(self, chars: usize, bands: &TitleBands) -> String {
        match self {
            Self::Missing => "Title is missing".to_string(),
            Self::FarTooShort => format!("Title is far too short ({chars} characters)"),
            Self::Short => format!("Title is too short ({chars} characters)"),
            Self::Ideal => format!("Title length is ideal ({chars} characters)"),
            Self::Long => {
                format!("Title is too long ({chars} characters), truncation risk in search results")
            }
            Self::TooLong => format!(
                "Title exceeds {} characters ({chars}) and will be truncated",
                bands.long_max
            ),
        }
    }

    /// How to get the title into band.
    pub fn fix(self, bands: &TitleBands) -> String {
        match self {
            Self::Missing => format!(
                "Add a title of {}-{} characters",
                bands.ideal_min, bands.ideal_max
            ),
            _ => format!(
                "Aim for a title of {}-{} characters",
                bands.ideal_min, bands.ideal_max
            ),
        }
    }
}

/// Length band of a meta description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionBand {
    /// Empty or absent.
    Missing,
    /// Below `short_min`.
    FarTooShort,
    /// From `short_min` up to `ideal_min`.
    Short,
    /// Within the ideal range.
    Ideal,
    /// Past `ideal_max`.
    Long,
}

impl DescriptionBand {
    /// Place a description of `chars` characters into a band.
    pub const fn classify(chars: usize, bands: &DescriptionBands) -> Self {
        if chars == 0 {
            Self::Missing
        } else if chars < bands.short_min {
            Self::FarTooShort
        } else if chars < bands.ideal_min {
            Self::Short
        } else if chars <= bands.ideal_max {
            Self::Ideal
        } else {
            Self::Long
        }
    }

    /// Points out of 25.
    pub const fn points(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::FarTooShort => 5,
            Self::Short => 15,
            Self::Ideal => 25,
            Self::Long => 20,
        }
    }

    /// Whether the description sits in the ideal range.
    pub const fn is_ideal(self) -> bool {
        matches!(self, Self::Ideal)
    }

    /// Diagnostic line for a description of `chars` characters.
    pub fn message(self, chars: usize) -> String {
        match self {
            Self::Missing => "Meta description is missing".to_string(),
            Self::FarTooShort => format!("Meta description is far too short ({chars} characters)"),
            Self::Short => format!("Meta description is too short ({chars} characters)"),
            Self::Ideal => format!("Meta description length is ideal ({chars} characters)"),
            Self::Long => format!(
                "Meta description is too long ({chars} characters), it may be cut off"
            ),
        }
    }

    /// How to get the description into band.
    pub fn fix(self, bands: &DescriptionBands) -> String {
        format!(
            "Write a meta description of {}-{} characters",
            bands.ideal_min, bands.ideal_max
        )
    }
}
