//! Letter grades for overall health scores.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Letter grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Grade {
    /// 90 and above.
    #[serde(rename = "A+")]
    APlus,
    /// 80--89.
    A,
    /// 70--79.
    B,
    /// 60--69.
    C,
    /// 50--59.
    D,
    /// Below 50.
    F,
}

impl Grade {
    /// Grade for a 0--100 score.
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    /// Grade as displayed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Short description of the grade.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::APlus => "Excellent",
            Self::A => "Very good",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Needs improvement",
            Self::F => "Poor",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GradeReport {
    /// Score the grade was computed from.
    pub score: u8,
    /// Letter grade.
    pub grade: Grade,
    /// Short description.
    pub label: String,
}

/// Grade an overall score.
pub fn seo_grade(score: u8) -> GradeReport {
    let grade = Grade::from_score(score);
    GradeReport {
        score,
        grade,
        label: grade.label().to_string(),
    }
}
