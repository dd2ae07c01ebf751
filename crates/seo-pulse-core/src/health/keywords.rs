//! Keyword optimization bonus.

use super::{Findings, IssueCategory, PageRecord, Severity};
use crate::scoring::ScoringConfig;

/// Bonus points (0--10): 5 for a focus keyword, 3 for enough secondary
/// keywords, 2 for a total keyword count in range.
pub(super) fn score_keywords(
    record: &PageRecord,
    scoring: &ScoringConfig,
    findings: &mut Findings,
) -> u8 {
    let bands = &scoring.keywords;
    let has_focus = record
        .focus_keyword
        .as_deref()
        .is_some_and(|keyword| !keyword.trim().is_empty());
    let secondary = record
        .secondary_keywords
        .iter()
        .filter(|keyword| !keyword.trim().is_empty())
        .count();
    let total = usize::from(has_focus) + secondary;

    let mut points = 0;
    if has_focus {
        points += 5;
    } else {
        findings.issue(
            Severity::Warning,
            IssueCategory::KeywordOptimization,
            "No focus keyword set",
            "Choose the one query this page should rank for",
        );
    }

    if secondary >= bands.min_secondary {
        points += 3;
    } else {
        findings.recommend(format!(
            "Add at least {} secondary keywords (currently {secondary})",
            bands.min_secondary
        ));
    }

    if (bands.total_min..=bands.total_max).contains(&total) {
        points += 2;
    } else {
        findings.recommend(format!(
            "Target {}-{} keywords in total (currently {total})",
            bands.total_min, bands.total_max
        ));
    }

    points
}
