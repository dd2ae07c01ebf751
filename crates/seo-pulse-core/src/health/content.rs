//! Content quality category.
//!
//! Runs the content aggregator over title + description + body and keeps
//! only two of its measurements, word count and readability, each worth
//! up to 10 points.

use super::{Findings, IssueCategory, PageRecord, Severity};
use crate::analysis;
use crate::scoring::ScoringConfig;

/// Content points (0--20).
pub(super) fn score_content(
    record: &PageRecord,
    scoring: &ScoringConfig,
    findings: &mut Findings,
) -> u8 {
    let bands = &scoring.content;
    if !record.has_content() {
        findings.issue(
            Severity::Critical,
            IssueCategory::ContentQuality,
            "Body content is missing",
            format!("Write at least {} words of body content", bands.full_words),
        );
        return 0;
    }

    let analysis = analysis::analyze_content(&record.content_input(), scoring);
    let words = analysis.word_count;

    let length_points = if words >= bands.full_words {
        10
    } else if words >= bands.partial_words {
        findings.issue(
            Severity::Warning,
            IssueCategory::ContentQuality,
            format!("Content is on the short side ({words} words)"),
            format!("Expand the content to at least {} words", bands.full_words),
        );
        6
    } else {
        findings.issue(
            Severity::Critical,
            IssueCategory::ContentQuality,
            format!("Content is too thin ({words} words)"),
            format!("Expand the content to at least {} words", bands.full_words),
        );
        3
    };

    let readability = &scoring.readability;
    let ease = analysis.readability_score;
    let readability_points = if ease >= readability.easy {
        10
    } else if ease >= readability.moderate {
        findings.issue(
            Severity::Info,
            IssueCategory::ContentQuality,
            format!("Readability is moderate (score {ease})"),
            "Shorten long sentences and prefer everyday words",
        );
        6
    } else {
        findings.issue(
            Severity::Warning,
            IssueCategory::ContentQuality,
            format!("Content is hard to read (score {ease})"),
            "Break long sentences up and cut jargon",
        );
        3
    };

    length_points + readability_points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str) -> (u8, Findings) {
        let record = PageRecord {
            content: Some(content.to_string()),
            ..PageRecord::default()
        };
        let mut findings = Findings::default();
        let points = score_content(&record, &ScoringConfig::default(), &mut findings);
        (points, findings)
    }

    #[test]
    fn missing_content_is_critical_zero() {
        let (points, findings) = run("   ");
        assert_eq!(points, 0);
        assert_eq!(findings.issues.len(), 1);
        assert_eq!(findings.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn long_readable_content_scores_full() {
        let (points, findings) = run(&"Bu iş çok iyi. ".repeat(80));
        assert_eq!(points, 20);
        assert!(findings.issues.is_empty());
    }

    #[test]
    fn medium_length_is_a_warning() {
        let (points, findings) = run(&"Bu iş çok iyi. ".repeat(50));
        assert_eq!(points, 16);
        assert_eq!(findings.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn thin_content_is_critical() {
        let (points, findings) = run("Bu iş çok iyi.");
        assert_eq!(points, 13);
        assert_eq!(findings.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn hard_prose_loses_readability_points() {
        let sentence = "Uluslararasılaştırılamayanlardan değerlendirilemeyeceklerinden \
                        kaynaklanabilecek sorumlulukların belirlenmesi gerekmektedir. ";
        let (points, findings) = run(&sentence.repeat(60));
        assert_eq!(points, 13);
        assert!(
            findings
                .issues
                .iter()
                .any(|i| i.severity == Severity::Warning && i.message.contains("hard to read"))
        );
    }
}
