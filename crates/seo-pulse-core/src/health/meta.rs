//! Meta title and description categories.

use super::{Findings, IssueCategory, PageRecord, Severity};
use crate::analysis::{DescriptionBand, TitleBand, field_len};
use crate::scoring::ScoringConfig;

/// Title points (0--25).
pub(super) fn score_title(
    record: &PageRecord,
    scoring: &ScoringConfig,
    findings: &mut Findings,
) -> u8 {
    let bands = &scoring.title;
    let chars = field_len(record.title.as_deref().unwrap_or(""));
    let band = TitleBand::classify(chars, bands);

    if let Some(severity) = band.severity() {
        findings.issue(
            severity,
            IssueCategory::MetaTitle,
            band.message(chars, bands),
            band.fix(bands),
        );
    }
    band.points()
}

/// Average points over the non-blank description variants (0--25).
pub(super) fn score_descriptions(
    record: &PageRecord,
    scoring: &ScoringConfig,
    findings: &mut Findings,
) -> u8 {
    let bands = &scoring.description;
    let mut total = 0u32;
    let mut count = 0usize;

    for (variant, text) in record.description_variants() {
        let chars = field_len(text);
        let band = DescriptionBand::classify(chars, bands);
        if !band.is_ideal() {
            findings.issue(
                Severity::Warning,
                IssueCategory::MetaDescription,
                format!("Variant {variant}: {}", band.message(chars)),
                band.fix(bands),
            );
        }
        total += u32::from(band.points());
        count += 1;
    }

    if count == 0 {
        let band = DescriptionBand::Missing;
        findings.issue(
            Severity::Critical,
            IssueCategory::MetaDescription,
            band.message(0),
            band.fix(bands),
        );
    }

    if count >= bands.ab_test_variants {
        findings.issue(
            Severity::Info,
            IssueCategory::MetaDescription,
            format!("{count} description variants are set up for A/B testing"),
            "Compare click-through rates and keep the best performer",
        );
    } else {
        let missing = bands.ab_test_variants - count;
        findings.recommend(format!(
            "Create {missing} more meta description variant(s) to A/B test click-through"
        ));
    }

    if count == 0 {
        return 0;
    }
    (f64::from(total) / count as f64).round() as u8
}
