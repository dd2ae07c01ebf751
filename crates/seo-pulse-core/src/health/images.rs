//! Image caption coverage category.

use super::{Findings, IssueCategory, PageRecord, Severity};
use crate::scoring::ScoringConfig;

/// Image points (0--15).
///
/// A page with no images earns full points only when it has body content
/// to stand on; an empty page scores 0 here too.
pub(super) fn score_images(
    record: &PageRecord,
    scoring: &ScoringConfig,
    findings: &mut Findings,
) -> u8 {
    let bands = &scoring.images;
    let total = record.images.len();

    if total == 0 {
        if record.has_content() {
            findings.issue(
                Severity::Info,
                IssueCategory::ImageOptimization,
                "Page has no images",
                "Consider adding relevant images with descriptive captions",
            );
            return 15;
        }
        findings.issue(
            Severity::Info,
            IssueCategory::ImageOptimization,
            "No images to evaluate on a page without content",
            "Add body content and supporting images",
        );
        return 0;
    }

    let captioned = record.images.iter().filter(|image| image.is_captioned()).count();
    let coverage = captioned as f64 / total as f64;
    let message = format!("{captioned} of {total} images have captions");
    let fix = "Write a descriptive caption (alt text) for every image";

    let points = if captioned == total {
        15
    } else if coverage >= bands.good_coverage {
        findings.issue(Severity::Info, IssueCategory::ImageOptimization, message, fix);
        12
    } else if coverage >= bands.partial_coverage {
        findings.issue(Severity::Warning, IssueCategory::ImageOptimization, message, fix);
        8
    } else {
        findings.issue(Severity::Critical, IssueCategory::ImageOptimization, message, fix);
        4
    };

    if captioned < total {
        findings.recommend(format!(
            "Add captions to the {} uncaptioned image(s)",
            total - captioned
        ));
    }

    let qualities: Vec<u32> = record
        .images
        .iter()
        .filter(|image| image.is_captioned())
        .filter_map(|image| image.caption_quality)
        .map(u32::from)
        .collect();
    if !qualities.is_empty() {
        let average = qualities.iter().sum::<u32>() as f64 / qualities.len() as f64;
        if average < f64::from(bands.min_caption_quality) {
            findings.issue(
                Severity::Info,
                IssueCategory::ImageOptimization,
                format!("Average caption quality is {average:.0}/100"),
                format!(
                    "Improve captions to score at least {} by describing what the image shows",
                    bands.min_caption_quality
                ),
            );
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::ImageMeta;

    fn record(captioned: usize, bare: usize, content: bool) -> PageRecord {
        let mut images: Vec<ImageMeta> = (0..captioned)
            .map(|i| ImageMeta::captioned(format!("Görsel {i}")))
            .collect();
        images.extend((0..bare).map(|_| ImageMeta::default()));
        PageRecord {
            content: content.then(|| "Bir miktar içerik.".to_string()),
            images,
            ..PageRecord::default()
        }
    }

    fn run(record: &PageRecord) -> (u8, Findings) {
        let mut findings = Findings::default();
        let points = score_images(record, &ScoringConfig::default(), &mut findings);
        (points, findings)
    }

    #[test]
    fn no_images_with_content_scores_full_with_info() {
        let (points, findings) = run(&record(0, 0, true));
        assert_eq!(points, 15);
        assert_eq!(findings.issues[0].severity, Severity::Info);
    }

    #[test]
    fn no_images_without_content_scores_zero() {
        let (points, findings) = run(&record(0, 0, false));
        assert_eq!(points, 0);
        assert_eq!(findings.issues[0].severity, Severity::Info);
    }

    #[test]
    fn coverage_bands() {
        let cases = [
            (5, 0, 15, None),
            (4, 1, 12, Some(Severity::Info)),
            (3, 2, 8, Some(Severity::Warning)),
            (1, 1, 8, Some(Severity::Warning)),
            (1, 3, 4, Some(Severity::Critical)),
        ];
        for (captioned, bare, points, severity) in cases {
            let (got, findings) = run(&record(captioned, bare, true));
            assert_eq!(got, points, "{captioned}/{}", captioned + bare);
            assert_eq!(findings.issues.first().map(|i| i.severity), severity);
            assert_eq!(findings.recommendations.is_empty(), bare == 0);
        }
    }

    #[test]
    fn low_caption_quality_adds_info_without_changing_score() {
        let mut page = record(2, 0, true);
        page.images[0].caption_quality = Some(40);
        page.images[1].caption_quality = Some(60);
        let (points, findings) = run(&page);
        assert_eq!(points, 15);
        assert_eq!(findings.issues.len(), 1);
        assert!(findings.issues[0].message.contains("50/100"));
    }

    #[test]
    fn quality_of_uncaptioned_images_is_ignored() {
        let mut page = record(1, 1, true);
        page.images[0].caption_quality = Some(90);
        page.images[1].caption_quality = Some(0);
        let (_, findings) = run(&page);
        assert!(
            !findings
                .issues
                .iter()
                .any(|i| i.message.contains("caption quality"))
        );
    }
}
