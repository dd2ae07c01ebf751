//! Markdown body content.
//!
//! Body content is often stored as CommonMark. Scoring wants plain prose,
//! so [`strip_to_prose`] drops markup while keeping everything a reader
//! sees as text. Headings stay (they are on-page copy) and end with a
//! sentence break so they do not run into the following paragraph.
//! [`images`] lists the images with their alt text as captions.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::health::ImageMeta;

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, HTML, YAML frontmatter, table
/// structure and image alt text. Keeps heading, link, list, blockquote
/// and emphasis text.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);
    let parser = Parser::new_ext(text, options());

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => skip_depth += 1,
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),

            Event::End(TagEnd::Heading(_)) if skip_depth == 0 => {
                if !result.trim_end().ends_with(['.', '!', '?']) {
                    result.push('.');
                }
                result.push(' ');
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell) if skip_depth == 0 => {
                result.push(' ');
            }

            _ => {}
        }
    }

    result.trim().to_string()
}

/// Images in document order, with alt text as the caption.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn images(text: &str) -> Vec<ImageMeta> {
    let text = strip_frontmatter(text);
    let mut found = Vec::new();
    let mut alt: Option<String> = None;

    for event in Parser::new_ext(text, options()) {
        match event {
            Event::Start(Tag::Image { .. }) => alt = Some(String::new()),
            Event::Text(t) | Event::Code(t) => {
                if let Some(alt) = alt.as_mut() {
                    alt.push_str(&t);
                }
            }
            Event::End(TagEnd::Image) => {
                let caption = alt.take().filter(|caption| !caption.trim().is_empty());
                found.push(ImageMeta {
                    caption,
                    caption_quality: None,
                });
            }
            _ => {}
        }
    }

    found
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Biraz metin.\n\n```rust\nlet x = 1;\n```\n\nDaha fazla metin.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert!(result.contains("Biraz metin."));
        assert!(result.contains("Daha fazla metin."));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\nslug: kis-lastigi\ndate: 2026-02-07\n---\n\nBiraz metin.";
        let result = strip_to_prose(input);
        assert!(!result.contains("slug"));
        assert_eq!(result, "Biraz metin.");
    }

    #[test]
    fn headings_are_kept_as_sentences() {
        let input = "# Kış Lastiği\n\nLastik seçimi önemlidir.\n\n## Neden?\n\nGüvenlik için.";
        let result = strip_to_prose(input);
        assert_eq!(
            result,
            "Kış Lastiği. Lastik seçimi önemlidir. Neden? Güvenlik için."
        );
        assert_eq!(crate::text::sentence_count(&result), 4);
    }

    #[test]
    fn strip_preserves_link_text() {
        let input = "Detaylar için [bu sayfaya](https://example.com) bakın.";
        let result = strip_to_prose(input);
        assert!(result.contains("bu sayfaya"));
        assert!(!result.contains("https://example.com"));
    }

    #[test]
    fn strip_removes_inline_code_and_images() {
        let input = "Komut `cargo run` ile ![ekran görüntüsü](shot.png) başlar.";
        let result = strip_to_prose(input);
        assert!(!result.contains("cargo run"));
        assert!(!result.contains("ekran"));
        assert!(result.contains("başlar."));
    }

    #[test]
    fn strip_removes_emphasis_markers() {
        let result = strip_to_prose("Bu **kalın** ve *eğik* metin.");
        assert_eq!(result, "Bu kalın ve eğik metin.");
    }

    #[test]
    fn list_items_do_not_run_together() {
        let result = strip_to_prose("- elma\n- armut\n");
        assert_eq!(crate::text::word_count(&result), 2);
    }

    #[test]
    fn images_use_alt_text_as_caption() {
        let input = "![Kırmızı bisiklet](a.png)\n\nMetin.\n\n![](b.png)";
        let found = images(input);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].caption.as_deref(), Some("Kırmızı bisiklet"));
        assert!(found[0].is_captioned());
        assert!(!found[1].is_captioned());
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
        assert!(images("").is_empty());
    }
}
