//! Structured data (JSON-LD) validation.
//!
//! A markup block is valid when it parses as JSON and every top-level
//! entity is typed:
//!
//! - an object needs `@context` and `@type`;
//! - an array needs every element to be such an object;
//! - an object with `@graph` needs `@context` at the root and `@type` on
//!   every graph node.
//!
//! A `<script type="application/ld+json">` wrapper is tolerated. For a few
//! common schema.org types, absent recommended properties are reported as
//! info; they never change the score.

use serde_json::{Map, Value};

use super::{Findings, IssueCategory, PageRecord, Severity};

/// Recommended properties for common schema.org types.
const RECOMMENDED: &[(&str, &[&str])] = &[
    ("Article", &["headline", "author", "datePublished", "image"]),
    ("BlogPosting", &["headline", "author", "datePublished", "image"]),
    ("NewsArticle", &["headline", "author", "datePublished", "image"]),
    ("Product", &["name", "image", "description", "offers"]),
    ("Organization", &["name", "url", "logo"]),
    ("LocalBusiness", &["name", "address", "telephone"]),
    ("WebPage", &["name", "description"]),
    ("FAQPage", &["mainEntity"]),
    ("BreadcrumbList", &["itemListElement"]),
];

/// A typed top-level entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    /// Values of `@type`.
    pub types: Vec<String>,
    /// Recommended properties the node lacks, for known types.
    pub missing: Vec<&'static str>,
}

/// What a markup block turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    /// No markup, or only whitespace.
    Absent,
    /// Not valid JSON.
    Malformed {
        /// Parser error.
        error: String,
    },
    /// Valid JSON without `@context`/`@type` where they are required.
    Untyped,
    /// Every top-level entity is typed.
    Valid {
        /// The typed entities.
        nodes: Vec<SchemaNode>,
    },
}

impl SchemaStatus {
    /// Points out of 15.
    pub const fn points(&self) -> u8 {
        match self {
            Self::Absent | Self::Malformed { .. } => 0,
            Self::Untyped => 5,
            Self::Valid { .. } => 15,
        }
    }
}

/// Classify a markup block.
pub fn inspect(markup: Option<&str>) -> SchemaStatus {
    let Some(body) = markup.map(unwrap_script).filter(|body| !body.is_empty()) else {
        return SchemaStatus::Absent;
    };

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            return SchemaStatus::Malformed {
                error: err.to_string(),
            };
        }
    };

    match typed_nodes(&value) {
        Some(nodes) if !nodes.is_empty() => SchemaStatus::Valid { nodes },
        _ => SchemaStatus::Untyped,
    }
}

/// Schema points (0--15).
pub(super) fn score_schema(record: &PageRecord, findings: &mut Findings) -> u8 {
    let status = inspect(record.schema_markup.as_deref());
    match &status {
        SchemaStatus::Absent => findings.issue(
            Severity::Warning,
            IssueCategory::SchemaMarkup,
            "No structured data markup found",
            "Add JSON-LD markup describing the page (for example schema.org Article or Product)",
        ),
        SchemaStatus::Malformed { error } => findings.issue(
            Severity::Warning,
            IssueCategory::SchemaMarkup,
            format!("Structured data markup is malformed: {error}"),
            "Fix the JSON-LD syntax and re-validate it",
        ),
        SchemaStatus::Untyped => findings.issue(
            Severity::Warning,
            IssueCategory::SchemaMarkup,
            "Structured data lacks @context or @type",
            "Declare \"@context\": \"https://schema.org\" and an \"@type\" for every entity",
        ),
        SchemaStatus::Valid { nodes } => {
            for node in nodes.iter().filter(|node| !node.missing.is_empty()) {
                findings.issue(
                    Severity::Info,
                    IssueCategory::SchemaMarkup,
                    format!(
                        "{} markup lacks recommended properties: {}",
                        node.types.join("/"),
                        node.missing.join(", ")
                    ),
                    "Add the missing properties for richer search results",
                );
            }
        }
    }
    status.points()
}

/// Strip a `<script ...>...</script>` wrapper, if any.
fn unwrap_script(markup: &str) -> &str {
    let trimmed = markup.trim();
    if !trimmed.starts_with("<script") {
        return trimmed;
    }
    let Some(open_end) = trimmed.find('>') else {
        return trimmed;
    };
    let inner = &trimmed[open_end + 1..];
    inner
        .rfind("</script>")
        .map_or(inner, |close| &inner[..close])
        .trim()
}

/// Typed top-level nodes, or `None` if any required field is missing.
fn typed_nodes(value: &Value) -> Option<Vec<SchemaNode>> {
    match value {
        Value::Object(root) if root.contains_key("@graph") => {
            root.get("@context")?;
            let graph = root.get("@graph")?.as_array()?;
            graph
                .iter()
                .map(|node| node.as_object().and_then(node_types))
                .collect()
        }
        Value::Object(root) => {
            root.get("@context")?;
            node_types(root).map(|node| vec![node])
        }
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let object = item.as_object()?;
                object.get("@context")?;
                node_types(object)
            })
            .collect(),
        _ => None,
    }
}

fn node_types(object: &Map<String, Value>) -> Option<SchemaNode> {
    let types: Vec<String> = match object.get("@type")? {
        Value::String(name) => vec![name.clone()],
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => return None,
    };
    if types.is_empty() {
        return None;
    }

    let mut missing: Vec<&'static str> = Vec::new();
    for name in &types {
        let Some((_, props)) = RECOMMENDED.iter().find(|(known, _)| known == name) else {
            continue;
        };
        for prop in props.iter().copied() {
            if !object.contains_key(prop) && !missing.contains(&prop) {
                missing.push(prop);
            }
        }
    }
    Some(SchemaNode { types, missing })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_markup() {
        assert_eq!(inspect(None), SchemaStatus::Absent);
        assert_eq!(inspect(Some("  \n ")), SchemaStatus::Absent);
        assert_eq!(inspect(Some("")).points(), 0);
    }

    #[test]
    fn malformed_json_scores_zero() {
        let status = inspect(Some(r#"{"@context": "https://schema.org", "@type": "#));
        assert!(matches!(status, SchemaStatus::Malformed { .. }));
        assert_eq!(status.points(), 0);
    }

    #[test]
    fn missing_type_scores_five() {
        let status = inspect(Some(r#"{"@context": "https://schema.org", "name": "Mağaza"}"#));
        assert_eq!(status, SchemaStatus::Untyped);
        assert_eq!(status.points(), 5);
        assert_eq!(inspect(Some(r#"{"@type": "Thing"}"#)), SchemaStatus::Untyped);
        assert_eq!(inspect(Some("42")), SchemaStatus::Untyped);
    }

    #[test]
    fn typed_object_is_valid() {
        let status = inspect(Some(
            r#"{"@context": "https://schema.org", "@type": "Organization", "name": "Acme", "url": "https://acme.example", "logo": "https://acme.example/logo.png"}"#,
        ));
        assert_eq!(status.points(), 15);
        let SchemaStatus::Valid { nodes } = status else {
            panic!("expected valid markup");
        };
        assert_eq!(nodes[0].types, vec!["Organization"]);
        assert!(nodes[0].missing.is_empty());
    }

    #[test]
    fn known_type_reports_missing_recommended_props() {
        let status = inspect(Some(
            r#"{"@context": "https://schema.org", "@type": "Product", "name": "Bisiklet"}"#,
        ));
        let SchemaStatus::Valid { nodes } = status else {
            panic!("expected valid markup");
        };
        assert_eq!(nodes[0].missing, vec!["image", "description", "offers"]);
    }

    #[test]
    fn graph_needs_type_on_every_node() {
        let ok = r#"{"@context": "https://schema.org", "@graph": [{"@type": "WebPage", "name": "a", "description": "b"}, {"@type": ["Thing"]}]}"#;
        assert_eq!(inspect(Some(ok)).points(), 15);

        let untyped = r#"{"@context": "https://schema.org", "@graph": [{"@type": "WebPage"}, {"name": "x"}]}"#;
        assert_eq!(inspect(Some(untyped)), SchemaStatus::Untyped);

        let no_context = r#"{"@graph": [{"@type": "WebPage"}]}"#;
        assert_eq!(inspect(Some(no_context)), SchemaStatus::Untyped);
    }

    #[test]
    fn array_needs_every_element_typed() {
        let ok = r#"[{"@context": "https://schema.org", "@type": "Thing"}, {"@context": "https://schema.org", "@type": "Thing"}]"#;
        assert_eq!(inspect(Some(ok)).points(), 15);
        let partial = r#"[{"@context": "https://schema.org", "@type": "Thing"}, {"name": "x"}]"#;
        assert_eq!(inspect(Some(partial)), SchemaStatus::Untyped);
        assert_eq!(inspect(Some("[]")), SchemaStatus::Untyped);
    }

    #[test]
    fn script_wrapper_is_tolerated() {
        let markup = r#"<script type="application/ld+json">
            {"@context": "https://schema.org", "@type": "Thing"}
        </script>"#;
        assert_eq!(inspect(Some(markup)).points(), 15);
    }

    #[test]
    fn gaps_become_info_issues() {
        let record = PageRecord {
            schema_markup: Some(
                r#"{"@context": "https://schema.org", "@type": "FAQPage"}"#.to_string(),
            ),
            ..PageRecord::default()
        };
        let mut findings = Findings::default();
        assert_eq!(score_schema(&record, &mut findings), 15);
        assert_eq!(findings.issues.len(), 1);
        assert_eq!(findings.issues[0].severity, Severity::Info);
        assert!(findings.issues[0].message.contains("mainEntity"));
    }
}
