//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine over MCP so assistants can score copy while
//! drafting it. The server is a presentation layer: each `#[tool]` method
//! delegates to [`Engine`] and returns its report as pretty JSON.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call the engine, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use seo_pulse_core::{ContentInput, Engine, PageRecord, Variant, markdown};

use crate::commands::apply_markdown;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeContentParams {
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Meta description.
    #[serde(default)]
    pub description: String,
    /// Body content.
    #[serde(default)]
    pub content: String,
    /// Keyword the page should rank for.
    pub focus_keyword: Option<String>,
    /// Supporting keywords.
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    /// Whether `content` is markdown to strip before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `keyword_density` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct KeywordDensityParams {
    /// The text to analyze.
    pub text: String,
    /// Keywords or phrases to measure.
    pub keywords: Vec<String>,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Minimum acceptable reading-ease score (0-100).
    pub min_score: Option<u8>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for tools that take a single text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `extract_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractKeywordsParams {
    /// The text to analyze.
    pub text: String,
    /// Primary keyword of the page.
    pub primary: Option<String>,
}

/// Parameters for the `check_duplicate` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckDuplicateParams {
    /// Candidate text.
    pub text: String,
    /// Existing texts to compare against.
    pub existing: Vec<String>,
    /// Similarity (0-1] at or above which the text counts as duplicate.
    pub threshold: Option<f64>,
    /// Report the most similar entry instead of the first match.
    #[serde(default)]
    pub best_match: bool,
}

/// Parameters for the `score_health` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreHealthParams {
    /// Page record to score.
    pub record: PageRecord,
    /// Description variant to treat as active.
    pub variant: Option<Variant>,
    /// Whether the record's content is markdown.
    #[serde(default)]
    pub markdown: bool,
}

/// Parameters for the `seo_grade` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SeoGradeParams {
    /// Overall score (0-100).
    pub score: u8,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn prose(text: &str, strip_markdown: bool) -> String {
    if strip_markdown {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    }
}

fn record_len(record: &PageRecord) -> usize {
    let optional = [
        record.title.as_deref(),
        record.content.as_deref(),
        record.focus_keyword.as_deref(),
        record.schema_markup.as_deref(),
    ];
    let captions = record.images.iter().filter_map(|image| image.caption.as_deref());
    optional.into_iter().flatten().chain(captions).map(str::len).sum::<usize>()
        + record.descriptions.values().map(String::len).sum::<usize>()
        + record.secondary_keywords.iter().map(String::len).sum::<usize>()
}

/// MCP server exposing the scoring engine.
#[derive(Clone)]
pub struct ProjectServer {
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Engine::default(), Some(seo_pulse_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new(engine: Engine, max_input_bytes: Option<usize>) -> Self {
        Self {
            engine: Arc::new(engine),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        if params.format == "json" {
            return to_json(&info);
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Content quality composite.
    #[tool(
        description = "Score content quality (0-100) from title, meta description, body, and keywords. Returns keyword densities, readability, strengths, warnings, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_content(
        &self,
        Parameters(params): Parameters<AnalyzeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.title.len() + params.description.len() + params.content.len())?;

        let content = prose(&params.content, params.strip_markdown);
        let mut input = ContentInput::new(&params.title, &params.description, &content)
            .with_secondary_keywords(&params.secondary_keywords);
        if let Some(ref focus) = params.focus_keyword {
            input = input.with_focus_keyword(focus);
        }
        let report = self.engine.analyze_content(&input);

        tracing::info!(
            tool = "analyze_content",
            score = report.content_score,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Keyword density.
    #[tool(description = "Percentage of words in the text that are occurrences of each keyword.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn keyword_density(
        &self,
        Parameters(params): Parameters<KeywordDensityParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.text.len())?;
        let densities = self.engine.keyword_density(&params.text, &params.keywords);
        tracing::info!(
            tool = "keyword_density",
            keywords = densities.len(),
            "MCP tool completed"
        );
        to_json(&densities)
    }

    /// Reading-ease estimate.
    #[tool(
        description = "Check readability of text. Returns a 0-100 reading-ease score (higher is easier) and counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.text.len())?;
        let text = prose(&params.text, params.strip_markdown);
        let report = self.engine.check_readability(&text, params.min_score);
        tracing::info!(
            tool = "check_readability",
            score = report.score,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Content length band.
    #[tool(
        description = "Classify content length by word count. Returns counts, band, score, and feedback."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_length(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.text.len())?;
        let text = prose(&params.text, params.strip_markdown);
        let report = self.engine.analyze_content_length(&text);
        tracing::info!(
            tool = "analyze_length",
            words = report.word_count,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Related-term extraction.
    #[tool(
        description = "Extract up to 10 frequent related terms, stopwords removed, most frequent first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_keywords(
        &self,
        Parameters(params): Parameters<ExtractKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.text.len())?;
        let keywords = self
            .engine
            .extract_lsi_keywords(&params.text, params.primary.as_deref());
        tracing::info!(
            tool = "extract_keywords",
            count = keywords.len(),
            "MCP tool completed"
        );
        to_json(&keywords)
    }

    /// Duplicate content check.
    #[tool(
        description = "Check text against existing texts by word-set (Jaccard) similarity. Returns is_duplicate, similarity, and the matching index."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", existing = params.existing.len())
    )]
    fn check_duplicate(
        &self,
        Parameters(params): Parameters<CheckDuplicateParams>,
    ) -> Result<CallToolResult, McpError> {
        let existing_len: usize = params.existing.iter().map(String::len).sum();
        self.check_size(params.text.len() + existing_len)?;
        if let Some(threshold) = params.threshold
            && !(threshold > 0.0 && threshold <= 1.0)
        {
            return Err(McpError::invalid_params(
                format!("threshold must be in (0, 1], got {threshold}"),
                None,
            ));
        }

        let report = if params.best_match {
            self.engine
                .most_similar(&params.text, &params.existing, params.threshold)
        } else {
            self.engine
                .check_duplicate_content(&params.text, &params.existing, params.threshold)
        };
        tracing::info!(
            tool = "check_duplicate",
            is_duplicate = report.is_duplicate,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Full SEO health report.
    #[tool(
        description = "Full SEO health report for a page record: overall score, per-category breakdown, severity-tagged issues with fixes, and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_health(
        &self,
        Parameters(params): Parameters<ScoreHealthParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(record_len(&params.record))?;
        let mut record = params.record;
        if params.variant.is_some() {
            record.active_variant = params.variant;
        }
        if params.markdown {
            apply_markdown(&mut record);
        }

        let report = self.engine.calculate_seo_score(&record);
        let grade = self.engine.seo_grade(report.score.overall);
        tracing::info!(
            tool = "score_health",
            overall = report.score.overall,
            issues = report.issues.len(),
            "MCP tool completed"
        );
        to_json(&serde_json::json!({
            "grade": grade,
            "score": report.score,
            "issues": report.issues,
            "recommendations": report.recommendations,
        }))
    }

    /// Letter grade.
    #[tool(description = "Letter grade (A+, A, B, C, D, F) and label for a 0-100 score.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn seo_grade(
        &self,
        Parameters(params): Parameters<SeoGradeParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.score > 100 {
            return Err(McpError::invalid_params(
                format!("score must be 0-100, got {}", params.score),
                None,
            ));
        }
        to_json(&self.engine.seo_grade(params.score))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Scores marketing copy: content quality, readability, keyword density, duplicates, and full SEO health reports.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> ProjectServer {
        ProjectServer::default()
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn analyze_content_tool_scores_empty_input() {
        let params = Parameters(AnalyzeContentParams {
            title: String::new(),
            description: String::new(),
            content: String::new(),
            focus_keyword: None,
            secondary_keywords: Vec::new(),
            strip_markdown: false,
        });
        let result = server()
            .analyze_content(params)
            .expect("analyze_content should succeed");
        let json = json_of(&result);
        assert_eq!(json["content_score"], 21);
        assert_eq!(json["word_count"], 0);
        assert!(!json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn keyword_density_tool_works() {
        let params = Parameters(KeywordDensityParams {
            text: "Kedi uyur. Kedi oynar. Köpek koşar. Kuş uçar.".to_string(),
            keywords: vec!["kedi".to_string()],
        });
        let result = server()
            .keyword_density(params)
            .expect("keyword_density should succeed");
        let json = json_of(&result);
        assert_eq!(json["kedi"].as_f64(), Some(25.0));
    }

    #[test]
    fn check_readability_tool_works() {
        let params = Parameters(CheckReadabilityParams {
            text: "Kedi uyur. Köpek koşar.".to_string(),
            min_score: None,
            strip_markdown: false,
        });
        let result = server()
            .check_readability(params)
            .expect("check_readability should succeed");
        let json = json_of(&result);
        assert!(json["score"].as_u64().unwrap() <= 100);
        assert_eq!(json["words"], 4);
        assert_eq!(json["below_min"], false);
    }

    #[test]
    fn analyze_length_tool_flags_short_text() {
        let params = Parameters(TextParams {
            text: "Kısa bir metin.".to_string(),
            strip_markdown: false,
        });
        let result = server()
            .analyze_length(params)
            .expect("analyze_length should succeed");
        let json = json_of(&result);
        assert_eq!(json["word_count"], 3);
        assert_eq!(json["band"], "too_short");
        assert_eq!(json["score"], 30);
    }

    #[test]
    fn extract_keywords_tool_ranks_by_frequency() {
        let params = Parameters(ExtractKeywordsParams {
            text: "bisiklet kask bisiklet zincir bisiklet kask".to_string(),
            primary: None,
        });
        let result = server()
            .extract_keywords(params)
            .expect("extract_keywords should succeed");
        let json = json_of(&result);
        assert_eq!(json, serde_json::json!(["bisiklet", "kask", "zincir"]));
    }

    #[test]
    fn check_duplicate_tool_finds_identical_text() {
        let params = Parameters(CheckDuplicateParams {
            text: "aynı metin burada".to_string(),
            existing: vec!["başka bir şey".to_string(), "aynı metin burada".to_string()],
            threshold: None,
            best_match: false,
        });
        let result = server()
            .check_duplicate(params)
            .expect("check_duplicate should succeed");
        let json = json_of(&result);
        assert_eq!(json["is_duplicate"], true);
        assert_eq!(json["duplicate_index"], 1);
        assert_eq!(json["similarity"].as_f64(), Some(1.0));
    }

    #[test]
    fn check_duplicate_tool_rejects_bad_threshold() {
        let params = Parameters(CheckDuplicateParams {
            text: "metin".to_string(),
            existing: vec!["metin".to_string()],
            threshold: Some(1.5),
            best_match: false,
        });
        assert!(server().check_duplicate(params).is_err());
    }

    #[test]
    fn score_health_tool_reports_grade() {
        let record = PageRecord {
            title: Some("Kış lastiği seçerken dikkat edilmesi gerekenler".into()),
            ..PageRecord::default()
        };
        let params = Parameters(ScoreHealthParams {
            record,
            variant: None,
            markdown: false,
        });
        let result = server()
            .score_health(params)
            .expect("score_health should succeed");
        let json = json_of(&result);
        assert_eq!(json["score"]["meta_title"], 25);
        assert_eq!(json["grade"]["grade"], "F");
        assert!(
            json["issues"]
                .as_array()
                .unwrap()
                .iter()
                .any(|issue| issue["severity"] == "critical")
        );
    }

    #[test]
    fn seo_grade_tool_works() {
        let result = server()
            .seo_grade(Parameters(SeoGradeParams { score: 95 }))
            .expect("seo_grade should succeed");
        let json = json_of(&result);
        assert_eq!(json["grade"], "A+");
        assert_eq!(json["label"], "Excellent");

        assert!(server().seo_grade(Parameters(SeoGradeParams { score: 101 })).is_err());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = ProjectServer::new(Engine::default(), Some(8));
        let params = Parameters(TextParams {
            text: "bu metin sınırı aşıyor".to_string(),
            strip_markdown: false,
        });
        assert!(server.analyze_length(params).is_err());
    }

    #[test]
    fn record_size_counts_captions_and_keywords() {
        let server = ProjectServer::new(Engine::default(), Some(32));
        let health = |record: PageRecord| {
            server.score_health(Parameters(ScoreHealthParams {
                record,
                variant: None,
                markdown: false,
            }))
        };

        let captioned = PageRecord {
            title: Some("Kısa".into()),
            images: vec![seo_pulse_core::ImageMeta::captioned("x".repeat(64))],
            ..PageRecord::default()
        };
        assert!(health(captioned).is_err());

        let keyworded = PageRecord {
            secondary_keywords: vec!["anahtar kelime".repeat(4)],
            ..PageRecord::default()
        };
        assert!(health(keyworded).is_err());

        let small = PageRecord {
            title: Some("Kısa".into()),
            ..PageRecord::default()
        };
        assert!(health(small).is_ok());
    }
}
