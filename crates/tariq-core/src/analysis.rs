//! Session analysis through an external text inference endpoint.
//!
//! Remote failures never reach the caller: they are logged and replaced by a
//! fixed message so the screen always has something to show.

use crate::config::AnalysisConfig;
use crate::error::{Result, TariqError};
use serde::Serialize;

pub const MISSING_OUTPUT_MESSAGE: &str = "نتيجة التحليل غير متوفرة";
pub const FAILURE_MESSAGE: &str = "حدث خطأ أثناء التحليل";

/// Something that can turn a prompt into free text.
pub trait Analyzer {
    /// `Ok(None)` means the service answered without any output.
    fn analyze(&self, model: &str, prompt: &str) -> Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// HttpAnalyzer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

pub struct HttpAnalyzer {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        // Lift reqwest's 30s default; no deadline on analyses.
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| TariqError::Analysis(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config(cfg: &AnalysisConfig) -> Result<Self> {
        Self::new(cfg.endpoint.clone())
    }
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, model: &str, prompt: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { model, prompt })
            .send()
            .map_err(|e| TariqError::Analysis(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TariqError::Analysis(format!("endpoint returned {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| TariqError::Analysis(e.to_string()))?;
        Ok(output_field(&body))
    }
}

/// The `output` string of a 2xx reply. Any body without one, JSON or not,
/// counts as no output.
fn output_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("output")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// analyze_session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// Text produced by the service.
    Analysis(String),
    /// The service gave nothing usable; `text` is a stock message.
    Fallback(String),
}

impl AnalysisOutcome {
    pub fn text(&self) -> &str {
        match self {
            AnalysisOutcome::Analysis(t) | AnalysisOutcome::Fallback(t) => t,
        }
    }
}

pub fn build_prompt(cfg: &AnalysisConfig, summary: &str) -> String {
    format!("{}\n{}", cfg.prompt_prefix, summary)
}

/// Analyze a free-text session summary.
///
/// Only a blank summary is an error, and it is raised before any request
/// is made.
pub fn analyze_session(
    analyzer: &dyn Analyzer,
    cfg: &AnalysisConfig,
    summary: &str,
) -> Result<AnalysisOutcome> {
    if summary.trim().is_empty() {
        return Err(TariqError::EmptyField("session summary"));
    }
    let prompt = build_prompt(cfg, summary);

    let outcome = match analyzer.analyze(&cfg.model, &prompt) {
        Ok(Some(text)) if !text.trim().is_empty() => AnalysisOutcome::Analysis(text),
        Ok(_) => AnalysisOutcome::Fallback(MISSING_OUTPUT_MESSAGE.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, model = %cfg.model, "session analysis failed");
            AnalysisOutcome::Fallback(FAILURE_MESSAGE.to_string())
        }
    };
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
