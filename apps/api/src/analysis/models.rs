use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::strip_json_fences;

pub const SUCCESS_MESSAGE: &str = "Analysis successful";

/// Structured fit analysis returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0.0 – 1.0
    pub overall_score: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Response envelope shared by every outcome of `/api/analyze`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

impl ApiResponse {
    pub fn success(analysis: AnalysisResult) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            analysis: Some(analysis),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            analysis: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisFormatError {
    #[error("not a valid analysis object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("overall_score {0} is outside 0.0..=1.0")]
    ScoreOutOfRange(f64),
}

/// Strips code fences from the model's completion and validates it against the
/// six-field analysis schema. Extra fields are ignored.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisFormatError> {
    let cleaned = strip_json_fences(raw);
    let analysis: AnalysisResult = serde_json::from_str(cleaned)?;

    if !(0.0..=1.0).contains(&analysis.overall_score) {
        return Err(AnalysisFormatError::ScoreOutOfRange(analysis.overall_score));
    }

    Ok(analysis)
}
