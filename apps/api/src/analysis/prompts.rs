// LLM prompt text for résumé analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Role and output schema. The six keys must match `AnalysisResult`.
pub const ANALYSIS_INSTRUCTIONS: &str = "You are an expert AI hiring assistant. \
    Your task is to analyze a resume against a job description.\n\
    Provide your analysis in a structured JSON format with these specific keys: \
    \"overall_score\" (a float from 0.0 to 1.0), \"summary\" (a string), \
    \"strengths\" (a list of strings), \"weaknesses\" (a list of strings), \
    \"matched_skills\" (a list of strings), and \"missing_skills\" (a list of strings).";

/// Builds the analysis prompt. Both inputs are embedded verbatim in a single
/// pass; delimiter lines inside them are not escaped.
pub fn build_analysis_prompt(job_desc: &str, resume_text: &str) -> String {
    format!(
        "{ANALYSIS_INSTRUCTIONS}\n\
         {JSON_ONLY_INSTRUCTION}\n\
         \n\
         [JOB DESCRIPTION]\n\
         ---\n\
         {job_desc}\n\
         ---\n\
         \n\
         [RESUME TEXT]\n\
         ---\n\
         {resume_text}\n\
         ---\n"
    )
}
