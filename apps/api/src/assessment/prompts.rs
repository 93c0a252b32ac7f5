// All LLM prompt constants for the Assessment module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PRESERVE_SCORE_INSTRUCTION};

/// Role framing for enrichment; combined with `JSON_ONLY_SYSTEM` in `enrichment_system()`.
const ENRICH_ROLE: &str = "You are an expert personality assessment analyst. \
    Enhance the provided job fit analysis with more detailed, personalized insights. \
    Preserve the calculated fit percentage.";

pub fn enrichment_system() -> String {
    format!("{ENRICH_ROLE} {JSON_ONLY_SYSTEM}")
}

/// Enrichment prompt template. Replace `{target_job}`, `{personality_type}`,
/// `{fit_percentage}`, `{fit_reasoning}`, `{strengths}`, `{challenges}` before sending.
pub const ENRICH_PROMPT_TEMPLATE: &str = r#"Enhance this personality assessment analysis.

Target Job: {target_job}
Personality Type: {personality_type}
Current Fit Percentage: {fit_percentage}% (PRESERVE THIS EXACT VALUE)
Current Reasoning: {fit_reasoning}
Current Strengths: {strengths}
Current Challenges: {challenges}

Return a JSON object with this EXACT schema (no extra fields):
{
  "fitPercentage": {fit_percentage},
  "fitReasoning": "detailed explanation of the fit",
  "strengthsForRole": ["4-5 specific, detailed strengths"],
  "challengesForRole": ["3-4 constructive areas to address"],
  "interviewTips": ["exactly 5 specific, actionable tips"],
  "developmentPlan": ["exactly 5 concrete development steps"]
}

Do not include alternative positions; they are kept as they are.
"#;

pub fn build_enrichment_prompt(
    target_job: &str,
    personality_type: &str,
    fit_percentage: u8,
    fit_reasoning: &str,
    strengths: &[String],
    challenges: &[String],
) -> String {
    let body = ENRICH_PROMPT_TEMPLATE
        .replace("{target_job}", target_job)
        .replace("{personality_type}", personality_type)
        .replace("{fit_percentage}", &fit_percentage.to_string())
        .replace("{fit_reasoning}", fit_reasoning)
        .replace("{strengths}", &strengths.join(", "))
        .replace("{challenges}", &challenges.join(", "));
    format!("{body}\n{PRESERVE_SCORE_INSTRUCTION}")
}
