//! Enrichment: best-effort rewrite of the report's text by the LLM.
//!
//! The model's answer is treated as a patch. `merge_patch` copies only the
//! whitelisted text fields; `target_position`, `fit_percentage` and
//! `alternative_positions` always come from the computed report.
//! Every failure degrades to the original report with `enhanced = false`.

use serde::Deserialize;
use tracing::{info, warn};

use crate::assessment::job_fit::JobFitReport;
use crate::assessment::prompts::{build_enrichment_prompt, enrichment_system};
use crate::llm_client::{parse_json, LlmError, TextGenerator};

pub const ENHANCED_MESSAGE: &str = "Analysis enhanced with AI insights";
pub const UNAVAILABLE_MESSAGE: &str = "Using dynamic analysis (AI enhancement unavailable)";

/// Fields the model may propose. Anything else in its answer (including a
/// `fitPercentage`) is ignored by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentPatch {
    pub fit_reasoning: Option<String>,
    pub strengths_for_role: Option<Vec<String>>,
    pub challenges_for_role: Option<Vec<String>>,
    pub interview_tips: Option<Vec<String>>,
    pub development_plan: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct EnrichmentOutcome {
    pub report: JobFitReport,
    pub enhanced: bool,
    pub message: &'static str,
}

impl EnrichmentOutcome {
    fn unchanged(report: JobFitReport) -> Self {
        Self {
            report,
            enhanced: false,
            message: UNAVAILABLE_MESSAGE,
        }
    }
}

/// Accepted list sizes (inclusive) per patched field.
const STRENGTHS_LEN: (usize, usize) = (3, 5);
const CHALLENGES_LEN: (usize, usize) = (2, 4);
const TIPS_LEN: (usize, usize) = (5, 5);
const PLAN_LEN: (usize, usize) = (5, 5);

/// Applies a patch to a report, touching only the whitelisted text fields.
pub fn merge_patch(original: &JobFitReport, patch: EnrichmentPatch) -> JobFitReport {
    let fit_reasoning = patch
        .fit_reasoning
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| original.fit_reasoning.clone());

    JobFitReport {
        target_position: original.target_position.clone(),
        fit_percentage: original.fit_percentage,
        fit_reasoning,
        strengths_for_role: merge_list(
            &original.strengths_for_role,
            patch.strengths_for_role,
            STRENGTHS_LEN,
        ),
        challenges_for_role: merge_list(
            &original.challenges_for_role,
            patch.challenges_for_role,
            CHALLENGES_LEN,
        ),
        alternative_positions: original.alternative_positions.clone(),
        interview_tips: merge_list(&original.interview_tips, patch.interview_tips, TIPS_LEN),
        development_plan: merge_list(&original.development_plan, patch.development_plan, PLAN_LEN),
    }
}

/// Takes the candidate list when, after dropping blanks, it has at least `min`
/// items; longer lists are cut to `max`. Otherwise keeps the original.
fn merge_list(
    original: &[String],
    candidate: Option<Vec<String>>,
    (min, max): (usize, usize),
) -> Vec<String> {
    let Some(candidate) = candidate else {
        return original.to_vec();
    };

    let cleaned: Vec<String> = candidate
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(max)
        .collect();

    if cleaned.len() >= min {
        cleaned
    } else {
        original.to_vec()
    }
}

/// Asks the generator for richer text. Never fails: any error yields the input report.
pub async fn enrich_report(
    report: JobFitReport,
    personality_type: &str,
    generator: Option<&dyn TextGenerator>,
) -> EnrichmentOutcome {
    let Some(generator) = generator else {
        info!("No text generation credentials configured, using dynamic analysis");
        return EnrichmentOutcome::unchanged(report);
    };

    match request_patch(&report, personality_type, generator).await {
        Ok(patch) => {
            let merged = merge_patch(&report, patch);
            info!(
                fit_percentage = merged.fit_percentage,
                "AI enhancement successful, fit percentage preserved"
            );
            EnrichmentOutcome {
                report: merged,
                enhanced: true,
                message: ENHANCED_MESSAGE,
            }
        }
        Err(e) => {
            warn!("AI enhancement failed, using dynamic analysis: {e}");
            EnrichmentOutcome::unchanged(report)
        }
    }
}

async fn request_patch(
    report: &JobFitReport,
    personality_type: &str,
    generator: &dyn TextGenerator,
) -> Result<EnrichmentPatch, LlmError> {
    let prompt = build_enrichment_prompt(
        &report.target_position,
        personality_type,
        report.fit_percentage,
        &report.fit_reasoning,
        &report.strengths_for_role,
        &report.challenges_for_role,
    );
    let text = generator.generate(&prompt, &enrichment_system()).await?;
    parse_json::<EnrichmentPatch>(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::archetypes::DRIVER;
    use crate::assessment::job_fit::estimate_job_fit_with_rng;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Canned generator: returns a fixed answer and records the prompt it saw.
    struct FakeGenerator {
        answer: Result<String, u16>,
        seen_prompt: Mutex<Option<String>>,
    }

    impl FakeGenerator {
        fn answering(text: &str) -> Self {
            Self {
                answer: Ok(text.to_string()),
                seen_prompt: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                answer: Err(status),
                seen_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.answer {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn sample_report() -> JobFitReport {
        let mut rng = StdRng::seed_from_u64(21);
        estimate_job_fit_with_rng(&DRIVER, "Software Engineer", &mut rng)
    }

    const GOOD_ANSWER: &str = r#"{
        "fitPercentage": 12,
        "fitReasoning": "Your decisiveness maps well to owning technical outcomes.",
        "strengthsForRole": ["Decisive", "Owns outcomes", "Calm under deadlines", "Drives delivery"],
        "challengesForRole": ["Slow down for code review", "Invite dissent", "Document decisions"],
        "interviewTips": ["a", "b", "c", "d", "e"],
        "developmentPlan": ["1", "2", "3", "4", "5"],
        "alternativePositions": [{"title": "Astronaut", "fitPercentage": 99, "reasoning": "x"}],
        "targetPosition": "Something Else"
    }"#;

    #[test]
    fn test_merge_ignores_foreign_percentage_and_protected_fields() {
        let original = sample_report();
        let patch: EnrichmentPatch = parse_json(GOOD_ANSWER).unwrap();
        let merged = merge_patch(&original, patch);

        assert_eq!(merged.fit_percentage, original.fit_percentage);
        assert_eq!(merged.target_position, original.target_position);
        assert_eq!(merged.alternative_positions, original.alternative_positions);
        assert_eq!(merged.strengths_for_role.len(), 4);
        assert_eq!(merged.interview_tips, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_merge_empty_patch_is_identity() {
        let original = sample_report();
        assert_eq!(merge_patch(&original, EnrichmentPatch::default()), original);
    }

    #[test]
    fn test_merge_rejects_blank_and_undersized_fields() {
        let original = sample_report();
        let patch = EnrichmentPatch {
            fit_reasoning: Some("   ".to_string()),
            strengths_for_role: Some(vec!["only one".to_string(), "".to_string()]),
            challenges_for_role: Some(vec![]),
            interview_tips: None,
            development_plan: Some(vec!["1", "2", "3", "4", "5", "6", "7"]
                .into_iter()
                .map(String::from)
                .collect()),
        };
        let merged = merge_patch(&original, patch);

        assert_eq!(merged.fit_reasoning, original.fit_reasoning);
        assert_eq!(merged.strengths_for_role, original.strengths_for_role);
        assert_eq!(merged.challenges_for_role, original.challenges_for_role);
        assert_eq!(merged.development_plan.len(), 5);
    }

    #[tokio::test]
    async fn test_enrich_success_pins_percentage() {
        let original = sample_report();
        let generator = FakeGenerator::answering(GOOD_ANSWER);

        let outcome = enrich_report(original.clone(), "Driver/Director", Some(&generator as &dyn TextGenerator)).await;

        assert!(outcome.enhanced);
        assert_eq!(outcome.message, ENHANCED_MESSAGE);
        assert_eq!(outcome.report.fit_percentage, original.fit_percentage);
        assert_ne!(outcome.report.fit_reasoning, original.fit_reasoning);

        let prompt = generator.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains(&format!("{}%", original.fit_percentage)));
        assert!(prompt.contains("Driver/Director"));
    }

    #[tokio::test]
    async fn test_enrich_accepts_fenced_json() {
        let original = sample_report();
        let fenced = format!("```json\n{GOOD_ANSWER}\n```");
        let generator = FakeGenerator::answering(&fenced);

        let outcome = enrich_report(original, "Driver/Director", Some(&generator as &dyn TextGenerator)).await;
        assert!(outcome.enhanced);
    }

    #[tokio::test]
    async fn test_enrich_network_failure_returns_identical_report() {
        let original = sample_report();
        let generator = FakeGenerator::failing(503);

        let outcome = enrich_report(original.clone(), "Driver/Director", Some(&generator as &dyn TextGenerator)).await;

        assert!(!outcome.enhanced);
        assert_eq!(outcome.message, UNAVAILABLE_MESSAGE);
        assert_eq!(outcome.report, original);
    }

    #[tokio::test]
    async fn test_enrich_unparseable_answer_returns_identical_report() {
        let original = sample_report();
        let generator = FakeGenerator::answering("I think you'd be great at this job!");

        let outcome = enrich_report(original.clone(), "Driver/Director", Some(&generator as &dyn TextGenerator)).await;

        assert!(!outcome.enhanced);
        assert_eq!(outcome.report, original);
    }

    #[tokio::test]
    async fn test_enrich_without_credentials_is_skipped() {
        let original = sample_report();
        let outcome = enrich_report(original.clone(), "Driver/Director", None).await;

        assert!(!outcome.enhanced);
        assert_eq!(outcome.report, original);
    }
}
