//! Analysis pipeline: score → estimate fit → optional enrichment.
//!
//! The pipeline runs on its own task; if it panics the caller still gets a
//! structurally valid answer built from `JobFitReport::emergency_fallback()`.

use std::sync::Arc;

use tracing::{error, info};

use crate::assessment::enrichment::enrich_report;
use crate::assessment::job_fit::{estimate_job_fit, JobFitReport};
use crate::assessment::models::{AnalysisResponse, PersonalityProfile, Submission};
use crate::assessment::trait_scoring::score_personality;
use crate::llm_client::TextGenerator;

pub const EMERGENCY_MESSAGE: &str = "Emergency fallback analysis";

pub async fn analyze(
    submission: Submission,
    generator: Option<Arc<dyn TextGenerator>>,
) -> AnalysisResponse {
    match tokio::spawn(run_analysis(submission, generator)).await {
        Ok(response) => response,
        Err(e) => {
            error!("Analysis pipeline failed: {e}");
            emergency_response()
        }
    }
}

async fn run_analysis(
    submission: Submission,
    generator: Option<Arc<dyn TextGenerator>>,
) -> AnalysisResponse {
    let (trait_scores, archetype) = score_personality(&submission.ratings);
    let report = estimate_job_fit(archetype, &submission.target_job_title);

    info!(
        target_job = %submission.target_job_title,
        archetype = archetype.primary_type,
        fit_percentage = report.fit_percentage,
        "Dynamic analysis generated"
    );

    let outcome = enrich_report(report, archetype.primary_type, generator.as_deref()).await;

    AnalysisResponse {
        personality: Some(PersonalityProfile {
            archetype,
            trait_scores,
        }),
        job_fit_analysis: outcome.report,
        enhanced: outcome.enhanced,
        message: outcome.message.to_string(),
    }
}

pub fn emergency_response() -> AnalysisResponse {
    AnalysisResponse {
        personality: None,
        job_fit_analysis: JobFitReport::emergency_fallback(),
        enhanced: false,
        message: EMERGENCY_MESSAGE.to_string(),
    }
}
