//! Axum route handlers for the Assessment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::assessment::models::{AnalysisResponse, AssessmentRequest, SubmitResponse};
use crate::assessment::pipeline::analyze;
use crate::assessment::ratings::ASSESSMENT_TERMS;
use crate::errors::AppError;
use crate::render::email::{email_subject, render_report_html, ReportContext};
use crate::render::mailer::{MailError, OutgoingEmail};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TermsResponse {
    pub terms: &'static [&'static str],
}

/// GET /api/v1/assessments/terms
///
/// The questionnaire in rating order.
pub async fn handle_terms() -> Json<TermsResponse> {
    Json(TermsResponse {
        terms: &ASSESSMENT_TERMS,
    })
}

/// POST /api/v1/assessments/analyze
///
/// Score → job fit → optional enrichment. Nothing is emailed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload?;
    let submission = request.validate()?;
    Ok(Json(analyze(submission, state.text_generator.clone()).await))
}

/// POST /api/v1/assessments/submit
///
/// Full pipeline: analysis, HTML rendering, delivery to the HR recipients.
/// Delivery failure is the only post-validation error surfaced to the caller.
pub async fn handle_submit(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(request) = payload?;
    let submission = request.validate()?;
    let delivery = state.mail.as_ref().ok_or(MailError::NotConfigured)?;

    let analysis = analyze(submission.clone(), state.text_generator.clone()).await;
    let report = &analysis.job_fit_analysis;

    let email = OutgoingEmail {
        to: delivery.recipients.clone(),
        subject: email_subject(
            &submission.user_name,
            &submission.target_job_title,
            report.fit_percentage,
        ),
        html_body: render_report_html(&ReportContext {
            submission: &submission,
            personality: analysis.personality.as_ref(),
            report,
            generated_on: Utc::now().date_naive(),
        }),
    };

    let receipt = delivery.mailer.send(&email).await?;

    info!(
        message_id = %receipt.message_id,
        fit_percentage = report.fit_percentage,
        enhanced = analysis.enhanced,
        "Assessment submitted and emailed"
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: "Assessment submitted and emailed successfully".to_string(),
        fit_percentage: report.fit_percentage,
        enhanced: analysis.enhanced,
    }))
}
