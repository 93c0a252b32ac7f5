use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assessment::archetypes::Archetype;
use crate::assessment::job_fit::JobFitReport;
use crate::assessment::ratings::RatingVector;
use crate::assessment::trait_scoring::TraitScores;
use crate::errors::AppError;

/// Body posted by the assessment form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub user_name: String,
    #[serde(default)]
    pub user_position: Option<String>,
    pub target_job_title: String,
    pub assessment_date: String,
    pub ratings: Vec<i64>,
}

/// An `AssessmentRequest` that passed validation.
#[derive(Debug, Clone)]
pub struct Submission {
    pub user_name: String,
    pub user_position: Option<String>,
    pub target_job_title: String,
    pub assessment_date: NaiveDate,
    pub ratings: RatingVector,
}

impl AssessmentRequest {
    pub fn validate(&self) -> Result<Submission, AppError> {
        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            return Err(AppError::Validation("userName cannot be empty".to_string()));
        }

        let target_job_title = self.target_job_title.trim();
        if target_job_title.is_empty() {
            return Err(AppError::Validation(
                "targetJobTitle cannot be empty".to_string(),
            ));
        }

        let assessment_date = NaiveDate::parse_from_str(self.assessment_date.trim(), "%Y-%m-%d")
            .map_err(|_| {
                AppError::Validation(format!(
                    "assessmentDate '{}' is not a YYYY-MM-DD date",
                    self.assessment_date
                ))
            })?;

        let ratings = RatingVector::try_from(self.ratings.as_slice())
            .map_err(|e| AppError::Validation(format!("ratings: {e}")))?;

        let user_position = self
            .user_position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Submission {
            user_name: user_name.to_string(),
            user_position,
            target_job_title: target_job_title.to_string(),
            assessment_date,
            ratings,
        })
    }
}

/// Archetype descriptor plus the averages that selected it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    #[serde(flatten)]
    pub archetype: &'static Archetype,
    pub trait_scores: TraitScores,
}

/// Result of the scoring pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// `None` only for the emergency fallback.
    pub personality: Option<PersonalityProfile>,
    pub job_fit_analysis: JobFitReport,
    pub enhanced: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub fit_percentage: u8,
    pub enhanced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AssessmentRequest {
        AssessmentRequest {
            user_name: "  Ada Lovelace ".to_string(),
            user_position: Some("  ".to_string()),
            target_job_title: "Software Engineer".to_string(),
            assessment_date: "2024-05-01".to_string(),
            ratings: vec![3; 30],
        }
    }

    #[test]
    fn test_valid_request_is_normalized() {
        let s = request().validate().unwrap();
        assert_eq!(s.user_name, "Ada Lovelace");
        assert_eq!(s.user_position, None);
        assert_eq!(s.assessment_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut r = request();
        r.user_name = " ".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(m)) if m.contains("userName")));
    }

    #[test]
    fn test_missing_job_title_rejected() {
        let mut r = request();
        r.target_job_title = String::new();
        assert!(matches!(r.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut r = request();
        r.assessment_date = "05/01/2024".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(m)) if m.contains("assessmentDate")));
    }

    #[test]
    fn test_unanswered_rating_rejected() {
        let mut r = request();
        r.ratings[12] = 0;
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("Pleasant"), "{err}");
    }

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "userName": "Grace",
            "targetJobTitle": "Team Lead",
            "assessmentDate": "2024-01-31",
            "ratings": vec![5; 30],
        });
        let r: AssessmentRequest = serde_json::from_value(json).unwrap();
        assert!(r.user_position.is_none());
        assert!(r.validate().is_ok());
    }
}
