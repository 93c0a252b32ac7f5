//! HR email rendering: one self-contained HTML document per submission.
//!
//! Every piece of caller- or model-supplied text passes through `escape_html`.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::assessment::job_fit::{fit_adjective, JobFitReport};
use crate::assessment::models::{PersonalityProfile, Submission};
use crate::assessment::ratings::MAX_RATING;

/// Banding of a fit percentage used for the score block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitLevel {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn fit_level(percentage: u8) -> FitLevel {
    let (label, color) = if percentage >= 85 {
        ("Excellent Match", "#10b981")
    } else if percentage >= 75 {
        ("Strong Match", "#3b82f6")
    } else if percentage >= 65 {
        ("Good Match", "#8b5cf6")
    } else {
        ("Moderate Match", "#f59e0b")
    };
    FitLevel { label, color }
}

pub fn email_subject(user_name: &str, target_job: &str, fit_percentage: u8) -> String {
    format!("Personality Assessment Results - {user_name} ({target_job}, {fit_percentage}% fit)")
}

/// Everything the template needs.
pub struct ReportContext<'a> {
    pub submission: &'a Submission,
    pub personality: Option<&'a PersonalityProfile>,
    pub report: &'a JobFitReport,
    pub generated_on: NaiveDate,
}

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f8fafc; }
        .container { max-width: 800px; margin: 0 auto; background: white; border-radius: 12px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); overflow: hidden; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }
        .content { padding: 30px; }
        .section { margin-bottom: 30px; padding: 20px; border-radius: 8px; background: #f8fafc; }
        .fit-score { color: white; padding: 20px; border-radius: 8px; text-align: center; margin: 20px 0; }
        .fit-percentage { font-size: 3em; font-weight: bold; margin: 0; }
        ul { padding-left: 20px; }
        li { margin-bottom: 8px; }
        .assessment-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 15px; margin: 20px 0; }
        .assessment-item { background: white; padding: 15px; border-radius: 6px; border: 1px solid #e5e7eb; display: flex; justify-content: space-between; align-items: center; }
        .alternative { background: white; padding: 15px; margin: 10px 0; border-radius: 8px; border: 1px solid #e5e7eb; }
        .footer { background: #f9fafb; padding: 20px; text-align: center; font-size: 12px; color: #6b7280; }
"#;

pub fn render_report_html(ctx: &ReportContext<'_>) -> String {
    let s = ctx.submission;
    let r = ctx.report;
    let level = fit_level(r.fit_percentage);
    let job = escape_html(&s.target_job_title);

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Personality Assessment Results</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str(
        "<div class=\"header\">\n<h1>Employee Personality Assessment Report</h1>\n\
         <p>Analysis &amp; Job Fit Evaluation</p>\n\
         <p><strong>Confidential HR Document</strong></p>\n</div>\n",
    );
    html.push_str("<div class=\"content\">\n");

    // Candidate information
    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>Candidate Information</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Target Position:</strong> {}</p>\n\
         <p><strong>Current Role:</strong> {}</p>\n\
         <p><strong>Assessment Date:</strong> {}</p>\n\
         <p><strong>Assessment Type:</strong> 30-Term Personality Analysis</p>\n</div>\n",
        escape_html(&s.user_name),
        job,
        escape_html(s.user_position.as_deref().unwrap_or("Not specified")),
        format_date(s.assessment_date),
    );

    // Fit score
    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>Job Fit Analysis</h2>\n\
         <div class=\"fit-score\" style=\"background: {color};\">\n\
         <div class=\"fit-percentage\">{pct}%</div>\n<div>{label}</div>\n</div>\n\
         <p>{reasoning}</p>\n</div>\n",
        color = level.color,
        pct = r.fit_percentage,
        label = level.label,
        reasoning = escape_html(&r.fit_reasoning),
    );

    push_list_section(&mut html, &format!("Strengths for {job}"), &r.strengths_for_role);
    push_list_section(&mut html, "Areas to Address", &r.challenges_for_role);

    html.push_str("<div class=\"section\">\n<h3>Alternative Position Recommendations</h3>\n");
    for alt in &r.alternative_positions {
        let _ = write!(
            html,
            "<div class=\"alternative\">\n<h4>{}</h4>\n<p><strong>{}% fit</strong></p>\n<p>{}</p>\n</div>\n",
            escape_html(&alt.title),
            alt.fit_percentage,
            escape_html(&alt.reasoning),
        );
    }
    html.push_str("</div>\n");

    push_list_section(&mut html, "Interview Recommendations", &r.interview_tips);
    push_list_section(&mut html, "Development Plan", &r.development_plan);

    if let Some(p) = ctx.personality {
        push_personality_sections(&mut html, p, r.fit_percentage);
    }

    // Ratings grid
    html.push_str(
        "<div class=\"section\">\n<h2>Detailed Assessment Responses</h2>\n\
         <p><strong>30-Term Personality Assessment Results</strong> (1 = Not very, 5 = Very)</p>\n\
         <div class=\"assessment-grid\">\n",
    );
    for (term, score) in s.ratings.iter_terms() {
        let _ = write!(
            html,
            "<div class=\"assessment-item\"><span><strong>{term}</strong></span>{}</div>\n",
            score_bar(score),
        );
    }
    html.push_str("</div>\n</div>\n");

    if let Some(p) = ctx.personality {
        push_list_section(
            &mut html,
            "HR Management Recommendations",
            p.archetype.management_tips,
        );
    }

    html.push_str("</div>\n");
    let _ = write!(
        html,
        "<div class=\"footer\">\n<p><strong>Employee Management System &bull; Personality Assessment Tool</strong></p>\n\
         <p>Generated on {}</p>\n\
         <p>This assessment is confidential and intended for HR evaluation purposes only.</p>\n</div>\n",
        format_date(ctx.generated_on),
    );
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn push_personality_sections(html: &mut String, p: &PersonalityProfile, fit_percentage: u8) {
    let a = p.archetype;
    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>Personality Analysis: {kind}</h2>\n\
         <p>As a {kind}, the candidate shows {adj} alignment with this role's requirements.</p>\n\
         <p><strong>Description:</strong> {desc}</p>\n",
        kind = a.primary_type,
        adj = fit_adjective(fit_percentage),
        desc = a.description,
    );
    push_list(html, "Core Strengths", a.strengths);
    push_list(html, "Development Areas", a.challenges);
    html.push_str("</div>\n");

    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>Work Style &amp; Environment</h2>\n\
         <p><strong>Work Style:</strong> {}</p>\n\
         <p><strong>Communication Style:</strong> {}</p>\n\
         <p><strong>Ideal Environment:</strong> {}</p>\n\
         <p><strong>Leadership Style:</strong> {}</p>\n\
         <p><strong>Team Role:</strong> {}</p>\n</div>\n",
        a.work_style, a.communication_style, a.ideal_environment, a.leadership_style, a.team_role,
    );

    push_list_section(html, "Key Motivators", a.motivators);
    push_list_section(html, "Potential Stressors", a.stressors);
}

fn push_list_section<S: AsRef<str>>(html: &mut String, heading: &str, items: &[S]) {
    html.push_str("<div class=\"section\">\n");
    push_list(html, heading, items);
    html.push_str("</div>\n");
}

/// `heading` is inserted verbatim; callers escape it when it carries user text.
fn push_list<S: AsRef<str>>(html: &mut String, heading: &str, items: &[S]) {
    let _ = write!(html, "<h3>{heading}</h3>\n<ul>\n");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape_html(item.as_ref()));
    }
    html.push_str("</ul>\n");
}

fn score_bar(score: u8) -> String {
    let width = score as u32 * 100 / MAX_RATING as u32;
    format!(
        "<div style=\"display: flex; align-items: center; gap: 10px;\"><span>{score}/5</span>\
         <div style=\"width: 100px; height: 6px; background: #e5e7eb; border-radius: 3px; overflow: hidden;\">\
         <div style=\"height: 100%; width: {width}%; background: linear-gradient(90deg, #ef4444, #f59e0b, #eab308, #22c55e, #10b981);\"></div>\
         </div></div>"
    )
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
