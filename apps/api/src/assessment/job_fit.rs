//! Job-fit estimation: keyword rules over the target job title, branched on archetype.
//!
//! Algorithm:
//! 1. Lower-case the title and walk `ROLE_RULES` in priority order; first group
//!    with a keyword substring match wins. No match → generic base 65.
//! 2. Inside the group, the first branch whose labels appear in the archetype's
//!    `primary_type` decides the base and any replaced strengths/challenges/alternatives.
//!    No branch matches → the group's `otherwise` base.
//! 3. base + uniform jitter in [-8, 8], clamped to [45, 98].
//! 4. Reasoning adjective thresholds the final percentage.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assessment::archetypes::Archetype;

pub const MIN_FIT: u8 = 45;
pub const MAX_FIT: u8 = 98;
pub const JITTER: i32 = 8;
pub const GENERIC_BASE: u8 = 65;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativePosition {
    pub title: String,
    pub fit_percentage: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFitReport {
    pub target_position: String,
    pub fit_percentage: u8,
    pub fit_reasoning: String,
    pub strengths_for_role: Vec<String>,
    pub challenges_for_role: Vec<String>,
    pub alternative_positions: Vec<AlternativePosition>,
    pub interview_tips: Vec<String>,
    pub development_plan: Vec<String>,
}

impl JobFitReport {
    /// Structurally valid report returned when the pipeline fails unexpectedly.
    pub fn emergency_fallback() -> Self {
        Self {
            target_position: "Unknown Position".to_string(),
            fit_percentage: 70,
            fit_reasoning: "Basic compatibility analysis completed".to_string(),
            strengths_for_role: owned(&[
                "Strong work ethic",
                "Good communication skills",
                "Team collaboration",
            ]),
            challenges_for_role: owned(&[
                "Continue professional development",
                "Adapt to role requirements",
            ]),
            alternative_positions: vec![
                AlternativePosition {
                    title: "Customer Service".to_string(),
                    fit_percentage: 75,
                    reasoning: "People skills transfer well".to_string(),
                },
                AlternativePosition {
                    title: "Administrative Role".to_string(),
                    fit_percentage: 72,
                    reasoning: "Organizational skills applicable".to_string(),
                },
            ],
            interview_tips: owned(&[
                "Highlight your key strengths",
                "Show enthusiasm for the role",
                "Ask thoughtful questions",
                "Prepare specific examples",
                "Research the company culture",
            ]),
            development_plan: owned(&[
                "Focus on industry-specific skills",
                "Develop leadership capabilities",
                "Enhance technical knowledge",
                "Build communication skills",
                "Pursue relevant certifications",
            ]),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// (title, fit percentage, reasoning)
type AlternativeSpec = (&'static str, u8, &'static str);

struct Branch {
    /// Matches when any label is a substring of the archetype's `primary_type`.
    labels: &'static [&'static str],
    base: u8,
    strengths: Option<&'static [&'static str]>,
    challenges: Option<&'static [&'static str]>,
    alternatives: Option<&'static [AlternativeSpec]>,
}

struct RoleRule {
    name: &'static str,
    keywords: &'static [&'static str],
    branches: &'static [Branch],
    otherwise: u8,
}

static GENERIC_ALTERNATIVES: [AlternativeSpec; 3] = [
    ("Customer Service Representative", 75, "Strong interpersonal skills align well"),
    ("Project Coordinator", 80, "Organizational abilities are a great match"),
    ("Training Specialist", 78, "Communication skills suit training environments"),
];

static ROLE_RULES: [RoleRule; 5] = [
    RoleRule {
        name: "technical",
        keywords: &["engineer", "developer", "technical", "analyst"],
        branches: &[
            Branch {
                labels: &["Analyzer", "Driver"],
                base: 88,
                strengths: Some(&[
                    "Strong analytical thinking",
                    "Attention to detail",
                    "Problem-solving abilities",
                ]),
                challenges: None,
                alternatives: Some(&[
                    ("Systems Analyst", 91, "Technical analysis skills are perfect"),
                    ("Quality Assurance Engineer", 87, "Detail-oriented approach fits well"),
                    ("Technical Writer", 83, "Communication of technical concepts"),
                ]),
            },
            Branch {
                labels: &["Helper", "Supporter"],
                base: 58,
                strengths: None,
                challenges: Some(&[
                    "May need to develop technical depth",
                    "Consider strengthening analytical skills",
                ]),
                alternatives: None,
            },
        ],
        otherwise: 69,
    },
    RoleRule {
        name: "sales",
        keywords: &["sales", "marketing", "business development"],
        branches: &[
            Branch {
                labels: &["Influencer", "Driver"],
                base: 92,
                strengths: Some(&[
                    "Excellent persuasion abilities",
                    "Natural relationship building",
                    "Goal-oriented mindset",
                ]),
                challenges: None,
                alternatives: Some(&[
                    ("Account Manager", 94, "Relationship skills are exceptional"),
                    ("Business Development", 89, "Growth mindset aligns perfectly"),
                    ("Marketing Coordinator", 86, "Creative communication abilities"),
                ]),
            },
            Branch {
                labels: &["Supporter", "Helper"],
                base: 71,
                strengths: None,
                challenges: None,
                alternatives: None,
            },
        ],
        otherwise: 79,
    },
    RoleRule {
        name: "management",
        keywords: &["manager", "lead", "supervisor", "director"],
        branches: &[
            Branch {
                labels: &["Driver", "Influencer"],
                base: 89,
                strengths: Some(&[
                    "Natural leadership qualities",
                    "Decision-making confidence",
                    "Team motivation abilities",
                ]),
                challenges: None,
                alternatives: Some(&[
                    ("Project Manager", 92, "Leadership and organization skills excel"),
                    ("Team Lead", 88, "People management comes naturally"),
                    ("Operations Supervisor", 85, "Process management fits well"),
                ]),
            },
            Branch {
                labels: &["Supporter", "Helper"],
                base: 77,
                strengths: Some(&[
                    "Collaborative leadership style",
                    "Team support abilities",
                    "Consensus building",
                ]),
                challenges: None,
                alternatives: None,
            },
        ],
        otherwise: 72,
    },
    RoleRule {
        name: "support",
        keywords: &["support", "service", "representative"],
        branches: &[
            Branch {
                labels: &["Supporter", "Helper"],
                base: 91,
                strengths: Some(&[
                    "Excellent customer service orientation",
                    "Patient problem-solving",
                    "Empathetic communication",
                ]),
                challenges: None,
                alternatives: Some(&[
                    ("Customer Success Manager", 93, "Support and relationship skills excel"),
                    ("Help Desk Specialist", 88, "Patient problem-solving approach"),
                    ("Training Coordinator", 85, "Supportive teaching abilities"),
                ]),
            },
            Branch {
                labels: &["Analyzer"],
                base: 78,
                strengths: None,
                challenges: None,
                alternatives: None,
            },
        ],
        otherwise: 82,
    },
    RoleRule {
        name: "creative",
        // "marketing" is shadowed by the sales group above.
        keywords: &["creative", "design", "marketing"],
        branches: &[Branch {
            labels: &["Adapter", "Influencer"],
            base: 87,
            strengths: Some(&[
                "Creative problem-solving",
                "Innovative thinking",
                "Adaptable approach",
            ]),
            challenges: None,
            alternatives: Some(&[
                ("Creative Director", 90, "Innovation and leadership combine well"),
                ("Marketing Specialist", 86, "Creative communication skills"),
                ("UX Designer", 84, "User-focused creative thinking"),
            ]),
        }],
        otherwise: 73,
    },
];

const INTERVIEW_TIPS: [&str; 5] = [
    "Highlight specific examples that demonstrate your key strengths",
    "Prepare to discuss how you handle challenging situations",
    "Show enthusiasm for learning and professional development",
    "Demonstrate your problem-solving approach with concrete examples",
    "Ask thoughtful questions about the role and company culture",
];

const DEVELOPMENT_PLAN: [&str; 5] = [
    "Focus on developing industry-specific technical skills",
    "Seek opportunities to strengthen leadership capabilities",
    "Build stronger project management and organization skills",
    "Enhance communication and presentation abilities",
    "Consider pursuing relevant certifications or training",
];

// ────────────────────────────────────────────────────────────────────────────
// Deterministic match
// ────────────────────────────────────────────────────────────────────────────

/// The deterministic part of the estimate, before jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMatch {
    /// Name of the keyword group that matched, `None` for the generic fallback.
    pub group: Option<&'static str>,
    pub base: u8,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub alternatives: Vec<AlternativePosition>,
}

pub fn match_role(archetype: &Archetype, job_title: &str) -> RoleMatch {
    let title = job_title.to_lowercase();

    let mut role_match = RoleMatch {
        group: None,
        base: GENERIC_BASE,
        strengths: owned(&archetype.strengths[..archetype.strengths.len().min(3)]),
        challenges: owned(&archetype.challenges[..archetype.challenges.len().min(2)]),
        alternatives: alternatives(&GENERIC_ALTERNATIVES),
    };

    let Some(rule) = ROLE_RULES
        .iter()
        .find(|r| r.keywords.iter().any(|k| title.contains(k)))
    else {
        return role_match;
    };

    role_match.group = Some(rule.name);
    match rule.branches.iter().find(|b| archetype.is_any(b.labels)) {
        Some(branch) => {
            role_match.base = branch.base;
            if let Some(s) = branch.strengths {
                role_match.strengths = owned(s);
            }
            if let Some(c) = branch.challenges {
                role_match.challenges = owned(c);
            }
            if let Some(a) = branch.alternatives {
                role_match.alternatives = alternatives(a);
            }
        }
        None => role_match.base = rule.otherwise,
    }

    role_match
}

// ────────────────────────────────────────────────────────────────────────────
// Full estimate
// ────────────────────────────────────────────────────────────────────────────

/// Estimates job fit using the thread-local RNG for jitter.
pub fn estimate_job_fit(archetype: &Archetype, job_title: &str) -> JobFitReport {
    estimate_job_fit_with_rng(archetype, job_title, &mut rand::thread_rng())
}

pub fn estimate_job_fit_with_rng<R: Rng + ?Sized>(
    archetype: &Archetype,
    job_title: &str,
    rng: &mut R,
) -> JobFitReport {
    let role_match = match_role(archetype, job_title);
    let fit_percentage = apply_jitter(role_match.base, rng.gen_range(-JITTER..=JITTER));

    JobFitReport {
        target_position: job_title.to_string(),
        fit_percentage,
        fit_reasoning: format!(
            "Based on your {} personality type, you show {} alignment with this role's requirements.",
            archetype.primary_type,
            fit_adjective(fit_percentage)
        ),
        strengths_for_role: role_match.strengths,
        challenges_for_role: role_match.challenges,
        alternative_positions: role_match.alternatives,
        interview_tips: owned(&INTERVIEW_TIPS),
        development_plan: owned(&DEVELOPMENT_PLAN),
    }
}

/// base + jitter, clamped to [MIN_FIT, MAX_FIT].
pub fn apply_jitter(base: u8, jitter: i32) -> u8 {
    (base as i32 + jitter).clamp(MIN_FIT as i32, MAX_FIT as i32) as u8
}

/// Qualitative word for a fit percentage.
pub fn fit_adjective(percentage: u8) -> &'static str {
    if percentage >= 85 {
        "excellent"
    } else if percentage >= 75 {
        "strong"
    } else if percentage >= 65 {
        "good"
    } else {
        "moderate"
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn alternatives(specs: &[AlternativeSpec]) -> Vec<AlternativePosition> {
    specs
        .iter()
        .map(|&(title, fit_percentage, reasoning)| AlternativePosition {
            title: title.to_string(),
            fit_percentage,
            reasoning: reasoning.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::archetypes::{ALL_ARCHETYPES, DRIVER, INFLUENCER, SUPPORTER};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_engineer_driver_base_88() {
        let m = match_role(&DRIVER, "Software Engineer");
        assert_eq!(m.group, Some("technical"));
        assert_eq!(m.base, 88);
        assert_eq!(m.alternatives[0].title, "Systems Analyst");
        assert_eq!(m.strengths[0], "Strong analytical thinking");
    }

    #[test]
    fn test_engineer_driver_final_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let report = estimate_job_fit_with_rng(&DRIVER, "Software Engineer", &mut rng);
            assert!((80..=96).contains(&report.fit_percentage), "{}", report.fit_percentage);
        }
    }

    #[test]
    fn test_support_supporter_base_91_range() {
        let m = match_role(&SUPPORTER, "Customer Support Representative");
        assert_eq!(m.group, Some("support"));
        assert_eq!(m.base, 91);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let report =
                estimate_job_fit_with_rng(&SUPPORTER, "Customer Support Representative", &mut rng);
            assert!((83..=98).contains(&report.fit_percentage));
        }
    }

    #[test]
    fn test_unrecognized_title_uses_generic_base() {
        let m = match_role(&INFLUENCER, "Xyzzy Role");
        assert_eq!(m.group, None);
        assert_eq!(m.base, GENERIC_BASE);
        assert_eq!(m.strengths, owned(&INFLUENCER.strengths[..3]));
        assert_eq!(m.challenges, owned(&INFLUENCER.challenges[..2]));
        assert_eq!(m.alternatives.len(), 3);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let report = estimate_job_fit_with_rng(&INFLUENCER, "Xyzzy Role", &mut rng);
            assert!((57..=73).contains(&report.fit_percentage));
        }
    }

    #[test]
    fn test_empty_title_is_generic() {
        assert_eq!(match_role(&DRIVER, "").base, GENERIC_BASE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(match_role(&INFLUENCER, "SALES ASSOCIATE").base, 92);
    }

    #[test]
    fn test_group_priority_first_match_wins() {
        // "Technical Sales Manager" hits technical before sales or management.
        assert_eq!(match_role(&INFLUENCER, "Technical Sales Manager").base, 69);
        // "Marketing Designer" is claimed by sales, never creative.
        assert_eq!(match_role(&INFLUENCER, "Marketing Designer").group, Some("sales"));
    }

    #[test]
    fn test_substring_keywords_match_inside_words() {
        // "lead" inside "Leadership"
        assert_eq!(match_role(&DRIVER, "Leadership Coach").group, Some("management"));
    }

    #[test]
    fn test_supporter_engineer_replaces_only_challenges() {
        let m = match_role(&SUPPORTER, "Data Analyst");
        assert_eq!(m.base, 58);
        assert_eq!(m.strengths, owned(&SUPPORTER.strengths[..3]));
        assert_eq!(m.challenges[0], "May need to develop technical depth");
        assert_eq!(m.alternatives[0].title, "Customer Service Representative");
    }

    #[test]
    fn test_otherwise_branches() {
        assert_eq!(match_role(&INFLUENCER, "Backend Developer").base, 69);
        assert_eq!(match_role(&SUPPORTER, "Sales Rep").base, 71);
        assert_eq!(match_role(&SUPPORTER, "Shift Supervisor").base, 77);
        // "technician" is not "technical"; falls through to the support group
        assert_eq!(match_role(&DRIVER, "Field Service Technician").base, 82);
        assert_eq!(match_role(&DRIVER, "Service Desk Agent").base, 82);
        assert_eq!(match_role(&DRIVER, "Graphic Design").base, 73);
        assert_eq!(match_role(&INFLUENCER, "Creative Producer").base, 87);
    }

    #[test]
    fn test_jitter_clamps_to_bounds() {
        assert_eq!(apply_jitter(92, 8), MAX_FIT);
        assert_eq!(apply_jitter(50, -8), MIN_FIT);
        assert_eq!(apply_jitter(88, -8), 80);
        assert_eq!(apply_jitter(65, 0), 65);
    }

    #[test]
    fn test_jitter_covers_all_17_outcomes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let r = estimate_job_fit_with_rng(&INFLUENCER, "Xyzzy Role", &mut rng);
            seen.insert(r.fit_percentage);
        }
        assert_eq!(seen.len(), 17);
        assert_eq!(seen.iter().min(), Some(&57));
        assert_eq!(seen.iter().max(), Some(&73));
    }

    #[test]
    fn test_fit_percentage_always_bounded() {
        let titles = [
            "Software Engineer",
            "Account Executive - Sales",
            "Engineering Manager",
            "Support Specialist",
            "Creative Lead",
            "Xyzzy Role",
            "",
        ];
        let mut rng = StdRng::seed_from_u64(99);
        for archetype in ALL_ARCHETYPES {
            for title in titles {
                for _ in 0..50 {
                    let r = estimate_job_fit_with_rng(archetype, title, &mut rng);
                    assert!((MIN_FIT..=MAX_FIT).contains(&r.fit_percentage));
                }
            }
        }
    }

    #[test]
    fn test_fit_adjective_thresholds() {
        assert_eq!(fit_adjective(98), "excellent");
        assert_eq!(fit_adjective(85), "excellent");
        assert_eq!(fit_adjective(84), "strong");
        assert_eq!(fit_adjective(75), "strong");
        assert_eq!(fit_adjective(74), "good");
        assert_eq!(fit_adjective(65), "good");
        assert_eq!(fit_adjective(64), "moderate");
        assert_eq!(fit_adjective(45), "moderate");
    }

    #[test]
    fn test_reasoning_uses_label_and_final_percentage() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = estimate_job_fit_with_rng(&DRIVER, "Software Engineer", &mut rng);
        assert!(r.fit_reasoning.starts_with("Based on your Driver/Director personality type"));
        assert!(r.fit_reasoning.contains(fit_adjective(r.fit_percentage)));
    }

    #[test]
    fn test_tips_and_plan_are_static() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = estimate_job_fit_with_rng(&DRIVER, "Software Engineer", &mut rng);
        let b = estimate_job_fit_with_rng(&SUPPORTER, "Xyzzy Role", &mut rng);
        assert_eq!(a.interview_tips, b.interview_tips);
        assert_eq!(a.development_plan, b.development_plan);
        assert_eq!(a.interview_tips.len(), 5);
        assert_eq!(a.development_plan.len(), 5);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(JobFitReport::emergency_fallback()).unwrap();
        assert_eq!(json["fitPercentage"], 70);
        assert_eq!(json["targetPosition"], "Unknown Position");
        assert_eq!(json["alternativePositions"][0]["fitPercentage"], 75);
    }
}
