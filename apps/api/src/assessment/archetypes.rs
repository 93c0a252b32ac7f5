//! Archetype descriptors: constant table keyed by dominant trait.

use serde::Serialize;

use crate::assessment::trait_scoring::Trait;

/// Static profile of a personality archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub primary_type: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub work_style: &'static str,
    pub communication_style: &'static str,
    pub ideal_environment: &'static str,
    pub leadership_style: &'static str,
    pub team_role: &'static str,
    pub motivators: &'static [&'static str],
    pub stressors: &'static [&'static str],
    pub career_suggestions: &'static [&'static str],
    pub development_areas: &'static [&'static str],
    pub management_tips: &'static [&'static str],
}

impl Archetype {
    /// Label substring test used by the job-fit rules ("Driver", "Supporter", ...).
    pub fn is_any(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| self.primary_type.contains(l))
    }
}

pub static DRIVER: Archetype = Archetype {
    primary_type: "Driver/Director",
    description: "Results-oriented leader who takes charge and drives toward goals with determination and confidence.",
    strengths: &[
        "Natural leadership abilities",
        "Goal-oriented and results-focused",
        "Makes decisions quickly and confidently",
        "Thrives under pressure",
        "Takes initiative and drives change",
    ],
    challenges: &[
        "May be perceived as too aggressive or demanding",
        "Can be impatient with detailed processes",
        "May overlook people's feelings in pursuit of results",
        "Tendency to micromanage when stressed",
    ],
    work_style: "Direct, fast-paced, and results-oriented. Prefers autonomy and control over projects and decisions.",
    communication_style: "Direct, concise, and action-oriented. Appreciates bottom-line information and quick decisions.",
    ideal_environment: "Challenging, competitive environments with opportunities for leadership and measurable results.",
    leadership_style: "Authoritative and directive, focuses on achieving objectives and driving performance.",
    team_role: "Natural leader who sets direction, makes tough decisions, and drives team toward goals.",
    motivators: &[
        "Achievement recognition",
        "Challenging goals",
        "Autonomy and control",
        "Competition",
        "Fast-paced environment",
    ],
    stressors: &[
        "Micromanagement",
        "Slow processes",
        "Indecision",
        "Routine tasks",
        "Lack of control",
    ],
    career_suggestions: &[
        "Executive/CEO roles",
        "Sales management",
        "Project management",
        "Entrepreneurship",
        "Operations leadership",
    ],
    development_areas: &[
        "Active listening skills",
        "Patience with others",
        "Collaborative decision-making",
        "Emotional intelligence",
    ],
    management_tips: &[
        "Provide clear objectives and deadlines",
        "Give autonomy over methods",
        "Recognize achievements publicly",
        "Avoid micromanaging",
    ],
};

pub static INFLUENCER: Archetype = Archetype {
    primary_type: "Influencer/Socializer",
    description: "Enthusiastic communicator who inspires and motivates others through charisma and relationship-building.",
    strengths: &[
        "Excellent communication and presentation skills",
        "Natural ability to influence and persuade",
        "Enthusiastic and optimistic outlook",
        "Builds relationships easily",
        "Creative and innovative thinking",
    ],
    challenges: &[
        "May struggle with detailed, analytical work",
        "Can be overly optimistic about timelines",
        "May avoid conflict or difficult conversations",
        "Tendency to be disorganized or scattered",
    ],
    work_style: "Collaborative, people-focused, and relationship-oriented. Thrives on interaction and team dynamics.",
    communication_style: "Expressive, enthusiastic, and story-driven. Prefers face-to-face interaction and brainstorming.",
    ideal_environment: "Social, collaborative environments with variety, recognition, and people interaction.",
    leadership_style: "Inspirational and motivational, focuses on team building and creating shared vision.",
    team_role: "Team motivator who builds consensus, generates ideas, and maintains positive team morale.",
    motivators: &[
        "Social recognition",
        "Variety and change",
        "People interaction",
        "Creative projects",
        "Public speaking opportunities",
    ],
    stressors: &[
        "Isolation",
        "Detailed analysis",
        "Criticism",
        "Routine work",
        "Conflict situations",
    ],
    career_suggestions: &[
        "Sales and marketing",
        "Training and development",
        "Public relations",
        "Event management",
        "Counseling",
    ],
    development_areas: &[
        "Attention to detail",
        "Time management",
        "Data analysis skills",
        "Follow-through on commitments",
    ],
    management_tips: &[
        "Provide social interaction opportunities",
        "Recognize contributions publicly",
        "Offer variety in assignments",
        "Support with detail-oriented tasks",
    ],
};

pub static SUPPORTER: Archetype = Archetype {
    primary_type: "Supporter/Amiable",
    description: "Reliable team player who provides stability, support, and harmony in collaborative environments.",
    strengths: &[
        "Excellent listening and support skills",
        "Reliable and consistent performance",
        "Calm under pressure",
        "Strong team collaboration abilities",
        "Loyal and committed to organization",
    ],
    challenges: &[
        "May avoid change or new challenges",
        "Can be indecisive when facing conflict",
        "May not advocate strongly for own ideas",
        "Tendency to take on too much to help others",
    ],
    work_style: "Methodical, supportive, and relationship-focused. Values stability and prefers collaborative approaches.",
    communication_style: "Patient, supportive, and diplomatic. Prefers one-on-one conversations and consensus-building.",
    ideal_environment: "Stable, supportive environments with clear expectations and strong team relationships.",
    leadership_style: "Collaborative and supportive, focuses on team development and consensus building.",
    team_role: "Team supporter who facilitates collaboration, provides stability, and ensures everyone is heard.",
    motivators: &[
        "Job security",
        "Team harmony",
        "Helping others succeed",
        "Stable relationships",
        "Clear expectations",
    ],
    stressors: &[
        "Sudden changes",
        "Conflict situations",
        "High pressure deadlines",
        "Competition",
        "Isolation",
    ],
    career_suggestions: &[
        "Human resources",
        "Customer service",
        "Healthcare",
        "Education",
        "Administration",
    ],
    development_areas: &[
        "Assertiveness training",
        "Change management skills",
        "Decision-making confidence",
        "Self-advocacy",
    ],
    management_tips: &[
        "Provide advance notice of changes",
        "Create supportive team environment",
        "Recognize steady contributions",
        "Offer stability and security",
    ],
};

/// Every archetype the scorer can return.
pub static ALL_ARCHETYPES: [&Archetype; 3] = [&DRIVER, &INFLUENCER, &SUPPORTER];

/// Resolves the descriptor for a dominant trait.
///
/// Traits without a dedicated descriptor resolve to `SUPPORTER`.
pub fn archetype_for(dominant: Trait) -> &'static Archetype {
    match dominant {
        Trait::Dominance => &DRIVER,
        Trait::Influence => &INFLUENCER,
        Trait::Steadiness
        | Trait::Conscientiousness
        | Trait::Empathy
        | Trait::Adaptability => &SUPPORTER,
    }
}
