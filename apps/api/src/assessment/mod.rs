// Personality assessment engine.
// Implements: rating validation, trait scoring, archetype lookup, job-fit
// estimation, LLM enrichment with a pinned fit percentage.
// All LLM calls go through llm_client; no direct API calls here.

pub mod archetypes;
pub mod enrichment;
pub mod handlers;
pub mod job_fit;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod ratings;
pub mod trait_scoring;
