// Shared prompt fragments. Each module that needs LLM calls defines its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that pins a computed number the model must not touch.
pub const PRESERVE_SCORE_INSTRUCTION: &str = "\
    CRITICAL: The fit percentage was computed by a deterministic scoring engine. \
    Echo it back exactly as given. Never recalculate, round, or adjust it.";
