// Shared prompt fragments. Each service that calls the model defines its own
// prompts.rs alongside it; only cross-cutting fragments live here.

/// Appended to every system instruction.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON document only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
