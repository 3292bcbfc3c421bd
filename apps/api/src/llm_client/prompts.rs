// Shared prompt fragments used by every structured-extraction call.
// Each pipeline keeps its own prompts.rs alongside it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Closing directive appended to every structured-extraction prompt.
pub const JSON_ONLY_DIRECTIVE: &str = "\
CRITICAL RULES:
1. Return ONLY the JSON object
2. No markdown formatting
3. No explanatory text
4. Numeric fields MUST be numbers (not strings)
5. Proper JSON syntax";
