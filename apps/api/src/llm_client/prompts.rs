// Cross-cutting prompt fragments. Each feature keeps its own prompts.rs alongside it.

/// Instruction that enforces raw JSON output, placed after the schema description.
pub const JSON_ONLY_INSTRUCTION: &str = "Output only the raw JSON object and nothing else.";
