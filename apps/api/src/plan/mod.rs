// Plan generation: prompt → one LLM call → extract → parse → shape check.
// All LLM calls go through llm_client — no direct gateway calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod validation;
