// Campus & major recommendation flow.
// Implements: profile validation and summary, prompt building, LLM call,
// narration/speech endpoints and summary export.
// All LLM calls go through llm_client; no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod profile;
pub mod prompts;
pub mod summary;
