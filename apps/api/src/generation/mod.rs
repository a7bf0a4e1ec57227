// Curriculum generation: parameter collection, prompt + schema contract,
// the model round trip, and reply validation.
// All model calls go through llm_client.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod validation;
