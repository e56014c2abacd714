// Profile matching via the completion service.
// Implements: prompt building, reply parsing, the match store and request sequencing.
// All completion calls go through llm_client.

pub mod handlers;
pub mod matchmaker;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod request;
pub mod store;
