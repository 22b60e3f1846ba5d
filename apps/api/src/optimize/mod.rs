// Résumé optimization: validate, build the prompt, call the generator, read the reply.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
