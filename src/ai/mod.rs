//! Narrative generation via an external LLM endpoint.
//!
//! The [`NarrativeProvider`] trait abstracts the chat-completion backend;
//! [`OpenAiProvider`] is the production implementation. Prompt construction
//! lives in [`prompt`] so it can be tested without a provider.

mod openai;
mod prompt;
mod provider;

pub use openai::{OpenAiConfig, OpenAiConfigBuilder, OpenAiProvider};
pub use prompt::{SYSTEM_PROMPT, build_analysis_prompt};
pub use provider::NarrativeProvider;
