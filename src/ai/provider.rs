//! Narrative provider trait for abstracting LLM interactions.
//!
//! This trait is the seam between the analysis pipeline and whichever
//! chat-completion backend produces the narrative. Production code uses
//! [`super::OpenAiProvider`]; tests substitute a canned implementation
//! without touching the network or the process environment.

use crate::error::Result;

/// Trait for backends that can turn an analysis prompt into a narrative.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Error Handling
///
/// A failed generation is fatal to the run: implementations surface
/// transport and protocol failures as
/// [`ReportError::NarrativeGeneration`](crate::error::ReportError), and the
/// pipeline aborts before report assembly rather than emitting a report
/// with an empty narrative.
pub trait NarrativeProvider: Send + Sync {
    /// Produce the narrative text for a fully constructed analysis prompt.
    ///
    /// Exactly one request is made per call; there is no retry.
    fn generate_narrative(&self, prompt: &str) -> Result<String>;

    /// Get the provider name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Get the model used by this provider, when it exposes one.
    fn model(&self) -> Option<&str> {
        None
    }
}
