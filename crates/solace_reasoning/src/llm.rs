use anyhow::Result;
use async_trait::async_trait;
use solace_core::ConversationSession;

/// Parameters for one completion call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
}

impl CompletionParams {
    /// Opening turns are kept short: the greeting should be a couple of
    /// comforting sentences, not a monologue.
    pub fn opening() -> Self {
        Self {
            max_tokens: 80,
            temperature: 0.7,
        }
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Text-completion capability over a role-tagged message list.
///
/// The one external collaborator of the orchestrator. Implementations
/// must bound the call with a timeout; failures propagate as errors and
/// are never retried here.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        session: &ConversationSession,
        params: CompletionParams,
    ) -> Result<String>;
}
