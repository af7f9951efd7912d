pub mod engine;
pub mod llm;
pub mod prompts;
pub mod providers;

pub use engine::{ConversationEngine, Followup, Opening};
pub use llm::{ChatClient, CompletionParams};
pub use providers::{MockClient, OpenAiClient};
