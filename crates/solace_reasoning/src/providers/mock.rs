//! Mock completion provider — deterministic replies for tests.

use crate::llm::{ChatClient, CompletionParams};
use anyhow::Result;
use solace_core::ConversationSession;

#[derive(Debug, Clone)]
pub struct MockClient {
    reply: String,
    fail: bool,
}

impl MockClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
        }
    }

    /// A client whose every call fails, for error-path tests.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl ChatClient for MockClient {
    async fn complete(
        &self,
        _session: &ConversationSession,
        _params: CompletionParams,
    ) -> Result<String> {
        if self.fail {
            anyhow::bail!("mock completion failure");
        }
        Ok(self.reply.clone())
    }
}
