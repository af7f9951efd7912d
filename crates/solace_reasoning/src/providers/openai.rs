use crate::llm::{ChatClient, CompletionParams};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use solace_core::ConversationSession;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(model: &str) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| "mock".to_string());
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()?,
            api_key,
            base_url,
            model: model.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(
        &self,
        session: &ConversationSession,
        params: CompletionParams,
    ) -> Result<String> {
        if self.api_key == "mock" {
            tokio::time::sleep(Duration::from_millis(500)).await;
            return Ok(format!(
                "(Mock OpenAI Response) I received {} message(s).",
                session.len()
            ));
        }

        let payload = json!({
            "model": self.model,
            "messages": session.messages(),
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API Error: {}", error_text);
        }

        let resp_json: Value = response.json().await?;
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .context("Failed to parse response content")?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::{ChatMessage, Role};

    #[test]
    fn test_session_serializes_to_openai_wire_shape() {
        let session = ConversationSession::followup("be kind", "hi");
        let wire = serde_json::to_value(session.messages()).unwrap();
        assert_eq!(wire[0]["role"], "system");
        assert_eq!(wire[1]["role"], "user");
        assert_eq!(wire[1]["content"], "hi");

        let reply = ChatMessage {
            role: Role::Assistant,
            content: "hello".into(),
        };
        let wire = serde_json::to_value([reply]).unwrap();
        assert_eq!(wire[0]["role"], "assistant");
    }

    #[tokio::test]
    async fn test_mock_key_short_circuits() {
        // No OPENAI_API_KEY in the test environment means the client
        // falls back to the mock key and never touches the network.
        if env::var("OPENAI_API_KEY").is_ok() {
            return;
        }
        let client = OpenAiClient::new("gpt-3.5-turbo").unwrap();
        let session = ConversationSession::opening("say hi");
        let reply = client
            .complete(&session, CompletionParams::opening())
            .await
            .unwrap();
        assert!(reply.contains("Mock"));
    }
}
