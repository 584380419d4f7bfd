use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::debug;

use crate::error::AppError;

/// Answer-generation backend.
///
/// The engine treats generation as an opaque, synchronous-looking call: one
/// bounded instruction plus the session's prior turns in, one answer string
/// out. The `Fixed` variant serves offline runs and tests.
#[derive(Clone)]
pub struct GenerationProvider {
    inner: GenerationInner,
}

#[derive(Clone)]
enum GenerationInner {
    OpenAI {
        client: Arc<Client<OpenAIConfig>>,
        model: String,
    },
    Fixed {
        reply: String,
    },
    #[cfg(feature = "test-utils")]
    Failing {
        message: String,
    },
}

impl GenerationProvider {
    pub fn new_openai(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self {
            inner: GenerationInner::OpenAI { client, model },
        }
    }

    pub fn new_fixed(reply: impl Into<String>) -> Self {
        Self {
            inner: GenerationInner::Fixed {
                reply: reply.into(),
            },
        }
    }

    /// A backend that fails every call, for exercising failure paths.
    #[cfg(feature = "test-utils")]
    pub fn new_failing(message: impl Into<String>) -> Self {
        Self {
            inner: GenerationInner::Failing {
                message: message.into(),
            },
        }
    }

    pub fn backend_label(&self) -> &'static str {
        match self.inner {
            GenerationInner::OpenAI { .. } => "openai",
            GenerationInner::Fixed { .. } => "fixed",
            #[cfg(feature = "test-utils")]
            GenerationInner::Failing { .. } => "failing",
        }
    }

    /// Sends the bounded instruction together with the per-session history
    /// (previous user turns, oldest first) and returns the trimmed answer.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[String],
        user_message: &str,
    ) -> Result<String, AppError> {
        match &self.inner {
            GenerationInner::Fixed { reply } => Ok(reply.trim().to_string()),
            #[cfg(feature = "test-utils")]
            GenerationInner::Failing { message } => Err(AppError::Generation(message.clone())),
            GenerationInner::OpenAI { client, model } => {
                let mut messages: Vec<ChatCompletionRequestMessage> =
                    Vec::with_capacity(history.len() + 2);
                messages
                    .push(ChatCompletionRequestSystemMessage::from(system_prompt.to_owned()).into());
                for turn in history {
                    messages.push(ChatCompletionRequestUserMessage::from(turn.clone()).into());
                }
                messages.push(ChatCompletionRequestUserMessage::from(user_message.to_owned()).into());

                let request = CreateChatCompletionRequestArgs::default()
                    .model(model)
                    .messages(messages)
                    .build()?;

                let response = client.chat().create(request).await?;
                debug!(
                    model = %model,
                    choices = response.choices.len(),
                    "Received generation response"
                );

                response
                    .choices
                    .first()
                    .and_then(|choice| choice.message.content.as_ref())
                    .map(|content| content.trim().to_string())
                    .ok_or_else(|| {
                        AppError::Generation("No content found in generation response".into())
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_backend_returns_trimmed_reply() {
        let provider = GenerationProvider::new_fixed("  The sky scatters blue light.  ");
        let answer = provider
            .complete("system", &[], "why is the sky blue")
            .await
            .unwrap();
        assert_eq!(answer, "The sky scatters blue light.");
        assert_eq!(provider.backend_label(), "fixed");
    }
}
