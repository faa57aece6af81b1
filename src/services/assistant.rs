//! AI sales assistant backed by the completion API, with a canned fallback.

use crate::forms::assistant::{CompletionForm, CompletionPayload};
use crate::integrations::Integrations;
use crate::integrations::anthropic::{AnthropicClient, Usage};
use crate::models::config::AppMode;
use crate::services::ServiceResult;

const DEMO_RESPONSE: &str = "This is a demo response from the AI sales assistant. \
Connect an API key to get real answers. A good next step for any open lead is to \
confirm the economic buyer, the decision criteria and the timeline, then log them \
against the opportunity so the pipeline review stays honest.";

#[derive(Debug, PartialEq, Eq)]
pub struct AssistantReply {
    pub response: String,
    pub model: String,
    pub usage: Usage,
    pub demo: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AssistantStatus {
    pub configured: bool,
    pub model: String,
    pub mode: AppMode,
}

fn demo_reply(payload: &CompletionPayload, model: &str) -> AssistantReply {
    AssistantReply {
        response: DEMO_RESPONSE.to_string(),
        model: model.to_string(),
        usage: Usage {
            input_tokens: payload.prompt.split_whitespace().count() as u32,
            output_tokens: DEMO_RESPONSE.split_whitespace().count() as u32,
        },
        demo: true,
    }
}

/// Answers a prompt through `client`, or with a canned reply when no client is available.
pub async fn complete(
    client: Option<&AnthropicClient>,
    fallback_model: &str,
    form: CompletionForm,
) -> ServiceResult<AssistantReply> {
    let payload = CompletionPayload::try_from(form)?;

    let Some(client) = client else {
        return Ok(demo_reply(&payload, fallback_model));
    };

    let completion = client
        .complete(&payload.prompt, payload.system.as_deref(), payload.max_tokens)
        .await?;

    log::info!(
        "assistant completion with {} used {} input and {} output tokens",
        completion.model,
        completion.usage.input_tokens,
        completion.usage.output_tokens
    );

    Ok(AssistantReply {
        response: completion.text,
        model: completion.model,
        usage: completion.usage,
        demo: false,
    })
}

pub fn status(integrations: &Integrations) -> AssistantStatus {
    AssistantStatus {
        configured: integrations.assistant.is_some(),
        model: integrations.assistant_model.clone(),
        mode: integrations.mode,
    }
}
