//! Payload for prompts proxied through `POST /api/claude`.

use serde::Deserialize;
use validator::Validate;

use crate::forms::{FormError, non_blank, required};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CompletionForm {
    #[serde(default)]
    #[validate(length(max = 20000))]
    pub prompt: String,
    #[validate(length(max = 10000))]
    pub system: Option<String>,
    #[validate(range(min = 1, max = 4096))]
    pub max_tokens: Option<u32>,
}

/// A validated prompt ready to be sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: Option<u32>,
}

impl TryFrom<CompletionForm> for CompletionPayload {
    type Error = FormError;

    fn try_from(form: CompletionForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            prompt: required(&form.prompt, "prompt")?,
            system: non_blank(form.system),
            max_tokens: form.max_tokens,
        })
    }
}
