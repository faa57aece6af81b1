//! Clients for the third-party services the CRM talks to.

use thiserror::Error;

use crate::models::config::{AppMode, ServerConfig};

pub mod anthropic;

pub use anthropic::AnthropicClient;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Outbound integrations resolved once at startup.
pub struct Integrations {
    /// `None` when the assistant is unconfigured or the app runs in demo mode.
    pub assistant: Option<AnthropicClient>,
    pub assistant_model: String,
    /// Whether mail-integration credentials are present.
    pub microsoft_connected: bool,
    pub mode: AppMode,
}

impl Integrations {
    pub fn from_config(config: &ServerConfig) -> Result<Self, IntegrationError> {
        let mode = config.mode();

        let assistant = if !mode.is_demo() && config.assistant.is_configured() {
            Some(AnthropicClient::new(&config.assistant)?)
        } else {
            log::info!("AI assistant disabled, serving canned completions");
            None
        };

        Ok(Self {
            assistant,
            assistant_model: config.assistant.model.clone(),
            microsoft_connected: !mode.is_demo() && config.microsoft.is_configured(),
            mode,
        })
    }
}
