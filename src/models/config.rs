//! Configuration model loaded from external sources.
//!
//! Every decision about whether a credential is real or a demo placeholder
//! goes through [`is_placeholder_credential`], and the overall runtime mode is
//! resolved once by [`ServerConfig::mode`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fragments that mark a credential as a stand-in rather than a real secret.
const PLACEHOLDER_MARKERS: &[&str] = &[
    "demo",
    "placeholder",
    "your-",
    "your_",
    "changeme",
    "example",
    "xxx",
];

/// Returns `true` when the value is empty or looks like a template placeholder.
pub fn is_placeholder_credential(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    normalized.is_empty()
        || PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| normalized.contains(marker))
}

fn is_real_credential(value: Option<&str>) -> bool {
    value.is_some_and(|v| !is_placeholder_credential(v))
}

/// Whether the application talks to its real collaborators or serves canned data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Demo,
    Production,
}

impl AppMode {
    pub fn is_demo(self) -> bool {
        self == AppMode::Demo
    }
}

impl Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMode::Demo => write!(f, "demo"),
            AppMode::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Settings of the AI completion service proxied by `/api/claude`.
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_version: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 1024,
            api_version: "2023-06-01".to_string(),
        }
    }
}

impl AssistantConfig {
    pub fn is_configured(&self) -> bool {
        is_real_credential(self.api_key.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
/// Application registration used by the mail integration.
pub struct MicrosoftConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub tenant_id: Option<String>,
}

impl MicrosoftConfig {
    pub fn is_configured(&self) -> bool {
        is_real_credential(self.client_id.as_deref())
            && is_real_credential(self.client_secret.as_deref())
            && is_real_credential(self.tenant_id.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Signs session cookies and verifies identity-provider tokens.
    pub secret: String,
    pub auth_service_url: String,
    /// Marks the session cookie `Secure`; enable when served over HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,
    #[serde(default)]
    pub demo_mode: bool,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub microsoft: MicrosoftConfig,
}

impl ServerConfig {
    /// Resolves the runtime mode from the explicit flag and the credentials.
    pub fn mode(&self) -> AppMode {
        if self.demo_mode
            || is_placeholder_credential(&self.database_url)
            || is_placeholder_credential(&self.secret)
        {
            AppMode::Demo
        } else {
            AppMode::Production
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database_url: &str, secret: &str) -> ServerConfig {
        ServerConfig {
            domain: "localhost".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            database_url: database_url.to_string(),
            templates_dir: "templates/**/*".to_string(),
            secret: secret.to_string(),
            auth_service_url: "https://auth.local".to_string(),
            cookie_secure: false,
            demo_mode: false,
            assistant: AssistantConfig::default(),
            microsoft: MicrosoftConfig::default(),
        }
    }

    #[test]
    fn placeholder_markers_are_detected() {
        assert!(is_placeholder_credential(""));
        assert!(is_placeholder_credential("   "));
        assert!(is_placeholder_credential("your-supabase-url"));
        assert!(is_placeholder_credential("YOUR_API_KEY"));
        assert!(is_placeholder_credential("https://demo.supabase.co"));
        assert!(is_placeholder_credential("sk-xxxxxxxx"));
        assert!(!is_placeholder_credential("app.db"));
        assert!(!is_placeholder_credential("sk-ant-api03-7f3a9c"));
    }

    #[test]
    fn real_credentials_resolve_to_production() {
        let cfg = config("data/crm.db", "a1b2c3d4e5f6");
        assert_eq!(cfg.mode(), AppMode::Production);
    }

    #[test]
    fn placeholder_database_or_secret_resolves_to_demo() {
        assert_eq!(config("demo.db", "a1b2c3d4e5f6").mode(), AppMode::Demo);
        assert_eq!(config("data/crm.db", "changeme").mode(), AppMode::Demo);
        assert_eq!(config("", "a1b2c3d4e5f6").mode(), AppMode::Demo);
    }

    #[test]
    fn explicit_flag_forces_demo() {
        let mut cfg = config("data/crm.db", "a1b2c3d4e5f6");
        cfg.demo_mode = true;
        assert_eq!(cfg.mode(), AppMode::Demo);
    }

    #[test]
    fn integrations_require_every_credential() {
        let mut microsoft = MicrosoftConfig {
            client_id: Some("3f1c".to_string()),
            client_secret: Some("s3cr3t".to_string()),
            tenant_id: None,
        };
        assert!(!microsoft.is_configured());
        microsoft.tenant_id = Some("contoso-tenant".to_string());
        assert!(microsoft.is_configured());

        let assistant = AssistantConfig {
            api_key: Some("your_api_key".to_string()),
            ..AssistantConfig::default()
        };
        assert!(!assistant.is_configured());
    }

    #[test]
    fn secure_cookies_are_opt_in() {
        let minimal = serde_json::json!({
            "domain": "crm.example.org",
            "address": "0.0.0.0",
            "port": 8080,
            "database_url": "data/crm.db",
            "templates_dir": "templates/**/*",
            "secret": "a1b2c3d4e5f6",
            "auth_service_url": "https://auth.example.org/signin"
        });
        let cfg: ServerConfig = serde_json::from_value(minimal.clone()).unwrap();
        assert!(!cfg.cookie_secure);

        let mut secured = minimal;
        secured["cookie_secure"] = serde_json::Value::Bool(true);
        let cfg: ServerConfig = serde_json::from_value(secured).unwrap();
        assert!(cfg.cookie_secure);
    }
}
