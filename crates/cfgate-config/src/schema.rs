//! Typed schemas for each configuration section
//!
//! Every field has a default, so a partially populated section deserializes
//! into a complete one. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// providers
// ============================================================================

/// Credentials for one LLM provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub anthropic: ProviderConfig,
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub openrouter: ProviderConfig,
    #[serde(default)]
    pub deepseek: ProviderConfig,
    #[serde(default)]
    pub groq: ProviderConfig,
    #[serde(default)]
    pub gemini: ProviderConfig,
    #[serde(default)]
    pub zhipu: ProviderConfig,
    #[serde(default)]
    pub moonshotai: ProviderConfig,
    #[serde(default)]
    pub nvidia: ProviderConfig,
    #[serde(default)]
    pub minimax: ProviderConfig,
}

// ============================================================================
// channels
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub allow_from: Vec<String>,

    /// HTTP or SOCKS5 proxy URL
    #[serde(default)]
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_bridge_url")]
    pub bridge_url: String,

    #[serde(default)]
    pub allow_from: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub allow_from: Vec<String>,

    #[serde(default = "default_discord_gateway_url")]
    pub gateway_url: String,

    #[serde(default = "default_discord_intents")]
    pub intents: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bridge_url: default_bridge_url(),
            allow_from: Vec::new(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            token: String::new(),
            allow_from: Vec::new(),
            gateway_url: default_discord_gateway_url(),
            intents: default_discord_intents(),
        }
    }
}

fn default_bridge_url() -> String {
    "ws://localhost:3001".to_string()
}

fn default_discord_gateway_url() -> String {
    "wss://gateway.discord.gg/?v=10&encoding=json".to_string()
}

fn default_discord_intents() -> u64 {
    // GUILDS | GUILD_MESSAGES | DIRECT_MESSAGES | MESSAGE_CONTENT
    37377
}

// ============================================================================
// agents
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaults {
    #[serde(default = "default_workspace")]
    pub workspace: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tool_iterations")]
    pub max_tool_iterations: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub defaults: AgentDefaults,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_tool_iterations: default_max_tool_iterations(),
        }
    }
}

fn default_workspace() -> String {
    "~/.cfgate/workspace".to_string()
}

fn default_model() -> String {
    "anthropic/claude-opus-4-5".to_string()
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tool_iterations() -> u32 {
    20
}

// ============================================================================
// tools
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSearchConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebToolsConfig {
    #[serde(default)]
    pub search: WebSearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecToolConfig {
    /// Seconds before a shell command is killed
    #[serde(default = "default_exec_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub restrict_to_workspace: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub web: WebToolsConfig,
    #[serde(default)]
    pub exec: ExecToolConfig,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ExecToolConfig {
    fn default() -> Self {
        Self {
            timeout: default_exec_timeout(),
            restrict_to_workspace: false,
        }
    }
}

fn default_max_results() -> u32 {
    5
}

fn default_exec_timeout() -> u64 {
    60
}

// ============================================================================
// gateway
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_host")]
    pub host: String,

    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "0.0.0.0".to_string()
}

fn default_gateway_port() -> u16 {
    18790
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_section_fills_defaults() {
        let agents: AgentsConfig =
            serde_json::from_value(json!({"defaults": {"model": "openai/gpt-5"}})).unwrap();
        assert_eq!(agents.defaults.model, "openai/gpt-5");
        assert_eq!(agents.defaults.max_tokens, 8192);
        assert_eq!(agents.defaults.max_tool_iterations, 20);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let gateway: GatewayConfig =
            serde_json::from_value(json!({"port": 9000, "legacy": true})).unwrap();
        assert_eq!(gateway.port, 9000);
        assert_eq!(gateway.host, "0.0.0.0");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(serde_json::from_value::<GatewayConfig>(json!({"port": "high"})).is_err());
        assert!(serde_json::from_value::<GatewayConfig>(json!({"port": 70000})).is_err());
        assert!(serde_json::from_value::<ProvidersConfig>(json!({"openai": "sk-x"})).is_err());
    }

    #[test]
    fn test_channel_defaults() {
        let channels = ChannelsConfig::default();
        assert!(!channels.telegram.enabled);
        assert_eq!(channels.whatsapp.bridge_url, "ws://localhost:3001");
        assert_eq!(channels.discord.intents, 37377);
    }
}
