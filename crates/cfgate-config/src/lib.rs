//! Configuration types for cfgate
//!
//! This crate contains:
//! - The closed set of document sections
//! - Typed section schemas and the `ConfigDocument` they form
//! - Settings for the cfgate service itself (`cfgate.toml`)

pub mod document;
pub mod error;
pub mod schema;
pub mod section;
pub mod settings;

pub use document::ConfigDocument;
pub use error::{SchemaError, UnknownSection};
pub use schema::{
    AgentDefaults, AgentsConfig, ChannelsConfig, DiscordConfig, ExecToolConfig, GatewayConfig,
    ProviderConfig, ProvidersConfig, TelegramConfig, ToolsConfig, WebSearchConfig,
    WebToolsConfig, WhatsAppConfig,
};
pub use section::Section;
pub use settings::{ServerSettings, Settings, StoreSettings};
