//! The full configuration document

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AgentsConfig, ChannelsConfig, GatewayConfig, ProvidersConfig, SchemaError, Section,
    ToolsConfig,
};

/// Configuration partitioned into the fixed set of sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub channels: ChannelsConfig,

    #[serde(default)]
    pub agents: AgentsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl ConfigDocument {
    /// Untyped view of one section
    pub fn section(&self, section: Section) -> serde_json::Result<Value> {
        match section {
            Section::Providers => serde_json::to_value(&self.providers),
            Section::Channels => serde_json::to_value(&self.channels),
            Section::Agents => serde_json::to_value(&self.agents),
            Section::Tools => serde_json::to_value(&self.tools),
            Section::Gateway => serde_json::to_value(&self.gateway),
        }
    }

    /// Validate `value` against the section's schema and assign it.
    ///
    /// On error the document is left untouched.
    pub fn set_section(&mut self, section: Section, value: Value) -> Result<(), SchemaError> {
        match section {
            Section::Providers => self.providers = validate(section, value)?,
            Section::Channels => self.channels = validate(section, value)?,
            Section::Agents => self.agents = validate(section, value)?,
            Section::Tools => self.tools = validate(section, value)?,
            Section::Gateway => self.gateway = validate(section, value)?,
        }
        Ok(())
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

fn validate<T: DeserializeOwned>(section: Section, value: Value) -> Result<T, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::NotAMapping { section });
    }
    serde_json::from_value(value).map_err(|source| SchemaError::Invalid { section, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_has_every_section() {
        let value = ConfigDocument::default().to_value().unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["providers", "channels", "agents", "tools", "gateway"]);
    }

    #[test]
    fn test_set_section_round_trips() {
        let mut doc = ConfigDocument::default();
        doc.set_section(
            Section::Providers,
            json!({"openai": {"api_key": "sk-ABCDEFGH"}}),
        )
        .unwrap();

        assert_eq!(doc.providers.openai.api_key, "sk-ABCDEFGH");
        let section = doc.section(Section::Providers).unwrap();
        assert_eq!(section["openai"]["api_key"], "sk-ABCDEFGH");
        assert_eq!(section["openai"]["api_base"], Value::Null);
    }

    #[test]
    fn test_set_section_rejects_invalid_value() {
        let mut doc = ConfigDocument::default();
        let err = doc
            .set_section(Section::Gateway, json!({"port": "not-a-port"}))
            .unwrap_err();

        assert_eq!(err.section(), Section::Gateway);
        assert!(matches!(err, SchemaError::Invalid { .. }));
        assert_eq!(doc, ConfigDocument::default());
    }

    #[test]
    fn test_set_section_rejects_non_mapping() {
        let mut doc = ConfigDocument::default();
        let err = doc.set_section(Section::Tools, json!(["exec"])).unwrap_err();
        assert!(matches!(err, SchemaError::NotAMapping { section: Section::Tools }));
    }

    #[test]
    fn test_missing_sections_default_on_load() {
        let doc: ConfigDocument =
            serde_json::from_value(json!({"gateway": {"port": 9001}})).unwrap();
        assert_eq!(doc.gateway.port, 9001);
        assert_eq!(doc.agents, AgentsConfig::default());
    }
}
