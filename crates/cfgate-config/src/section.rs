use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::UnknownSection;

/// Independently addressable partition of the configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Providers,
    Channels,
    Agents,
    Tools,
    Gateway,
}

impl Section {
    /// Every valid section, in document order
    pub const ALL: [Section; 5] = [
        Section::Providers,
        Section::Channels,
        Section::Agents,
        Section::Tools,
        Section::Gateway,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Providers => "providers",
            Section::Channels => "channels",
            Section::Agents => "agents",
            Section::Tools => "tools",
            Section::Gateway => "gateway",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    /// Names are matched exactly; `Providers` is not a section.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_unknown_section() {
        let err = "secrets".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("secrets".to_string()));
        assert_eq!(err.to_string(), "Unknown section: secrets");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Providers".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Section::Gateway).unwrap();
        assert_eq!(json, "\"gateway\"");
    }
}
