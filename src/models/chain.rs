use serde::{Deserialize, Serialize};

/// Display metadata for a chain. Derived locally, never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    pub color: String,
}

/// Outcome of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEntry {
    Known(ChainInfo),
    Synthesized(ChainInfo),
}

impl ChainEntry {
    pub fn info(&self) -> &ChainInfo {
        match self {
            ChainEntry::Known(info) | ChainEntry::Synthesized(info) => info,
        }
    }

    pub fn into_info(self) -> ChainInfo {
        match self {
            ChainEntry::Known(info) | ChainEntry::Synthesized(info) => info,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ChainEntry::Known(_))
    }
}
