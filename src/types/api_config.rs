use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Supported AI provider kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    GoogleAi,
    Cohere,
    Custom,
}

impl ProviderKind {
    /// Stable string form used in the database and catalog lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::GoogleAi => "google",
            ProviderKind::Cohere => "cohere",
            ProviderKind::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "openai" => Some(ProviderKind::OpenAi),
            "anthropic" => Some(ProviderKind::Anthropic),
            "google" => Some(ProviderKind::GoogleAi),
            "cohere" => Some(ProviderKind::Cohere),
            "custom" => Some(ProviderKind::Custom),
            _ => None,
        }
    }
}

/// Input type of an extra provider parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Text,
    Number,
    Boolean,
    Select,
}

/// An extra parameter a provider declares beyond key/model/endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderParam {
    pub name: String,
    pub key: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<serde_json::Value>,
    pub options: Vec<(String, String)>,
    pub description: Option<String>,
}

/// Static catalog entry describing an AI provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProvider {
    pub kind: ProviderKind,
    pub display_name: String,
    pub supports_custom_endpoint: bool,
    pub default_endpoint: Option<String>,
    pub models: Vec<String>,
    pub additional_params: Vec<ProviderParam>,
}

/// A stored provider configuration.
///
/// `api_key` is plaintext only in memory; the store persists it encrypted.
/// At most one configuration is the default whenever any exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub id: String,
    pub provider: ProviderKind,
    pub name: String,
    pub api_key: String,
    pub model: String,
    pub endpoint: Option<String>,
    pub additional_params: Option<HashMap<String, serde_json::Value>>,
    pub is_default: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for creating or updating a provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfigInput {
    pub provider: ProviderKind,
    pub name: String,
    pub api_key: String,
    pub model: String,
    pub endpoint: Option<String>,
    pub additional_params: Option<HashMap<String, serde_json::Value>>,
    pub is_default: Option<bool>,
}

/// Outcome of a configuration connection test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTest {
    pub success: bool,
    pub message: String,
}
