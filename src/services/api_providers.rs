//! Static catalog of supported AI providers.
//!
//! The catalog drives the (external) settings UI: which providers exist,
//! their models, whether a custom endpoint is allowed, and any extra
//! parameters a provider declares.

use serde_json::json;

use crate::types::api_config::{ApiProvider, ParamType, ProviderKind, ProviderParam};

/// Returns the full provider catalog, in display order.
pub fn providers() -> Vec<ApiProvider> {
    vec![
        ApiProvider {
            kind: ProviderKind::OpenAi,
            display_name: "OpenAI".to_string(),
            supports_custom_endpoint: true,
            default_endpoint: Some("https://api.openai.com/v1".to_string()),
            models: vec![
                "gpt-4".to_string(),
                "gpt-4-turbo".to_string(),
                "gpt-3.5-turbo".to_string(),
                "gpt-3.5-turbo-16k".to_string(),
                "text-embedding-ada-002".to_string(),
            ],
            additional_params: vec![ProviderParam {
                name: "Organization ID".to_string(),
                key: "organization".to_string(),
                param_type: ParamType::Text,
                required: false,
                default: None,
                options: vec![],
                description: Some("OpenAI organization ID (if applicable)".to_string()),
            }],
        },
        ApiProvider {
            kind: ProviderKind::Anthropic,
            display_name: "Anthropic".to_string(),
            supports_custom_endpoint: false,
            default_endpoint: Some("https://api.anthropic.com".to_string()),
            models: vec![
                "claude-3-opus-20240229".to_string(),
                "claude-3-sonnet-20240229".to_string(),
                "claude-3-haiku-20240307".to_string(),
                "claude-2.1".to_string(),
                "claude-2.0".to_string(),
                "claude-instant-1.2".to_string(),
            ],
            additional_params: vec![],
        },
        ApiProvider {
            kind: ProviderKind::GoogleAi,
            display_name: "Google AI".to_string(),
            supports_custom_endpoint: false,
            default_endpoint: Some("https://generativelanguage.googleapis.com".to_string()),
            models: vec![
                "gemini-pro".to_string(),
                "gemini-pro-vision".to_string(),
                "gemini-ultra".to_string(),
                "text-embedding-gecko".to_string(),
            ],
            additional_params: vec![],
        },
        ApiProvider {
            kind: ProviderKind::Cohere,
            display_name: "Cohere".to_string(),
            supports_custom_endpoint: false,
            default_endpoint: Some("https://api.cohere.ai/v1".to_string()),
            models: vec![
                "command".to_string(),
                "command-light".to_string(),
                "command-nightly".to_string(),
                "embed-english-v3.0".to_string(),
                "embed-multilingual-v3.0".to_string(),
            ],
            additional_params: vec![],
        },
        ApiProvider {
            kind: ProviderKind::Custom,
            display_name: "Custom Provider".to_string(),
            supports_custom_endpoint: true,
            default_endpoint: None,
            models: vec!["custom".to_string()],
            additional_params: vec![
                ProviderParam {
                    name: "Request Headers".to_string(),
                    key: "headers".to_string(),
                    param_type: ParamType::Text,
                    required: false,
                    default: None,
                    options: vec![],
                    description: Some("Additional headers in JSON format".to_string()),
                },
                ProviderParam {
                    name: "Request Format".to_string(),
                    key: "requestFormat".to_string(),
                    param_type: ParamType::Select,
                    required: true,
                    default: Some(json!("openai")),
                    options: vec![
                        ("openai".to_string(), "OpenAI-compatible".to_string()),
                        ("anthropic".to_string(), "Anthropic-compatible".to_string()),
                        ("custom".to_string(), "Custom (requires implementation)".to_string()),
                    ],
                    description: Some("Format of API requests".to_string()),
                },
            ],
        },
    ]
}

/// Looks up a provider by kind.
pub fn provider_by_kind(kind: ProviderKind) -> Option<ApiProvider> {
    providers().into_iter().find(|p| p.kind == kind)
}
