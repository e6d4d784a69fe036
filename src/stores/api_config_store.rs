//! API provider configuration store.
//!
//! CRUD for AI provider configurations with single-default bookkeeping.
//! API keys are sealed with AES-256-GCM before they reach the database and
//! opened again on read, so plaintext keys exist only in memory.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::database::Database;
use crate::services::crypto_service::{CryptoService, CryptoServiceTrait, EncryptedData};
use crate::types::api_config::{ApiConfig, ApiConfigInput, ConnectionTest, ProviderKind};
use crate::types::errors::{ApiConfigError, CryptoError};

const API_KEY_PASSPHRASE: &str = "linkstash-api-key-v1";
const API_KEY_SALT: &[u8] = b"linkstash-apikey";

/// Trait defining API configuration operations.
pub trait ApiConfigStoreTrait {
    /// Creates a configuration. The first configuration ever stored becomes
    /// the default. Returns the new id.
    fn add(&mut self, input: ApiConfigInput) -> Result<String, ApiConfigError>;
    /// Replaces an existing configuration's fields. Unknown ids are an error.
    fn update(&mut self, id: &str, input: ApiConfigInput) -> Result<(), ApiConfigError>;
    /// Deletes a configuration. Unknown ids are an error. Deleting the
    /// default promotes another configuration when one remains.
    fn delete(&mut self, id: &str) -> Result<(), ApiConfigError>;
    fn get_all(&self) -> Result<Vec<ApiConfig>, ApiConfigError>;
    fn get_by_id(&self, id: &str) -> Result<Option<ApiConfig>, ApiConfigError>;
    fn get_default(&self) -> Result<Option<ApiConfig>, ApiConfigError>;
    /// Validates a configuration's shape. The real connection probe is an
    /// external service contract; this checks everything verifiable locally.
    fn test_connection(&self, input: &ApiConfigInput) -> ConnectionTest;
}

/// API configuration store over the shared database handle.
pub struct ApiConfigStore {
    db: Arc<Database>,
    crypto: CryptoService,
    encryption_key: Vec<u8>,
}

impl ApiConfigStore {
    pub fn new(db: Arc<Database>) -> Result<Self, CryptoError> {
        let crypto = CryptoService::new();
        let encryption_key = crypto.derive_key(API_KEY_PASSPHRASE, API_KEY_SALT)?;
        Ok(Self {
            db,
            crypto,
            encryption_key,
        })
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    fn validate(input: &ApiConfigInput) -> Result<(), ApiConfigError> {
        if input.name.is_empty() {
            return Err(ApiConfigError::Validation("name must not be empty".to_string()));
        }
        if input.api_key.is_empty() {
            return Err(ApiConfigError::Validation("API key must not be empty".to_string()));
        }
        if input.model.is_empty() {
            return Err(ApiConfigError::Validation("model must not be empty".to_string()));
        }
        if input.provider == ProviderKind::Custom
            && input.endpoint.as_deref().unwrap_or("").is_empty()
        {
            return Err(ApiConfigError::Validation(
                "custom providers require an endpoint".to_string(),
            ));
        }
        Ok(())
    }

    fn seal_key(&self, api_key: &str) -> Result<EncryptedData, ApiConfigError> {
        self.crypto
            .encrypt_aes256gcm(api_key.as_bytes(), &self.encryption_key)
            .map_err(|e| ApiConfigError::Crypto(e.to_string()))
    }

    fn open_key(&self, encrypted: &EncryptedData) -> Result<String, ApiConfigError> {
        let plaintext = self
            .crypto
            .decrypt_aes256gcm(encrypted, &self.encryption_key)
            .map_err(|e| ApiConfigError::Crypto(e.to_string()))?;
        String::from_utf8(plaintext).map_err(|e| ApiConfigError::Crypto(e.to_string()))
    }

    fn encode_params(
        params: &Option<std::collections::HashMap<String, serde_json::Value>>,
    ) -> Result<Option<String>, ApiConfigError> {
        match params {
            Some(map) => serde_json::to_string(map)
                .map(Some)
                .map_err(|e| ApiConfigError::Validation(e.to_string())),
            None => Ok(None),
        }
    }

    fn row_to_config(row: &rusqlite::Row) -> rusqlite::Result<(ApiConfig, EncryptedData)> {
        let provider_str: String = row.get(1)?;
        let params_json: Option<String> = row.get(8)?;
        let encrypted = EncryptedData {
            ciphertext: row.get(3)?,
            iv: row.get(4)?,
            auth_tag: row.get(5)?,
        };

        let config = ApiConfig {
            id: row.get(0)?,
            provider: ProviderKind::from_str(&provider_str).unwrap_or(ProviderKind::Custom),
            name: row.get(2)?,
            api_key: String::new(),
            model: row.get(6)?,
            endpoint: row.get(7)?,
            additional_params: params_json
                .and_then(|json| serde_json::from_str(&json).ok()),
            is_default: row.get::<_, i64>(9)? != 0,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        };
        Ok((config, encrypted))
    }

    fn decrypt_config(
        &self,
        (mut config, encrypted): (ApiConfig, EncryptedData),
    ) -> Result<ApiConfig, ApiConfigError> {
        config.api_key = self.open_key(&encrypted)?;
        Ok(config)
    }

    fn clear_other_defaults(&self, keep_id: &str) -> Result<(), ApiConfigError> {
        self.db
            .connection()
            .execute(
                "UPDATE api_configs SET is_default = 0 WHERE id != ?1",
                params![keep_id],
            )
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn config_count(&self) -> Result<i64, ApiConfigError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM api_configs", [], |row| row.get(0))
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))
    }
}

const CONFIG_COLUMNS: &str = "id, provider, name, encrypted_api_key, iv, auth_tag, \
                              model, endpoint, additional_params, is_default, created_at, updated_at";

impl ApiConfigStoreTrait for ApiConfigStore {
    fn add(&mut self, input: ApiConfigInput) -> Result<String, ApiConfigError> {
        Self::validate(&input)?;

        let mut is_default = input.is_default.unwrap_or(false);
        if !is_default && self.config_count()? == 0 {
            // The first configuration is always the default
            is_default = true;
        }

        let id = Uuid::new_v4().to_string();
        let now = Self::now();
        let encrypted = self.seal_key(&input.api_key)?;
        let params_json = Self::encode_params(&input.additional_params)?;

        self.db
            .connection()
            .execute(
                "INSERT INTO api_configs \
                 (id, provider, name, encrypted_api_key, iv, auth_tag, model, endpoint, \
                  additional_params, is_default, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    id,
                    input.provider.as_str(),
                    input.name,
                    encrypted.ciphertext,
                    encrypted.iv,
                    encrypted.auth_tag,
                    input.model,
                    input.endpoint,
                    params_json,
                    is_default as i64,
                    now,
                    now
                ],
            )
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        if is_default {
            self.clear_other_defaults(&id)?;
        }

        Ok(id)
    }

    fn update(&mut self, id: &str, input: ApiConfigInput) -> Result<(), ApiConfigError> {
        Self::validate(&input)?;

        let existing = self
            .get_by_id(id)?
            .ok_or_else(|| ApiConfigError::NotFound(id.to_string()))?;

        let is_default = input.is_default.unwrap_or(existing.is_default);
        let now = Self::now();
        let encrypted = self.seal_key(&input.api_key)?;
        let params_json = Self::encode_params(&input.additional_params)?;

        self.db
            .connection()
            .execute(
                "UPDATE api_configs SET provider = ?1, name = ?2, encrypted_api_key = ?3, \
                 iv = ?4, auth_tag = ?5, model = ?6, endpoint = ?7, additional_params = ?8, \
                 is_default = ?9, updated_at = ?10 WHERE id = ?11",
                params![
                    input.provider.as_str(),
                    input.name,
                    encrypted.ciphertext,
                    encrypted.iv,
                    encrypted.auth_tag,
                    input.model,
                    input.endpoint,
                    params_json,
                    is_default as i64,
                    now,
                    id
                ],
            )
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        if is_default {
            self.clear_other_defaults(id)?;
        }

        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), ApiConfigError> {
        let existing = self
            .get_by_id(id)?
            .ok_or_else(|| ApiConfigError::NotFound(id.to_string()))?;

        self.db
            .connection()
            .execute("DELETE FROM api_configs WHERE id = ?1", params![id])
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        if existing.is_default {
            // Promote any survivor so a default always exists when configs do
            let survivor: Option<String> = self
                .db
                .connection()
                .query_row("SELECT id FROM api_configs LIMIT 1", [], |row| row.get(0))
                .optional()
                .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

            if let Some(survivor_id) = survivor {
                self.db
                    .connection()
                    .execute(
                        "UPDATE api_configs SET is_default = 1 WHERE id = ?1",
                        params![survivor_id],
                    )
                    .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;
            }
        }

        Ok(())
    }

    fn get_all(&self) -> Result<Vec<ApiConfig>, ApiConfigError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM api_configs ORDER BY created_at",
                CONFIG_COLUMNS
            ))
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_config)
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        let mut configs = Vec::new();
        for row in rows {
            let pair = row.map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;
            configs.push(self.decrypt_config(pair)?);
        }
        Ok(configs)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<ApiConfig>, ApiConfigError> {
        let pair = self
            .db
            .connection()
            .query_row(
                &format!("SELECT {} FROM api_configs WHERE id = ?1", CONFIG_COLUMNS),
                params![id],
                Self::row_to_config,
            )
            .optional()
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        pair.map(|p| self.decrypt_config(p)).transpose()
    }

    fn get_default(&self) -> Result<Option<ApiConfig>, ApiConfigError> {
        let pair = self
            .db
            .connection()
            .query_row(
                &format!(
                    "SELECT {} FROM api_configs WHERE is_default = 1 LIMIT 1",
                    CONFIG_COLUMNS
                ),
                [],
                Self::row_to_config,
            )
            .optional()
            .map_err(|e| ApiConfigError::DatabaseError(e.to_string()))?;

        pair.map(|p| self.decrypt_config(p)).transpose()
    }

    fn test_connection(&self, input: &ApiConfigInput) -> ConnectionTest {
        // Shape checks only; the HTTP probe against the provider's models
        // endpoint belongs to the external backend contract.
        if input.api_key.is_empty() {
            return ConnectionTest {
                success: false,
                message: "API key is required".to_string(),
            };
        }

        if input.provider == ProviderKind::Custom
            && input.endpoint.as_deref().unwrap_or("").is_empty()
        {
            return ConnectionTest {
                success: false,
                message: "Endpoint URL is required for custom providers".to_string(),
            };
        }

        ConnectionTest {
            success: true,
            message: "Connection successful".to_string(),
        }
    }
}
