//! Configuration entry management.

use std::sync::Arc;

use serde_json::json;

use crate::application::commands::DeleteConfigCommand;
use crate::domain::entities::ConfigEntry;
use crate::domain::repositories::ConfigRepository;
use crate::error::AppError;

/// Service for key/value configuration entries.
pub struct ConfigService {
    config_repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(config_repository: Arc<dyn ConfigRepository>) -> Self {
        Self { config_repository }
    }

    /// Fetches a configuration entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key does not exist.
    pub async fn get(&self, key: &str) -> Result<ConfigEntry, AppError> {
        self.config_repository.get(key).await?.ok_or_else(|| {
            AppError::not_found("Config entry not found", json!({ "key": key }))
        })
    }

    /// Creates or replaces a configuration entry.
    pub async fn set(&self, key: &str, value: &str) -> Result<ConfigEntry, AppError> {
        self.config_repository.set(key, value).await
    }

    /// Deletes the entry named by the command.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key does not exist.
    pub async fn delete(&self, command: DeleteConfigCommand) -> Result<(), AppError> {
        let deleted = self.config_repository.delete(command.key()).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Config entry not found",
                json!({ "key": command.key() }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockConfigRepository;

    #[tokio::test]
    async fn test_delete_missing_key_is_not_found() {
        let mut repo = MockConfigRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ConfigService::new(Arc::new(repo));
        let command = DeleteConfigCommand::new("absent.key").unwrap();
        let err = service.delete(command).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_existing_key() {
        let mut repo = MockConfigRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = ConfigService::new(Arc::new(repo));
        let command = DeleteConfigCommand::new("feature.flags").unwrap();

        assert!(service.delete(command).await.is_ok());
    }
}
