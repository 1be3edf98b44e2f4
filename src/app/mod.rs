//! Composition root: builds the store and service from configuration.

use crate::adapters::storage::{FileLocationStore, InMemoryLocationStore, LocalStorage};
use crate::config::{AppConfig, StorageConfig};
use crate::core::service::LocationService;
use crate::core::LocationUseCases;
use crate::utils::error::{LocationError, Result};
use std::path::Path;
use std::sync::Arc;

/// 依設定建立儲存後端並注入服務
pub async fn build_service(config: &AppConfig) -> Result<Arc<dyn LocationUseCases>> {
    build_service_from_storage(&config.storage).await
}

pub async fn build_service_from_storage(
    storage: &StorageConfig,
) -> Result<Arc<dyn LocationUseCases>> {
    match storage.backend.as_str() {
        "memory" => {
            tracing::info!("Using in-memory location store");
            Ok(Arc::new(LocationService::new(InMemoryLocationStore::new())))
        }
        "file" => {
            let (dir, file_name) = split_storage_path(&storage.path)?;
            tracing::info!("Using file location store at {}", storage.path);
            let store = FileLocationStore::open(LocalStorage::new(dir), file_name).await?;
            Ok(Arc::new(LocationService::new(store)))
        }
        other => Err(LocationError::ConfigError {
            field: "storage.backend".to_string(),
            message: format!("Unsupported storage backend '{}'", other),
        }),
    }
}

fn split_storage_path(path: &str) -> Result<(String, String)> {
    let path = Path::new(path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LocationError::ConfigError {
            field: "storage.path".to_string(),
            message: format!("'{}' does not name a file", path.display()),
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    };
    Ok((dir, file_name.to_string()))
}
