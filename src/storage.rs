use crate::errors::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

// Storage key names match the original browser-storage keys.
pub const INCOMES_KEY: &str = "incomes";
pub const EXPENSES_KEY: &str = "expenses";
pub const CHAT_HISTORY_KEY: &str = "chatHistory";
pub const THEME_KEY: &str = "theme";

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Read one stored key. A missing file is an empty store; a parse failure is
/// logged and treated the same way rather than taking the server down.
pub async fn load_key<T>(dir: &Path, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(key_path(dir, key)).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse stored key {key}: {err}");
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read stored key {key}: {err}");
            T::default()
        }
    }
}

/// Write the whole value for a key (snapshot semantics).
pub async fn persist_key<T: Serialize>(dir: &Path, key: &str, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(key_path(dir, key), payload)
        .await
        .map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LedgerEntry;
    use chrono::Utc;

    fn unique_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("moneymate_storage_{}_{}", std::process::id(), nanos));
        dir
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let dir = unique_dir();
        fs::create_dir_all(&dir).await.unwrap();

        let entries = vec![LedgerEntry {
            description: "salary".to_string(),
            amount: 1200.5,
            date: Utc::now(),
        }];
        persist_key(&dir, INCOMES_KEY, &entries).await.unwrap();

        let loaded: Vec<LedgerEntry> = load_key(&dir, INCOMES_KEY).await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "salary");
        assert_eq!(loaded[0].amount, 1200.5);
    }

    #[tokio::test]
    async fn missing_key_loads_default() {
        let dir = unique_dir();
        fs::create_dir_all(&dir).await.unwrap();

        let loaded: Vec<LedgerEntry> = load_key(&dir, EXPENSES_KEY).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn corrupt_key_loads_default() {
        let dir = unique_dir();
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(key_path(&dir, THEME_KEY), b"{not json")
            .await
            .unwrap();

        let loaded: String = load_key(&dir, THEME_KEY).await;
        assert!(loaded.is_empty());
    }
}
