use crate::errors::AppError;
use crate::models::CompletionSet;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/checklist.json"))
}

// Missing or unreadable data means an empty checklist, never a startup
// failure.
pub async fn load_checked(path: &Path) -> CompletionSet {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(checked) => checked,
            Err(err) => {
                error!("failed to parse checklist file: {err}");
                CompletionSet::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => CompletionSet::default(),
        Err(err) => {
            error!("failed to read checklist file: {err}");
            CompletionSet::default()
        }
    }
}

pub async fn persist_checked(path: &Path, checked: &CompletionSet) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(checked).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
