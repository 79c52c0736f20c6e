use crate::errors::AppError;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the investments document from disk. Called per request so edits to
/// the file show up without a restart.
pub async fn load_investments(path: &Path) -> Result<Value, AppError> {
    let bytes = fs::read(path).await.map_err(|err| {
        error!("failed to read investments file {}: {err}", path.display());
        AppError::internal(err)
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse investments file {}: {err}", path.display());
        AppError::internal(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("finmate_storage_{}_{name}", std::process::id()));
        path
    }

    #[tokio::test]
    async fn loads_json_document() {
        let path = scratch_path("ok.json");
        fs::write(&path, br#"{"holdings":[{"symbol":"VFV","value":1200}]}"#)
            .await
            .unwrap();

        let value = load_investments(&path).await.unwrap();
        assert_eq!(value["holdings"][0]["symbol"], "VFV");

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_file_is_internal_error() {
        let err = load_investments(&scratch_path("missing.json"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn malformed_file_is_internal_error() {
        let path = scratch_path("bad.json");
        fs::write(&path, b"{ not json").await.unwrap();

        let err = load_investments(&path).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let _ = fs::remove_file(&path).await;
    }
}
