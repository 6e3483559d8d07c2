use salon_service::store::InMemoryStore;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Builds the in-memory store, seeded from a JSON array of drafts when a
/// seed file is configured.
///
/// ## Errors
/// Returns an error if the file cannot be read or does not hold valid drafts.
#[tracing::instrument]
pub async fn load_store(seed_file: Option<&str>) -> AppResult<InMemoryStore> {
    let Some(path) = seed_file else {
        tracing::debug!("No seed file configured, starting empty");
        return Ok(InMemoryStore::new());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::SeedFile {
            path: path.to_string(),
            source,
        })?;
    let store = InMemoryStore::from_seed_json(&json)?;
    tracing::info!(path, "Seeded appointment store");
    Ok(store)
}
