//! JSON dump of the collected snapshot.

use std::path::Path;

use metrocollect_core::CollectedData;

/// Serializes the snapshot with human-readable indentation and overwrites
/// `path`, creating parent directories as needed. Non-ASCII names are
/// written verbatim, not escaped.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, serialization
/// fails, or the file cannot be written.
pub async fn dump(path: &Path, data: &CollectedData) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tracing::debug!(path = %path.display(), "writing collected products data");
    let json = serde_json::to_vec_pretty(data)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
