//! The per-selection pipeline task.

use formdom::{Field, Verdict};
use log::{debug, warn};
use tokio::task::JoinHandle;

use super::{payload, resize};
use crate::config::{FileCallback, FormConfig};
use crate::error::FileError;
use crate::validation::apply_verdict;

/// A processed file selection handed to the embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredFile {
    /// Id of the file field the selection came from.
    pub field_id: String,
    /// Detected content type of the original payload.
    pub content_type: String,
    /// The (possibly resized) payload as a base64 `data:` URI.
    pub contents: String,
}

/// React to a new selection on a file field.
///
/// The extension gate runs synchronously: a selection whose extension is
/// not in the field's accept list is rejected on the spot — error label,
/// cleared cache, callback with the allowed list — and no task is spawned.
/// Accepted selections spawn the pipeline task and return its handle.
///
/// Must be called within a tokio runtime.
pub fn handle_file_selected(field: &Field, config: &FormConfig) -> Option<JoinHandle<()>> {
    let Some(callback) = config.on_select_file.clone() else {
        warn!(
            "file selected on '{}' but no file-selection callback is configured",
            field.field_id()
        );
        return None;
    };

    let path = field.current_value();

    if let Some(accept) = field.accept_list() {
        let allowed = payload::normalize_accept(&accept);
        let ext = payload::extension_of(&path).unwrap_or_default();
        if !allowed.iter().any(|a| *a == ext) {
            field.set_verdict(Some(Verdict::Invalid));
            apply_verdict(field, Verdict::Invalid, config);
            field.clear_cached_value();
            callback(Err(FileError::ExtensionRejected {
                allowed: allowed.join(", "),
            }));
            return None;
        }
    }

    let generation = field.next_generation();
    let field = field.clone();
    Some(tokio::spawn(run(field, generation, path, callback)))
}

async fn run(field: Field, generation: u64, path: String, callback: FileCallback) {
    let result = process(&field, &path).await;

    // A newer selection supersedes this task; its payload must never be
    // cached or delivered.
    if field.current_generation() != generation {
        debug!(
            "discarding stale file task for '{}' (generation {generation})",
            field.field_id()
        );
        return;
    }

    match result {
        Ok(delivered) => {
            field.set_cached_value(&delivered.contents);
            callback(Ok(delivered));
        }
        Err(err) => callback(Err(err)),
    }
}

async fn process(field: &Field, path: &str) -> Result<DeliveredFile, FileError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FileError::Read {
        path: path.to_string(),
        source,
    })?;

    let ext = payload::extension_of(path).unwrap_or_default();
    let mime = payload::mime_for_extension(&ext);
    let mut contents = payload::encode_data_uri(mime, &bytes);

    let content_type = payload::content_type_of(&contents)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    if content_type.starts_with("image/")
        && let Some(max_size) = field.max_dimension()
    {
        let resized = tokio::task::spawn_blocking(move || resize::resize_image(&bytes, max_size))
            .await
            .map_err(|_| FileError::TaskFailed)??;
        if let Some(resized) = resized {
            contents = payload::encode_data_uri("image/jpeg", &resized);
        }
    }

    Ok(DeliveredFile {
        field_id: field.field_id().to_string(),
        content_type,
        contents,
    })
}
